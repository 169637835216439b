//! Stream driver
//!
//! Owns the end-to-end sequencing: Idle → Connecting → Streaming →
//! Terminated. Terminated is absorbing; there is no retry and no
//! reconnection. Terminal `Complete`/`Error` events are informational only;
//! the driver keeps reading until the server closes the connection or the
//! caller's shutdown future fires.

use crate::client::RecommendClient;
use crate::stream::decode::decode_event;
use crate::stream::dispatch::{Dispatcher, EventSink};
use crate::stream::frame::frame_stream;
use bytes::Bytes;
use futures::stream::{Stream, StreamExt};
use nexttrack_common::{RecommendRequest, Result};
use std::future::Future;
use tracing::{debug, info, warn};

/// Outcome of one streaming session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamSummary {
    /// Events that reached the dispatcher (skipped frames excluded)
    pub events_dispatched: usize,
    /// `Candidate` events among them
    pub candidates: usize,
    /// Terminal event seen, if any ("Complete" or "Error")
    pub terminal: Option<&'static str>,
    /// True when the shutdown future ended the session
    pub cancelled: bool,
}

/// Issue the request and drive the full pipeline to completion.
///
/// Connection failure is the only error before streaming begins; a failed
/// read after that propagates out of the pump. Both leave the caller with a
/// single reported failure and no retry.
pub async fn run_stream<S>(
    client: &RecommendClient,
    request: &RecommendRequest,
    dispatcher: &mut Dispatcher<S>,
    shutdown: impl Future<Output = ()>,
) -> Result<StreamSummary>
where
    S: EventSink,
{
    let chunks = client.open_stream(request).await?;
    info!("Connected, streaming recommendations");
    pump_events(chunks, dispatcher, shutdown).await
}

/// Drive an already-open chunk stream through accumulator → decoder →
/// dispatcher, one event at a time, until end-of-stream or cancellation.
///
/// Cancellation is observed between reads: once the shutdown future fires no
/// new read is initiated and the chunk stream drops, releasing the
/// connection. An event decoded before the signal may already have been
/// dispatched.
pub async fn pump_events<C, S>(
    chunks: C,
    dispatcher: &mut Dispatcher<S>,
    shutdown: impl Future<Output = ()>,
) -> Result<StreamSummary>
where
    C: Stream<Item = Result<Bytes>>,
    S: EventSink,
{
    let frames = frame_stream(chunks);
    tokio::pin!(frames);
    tokio::pin!(shutdown);

    let mut events_dispatched = 0usize;
    let mut cancelled = false;

    loop {
        tokio::select! {
            biased;

            _ = &mut shutdown => {
                info!("Cancellation requested, closing stream");
                cancelled = true;
                break;
            }

            next = frames.next() => match next {
                Some(Ok(frame)) => {
                    if let Some(event) = decode_event(&frame) {
                        debug!(event_type = event.event_type(), "Dispatching event");
                        dispatcher.dispatch(&event);
                        events_dispatched += 1;
                    }
                }
                Some(Err(e)) => return Err(e),
                None => {
                    debug!("Server closed the stream");
                    break;
                }
            }
        }
    }

    let terminal = dispatcher.terminal();
    if !cancelled && terminal.is_none() {
        // Normal termination for this client, but worth a trace
        warn!("Stream closed without a Complete or Error event");
    }

    Ok(StreamSummary {
        events_dispatched,
        candidates: dispatcher.candidates_seen(),
        terminal,
        cancelled,
    })
}
