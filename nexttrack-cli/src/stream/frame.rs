//! Frame accumulation
//!
//! The wire format frames one event per line as `data: <json>\n`. Transport
//! chunks arrive with boundaries anywhere, including mid-line and inside a
//! multi-byte character, so bytes are buffered until a full line is present.
//! Lines without the `data: ` marker (blank separators, comments, `event:`
//! fields) carry no frame boundary significance and are dropped; each data
//! line already holds one complete JSON payload.

use bytes::Bytes;
use futures::stream::{Stream, StreamExt};
use nexttrack_common::Result;

const DATA_PREFIX: &str = "data: ";

/// One self-contained payload, isolated from framing syntax.
///
/// Ephemeral: produced per qualifying line and consumed immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame(String);

impl Frame {
    pub fn payload(&self) -> &str {
        &self.0
    }
}

/// Accumulates transport chunks into completed frames.
///
/// Holds only the bytes of the current incomplete line.
#[derive(Debug, Default)]
pub struct FrameAccumulator {
    pending: Vec<u8>,
}

impl FrameAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one transport chunk; returns every frame it completed.
    pub fn push_chunk(&mut self, chunk: &[u8]) -> Vec<Frame> {
        self.pending.extend_from_slice(chunk);

        let mut frames = Vec::new();
        while let Some(pos) = self.pending.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            if let Some(frame) = frame_from_line(&line) {
                frames.push(frame);
            }
        }
        frames
    }

    /// Drain a final unterminated line once the transport has closed.
    ///
    /// The server may end the stream without a trailing newline.
    pub fn finish(mut self) -> Option<Frame> {
        if self.pending.is_empty() {
            return None;
        }
        let raw = std::mem::take(&mut self.pending);
        frame_from_line(&raw)
    }
}

fn frame_from_line(raw: &[u8]) -> Option<Frame> {
    let text = String::from_utf8_lossy(raw);
    let line = text.trim_end_matches(|c| c == '\n' || c == '\r');
    line.strip_prefix(DATA_PREFIX)
        .map(|payload| Frame(payload.to_string()))
}

/// Lazy frame sequence over a transport chunk stream.
///
/// Ends when the underlying stream ends; a transport read error is yielded
/// once and terminates the sequence. Restartable only via a new connection.
pub fn frame_stream<S>(chunks: S) -> impl Stream<Item = Result<Frame>>
where
    S: Stream<Item = Result<Bytes>>,
{
    async_stream::stream! {
        let mut accumulator = FrameAccumulator::new();
        futures::pin_mut!(chunks);

        while let Some(chunk) = chunks.next().await {
            match chunk {
                Ok(bytes) => {
                    for frame in accumulator.push_chunk(&bytes) {
                        yield Ok(frame);
                    }
                }
                Err(e) => {
                    yield Err(e);
                    return;
                }
            }
        }

        if let Some(frame) = accumulator.finish() {
            yield Ok(frame);
        }
    }
}
