//! Payload decoding
//!
//! A frame that is not valid JSON, or whose `type` discriminator is unknown,
//! is skipped and the stream continues: the server may emit keep-alive or
//! diagnostic content (e.g. `Debug` events) this client does not consume.
//! The skip is silent apart from a debug-level trace.

use crate::stream::frame::Frame;
use nexttrack_common::RecommendationEvent;
use tracing::debug;

/// Decode one frame into a typed event, or nothing.
pub fn decode_event(frame: &Frame) -> Option<RecommendationEvent> {
    match serde_json::from_str::<RecommendationEvent>(frame.payload()) {
        Ok(event) => Some(event),
        Err(e) => {
            debug!(error = %e, payload = frame.payload(), "Skipping undecodable frame");
            None
        }
    }
}
