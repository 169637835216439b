//! Event types for the recommendation stream
//!
//! One JSON object per `data:` line, discriminated by a `type` field with
//! literal values `"Status" | "Candidate" | "Complete" | "Error"`. The server
//! may emit event kinds this client does not know about; decoding happens in
//! the client's payload decoder, which skips unknown kinds.

use serde::{Deserialize, Serialize};

/// Minimal track identity carried inside Candidate/Complete events.
///
/// The server sends richer track objects (id, audio features, popularity,
/// album art); serde drops the fields this client does not consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRef {
    pub name: String,
    pub artist: String,
}

/// One step of the recommendation process.
///
/// A well-formed stream carries any number of `Status`/`Candidate` events
/// followed by exactly one terminal `Complete` or `Error`. Ordering among
/// `Candidate` events does not reflect final rank; rank is authoritative only
/// from `Complete`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RecommendationEvent {
    /// Progress update from the recommendation engine
    Status { message: String },

    /// A candidate track scored mid-stream
    Candidate { track: TrackRef, score: f64 },

    /// Final ranked recommendations; terminal
    Complete { tracks: Vec<TrackRef> },

    /// Server-side failure report; terminal, not a client fault
    Error { message: String },
}

impl RecommendationEvent {
    /// Event type name matching the wire discriminator
    pub fn event_type(&self) -> &'static str {
        match self {
            RecommendationEvent::Status { .. } => "Status",
            RecommendationEvent::Candidate { .. } => "Candidate",
            RecommendationEvent::Complete { .. } => "Complete",
            RecommendationEvent::Error { .. } => "Error",
        }
    }

    /// True for `Complete` and `Error`, after which the server closes the stream
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RecommendationEvent::Complete { .. } | RecommendationEvent::Error { .. }
        )
    }
}
