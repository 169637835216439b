//! # NextTrack Common Library
//!
//! Shared code for the NextTrack recommendation client:
//! - Event types (RecommendationEvent enum) matching the server's SSE wire format
//! - Request types (RecommendRequest, Preferences)
//! - Common error types

pub mod error;
pub mod events;
pub mod request;

pub use error::{Error, Result};
pub use events::{RecommendationEvent, TrackRef};
pub use request::{Preferences, RecommendRequest};
