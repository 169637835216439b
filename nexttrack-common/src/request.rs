//! Outbound request types
//!
//! Wire format: `{"tracks": [string, ...], "preferences": {"energy": f,
//! "obscurity": f, "mood": f}}`. Built once per invocation, sent once,
//! never mutated.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Named scoring weights, each in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub energy: f64,
    pub obscurity: f64,
    pub mood: f64,
}

impl Preferences {
    pub fn new(energy: f64, obscurity: f64, mood: f64) -> Result<Self> {
        for (name, value) in [("energy", energy), ("obscurity", obscurity), ("mood", mood)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidRequest(format!(
                    "preference '{}' must be within [0.0, 1.0], got {}",
                    name, value
                )));
            }
        }
        Ok(Self {
            energy,
            obscurity,
            mood,
        })
    }
}

/// A recommendation request: free-text seed track identifiers plus weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub tracks: Vec<String>,
    pub preferences: Preferences,
}

impl RecommendRequest {
    /// Build a request, rejecting an empty seed list or blank identifiers
    pub fn new(tracks: Vec<String>, preferences: Preferences) -> Result<Self> {
        if tracks.is_empty() {
            return Err(Error::InvalidRequest(
                "at least one seed track is required".to_string(),
            ));
        }
        if tracks.iter().any(|t| t.trim().is_empty()) {
            return Err(Error::InvalidRequest(
                "seed track identifiers must be non-empty".to_string(),
            ));
        }
        Ok(Self {
            tracks,
            preferences,
        })
    }
}
