//! Event dispatch and rendering
//!
//! Each decoded event triggers exactly one handler, synchronously, in arrival
//! order. Rendering goes through an injected [`EventSink`] so tests capture
//! output without touching the console. The dispatcher never calls back into
//! the accumulator or decoder.

use nexttrack_common::RecommendationEvent;

/// Number of ranked entries shown from a `Complete` event
const COMPLETE_DISPLAY_LIMIT: usize = 5;

/// Output sink the dispatcher renders through
pub trait EventSink {
    fn render(&mut self, line: &str);
}

/// Production sink: one rendered line per stdout line
#[derive(Debug, Default)]
pub struct StdoutSink;

impl EventSink for StdoutSink {
    fn render(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Capturing sink for tests and embedding
#[derive(Debug, Default)]
pub struct MemorySink {
    pub lines: Vec<String>,
}

impl EventSink for MemorySink {
    fn render(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Routes decoded events to their per-kind rendering.
///
/// Session state is deliberately thin: a running candidate count and whether
/// a terminal event has been seen. The ranked list is never reconstructed
/// client-side; rank is authoritative only from `Complete`.
pub struct Dispatcher<S: EventSink> {
    sink: S,
    candidates_seen: usize,
    terminal: Option<&'static str>,
}

impl<S: EventSink> Dispatcher<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            candidates_seen: 0,
            terminal: None,
        }
    }

    /// Handle one event. `Error` renders a notice and does not raise; the
    /// server is expected to close the stream afterward.
    pub fn dispatch(&mut self, event: &RecommendationEvent) {
        match event {
            RecommendationEvent::Status { message } => {
                self.sink.render(&format!("[status] {}", message));
            }
            RecommendationEvent::Candidate { track, score } => {
                self.candidates_seen += 1;
                self.sink.render(&format!(
                    "Found: {} by {} (score: {:.3})",
                    track.name, track.artist, score
                ));
            }
            RecommendationEvent::Complete { tracks } => {
                self.terminal = Some("Complete");
                self.sink.render(&format!(
                    "Complete! Top {} recommendations:",
                    tracks.len()
                ));
                for (i, track) in tracks.iter().take(COMPLETE_DISPLAY_LIMIT).enumerate() {
                    self.sink
                        .render(&format!("  {}. {} by {}", i + 1, track.name, track.artist));
                }
            }
            RecommendationEvent::Error { message } => {
                self.terminal = Some("Error");
                self.sink.render(&format!("Error: {}", message));
            }
        }
    }

    /// Running count of `Candidate` events seen so far
    pub fn candidates_seen(&self) -> usize {
        self.candidates_seen
    }

    /// `Some("Complete")` / `Some("Error")` once a terminal event arrived
    pub fn terminal(&self) -> Option<&'static str> {
        self.terminal
    }

    /// Reclaim the sink (tests read captured lines back out)
    pub fn into_sink(self) -> S {
        self.sink
    }
}
