//! nexttrack-cli library - streaming recommendation client
//!
//! Turns the server's chunked SSE body into typed events and renders them
//! incrementally. The pipeline runs strictly one direction:
//! stream driver → frame accumulator → payload decoder → event dispatcher.

pub mod client;
pub mod config;
pub mod stream;

pub use client::RecommendClient;
pub use config::ApiConfig;
pub use stream::{
    run_stream, Dispatcher, EventSink, MemorySink, StdoutSink, StreamSummary,
};
