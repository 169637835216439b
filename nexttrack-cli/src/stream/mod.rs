//! Incremental stream pipeline
//!
//! frame: chunked bytes → `data:`-framed payloads
//! decode: payload → typed event, bad frames skipped
//! dispatch: typed event → rendered output through an injected sink
//! driver: end-to-end sequencing with cancellation

pub mod decode;
pub mod dispatch;
pub mod driver;
pub mod frame;

pub use decode::decode_event;
pub use dispatch::{Dispatcher, EventSink, MemorySink, StdoutSink};
pub use driver::{pump_events, run_stream, StreamSummary};
pub use frame::{frame_stream, Frame, FrameAccumulator};
