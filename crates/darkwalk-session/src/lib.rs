//! Darkwalk Session — the async session runtime.
//!
//! Hosts a [`TriggerEngine`](darkwalk_engine::TriggerEngine) behind a
//! single-consumer command channel with run-to-completion semantics, and
//! dispatches the engine's side-effect instructions to the audio and
//! progress collaborators without ever blocking narrative progress on
//! them.

pub mod http;
pub mod service;
pub mod sinks;

pub use http::HttpProgressSink;
pub use service::{PositionSubscription, SessionConfig, SessionHandle};
pub use sinks::TracingAudioSink;
