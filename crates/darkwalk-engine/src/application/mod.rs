//! Application layer: read-model projection of engine state.

pub mod projection;
