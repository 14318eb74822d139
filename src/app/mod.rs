//! Application runtime: the event loop and key dispatch.

pub mod input;
pub mod runtime;
