//! HTTP handlers for the pomodash API.
//!
//! Handlers are thin: call the aggregator, wrap the result in `Json`.
//! No parsing or defaulting logic lives here.

pub mod dashboard;
pub mod pomodoro;
