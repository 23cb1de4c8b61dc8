//! HTTP/JSON API server exposing org-pomodoro timer state.
//!
//! Serves a static dashboard page and two JSON endpoints backed by the
//! aggregator in `pomodash-core`. This crate contains the server
//! framework, route definitions, and shared state.

pub mod handlers;
pub mod router;
pub mod state;
