//! Timing harness.
//!
//! # Data Flow
//! ```text
//! Fixture (requests) + Dispatcher (router under test)
//!     → cycle.rs (round-robin cursor, wraps at end)
//!     → Dispatcher::dispatch(request, recorder)
//!     → recorder.rs (single reused response sink)
//!     → runner.rs (optional response check, elapsed time)
//! ```
//!
//! # Design Decisions
//! - Single-threaded; the only mutable state is the cursor and the recorder
//! - Timer starts after setup, so fixture and router construction are excluded
//! - Response checking is opt-in; by default only latency is measured

pub mod cycle;
pub mod recorder;
pub mod runner;

use axum::http::{Method, StatusCode};
use thiserror::Error;

use crate::fixture::RouteRequest;

pub use cycle::RequestCycle;
pub use recorder::ResponseRecorder;
pub use runner::{Harness, ResponseCheck, RunReport};

/// The one capability the harness needs from a router: serve a request.
pub trait Dispatcher {
    /// Serve `request`, writing the response into `recorder`.
    ///
    /// The recorder has been reset by the caller. Failures inside the router
    /// are reported as a status code, never as a panic.
    fn dispatch(&mut self, request: &RouteRequest, recorder: &mut ResponseRecorder);
}

impl<D: Dispatcher + ?Sized> Dispatcher for Box<D> {
    fn dispatch(&mut self, request: &RouteRequest, recorder: &mut ResponseRecorder) {
        (**self).dispatch(request, recorder)
    }
}

/// Errors produced by a checked harness run.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(
        "{method} {path} answered {status} {body:?}, expected {expected_status} {expected_body:?}"
    )]
    UnexpectedResponse {
        method: Method,
        path: String,
        status: StatusCode,
        body: String,
        expected_status: StatusCode,
        expected_body: String,
    },
}
