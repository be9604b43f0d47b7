//! Shared utilities for integration tests.
#![allow(dead_code)]

use mux_bench::adapters::{builders, RouterBuilder};
use mux_bench::fixture::RouteRequest;
use mux_bench::harness::{Dispatcher, ResponseRecorder};

/// Every adapter, built fresh.
pub fn all_routers() -> Vec<Box<dyn RouterBuilder>> {
    builders()
}

/// Dispatch one request and return the recorded response.
pub fn serve(dispatcher: &mut dyn Dispatcher, request: &RouteRequest) -> ResponseRecorder {
    let mut recorder = ResponseRecorder::new();
    dispatcher.dispatch(request, &mut recorder);
    recorder
}

/// Dispatcher that remembers the order in which requests arrive.
#[derive(Default)]
pub struct Tape {
    pub seen: Vec<RouteRequest>,
}

impl Dispatcher for Tape {
    fn dispatch(&mut self, request: &RouteRequest, recorder: &mut ResponseRecorder) {
        self.seen.push(request.clone());
        recorder.write(b"hello");
    }
}
