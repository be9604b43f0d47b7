//! Timed dispatch loop.

use std::time::{Duration, Instant};

use axum::http::StatusCode;
use serde::Serialize;

use crate::fixture::RouteRequest;
use crate::harness::{Dispatcher, HarnessError, RequestCycle, ResponseRecorder};

/// Body written by every benchmark handler.
pub const HELLO_BODY: &str = "hello";

/// What, if anything, to assert about each response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResponseCheck {
    /// Latency only; responses are never inspected.
    #[default]
    Disabled,
    /// Every response must carry `status` and, if set, exactly `body`.
    Expect {
        status: StatusCode,
        body: Option<String>,
    },
}

impl ResponseCheck {
    /// `200 OK` with body `hello`.
    pub fn hello() -> Self {
        ResponseCheck::Expect {
            status: StatusCode::OK,
            body: Some(HELLO_BODY.to_string()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, ResponseCheck::Disabled)
    }

    fn verify(
        &self,
        request: &RouteRequest,
        recorder: &ResponseRecorder,
    ) -> Result<(), HarnessError> {
        let ResponseCheck::Expect { status, body } = self else {
            return Ok(());
        };

        let body_ok = body
            .as_deref()
            .map_or(true, |expected| recorder.body() == expected.as_bytes());
        if recorder.status() == *status && body_ok {
            return Ok(());
        }

        Err(HarnessError::UnexpectedResponse {
            method: request.method().clone(),
            path: request.path().to_string(),
            status: recorder.status(),
            body: recorder.body_text().into_owned(),
            expected_status: *status,
            expected_body: body.clone().unwrap_or_default(),
        })
    }
}

/// Outcome of one timed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub iterations: u64,
    pub elapsed_ns: u64,
}

impl RunReport {
    pub fn new(iterations: u64, elapsed: Duration) -> Self {
        Self {
            iterations,
            elapsed_ns: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
        }
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_ns)
    }

    /// Mean nanoseconds per dispatch, 0 for an empty run.
    pub fn ns_per_op(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.elapsed_ns as f64 / self.iterations as f64
        }
    }
}

/// Drives one dispatcher over one request sequence.
pub struct Harness<'a, D: Dispatcher + ?Sized> {
    dispatcher: &'a mut D,
    cycle: RequestCycle<'a>,
    recorder: ResponseRecorder,
    check: ResponseCheck,
    dispatched: u64,
}

impl<'a, D: Dispatcher + ?Sized> Harness<'a, D> {
    pub fn new(dispatcher: &'a mut D, requests: &'a [RouteRequest], check: ResponseCheck) -> Self {
        Self {
            dispatcher,
            cycle: RequestCycle::new(requests),
            recorder: ResponseRecorder::new(),
            check,
            dispatched: 0,
        }
    }

    /// Dispatch the next request in round-robin order.
    ///
    /// Returns `Ok(false)` without dispatching when the sequence is empty.
    #[inline]
    pub fn step(&mut self) -> Result<bool, HarnessError> {
        let Some(request) = self.cycle.next_request() else {
            return Ok(false);
        };
        self.recorder.reset();
        self.dispatcher.dispatch(request, &mut self.recorder);
        self.dispatched += 1;
        self.check.verify(request, &self.recorder)?;
        Ok(true)
    }

    /// Dispatch `iterations` requests and time the loop.
    ///
    /// Stops at the first failed check. An empty sequence reports zero
    /// iterations.
    pub fn run(&mut self, iterations: u64) -> Result<RunReport, HarnessError> {
        if self.cycle.is_empty() {
            return Ok(RunReport::new(0, Duration::ZERO));
        }

        let start = Instant::now();
        for _ in 0..iterations {
            self.step()?;
        }
        let report = RunReport::new(iterations, start.elapsed());

        tracing::debug!(
            iterations,
            requests = self.cycle.len(),
            ns_per_op = report.ns_per_op(),
            "Run finished"
        );
        Ok(report)
    }

    /// Response of the most recent dispatch.
    pub fn recorder(&self) -> &ResponseRecorder {
        &self.recorder
    }

    /// Total requests dispatched by this harness.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }
}
