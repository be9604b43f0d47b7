//! Drives a tower `Service` from the synchronous harness.

use std::convert::Infallible;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use tokio::runtime::{Builder, Runtime};
use tower::{Service, ServiceExt};

use crate::adapters::AdapterError;
use crate::fixture::RouteRequest;
use crate::harness::{Dispatcher, ResponseRecorder};

/// A tower service paired with the runtime that polls it.
///
/// The runtime is current-thread and never spawns, so each dispatch runs
/// to completion on the caller's thread.
pub struct ServiceDispatcher<S> {
    service: S,
    runtime: Runtime,
}

impl<S> ServiceDispatcher<S>
where
    S: Service<Request<Body>, Response = Response<Body>, Error = Infallible>,
{
    pub fn new(service: S) -> Result<Self, AdapterError> {
        let runtime = Builder::new_current_thread().enable_time().build()?;
        Ok(Self { service, runtime })
    }
}

impl<S> Dispatcher for ServiceDispatcher<S>
where
    S: Service<Request<Body>, Response = Response<Body>, Error = Infallible>,
{
    fn dispatch(&mut self, request: &RouteRequest, recorder: &mut ResponseRecorder) {
        let service = &mut self.service;
        self.runtime.block_on(async move {
            let response = match ServiceExt::<Request<Body>>::ready(service).await {
                Ok(ready) => ready.call(request.to_http()).await,
                Err(never) => match never {},
            };
            let response = match response {
                Ok(response) => response,
                Err(never) => match never {},
            };

            let (parts, body) = response.into_parts();
            recorder.set_status(parts.status);
            recorder.set_headers(parts.headers);
            match axum::body::to_bytes(body, usize::MAX).await {
                Ok(bytes) => recorder.write(&bytes),
                Err(err) => {
                    tracing::warn!(
                        path = %request.path(),
                        error = %err,
                        "Failed to read response body"
                    );
                    recorder.set_status(StatusCode::INTERNAL_SERVER_ERROR);
                }
            }
        });
    }
}
