//! axum flat route table behind a tower-http middleware layer.
//!
//! The router is handed to a middleware host rather than served directly,
//! so every dispatch also passes through one response-header layer.

use axum::http::header::SERVER;
use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::adapters::nested::{hello, register};
use crate::adapters::{validate_names, AdapterError, RouterBuilder, ServiceDispatcher};
use crate::fixture::{ParamSyntax, RouteTable, SIMPLE_PATH};
use crate::harness::Dispatcher;

/// Value of the `Server` header added by the layer.
pub const SERVER_NAME: &str = "mux-bench";

fn with_layer(router: Router) -> Router {
    router.layer(SetResponseHeaderLayer::if_not_present(
        SERVER,
        HeaderValue::from_static(SERVER_NAME),
    ))
}

/// Flat axum `Router` wrapped in [`SetResponseHeaderLayer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AxumLayered;

impl RouterBuilder for AxumLayered {
    fn name(&self) -> &'static str {
        "AxumLayered"
    }

    fn simple(&self) -> Result<Box<dyn Dispatcher>, AdapterError> {
        let router = with_layer(Router::new().route(SIMPLE_PATH, get(hello)));
        Ok(Box::new(ServiceDispatcher::new(router)?))
    }

    fn build(
        &self,
        namespaces: &[String],
        resources: &[String],
    ) -> Result<Box<dyn Dispatcher>, AdapterError> {
        validate_names(namespaces, resources)?;

        let table = RouteTable::new(namespaces, resources, ParamSyntax::Braces);
        let router = with_layer(register(Router::new(), &table)?);

        tracing::debug!(router = self.name(), routes = table.len(), "Router built");
        Ok(Box::new(ServiceDispatcher::new(router)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{Fixture, RouteRequest, DEFAULT_NAMESPACES};
    use crate::harness::{Harness, ResponseCheck, ResponseRecorder};
    use axum::http::{Method, StatusCode};

    #[test]
    fn test_layer_sets_server_header() {
        let mut dispatcher = AxumLayered.simple().unwrap();
        let mut recorder = ResponseRecorder::new();
        let request = RouteRequest::new(Method::GET, "/action").unwrap();
        dispatcher.dispatch(&request, &mut recorder);

        assert_eq!(recorder.status(), StatusCode::OK);
        assert_eq!(recorder.headers()[SERVER], SERVER_NAME);
        assert_eq!(recorder.body(), b"hello");
    }

    #[test]
    fn test_full_fixture_answers_hello() {
        let fixture = Fixture::generate(&DEFAULT_NAMESPACES, 5).unwrap();
        let mut dispatcher = AxumLayered.build(fixture.namespaces(), fixture.resources()).unwrap();

        let report = Harness::new(dispatcher.as_mut(), fixture.requests(), ResponseCheck::hello())
            .run(fixture.len() as u64)
            .unwrap();
        assert_eq!(report.iterations, 75);
    }
}
