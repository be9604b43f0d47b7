//! routefinder with per-route method tables.

use axum::http::StatusCode;

use crate::adapters::methods::{hello, MethodTable};
use crate::adapters::{validate_names, AdapterError, RouterBuilder};
use crate::fixture::{ParamSyntax, RouteRequest, RouteTable};
use crate::harness::{Dispatcher, ResponseRecorder};

/// Dispatcher over a `routefinder::Router`.
pub struct RoutefinderDispatcher {
    router: routefinder::Router<MethodTable>,
}

impl RoutefinderDispatcher {
    pub fn from_table(table: &RouteTable) -> Result<Self, AdapterError> {
        let mut router = routefinder::Router::new();
        for entry in table.entries() {
            router
                .add(entry.pattern.as_str(), MethodTable::new(&entry.methods, hello))
                .map_err(|reason| AdapterError::Insert {
                    pattern: entry.pattern.clone(),
                    reason: reason.to_string(),
                })?;
        }
        Ok(Self { router })
    }
}

impl Dispatcher for RoutefinderDispatcher {
    fn dispatch(&mut self, request: &RouteRequest, recorder: &mut ResponseRecorder) {
        let path = request.path();
        // routefinder matches `/a/b/` as `/a/b`; registered patterns never end in `/`.
        if path.len() > 1 && path.ends_with('/') {
            recorder.set_status(StatusCode::NOT_FOUND);
            return;
        }

        match self.router.best_match(path) {
            Some(matched) => matched.handler().serve(request.method(), recorder),
            None => recorder.set_status(StatusCode::NOT_FOUND),
        }
    }
}

/// Ranked route matching with routefinder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Routefinder;

impl RouterBuilder for Routefinder {
    fn name(&self) -> &'static str {
        "Routefinder"
    }

    fn simple(&self) -> Result<Box<dyn Dispatcher>, AdapterError> {
        Ok(Box::new(RoutefinderDispatcher::from_table(&RouteTable::simple())?))
    }

    fn build(
        &self,
        namespaces: &[String],
        resources: &[String],
    ) -> Result<Box<dyn Dispatcher>, AdapterError> {
        validate_names(namespaces, resources)?;

        let table = RouteTable::new(namespaces, resources, ParamSyntax::Colon);
        let dispatcher = RoutefinderDispatcher::from_table(&table)?;

        tracing::debug!(router = self.name(), routes = table.len(), "Router built");
        Ok(Box::new(dispatcher))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Method;

    #[test]
    fn test_colon_member_route() {
        let namespaces = vec!["site".to_string()];
        let resources = vec!["pages".to_string()];
        let mut dispatcher = Routefinder.build(&namespaces, &resources).unwrap();
        let mut recorder = ResponseRecorder::new();

        let member = RouteRequest::new(Method::GET, "/site/pages/3937").unwrap();
        dispatcher.dispatch(&member, &mut recorder);
        assert_eq!(recorder.status(), StatusCode::OK);
        assert_eq!(recorder.body(), b"hello");

        recorder.reset();
        let wrong_method = RouteRequest::new(Method::POST, "/site/pages/3937").unwrap();
        dispatcher.dispatch(&wrong_method, &mut recorder);
        assert_eq!(recorder.status(), StatusCode::METHOD_NOT_ALLOWED);

        recorder.reset();
        dispatcher.dispatch(&RouteRequest::new(Method::GET, "/api/pages").unwrap(), &mut recorder);
        assert_eq!(recorder.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_trailing_slash_is_404() {
        let namespaces = vec!["site".to_string()];
        let resources = vec!["pages".to_string()];
        let mut dispatcher = Routefinder.build(&namespaces, &resources).unwrap();
        let mut recorder = ResponseRecorder::new();

        let request = RouteRequest::new(Method::GET, "/site/pages/").unwrap();
        dispatcher.dispatch(&request, &mut recorder);
        assert_eq!(recorder.status(), StatusCode::NOT_FOUND);
        assert!(recorder.body().is_empty());
    }

    #[test]
    fn test_simple_route() {
        let mut dispatcher = Routefinder.simple().unwrap();
        let mut recorder = ResponseRecorder::new();
        dispatcher.dispatch(&RouteRequest::new(Method::GET, "/action").unwrap(), &mut recorder);
        assert_eq!(recorder.body(), b"hello");
    }
}
