//! matchit path tree with per-route method tables.

use axum::http::StatusCode;

use crate::adapters::methods::{hello, MethodTable};
use crate::adapters::{validate_names, AdapterError, RouterBuilder};
use crate::fixture::{ParamSyntax, RouteRequest, RouteTable};
use crate::harness::{Dispatcher, ResponseRecorder};

/// Dispatcher over a `matchit::Router`.
pub struct MatchitDispatcher {
    router: matchit::Router<MethodTable>,
}

impl MatchitDispatcher {
    pub fn from_table(table: &RouteTable) -> Result<Self, AdapterError> {
        let mut router = matchit::Router::new();
        for entry in table.entries() {
            router
                .insert(entry.pattern.as_str(), MethodTable::new(&entry.methods, hello))
                .map_err(|err| AdapterError::Insert {
                    pattern: entry.pattern.clone(),
                    reason: err.to_string(),
                })?;
        }
        Ok(Self { router })
    }
}

impl Dispatcher for MatchitDispatcher {
    fn dispatch(&mut self, request: &RouteRequest, recorder: &mut ResponseRecorder) {
        match self.router.at(request.path()) {
            Ok(matched) => matched.value.serve(request.method(), recorder),
            Err(_) => recorder.set_status(StatusCode::NOT_FOUND),
        }
    }
}

/// Method-restricted routes on a matchit radix tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matchit;

impl RouterBuilder for Matchit {
    fn name(&self) -> &'static str {
        "Matchit"
    }

    fn simple(&self) -> Result<Box<dyn Dispatcher>, AdapterError> {
        Ok(Box::new(MatchitDispatcher::from_table(&RouteTable::simple())?))
    }

    fn build(
        &self,
        namespaces: &[String],
        resources: &[String],
    ) -> Result<Box<dyn Dispatcher>, AdapterError> {
        validate_names(namespaces, resources)?;

        let table = RouteTable::new(namespaces, resources, ParamSyntax::Braces);
        let dispatcher = MatchitDispatcher::from_table(&table)?;

        tracing::debug!(router = self.name(), routes = table.len(), "Router built");
        Ok(Box::new(dispatcher))
    }
}
