//! axum with one nested sub-router per namespace.
//!
//! Mirrors the sub-router style: each namespace owns a router holding only
//! resource-relative routes, mounted under `/<namespace>`.

use axum::http::Method;
use axum::routing::{get, MethodFilter, MethodRouter};
use axum::Router;

use crate::adapters::{validate_names, AdapterError, RouterBuilder, ServiceDispatcher};
use crate::fixture::{ParamSyntax, RouteTable, SIMPLE_PATH};
use crate::harness::runner::HELLO_BODY;
use crate::harness::Dispatcher;

/// Handler for every registered route.
pub(crate) async fn hello() -> &'static str {
    HELLO_BODY
}

/// Method router answering each of `methods` with [`hello`].
pub(crate) fn hello_methods(methods: &[Method]) -> Result<MethodRouter, AdapterError> {
    methods.iter().try_fold(MethodRouter::new(), |router, method| {
        let filter = MethodFilter::try_from(method.clone())
            .map_err(|_| AdapterError::UnsupportedMethod(method.clone()))?;
        Ok(router.on(filter, hello))
    })
}

/// Register every entry of `table` on `router`.
pub(crate) fn register(mut router: Router, table: &RouteTable) -> Result<Router, AdapterError> {
    for entry in table.entries() {
        router = router.route(&entry.pattern, hello_methods(&entry.methods)?);
    }
    Ok(router)
}

/// axum `Router` built from nested per-namespace routers.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxumNested;

impl RouterBuilder for AxumNested {
    fn name(&self) -> &'static str {
        "AxumNested"
    }

    fn simple(&self) -> Result<Box<dyn Dispatcher>, AdapterError> {
        let router = Router::new().route(SIMPLE_PATH, get(hello));
        Ok(Box::new(ServiceDispatcher::new(router)?))
    }

    fn build(
        &self,
        namespaces: &[String],
        resources: &[String],
    ) -> Result<Box<dyn Dispatcher>, AdapterError> {
        validate_names(namespaces, resources)?;

        let scoped = RouteTable::scoped(resources, ParamSyntax::Braces);
        let mut router = Router::new();
        if !scoped.is_empty() {
            for ns in namespaces {
                let subrouter = register(Router::new(), &scoped)?;
                router = router.nest(&format!("/{}", ns), subrouter);
            }
        }

        tracing::debug!(
            router = self.name(),
            namespaces = namespaces.len(),
            routes = scoped.len() * namespaces.len(),
            "Router built"
        );
        Ok(Box::new(ServiceDispatcher::new(router)?))
    }
}
