//! Per-route method dispatch for path-only routers.

use axum::http::header::{ALLOW, CONTENT_TYPE};
use axum::http::{HeaderValue, Method, StatusCode};

use crate::harness::runner::HELLO_BODY;
use crate::harness::ResponseRecorder;

/// Handler signature shared by the path-only adapters.
pub type Action = fn(&mut ResponseRecorder);

/// Writes `200 hello` as plain text.
pub fn hello(recorder: &mut ResponseRecorder) {
    recorder.insert_header(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"));
    recorder.write(HELLO_BODY.as_bytes());
}

/// Methods registered on one path and the action each invokes.
///
/// Route tables hold at most a handful of methods per path.
#[derive(Clone)]
pub struct MethodTable {
    routes: Vec<(Method, Action)>,
    allow: HeaderValue,
}

impl std::fmt::Debug for MethodTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodTable").field("allow", &self.allow).finish()
    }
}

impl MethodTable {
    /// Table answering every method in `methods` with `action`.
    ///
    /// A `GET` route also answers `HEAD` with the same status and headers
    /// and an empty body.
    pub fn new(methods: &[Method], action: Action) -> Self {
        let mut allow = Vec::with_capacity(methods.len() + 1);
        for method in methods {
            allow.push(method.as_str());
            if *method == Method::GET && !methods.contains(&Method::HEAD) {
                allow.push("HEAD");
            }
        }
        let allow = allow.join(",");
        Self {
            routes: methods.iter().map(|m| (m.clone(), action)).collect(),
            // Method names are tokens, always valid header text.
            allow: HeaderValue::from_str(&allow).unwrap_or_else(|_| HeaderValue::from_static("")),
        }
    }

    pub fn get(&self, method: &Method) -> Option<Action> {
        self.routes
            .iter()
            .find(|(m, _)| m == method)
            .map(|(_, action)| *action)
    }

    /// Run the action for `method`, or answer 405 with an `Allow` header.
    pub fn serve(&self, method: &Method, recorder: &mut ResponseRecorder) {
        if let Some(action) = self.get(method) {
            action(recorder);
            return;
        }

        match self.get(&Method::GET) {
            Some(action) if *method == Method::HEAD => {
                action(recorder);
                recorder.clear_body();
            }
            _ => {
                recorder.set_status(StatusCode::METHOD_NOT_ALLOWED);
                recorder.insert_header(ALLOW, self.allow.clone());
            }
        }
    }
}
