//! Request sequences replayed by the harness.

use axum::http::{Method, Request, Uri};

use crate::fixture::{is_path_segment, request_count, resource_names, FixtureError};

/// Member id used in `/ns/res/<id>` paths unless configured otherwise.
pub const DEFAULT_MEMBER_ID: &str = "3937";

/// Path served by the single-route "Simple" cases.
pub const SIMPLE_PATH: &str = "/action";

/// The five request shapes generated per namespace x resource pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteVariant {
    /// `GET /ns/res`
    List,
    /// `POST /ns/res`
    Create,
    /// `GET /ns/res/<id>`
    Show,
    /// `PUT /ns/res/<id>`
    Update,
    /// `DELETE /ns/res/<id>`
    Delete,
}

impl RouteVariant {
    /// Generation order of the variants.
    pub const ALL: [RouteVariant; 5] = [
        RouteVariant::List,
        RouteVariant::Create,
        RouteVariant::Show,
        RouteVariant::Update,
        RouteVariant::Delete,
    ];

    pub fn method(self) -> Method {
        match self {
            RouteVariant::List | RouteVariant::Show => Method::GET,
            RouteVariant::Create => Method::POST,
            RouteVariant::Update => Method::PUT,
            RouteVariant::Delete => Method::DELETE,
        }
    }

    /// True for variants addressing a single member rather than the collection.
    pub fn is_member(self) -> bool {
        matches!(self, RouteVariant::Show | RouteVariant::Update | RouteVariant::Delete)
    }
}

/// A pre-parsed method + URI pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    method: Method,
    uri: Uri,
}

impl RouteRequest {
    /// Parse `path` into a request for `method`.
    pub fn new(method: Method, path: &str) -> Result<Self, FixtureError> {
        let uri = Uri::try_from(path)?;
        Ok(Self { method, uri })
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// Build a fresh `http::Request` with an empty body.
    ///
    /// Requests are consumed by the services under test, so a new one is
    /// assembled on every dispatch. Method and URI clones are reference counted.
    pub fn to_http<B: Default>(&self) -> Request<B> {
        let mut request = Request::new(B::default());
        *request.method_mut() = self.method.clone();
        *request.uri_mut() = self.uri.clone();
        request
    }
}

/// Namespaces, resources, and the ordered request sequence derived from them.
#[derive(Debug, Clone)]
pub struct Fixture {
    namespaces: Vec<String>,
    resources: Vec<String>,
    requests: Vec<RouteRequest>,
}

impl Fixture {
    /// Generate the fixture for `n` resources per namespace.
    pub fn generate<S: AsRef<str>>(namespaces: &[S], n: usize) -> Result<Self, FixtureError> {
        Self::with_member_id(namespaces, n, DEFAULT_MEMBER_ID)
    }

    /// Generate the fixture using `member_id` in member paths.
    ///
    /// Requests are ordered namespace-major, then resource, then
    /// [`RouteVariant::ALL`].
    pub fn with_member_id<S: AsRef<str>>(
        namespaces: &[S],
        n: usize,
        member_id: &str,
    ) -> Result<Self, FixtureError> {
        let namespaces: Vec<String> = namespaces.iter().map(|ns| ns.as_ref().to_string()).collect();
        if let Some(bad) = namespaces.iter().find(|ns| !is_path_segment(ns)) {
            return Err(FixtureError::InvalidSegment(bad.clone()));
        }
        if !is_path_segment(member_id) {
            return Err(FixtureError::InvalidSegment(member_id.to_string()));
        }

        let resources = resource_names(n);
        let mut requests = Vec::with_capacity(request_count(namespaces.len(), resources.len()));

        for ns in &namespaces {
            for res in &resources {
                let collection = format!("/{}/{}", ns, res);
                let member = format!("{}/{}", collection, member_id);
                for variant in RouteVariant::ALL {
                    let path = if variant.is_member() { &member } else { &collection };
                    requests.push(RouteRequest::new(variant.method(), path)?);
                }
            }
        }

        tracing::debug!(
            namespaces = namespaces.len(),
            resources = resources.len(),
            requests = requests.len(),
            "Fixture generated"
        );

        Ok(Self {
            namespaces,
            resources,
            requests,
        })
    }

    /// The single `GET /action` request used by the "Simple" cases.
    pub fn simple() -> Self {
        let request = RouteRequest {
            method: Method::GET,
            uri: Uri::from_static(SIMPLE_PATH),
        };
        Self {
            namespaces: Vec::new(),
            resources: Vec::new(),
            requests: vec![request],
        }
    }

    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    pub fn requests(&self) -> &[RouteRequest] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{resource_token, DEFAULT_NAMESPACES};

    #[test]
    fn test_request_count_for_scales() {
        for n in [0, 1, 5, 10, 20] {
            let fixture = Fixture::generate(&DEFAULT_NAMESPACES, n).unwrap();
            assert_eq!(fixture.len(), 3 * n * 5);
            assert_eq!(fixture.resources().len(), n);
        }
    }

    #[test]
    fn test_first_pair_shape() {
        let fixture = Fixture::generate(&DEFAULT_NAMESPACES, 1).unwrap();
        let res = resource_token(0);
        let got: Vec<(Method, String)> = fixture.requests()[..5]
            .iter()
            .map(|r| (r.method().clone(), r.path().to_string()))
            .collect();

        assert_eq!(
            got,
            vec![
                (Method::GET, format!("/admin/{}", res)),
                (Method::POST, format!("/admin/{}", res)),
                (Method::GET, format!("/admin/{}/3937", res)),
                (Method::PUT, format!("/admin/{}/3937", res)),
                (Method::DELETE, format!("/admin/{}/3937", res)),
            ]
        );
    }

    #[test]
    fn test_namespace_major_order() {
        let fixture = Fixture::generate(&DEFAULT_NAMESPACES, 2).unwrap();
        let requests = fixture.requests();
        assert!(requests[0].path().starts_with("/admin/"));
        assert!(requests[5].path().starts_with(&format!("/admin/{}", resource_token(1))));
        assert!(requests[10].path().starts_with("/api/"));
        assert!(requests[20].path().starts_with("/site/"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = Fixture::generate(&DEFAULT_NAMESPACES, 10).unwrap();
        let b = Fixture::generate(&DEFAULT_NAMESPACES, 10).unwrap();
        assert_eq!(a.requests(), b.requests());
    }

    #[test]
    fn test_custom_member_id() {
        let fixture = Fixture::with_member_id(&["v1"], 1, "42").unwrap();
        assert_eq!(fixture.len(), 5);
        assert!(fixture.requests()[2].path().ends_with("/42"));
    }

    #[test]
    fn test_rejects_bad_segments() {
        assert!(matches!(
            Fixture::generate(&["ad min"], 1),
            Err(FixtureError::InvalidSegment(s)) if s == "ad min"
        ));
        assert!(Fixture::with_member_id(&["admin"], 1, ":id").is_err());
    }

    #[test]
    fn test_simple_fixture() {
        let fixture = Fixture::simple();
        assert_eq!(fixture.len(), 1);
        assert_eq!(*fixture.requests()[0].method(), Method::GET);
        assert_eq!(fixture.requests()[0].path(), SIMPLE_PATH);
    }

    #[test]
    fn test_to_http_copies_method_and_uri() {
        let request = RouteRequest::new(Method::PUT, "/api/x/3937").unwrap();
        let http: Request<()> = request.to_http();
        assert_eq!(*http.method(), Method::PUT);
        assert_eq!(http.uri().path(), "/api/x/3937");
    }
}
