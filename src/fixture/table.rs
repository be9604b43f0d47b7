//! Route registration tables.
//!
//! The request sequence describes what is sent; the table describes what
//! each router registers. Collection and member patterns are grouped with
//! their methods so routers that key on path alone see each path once.

use axum::http::Method;

use crate::fixture::SIMPLE_PATH;

/// Parameter placeholder style of a routing library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamSyntax {
    /// `{id}` (axum, matchit)
    Braces,
    /// `:id` (routefinder)
    Colon,
}

impl ParamSyntax {
    /// Render a path parameter named `name`.
    pub fn param(self, name: &str) -> String {
        match self {
            ParamSyntax::Braces => format!("{{{}}}", name),
            ParamSyntax::Colon => format!(":{}", name),
        }
    }
}

/// One registered pattern and the methods it answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: String,
    pub methods: Vec<Method>,
}

/// Ordered list of route registrations.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Absolute table: `/ns/res` and `/ns/res/<id>` for every pair.
    pub fn new<N, R>(namespaces: &[N], resources: &[R], syntax: ParamSyntax) -> Self
    where
        N: AsRef<str>,
        R: AsRef<str>,
    {
        let mut entries = Vec::with_capacity(namespaces.len() * resources.len() * 2);
        for ns in namespaces {
            let prefix = format!("/{}", ns.as_ref());
            push_resource_entries(&mut entries, &prefix, resources, syntax);
        }
        Self { entries }
    }

    /// Table relative to a namespace mount point: `/res` and `/res/<id>`.
    pub fn scoped<R: AsRef<str>>(resources: &[R], syntax: ParamSyntax) -> Self {
        let mut entries = Vec::with_capacity(resources.len() * 2);
        push_resource_entries(&mut entries, "", resources, syntax);
        Self { entries }
    }

    /// The single `GET /action` route.
    pub fn simple() -> Self {
        Self {
            entries: vec![RouteEntry {
                pattern: SIMPLE_PATH.to_string(),
                methods: vec![Method::GET],
            }],
        }
    }

    pub fn from_entries(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn push_resource_entries<R: AsRef<str>>(
    entries: &mut Vec<RouteEntry>,
    prefix: &str,
    resources: &[R],
    syntax: ParamSyntax,
) {
    let id = syntax.param("id");
    for res in resources {
        let collection = format!("{}/{}", prefix, res.as_ref());
        let member = format!("{}/{}", collection, id);
        entries.push(RouteEntry {
            pattern: collection,
            methods: vec![Method::GET, Method::POST],
        });
        entries.push(RouteEntry {
            pattern: member,
            methods: vec![Method::GET, Method::PUT, Method::DELETE],
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_table() {
        let table = RouteTable::new(&["admin", "api"], &["users"], ParamSyntax::Braces);
        let patterns: Vec<&str> = table.entries().iter().map(|e| e.pattern.as_str()).collect();
        assert_eq!(
            patterns,
            vec!["/admin/users", "/admin/users/{id}", "/api/users", "/api/users/{id}"]
        );
        assert_eq!(table.entries()[0].methods, vec![Method::GET, Method::POST]);
        assert_eq!(
            table.entries()[1].methods,
            vec![Method::GET, Method::PUT, Method::DELETE]
        );
    }

    #[test]
    fn test_scoped_colon_table() {
        let table = RouteTable::scoped(&["users"], ParamSyntax::Colon);
        let patterns: Vec<&str> = table.entries().iter().map(|e| e.pattern.as_str()).collect();
        assert_eq!(patterns, vec!["/users", "/users/:id"]);
    }

    #[test]
    fn test_methods_cover_five_variants() {
        let table = RouteTable::new(&["admin"], &["r"], ParamSyntax::Braces);
        let total: usize = table.entries().iter().map(|e| e.methods.len()).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn test_simple_table() {
        let table = RouteTable::simple();
        assert_eq!(table.len(), 1);
        assert_eq!(table.entries()[0].pattern, "/action");
    }
}
