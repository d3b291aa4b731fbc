//! Declarative route table: path and name bound to an external view.
//!
//! The full set of routes is constructed once at application start-up and
//! never mutated afterward. Views are opaque handles owned by the shell; a
//! route references one, it does not own its rendering.

/// A binding from a URL path and a logical name to an externally owned view.
#[derive(Debug, Clone)]
pub struct Route<V> {
    pub path: String,
    pub name: String,
    pub view: V,
}

impl<V> Route<V> {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }
}

/// Route table construction error.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("invalid route path '{0}': must start with '/'")]
    InvalidPath(String),

    #[error("duplicate route path: {0}")]
    DuplicatePath(String),

    #[error("duplicate route name: {0}")]
    DuplicateName(String),
}

/// Ordered, immutable set of path → view bindings.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
}

impl<V> RouteTable<V> {
    /// Build a table from an ordered sequence of routes.
    ///
    /// Every path must carry a leading `/`; paths and names must be pairwise
    /// distinct. Declaration order is preserved and acts as the tie-break
    /// should overlapping patterns ever be introduced.
    pub fn new(routes: Vec<Route<V>>) -> Result<Self, TableError> {
        for (i, route) in routes.iter().enumerate() {
            if !route.path.starts_with('/') {
                return Err(TableError::InvalidPath(route.path.clone()));
            }
            for earlier in &routes[..i] {
                if earlier.path == route.path {
                    return Err(TableError::DuplicatePath(route.path.clone()));
                }
                if earlier.name == route.name {
                    return Err(TableError::DuplicateName(route.name.clone()));
                }
            }
        }

        tracing::info!(count = routes.len(), "Route table constructed");
        Ok(Self { routes })
    }

    /// Exact-match lookup by path. First match wins.
    pub fn resolve(&self, path: &str) -> Option<&Route<V>> {
        self.routes.iter().find(|r| r.path == path)
    }

    /// Lookup by logical route name.
    pub fn resolve_name(&self, name: &str) -> Option<&Route<V>> {
        self.routes.iter().find(|r| r.name == name)
    }

    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// The application route table: main console at `/`, overlay at `/overlay`.
pub fn app_routes<V>(main_console: V, overlay: V) -> Result<RouteTable<V>, TableError> {
    RouteTable::new(vec![
        Route::new("/", "Main", main_console),
        Route::new("/overlay", "Overlay", overlay),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_routes_bindings() {
        let table = app_routes("console-view", "overlay-view").expect("failed to build table");

        let main = table.resolve("/").expect("missing route for /");
        assert_eq!(main.name, "Main");
        assert_eq!(main.view, "console-view");

        let overlay = table.resolve("/overlay").expect("missing route for /overlay");
        assert_eq!(overlay.name, "Overlay");
        assert_eq!(overlay.view, "overlay-view");

        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_resolve_unknown_path() {
        let table = app_routes((), ()).expect("failed to build table");
        assert!(table.resolve("/missing").is_none());
        assert!(table.resolve("").is_none());
        assert!(table.resolve("overlay").is_none());
    }

    #[test]
    fn test_resolve_is_exact_not_prefix() {
        let table = app_routes((), ()).expect("failed to build table");
        assert!(table.resolve("/overlay/").is_none());
        assert!(table.resolve("/overlay/settings").is_none());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let table = app_routes("console-view", "overlay-view").expect("failed to build table");
        let first = table.resolve("/overlay").expect("missing route").view;
        let second = table.resolve("/overlay").expect("missing route").view;
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_name() {
        let table = app_routes("console-view", "overlay-view").expect("failed to build table");
        assert_eq!(
            table.resolve_name("Main").expect("missing Main route").path,
            "/"
        );
        assert_eq!(
            table
                .resolve_name("Overlay")
                .expect("missing Overlay route")
                .path,
            "/overlay"
        );
        assert!(table.resolve_name("Settings").is_none());
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let err = RouteTable::new(vec![
            Route::new("/", "Main", ()),
            Route::new("/", "Other", ()),
        ])
        .expect_err("duplicate path should be rejected");
        assert!(matches!(err, TableError::DuplicatePath(p) if p == "/"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = RouteTable::new(vec![
            Route::new("/", "Main", ()),
            Route::new("/other", "Main", ()),
        ])
        .expect_err("duplicate name should be rejected");
        assert!(matches!(err, TableError::DuplicateName(n) if n == "Main"));
    }

    #[test]
    fn test_malformed_path_rejected() {
        let err = RouteTable::new(vec![Route::new("overlay", "Overlay", ())])
            .expect_err("path without leading slash should be rejected");
        assert!(matches!(err, TableError::InvalidPath(p) if p == "overlay"));

        let err = RouteTable::new(vec![Route::new("", "Empty", ())])
            .expect_err("empty path should be rejected");
        assert!(matches!(err, TableError::InvalidPath(p) if p.is_empty()));
    }

    #[test]
    fn test_empty_table_is_valid() {
        let table = RouteTable::<()>::new(Vec::new()).expect("empty table should build");
        assert!(table.is_empty());
        assert!(table.resolve("/").is_none());
    }
}
