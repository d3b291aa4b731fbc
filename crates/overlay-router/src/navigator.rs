//! Path resolution and history-backed navigation.

use crate::NavigationError;
use crate::history::History;
use crate::route::{Route, RouteTable};

/// Resolves paths against the route table and writes the host's history.
///
/// The table is held by value and never mutated after construction.
/// Resolution is a pure lookup; the history push is the only side effect.
pub struct Navigator<V, H> {
    table: RouteTable<V>,
    history: H,
}

impl<V, H: History> Navigator<V, H> {
    pub fn new(table: RouteTable<V>, history: H) -> Self {
        Self { table, history }
    }

    /// Exact-match lookup. Never touches the history stack.
    pub fn resolve(&self, path: &str) -> Result<&Route<V>, NavigationError> {
        self.table
            .resolve(path)
            .ok_or_else(|| NavigationError::RouteNotFound {
                path: path.to_string(),
            })
    }

    /// Resolve `path`, push it onto the history stack (push, not replace) and
    /// return the bound route for the shell to mount.
    ///
    /// Resolution runs first: an unknown path never lands on the stack, so
    /// every entry already on it stays resolvable.
    pub fn navigate(&mut self, path: &str) -> Result<&Route<V>, NavigationError> {
        let Some(index) = self.table.routes().iter().position(|r| r.path == path) else {
            tracing::warn!(path, "Navigation to unmatched path rejected");
            return Err(NavigationError::RouteNotFound {
                path: path.to_string(),
            });
        };

        self.history.push(path)?;

        let route = &self.table.routes()[index];
        tracing::debug!(path = %route.path, name = %route.name, "Navigated");
        Ok(route)
    }

    /// Route bound to the path at the history cursor, or `None` before the
    /// first navigation.
    pub fn current(&self) -> Option<&Route<V>> {
        let path = self.history.current()?;
        self.table.resolve(path)
    }

    /// Step the history cursor back and resolve the now-current route.
    pub fn back(&mut self) -> Option<&Route<V>> {
        let path = self.history.back()?;
        self.table.resolve(path)
    }

    /// Step the history cursor forward and resolve the now-current route.
    pub fn forward(&mut self) -> Option<&Route<V>> {
        let path = self.history.forward()?;
        self.table.resolve(path)
    }

    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    pub fn history(&self) -> &H {
        &self.history
    }
}
