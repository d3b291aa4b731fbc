//! History-backed route table and navigator for the overlay application.
//!
//! Two page-level views exist: the main console at `/` and the overlay at
//! `/overlay`. The navigator resolves a requested path to its bound view and
//! appends the path to the host's addressable history; mounting the resolved
//! view is owned by the application shell.

pub mod events;
pub mod history;
pub mod navigator;
pub mod route;

pub use history::{History, MemoryHistory};
pub use navigator::Navigator;
pub use route::{Route, RouteTable, TableError, app_routes};

/// Navigation error type.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    /// No entry in the route table matches the requested path.
    #[error("no route matches path: {path}")]
    RouteNotFound { path: String },

    /// The host's history mechanism rejected the push (e.g. a non-browser
    /// context).
    #[error("history unavailable: {0}")]
    HistoryUnavailable(String),
}
