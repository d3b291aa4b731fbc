//! Event constants and payloads handed to the application shell.
//!
//! The shell owns mounting and transport. On a successful navigation it
//! receives the resolved binding as a payload and decides what to do with it
//! (mount the view, broadcast to windows, mirror into the address bar).

use serde::Serialize;
use serde_json::{Value, json};

use crate::route::Route;

pub const ROUTE_CHANGED: &str = "route_changed";

/// Payload describing the newly active route.
#[derive(Debug, Clone, Serialize)]
pub struct RouteChangedPayload {
    pub path: String,
    pub name: String,
}

impl RouteChangedPayload {
    pub fn from_route<V>(route: &Route<V>) -> Self {
        Self {
            path: route.path.clone(),
            name: route.name.clone(),
        }
    }
}

/// Wire envelope broadcast to shell transports.
pub fn route_changed_message(payload: &RouteChangedPayload) -> Value {
    json!({
        "type": ROUTE_CHANGED,
        "data": payload,
    })
}
