//! Access derivation for the leave client.
//!
//! Every function here is pure: it reads compiled-in policy plus the
//! arguments it is given and never touches global state.

#![forbid(unsafe_code)]

mod access_service;
mod permission_aggregator;
mod primary_role;
mod quick_actions;
mod scope_resolver;
mod tab_visibility;

pub use access_service::{AccessProjection, AccessService, AggregationMode};
pub use permission_aggregator::{collect_permissions, collect_permissions_loose};
pub use primary_role::{pick_primary_role, pick_primary_role_with};
pub use quick_actions::{resolve_quick_actions, resolve_quick_routes, route_for};
pub use scope_resolver::{ScopeMap, resolve_scope, resolve_scopes};
pub use tab_visibility::{resolve_tabs, resolve_tabs_for_permissions};
