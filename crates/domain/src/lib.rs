//! Domain catalogs, compiled-in access policy, and profile invariants.

#![forbid(unsafe_code)]

mod navigation;
mod permission;
mod policy;
mod profile;
mod role;

pub use navigation::{QuickKey, RouteName, ServerMenu, TabKey, VisibleTabs};
pub use permission::{Permission, PermissionSet, ResourceFamily, Scope};
pub use profile::{
    NormalizedRoles, ProfileSession, RawUserId, RawUserProfile, RoleEntry, RoleInput, UserProfile,
    normalize_roles,
};
pub use role::{FALLBACK_ROLE, Role, RolePriority};
