use leavedesk_domain::{PermissionSet, ResourceFamily, Scope};
use serde::Serialize;

/// Scopes checked from broadest to narrowest.
const PRECEDENCE: [Scope; 3] = [Scope::Org, Scope::Team, Scope::Own];

/// Returns the broadest visibility `permissions` grant over `resource`.
///
/// `None` means the caller must hide the data; it is not a default scope.
#[must_use]
pub fn resolve_scope(permissions: &PermissionSet, resource: ResourceFamily) -> Option<Scope> {
    PRECEDENCE
        .into_iter()
        .find(|scope| permissions.contains(resource.view_permission(*scope)))
}

/// Resolved visibility for every scoped resource family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScopeMap {
    /// Leave visibility.
    pub leave: Option<Scope>,
    /// Attendance visibility.
    pub attendance: Option<Scope>,
}

impl ScopeMap {
    /// Returns the scope resolved for `resource`.
    #[must_use]
    pub fn get(&self, resource: ResourceFamily) -> Option<Scope> {
        match resource {
            ResourceFamily::Leave => self.leave,
            ResourceFamily::Attendance => self.attendance,
        }
    }
}

/// Resolves every resource family at once.
#[must_use]
pub fn resolve_scopes(permissions: &PermissionSet) -> ScopeMap {
    ScopeMap {
        leave: resolve_scope(permissions, ResourceFamily::Leave),
        attendance: resolve_scope(permissions, ResourceFamily::Attendance),
    }
}
