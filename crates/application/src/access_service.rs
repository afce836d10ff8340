use leavedesk_domain::{
    FALLBACK_ROLE, Permission, PermissionSet, QuickKey, Role, RolePriority, TabKey, UserProfile,
    VisibleTabs,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    ScopeMap, collect_permissions, resolve_quick_actions, resolve_scopes, resolve_tabs,
    resolve_tabs_for_permissions,
};

/// Which held roles contribute to the permission set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AggregationMode {
    /// Only the acting role contributes.
    #[default]
    ActingRole,
    /// Every held role contributes, unless the user switched to an explicit
    /// active role; then only that role does.
    AllHeldRoles,
}

impl AggregationMode {
    /// Returns the stable mode value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ActingRole => "acting",
            Self::AllHeldRoles => "all",
        }
    }
}

/// UI-facing access derived from one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessProjection {
    /// Role the UI acts as.
    pub acting_role: Role,
    /// Flattened permissions.
    pub permissions: PermissionSet,
    /// Visibility per resource family.
    pub scopes: ScopeMap,
    /// Tabs to mount, never empty.
    pub tabs: VisibleTabs,
    /// Tab selected on mount.
    pub initial_tab: TabKey,
    /// Navigation container key; changes whenever `tabs` does.
    pub remount_key: String,
    /// Ordered home-screen shortcuts.
    pub quick_actions: Vec<QuickKey>,
}

impl AccessProjection {
    /// Returns whether the projection grants `permission`.
    #[must_use]
    pub fn can(&self, permission: Permission) -> bool {
        self.permissions.contains(permission)
    }
}

/// Derives access projections from user profiles.
#[derive(Debug, Clone, Default)]
pub struct AccessService {
    priority: RolePriority,
}

impl AccessService {
    /// Creates a service that breaks role ties with `priority`.
    #[must_use]
    pub fn new(priority: RolePriority) -> Self {
        Self { priority }
    }

    /// Returns the role the UI should act as.
    ///
    /// An explicit active role wins; otherwise the highest-priority held role,
    /// falling back to the employee role.
    #[must_use]
    pub fn acting_role(&self, profile: &UserProfile) -> Role {
        profile.active_role().unwrap_or_else(|| {
            self.priority
                .highest(profile.roles().iter().copied())
                .unwrap_or(FALLBACK_ROLE)
        })
    }

    /// Derives the full projection from the current profile.
    ///
    /// Always recomputed; callers re-run it after any role switch or refresh.
    #[must_use]
    pub fn derive(&self, profile: &UserProfile, mode: AggregationMode) -> AccessProjection {
        if !profile.rejected_roles().is_empty() {
            warn!(
                user_id = %profile.identity().id(),
                rejected = ?profile.rejected_roles(),
                "profile carried unknown roles"
            );
        }

        let acting_role = self.acting_role(profile);
        let (permissions, tabs) = match mode {
            AggregationMode::AllHeldRoles
                if profile.active_role().is_none() && !profile.roles().is_empty() =>
            {
                let permissions = collect_permissions(profile.roles());
                let tabs = resolve_tabs_for_permissions(&permissions, profile.menus());
                (permissions, tabs)
            }
            _ => (
                collect_permissions(&[acting_role]),
                resolve_tabs(acting_role, profile.menus()),
            ),
        };

        let projection = AccessProjection {
            acting_role,
            scopes: resolve_scopes(&permissions),
            initial_tab: tabs.initial_tab(),
            remount_key: tabs.remount_key(),
            quick_actions: resolve_quick_actions(acting_role),
            permissions,
            tabs,
        };

        debug!(
            user_id = %profile.identity().id(),
            acting_role = %projection.acting_role,
            mode = mode.as_str(),
            permission_count = projection.permissions.len(),
            remount_key = %projection.remount_key,
            "derived access projection"
        );

        projection
    }
}
