use leavedesk_application::AccessProjection;
use leavedesk_domain::{Role, Scope, UserProfile};
use serde::Serialize;
use ts_rs::TS;

/// Resolved visibility per resource family; `null` means hidden.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/leave-types/src/generated/scope-map-response.ts"
)]
pub struct ScopeMapResponse {
    pub leave: Option<String>,
    pub attendance: Option<String>,
}

/// Quick-action shortcut with its navigation target.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/leave-types/src/generated/quick-action-response.ts"
)]
pub struct QuickActionResponse {
    pub key: String,
    pub route: String,
}

/// Access projection consumed by the mobile navigation shell.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/leave-types/src/generated/access-projection-response.ts"
)]
pub struct AccessProjectionResponse {
    pub user_id: String,
    pub display_name: String,
    pub held_roles: Vec<String>,
    pub acting_role: String,
    pub permissions: Vec<String>,
    pub scopes: ScopeMapResponse,
    pub tabs: Vec<String>,
    pub initial_tab: String,
    pub remount_key: String,
    pub quick_actions: Vec<QuickActionResponse>,
}

impl AccessProjectionResponse {
    pub fn from_projection(profile: &UserProfile, projection: &AccessProjection) -> Self {
        let scope_value = |scope: Option<Scope>| scope.map(|value| value.as_str().to_owned());

        Self {
            user_id: profile.identity().id().to_owned(),
            display_name: profile.identity().display_name().to_owned(),
            held_roles: profile
                .roles()
                .iter()
                .map(|role| role.as_str().to_owned())
                .collect(),
            acting_role: projection.acting_role.as_str().to_owned(),
            permissions: projection.permissions.to_storage_values(),
            scopes: ScopeMapResponse {
                leave: scope_value(projection.scopes.leave),
                attendance: scope_value(projection.scopes.attendance),
            },
            tabs: projection
                .tabs
                .as_slice()
                .iter()
                .map(|tab| tab.as_str().to_owned())
                .collect(),
            initial_tab: projection.initial_tab.as_str().to_owned(),
            remount_key: projection.remount_key.clone(),
            quick_actions: projection
                .quick_actions
                .iter()
                .map(|key| QuickActionResponse {
                    key: key.as_str().to_owned(),
                    route: key.route().as_str().to_owned(),
                })
                .collect(),
        }
    }
}

/// Held role entry, exported so the UI can offer a role switcher.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/leave-types/src/generated/role-option-response.ts"
)]
pub struct RoleOptionResponse {
    pub role: String,
    pub is_active: bool,
}

impl RoleOptionResponse {
    pub fn options_for(profile: &UserProfile, acting_role: Role) -> Vec<Self> {
        profile
            .roles()
            .iter()
            .map(|role| Self {
                role: role.as_str().to_owned(),
                is_active: *role == acting_role,
            })
            .collect()
    }
}
