use leavedesk_domain::{PermissionSet, Role, ServerMenu, TabKey, VisibleTabs};

/// Resolves the tabs to mount for `role`.
///
/// A tab is shown only when the role is entitled to it and the server menu
/// whitelist contains its menu key. Falls back to the profile tab when the
/// intersection is empty.
#[must_use]
pub fn resolve_tabs(role: Role, server_menus: &[ServerMenu]) -> VisibleTabs {
    server_gate(role.entitled_tabs(), server_menus)
}

/// Resolves tabs from an aggregated permission set instead of a single role.
#[must_use]
pub fn resolve_tabs_for_permissions(
    permissions: &PermissionSet,
    server_menus: &[ServerMenu],
) -> VisibleTabs {
    let entitled = TabKey::all()
        .iter()
        .copied()
        .filter(|tab| permissions.contains(tab.permission()));

    server_gate(entitled, server_menus)
}

fn server_gate(
    entitled: impl IntoIterator<Item = TabKey>,
    server_menus: &[ServerMenu],
) -> VisibleTabs {
    VisibleTabs::from_candidates(entitled.into_iter().filter(|tab| {
        server_menus
            .iter()
            .any(|menu| menu.key == tab.menu_key())
    }))
}
