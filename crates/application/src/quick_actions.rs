use leavedesk_domain::{QuickKey, Role, RouteName};

/// Returns the ordered quick-action shortcuts for `role`. May be empty.
#[must_use]
pub fn resolve_quick_actions(role: Role) -> Vec<QuickKey> {
    role.quick_actions().to_vec()
}

/// Returns the navigation target for a selected shortcut.
#[must_use]
pub fn route_for(key: QuickKey) -> RouteName {
    key.route()
}

/// Returns shortcuts for `role` paired with their navigation targets.
#[must_use]
pub fn resolve_quick_routes(role: Role) -> Vec<(QuickKey, RouteName)> {
    role.quick_actions()
        .iter()
        .map(|key| (*key, route_for(*key)))
        .collect()
}

#[cfg(test)]
mod tests {
    use leavedesk_domain::{QuickKey, Role, RouteName};

    use super::{resolve_quick_actions, resolve_quick_routes, route_for};

    #[test]
    fn employee_shortcuts_keep_their_order() {
        assert_eq!(
            resolve_quick_actions(Role::Emp),
            vec![
                QuickKey::MenuLeave,
                QuickKey::MenuHistory,
                QuickKey::MenuAttendance,
                QuickKey::MenuHoliday,
            ]
        );
    }

    #[test]
    fn roles_without_shortcuts_resolve_to_empty() {
        assert!(resolve_quick_actions(Role::ItSupport).is_empty());
        assert!(resolve_quick_routes(Role::ItSupport).is_empty());
    }

    #[test]
    fn approve_opens_the_approvals_inbox() {
        assert_eq!(route_for(QuickKey::MenuApprove), RouteName::LeaveApprovals);
    }

    #[test]
    fn routes_follow_shortcut_order() {
        let routes = resolve_quick_routes(Role::Auditor);
        assert_eq!(
            routes,
            vec![
                (QuickKey::MenuAudit, RouteName::AuditLog),
                (QuickKey::MenuReports, RouteName::Reports),
            ]
        );
    }
}
