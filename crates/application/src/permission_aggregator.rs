use leavedesk_domain::{PermissionSet, Role, normalize_roles};
use tracing::warn;

/// Unions the policy rows of `roles`.
///
/// Order and duplicates in `roles` do not affect the result.
#[must_use]
pub fn collect_permissions(roles: &[Role]) -> PermissionSet {
    roles
        .iter()
        .flat_map(|role| role.permissions().iter().copied())
        .collect()
}

/// Unions the policy rows of raw role strings, ignoring unknown entries.
#[must_use]
pub fn collect_permissions_loose<S: AsRef<str>>(entries: &[S]) -> PermissionSet {
    let normalized = normalize_roles(entries);
    if !normalized.rejected.is_empty() {
        warn!(
            rejected = ?normalized.rejected,
            "ignoring unknown roles while collecting permissions"
        );
    }

    collect_permissions(&normalized.roles)
}

#[cfg(test)]
mod tests {
    use leavedesk_domain::{Permission, Role};

    use super::{collect_permissions, collect_permissions_loose};

    #[test]
    fn empty_role_list_grants_nothing() {
        assert!(collect_permissions(&[]).is_empty());
    }

    #[test]
    fn union_covers_every_row() {
        let permissions = collect_permissions(&[Role::Emp, Role::Payroll]);
        assert!(permissions.contains(Permission::LeaveViewOwn));
        assert!(permissions.contains(Permission::LeaveViewOrg));
        assert!(permissions.contains(Permission::PayrollProcess));
        assert!(!permissions.contains(Permission::OrgManage));
    }

    #[test]
    fn duplicates_and_order_do_not_matter() {
        let forward = collect_permissions(&[Role::Manager, Role::Auditor]);
        let backward = collect_permissions(&[Role::Auditor, Role::Manager, Role::Auditor]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn loose_entries_skip_unknown_roles() {
        let loose = collect_permissions_loose(&["teamlead", "BOGUS", ""]);
        assert_eq!(loose, collect_permissions(&[Role::TeamLead]));
    }
}
