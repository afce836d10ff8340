use leavedesk_domain::{FALLBACK_ROLE, Role, RolePriority};

/// Picks the acting role from raw role strings using the default priority.
///
/// Matching ignores case; unknown entries are discarded. Returns
/// [`FALLBACK_ROLE`] when nothing valid remains.
#[must_use]
pub fn pick_primary_role<S: AsRef<str>>(input: &[S]) -> Role {
    pick_primary_role_with(input, &RolePriority::default())
}

/// Picks the acting role from raw role strings using `priority`.
#[must_use]
pub fn pick_primary_role_with<S: AsRef<str>>(input: &[S], priority: &RolePriority) -> Role {
    priority
        .highest(
            input
                .iter()
                .filter_map(|entry| Role::parse_loose(entry.as_ref())),
        )
        .unwrap_or(FALLBACK_ROLE)
}

#[cfg(test)]
mod tests {
    use leavedesk_domain::{Role, RolePriority};

    use super::{pick_primary_role, pick_primary_role_with};

    #[test]
    fn manager_outranks_employee() {
        assert_eq!(pick_primary_role(&["EMP", "MANAGER"]), Role::Manager);
        assert_eq!(pick_primary_role(&["manager", "emp"]), Role::Manager);
    }

    #[test]
    fn empty_or_unknown_input_falls_back_to_employee() {
        let empty: [&str; 0] = [];
        assert_eq!(pick_primary_role(&empty), Role::Emp);
        assert_eq!(pick_primary_role(&["BOGUS"]), Role::Emp);
        assert_eq!(pick_primary_role(&["", "  "]), Role::Emp);
    }

    #[test]
    fn duplicates_resolve_to_the_role() {
        assert_eq!(pick_primary_role(&["intern", "INTERN"]), Role::Intern);
    }

    #[test]
    fn unknown_entries_do_not_shadow_valid_ones() {
        assert_eq!(
            pick_primary_role(&["root", "auditor", "finance"]),
            Role::Finance
        );
    }

    #[test]
    fn custom_priority_is_honoured() {
        let mut order = RolePriority::default().as_slice().to_vec();
        order.retain(|role| *role != Role::Emp);
        order.insert(0, Role::Emp);
        let Ok(priority) = RolePriority::try_new(order) else {
            panic!("reordered catalog must remain valid");
        };

        assert_eq!(
            pick_primary_role_with(&["MANAGER", "EMP"], &priority),
            Role::Emp
        );
    }

    #[test]
    fn owned_strings_are_accepted() {
        let input = vec!["Owner".to_owned(), "superadmin".to_owned()];
        assert_eq!(pick_primary_role(&input), Role::SuperAdmin);
    }
}
