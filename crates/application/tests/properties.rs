//! Property tests for the access resolvers.

use leavedesk_application::{
    collect_permissions, pick_primary_role, resolve_quick_actions, resolve_scope, resolve_tabs,
    resolve_tabs_for_permissions,
};
use leavedesk_domain::{QuickKey, ResourceFamily, Role, ServerMenu, TabKey};
use proptest::prelude::*;
use proptest::sample::{select, subsequence};

fn any_role() -> impl Strategy<Value = Role> {
    select(Role::all().to_vec())
}

fn role_list() -> impl Strategy<Value = Vec<Role>> {
    prop::collection::vec(any_role(), 0..8)
}

fn raw_role_entry() -> impl Strategy<Value = String> {
    prop_oneof![
        any_role().prop_map(|role| role.as_str().to_owned()),
        any_role().prop_map(|role| role.as_str().to_lowercase()),
        "[a-zA-Z_ ]{0,12}",
    ]
}

fn server_menus() -> impl Strategy<Value = Vec<ServerMenu>> {
    let keys: Vec<String> = TabKey::all()
        .iter()
        .map(|tab| tab.menu_key().to_owned())
        .chain(["settings".to_owned(), "HOME".to_owned()])
        .collect();
    let max = keys.len();

    subsequence(keys, 0..=max).prop_map(|keys| keys.into_iter().map(ServerMenu::new).collect())
}

proptest! {
    #[test]
    fn primary_role_is_total(entries in prop::collection::vec(raw_role_entry(), 0..6)) {
        let role = pick_primary_role(&entries);
        prop_assert!(Role::all().contains(&role));
    }

    #[test]
    fn primary_role_is_held_or_fallback(roles in role_list()) {
        let entries: Vec<&str> = roles.iter().map(Role::as_str).collect();
        let role = pick_primary_role(&entries);
        if roles.is_empty() {
            prop_assert_eq!(role, Role::Emp);
        } else {
            prop_assert!(roles.contains(&role));
        }
    }

    #[test]
    fn union_is_monotonic(base in role_list(), extra in role_list()) {
        let mut widened = base.clone();
        widened.extend(extra);
        prop_assert!(collect_permissions(&base).is_subset(&collect_permissions(&widened)));
    }

    #[test]
    fn union_ignores_order(roles in role_list()) {
        let mut reversed = roles.clone();
        reversed.reverse();
        prop_assert_eq!(collect_permissions(&roles), collect_permissions(&reversed));
    }

    #[test]
    fn tabs_are_never_empty(role in any_role(), menus in server_menus()) {
        let tabs = resolve_tabs(role, &menus);
        prop_assert!(!tabs.as_slice().is_empty());
        prop_assert!(tabs.as_slice().contains(&tabs.initial_tab()));
    }

    #[test]
    fn tabs_respect_both_gates(role in any_role(), menus in server_menus()) {
        let tabs = resolve_tabs(role, &menus);
        if tabs.as_slice() != [TabKey::Profile] {
            for tab in tabs.as_slice() {
                prop_assert!(role.entitled_tabs().contains(tab));
                prop_assert!(menus.iter().any(|menu| menu.key == tab.menu_key()));
            }
        }
    }

    #[test]
    fn single_role_tabs_match_permission_tabs(role in any_role(), menus in server_menus()) {
        prop_assert_eq!(
            resolve_tabs(role, &menus),
            resolve_tabs_for_permissions(&collect_permissions(&[role]), &menus)
        );
    }

    #[test]
    fn resolvers_are_idempotent(roles in role_list(), menus in server_menus()) {
        let entries: Vec<&str> = roles.iter().map(Role::as_str).collect();
        let role = pick_primary_role(&entries);
        prop_assert_eq!(role, pick_primary_role(&entries));

        let permissions = collect_permissions(&roles);
        prop_assert_eq!(&permissions, &collect_permissions(&roles));
        prop_assert_eq!(
            resolve_scope(&permissions, ResourceFamily::Leave),
            resolve_scope(&permissions, ResourceFamily::Leave)
        );
        prop_assert_eq!(resolve_tabs(role, &menus), resolve_tabs(role, &menus));
        prop_assert_eq!(resolve_quick_actions(role), resolve_quick_actions(role));
    }

    #[test]
    fn quick_actions_all_have_routes(role in any_role()) {
        for key in resolve_quick_actions(role) {
            prop_assert!(QuickKey::all().contains(&key));
            prop_assert!(!key.route().as_str().is_empty());
        }
    }
}
