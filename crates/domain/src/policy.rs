//! Compiled-in role policy.
//!
//! `Role::permissions` is the single source of truth for what a role may do.
//! Each row grants at most one `view_*` scope per resource family; broader
//! scopes imply narrower reasoning through scope resolution, not through
//! extra tokens.

use crate::{Permission, QuickKey, Role, TabKey};

use crate::Permission::*;

const EMPLOYEE: &[Permission] = &[
    LeaveApply,
    LeaveCancel,
    LeaveViewOwn,
    AttendanceMark,
    AttendanceViewOwn,
    HolidayView,
    TabHome,
    TabHistory,
    TabProfile,
];

const CONTRACTOR: &[Permission] = &[
    LeaveApply,
    LeaveCancel,
    LeaveViewOwn,
    AttendanceMark,
    AttendanceViewOwn,
    HolidayView,
    TabHome,
    TabHistory,
    TabProfile,
];

const INTERN: &[Permission] = &[
    LeaveApply,
    LeaveViewOwn,
    AttendanceMark,
    AttendanceViewOwn,
    HolidayView,
    TabHome,
    TabHistory,
    TabProfile,
];

const TEAM_LEAD: &[Permission] = &[
    LeaveApply,
    LeaveCancel,
    LeaveApprove,
    LeaveViewTeam,
    AttendanceMark,
    AttendanceViewTeam,
    HolidayView,
    EmployeeView,
    PerksView,
    TabHome,
    TabHistory,
    TabTeam,
    TabPerks,
    TabProfile,
];

const MANAGER: &[Permission] = &[
    LeaveApply,
    LeaveCancel,
    LeaveApprove,
    LeaveViewTeam,
    AttendanceMark,
    AttendanceEdit,
    AttendanceViewTeam,
    HolidayView,
    ReportView,
    EmployeeView,
    PerksView,
    TabHome,
    TabHistory,
    TabTeam,
    TabPerks,
    TabProfile,
];

const HR_STAFF: &[Permission] = &[
    LeaveApply,
    LeaveCancel,
    LeaveViewOrg,
    AttendanceMark,
    AttendanceViewOrg,
    HolidayView,
    HolidayManage,
    EmployeeView,
    PerksView,
    TabHome,
    TabHistory,
    TabTeam,
    TabPerks,
    TabProfile,
];

const HR_ADMIN: &[Permission] = &[
    LeaveApply,
    LeaveCancel,
    LeaveApprove,
    LeaveViewOrg,
    LeaveManagePolicy,
    AttendanceMark,
    AttendanceEdit,
    AttendanceViewOrg,
    HolidayView,
    HolidayManage,
    ReportView,
    ReportExport,
    EmployeeView,
    EmployeeManage,
    PerksView,
    TabHome,
    TabHistory,
    TabTeam,
    TabPerks,
    TabProfile,
];

const ATTENDANCE_ADMIN: &[Permission] = &[
    LeaveApply,
    LeaveViewOwn,
    AttendanceMark,
    AttendanceEdit,
    AttendanceViewOrg,
    HolidayView,
    ReportView,
    TabHome,
    TabHistory,
    TabTeam,
    TabProfile,
];

const PAYROLL: &[Permission] = &[
    LeaveApply,
    LeaveViewOrg,
    AttendanceMark,
    AttendanceViewOrg,
    HolidayView,
    PayrollView,
    PayrollProcess,
    ReportView,
    EmployeeView,
    TabHome,
    TabHistory,
    TabProfile,
];

const FINANCE: &[Permission] = &[
    LeaveApply,
    LeaveViewOwn,
    AttendanceMark,
    AttendanceViewOwn,
    HolidayView,
    PayrollView,
    ReportView,
    ReportExport,
    TabHome,
    TabHistory,
    TabProfile,
];

const AUDITOR: &[Permission] = &[
    LeaveViewOrg,
    AttendanceViewOrg,
    HolidayView,
    ReportView,
    ReportExport,
    EmployeeView,
    AuditView,
    TabHome,
    TabTeam,
    TabProfile,
];

const IT_SUPPORT: &[Permission] = &[EmployeeView, TabProfile];

const ORG_ADMIN: &[Permission] = &[
    LeaveApply,
    LeaveCancel,
    LeaveApprove,
    LeaveViewOrg,
    LeaveManagePolicy,
    AttendanceMark,
    AttendanceEdit,
    AttendanceViewOrg,
    HolidayView,
    HolidayManage,
    ReportView,
    ReportExport,
    EmployeeView,
    EmployeeManage,
    OrgManage,
    AuditView,
    PerksView,
    TabHome,
    TabHistory,
    TabTeam,
    TabPerks,
    TabProfile,
];

const OWNER: &[Permission] = &[
    LeaveApply,
    LeaveCancel,
    LeaveApprove,
    LeaveViewOrg,
    LeaveManagePolicy,
    AttendanceMark,
    AttendanceEdit,
    AttendanceViewOrg,
    HolidayView,
    HolidayManage,
    PayrollView,
    ReportView,
    ReportExport,
    EmployeeView,
    EmployeeManage,
    OrgManage,
    AuditView,
    PerksView,
    TabHome,
    TabHistory,
    TabTeam,
    TabPerks,
    TabProfile,
];

const SUPER_ADMIN: &[Permission] = &[
    LeaveApply,
    LeaveCancel,
    LeaveApprove,
    LeaveViewOrg,
    LeaveManagePolicy,
    AttendanceMark,
    AttendanceEdit,
    AttendanceViewOrg,
    HolidayView,
    HolidayManage,
    PayrollView,
    PayrollProcess,
    ReportView,
    ReportExport,
    EmployeeView,
    EmployeeManage,
    OrgManage,
    AuditView,
    PerksView,
    TabHome,
    TabHistory,
    TabTeam,
    TabPerks,
    TabProfile,
];

impl Role {
    /// Returns the permissions granted to this role.
    #[must_use]
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Self::SuperAdmin => SUPER_ADMIN,
            Self::OrgAdmin => ORG_ADMIN,
            Self::HrAdmin => HR_ADMIN,
            Self::Manager => MANAGER,
            Self::TeamLead => TEAM_LEAD,
            Self::HrStaff => HR_STAFF,
            Self::AttendanceAdmin => ATTENDANCE_ADMIN,
            Self::Payroll => PAYROLL,
            Self::Finance => FINANCE,
            Self::Auditor => AUDITOR,
            Self::ItSupport => IT_SUPPORT,
            Self::Emp => EMPLOYEE,
            Self::Contractor => CONTRACTOR,
            Self::Intern => INTERN,
            Self::Owner => OWNER,
        }
    }

    /// Returns whether this role alone grants `permission`.
    #[must_use]
    pub fn grants(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }

    /// Returns the tabs this role is entitled to, in canonical order.
    ///
    /// Derived from the role's `tab:*` permissions.
    #[must_use]
    pub fn entitled_tabs(&self) -> Vec<TabKey> {
        TabKey::all()
            .iter()
            .copied()
            .filter(|tab| self.grants(tab.permission()))
            .collect()
    }

    /// Returns the ordered quick-action shortcuts for this role.
    #[must_use]
    pub fn quick_actions(&self) -> &'static [QuickKey] {
        use crate::QuickKey::*;

        match self {
            Self::SuperAdmin => &[
                MenuSettings,
                MenuEmployees,
                MenuAudit,
                MenuReports,
                MenuApprove,
            ],
            Self::OrgAdmin => &[
                MenuApprove,
                MenuEmployees,
                MenuReports,
                MenuSettings,
                MenuAudit,
            ],
            Self::HrAdmin => &[
                MenuApprove,
                MenuEmployees,
                MenuReports,
                MenuHoliday,
                MenuPerks,
            ],
            Self::Manager => &[
                MenuApprove,
                MenuTeam,
                MenuLeave,
                MenuReports,
                MenuAttendance,
            ],
            Self::TeamLead => &[MenuApprove, MenuLeave, MenuTeam, MenuAttendance],
            Self::HrStaff => &[
                MenuEmployees,
                MenuHoliday,
                MenuPerks,
                MenuLeave,
                MenuAttendance,
            ],
            Self::AttendanceAdmin => &[MenuAttendance, MenuReports, MenuLeave],
            Self::Payroll => &[MenuPayroll, MenuReports, MenuAttendance],
            Self::Finance => &[MenuPayroll, MenuReports, MenuLeave],
            Self::Auditor => &[MenuAudit, MenuReports],
            Self::ItSupport => &[],
            Self::Emp => &[MenuLeave, MenuHistory, MenuAttendance, MenuHoliday],
            Self::Contractor => &[MenuLeave, MenuHistory, MenuAttendance],
            Self::Intern => &[MenuLeave, MenuHistory, MenuHoliday],
            Self::Owner => &[MenuReports, MenuApprove, MenuPayroll, MenuSettings],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{Permission, ResourceFamily, Role, Scope, TabKey};

    #[test]
    fn rows_have_no_duplicate_tokens() {
        for role in Role::all() {
            let unique: HashSet<Permission> = role.permissions().iter().copied().collect();
            assert_eq!(unique.len(), role.permissions().len(), "{role}");
        }
    }

    #[test]
    fn rows_grant_at_most_one_view_scope_per_family() {
        for role in Role::all() {
            for family in [ResourceFamily::Leave, ResourceFamily::Attendance] {
                let granted = [Scope::Own, Scope::Team, Scope::Org]
                    .into_iter()
                    .filter(|scope| role.grants(family.view_permission(*scope)))
                    .count();
                assert!(granted <= 1, "{role} grants {granted} {family:?} scopes");
            }
        }
    }

    #[test]
    fn employee_tab_entitlement() {
        assert_eq!(
            Role::Emp.entitled_tabs(),
            vec![TabKey::Home, TabKey::History, TabKey::Profile]
        );
    }

    #[test]
    fn every_role_is_entitled_to_profile() {
        for role in Role::all() {
            assert!(role.entitled_tabs().contains(&TabKey::Profile), "{role}");
        }
    }

    #[test]
    fn quick_actions_are_backed_by_role_permissions() {
        for role in Role::all() {
            for key in role.quick_actions() {
                assert!(
                    role.grants(key.required_permission()),
                    "{role} lacks {} for {}",
                    key.required_permission().as_str(),
                    key.as_str()
                );
            }
        }
    }

    #[test]
    fn quick_actions_have_no_duplicates() {
        for role in Role::all() {
            let unique: HashSet<_> = role.quick_actions().iter().collect();
            assert_eq!(unique.len(), role.quick_actions().len(), "{role}");
        }
    }

    #[test]
    fn it_support_has_no_shortcuts() {
        assert!(Role::ItSupport.quick_actions().is_empty());
    }
}
