use std::collections::BTreeSet;
use std::str::FromStr;

use leavedesk_core::AppError;
use serde::{Deserialize, Serialize};

/// Permission tokens granted by role policy.
///
/// Storage values take the form `"<resource>:<action>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Permission {
    /// Allows submitting leave requests.
    LeaveApply,
    /// Allows cancelling pending leave requests.
    LeaveCancel,
    /// Allows approving or rejecting leave requests.
    LeaveApprove,
    /// Allows viewing the user's own leave records.
    LeaveViewOwn,
    /// Allows viewing leave records of the user's team.
    LeaveViewTeam,
    /// Allows viewing leave records across the organization.
    LeaveViewOrg,
    /// Allows editing leave types and accrual policy.
    LeaveManagePolicy,
    /// Allows punching in and out.
    AttendanceMark,
    /// Allows correcting attendance entries.
    AttendanceEdit,
    /// Allows viewing the user's own attendance.
    AttendanceViewOwn,
    /// Allows viewing attendance of the user's team.
    AttendanceViewTeam,
    /// Allows viewing attendance across the organization.
    AttendanceViewOrg,
    /// Allows reading the holiday calendar.
    HolidayView,
    /// Allows maintaining the holiday calendar.
    HolidayManage,
    /// Allows reading payroll summaries.
    PayrollView,
    /// Allows running payroll.
    PayrollProcess,
    /// Allows reading reports.
    ReportView,
    /// Allows exporting reports.
    ReportExport,
    /// Allows browsing the employee directory.
    EmployeeView,
    /// Allows onboarding and editing employees.
    EmployeeManage,
    /// Allows changing organization settings.
    OrgManage,
    /// Allows reading the audit trail.
    AuditView,
    /// Allows reading perks and benefits.
    PerksView,
    /// Entitles the home tab.
    TabHome,
    /// Entitles the leave history tab.
    TabHistory,
    /// Entitles the team tab.
    TabTeam,
    /// Entitles the perks tab.
    TabPerks,
    /// Entitles the profile tab.
    TabProfile,
}

impl Permission {
    /// Returns a stable storage value for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LeaveApply => "leave:apply",
            Self::LeaveCancel => "leave:cancel",
            Self::LeaveApprove => "leave:approve",
            Self::LeaveViewOwn => "leave:view_own",
            Self::LeaveViewTeam => "leave:view_team",
            Self::LeaveViewOrg => "leave:view_org",
            Self::LeaveManagePolicy => "leave:manage_policy",
            Self::AttendanceMark => "attendance:mark",
            Self::AttendanceEdit => "attendance:edit",
            Self::AttendanceViewOwn => "attendance:view_own",
            Self::AttendanceViewTeam => "attendance:view_team",
            Self::AttendanceViewOrg => "attendance:view_org",
            Self::HolidayView => "holiday:view",
            Self::HolidayManage => "holiday:manage",
            Self::PayrollView => "payroll:view",
            Self::PayrollProcess => "payroll:process",
            Self::ReportView => "report:view",
            Self::ReportExport => "report:export",
            Self::EmployeeView => "employee:view",
            Self::EmployeeManage => "employee:manage",
            Self::OrgManage => "org:manage",
            Self::AuditView => "audit:view",
            Self::PerksView => "perks:view",
            Self::TabHome => "tab:home",
            Self::TabHistory => "tab:history",
            Self::TabTeam => "tab:team",
            Self::TabPerks => "tab:perks",
            Self::TabProfile => "tab:profile",
        }
    }

    /// Returns all known permissions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Permission] = &[
            Permission::LeaveApply,
            Permission::LeaveCancel,
            Permission::LeaveApprove,
            Permission::LeaveViewOwn,
            Permission::LeaveViewTeam,
            Permission::LeaveViewOrg,
            Permission::LeaveManagePolicy,
            Permission::AttendanceMark,
            Permission::AttendanceEdit,
            Permission::AttendanceViewOwn,
            Permission::AttendanceViewTeam,
            Permission::AttendanceViewOrg,
            Permission::HolidayView,
            Permission::HolidayManage,
            Permission::PayrollView,
            Permission::PayrollProcess,
            Permission::ReportView,
            Permission::ReportExport,
            Permission::EmployeeView,
            Permission::EmployeeManage,
            Permission::OrgManage,
            Permission::AuditView,
            Permission::PerksView,
            Permission::TabHome,
            Permission::TabHistory,
            Permission::TabTeam,
            Permission::TabPerks,
            Permission::TabProfile,
        ];

        ALL
    }

    /// Parses a transport value into a permission.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|permission| permission.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown permission value '{value}'")))
    }
}

impl TryFrom<String> for Permission {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

impl From<Permission> for String {
    fn from(value: Permission) -> Self {
        value.as_str().to_owned()
    }
}

/// Flattened permissions implied by one or more roles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<Permission>);

impl PermissionSet {
    /// Creates an empty permission set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the set contains `permission`.
    #[must_use]
    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    /// Returns whether every permission in `self` is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Returns the number of permissions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates permissions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0.iter().copied()
    }

    /// Returns storage values in declaration order.
    #[must_use]
    pub fn to_storage_values(&self) -> Vec<String> {
        self.iter().map(String::from).collect()
    }
}

impl Extend<Permission> for PermissionSet {
    fn extend<T: IntoIterator<Item = Permission>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<Permission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = Permission>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Breadth of data visibility for a resource family.
///
/// Variants are ordered by breadth, `Own < Team < Org`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Only the user's own records.
    Own,
    /// Records of the user's team.
    Team,
    /// Records across the organization.
    Org,
}

impl Scope {
    /// Returns the stable scope value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Own => "own",
            Self::Team => "team",
            Self::Org => "org",
        }
    }
}

/// Resource families with scoped visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceFamily {
    /// Leave requests and balances.
    Leave,
    /// Attendance records.
    Attendance,
}

impl ResourceFamily {
    /// Returns the resource prefix used in permission tokens.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Leave => "leave",
            Self::Attendance => "attendance",
        }
    }

    /// Returns the `view_*` permission granting `scope` over this family.
    #[must_use]
    pub fn view_permission(&self, scope: Scope) -> Permission {
        match (self, scope) {
            (Self::Leave, Scope::Own) => Permission::LeaveViewOwn,
            (Self::Leave, Scope::Team) => Permission::LeaveViewTeam,
            (Self::Leave, Scope::Org) => Permission::LeaveViewOrg,
            (Self::Attendance, Scope::Own) => Permission::AttendanceViewOwn,
            (Self::Attendance, Scope::Team) => Permission::AttendanceViewTeam,
            (Self::Attendance, Scope::Org) => Permission::AttendanceViewOrg,
        }
    }
}
