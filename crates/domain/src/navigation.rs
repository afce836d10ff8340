use serde::{Deserialize, Serialize};

use crate::Permission;

/// Bottom navigation tabs, declared in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TabKey {
    /// Dashboard with balances and shortcuts.
    #[serde(rename = "HomeTab")]
    Home,
    /// Leave request history.
    #[serde(rename = "HistoryTab")]
    History,
    /// Team calendar and approvals.
    #[serde(rename = "TeamTab")]
    Team,
    /// Perks and benefits.
    #[serde(rename = "PerksTab")]
    Perks,
    /// User profile and settings.
    #[serde(rename = "ProfileTab")]
    Profile,
}

impl TabKey {
    /// Returns every tab in canonical order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[TabKey] = &[
            TabKey::Home,
            TabKey::History,
            TabKey::Team,
            TabKey::Perks,
            TabKey::Profile,
        ];

        ALL
    }

    /// Returns the screen name used by the navigation container.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "HomeTab",
            Self::History => "HistoryTab",
            Self::Team => "TeamTab",
            Self::Perks => "PerksTab",
            Self::Profile => "ProfileTab",
        }
    }

    /// Returns the server menu key that enables this tab.
    #[must_use]
    pub fn menu_key(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::History => "leave-history",
            Self::Team => "team",
            Self::Perks => "perks",
            Self::Profile => "profile",
        }
    }

    /// Returns the `tab:*` permission entitling this tab.
    #[must_use]
    pub fn permission(&self) -> Permission {
        match self {
            Self::Home => Permission::TabHome,
            Self::History => Permission::TabHistory,
            Self::Team => Permission::TabTeam,
            Self::Perks => Permission::TabPerks,
            Self::Profile => Permission::TabProfile,
        }
    }
}

/// Tab list the navigation container mounts. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VisibleTabs(Vec<TabKey>);

impl VisibleTabs {
    /// Tab shown when nothing else survives gating.
    pub const FALLBACK: TabKey = TabKey::Profile;

    /// Builds a tab list in canonical order, falling back to the profile tab
    /// when `candidates` is empty.
    pub fn from_candidates(candidates: impl IntoIterator<Item = TabKey>) -> Self {
        let mut tabs: Vec<TabKey> = candidates.into_iter().collect();
        tabs.sort();
        tabs.dedup();

        if tabs.is_empty() {
            tabs.push(Self::FALLBACK);
        }

        Self(tabs)
    }

    /// Returns the tab selected on (re)mount.
    #[must_use]
    pub fn initial_tab(&self) -> TabKey {
        if self.contains(TabKey::Home) {
            return TabKey::Home;
        }

        self.0.first().copied().unwrap_or(Self::FALLBACK)
    }

    /// Returns a key that changes whenever the tab set changes.
    #[must_use]
    pub fn remount_key(&self) -> String {
        self.0
            .iter()
            .map(TabKey::as_str)
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Returns whether `tab` is visible.
    #[must_use]
    pub fn contains(&self, tab: TabKey) -> bool {
        self.0.contains(&tab)
    }

    /// Returns the tabs in canonical order.
    #[must_use]
    pub fn as_slice(&self) -> &[TabKey] {
        self.0.as_slice()
    }
}

/// Server-side menu entry; the backend's whitelist of enabled UI surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServerMenu {
    /// Menu key, such as `"home"` or `"leave-history"`.
    pub key: String,
}

impl ServerMenu {
    /// Creates a menu entry.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Quick-action shortcuts shown on the home dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuickKey {
    /// Apply for leave.
    MenuLeave,
    /// Review pending approvals.
    MenuApprove,
    /// Browse leave history.
    MenuHistory,
    /// Mark or review attendance.
    MenuAttendance,
    /// Team overview.
    MenuTeam,
    /// Holiday calendar.
    MenuHoliday,
    /// Payroll summary.
    MenuPayroll,
    /// Reports.
    MenuReports,
    /// Employee directory.
    MenuEmployees,
    /// Audit trail.
    MenuAudit,
    /// Organization settings.
    MenuSettings,
    /// Perks and benefits.
    MenuPerks,
}

impl QuickKey {
    /// Returns every quick-action key.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[QuickKey] = &[
            QuickKey::MenuLeave,
            QuickKey::MenuApprove,
            QuickKey::MenuHistory,
            QuickKey::MenuAttendance,
            QuickKey::MenuTeam,
            QuickKey::MenuHoliday,
            QuickKey::MenuPayroll,
            QuickKey::MenuReports,
            QuickKey::MenuEmployees,
            QuickKey::MenuAudit,
            QuickKey::MenuSettings,
            QuickKey::MenuPerks,
        ];

        ALL
    }

    /// Returns the stable key value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MenuLeave => "MENU_LEAVE",
            Self::MenuApprove => "MENU_APPROVE",
            Self::MenuHistory => "MENU_HISTORY",
            Self::MenuAttendance => "MENU_ATTENDANCE",
            Self::MenuTeam => "MENU_TEAM",
            Self::MenuHoliday => "MENU_HOLIDAY",
            Self::MenuPayroll => "MENU_PAYROLL",
            Self::MenuReports => "MENU_REPORTS",
            Self::MenuEmployees => "MENU_EMPLOYEES",
            Self::MenuAudit => "MENU_AUDIT",
            Self::MenuSettings => "MENU_SETTINGS",
            Self::MenuPerks => "MENU_PERKS",
        }
    }

    /// Returns the navigation target opened by this shortcut.
    #[must_use]
    pub fn route(&self) -> RouteName {
        match self {
            Self::MenuLeave => RouteName::ApplyLeave,
            Self::MenuApprove => RouteName::LeaveApprovals,
            Self::MenuHistory => RouteName::LeaveHistory,
            Self::MenuAttendance => RouteName::Attendance,
            Self::MenuTeam => RouteName::TeamOverview,
            Self::MenuHoliday => RouteName::HolidayCalendar,
            Self::MenuPayroll => RouteName::PayrollSummary,
            Self::MenuReports => RouteName::Reports,
            Self::MenuEmployees => RouteName::EmployeeDirectory,
            Self::MenuAudit => RouteName::AuditLog,
            Self::MenuSettings => RouteName::OrgSettings,
            Self::MenuPerks => RouteName::Perks,
        }
    }

    /// Returns the permission the target screen relies on.
    #[must_use]
    pub fn required_permission(&self) -> Permission {
        match self {
            Self::MenuLeave => Permission::LeaveApply,
            Self::MenuApprove => Permission::LeaveApprove,
            Self::MenuHistory => Permission::TabHistory,
            Self::MenuAttendance => Permission::AttendanceMark,
            Self::MenuTeam => Permission::TabTeam,
            Self::MenuHoliday => Permission::HolidayView,
            Self::MenuPayroll => Permission::PayrollView,
            Self::MenuReports => Permission::ReportView,
            Self::MenuEmployees => Permission::EmployeeView,
            Self::MenuAudit => Permission::AuditView,
            Self::MenuSettings => Permission::OrgManage,
            Self::MenuPerks => Permission::PerksView,
        }
    }
}

/// Stack screens reachable from quick actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteName {
    /// Leave application form.
    ApplyLeave,
    /// Pending approvals inbox.
    LeaveApprovals,
    /// Leave history list.
    LeaveHistory,
    /// Attendance screen.
    Attendance,
    /// Team overview.
    TeamOverview,
    /// Holiday calendar.
    HolidayCalendar,
    /// Payroll summary.
    PayrollSummary,
    /// Reports.
    Reports,
    /// Employee directory.
    EmployeeDirectory,
    /// Audit log.
    AuditLog,
    /// Organization settings.
    OrgSettings,
    /// Perks and benefits.
    Perks,
}

impl RouteName {
    /// Returns the screen name registered with the navigator.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApplyLeave => "ApplyLeave",
            Self::LeaveApprovals => "LeaveApprovals",
            Self::LeaveHistory => "LeaveHistory",
            Self::Attendance => "Attendance",
            Self::TeamOverview => "TeamOverview",
            Self::HolidayCalendar => "HolidayCalendar",
            Self::PayrollSummary => "PayrollSummary",
            Self::Reports => "Reports",
            Self::EmployeeDirectory => "EmployeeDirectory",
            Self::AuditLog => "AuditLog",
            Self::OrgSettings => "OrgSettings",
            Self::Perks => "Perks",
        }
    }
}
