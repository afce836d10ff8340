use std::fmt::{Display, Formatter};
use std::str::FromStr;

use leavedesk_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Role used when a user holds no recognised role.
pub const FALLBACK_ROLE: Role = Role::Emp;

/// Organizational roles known to the leave client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Platform operator with every capability.
    SuperAdmin,
    /// Administrator of one organization.
    OrgAdmin,
    /// Head of human resources.
    HrAdmin,
    /// People manager approving leave for direct reports.
    Manager,
    /// Team lead with team visibility.
    TeamLead,
    /// Human resources staff member.
    HrStaff,
    /// Maintains attendance records across the organization.
    AttendanceAdmin,
    /// Payroll processor.
    Payroll,
    /// Finance staff with payroll read access.
    Finance,
    /// Read-only compliance auditor.
    Auditor,
    /// IT support staff.
    ItSupport,
    /// Regular employee.
    Emp,
    /// External contractor.
    Contractor,
    /// Intern.
    Intern,
    /// Organization owner.
    Owner,
}

impl Role {
    /// Returns the stable wire value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "SUPERADMIN",
            Self::OrgAdmin => "ORGADMIN",
            Self::HrAdmin => "HRADMIN",
            Self::Manager => "MANAGER",
            Self::TeamLead => "TEAMLEAD",
            Self::HrStaff => "HRSTAFF",
            Self::AttendanceAdmin => "ATTENDANCEADMIN",
            Self::Payroll => "PAYROLL",
            Self::Finance => "FINANCE",
            Self::Auditor => "AUDITOR",
            Self::ItSupport => "ITSUPPORT",
            Self::Emp => "EMP",
            Self::Contractor => "CONTRACTOR",
            Self::Intern => "INTERN",
            Self::Owner => "OWNER",
        }
    }

    /// Returns every role in the catalog.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[
            Role::SuperAdmin,
            Role::OrgAdmin,
            Role::HrAdmin,
            Role::Manager,
            Role::TeamLead,
            Role::HrStaff,
            Role::AttendanceAdmin,
            Role::Payroll,
            Role::Finance,
            Role::Auditor,
            Role::ItSupport,
            Role::Emp,
            Role::Contractor,
            Role::Intern,
            Role::Owner,
        ];

        ALL
    }

    /// Parses a raw profile value, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for values outside the catalog.
    #[must_use]
    pub fn parse_loose(value: &str) -> Option<Self> {
        Self::from_str(value.trim().to_ascii_uppercase().as_str()).ok()
    }
}

impl Display for Role {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| AppError::Validation(format!("unknown role value '{value}'")))
    }
}

const DEFAULT_PRIORITY: [Role; 15] = [
    Role::SuperAdmin,
    Role::Owner,
    Role::OrgAdmin,
    Role::HrAdmin,
    Role::Manager,
    Role::TeamLead,
    Role::HrStaff,
    Role::AttendanceAdmin,
    Role::Payroll,
    Role::Finance,
    Role::Auditor,
    Role::ItSupport,
    Role::Emp,
    Role::Contractor,
    Role::Intern,
];

/// Total order over the role catalog, most privileged first.
///
/// Every catalog role appears exactly once, so every role has a rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePriority(Vec<Role>);

impl RolePriority {
    /// Creates a validated priority order.
    pub fn try_new(order: Vec<Role>) -> AppResult<Self> {
        for role in Role::all() {
            let occurrences = order.iter().filter(|value| *value == role).count();
            match occurrences {
                1 => {}
                0 => {
                    return Err(AppError::Validation(format!(
                        "role priority is missing role '{role}'"
                    )));
                }
                _ => {
                    return Err(AppError::Validation(format!(
                        "role priority lists role '{role}' {occurrences} times"
                    )));
                }
            }
        }

        Ok(Self(order))
    }

    /// Parses a comma separated priority override such as `"OWNER,SUPERADMIN,..."`.
    pub fn parse_list(value: &str) -> AppResult<Self> {
        let order = value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                Role::parse_loose(entry).ok_or_else(|| {
                    AppError::Validation(format!("unknown role '{entry}' in role priority"))
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Self::try_new(order)
    }

    /// Returns the rank of a role; lower ranks are more privileged.
    #[must_use]
    pub fn rank(&self, role: Role) -> usize {
        self.0
            .iter()
            .position(|value| *value == role)
            .unwrap_or(self.0.len())
    }

    /// Returns the most privileged role among `roles`, if any.
    pub fn highest(&self, roles: impl IntoIterator<Item = Role>) -> Option<Role> {
        roles.into_iter().min_by_key(|role| self.rank(*role))
    }

    /// Returns the ordered roles.
    #[must_use]
    pub fn as_slice(&self) -> &[Role] {
        self.0.as_slice()
    }
}

impl Default for RolePriority {
    fn default() -> Self {
        Self(DEFAULT_PRIORITY.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{FALLBACK_ROLE, Role, RolePriority};

    #[test]
    fn role_roundtrip_storage_value() {
        for role in Role::all() {
            let restored = Role::from_str(role.as_str());
            assert!(matches!(restored, Ok(value) if value == *role));
        }
    }

    #[test]
    fn exact_parsing_is_case_sensitive() {
        assert!(Role::from_str("manager").is_err());
        assert_eq!(Role::parse_loose(" manager "), Some(Role::Manager));
        assert_eq!(Role::parse_loose("hrAdmin"), Some(Role::HrAdmin));
        assert_eq!(Role::parse_loose("BOGUS"), None);
    }

    #[test]
    fn serde_uses_wire_values() {
        let encoded = serde_json::to_string(&Role::AttendanceAdmin).unwrap_or_default();
        assert_eq!(encoded, "\"ATTENDANCEADMIN\"");
    }

    #[test]
    fn default_priority_covers_catalog_exactly_once() {
        let priority = RolePriority::default();
        assert_eq!(priority.as_slice().len(), Role::all().len());
        assert!(RolePriority::try_new(priority.as_slice().to_vec()).is_ok());
    }

    #[test]
    fn default_priority_places_auditor_between_finance_and_it_support() {
        let priority = RolePriority::default();
        assert!(priority.rank(Role::Finance) < priority.rank(Role::Auditor));
        assert!(priority.rank(Role::Auditor) < priority.rank(Role::ItSupport));
    }

    #[test]
    fn manager_outranks_employee() {
        let priority = RolePriority::default();
        assert_eq!(
            priority.highest([Role::Emp, Role::Manager]),
            Some(Role::Manager)
        );
        assert_eq!(priority.highest(Vec::<Role>::new()), None);
    }

    #[test]
    fn priority_rejects_missing_and_repeated_roles() {
        let mut order = RolePriority::default().as_slice().to_vec();
        order.pop();
        assert!(RolePriority::try_new(order.clone()).is_err());

        order.push(Role::SuperAdmin);
        assert!(RolePriority::try_new(order).is_err());
    }

    #[test]
    fn priority_list_override_parses() {
        let parsed = RolePriority::parse_list(
            "owner, superadmin, orgadmin, hradmin, manager, teamlead, hrstaff, \
             attendanceadmin, payroll, finance, auditor, itsupport, emp, contractor, intern",
        );
        assert!(matches!(parsed, Ok(ref value) if value.rank(Role::Owner) == 0));

        let unknown = RolePriority::parse_list("OWNER,JANITOR");
        assert!(unknown.is_err());
    }

    #[test]
    fn fallback_role_is_employee() {
        assert_eq!(FALLBACK_ROLE, Role::Emp);
    }
}
