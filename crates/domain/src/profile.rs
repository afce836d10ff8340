//! User profile shapes and the role normalization boundary.
//!
//! Backend payloads have historically carried `roles` as a bare string, a
//! list, or not at all. [`RawUserProfile`] accepts all of those; everything
//! downstream works with the strict [`UserProfile`].

use leavedesk_core::{AppError, AppResult, UserIdentity};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Role, ServerMenu};

/// User identifier as sent by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawUserId {
    /// Numeric identifier.
    Number(u64),
    /// Text identifier.
    Text(String),
}

impl RawUserId {
    fn into_string(self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value,
        }
    }
}

/// One role entry as sent by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleEntry {
    /// Role name.
    Text(String),
    /// Any other JSON value; always rejected during normalization.
    Other(Value),
}

impl RoleEntry {
    fn into_text(self) -> Option<String> {
        match self {
            Self::Text(value) => Some(value),
            Self::Other(_) => None,
        }
    }
}

/// Role payload in any of the shapes the backend has sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleInput {
    /// A list of role entries.
    Many(Vec<RoleEntry>),
    /// A single role entry.
    Single(RoleEntry),
}

impl RoleInput {
    /// Flattens the payload into raw entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<RoleEntry> {
        match self {
            Self::Many(values) => values,
            Self::Single(value) => vec![value],
        }
    }
}

/// Loosest accepted profile payload.
///
/// Field shapes are never a reason to reject the payload; only `id` is
/// required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUserProfile {
    /// Backend user identifier.
    pub id: RawUserId,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Held roles.
    #[serde(default)]
    pub roles: Option<RoleInput>,
    /// Legacy single-role key; merged after `roles`.
    #[serde(default)]
    pub role: Option<RoleInput>,
    /// Role the user last switched to, if any.
    #[serde(default)]
    pub active_role: Option<RoleEntry>,
    /// Server menu whitelist.
    #[serde(default)]
    pub menus: Option<Vec<ServerMenu>>,
}

impl RawUserProfile {
    /// Returns text role entries and the rendering of every non-text entry.
    fn split_role_entries(&mut self) -> (Vec<String>, Vec<String>) {
        let mut texts = Vec::new();
        let mut malformed = Vec::new();

        let entries = self
            .roles
            .take()
            .into_iter()
            .chain(self.role.take())
            .flat_map(RoleInput::into_entries);
        for entry in entries {
            match entry {
                RoleEntry::Text(value) => texts.push(value),
                RoleEntry::Other(value) => malformed.push(value.to_string()),
            }
        }

        (texts, malformed)
    }
}

/// Outcome of normalizing raw role strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedRoles {
    /// Recognised roles, first occurrence order, without duplicates.
    pub roles: Vec<Role>,
    /// Entries that did not name a catalog role.
    pub rejected: Vec<String>,
}

/// Converts raw role strings into catalog roles.
///
/// Matching ignores case and surrounding whitespace. Unknown entries are
/// reported in [`NormalizedRoles::rejected`], never as an error.
pub fn normalize_roles<S: AsRef<str>>(entries: &[S]) -> NormalizedRoles {
    let mut normalized = NormalizedRoles::default();

    for entry in entries {
        let entry = entry.as_ref();
        match Role::parse_loose(entry) {
            Some(role) if !normalized.roles.contains(&role) => normalized.roles.push(role),
            Some(_) => {}
            None => normalized.rejected.push(entry.to_owned()),
        }
    }

    normalized
}

/// Normalized profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    identity: UserIdentity,
    roles: Vec<Role>,
    active_role: Option<Role>,
    menus: Vec<ServerMenu>,
    rejected_roles: Vec<String>,
}

impl UserProfile {
    /// Creates a profile from already-typed values.
    ///
    /// Fails when `active_role` is not one of `roles`.
    pub fn new(
        identity: UserIdentity,
        roles: Vec<Role>,
        active_role: Option<Role>,
        menus: Vec<ServerMenu>,
    ) -> AppResult<Self> {
        let mut unique_roles = Vec::with_capacity(roles.len());
        for role in roles {
            if !unique_roles.contains(&role) {
                unique_roles.push(role);
            }
        }

        let profile = Self {
            identity,
            roles: unique_roles,
            active_role: None,
            menus,
            rejected_roles: Vec::new(),
        };

        match active_role {
            Some(role) => profile.with_active_role(role),
            None => Ok(profile),
        }
    }

    /// Normalizes a backend payload.
    ///
    /// Unknown or non-text role entries are dropped, as is an active role the
    /// user does not hold. Only a blank user id is rejected.
    pub fn from_raw(mut raw: RawUserProfile) -> AppResult<Self> {
        let (entries, malformed) = raw.split_role_entries();
        let identity = UserIdentity::new(raw.id.into_string(), raw.name.unwrap_or_default())?;
        let NormalizedRoles {
            roles,
            mut rejected,
        } = normalize_roles(&entries);
        rejected.extend(malformed);

        let active_role = raw
            .active_role
            .and_then(RoleEntry::into_text)
            .as_deref()
            .and_then(Role::parse_loose)
            .filter(|role| roles.contains(role));

        Ok(Self {
            identity,
            roles,
            active_role,
            menus: raw.menus.unwrap_or_default(),
            rejected_roles: rejected,
        })
    }

    /// Returns a copy of this profile acting as `role`.
    pub fn with_active_role(&self, role: Role) -> AppResult<Self> {
        if !self.roles.contains(&role) {
            return Err(AppError::Forbidden(format!(
                "user '{}' does not hold role '{role}'",
                self.identity.id()
            )));
        }

        Ok(Self {
            active_role: Some(role),
            ..self.clone()
        })
    }

    /// Returns a copy of this profile with no explicit active role.
    #[must_use]
    pub fn without_active_role(&self) -> Self {
        Self {
            active_role: None,
            ..self.clone()
        }
    }

    /// Returns the user identity.
    #[must_use]
    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    /// Returns held roles in payload order.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        self.roles.as_slice()
    }

    /// Returns the explicitly selected role, if any.
    #[must_use]
    pub fn active_role(&self) -> Option<Role> {
        self.active_role
    }

    /// Returns the server menu whitelist.
    #[must_use]
    pub fn menus(&self) -> &[ServerMenu] {
        self.menus.as_slice()
    }

    /// Returns raw role entries dropped during normalization.
    #[must_use]
    pub fn rejected_roles(&self) -> &[String] {
        self.rejected_roles.as_slice()
    }
}

/// Profile lifecycle for one app session.
///
/// Created empty, filled on sign-in, replaced wholesale on refresh and
/// cleared on sign-out.
#[derive(Debug, Clone, Default)]
pub struct ProfileSession {
    current: Option<UserProfile>,
}

impl ProfileSession {
    /// Creates a signed-out session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the profile fetched after sign-in.
    pub fn sign_in(&mut self, profile: UserProfile) -> AppResult<()> {
        if self.current.is_some() {
            return Err(AppError::Conflict(
                "a profile is already signed in".to_owned(),
            ));
        }

        self.current = Some(profile);
        Ok(())
    }

    /// Replaces the current profile with a freshly fetched one.
    ///
    /// Returns the previous profile.
    pub fn refresh(&mut self, profile: UserProfile) -> AppResult<UserProfile> {
        let previous = self.current.take().ok_or_else(|| {
            AppError::Unauthorized("cannot refresh a signed-out session".to_owned())
        })?;

        self.current = Some(profile);
        Ok(previous)
    }

    /// Switches the acting role of the current profile.
    pub fn switch_role(&mut self, role: Role) -> AppResult<&UserProfile> {
        let current = self
            .current
            .as_ref()
            .ok_or_else(|| AppError::Unauthorized("no profile is signed in".to_owned()))?;
        let switched = current.with_active_role(role)?;
        let current: &UserProfile = self.current.insert(switched);

        Ok(current)
    }

    /// Drops the explicit acting role so priority order picks it again.
    pub fn reset_role(&mut self) -> AppResult<&UserProfile> {
        let current = self
            .current
            .as_ref()
            .ok_or_else(|| AppError::Unauthorized("no profile is signed in".to_owned()))?;
        let reset = current.without_active_role();
        let current: &UserProfile = self.current.insert(reset);

        Ok(current)
    }

    /// Clears the session, returning the profile that was signed in.
    pub fn sign_out(&mut self) -> Option<UserProfile> {
        self.current.take()
    }

    /// Returns the current profile.
    #[must_use]
    pub fn current(&self) -> Option<&UserProfile> {
        self.current.as_ref()
    }
}
