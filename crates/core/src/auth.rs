use serde::{Deserialize, Serialize};

use crate::{AppResult, NonEmptyString};

/// Signed-in user information carried by a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    id: NonEmptyString,
    display_name: String,
}

impl UserIdentity {
    /// Creates a user identity from the profile payload values.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            id: NonEmptyString::new(id)?,
            display_name: display_name.into().trim().to_owned(),
        })
    }

    /// Returns the stable user identifier issued by the backend.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Returns the display name for the current user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }
}
