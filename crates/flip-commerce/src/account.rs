//! User account types.
//!
//! Registration and login happen against the remote user service; the
//! client only ever holds the public profile returned on success.

use crate::ids::UserId;
use serde::{Deserialize, Serialize};

/// Public profile of a logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// User ID.
    pub id: UserId,
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: Option<String>,
}

impl UserProfile {
    /// Create a profile.
    pub fn new(id: UserId, email: impl Into<String>, name: Option<String>) -> Self {
        Self {
            id,
            email: email.into(),
            name,
        }
    }

    /// Name to greet the user with.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.email.as_str())
    }
}
