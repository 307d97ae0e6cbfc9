//! Domain identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Chat user identifier - newtype for type safety.
///
/// Wraps the numeric id of the chat a command arrived in, which is also the
/// address replies and pushes are sent to. In a private chat that is the
/// user. In a group chat every member maps to the group's id, so the whole
/// group shares one threshold and one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(i64);

impl UserId {
    /// Create a new `UserId` from the platform's raw id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw platform id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self::new(id)
    }
}
