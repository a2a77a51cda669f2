//! Connected users and authority eligibility.
//!
//! Every connected process observes every host event; mutation must be
//! single-writer. The engine recomputes its authority claim from the current
//! user roster on each event, so the roster is a plain snapshot here.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a connected user/process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// One entry in the host's connected-user roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedUser {
    /// Stable user identifier.
    pub id: UserId,
    /// True for GM-level users eligible to arbitrate mutations.
    pub privileged: bool,
    /// True while the user's process is connected.
    pub active: bool,
}

impl ConnectedUser {
    /// An active, privileged user.
    pub fn gamemaster(id: UserId) -> Self {
        Self {
            id,
            privileged: true,
            active: true,
        }
    }

    /// An active, unprivileged user.
    pub fn player(id: UserId) -> Self {
        Self {
            id,
            privileged: false,
            active: true,
        }
    }
}
