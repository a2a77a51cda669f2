//! Combatants in the active encounter.
//!
//! The encounter itself is host-owned; the engine treats it as a totally
//! ordered sequence it may reinsert one element into, never something it
//! owns. Initiative scores are fractional so a combatant can be placed
//! between two neighbors without re-sorting anyone else.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::actor::ActorId;

/// Unique identifier for a combatant record in the active encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatantId(pub Uuid);

impl CombatantId {
    /// Generate a new random combatant ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CombatantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A snapshot of one combatant in the encounter's turn order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    /// Stable record identifier.
    pub id: CombatantId,
    /// The actor this combatant represents, if it has a sheet.
    pub actor_id: Option<ActorId>,
    /// Initiative score; `None` if the combatant has not rolled yet.
    pub initiative: Option<f64>,
    /// True if the combatant is flagged defeated.
    pub defeated: bool,
}

impl Combatant {
    /// Create a combatant for an actor with a rolled initiative score.
    pub fn new(actor_id: ActorId, initiative: f64) -> Self {
        Self {
            id: CombatantId::new(),
            actor_id: Some(actor_id),
            initiative: Some(initiative),
            defeated: false,
        }
    }

    /// The combatant's initiative score, with 0 substituted for unset.
    pub fn initiative_or_zero(&self) -> f64 {
        self.initiative.unwrap_or(0.0)
    }
}
