//! Owned items and their standing rule elements.
//!
//! Rule elements are host-interpreted automation attached to an item (an
//! ability, effect, or feat). The engine only cares about one family —
//! automatic healing — which it disables when a death determination lands.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an item owned by an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Generate a new random item ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The family of a rule element, as far as the engine distinguishes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Automatic per-turn healing (fast healing or regeneration).
    FastHealing,
    /// Any other rule element, carried opaquely by its host key.
    Other(String),
}

/// One rule element on an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleElement {
    /// The rule family.
    pub kind: RuleKind,
    /// True if the host currently ignores this element.
    pub disabled: bool,
}

impl RuleElement {
    /// An enabled rule element of the given kind.
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            disabled: false,
        }
    }

    /// Returns true for an automatic-healing element the host still applies.
    pub fn is_active_healing(&self) -> bool {
        self.kind == RuleKind::FastHealing && !self.disabled
    }
}

/// An item owned by an actor, reduced to the fields the engine reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnedItem {
    /// Stable item identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// The item's rule element list, in host order.
    pub rules: Vec<RuleElement>,
}

impl OwnedItem {
    /// Create an item with the given rule elements.
    pub fn new(name: impl Into<String>, rules: Vec<RuleElement>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            rules,
        }
    }
}
