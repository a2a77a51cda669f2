//! Chat-log entries bearing damage and check context.
//!
//! The chat log is append-only and externally owned. The engine scans a
//! bounded recent window of it (most-recent-first) to attribute an
//! HP-to-zero transition to the blow that caused it; it never persists its
//! own copy.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::actor::ActorId;
use crate::rules::ItemId;

/// Item trait marking damage that incapacitates but cannot kill.
pub const NONLETHAL_TRAIT: &str = "nonlethal";

/// Item trait marking save-or-die effects.
pub const DEATH_TRAIT: &str = "death";

/// Unique identifier for a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub Uuid);

impl MessageId {
    /// Generate a new random message ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// What produced a damage-bearing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageSource {
    /// An attack roll against a target.
    Attack,
    /// A saving throw rolled by the damaged actor itself.
    SavingThrow,
}

/// The degree-of-success outcome carried by a check roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckOutcome {
    /// Critical success.
    CriticalSuccess,
    /// Success.
    Success,
    /// Failure.
    Failure,
    /// Critical failure.
    CriticalFailure,
}

/// Whether a message carries a damage total or a check outcome.
///
/// An attack's damage roll does not itself carry pass/fail; a save's check
/// roll does. The resolver pairs them up by shared item identity when it
/// needs the outcome behind save-sourced damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollKind {
    /// A damage application.
    Damage,
    /// A degree-of-success check.
    Check,
}

/// One entry in the host's chat log, reduced to the fields the engine reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Stable message identifier.
    pub id: MessageId,
    /// What produced the message.
    pub source: DamageSource,
    /// Damage roll or check roll.
    pub kind: RollKind,
    /// The actor who rolled (for saves, the damaged actor itself).
    pub actor_id: Option<ActorId>,
    /// The actor targeted (attacks only).
    pub target_id: Option<ActorId>,
    /// Degree of success, present on check rolls and on attack damage that
    /// inherits its strike's outcome.
    pub outcome: Option<CheckOutcome>,
    /// Total damage applied; zero for pure check rolls.
    pub total_damage: i32,
    /// The item behind the roll, used to pair save damage with its check.
    pub item_id: Option<ItemId>,
    /// Trait tags on that item (may include "nonlethal" or "death").
    pub item_traits: HashSet<String>,
    /// Host-assigned creation time.
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a damage message from an attack against a target.
    pub fn attack_damage(target: ActorId, total: i32) -> Self {
        Self {
            id: MessageId::new(),
            source: DamageSource::Attack,
            kind: RollKind::Damage,
            actor_id: None,
            target_id: Some(target),
            outcome: None,
            total_damage: total,
            item_id: None,
            item_traits: HashSet::new(),
            timestamp: Utc::now(),
        }
    }

    /// Create a damage message from a saving throw rolled by `actor`.
    pub fn save_damage(actor: ActorId, total: i32) -> Self {
        Self {
            id: MessageId::new(),
            source: DamageSource::SavingThrow,
            kind: RollKind::Damage,
            actor_id: Some(actor),
            target_id: None,
            outcome: None,
            total_damage: total,
            item_id: None,
            item_traits: HashSet::new(),
            timestamp: Utc::now(),
        }
    }

    /// Create a check-roll message for a saving throw rolled by `actor`.
    pub fn save_check(actor: ActorId, outcome: CheckOutcome) -> Self {
        Self {
            id: MessageId::new(),
            source: DamageSource::SavingThrow,
            kind: RollKind::Check,
            actor_id: Some(actor),
            target_id: None,
            outcome: Some(outcome),
            total_damage: 0,
            item_id: None,
            item_traits: HashSet::new(),
            timestamp: Utc::now(),
        }
    }

    /// Set the degree-of-success outcome.
    pub fn with_outcome(mut self, outcome: CheckOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    /// Set the originating item.
    pub fn with_item(mut self, item: ItemId) -> Self {
        self.item_id = Some(item);
        self
    }

    /// Add an item trait tag.
    pub fn with_trait(mut self, tag: impl Into<String>) -> Self {
        self.item_traits.insert(tag.into());
        self
    }

    /// Set the host-assigned timestamp.
    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = at;
        self
    }

    /// Returns true if this entry applied damage to the given actor, either
    /// as an attack target or as the roller of a damaging save.
    pub fn damages(&self, actor: ActorId) -> bool {
        if self.kind != RollKind::Damage {
            return false;
        }
        match self.source {
            DamageSource::Attack => self.target_id == Some(actor),
            DamageSource::SavingThrow => self.actor_id == Some(actor),
        }
    }

    /// Returns true if the item behind this message carries the given trait.
    pub fn has_item_trait(&self, tag: &str) -> bool {
        self.item_traits.contains(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attack_damages_its_target() {
        let target = ActorId::new();
        let msg = ChatMessage::attack_damage(target, 7);
        assert!(msg.damages(target));
        assert!(!msg.damages(ActorId::new()));
    }

    #[test]
    fn save_damages_its_roller() {
        let actor = ActorId::new();
        let msg = ChatMessage::save_damage(actor, 12);
        assert!(msg.damages(actor));
        assert!(!msg.damages(ActorId::new()));
    }

    #[test]
    fn check_rolls_never_damage() {
        let actor = ActorId::new();
        let msg = ChatMessage::save_check(actor, CheckOutcome::Failure);
        assert!(!msg.damages(actor));
    }

    #[test]
    fn builder_traits() {
        let msg = ChatMessage::attack_damage(ActorId::new(), 3).with_trait(NONLETHAL_TRAIT);
        assert!(msg.has_item_trait(NONLETHAL_TRAIT));
        assert!(!msg.has_item_trait(DEATH_TRAIT));
    }
}
