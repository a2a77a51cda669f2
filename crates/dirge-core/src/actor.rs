use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::encounter::CombatantId;
use crate::rules::OwnedItem;

/// Unique identifier for every actor the host manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    /// Generate a new random actor ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The kind of an actor, matching the host's type slugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    /// A player-controlled character (`character`).
    PlayerCharacter,
    /// A bound companion creature (`familiar`).
    Companion,
    /// A GM-controlled creature (`npc`).
    NonPlayerCharacter,
    /// Any other actor type (hazards, vehicles, loot).
    Other,
}

impl ActorKind {
    /// Parse a kind from the host's type slug. Unrecognized slugs map to
    /// [`ActorKind::Other`] rather than failing; hosts add actor types freely.
    pub fn parse(slug: &str) -> Self {
        match slug {
            "character" => Self::PlayerCharacter,
            "familiar" => Self::Companion,
            "npc" => Self::NonPlayerCharacter,
            _ => Self::Other,
        }
    }

    /// Returns true if this kind enters the graduated dying track at zero HP.
    /// NPCs and other actor types skip straight to their terminal
    /// representation instead.
    pub fn uses_dying_track(&self) -> bool {
        matches!(self, Self::PlayerCharacter | Self::Companion)
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerCharacter => write!(f, "character"),
            Self::Companion => write!(f, "familiar"),
            Self::NonPlayerCharacter => write!(f, "npc"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// An actor's hit point pool: current, maximum, and temporary points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitPoints {
    /// Current hit points.
    pub value: i32,
    /// Maximum hit points.
    pub max: i32,
    /// Temporary hit points absorbed before the real pool.
    pub temp: i32,
}

impl HitPoints {
    /// Create a full hit point pool with no temporary points.
    pub fn full(max: i32) -> Self {
        Self {
            value: max,
            max,
            temp: 0,
        }
    }

    /// Returns true if the actor is at exactly zero hit points.
    pub fn at_zero(&self) -> bool {
        self.value == 0
    }

    /// The damage total at or above which a single blow bypasses the dying
    /// track entirely: temporary points plus double the maximum.
    pub fn massive_damage_threshold(&self) -> i32 {
        self.temp + 2 * self.max
    }
}

/// A read-only snapshot of an actor as the host currently sees it.
///
/// The engine never mutates a snapshot; all writes go through
/// [`crate::host::ActorHost`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Stable host identifier.
    pub id: ActorId,
    /// Display name.
    pub name: String,
    /// Actor kind.
    pub kind: ActorKind,
    /// Hit point pool.
    pub hp: HitPoints,
    /// Trait tags on the actor itself (e.g. "eidolon").
    pub traits: HashSet<String>,
    /// The actor-specific cap on the dying counter. Game data computed by
    /// the host, not by the engine.
    pub dying_max: u8,
    /// Spendable hero point resource.
    pub hero_points: u8,
    /// True if the actor's token is bound 1:1 to its sheet.
    pub token_linked: bool,
    /// Back-reference into the active encounter, if any.
    pub combatant: Option<CombatantId>,
    /// Items owned by the actor, carrying standing rule elements.
    pub items: Vec<OwnedItem>,
}

impl Actor {
    /// Create a minimal actor snapshot with a fresh id and full hit points.
    pub fn new(name: impl Into<String>, kind: ActorKind, max_hp: i32) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            kind,
            hp: HitPoints::full(max_hp),
            traits: HashSet::new(),
            dying_max: 4,
            hero_points: 0,
            token_linked: false,
            combatant: None,
            items: Vec::new(),
        }
    }

    /// Returns true if the actor carries the given trait tag.
    pub fn has_trait(&self, tag: &str) -> bool {
        self.traits.contains(tag)
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}/{} hp)",
            self.name, self.kind, self.hp.value, self.hp.max
        )
    }
}
