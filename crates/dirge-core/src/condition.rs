//! Condition counters and status markers.
//!
//! Conditions are named counters owned by the host; the engine reads and
//! requests mutations through [`crate::host::ActorHost`], never holding its
//! own copy.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The conditions the dying automation reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    /// Episodic counter; reaching its maximum means death.
    Dying,
    /// Standing scar counter raising the start of future dying episodes.
    Wounded,
    /// Presence-only condition for incapacitated-but-stable actors.
    Unconscious,
}

impl ConditionKind {
    /// The host's stable string slug for this condition.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Dying => "dying",
            Self::Wounded => "wounded",
            Self::Unconscious => "unconscious",
        }
    }

    /// Parse a condition from its host slug.
    pub fn parse(slug: &str) -> Result<Self, CoreError> {
        match slug {
            "dying" => Ok(Self::Dying),
            "wounded" => Ok(Self::Wounded),
            "unconscious" => Ok(Self::Unconscious),
            other => Err(CoreError::UnknownCondition(other.to_string())),
        }
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// The current value of a condition on an actor.
///
/// `dying` always carries a max (actor-specific game data the host computes);
/// `wounded` has no cap; `unconscious` is presence-only and reports value 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionValue {
    /// Current counter value.
    pub value: u8,
    /// Declared maximum, if the condition has one.
    pub max: Option<u8>,
}

impl ConditionValue {
    /// A valued condition with a declared maximum.
    pub fn capped(value: u8, max: u8) -> Self {
        Self {
            value,
            max: Some(max),
        }
    }

    /// A valued condition with no maximum.
    pub fn open(value: u8) -> Self {
        Self { value, max: None }
    }

    /// Returns true if the counter sits at its declared maximum.
    pub fn at_max(&self) -> bool {
        self.max.is_some_and(|m| self.value >= m)
    }
}

impl fmt::Display for ConditionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}/{max}", self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

/// Terminal representation markers the death toggler applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusMarker {
    /// Overlay for downed actors whose final death still needs manual
    /// confirmation; visually distinct from the dead marker.
    Incapacitated,
    /// Terminal dead marker with an overlay rendering hint.
    Dead,
}

impl StatusMarker {
    /// The host's stable string slug for this marker.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Incapacitated => "incapacitated",
            Self::Dead => "dead",
        }
    }

    /// Parse a marker from its host slug.
    pub fn parse(slug: &str) -> Result<Self, CoreError> {
        match slug {
            "incapacitated" => Ok(Self::Incapacitated),
            "dead" => Ok(Self::Dead),
            other => Err(CoreError::UnknownStatusMarker(other.to_string())),
        }
    }
}

impl fmt::Display for StatusMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}
