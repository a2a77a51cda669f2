//! Heroic recovery preconditions.
//!
//! Heroic recovery is an explicit player-invoked action, independent of HP
//! events: spend a hero point, clear the dying episode, and — unlike every
//! other removal path — take no wound for it.

use std::fmt;

use dirge_core::ConditionValue;

/// Whether a heroic recovery attempt may proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryCheck {
    /// Both preconditions hold.
    Ready,
    /// The actor is not dying; there is nothing to recover from.
    NotDying,
    /// The actor has no hero point to spend.
    NoHeroPoints,
}

impl RecoveryCheck {
    /// Check the preconditions against current snapshots.
    pub fn evaluate(dying: Option<ConditionValue>, hero_points: u8) -> Self {
        if dying.is_none() {
            Self::NotDying
        } else if hero_points == 0 {
            Self::NoHeroPoints
        } else {
            Self::Ready
        }
    }
}

impl fmt::Display for RecoveryCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => write!(f, "ready"),
            Self::NotDying => write!(f, "the actor is not dying"),
            Self::NoHeroPoints => write!(f, "no hero points available"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_when_dying_with_points() {
        let dying = Some(ConditionValue::capped(2, 4));
        assert_eq!(RecoveryCheck::evaluate(dying, 1), RecoveryCheck::Ready);
    }

    #[test]
    fn rejected_without_dying() {
        assert_eq!(RecoveryCheck::evaluate(None, 3), RecoveryCheck::NotDying);
    }

    #[test]
    fn rejected_without_points() {
        let dying = Some(ConditionValue::capped(1, 4));
        assert_eq!(
            RecoveryCheck::evaluate(dying, 0),
            RecoveryCheck::NoHeroPoints
        );
    }
}
