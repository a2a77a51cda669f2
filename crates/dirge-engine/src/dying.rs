//! The dying counter state machine.
//!
//! Pure decisions over snapshots; the engine applies the resulting deltas
//! through the condition synchronizer. Dying is an episodic marker: it is
//! entered at a base raised by standing wounds, climbs with further blows,
//! and is removed outright by recovery — never drained gradually.

use dirge_core::ConditionValue;

use crate::context::DamageContext;

/// An actor's position on the dying track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DyingStatus {
    /// No dying condition.
    Alive,
    /// Dying at the given value, below the maximum.
    Dying(u8),
    /// Dying at its maximum (or explicitly flagged dead).
    Dead,
}

impl DyingStatus {
    /// Derive the status from the actor's current dying condition.
    pub fn from_condition(dying: Option<ConditionValue>) -> Self {
        match dying {
            None => Self::Alive,
            Some(c) if c.at_max() => Self::Dead,
            Some(c) => Self::Dying(c.value),
        }
    }
}

/// What the state machine decided for a downward zero-crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroHpOutcome {
    /// Nonlethal blow: fall unconscious, never enter dying.
    FallUnconscious,
    /// Enter or deepen dying at the given value (strictly below max).
    EnterDying(u8),
    /// Dying reaches its maximum: the death path triggers.
    Die,
}

/// Decide the outcome of an HP-to-zero transition.
///
/// `wounded` is the standing scar counter; `dying` the current dying
/// condition if present; `dying_max` the actor-specific cap. On the first
/// entry into dying this episode the base is the wounded value, otherwise
/// the current dying value.
pub fn zero_hp_outcome(
    ctx: &DamageContext,
    wounded: u8,
    dying: Option<ConditionValue>,
    dying_max: u8,
    nonlethal_check: bool,
) -> ZeroHpOutcome {
    if nonlethal_check && ctx.nonlethal {
        return ZeroHpOutcome::FallUnconscious;
    }
    if ctx.instant_kill {
        return ZeroHpOutcome::Die;
    }
    let increment: u8 = if ctx.critical { 2 } else { 1 };
    let base = match dying {
        None => wounded,
        Some(c) => c.value,
    };
    let new_value = base.saturating_add(increment).min(dying_max);
    if new_value >= dying_max {
        ZeroHpOutcome::Die
    } else {
        ZeroHpOutcome::EnterDying(new_value)
    }
}
