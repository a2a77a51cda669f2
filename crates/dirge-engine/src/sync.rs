//! Condition delta application.
//!
//! The single choke point that performs condition writes, so failure
//! handling and idempotency live in one place. No decisions are made here:
//! deltas arrive in the order the state machine chose and are applied in
//! that order, with the host clamping values and ignoring removals of
//! absent conditions.

use dirge_core::{ActorHost, ActorId, ConditionKind, HostResult};

/// One requested condition mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionDelta {
    /// Set a counter to an explicit value (host clamps to the max).
    Set {
        /// The condition to set.
        kind: ConditionKind,
        /// The target value.
        value: u8,
    },
    /// Raise a counter by one.
    Increase {
        /// The condition to raise.
        kind: ConditionKind,
    },
    /// Add a presence-only condition if it is not already present.
    AddPresence {
        /// The condition to add.
        kind: ConditionKind,
    },
    /// Remove a condition outright; a no-op if absent.
    Remove {
        /// The condition to remove.
        kind: ConditionKind,
    },
}

/// Apply deltas to an actor strictly in order, stopping at the first
/// rejection. Partial application is acceptable: committed steps are
/// independently safe and the remainder is reattempted on the next
/// qualifying event.
pub fn apply<H: ActorHost>(
    host: &mut H,
    actor: ActorId,
    deltas: &[ConditionDelta],
) -> HostResult<()> {
    for delta in deltas {
        match *delta {
            ConditionDelta::Set { kind, value } => {
                host.increase_condition(actor, kind, Some(value))?;
            }
            ConditionDelta::Increase { kind } => {
                host.increase_condition(actor, kind, None)?;
            }
            ConditionDelta::AddPresence { kind } => {
                if host.condition(actor, kind).is_none() {
                    host.increase_condition(actor, kind, None)?;
                }
            }
            ConditionDelta::Remove { kind } => {
                host.decrease_condition(actor, kind, true)?;
            }
        }
    }
    Ok(())
}
