//! Damage context resolution.
//!
//! Finds the causal event behind an HP-to-zero transition by scanning a
//! bounded recent window of the chat log, most-recent-first. If nothing
//! qualifies the context resolves to all-false and the caller falls back to
//! the minimal +1 increment path.

use chrono::Duration;

use dirge_core::message::{DEATH_TRAIT, NONLETHAL_TRAIT};
use dirge_core::{Actor, ChatMessage, CheckOutcome, DamageSource, RollKind};

/// How many recent log entries the general causality scan covers.
pub const CAUSALITY_WINDOW: usize = 10;

/// How many recent log entries the nonlethal attribution covers. Narrower
/// than the causality window: nonlethal intent belongs to the immediately
/// preceding blow, not a stale one.
pub const NONLETHAL_WINDOW: usize = 3;

/// What the resolver learned about the blow that dropped the actor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamageContext {
    /// The blow carried the nonlethal trait: incapacitate, never kill.
    pub nonlethal: bool,
    /// The blow bypasses the graduated dying track entirely.
    pub instant_kill: bool,
    /// The blow was a critical hit (or critically failed save).
    pub critical: bool,
}

impl DamageContext {
    /// The all-false context used when no causal event is found.
    pub fn neutral() -> Self {
        Self::default()
    }
}

/// Resolve the damage context for `actor` from `messages`, which must be
/// ordered most-recent-first. Ties between equally recent qualifying
/// entries resolve to the earlier position in the slice.
pub fn resolve(
    messages: &[ChatMessage],
    actor: &Actor,
    save_lookup_window_secs: i64,
) -> DamageContext {
    let window = &messages[..messages.len().min(CAUSALITY_WINDOW)];
    let Some((position, cause)) = window
        .iter()
        .enumerate()
        .find(|(_, m)| m.damages(actor.id))
    else {
        return DamageContext::neutral();
    };

    let nonlethal = position < NONLETHAL_WINDOW
        && cause.total_damage > 0
        && cause.has_item_trait(NONLETHAL_TRAIT);

    let instant_kill = cause.total_damage >= actor.hp.massive_damage_threshold()
        || (actor.hp.at_zero() && cause.has_item_trait(DEATH_TRAIT));

    let critical = match cause.source {
        DamageSource::Attack => cause.outcome == Some(CheckOutcome::CriticalSuccess),
        DamageSource::SavingThrow => {
            let outcome = cause
                .outcome
                .or_else(|| matching_save_outcome(window, cause, save_lookup_window_secs));
            outcome == Some(CheckOutcome::CriticalFailure)
        }
    };

    DamageContext {
        nonlethal,
        instant_kill,
        critical,
    }
}

/// A save's damage roll does not carry pass/fail; the check roll it came
/// from does. Find the check tied to the same item, rolled by the same
/// actor, within the configured time window of the damage message.
fn matching_save_outcome(
    window: &[ChatMessage],
    cause: &ChatMessage,
    save_lookup_window_secs: i64,
) -> Option<CheckOutcome> {
    let item = cause.item_id?;
    let bound = Duration::seconds(save_lookup_window_secs);
    window
        .iter()
        .find(|m| {
            m.kind == RollKind::Check
                && m.source == DamageSource::SavingThrow
                && m.actor_id == cause.actor_id
                && m.item_id == Some(item)
                && (cause.timestamp - m.timestamp).abs() <= bound
        })
        .and_then(|m| m.outcome)
}
