//! Turn-order repositioning for incapacitated combatants.
//!
//! A newly-downed combatant is reinserted immediately after the
//! currently-acting one by giving it a fractional score between the acting
//! combatant's score and the next one above it. Nobody else's relative
//! order changes and no re-sort is required.

use dirge_core::{CombatantId, EncounterHost};

use crate::error::EngineResult;

/// Compute the reinsertion score. `current` is the acting combatant's
/// score; `next` the smallest score strictly greater than it among all
/// combatants, if one exists.
fn reinsertion_score(current: f64, next: Option<f64>) -> f64 {
    match next {
        None => current + 1.0,
        // Wrap-around: nothing sits between the acting combatant and the
        // top of the order.
        Some(n) if n < current => current + 1.0,
        Some(n) => (n + current) / 2.0,
    }
}

/// Reposition `combatant` directly after the acting combatant. Skips (and
/// returns false) when no encounter is running or the downed combatant is
/// the one currently acting.
pub fn reposition_after_current<E: EncounterHost>(
    host: &mut E,
    combatant: CombatantId,
) -> EngineResult<bool> {
    let Some(acting) = host.current_combatant() else {
        return Ok(false);
    };
    if acting.id == combatant {
        return Ok(false);
    }

    let current = acting.initiative_or_zero();
    let next = host
        .combatants()
        .iter()
        .map(dirge_core::Combatant::initiative_or_zero)
        .filter(|score| *score > current)
        .fold(None, |best: Option<f64>, score| match best {
            Some(b) if b <= score => Some(b),
            _ => Some(score),
        });

    let score = reinsertion_score(current, next);
    tracing::debug!(%combatant, score, "repositioning downed combatant");
    host.set_initiative(combatant, score)?;
    Ok(true)
}
