//! Terminal representation decisions.
//!
//! When the dying track tops out (or an instant kill lands), the actor's
//! kind decides how death is represented: sheet-linked NPCs get a
//! non-final overlay marker, combatants in an active encounter get their
//! defeated flag, and everyone else gets the terminal dead marker. Every
//! branch is guarded so a re-delivered event cannot un-mark the actor.

use dirge_core::{Actor, ActorHost, ActorKind, EncounterHost, StatusMarker};

use crate::error::EngineResult;
use crate::initiative;

/// Apply the terminal representation for `actor`, then reposition its
/// combatant (if any) when `reorder` is enabled.
pub fn apply_terminal_state<H: ActorHost + EncounterHost>(
    host: &mut H,
    actor: &Actor,
    reorder: bool,
) -> EngineResult<()> {
    let npc_like = matches!(
        actor.kind,
        ActorKind::NonPlayerCharacter | ActorKind::Other
    );

    if npc_like && actor.token_linked {
        // Final death for sheet-linked NPCs needs separate manual
        // confirmation; mark them downed without the dead flag.
        if !host.has_status(actor.id, StatusMarker::Incapacitated) {
            tracing::info!(actor = %actor.id, "marking linked NPC incapacitated");
            host.toggle_status(actor.id, StatusMarker::Incapacitated, true)?;
        }
    } else if let Some(combatant) = actor.combatant {
        let already_defeated = host
            .combatants()
            .iter()
            .any(|c| c.id == combatant && c.defeated);
        if !already_defeated {
            tracing::info!(actor = %actor.id, "flagging combatant defeated");
            host.toggle_defeated(combatant)?;
        }
    } else if !host.has_status(actor.id, StatusMarker::Dead) {
        tracing::info!(actor = %actor.id, "applying dead marker");
        host.toggle_status(actor.id, StatusMarker::Dead, true)?;
    }

    if reorder {
        if let Some(combatant) = actor.combatant {
            initiative::reposition_after_current(host, combatant)?;
        }
    }
    Ok(())
}
