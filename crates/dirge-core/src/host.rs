//! Collaborator traits the embedding host implements.
//!
//! The engine is pure logic over these seams: it reads snapshots, decides,
//! and requests mutations. A rejected mutation leaves host state as it was
//! and is propagated to the caller; the engine never compensates, because
//! each downstream step is independently idempotent.

use crate::actor::{Actor, ActorId};
use crate::condition::{ConditionKind, ConditionValue, StatusMarker};
use crate::encounter::{Combatant, CombatantId};
use crate::rules::{ItemId, RuleElement};
use crate::session::{ConnectedUser, UserId};

/// Alias for `Result<T, HostError>`.
pub type HostResult<T> = Result<T, HostError>;

/// Errors the host reports back for rejected reads or mutations.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The actor does not exist.
    #[error("actor not found: {0}")]
    UnknownActor(ActorId),

    /// The combatant does not exist in the active encounter.
    #[error("combatant not found: {0}")]
    UnknownCombatant(CombatantId),

    /// The item does not exist on the actor.
    #[error("item not found: {0}")]
    UnknownItem(ItemId),

    /// The host refused the mutation (permissions, validation, or races).
    #[error("mutation rejected: {0}")]
    MutationRejected(String),
}

/// Read and mutate actor-owned state.
///
/// Contract: setting a counter above its declared maximum clamps to it;
/// removing an absent condition is a no-op; mutations apply strictly in
/// call order.
pub trait ActorHost {
    /// Fetch a read-only snapshot of an actor.
    fn actor(&self, id: ActorId) -> Option<Actor>;

    /// Current value of a condition, or `None` if the actor lacks it.
    fn condition(&self, id: ActorId, kind: ConditionKind) -> Option<ConditionValue>;

    /// Add or raise a condition. `value` of `None` means "by one"; an
    /// explicit value sets the counter (clamped to its max by the host).
    fn increase_condition(
        &mut self,
        id: ActorId,
        kind: ConditionKind,
        value: Option<u8>,
    ) -> HostResult<()>;

    /// Lower a condition by one, or remove it outright when `force_remove`.
    fn decrease_condition(
        &mut self,
        id: ActorId,
        kind: ConditionKind,
        force_remove: bool,
    ) -> HostResult<()>;

    /// Set the actor's hero point resource.
    fn set_hero_points(&mut self, id: ActorId, value: u8) -> HostResult<()>;

    /// Toggle a status marker, optionally as a token overlay.
    fn toggle_status(&mut self, id: ActorId, marker: StatusMarker, overlay: bool) -> HostResult<()>;

    /// Returns true if the marker is already present on the actor's token.
    fn has_status(&self, id: ActorId, marker: StatusMarker) -> bool;

    /// Replace the rule element list of an item owned by the actor.
    fn set_item_rules(
        &mut self,
        id: ActorId,
        item: ItemId,
        rules: Vec<RuleElement>,
    ) -> HostResult<()>;
}

/// Read and mutate the active encounter's turn order.
pub trait EncounterHost {
    /// The combatant whose turn it currently is, if an encounter is running.
    fn current_combatant(&self) -> Option<Combatant>;

    /// All combatants, in the host's current turn order.
    fn combatants(&self) -> Vec<Combatant>;

    /// Set a combatant's initiative score.
    fn set_initiative(&mut self, id: CombatantId, score: f64) -> HostResult<()>;

    /// Flip a combatant's defeated flag.
    fn toggle_defeated(&mut self, id: CombatantId) -> HostResult<()>;
}

/// Fire-and-forget user-facing message emission.
pub trait Notifier {
    /// Notify a user. Delivery is best-effort; failures are not reported.
    fn notify(&mut self, user: UserId, text: &str);
}

/// The full collaborator surface the engine requires.
pub trait Host: ActorHost + EncounterHost + Notifier {
    /// The current connected-user roster, re-fetched on every event because
    /// the set of eligible authorities changes with disconnects.
    fn connected_users(&self) -> Vec<ConnectedUser>;
}
