//! Host lifecycle events delivered to the engine.
//!
//! The host broadcasts these to every connected process in arrival order.
//! The engine's handlers run one event to completion before the next.

use serde::{Deserialize, Serialize};

use crate::actor::ActorId;
use crate::condition::ConditionKind;
use crate::message::ChatMessage;

/// One lifecycle event from the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum HostEvent {
    /// An actor document changed.
    ActorUpdated {
        /// The updated actor.
        actor_id: ActorId,
        /// The HP value after the update, if the update touched HP at all.
        new_hp: Option<i32>,
        /// The raw damage applied by this update (negative for healing).
        /// Previous HP is reconstructed as `new_hp + damage_taken` rather
        /// than trusted from a snapshot, because this module's own writes
        /// re-trigger the update event.
        damage_taken: i32,
    },
    /// A chat message was created.
    MessageCreated {
        /// The new message.
        message: ChatMessage,
    },
    /// An item was created on an actor.
    ItemCreated {
        /// The owning actor.
        actor_id: ActorId,
        /// The condition the item represents, if it is a condition item.
        condition: Option<ConditionKind>,
    },
    /// An item was deleted from an actor.
    ItemDeleted {
        /// The owning actor.
        actor_id: ActorId,
        /// The condition the item represented, if it was a condition item.
        condition: Option<ConditionKind>,
    },
}

impl HostEvent {
    /// An actor update that changed HP by applying `damage` to reach `new_hp`.
    pub fn hp_update(actor_id: ActorId, new_hp: i32, damage: i32) -> Self {
        Self::ActorUpdated {
            actor_id,
            new_hp: Some(new_hp),
            damage_taken: damage,
        }
    }
}
