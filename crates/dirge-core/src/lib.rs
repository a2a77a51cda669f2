//! Core types for Dirge: actors, conditions, encounters, and host interfaces.
//!
//! This crate defines the data model the rules engine operates on and the
//! collaborator traits through which it talks to the embedding host. It
//! contains no decision logic — you can construct snapshots programmatically
//! or deserialize them from the host's JSON payloads.

/// Actor snapshots, kinds, and hit point tracking.
pub mod actor;
/// Condition counters, slugs, and status markers.
pub mod condition;
/// Combatants and encounter ordering.
pub mod encounter;
/// Error types used throughout the crate.
pub mod error;
/// Host lifecycle events delivered to the engine.
pub mod event;
/// Collaborator traits the host implements for the engine.
pub mod host;
/// Chat-log damage and check messages the engine scans for causality.
pub mod message;
/// Owned items and the rule elements attached to them.
pub mod rules;
/// Connected users and authority eligibility.
pub mod session;

/// Re-export actor types.
pub use actor::{Actor, ActorId, ActorKind, HitPoints};
/// Re-export condition types.
pub use condition::{ConditionKind, ConditionValue, StatusMarker};
/// Re-export encounter types.
pub use encounter::{Combatant, CombatantId};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export event types.
pub use event::HostEvent;
/// Re-export host traits.
pub use host::{ActorHost, EncounterHost, Host, HostError, HostResult, Notifier};
/// Re-export message types.
pub use message::{ChatMessage, CheckOutcome, DamageSource, MessageId, RollKind};
/// Re-export item rule types.
pub use rules::{ItemId, OwnedItem, RuleElement, RuleKind};
/// Re-export session types.
pub use session::{ConnectedUser, UserId};
