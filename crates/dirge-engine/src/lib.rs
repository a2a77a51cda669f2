//! Reactive dying/death automation engine for Dirge.
//!
//! When a character's hit points reach zero, this crate decides — without a
//! human adjudicator — how near to death the character becomes, whether it
//! falls unconscious instead, whether it dies outright, and how turn order
//! and automatic healing must adapt. It is pure logic over the collaborator
//! traits in [`dirge_core`]: the host delivers lifecycle events, the engine
//! reads snapshots, decides, and requests mutations.

/// Single-writer authority arbitration among connected processes.
pub mod arbiter;
/// Runtime configuration toggles.
pub mod config;
/// Damage context resolution from the recent chat log.
pub mod context;
/// Terminal representation decisions per actor kind.
pub mod death;
/// The dying counter state machine.
pub mod dying;
/// Event handlers wiring the components together.
pub mod engine;
/// Error types for engine operations.
pub mod error;
/// Turn-order repositioning for incapacitated combatants.
pub mod initiative;
/// Heroic recovery preconditions.
pub mod recovery;
/// One-way suppression of automatic healing.
pub mod regen;
/// Condition delta application through the host.
pub mod sync;
/// HP transition classification.
pub mod transition;

/// Re-export the authority check.
pub use arbiter::is_sole_authority;
/// Re-export the configuration type.
pub use config::AutomationConfig;
/// Re-export damage context types.
pub use context::DamageContext;
/// Re-export state machine types.
pub use dying::{DyingStatus, ZeroHpOutcome};
/// Re-export the engine.
pub use engine::DyingEngine;
/// Re-export error types.
pub use error::{EngineError, EngineResult};
/// Re-export condition delta types.
pub use sync::ConditionDelta;
/// Re-export transition types.
pub use transition::HpTransition;
