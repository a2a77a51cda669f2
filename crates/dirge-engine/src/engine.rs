//! Event handlers wiring the components together.
//!
//! One [`DyingEngine`] runs inside every connected process and receives
//! every host event; the authority arbiter makes sure only one of them
//! mutates. Each handler runs its full read-decide-write sequence to
//! completion before the next event is processed, so no two handlers for
//! the same actor interleave within one process.

use std::collections::{HashSet, VecDeque};

use dirge_core::{ActorId, ChatMessage, ConditionKind, Host, HostEvent, UserId};

use crate::arbiter;
use crate::config::AutomationConfig;
use crate::context;
use crate::death;
use crate::dying::{self, ZeroHpOutcome};
use crate::error::{EngineError, EngineResult};
use crate::recovery::RecoveryCheck;
use crate::regen;
use crate::sync::{self, ConditionDelta};
use crate::transition::{self, HpTransition};

/// How many recent chat messages the engine mirrors for causality lookups.
const MESSAGE_MIRROR_LEN: usize = 32;

/// The dying automation engine for one connected process.
pub struct DyingEngine {
    /// The user this process runs as; arbitration input.
    self_user: UserId,
    /// Current configuration snapshot.
    config: AutomationConfig,
    /// Bounded mirror of the host's chat log, most recent at the front.
    recent_messages: VecDeque<ChatMessage>,
    /// Actors whose next dying-removal event is this engine's own echo.
    /// Engine-initiated removals settle their wound accounting up front;
    /// the echo must not scar the actor a second time.
    owned_removals: HashSet<ActorId>,
}

impl DyingEngine {
    /// Create an engine for the process running as `self_user`.
    pub fn new(self_user: UserId, config: AutomationConfig) -> Self {
        Self {
            self_user,
            config,
            recent_messages: VecDeque::new(),
            owned_removals: HashSet::new(),
        }
    }

    /// The current configuration snapshot.
    pub fn config(&self) -> &AutomationConfig {
        &self.config
    }

    /// Replace the configuration snapshot. Takes effect on the next event.
    pub fn set_config(&mut self, config: AutomationConfig) {
        self.config = config;
    }

    /// How many chat messages the engine currently mirrors.
    pub fn recent_message_count(&self) -> usize {
        self.recent_messages.len()
    }

    /// Handle one host lifecycle event.
    pub fn handle_event<H: Host>(&mut self, host: &mut H, event: &HostEvent) -> EngineResult<()> {
        match event {
            HostEvent::ActorUpdated {
                actor_id,
                new_hp,
                damage_taken,
            } => self.on_actor_updated(host, *actor_id, *new_hp, *damage_taken),
            HostEvent::MessageCreated { message } => {
                self.on_message_created(message.clone());
                Ok(())
            }
            HostEvent::ItemCreated {
                actor_id,
                condition,
            } => {
                // Observed for ordering only; additions need no reaction.
                tracing::trace!(actor = %actor_id, ?condition, "item created");
                Ok(())
            }
            HostEvent::ItemDeleted {
                actor_id,
                condition,
            } => self.on_item_deleted(host, *actor_id, *condition),
        }
    }

    /// Player-invoked heroic recovery: spend a hero point to end the dying
    /// episode without taking a wound. Runs only in the invoking process,
    /// so it is not arbiter-gated. Precondition failures are reported
    /// through the notifier and mutate nothing.
    pub fn heroic_recovery<H: Host>(
        &mut self,
        host: &mut H,
        user: UserId,
        actor_id: ActorId,
    ) -> EngineResult<()> {
        let actor = host
            .actor(actor_id)
            .ok_or(EngineError::ActorNotFound(actor_id))?;
        let dying = host.condition(actor_id, ConditionKind::Dying);

        match RecoveryCheck::evaluate(dying, actor.hero_points) {
            RecoveryCheck::Ready => {
                host.set_hero_points(actor_id, actor.hero_points - 1)?;
                sync::apply(
                    host,
                    actor_id,
                    &[ConditionDelta::Remove {
                        kind: ConditionKind::Dying,
                    }],
                )?;
                // Marked only once the removal committed: a rejected
                // removal produces no deletion echo, and a stale flag
                // would swallow the wound from the next manual deletion.
                self.owned_removals.insert(actor_id);
                tracing::info!(actor = %actor_id, "heroic recovery");
                host.notify(
                    user,
                    &format!("{} spends a hero point and stops dying.", actor.name),
                );
                Ok(())
            }
            blocked => {
                host.notify(user, &format!("Heroic recovery failed: {blocked}."));
                Ok(())
            }
        }
    }

    fn on_message_created(&mut self, message: ChatMessage) {
        self.recent_messages.push_front(message);
        self.recent_messages.truncate(MESSAGE_MIRROR_LEN);
    }

    fn on_actor_updated<H: Host>(
        &mut self,
        host: &mut H,
        actor_id: ActorId,
        new_hp: Option<i32>,
        damage_taken: i32,
    ) -> EngineResult<()> {
        let has_dying = host.condition(actor_id, ConditionKind::Dying).is_some();
        let transition = transition::classify(new_hp, damage_taken, has_dying);
        tracing::debug!(actor = %actor_id, ?transition, "actor update classified");

        match transition {
            HpTransition::CrossedToZero => self.on_crossed_to_zero(host, actor_id),
            HpTransition::CrossedFromZero => self.on_crossed_from_zero(host, actor_id),
            _ => Ok(()),
        }
    }

    fn on_crossed_to_zero<H: Host>(&mut self, host: &mut H, actor_id: ActorId) -> EngineResult<()> {
        if !self.config.add_dying_on_zero {
            return Ok(());
        }
        if !arbiter::is_sole_authority(self.self_user, &host.connected_users()) {
            return Ok(());
        }
        let actor = host
            .actor(actor_id)
            .ok_or(EngineError::ActorNotFound(actor_id))?;

        let ctx = {
            let window = self.recent_messages.make_contiguous();
            context::resolve(window, &actor, self.config.save_lookup_window_secs)
        };

        if !actor.kind.uses_dying_track() {
            // NPCs and other actor kinds skip the graduated track.
            if self.config.nonlethal_check && ctx.nonlethal {
                return self.fall_unconscious(host, actor_id);
            }
            return death::apply_terminal_state(host, &actor, self.config.reorder_initiative);
        }

        let dying = host.condition(actor_id, ConditionKind::Dying);
        let wounded = host
            .condition(actor_id, ConditionKind::Wounded)
            .map_or(0, |c| c.value);

        match dying::zero_hp_outcome(
            &ctx,
            wounded,
            dying,
            actor.dying_max,
            self.config.nonlethal_check,
        ) {
            ZeroHpOutcome::FallUnconscious => self.fall_unconscious(host, actor_id),
            ZeroHpOutcome::EnterDying(value) => {
                tracing::debug!(actor = %actor_id, value, "entering dying");
                sync::apply(
                    host,
                    actor_id,
                    &[ConditionDelta::Set {
                        kind: ConditionKind::Dying,
                        value,
                    }],
                )
                .map_err(EngineError::from)
            }
            ZeroHpOutcome::Die => {
                tracing::info!(actor = %actor_id, "dying reaches maximum");
                sync::apply(
                    host,
                    actor_id,
                    &[ConditionDelta::Set {
                        kind: ConditionKind::Dying,
                        value: actor.dying_max,
                    }],
                )?;
                death::apply_terminal_state(host, &actor, self.config.reorder_initiative)?;
                if self.config.suppress_regeneration {
                    regen::suppress_fast_healing(host, &actor)?;
                }
                Ok(())
            }
        }
    }

    fn on_crossed_from_zero<H: Host>(
        &mut self,
        host: &mut H,
        actor_id: ActorId,
    ) -> EngineResult<()> {
        if !arbiter::is_sole_authority(self.self_user, &host.connected_users()) {
            return Ok(());
        }
        let has_dying = host.condition(actor_id, ConditionKind::Dying).is_some();
        let unconscious = host
            .condition(actor_id, ConditionKind::Unconscious)
            .is_some();

        let mut deltas = Vec::new();
        if has_dying {
            // Dying is removed outright, never decremented, and a
            // non-recovery removal always leaves a wound.
            deltas.push(ConditionDelta::Remove {
                kind: ConditionKind::Dying,
            });
            deltas.push(ConditionDelta::Increase {
                kind: ConditionKind::Wounded,
            });
        }
        if self.config.remove_unconscious_on_heal && unconscious {
            deltas.push(ConditionDelta::Remove {
                kind: ConditionKind::Unconscious,
            });
        }
        if deltas.is_empty() {
            return Ok(());
        }
        tracing::debug!(actor = %actor_id, "healed above zero, clearing episode");
        sync::apply(host, actor_id, &deltas)?;
        if has_dying {
            // Marked only after the removal committed. Events are queued,
            // so the deletion echo cannot arrive mid-handler; a rejected
            // removal produces no echo and must leave no stale flag.
            self.owned_removals.insert(actor_id);
        }
        Ok(())
    }

    fn on_item_deleted<H: Host>(
        &mut self,
        host: &mut H,
        actor_id: ActorId,
        condition: Option<ConditionKind>,
    ) -> EngineResult<()> {
        if condition != Some(ConditionKind::Dying) {
            return Ok(());
        }
        if self.owned_removals.remove(&actor_id) {
            // Echo of this engine's own removal; accounting already done.
            return Ok(());
        }
        if !arbiter::is_sole_authority(self.self_user, &host.connected_users()) {
            return Ok(());
        }
        let actor = host
            .actor(actor_id)
            .ok_or(EngineError::ActorNotFound(actor_id))?;

        // A manual removal is still a non-recovery removal: it scars.
        let mut deltas = vec![ConditionDelta::Increase {
            kind: ConditionKind::Wounded,
        }];
        if self.config.unconscious_on_dying_removed && actor.hp.at_zero() {
            deltas.push(ConditionDelta::AddPresence {
                kind: ConditionKind::Unconscious,
            });
        }
        tracing::debug!(actor = %actor_id, "dying removed externally");
        sync::apply(host, actor_id, &deltas).map_err(EngineError::from)
    }

    fn fall_unconscious<H: Host>(&mut self, host: &mut H, actor_id: ActorId) -> EngineResult<()> {
        tracing::debug!(actor = %actor_id, "nonlethal blow, falling unconscious");
        sync::apply(
            host,
            actor_id,
            &[ConditionDelta::AddPresence {
                kind: ConditionKind::Unconscious,
            }],
        )
        .map_err(EngineError::from)
    }
}
