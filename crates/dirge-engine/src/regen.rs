//! One-way suppression of automatic healing.
//!
//! Fires when an actor's dying value is newly set to its maximum. A
//! standing fast-healing or regeneration rule element would contradict a
//! death determination the GM may still need to adjudicate narratively, so
//! the first active one found is rewritten to a disabled state. It is never
//! automatically re-enabled.

use dirge_core::{Actor, ActorHost};

use crate::error::EngineResult;

/// Disable the first active fast-healing rule element on `actor`'s items by
/// rewriting the owning item's rule list. Returns true if an element was
/// disabled, false if none was active.
pub fn suppress_fast_healing<H: ActorHost>(host: &mut H, actor: &Actor) -> EngineResult<bool> {
    for item in &actor.items {
        let Some(index) = item.rules.iter().position(|r| r.is_active_healing()) else {
            continue;
        };
        let mut rules = item.rules.clone();
        rules[index].disabled = true;
        tracing::info!(actor = %actor.id, item = %item.id, "suppressing fast healing");
        host.set_item_rules(actor.id, item.id, rules)?;
        return Ok(true);
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use dirge_core::{
        ActorId, ActorKind, ConditionKind, ConditionValue, HostResult, ItemId,
        OwnedItem, RuleElement, RuleKind, StatusMarker,
    };

    #[derive(Default)]
    struct ItemStore {
        rules: HashMap<ItemId, Vec<RuleElement>>,
    }

    impl ActorHost for ItemStore {
        fn actor(&self, _id: ActorId) -> Option<Actor> {
            None
        }

        fn condition(&self, _id: ActorId, _kind: ConditionKind) -> Option<ConditionValue> {
            None
        }

        fn increase_condition(
            &mut self,
            _id: ActorId,
            _kind: ConditionKind,
            _value: Option<u8>,
        ) -> HostResult<()> {
            Ok(())
        }

        fn decrease_condition(
            &mut self,
            _id: ActorId,
            _kind: ConditionKind,
            _force_remove: bool,
        ) -> HostResult<()> {
            Ok(())
        }

        fn set_hero_points(&mut self, _id: ActorId, _value: u8) -> HostResult<()> {
            Ok(())
        }

        fn toggle_status(
            &mut self,
            _id: ActorId,
            _marker: StatusMarker,
            _overlay: bool,
        ) -> HostResult<()> {
            Ok(())
        }

        fn has_status(&self, _id: ActorId, _marker: StatusMarker) -> bool {
            false
        }

        fn set_item_rules(
            &mut self,
            _id: ActorId,
            item: ItemId,
            rules: Vec<RuleElement>,
        ) -> HostResult<()> {
            self.rules.insert(item, rules);
            Ok(())
        }
    }

    fn troll() -> Actor {
        let mut actor = Actor::new("Troll", ActorKind::NonPlayerCharacter, 90);
        actor.items.push(OwnedItem::new(
            "Attack of Opportunity",
            vec![RuleElement::new(RuleKind::Other("Note".to_string()))],
        ));
        actor.items.push(OwnedItem::new(
            "Regeneration",
            vec![
                RuleElement::new(RuleKind::Other("Weakness".to_string())),
                RuleElement::new(RuleKind::FastHealing),
            ],
        ));
        actor
    }

    #[test]
    fn disables_first_active_healing_rule() {
        let mut store = ItemStore::default();
        let actor = troll();
        assert!(suppress_fast_healing(&mut store, &actor).unwrap());

        let rewritten = &store.rules[&actor.items[1].id];
        assert!(rewritten[1].disabled);
        // Sibling rules on the same item are untouched.
        assert!(!rewritten[0].disabled);
        // The unrelated item was never rewritten.
        assert!(!store.rules.contains_key(&actor.items[0].id));
    }

    #[test]
    fn already_disabled_healing_is_left_alone() {
        let mut store = ItemStore::default();
        let mut actor = troll();
        actor.items[1].rules[1].disabled = true;
        assert!(!suppress_fast_healing(&mut store, &actor).unwrap());
        assert!(store.rules.is_empty());
    }

    #[test]
    fn actor_without_healing_is_untouched() {
        let mut store = ItemStore::default();
        let actor = Actor::new("Guard", ActorKind::NonPlayerCharacter, 15);
        assert!(!suppress_fast_healing(&mut store, &actor).unwrap());
    }
}
