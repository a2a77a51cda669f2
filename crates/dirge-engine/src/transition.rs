//! HP transition classification.
//!
//! Turns a raw actor update into a semantic event. The previous HP value is
//! reconstructed from the applied delta (`previous = new + damage_taken`)
//! instead of trusted from a stored snapshot: this module's own condition
//! writes re-trigger the update event, and only the HP field itself may
//! drive classification.

/// The semantic meaning of one HP update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HpTransition {
    /// HP dropped from above zero to exactly zero this update.
    CrossedToZero,
    /// HP rose above zero, either from zero or while the dying condition
    /// was still present.
    CrossedFromZero,
    /// HP stayed at zero.
    StableAtZero,
    /// HP stayed above zero.
    StableAboveZero,
    /// The update did not touch the HP field.
    Unrelated,
}

/// Classify an actor update.
///
/// `new_hp` is `None` when the update did not touch HP. `damage_taken` is
/// the raw magnitude applied this update (negative for healing).
/// `has_dying` reports whether the actor currently holds the dying
/// condition, which marks a heal as a zero-crossing even when the previous
/// value cannot be reconstructed as zero.
pub fn classify(new_hp: Option<i32>, damage_taken: i32, has_dying: bool) -> HpTransition {
    let Some(new) = new_hp else {
        return HpTransition::Unrelated;
    };
    let previous = new + damage_taken;
    if new <= 0 {
        if previous > 0 {
            HpTransition::CrossedToZero
        } else {
            HpTransition::StableAtZero
        }
    } else if has_dying || previous <= 0 {
        HpTransition::CrossedFromZero
    } else {
        HpTransition::StableAboveZero
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_to_zero_crosses_down() {
        assert_eq!(classify(Some(0), 6, false), HpTransition::CrossedToZero);
    }

    #[test]
    fn update_at_zero_without_damage_is_stable() {
        assert_eq!(classify(Some(0), 0, false), HpTransition::StableAtZero);
        // Further damage while already downed does not re-cross.
        assert_eq!(classify(Some(0), -3, true), HpTransition::StableAtZero);
    }

    #[test]
    fn heal_from_zero_crosses_up() {
        assert_eq!(classify(Some(5), -5, false), HpTransition::CrossedFromZero);
    }

    #[test]
    fn heal_with_dying_present_crosses_up() {
        // The reconstruction may not land on zero if another mutation raced
        // the heal; the standing dying condition still marks the crossing.
        assert_eq!(classify(Some(5), -2, true), HpTransition::CrossedFromZero);
    }

    #[test]
    fn ordinary_damage_above_zero_is_stable() {
        assert_eq!(classify(Some(7), 3, false), HpTransition::StableAboveZero);
    }

    #[test]
    fn non_hp_update_is_unrelated() {
        assert_eq!(classify(None, 0, true), HpTransition::Unrelated);
    }

    #[test]
    fn overkill_clamped_at_zero_still_crosses() {
        // Host clamps HP at zero; the delta still reconstructs a positive
        // previous value.
        assert_eq!(classify(Some(0), 40, false), HpTransition::CrossedToZero);
    }
}
