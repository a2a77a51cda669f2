//! Runtime configuration for the dying automation.
//!
//! The host owns and persists these toggles; the engine only queries a
//! current snapshot. Each handler invocation reads the snapshot it was
//! given, so the host can flip settings between events without restarting
//! anything.

use serde::{Deserialize, Serialize};

/// Toggles gating the optional behaviors of the automation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomationConfig {
    /// Master switch: run the zero-HP pipeline at all.
    pub add_dying_on_zero: bool,
    /// Honor the nonlethal trait: incapacitate instead of entering dying.
    pub nonlethal_check: bool,
    /// Backfill unconscious when dying is removed while still at zero HP.
    pub unconscious_on_dying_removed: bool,
    /// Remove unconscious automatically when healed above zero HP.
    pub remove_unconscious_on_heal: bool,
    /// Reposition incapacitated combatants in the turn order.
    pub reorder_initiative: bool,
    /// Disable fast healing when a death determination lands.
    pub suppress_regeneration: bool,
    /// How far back (in seconds) to search for the save check matching a
    /// save-sourced damage message. Heuristic, not a contract.
    pub save_lookup_window_secs: i64,
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            add_dying_on_zero: true,
            nonlethal_check: true,
            unconscious_on_dying_removed: true,
            remove_unconscious_on_heal: true,
            reorder_initiative: true,
            suppress_regeneration: true,
            save_lookup_window_secs: 8,
        }
    }
}

impl AutomationConfig {
    /// Enable or disable the zero-HP pipeline.
    pub fn with_add_dying(mut self, on: bool) -> Self {
        self.add_dying_on_zero = on;
        self
    }

    /// Enable or disable the nonlethal check.
    pub fn with_nonlethal_check(mut self, on: bool) -> Self {
        self.nonlethal_check = on;
        self
    }

    /// Enable or disable the unconscious backfill on dying removal.
    pub fn with_unconscious_on_dying_removed(mut self, on: bool) -> Self {
        self.unconscious_on_dying_removed = on;
        self
    }

    /// Enable or disable unconscious removal on healing.
    pub fn with_remove_unconscious_on_heal(mut self, on: bool) -> Self {
        self.remove_unconscious_on_heal = on;
        self
    }

    /// Enable or disable initiative repositioning.
    pub fn with_reorder_initiative(mut self, on: bool) -> Self {
        self.reorder_initiative = on;
        self
    }

    /// Enable or disable fast-healing suppression.
    pub fn with_suppress_regeneration(mut self, on: bool) -> Self {
        self.suppress_regeneration = on;
        self
    }

    /// Set the save-check lookup window (clamped to at least 1 second).
    pub fn with_save_lookup_window(mut self, secs: i64) -> Self {
        self.save_lookup_window_secs = secs.max(1);
        self
    }
}
