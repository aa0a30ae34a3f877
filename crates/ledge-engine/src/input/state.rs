//! Key-resolution state machine.
//!
//! Tracks which logical actions are held, resolving declared opposite-key
//! pairs (left/right) by most-recent-press priority: pressing one direction
//! while the other is held evicts the held key immediately, without waiting
//! for its release. Resolving on press rather than release avoids a stuck
//! direction when both physical keys are briefly down during a fast
//! direction change (key events can interleave with autorepeat).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A named gameplay intent, decoupled from the physical key that
/// triggers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
}

/// What a physical key code maps to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Logical action this key triggers.
    pub action: Action,
    /// Key code whose action is mutually exclusive with this one, if any.
    #[serde(default)]
    pub opposite: Option<String>,
}

/// Currently-held keys, in press order, with opposite-pair resolution.
///
/// Invariant: for any pair of keys declared as opposites, at most one is
/// active at any time.
#[derive(Debug)]
pub struct InputState {
    bindings: HashMap<String, KeyBinding>,
    /// Active key codes; insertion order = press order, no duplicates.
    active: Vec<String>,
}

impl InputState {
    pub fn new(bindings: HashMap<String, KeyBinding>) -> Self {
        Self {
            bindings,
            active: Vec::new(),
        }
    }

    /// The reference bindings: A/D for left/right (mutual opposites),
    /// Space to jump.
    pub fn with_default_bindings() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(
            "KeyD".to_string(),
            KeyBinding {
                action: Action::MoveRight,
                opposite: Some("KeyA".to_string()),
            },
        );
        bindings.insert(
            "KeyA".to_string(),
            KeyBinding {
                action: Action::MoveLeft,
                opposite: Some("KeyD".to_string()),
            },
        );
        bindings.insert(
            "Space".to_string(),
            KeyBinding {
                action: Action::Jump,
                opposite: None,
            },
        );
        Self::new(bindings)
    }

    /// Register a key press. Unknown codes are ignored (hosts report many
    /// codes the game does not bind); pressing an already-active key is a
    /// no-op. If the key's declared opposite is active it is evicted first,
    /// then the new key is appended — last-press priority.
    pub fn press(&mut self, code: &str) {
        let Some(binding) = self.bindings.get(code) else {
            log::trace!("unbound key ignored: {code}");
            return;
        };
        if self.active.iter().any(|c| c == code) {
            return;
        }
        if let Some(opposite) = binding.opposite.clone() {
            self.active.retain(|c| *c != opposite);
        }
        self.active.push(code.to_string());
    }

    /// Register a key release. Unknown or inactive codes are no-ops; the
    /// relative order of the remaining active keys is preserved. Releasing
    /// an evicted key does not reactivate its opposite.
    pub fn release(&mut self, code: &str) {
        if !self.bindings.contains_key(code) {
            return;
        }
        self.active.retain(|c| c != code);
    }

    /// Whether a key code is currently active.
    pub fn is_active(&self, code: &str) -> bool {
        self.active.iter().any(|c| c == code)
    }

    /// Logical actions of the active keys, in activation order.
    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.active
            .iter()
            .filter_map(|code| self.bindings.get(code).map(|b| b.action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_activates_a_bound_key() {
        let mut input = InputState::with_default_bindings();
        input.press("KeyD");
        assert!(input.is_active("KeyD"));
    }

    #[test]
    fn unknown_codes_are_silent_no_ops() {
        let mut input = InputState::with_default_bindings();
        input.press("KeyQ");
        input.release("KeyQ");
        assert!(!input.is_active("KeyQ"));
        assert_eq!(input.actions().count(), 0);
    }

    #[test]
    fn press_is_idempotent() {
        let mut input = InputState::with_default_bindings();
        input.press("KeyD");
        input.press("KeyD");
        assert_eq!(input.actions().count(), 1);
        input.release("KeyD");
        assert!(!input.is_active("KeyD"));
    }

    #[test]
    fn opposite_press_evicts_with_last_press_priority() {
        let mut input = InputState::with_default_bindings();
        input.press("KeyD");
        input.press("KeyA");
        assert!(input.is_active("KeyA"));
        assert!(!input.is_active("KeyD"));
    }

    #[test]
    fn opposites_are_never_simultaneously_active() {
        let mut input = InputState::with_default_bindings();
        // Interleaved presses and releases, including autorepeat-style
        // duplicates.
        for step in [
            "press D", "press A", "press A", "release D", "press D", "press D", "release A",
            "press A", "press D",
        ] {
            match step {
                "press D" => input.press("KeyD"),
                "press A" => input.press("KeyA"),
                "release D" => input.release("KeyD"),
                "release A" => input.release("KeyA"),
                _ => unreachable!(),
            }
            assert!(
                !(input.is_active("KeyD") && input.is_active("KeyA")),
                "both directions active after {step:?}"
            );
        }
    }

    #[test]
    fn eviction_is_permanent() {
        // D is evicted when A is pressed; releasing A must not revive D.
        let mut input = InputState::with_default_bindings();
        input.press("KeyD");
        input.press("KeyA");
        input.release("KeyA");
        assert!(!input.is_active("KeyD"));
        assert!(!input.is_active("KeyA"));
    }

    #[test]
    fn release_of_inactive_key_is_a_no_op() {
        let mut input = InputState::with_default_bindings();
        input.press("KeyD");
        input.release("KeyA");
        assert!(input.is_active("KeyD"));
    }

    #[test]
    fn actions_come_out_in_press_order() {
        let mut input = InputState::with_default_bindings();
        input.press("Space");
        input.press("KeyD");
        let actions: Vec<Action> = input.actions().collect();
        assert_eq!(actions, vec![Action::Jump, Action::MoveRight]);
    }

    #[test]
    fn release_preserves_relative_order_of_the_rest() {
        let mut input = InputState::with_default_bindings();
        input.press("Space");
        input.press("KeyD");
        input.release("Space");
        let actions: Vec<Action> = input.actions().collect();
        assert_eq!(actions, vec![Action::MoveRight]);
    }

    #[test]
    fn bindings_round_trip_through_json() {
        let json = r#"{
            "KeyD": { "action": "moveRight", "opposite": "KeyA" },
            "KeyA": { "action": "moveLeft", "opposite": "KeyD" },
            "Space": { "action": "jump" }
        }"#;
        let bindings: HashMap<String, KeyBinding> = serde_json::from_str(json).unwrap();
        let mut input = InputState::new(bindings);
        input.press("KeyA");
        input.press("KeyD");
        assert!(input.is_active("KeyD"));
        assert!(!input.is_active("KeyA"));
    }
}
