use std::collections::HashSet;

/// Keyboard identifiers the platformer reads (browser `KeyboardEvent.key` values).
pub mod keys {
    pub const ARROW_LEFT: &str = "ArrowLeft";
    pub const ARROW_RIGHT: &str = "ArrowRight";
    pub const ARROW_UP: &str = "ArrowUp";
}

/// Input event types the engine understands.
/// Generic — no game-specific semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed. `key` is the host's key identifier string.
    KeyDown { key: String },
    /// A key was released.
    KeyUp { key: String },
}

/// A queue of input events.
/// The host pushes events whenever they arrive; the runner drains them at the
/// start of each tick, so a tick never observes a half-applied event stream.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Which keys are held, as of the start of the current tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyState {
    pressed: HashSet<String>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the held set.
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { key } => {
                self.pressed.insert(key.clone());
            }
            InputEvent::KeyUp { key } => {
                self.pressed.remove(key);
            }
        }
    }

    /// Fold every event in order.
    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a InputEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.contains(key)
    }

    /// Mark a key held without going through an event. Mostly for tests.
    pub fn press(&mut self, key: &str) {
        self.pressed.insert(key.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn down(key: &str) -> InputEvent {
        InputEvent::KeyDown { key: key.to_owned() }
    }

    fn up(key: &str) -> InputEvent {
        InputEvent::KeyUp { key: key.to_owned() }
    }

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(down(keys::ARROW_LEFT));
        q.push(up(keys::ARROW_LEFT));
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn key_state_tracks_held_keys() {
        let mut state = KeyState::new();
        state.apply_all(&[down(keys::ARROW_RIGHT), down(keys::ARROW_UP)]);
        assert!(state.is_pressed(keys::ARROW_RIGHT));
        assert!(state.is_pressed(keys::ARROW_UP));
        assert!(!state.is_pressed(keys::ARROW_LEFT));

        state.apply(&up(keys::ARROW_UP));
        assert!(!state.is_pressed(keys::ARROW_UP));
    }

    #[test]
    fn press_then_release_between_ticks_leaves_key_up() {
        let mut state = KeyState::new();
        state.apply_all(&[down(keys::ARROW_UP), up(keys::ARROW_UP)]);
        assert!(!state.is_pressed(keys::ARROW_UP));
    }

    #[test]
    fn repeated_key_down_is_idempotent() {
        let mut state = KeyState::new();
        state.apply_all(&[down("a"), down("a"), up("a")]);
        assert!(!state.is_pressed("a"));
    }
}
