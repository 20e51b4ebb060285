//! Keyboard snapshot to tick input
//!
//! Backends report which keys are held each frame. The tracker keeps the
//! previous snapshot so hammer, bomb and restart fire only on the press edge.

use crate::sim::TickInput;

/// Keys held this frame, as polled from the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub hammer: bool,
    pub bomb: bool,
    pub restart: bool,
}

/// Edge detector over successive key snapshots
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    previous: KeyState,
    /// Hand control to the autopilot
    pub idle_mode: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert this frame's held keys into a tick input
    pub fn sample(&mut self, keys: KeyState) -> TickInput {
        let prev = self.previous;
        self.previous = keys;
        TickInput {
            up: keys.up,
            down: keys.down,
            left: keys.left,
            right: keys.right,
            fire: keys.fire,
            hammer: keys.hammer && !prev.hammer,
            bomb: keys.bomb && !prev.bomb,
            restart: keys.restart && !prev.restart,
            idle_mode: self.idle_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_pass_through() {
        let mut tracker = InputTracker::new();
        let keys = KeyState {
            left: true,
            fire: true,
            ..Default::default()
        };
        for _ in 0..3 {
            let input = tracker.sample(keys);
            assert!(input.left && input.fire);
        }
    }

    #[test]
    fn test_actions_fire_on_press_edge_only() {
        let mut tracker = InputTracker::new();
        let held = KeyState {
            hammer: true,
            bomb: true,
            restart: true,
            ..Default::default()
        };
        let first = tracker.sample(held);
        assert!(first.hammer && first.bomb && first.restart);

        let second = tracker.sample(held);
        assert!(!second.hammer && !second.bomb && !second.restart);

        tracker.sample(KeyState::default());
        assert!(tracker.sample(held).hammer);
    }

    #[test]
    fn test_idle_flag_forwarded() {
        let mut tracker = InputTracker {
            idle_mode: true,
            ..Default::default()
        };
        assert!(tracker.sample(KeyState::default()).idle_mode);
    }
}
