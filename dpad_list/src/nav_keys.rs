// Copyright 2026 the Dpad List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation key state: classify directional presses as deliberate or rapid.
//!
//! ## Usage
//! 1) Map incoming keyboard events to a direction with [`NavDirection::from_key`].
//! 2) Feed every directional transition into [`NavKeyState::observe`].
//! 3) At the moment a focus change happens, read [`NavKeyState::is_rapid`] to
//!    decide whether the selector should animate or snap.
//!
//! The counter is deliberately dumb: any directional key-down (including
//! auto-repeats while a key is held) increments the streak, and any
//! directional key-up resets it to zero. Consumers only ever read it.
//!
//! ## Minimal example
//! ```
//! use dpad_list::NavKeyState;
//! use ui_events::keyboard::KeyState;
//!
//! let mut keys = NavKeyState::new();
//! keys.observe(KeyState::Down);
//! assert!(!keys.is_rapid()); // a single deliberate press animates
//! keys.observe(KeyState::Down);
//! assert!(keys.is_rapid()); // held or hammered: snap instead
//! keys.observe(KeyState::Up);
//! assert_eq!(keys.streak(), 0);
//! ```

use ui_events::keyboard::{Key, KeyState, NamedKey};

/// Streak length at and above which focus changes snap instead of animating.
const RAPID_STREAK: u32 = 2;

/// A D-pad navigation direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavDirection {
    /// Navigate left.
    Left,
    /// Navigate right.
    Right,
    /// Navigate up.
    Up,
    /// Navigate down.
    Down,
}

impl NavDirection {
    /// Maps a keyboard key to a navigation direction.
    ///
    /// Returns `None` for anything other than the four arrow keys; modifier
    /// state is intentionally ignored.
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Named(NamedKey::ArrowLeft) => Some(Self::Left),
            Key::Named(NamedKey::ArrowRight) => Some(Self::Right),
            Key::Named(NamedKey::ArrowUp) => Some(Self::Up),
            Key::Named(NamedKey::ArrowDown) => Some(Self::Down),
            _ => None,
        }
    }

    /// The step this direction takes through a linear list: `-1` toward the
    /// start, `+1` toward the end.
    pub fn linear_step(self) -> isize {
        match self {
            Self::Left | Self::Up => -1,
            Self::Right | Self::Down => 1,
        }
    }
}

/// Tracks the repeat streak of directional key presses.
///
/// The streak equals the number of directional key-downs observed since the
/// last directional key-up. Focus-change consumers read it at the moment of
/// the change and never mutate it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavKeyState {
    streak: u32,
}

impl NavKeyState {
    /// Creates an idle state (streak zero).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one directional key transition.
    ///
    /// Key-down increments the streak; key-up resets it to zero regardless of
    /// which of the four directional keys was released.
    pub fn observe(&mut self, state: KeyState) {
        if state.is_down() {
            self.streak = self.streak.saturating_add(1);
        } else {
            self.streak = 0;
        }
    }

    /// Number of directional key-downs since the last directional key-up.
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// `true` when focus changes should snap instead of animating.
    #[must_use]
    pub fn is_rapid(&self) -> bool {
        self.streak >= RAPID_STREAK
    }

    /// Resets the streak to zero.
    pub fn reset(&mut self) {
        self.streak = 0;
    }
}
