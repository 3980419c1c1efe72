//! Held-key handling for terminal environments.
//!
//! Horizontal keys fire once on press, then auto-repeat after the DAS delay at
//! the ARR rate. The down key keeps dropping the piece at the soft-drop
//! interval for as long as it is held.
//!
//! Many terminals never report key releases and instead resend presses while a
//! key is held. A key that has not been refreshed within the release timeout
//! is therefore treated as released.

use crossterm::event::KeyCode;

use arrayvec::ArrayVec;

use crate::map::action_for_code;
use crate::types::{
    Direction, GameAction, DEFAULT_ARR_MS, DEFAULT_DAS_MS, KEY_RELEASE_TIMEOUT_MS,
    SOFT_DROP_INTERVAL_MS,
};

/// Upper bound on actions produced by a single `update`
pub const MAX_ACTIONS_PER_UPDATE: usize = 32;

/// Tracks held keys and turns elapsed time into repeated actions.
#[derive(Debug, Clone)]
pub struct InputHandler {
    horizontal: Option<Direction>,
    down_held: bool,
    /// Time since the held horizontal key was last pressed or refreshed.
    horizontal_idle_ms: u32,
    /// Same for the down key.
    down_idle_ms: u32,
    horizontal_das_timer: u32,
    horizontal_arr_accumulator: u32,
    down_accumulator: u32,
    das_delay: u32,
    arr_rate: u32,
    soft_drop_interval: u32,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DAS_MS, DEFAULT_ARR_MS)
    }

    /// Zero ARR is clamped to 1ms.
    pub fn with_config(das_delay: u32, arr_rate: u32) -> Self {
        Self {
            horizontal: None,
            down_held: false,
            horizontal_idle_ms: 0,
            down_idle_ms: 0,
            horizontal_das_timer: 0,
            horizontal_arr_accumulator: 0,
            down_accumulator: 0,
            das_delay,
            arr_rate: arr_rate.max(1),
            soft_drop_interval: SOFT_DROP_INTERVAL_MS,
            key_release_timeout_ms: KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn held_direction(&self) -> Option<Direction> {
        self.horizontal
    }

    pub fn is_soft_dropping(&self) -> bool {
        self.down_held
    }

    /// Register a press (or terminal repeat) of `code`.
    ///
    /// Returns the action to apply immediately: the first press of a held key.
    /// Repeats of a key already held only keep it alive. Keys that do not
    /// repeat are ignored here; map them with [`crate::handle_key_event`].
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let action = action_for_code(code)?;
        let direction = match action {
            GameAction::MoveLeft => Direction::Left,
            GameAction::MoveRight => Direction::Right,
            GameAction::SoftDrop => {
                self.down_idle_ms = 0;
                if self.down_held {
                    return None;
                }
                self.down_held = true;
                self.down_accumulator = 0;
                return Some(GameAction::SoftDrop);
            }
            GameAction::Rotate | GameAction::Reset => return None,
        };

        self.horizontal_idle_ms = 0;
        if self.horizontal == Some(direction) {
            return None;
        }
        self.horizontal = Some(direction);
        self.horizontal_das_timer = 0;
        self.horizontal_arr_accumulator = 0;
        Some(action)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        match action_for_code(code) {
            Some(GameAction::MoveLeft) => self.release_direction(Direction::Left),
            Some(GameAction::MoveRight) => self.release_direction(Direction::Right),
            Some(GameAction::SoftDrop) => self.release_down(),
            _ => {}
        }
    }

    fn release_direction(&mut self, direction: Direction) {
        if self.horizontal == Some(direction) {
            self.horizontal = None;
            self.horizontal_das_timer = 0;
            self.horizontal_arr_accumulator = 0;
        }
    }

    fn release_down(&mut self) {
        self.down_held = false;
        self.down_accumulator = 0;
    }

    /// Advance held-key timers by `elapsed_ms` and collect the repeats due.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, MAX_ACTIONS_PER_UPDATE> {
        let mut actions = ArrayVec::new();

        self.horizontal_idle_ms = self.horizontal_idle_ms.saturating_add(elapsed_ms);
        if self.horizontal_idle_ms > self.key_release_timeout_ms {
            if let Some(direction) = self.horizontal {
                self.release_direction(direction);
            }
        }
        self.down_idle_ms = self.down_idle_ms.saturating_add(elapsed_ms);
        if self.down_idle_ms > self.key_release_timeout_ms && self.down_held {
            self.release_down();
        }

        if let Some(direction) = self.horizontal {
            let prev_das = self.horizontal_das_timer;
            self.horizontal_das_timer = self.horizontal_das_timer.saturating_add(elapsed_ms);

            if self.horizontal_das_timer >= self.das_delay {
                // Only the time past the DAS threshold feeds the repeat accumulator.
                let excess = if prev_das < self.das_delay {
                    self.horizontal_das_timer - self.das_delay
                } else {
                    elapsed_ms
                };
                self.horizontal_arr_accumulator += excess;

                let repeat = match direction {
                    Direction::Left => GameAction::MoveLeft,
                    Direction::Right => GameAction::MoveRight,
                };
                while self.horizontal_arr_accumulator >= self.arr_rate {
                    let _ = actions.try_push(repeat);
                    self.horizontal_arr_accumulator -= self.arr_rate;
                }
            }
        }

        if self.down_held {
            self.down_accumulator += elapsed_ms;
            while self.down_accumulator >= self.soft_drop_interval {
                let _ = actions.try_push(GameAction::SoftDrop);
                self.down_accumulator -= self.soft_drop_interval;
            }
        }

        actions
    }

    pub fn reset(&mut self) {
        self.horizontal = None;
        self.down_held = false;
        self.horizontal_idle_ms = 0;
        self.down_idle_ms = 0;
        self.horizontal_das_timer = 0;
        self.horizontal_arr_accumulator = 0;
        self.down_accumulator = 0;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
