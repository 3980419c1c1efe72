//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`] and turns
//! held keys into repeated actions, including on terminals that never send
//! key-release events.

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::InputHandler;
pub use map::{action_for_code, handle_key_event, is_held_action, should_quit};
