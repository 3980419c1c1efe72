//! Terminal rendering for the game.
//!
//! A [`GameView`] paints a [`core::GameSnapshot`](blockfall_core::GameSnapshot)
//! into a [`FrameBuffer`]; the [`TerminalRenderer`] diffs that framebuffer
//! against the previous frame and flushes it through crossterm. Colors go
//! through a [`Palette`], so the core only ever deals in palette indices.

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use palette::Palette;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
