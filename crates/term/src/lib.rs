//! Terminal rendering for blockfall.
//!
//! Snapshots from `core` are drawn into a plain framebuffer first, then flushed to the
//! terminal through crossterm. Board cells are two columns wide so blocks look square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, with_restore, TerminalRenderer};
