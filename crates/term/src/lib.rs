//! Terminal presentation layer.
//!
//! A small framebuffer abstraction ([`fb`]), a crossterm-backed renderer
//! ([`renderer`]), and a pure view that turns game snapshots into frames
//! ([`game_view`]). Only the renderer performs I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Frame, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
