//! Terminal UI components.
//!
//! This module contains the terminal front-end:
//! - [`viewport`]: Scroll position and visible range management
//! - [`TerminalRenderer`]: Editor state to styled lines and caret cell
//! - [`render`]: Draws a [`Model`](crate::app::Model) into a ratatui frame

pub mod viewport;

mod render;
mod status;

pub use render::{
    TerminalFrame, TerminalRenderer, line_number_width, render, split_editor_area,
};

/// Columns a tab character occupies on screen.
pub const TAB_WIDTH: usize = 4;
