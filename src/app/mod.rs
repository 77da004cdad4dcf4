//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use input::handle_event;
pub use model::Model;
pub use update::{Message, update};

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    initial_text: String,
    initial_offset: usize,
    line_numbers: bool,
}

impl App {
    /// Create a new application editing `initial_text`.
    pub const fn new(initial_text: String) -> Self {
        Self {
            initial_text,
            initial_offset: 0,
            line_numbers: true,
        }
    }

    /// Set the initial caret offset (in characters).
    pub const fn with_offset(mut self, offset: usize) -> Self {
        self.initial_offset = offset;
        self
    }

    /// Show or hide the line-number gutter.
    pub const fn with_line_numbers(mut self, visible: bool) -> Self {
        self.line_numbers = visible;
        self
    }
}
