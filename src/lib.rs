// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorError)
    clippy::module_name_repetitions
)]

//! # Caretpad
//!
//! A minimal plain-text editor with a single caret.
//!
//! The heart of the crate is [`editor::Editor`], a text buffer addressed by
//! character offset with line/column conversion and clamped navigation.
//! Everything else is a thin collaborator around it:
//!
//! ## Architecture
//!
//! - **Core**: [`editor`] owns the text, caret and cached line count
//! - **Renderers**: [`render`] defines the [`render::Renderer`] trait and
//!   HTML output; [`ui`] renders into a terminal
//! - **Input adapters**: [`input`] maps device events to editor commands
//! - **Shell**: [`app`] runs an Elm-architecture loop in the terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`config`]: Persisted command-line defaults
//! - [`editor`]: Caret/text-buffer model
//! - [`input`]: Event translation
//! - [`render`]: Renderer trait and HTML markup
//! - [`ui`]: Terminal UI components

pub mod app;
pub mod config;
pub mod editor;
pub mod input;
pub mod render;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::{Direction, Editor, EditorError, Position};
    pub use crate::input::{Command, InputAdapter};
    pub use crate::render::{HtmlRenderer, Renderer};
}
