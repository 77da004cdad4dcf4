//! Rendering editor state for display.
//!
//! A [`Renderer`] turns the caret-split text and line count of an
//! [`Editor`] into whatever its host displays. [`html`] produces browser
//! markup; the terminal renderer lives in [`crate::ui`].

pub mod html;

pub use html::{HtmlFrame, HtmlRenderer};

use crate::editor::Editor;

/// Produces a displayable frame from editor state.
pub trait Renderer {
    /// The frame type this renderer produces.
    type Output;

    /// Render the current state of `editor`.
    fn render(&self, editor: &Editor) -> Self::Output;
}
