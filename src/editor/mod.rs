//! Caret/text-buffer model.
//!
//! Provides a rope-backed document with a single caret addressed by
//! character offset. Renderers and input adapters drive it through the
//! methods on [`Editor`]; it knows nothing about markup or devices.

mod buffer;
mod error;

pub use buffer::{Direction, Editor, Position};
pub use error::EditorError;
