//! Translating device input into editor calls.
//!
//! An [`InputAdapter`] maps raw events from its host into [`Command`]s,
//! the closed set of calls an input device can make on an [`Editor`].

mod terminal;

pub use terminal::TerminalInput;

use crate::editor::{Direction, Editor};

/// A single editor call triggered by user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Type a character (Enter types `'\n'`)
    Insert(char),
    /// Backspace
    DeletePreceding,
    /// Delete
    DeleteFollowing,
    /// Arrow keys
    Move(Direction),
    /// Home
    LineStart,
    /// End
    LineEnd,
    /// Jump to a line and column, clamped by the editor
    GoTo { line: isize, column: isize },
    /// Pointer click at vertical position `y` within content `content_height` tall
    Click { y: usize, content_height: usize },
}

impl Command {
    /// Run the command against `editor`.
    ///
    /// Returns `true` if the state changed and the host should redraw.
    pub fn apply(self, editor: &mut Editor) -> bool {
        let changed = match self {
            Self::Insert(ch) => {
                editor.insert_char(ch);
                true
            }
            Self::DeletePreceding => editor.delete_preceding(),
            Self::DeleteFollowing => editor.delete_following(),
            Self::Move(direction) => editor.move_cursor(direction),
            Self::LineStart => editor.move_to_line_start(),
            Self::LineEnd => editor.move_to_line_end(),
            Self::GoTo { line, column } => {
                let before = editor.caret();
                editor.go_to(line, column);
                editor.caret() != before
            }
            Self::Click { y, content_height } => {
                let before = editor.caret();
                let line = click_line(y, content_height, editor.line_count());
                editor.go_to(isize::try_from(line).unwrap_or(isize::MAX), 0);
                editor.caret() != before
            }
        };
        tracing::trace!(command = ?self, changed, caret = editor.caret(), "applied command");
        changed
    }
}

/// Line under a click, proportional to its height within the content.
///
/// May exceed the last line for clicks below the text; `go_to` clamps it.
pub const fn click_line(y: usize, content_height: usize, line_count: usize) -> usize {
    if content_height == 0 {
        return 0;
    }
    y.saturating_mul(line_count) / content_height
}

/// Maps host events to editor commands.
pub trait InputAdapter {
    /// The raw event type delivered by the host.
    type Event;

    /// Translate `event`, or `None` if it is not an editor command.
    fn translate(&self, event: &Self::Event) -> Option<Command>;
}
