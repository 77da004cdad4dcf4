use crate::editor::Editor;
use crate::ui::viewport::Viewport;

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug)]
pub struct Model {
    /// The document and caret
    pub editor: Editor,
    /// Viewport managing scroll position
    pub viewport: Viewport,
    /// Whether the line-number gutter is drawn
    pub show_line_numbers: bool,
    /// Set when the last message changed something visible
    pub needs_redraw: bool,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl Model {
    /// Create a model for a terminal of `(width, height)`.
    ///
    /// One row is reserved for the status bar.
    pub fn new(editor: Editor, terminal_size: (u16, u16)) -> Self {
        let (width, height) = terminal_size;
        let viewport = Viewport::new(width, height.saturating_sub(1), editor.line_count());
        let mut model = Self {
            editor,
            viewport,
            show_line_numbers: true,
            needs_redraw: true,
            should_quit: false,
        };
        model.sync_viewport();
        model
    }

    pub const fn with_line_numbers(mut self, visible: bool) -> Self {
        self.show_line_numbers = visible;
        self
    }

    /// Bring the viewport in line with the document after an edit or resize.
    pub(super) fn sync_viewport(&mut self) {
        self.viewport.set_total_lines(self.editor.line_count());
        self.viewport.reveal(self.editor.current_line());
    }
}
