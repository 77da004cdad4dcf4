use crate::app::Model;
use crate::input::Command;

/// All possible events and actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Run an editor command
    Edit(Command),
    /// Terminal was resized to (width, height)
    Resize(u16, u16),
    /// Show or hide the line-number gutter
    ToggleLineNumbers,
    /// Quit the application
    Quit,
}

/// Apply a message to the model.
///
/// Editor commands that report no change leave `needs_redraw` untouched so
/// a no-op navigation does not trigger a redraw.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::Edit(command) => {
            if command.apply(&mut model.editor) {
                model.sync_viewport();
                model.needs_redraw = true;
            }
        }
        Message::Resize(width, height) => {
            tracing::debug!(width, height, "terminal resized");
            model.viewport.resize(width, height.saturating_sub(1));
            model.sync_viewport();
            model.needs_redraw = true;
        }
        Message::ToggleLineNumbers => {
            model.show_line_numbers = !model.show_line_numbers;
            model.needs_redraw = true;
        }
        Message::Quit => {
            model.should_quit = true;
        }
    }
    model
}
