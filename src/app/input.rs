use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;

use crate::app::{Message, Model};
use crate::input::{InputAdapter, TerminalInput};
use crate::ui::split_editor_area;

/// Map a terminal event to a message.
///
/// Application keys are checked first; everything else goes through the
/// editor's [`TerminalInput`] adapter.
pub fn handle_event(event: &Event, model: &Model) -> Option<Message> {
    match event {
        Event::Resize(w, h) => return Some(Message::Resize(*w, *h)),
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Esc => return Some(Message::Quit),
                KeyCode::Char('q' | 'c') if ctrl => return Some(Message::Quit),
                KeyCode::Char('l') if ctrl => return Some(Message::ToggleLineNumbers),
                _ => {}
            }
        }
        _ => {}
    }

    let screen = Rect::new(
        0,
        0,
        model.viewport.width(),
        model.viewport.height().saturating_add(1),
    );
    let (document_area, _) = split_editor_area(screen);
    TerminalInput::new(
        document_area,
        model.viewport.offset(),
        model.editor.line_count(),
    )
    .translate(event)
    .map(Message::Edit)
}
