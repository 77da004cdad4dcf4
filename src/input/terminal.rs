use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::{Command, InputAdapter};
use crate::editor::Direction;

/// Crossterm keyboard and mouse adapter.
///
/// Clicks are resolved against the document area and scroll offset the
/// adapter was built with, so build one per event from the current layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalInput {
    area: Rect,
    scroll_offset: usize,
    line_count: usize,
}

impl TerminalInput {
    /// Create an adapter for a document drawn in `area`, scrolled by
    /// `scroll_offset` lines, one row per line.
    pub const fn new(area: Rect, scroll_offset: usize, line_count: usize) -> Self {
        Self {
            area,
            scroll_offset,
            line_count,
        }
    }

    fn translate_key(key: &KeyEvent) -> Option<Command> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                Some(Command::Insert(c))
            }
            KeyCode::Enter => Some(Command::Insert('\n')),
            KeyCode::Tab => Some(Command::Insert('\t')),
            KeyCode::Backspace => Some(Command::DeletePreceding),
            KeyCode::Delete => Some(Command::DeleteFollowing),
            KeyCode::Left => Some(Command::Move(Direction::Left)),
            KeyCode::Right => Some(Command::Move(Direction::Right)),
            KeyCode::Up => Some(Command::Move(Direction::Up)),
            KeyCode::Down => Some(Command::Move(Direction::Down)),
            KeyCode::Home => Some(Command::LineStart),
            KeyCode::End => Some(Command::LineEnd),
            _ => None,
        }
    }

    fn translate_mouse(&self, mouse: &MouseEvent) -> Option<Command> {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return None;
        }
        let area = self.area;
        let inside = mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height;
        if !inside {
            return None;
        }
        Some(Command::Click {
            y: usize::from(mouse.row - area.y) + self.scroll_offset,
            content_height: self.line_count,
        })
    }
}

impl InputAdapter for TerminalInput {
    type Event = Event;

    fn translate(&self, event: &Event) -> Option<Command> {
        match event {
            Event::Key(key) => Self::translate_key(key),
            Event::Mouse(mouse) => self.translate_mouse(mouse),
            _ => None,
        }
    }
}
