use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::app::Model;
use crate::editor::Editor;
use crate::render::Renderer;

use super::{TAB_WIDTH, status};

/// Lines and caret placement for one terminal frame.
#[derive(Debug, Clone)]
pub struct TerminalFrame {
    /// One line per visible document line, gutter included.
    pub lines: Vec<Line<'static>>,
    /// Caret cell relative to the document area, if the caret line is visible.
    pub caret: Option<(u16, u16)>,
    /// Columns taken by the line-number gutter.
    pub gutter_width: u16,
}

/// Renders the visible window of an editor into styled terminal lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalRenderer {
    offset: usize,
    height: u16,
    line_numbers: bool,
}

impl TerminalRenderer {
    pub const fn new(offset: usize, height: u16, line_numbers: bool) -> Self {
        Self {
            offset,
            height,
            line_numbers,
        }
    }

    /// Renderer for the model's current viewport and gutter setting.
    pub const fn for_model(model: &Model) -> Self {
        Self::new(
            model.viewport.offset(),
            model.viewport.height(),
            model.show_line_numbers,
        )
    }
}

impl Renderer for TerminalRenderer {
    type Output = TerminalFrame;

    fn render(&self, editor: &Editor) -> TerminalFrame {
        let total_lines = editor.line_count();
        let gutter_width = if self.line_numbers {
            line_number_width(total_lines) + 1
        } else {
            0
        };

        let start = self.offset.min(total_lines);
        let end = (start + self.height as usize).min(total_lines);

        let mut lines = Vec::with_capacity(end - start);
        for line_idx in start..end {
            let text = editor.line_at(line_idx).unwrap_or_default();
            let mut spans = Vec::with_capacity(2);
            if self.line_numbers {
                let label = format!(
                    "{:>width$} ",
                    line_idx + 1,
                    width = (gutter_width - 1) as usize
                );
                spans.push(Span::styled(label, Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::raw(display_text(&text)));
            lines.push(Line::from(spans));
        }

        let position = editor.position();
        let caret = (start..end).contains(&position.line).then(|| {
            let line = editor.line_at(position.line).unwrap_or_default();
            let x = line.chars().take(position.column).map(display_width).sum::<usize>();
            let x = u16::try_from(x).unwrap_or(u16::MAX);
            let y = u16::try_from(position.line - start).unwrap_or(u16::MAX);
            (gutter_width.saturating_add(x), y)
        });

        TerminalFrame {
            lines,
            caret,
            gutter_width,
        }
    }
}

/// Split the screen into the document area and the status bar row.
pub const fn split_editor_area(area: Rect) -> (Rect, Rect) {
    let editor_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };
    (editor_area, status_area)
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let (editor_area, status_area) = split_editor_area(frame.area());

    let view = TerminalRenderer::for_model(model).render(&model.editor);
    frame.render_widget(Clear, editor_area);
    frame.render_widget(Paragraph::new(view.lines), editor_area);

    if let Some((x, y)) = view.caret {
        let x = editor_area.x.saturating_add(x);
        if x < editor_area.x + editor_area.width && y < editor_area.height {
            frame.set_cursor_position(Position::new(x, editor_area.y + y));
        }
    }

    status::render_status_bar(model, frame, status_area);
}

/// Calculate the width needed for line numbers.
pub const fn line_number_width(total_lines: usize) -> u16 {
    if total_lines < 10 {
        1
    } else if total_lines < 100 {
        2
    } else if total_lines < 1_000 {
        3
    } else if total_lines < 10_000 {
        4
    } else if total_lines < 100_000 {
        5
    } else {
        6
    }
}

fn display_width(ch: char) -> usize {
    match ch {
        '\t' => TAB_WIDTH,
        c if c.is_control() => 1,
        c => c.width().unwrap_or(0),
    }
}

// Tabs expand to spaces and other control characters show as U+FFFD so
// on-screen widths match `display_width`.
fn display_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\t' => out.extend(std::iter::repeat_n(' ', TAB_WIDTH)),
            c if c.is_control() => out.push('\u{fffd}'),
            c => out.push(c),
        }
    }
    out
}
