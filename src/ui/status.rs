use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let position = model.editor.position();
    let gutter = if model.show_line_numbers {
        ""
    } else {
        "  [no gutter]"
    };
    let status = format!(
        " Ln {}, Col {}  {} lines{gutter}  Esc:quit  Ctrl+L:line numbers",
        position.line + 1,
        position.column + 1,
        model.editor.line_count(),
    );

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_bar, area);
}
