use std::io::stdout;

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::app::{App, Model, handle_event, update};
use crate::editor::Editor;

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial caret offset is invalid, or if
    /// terminal initialization or event reading fails.
    pub fn run(&mut self) -> Result<()> {
        let editor = Editor::new(&self.initial_text, self.initial_offset)?;

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - caretpad requires an interactive terminal")?;
        if let Err(err) = execute!(stdout(), EnableMouseCapture) {
            tracing::warn!(error = %err, "mouse capture unavailable; clicks are ignored");
        }

        let line_numbers = self.line_numbers;
        let result = terminal
            .size()
            .context("Failed to query terminal size")
            .and_then(|size| {
                tracing::debug!(width = size.width, height = size.height, "terminal initialized");
                let model = Model::new(editor, (size.width, size.height))
                    .with_line_numbers(line_numbers);
                Self::event_loop(&mut terminal, model)
            });

        // Restore terminal
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
        tracing::debug!("terminal restored");

        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, mut model: Model) -> Result<()> {
        loop {
            if model.needs_redraw {
                terminal.draw(|frame| crate::ui::render(&model, frame))?;
                model.needs_redraw = false;
            }

            let event = event::read().context("Failed to read terminal event")?;
            if let Some(msg) = handle_event(&event, &model) {
                model = update(model, msg);
            }
            if model.should_quit {
                return Ok(());
            }
        }
    }
}
