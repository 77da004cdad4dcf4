//! Caretpad - a minimal plain-text editor.
//!
//! # Usage
//!
//! ```bash
//! caretpad
//! caretpad notes.txt --offset 12
//! caretpad --print-html notes.txt
//! ```

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;

use caretpad::app::App;
use caretpad::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags_or_default,
    local_override_path, save_config_flags,
};
use caretpad::editor::Editor;
use caretpad::render::{HtmlRenderer, Renderer};

/// A minimal plain-text editor with a single caret
#[derive(Parser, Debug)]
#[command(name = "caretpad", version, about, long_about = None)]
struct Cli {
    /// File whose contents seed the editor (never written back)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Initial caret offset, in characters
    #[arg(long, default_value_t = 0)]
    offset: usize,

    /// Hide the line-number gutter
    #[arg(long)]
    no_line_numbers: bool,

    /// Show the line-number gutter even if saved defaults hide it
    #[arg(long)]
    line_numbers: bool,

    /// Print the initial document as HTML and exit
    #[arg(long)]
    print_html: bool,

    /// Write log output to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn log_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = log_filter();
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
    Ok(())
}

/// Render `text` with the caret at `offset` as an HTML page fragment.
fn print_html(text: &str, offset: usize) -> Result<String> {
    let editor = Editor::new(text, offset)?;
    Ok(HtmlRenderer::new().render(&editor).to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = ConfigFlags {
        line_numbers: cli.line_numbers,
        no_line_numbers: cli.no_line_numbers,
        log_file: cli.log_file.clone(),
    };

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    // The log destination comes from config, so config warnings go to stderr
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .finish();
    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        tracing::subscriber::with_default(bootstrap, || {
            load_config_flags_or_default(&global_path)
                .union(&load_config_flags_or_default(&local_path))
        })
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.log_file.as_ref())?;

    let text = match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => String::new(),
    };

    if cli.print_html {
        println!("{}", print_html(&text, cli.offset)?);
        return Ok(());
    }

    let mut app = App::new(text)
        .with_offset(cli.offset)
        .with_line_numbers(effective.show_line_numbers());

    app.run().context("Application error")
}
