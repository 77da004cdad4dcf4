//! Persisted command-line defaults.
//!
//! Defaults are stored as plain CLI flags, one or more per line, in a global
//! config file and an optional local `.caretpadrc`. Per-invocation arguments
//! (the seed file, `--offset`, `--print-html`) are never persisted.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub line_numbers: bool,
    pub no_line_numbers: bool,
    pub log_file: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            line_numbers: self.line_numbers || other.line_numbers,
            no_line_numbers: self.no_line_numbers || other.no_line_numbers,
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
        }
    }

    /// Whether the gutter is shown; an explicit `--line-numbers` wins.
    pub const fn show_line_numbers(&self) -> bool {
        self.line_numbers || !self.no_line_numbers
    }
}

/// Global defaults file under the platform config directory.
pub fn global_config_path() -> PathBuf {
    dirs::config_dir().map_or_else(local_override_path, |dir| {
        dir.join("caretpad").join("config")
    })
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".caretpadrc")
}

/// Read flags from `path`. A missing file yields the defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(ConfigFlags::default()),
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read config {}", path.display()));
        }
    };
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .flat_map(str::split_whitespace)
        .map(String::from)
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

/// Read flags from `path`, logging and ignoring a file that cannot be read.
pub fn load_config_flags_or_default(path: &Path) -> ConfigFlags {
    load_config_flags(path).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), error = %format!("{err:#}"), "ignoring unreadable config");
        ConfigFlags::default()
    })
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# caretpad defaults (saved with --save)".to_string());
    if flags.line_numbers {
        lines.push("--line-numbers".to_string());
    }
    if flags.no_line_numbers {
        lines.push("--no-line-numbers".to_string());
    }
    if let Some(path) = &flags.log_file {
        lines.push(format!("--log-file {}", path.display()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Err(err) if err.kind() != ErrorKind::NotFound => {
            Err(err).with_context(|| format!("Failed to remove {}", path.display()))
        }
        _ => Ok(()),
    }
}

/// Extract known flags from config tokens, ignoring everything else.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--line-numbers" {
            flags.line_numbers = true;
        } else if token == "--no-line-numbers" {
            flags.no_line_numbers = true;
        } else if token == "--log-file" {
            if let Some(next) = tokens.get(i + 1) {
                flags.log_file = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--log-file=") {
            flags.log_file = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}
