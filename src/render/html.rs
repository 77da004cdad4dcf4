//! HTML markup for a browser host.
//!
//! The content markup joins the text before and after the caret around a
//! placeholder span the host uses to position its blinking caret glyph.

use std::fmt;

use ropey::RopeSlice;

use super::Renderer;
use crate::editor::Editor;

/// Marker inserted at the caret; the host measures its on-screen position.
pub const CARET_PLACEHOLDER: &str = "<span class='cursor-placeholder'>|</span>";

/// Rendered markup for one editor state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlFrame {
    /// Document text with the caret placeholder.
    pub content: String,
    /// One line-number label per line.
    pub lines: String,
}

impl fmt::Display for HtmlFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<div id=\"lines\">{}</div>", self.lines)?;
        write!(f, "<div id=\"content\">{}</div>", self.content)
    }
}

/// Renders an editor as browser markup.
///
/// Stateless; the caret is marked with [`CARET_PLACEHOLDER`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Create an HTML renderer.
    pub const fn new() -> Self {
        Self
    }

    /// Markup for the document with the caret placeholder.
    pub fn content(editor: &Editor) -> String {
        let (before, after) = editor.split_at_caret();
        let mut out = String::with_capacity(editor.len_chars() + CARET_PLACEHOLDER.len());
        push_escaped(&mut out, before);
        out.push_str(CARET_PLACEHOLDER);
        push_escaped(&mut out, after);
        out
    }

    /// Line-number labels, 1-based.
    pub fn lines(editor: &Editor) -> String {
        (1..=editor.line_count())
            .map(|n| format!("<span>{n}</span><br/>"))
            .collect()
    }
}

impl Renderer for HtmlRenderer {
    type Output = HtmlFrame;

    fn render(&self, editor: &Editor) -> HtmlFrame {
        HtmlFrame {
            content: Self::content(editor),
            lines: Self::lines(editor),
        }
    }
}

fn push_escaped(out: &mut String, text: RopeSlice<'_>) {
    for ch in text.chars() {
        match ch {
            '\n' => out.push_str("<br/>"),
            ' ' => out.push_str("&nbsp;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
