use ropey::{Rope, RopeSlice};

use super::EditorError;

/// Caret position as zero-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column (character offset within the line).
    pub column: usize,
}

impl Position {
    /// Create a position at a specific line and column.
    pub const fn at(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Direction for caret movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A text document with a single caret.
///
/// The caret is a character offset in `0..=len_chars()`, so it can never
/// land inside a multi-byte sequence. Lines are separated by `'\n'` only.
///
/// The number of lines is cached and adjusted at every site that inserts or
/// removes a newline; it is never recounted after construction.
#[derive(Clone)]
pub struct Editor {
    rope: Rope,
    caret: usize,
    line_count: usize,
}

impl Editor {
    /// Create an editor over `text` with the caret at character `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidInitialPosition`] if `offset` is past
    /// the end of `text`.
    pub fn new(text: &str, offset: usize) -> Result<Self, EditorError> {
        let rope = Rope::from_str(text);
        let len = rope.len_chars();
        if offset > len {
            return Err(EditorError::InvalidInitialPosition { offset, len });
        }
        Ok(Self {
            rope,
            caret: offset,
            line_count: 1 + text.bytes().filter(|&b| b == b'\n').count(),
        })
    }

    /// Create an empty editor.
    pub fn empty() -> Self {
        Self {
            rope: Rope::new(),
            caret: 0,
            line_count: 1,
        }
    }

    /// Caret offset in characters.
    pub const fn caret(&self) -> usize {
        self.caret
    }

    /// Document length in characters.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Whether the document has no characters.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// The full text content.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Total number of lines (`1 + number of '\n'`).
    pub const fn line_count(&self) -> usize {
        self.line_count
    }

    /// Text from the start of the document up to the caret.
    pub fn text_before_caret(&self) -> String {
        self.rope.slice(..self.caret).to_string()
    }

    /// Text from the caret to the end of the document.
    pub fn text_after_caret(&self) -> String {
        self.rope.slice(self.caret..).to_string()
    }

    /// The document split at the caret, borrowed for renderers.
    ///
    /// Both halves are plain text; escaping is the renderer's job.
    pub fn split_at_caret(&self) -> (RopeSlice<'_>, RopeSlice<'_>) {
        (self.rope.slice(..self.caret), self.rope.slice(self.caret..))
    }

    /// Zero-based line of the caret: the number of newlines before it.
    pub fn current_line(&self) -> usize {
        self.rope.char_to_line(self.caret)
    }

    /// Zero-based column of the caret within its line.
    pub fn current_column(&self) -> usize {
        self.position().column
    }

    /// Caret as a line/column pair.
    pub fn position(&self) -> Position {
        let line = self.current_line();
        Position {
            line,
            column: self.caret - self.rope.line_to_char(line),
        }
    }

    /// Number of characters in `line`, excluding its newline.
    ///
    /// Returns `None` if `line` does not exist.
    pub fn line_len(&self, line: usize) -> Option<usize> {
        if line >= self.line_count {
            return None;
        }
        let start = self.rope.line_to_char(line);
        let end = if line + 1 < self.line_count {
            self.rope.line_to_char(line + 1) - 1
        } else {
            self.rope.len_chars()
        };
        Some(end - start)
    }

    /// Content of `line` without its trailing newline.
    pub fn line_at(&self, line: usize) -> Option<String> {
        let len = self.line_len(line)?;
        let start = self.rope.line_to_char(line);
        Some(self.rope.slice(start..start + len).to_string())
    }

    /// Insert a character at the caret and advance past it.
    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' {
            self.line_count += 1;
        }
        self.rope.insert_char(self.caret, ch);
        self.caret += 1;
    }

    /// Delete the character before the caret (Backspace).
    ///
    /// Returns `true` if a character was deleted.
    pub fn delete_preceding(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        if self.rope.char(self.caret - 1) == '\n' {
            self.line_count -= 1;
        }
        self.rope.remove(self.caret - 1..self.caret);
        self.caret -= 1;
        true
    }

    /// Delete the character after the caret (Delete). The caret stays put.
    ///
    /// Returns `true` if a character was deleted.
    pub fn delete_following(&mut self) -> bool {
        if self.caret == self.rope.len_chars() {
            return false;
        }
        if self.rope.char(self.caret) == '\n' {
            self.line_count -= 1;
        }
        self.rope.remove(self.caret..=self.caret);
        true
    }

    /// Move the caret in the given direction.
    ///
    /// Returns `true` if the move happened.
    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_up(),
            Direction::Down => self.move_down(),
        }
    }

    /// Move one character back. Returns `false` at the start of the document.
    pub const fn move_left(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.caret -= 1;
        true
    }

    /// Move one character forward. Returns `false` at the end of the document.
    pub fn move_right(&mut self) -> bool {
        if self.caret == self.rope.len_chars() {
            return false;
        }
        self.caret += 1;
        true
    }

    /// Move to the same column on the previous line, clamped to its length.
    pub fn move_up(&mut self) -> bool {
        let Position { line, column } = self.position();
        if line == 0 {
            return false;
        }
        self.seek(line - 1, column);
        true
    }

    /// Move to the same column on the next line, clamped to its length.
    pub fn move_down(&mut self) -> bool {
        let Position { line, column } = self.position();
        if line + 1 >= self.line_count {
            return false;
        }
        self.seek(line + 1, column);
        true
    }

    /// Move the caret to column 0 of its line (Home).
    pub fn move_to_line_start(&mut self) -> bool {
        self.seek(self.current_line(), 0);
        true
    }

    /// Move the caret past the last character of its line (End).
    pub fn move_to_line_end(&mut self) -> bool {
        self.seek(self.current_line(), usize::MAX);
        true
    }

    /// Move the caret to `line`/`column`.
    ///
    /// Out-of-range targets are clamped rather than rejected: negative values
    /// become 0, and anything past the end lands on the last line or the end
    /// of the target line.
    pub fn go_to(&mut self, line: isize, column: isize) {
        let line = usize::try_from(line).unwrap_or(0);
        let column = usize::try_from(column).unwrap_or(0);
        self.seek(line, column);
    }

    // --- Private helpers ---

    fn seek(&mut self, line: usize, column: usize) {
        let line = line.min(self.line_count - 1);
        let column = column.min(self.line_len(line).unwrap_or(0));
        self.caret = self.rope.line_to_char(line) + column;
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("rope", &format_args!("Rope({} chars)", self.rope.len_chars()))
            .field("caret", &self.caret)
            .field("line_count", &self.line_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(text: &str, offset: usize) -> Editor {
        Editor::new(text, offset).unwrap()
    }

    // --- Construction ---

    #[test]
    fn test_empty_editor_has_one_line() {
        let ed = Editor::empty();
        assert_eq!(ed.line_count(), 1);
        assert_eq!(ed.caret(), 0);
        assert_eq!(ed.line_len(0), Some(0));
    }

    #[test]
    fn test_new_rejects_offset_past_end() {
        let err = Editor::new("abc", 4).unwrap_err();
        assert_eq!(err, EditorError::InvalidInitialPosition { offset: 4, len: 3 });
    }

    #[test]
    fn test_new_accepts_offset_at_end() {
        let ed = editor("abc", 3);
        assert_eq!(ed.caret(), 3);
    }

    #[test]
    fn test_new_counts_length_in_chars() {
        // 4 chars, 5 bytes
        assert!(Editor::new("café", 4).is_ok());
        assert!(Editor::new("café", 5).is_err());
    }

    #[test]
    fn test_trailing_newline_adds_empty_line() {
        let ed = editor("hello\n", 0);
        assert_eq!(ed.line_count(), 2);
        assert_eq!(ed.line_at(1), Some(String::new()));
    }

    #[test]
    fn test_carriage_return_is_not_a_line_break() {
        let ed = editor("a\rb\r\nc", 0);
        assert_eq!(ed.line_count(), 2);
        assert_eq!(ed.line_len(0), Some(4));
    }

    // --- Derived queries ---

    #[test]
    fn test_text_split_at_caret() {
        let ed = editor("hello world", 5);
        assert_eq!(ed.text_before_caret(), "hello");
        assert_eq!(ed.text_after_caret(), " world");
        let (before, after) = ed.split_at_caret();
        assert_eq!(before.to_string(), "hello");
        assert_eq!(after.to_string(), " world");
    }

    #[test]
    fn test_line_and_column_without_newline() {
        let ed = editor("hello", 3);
        assert_eq!(ed.current_line(), 0);
        assert_eq!(ed.current_column(), 3);
    }

    #[test]
    fn test_caret_right_after_newline_is_column_zero() {
        let ed = editor("ab\ncd", 3);
        assert_eq!(ed.position(), Position::at(1, 0));
    }

    #[test]
    fn test_caret_before_newline_is_end_of_line() {
        let ed = editor("ab\ncd", 2);
        assert_eq!(ed.position(), Position::at(0, 2));
    }

    #[test]
    fn test_line_len_out_of_range_is_none() {
        let ed = editor("a\nbc", 0);
        assert_eq!(ed.line_len(0), Some(1));
        assert_eq!(ed.line_len(1), Some(2));
        assert_eq!(ed.line_len(2), None);
    }

    // --- Insertion ---

    #[test]
    fn test_scenario_insert_into_empty() {
        let mut ed = editor("", 0);
        assert_eq!(ed.line_count(), 1);
        ed.insert_char('a');
        assert_eq!(ed.text(), "a");
        assert_eq!(ed.caret(), 1);
        ed.insert_char('\n');
        assert_eq!(ed.text(), "a\n");
        assert_eq!(ed.caret(), 2);
        assert_eq!(ed.line_count(), 2);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut ed = editor("hllo", 1);
        ed.insert_char('e');
        assert_eq!(ed.text(), "hello");
        assert_eq!(ed.caret(), 2);
    }

    #[test]
    fn test_insert_multibyte_advances_one_position() {
        let mut ed = editor("ab", 1);
        ed.insert_char('漢');
        assert_eq!(ed.text(), "a漢b");
        assert_eq!(ed.caret(), 2);
        assert_eq!(ed.current_column(), 2);
    }

    // --- Deletion ---

    #[test]
    fn test_scenario_backspace_to_empty() {
        let mut ed = editor("hello", 5);
        assert!(ed.delete_preceding());
        assert_eq!(ed.text(), "hell");
        assert_eq!(ed.caret(), 4);
        for _ in 0..4 {
            assert!(ed.delete_preceding());
        }
        assert_eq!(ed.text(), "");
        assert_eq!(ed.caret(), 0);
        assert!(!ed.delete_preceding());
        assert_eq!(ed.text(), "");
        assert_eq!(ed.caret(), 0);
        assert_eq!(ed.line_count(), 1);
    }

    #[test]
    fn test_delete_preceding_newline_joins_lines() {
        let mut ed = editor("hello\nworld", 6);
        assert!(ed.delete_preceding());
        assert_eq!(ed.text(), "helloworld");
        assert_eq!(ed.line_count(), 1);
        assert_eq!(ed.position(), Position::at(0, 5));
    }

    #[test]
    fn test_delete_following_keeps_caret() {
        let mut ed = editor("hello", 0);
        assert!(ed.delete_following());
        assert_eq!(ed.text(), "ello");
        assert_eq!(ed.caret(), 0);
    }

    #[test]
    fn test_delete_following_at_end_is_noop() {
        let mut ed = editor("hello", 5);
        assert!(!ed.delete_following());
        assert_eq!(ed.text(), "hello");
        assert_eq!(ed.caret(), 5);
    }

    #[test]
    fn test_delete_following_newline_joins_lines() {
        let mut ed = editor("hello\nworld", 5);
        assert!(ed.delete_following());
        assert_eq!(ed.text(), "helloworld");
        assert_eq!(ed.line_count(), 1);
    }

    #[test]
    fn test_delete_following_before_char_preceding_newline() {
        // Removing 'b' must not touch the line count even though '\n' follows it.
        let mut ed = editor("ab\ncd", 1);
        assert!(ed.delete_following());
        assert_eq!(ed.text(), "a\ncd");
        assert_eq!(ed.line_count(), 2);
    }

    #[test]
    fn test_delete_in_empty_buffer_is_noop() {
        let mut ed = Editor::empty();
        assert!(!ed.delete_preceding());
        assert!(!ed.delete_following());
        assert_eq!(ed.line_count(), 1);
    }

    #[test]
    fn test_delete_multibyte() {
        let mut ed = editor("café", 4);
        assert!(ed.delete_preceding());
        assert_eq!(ed.text(), "caf");
        assert_eq!(ed.caret(), 3);
    }

    // --- Left/right ---

    #[test]
    fn test_move_left_at_start_is_noop() {
        let mut ed = editor("hello", 0);
        assert!(!ed.move_left());
        assert_eq!(ed.caret(), 0);
    }

    #[test]
    fn test_move_right_at_end_is_noop() {
        let mut ed = editor("hello", 5);
        assert!(!ed.move_right());
        assert_eq!(ed.caret(), 5);
    }

    #[test]
    fn test_move_left_and_right_cross_newlines() {
        let mut ed = editor("ab\ncd", 3);
        assert!(ed.move_left());
        assert_eq!(ed.position(), Position::at(0, 2));
        assert!(ed.move_right());
        assert_eq!(ed.position(), Position::at(1, 0));
    }

    // --- Up/down ---

    #[test]
    fn test_scenario_move_up_clamps_column() {
        let mut ed = editor("ab\ncd", 5);
        assert_eq!(ed.current_line(), 1);
        assert_eq!(ed.current_column(), 2);
        assert!(ed.move_up());
        assert_eq!(ed.current_line(), 0);
        assert_eq!(ed.caret(), 2);
    }

    #[test]
    fn test_move_up_to_shorter_line() {
        let mut ed = editor("hi\nhello", 7);
        assert!(ed.move_up());
        assert_eq!(ed.position(), Position::at(0, 2));
    }

    #[test]
    fn test_move_down_preserves_column() {
        let mut ed = editor("hello\nworld", 3);
        assert!(ed.move_cursor(Direction::Down));
        assert_eq!(ed.position(), Position::at(1, 3));
    }

    #[test]
    fn test_move_up_on_first_line_is_noop() {
        let mut ed = editor("hello\nworld", 2);
        assert!(!ed.move_up());
        assert_eq!(ed.caret(), 2);
    }

    #[test]
    fn test_move_down_on_last_line_is_noop() {
        let mut ed = editor("hello\nworld", 8);
        assert!(!ed.move_down());
        assert_eq!(ed.caret(), 8);
    }

    // --- Home / End ---

    #[test]
    fn test_scenario_home_and_end() {
        let mut ed = editor("x\ny\nz", 0);
        assert!(ed.move_to_line_end());
        assert_eq!(ed.caret(), 1);
        assert!(ed.move_to_line_start());
        assert_eq!(ed.caret(), 0);
    }

    #[test]
    fn test_home_and_end_on_middle_line() {
        let mut ed = editor("one\ntwo\nthree", 5);
        ed.move_to_line_end();
        assert_eq!(ed.caret(), 7);
        ed.move_to_line_start();
        assert_eq!(ed.caret(), 4);
    }

    // --- go_to ---

    #[test]
    fn test_go_to_negative_clamps_to_origin() {
        let mut ed = editor("ab\ncd\nef", 7);
        ed.go_to(-5, -5);
        assert_eq!(ed.caret(), 0);
    }

    #[test]
    fn test_go_to_past_end_clamps_to_last_line_end() {
        let mut a = editor("ab\ncd\nefg", 0);
        let mut b = a.clone();
        a.go_to(1000, 1000);
        let last_len = isize::try_from(b.line_len(2).unwrap()).unwrap();
        b.go_to(2, last_len);
        assert_eq!(a.caret(), b.caret());
        assert_eq!(a.caret(), 9);
    }

    #[test]
    fn test_go_to_clamps_column_to_target_line() {
        let mut ed = editor("a\nlonger\nb", 0);
        ed.go_to(0, 4);
        assert_eq!(ed.position(), Position::at(0, 1));
        ed.go_to(1, 4);
        assert_eq!(ed.position(), Position::at(1, 4));
    }

    #[test]
    fn test_go_to_in_empty_editor() {
        let mut ed = Editor::empty();
        ed.go_to(3, 3);
        assert_eq!(ed.caret(), 0);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Insert(char),
            DeletePreceding,
            DeleteFollowing,
            Move(Direction),
            LineStart,
            LineEnd,
            GoTo(isize, isize),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                3 => prop::sample::select(vec!['a', 'b', ' ', '\n', '\n', 'é', '漢'])
                    .prop_map(Op::Insert),
                1 => Just(Op::DeletePreceding),
                1 => Just(Op::DeleteFollowing),
                2 => prop::sample::select(vec![
                    Direction::Up,
                    Direction::Down,
                    Direction::Left,
                    Direction::Right,
                ])
                .prop_map(Op::Move),
                1 => Just(Op::LineStart),
                1 => Just(Op::LineEnd),
                1 => (-3isize..12, -3isize..12).prop_map(|(l, c)| Op::GoTo(l, c)),
            ]
        }

        fn apply(ed: &mut Editor, op: &Op) {
            match *op {
                Op::Insert(ch) => ed.insert_char(ch),
                Op::DeletePreceding => {
                    ed.delete_preceding();
                }
                Op::DeleteFollowing => {
                    ed.delete_following();
                }
                Op::Move(direction) => {
                    ed.move_cursor(direction);
                }
                Op::LineStart => {
                    ed.move_to_line_start();
                }
                Op::LineEnd => {
                    ed.move_to_line_end();
                }
                Op::GoTo(line, column) => ed.go_to(line, column),
            }
        }

        fn recount_lines(text: &str) -> usize {
            1 + text.chars().filter(|&c| c == '\n').count()
        }

        proptest! {
            #[test]
            fn offset_round_trips_through_go_to(
                text in "[ab \né]{0,40}",
                idx in any::<prop::sample::Index>(),
            ) {
                let len = text.chars().count();
                let offset = idx.index(len + 1);
                let mut ed = Editor::new(&text, offset).unwrap();

                let before: String = text.chars().take(offset).collect();
                let line = before.matches('\n').count();
                let column = before.rfind('\n').map_or(offset, |i| {
                    before[i + 1..].chars().count()
                });
                prop_assert_eq!(ed.position(), Position::at(line, column));
                prop_assert_eq!(ed.current_column(), column);

                ed.go_to(line as isize, column as isize);
                prop_assert_eq!(ed.caret(), offset);
            }

            #[test]
            fn line_counter_never_drifts(
                text in "[ab\n]{0,20}",
                ops in prop::collection::vec(op(), 0..300),
            ) {
                let mut ed = Editor::new(&text, 0).unwrap();
                for (i, op) in ops.iter().enumerate() {
                    apply(&mut ed, op);
                    prop_assert!(ed.caret() <= ed.len_chars());
                    if i % 16 == 0 {
                        prop_assert_eq!(ed.line_count(), recount_lines(&ed.text()));
                    }
                }
                prop_assert_eq!(ed.line_count(), recount_lines(&ed.text()));
            }

            #[test]
            fn boundary_moves_leave_state_unchanged(text in "[ab\n]{0,20}") {
                let len = text.chars().count();

                let mut ed = Editor::new(&text, 0).unwrap();
                prop_assert!(!ed.move_left());
                prop_assert!(!ed.delete_preceding());
                prop_assert_eq!(ed.caret(), 0);
                prop_assert_eq!(ed.text(), text.clone());

                let mut ed = Editor::new(&text, len).unwrap();
                prop_assert!(!ed.move_right());
                prop_assert!(!ed.delete_following());
                prop_assert_eq!(ed.caret(), len);
                prop_assert_eq!(ed.text(), text);
            }
        }
    }
}
