//! Line indexing: the addressing unit for every section and chunk boundary.

/// One line of the document and its 0-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub index: usize,
    pub text: &'a str,
}

/// A document split on `'\n'`.
///
/// Never empty: an empty document is a single empty line, and a trailing
/// newline yields a final empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLines {
    lines: Vec<String>,
    char_count: usize,
}

/// A line-numbered slice of the document submitted to the oracle in one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    /// `[index] content` lines, each terminated by `'\n'`.
    pub text: String,
    pub start_line: usize,
    /// Last line included (inclusive).
    pub end_line: usize,
}

impl DocumentLines {
    pub fn from_text(document: &str) -> Self {
        Self {
            lines: document.split('\n').map(str::to_string).collect(),
            char_count: document.chars().count(),
        }
    }

    /// Number of lines; at least 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Index of the final line.
    pub fn last_index(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    /// Character count of the source text.
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn get(&self, index: usize) -> Option<Line<'_>> {
        self.lines.get(index).map(|text| Line { index, text })
    }

    pub fn iter(&self) -> impl Iterator<Item = Line<'_>> {
        self.lines
            .iter()
            .enumerate()
            .map(|(index, text)| Line { index, text })
    }

    /// Lines `start..=end`, clamped to the document.
    fn range(&self, start: usize, end: usize) -> &[String] {
        let end = end.min(self.last_index());
        if start > end {
            return &[];
        }
        &self.lines[start..=end]
    }

    /// Build the window starting at `start_line`.
    ///
    /// Lines are added until the running character count of their content
    /// (line numbers excluded) exceeds `max_characters`, or the document ends.
    /// The line that crosses the budget is included. A `start_line` past the
    /// end is clamped to the last line.
    pub fn window(&self, start_line: usize, max_characters: usize) -> Window {
        let start_line = start_line.min(self.last_index());
        let mut text = String::new();
        let mut character_count = 0usize;
        let mut end_line = self.last_index();

        for line in self.iter().skip(start_line) {
            push_numbered(&mut text, line);
            character_count += line.text.chars().count();
            if character_count > max_characters {
                end_line = line.index;
                break;
            }
        }

        Window {
            text,
            start_line,
            end_line,
        }
    }

    /// `[index] content\n` for every line in `start..=end`.
    pub fn numbered(&self, start: usize, end: usize) -> String {
        let mut text = String::new();
        for (offset, line) in self.range(start, end).iter().enumerate() {
            push_numbered(
                &mut text,
                Line {
                    index: start + offset,
                    text: line,
                },
            );
        }
        text
    }

    /// Lines `start..=end` joined with `'\n'`.
    pub fn joined(&self, start: usize, end: usize) -> String {
        self.range(start, end).join("\n")
    }

    /// Lines `start..=end`, each followed by `'\n'`.
    pub fn terminated(&self, start: usize, end: usize) -> String {
        let mut text = String::new();
        for line in self.range(start, end) {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

fn push_numbered(buf: &mut String, line: Line<'_>) {
    buf.push('[');
    buf.push_str(&line.index.to_string());
    buf.push_str("] ");
    buf.push_str(line.text);
    buf.push('\n');
}
