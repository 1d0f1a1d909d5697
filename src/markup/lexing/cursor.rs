//! Line-based character cursor
//!
//! The source is split on `\n` up front and walked one line at a time. The
//! line breaks themselves are not stored; the cursor synthesizes a `'\n'`
//! when it steps off the end of every line except the last one. That keeps
//! two properties the lexer relies on:
//!
//! - a trailing newline in the source yields exactly one line break and no
//!   empty trailing line
//! - text without a trailing newline never grows a phantom line break
//!
//! Positions are a 1-based line number and a 0-based char index into that
//! line. After a line's break has been handed out the index sits one past the
//! line length, which is how the cursor knows to move on to the next line.

/// A cursor position: 1-based line, 0-based char index within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub index: usize,
}

impl Position {
    pub fn new(line: usize, index: usize) -> Self {
        Position { line, index }
    }
}

/// The source text split into lines, immutable for the duration of a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBuffer {
    lines: Vec<Vec<char>>,
}

impl SourceBuffer {
    pub fn new(source: &str) -> Self {
        SourceBuffer {
            lines: source.split('\n').map(|line| line.chars().collect()).collect(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Characters of the given 1-based line
    pub fn line(&self, number: usize) -> Option<&[char]> {
        number
            .checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .map(Vec::as_slice)
    }

    /// Text of the given 1-based line, without a trailing `\r`.
    ///
    /// Lines past the end of the buffer yield an empty string.
    pub fn line_text(&self, number: usize) -> String {
        let text: String = self.line(number).unwrap_or_default().iter().collect();
        match text.strip_suffix('\r') {
            Some(stripped) => stripped.to_string(),
            None => text,
        }
    }
}

/// Walks a [`SourceBuffer`] one character at a time.
///
/// `None` marks the end of input; once reached, every further call keeps
/// returning `None`.
#[derive(Debug, Clone)]
pub struct Cursor {
    buffer: SourceBuffer,
    position: Position,
}

impl Cursor {
    pub fn new(source: &str) -> Self {
        Cursor {
            buffer: SourceBuffer::new(source),
            position: Position::new(1, 0),
        }
    }

    pub fn buffer(&self) -> &SourceBuffer {
        &self.buffer
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Current 1-based line number
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// Index within the current line. Right after an `advance` this is the
    /// column reported for whatever was just consumed.
    pub fn index(&self) -> usize {
        self.position.index
    }

    /// Text of the line the cursor is on
    pub fn current_line_text(&self) -> String {
        self.buffer.line_text(self.position.line)
    }

    /// The character `advance` would return, without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.step(self.position).0
    }

    /// Consume and return the character under the cursor.
    pub fn advance(&mut self) -> Option<char> {
        let (c, next) = self.step(self.position);
        self.position = next;
        c
    }

    fn step(&self, at: Position) -> (Option<char>, Position) {
        let count = self.buffer.line_count();
        let Some(line) = self.buffer.line(at.line) else {
            return (None, at);
        };
        let is_last = at.line == count;

        if at.index < line.len() {
            return (Some(line[at.index]), Position::new(at.line, at.index + 1));
        }

        if at.index == line.len() {
            if is_last {
                return (None, at);
            }
            return (Some('\n'), Position::new(at.line, at.index + 1));
        }

        // The break for this line has already been handed out.
        // An empty final line ends the input on the spot.
        self.step(Position::new(at.line + 1, 0))
    }
}
