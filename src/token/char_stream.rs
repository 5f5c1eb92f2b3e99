use std::str::Chars;


/// Character source with single-character pushback and position tracking.
///
/// Lines and columns are 1-based and always describe the next character to
/// be read.
pub struct CharStream<I: Iterator<Item = char>> {
    chars: I,
    pushed: Option<char>,

    line: usize,
    col: usize,
    // Position of the most recently read character, restored on putback.
    prev: (usize, usize),
}

impl<I: Iterator<Item = char>> CharStream<I> {
    pub fn new(chars: I) -> Self {
        Self {
            chars,
            pushed: None,
            line: 1,
            col: 1,
            prev: (1, 1),
        }
    }

    pub fn next_char(&mut self) -> Option<char> {
        let c = match self.pushed.take() {
            Some(c) => c,
            None => self.chars.next()?,
        };

        self.prev = (self.line, self.col);
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    /// Returns c to the stream so the next call to next_char yields it again.
    ///
    /// Only the most recently read character may be put back, and only once.
    pub fn putback(&mut self, c: char) {
        debug_assert!(self.pushed.is_none(), "double putback of {:?}", c);
        self.pushed = Some(c);
        self.line = self.prev.0;
        self.col = self.prev.1;
    }

    /// (line, col) of the next character.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.col)
    }
}


impl<'a> From<&'a str> for CharStream<Chars<'a>> {
    fn from(s: &'a str) -> Self {
        CharStream::new(s.chars())
    }
}
