/// A repositionable cursor over an immutable character buffer.
///
/// The scanner hands out one character at a time and keeps track of the line
/// and column of the character it returned last. Lines start at 1. Columns
/// count the characters of the current line starting at 1; a line break
/// itself sits at column 0 of the line it opens.
///
/// `\r\n` and `\n\r` pairs count as a single line break.
///
/// # Example
/// ```
/// use reckon::tokenizer::scanner::Scanner;
///
/// let mut scanner = Scanner::new("ab\ncd");
/// assert_eq!(scanner.read(), Some('a'));
/// assert_eq!(scanner.read(), Some('b'));
/// assert_eq!((scanner.line(), scanner.column()), (1, 2));
///
/// assert_eq!(scanner.read(), Some('\n'));
/// assert_eq!((scanner.line(), scanner.column()), (2, 0));
///
/// scanner.unread_many(2);
/// assert_eq!(scanner.read(), Some('b'));
/// assert_eq!((scanner.line(), scanner.column()), (1, 2));
/// ```
#[derive(Debug, Clone)]
pub struct Scanner {
    content:  Vec<char>,
    position: usize,
    line:     usize,
    column:   usize,
}

impl Scanner {
    /// Creates a scanner positioned before the first character of `content`.
    #[must_use]
    pub fn new(content: &str) -> Self {
        Self { content:  content.chars().collect(),
               position: 0,
               line:     1,
               column:   0, }
    }

    /// Reads the next character and advances the cursor.
    ///
    /// Returns `None` at the end of the buffer. Reading past the end does not
    /// move the cursor, so a `None` never needs to be unread.
    pub fn read(&mut self) -> Option<char> {
        let chr = *self.content.get(self.position)?;

        if self.is_line(self.position) {
            self.line += 1;
            self.column = 0;
        }
        if is_column(chr) {
            self.column += 1;
        }
        self.position += 1;

        Some(chr)
    }

    /// Returns the next character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.content.get(self.position).copied()
    }

    /// Line of the character returned by the last [`Scanner::read`].
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Column of the character returned by the last [`Scanner::read`].
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// The line [`Scanner::line`] will report after the next read.
    #[must_use]
    pub fn peek_line(&self) -> usize {
        if self.position < self.content.len() && self.is_line(self.position) {
            self.line + 1
        } else {
            self.line
        }
    }

    /// The column [`Scanner::column`] will report after the next read.
    #[must_use]
    pub fn peek_column(&self) -> usize {
        let Some(&chr) = self.content.get(self.position) else {
            return self.column;
        };

        if self.is_line(self.position) {
            0
        } else if is_column(chr) {
            self.column + 1
        } else {
            self.column
        }
    }

    /// Number of characters consumed so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor one character back.
    ///
    /// Unreading at the start of the buffer does nothing. Line and column are
    /// restored to the values they had when the cursor last sat at the new
    /// position.
    pub fn unread(&mut self) {
        if self.position == 0 {
            return;
        }
        self.position -= 1;

        // Stepping back over an ordinary character never leaves the line.
        if self.column > 0 && is_column(self.content[self.position]) {
            self.column -= 1;
            return;
        }

        self.line = 1;
        self.column = 0;
        for index in 0..self.position {
            if self.is_line(index) {
                self.line += 1;
                self.column = 0;
            }
            if is_column(self.content[index]) {
                self.column += 1;
            }
        }
    }

    /// Moves the cursor `count` characters back.
    pub fn unread_many(&mut self, count: usize) {
        for _ in 0..count {
            self.unread();
        }
    }

    /// Rewinds the cursor to the start of the buffer.
    pub const fn reset(&mut self) {
        self.position = 0;
        self.line = 1;
        self.column = 0;
    }

    /// Whether the character at `index` opens a new line.
    ///
    /// A `\r` right next to a `\n` belongs to that `\n`'s line break.
    fn is_line(&self, index: usize) -> bool {
        match self.content[index] {
            '\n' => true,
            '\r' => {
                let before = index.checked_sub(1).and_then(|i| self.content.get(i));
                let after = self.content.get(index + 1);
                before != Some(&'\n') && after != Some(&'\n')
            },
            _ => false,
        }
    }
}

const fn is_column(chr: char) -> bool {
    chr != '\n' && chr != '\r'
}
