use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;

/// Line and byte offset of a point in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub position: usize,
}

impl Location {
    pub fn new(line: usize, position: usize) -> Self {
        Self { line, position }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

/// A hard parse failure. Never recovered by backtracking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            line: 1,
            message: msg.into(),
        }
    }

    pub fn at(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}

/// A successful match: the produced value and the cursor just past it
#[derive(Debug, Clone)]
pub struct Matched<T> {
    pub value: T,
    pub cursor: Cursor,
}

impl<T> Matched<T> {
    pub fn new(value: T, cursor: Cursor) -> Self {
        Self { value, cursor }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Matched<U> {
        Matched {
            value: f(self.value),
            cursor: self.cursor,
        }
    }
}

/// `Ok(None)` is an ordinary no-match, `Err` aborts the whole parse.
pub type ParseResult<T> = Result<Option<Matched<T>>, ParseError>;

#[derive(Debug)]
struct Source {
    text: String,
    // deepest point any primitive matched up to, for diagnostics only
    furthest: Cell<Location>,
}

/// Immutable position in a source text.
///
/// Every successful match produces a fresh cursor; the original is never
/// touched, so alternatives can all start from the same cursor.
#[derive(Debug, Clone)]
pub struct Cursor {
    source: Rc<Source>,
    location: Location,
}

impl Cursor {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            source: Rc::new(Source {
                text: text.into(),
                furthest: Cell::new(Location::default()),
            }),
            location: Location::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.source.text
    }

    pub fn position(&self) -> usize {
        self.location.position
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Text not consumed yet
    pub fn rest(&self) -> &str {
        &self.source.text[self.location.position..]
    }

    pub fn at_end(&self) -> bool {
        self.location.position == self.source.text.len()
    }

    /// The deepest location reached by any match on this source
    pub fn furthest(&self) -> Location {
        self.source.furthest.get()
    }

    pub(crate) fn restore_furthest(&self, mark: Location) {
        self.source.furthest.set(mark);
    }

    fn advance(&self, consumed: &str) -> Cursor {
        let location = Location {
            line: self.location.line + consumed.matches('\n').count(),
            position: self.location.position + consumed.len(),
        };
        if location.position > self.source.furthest.get().position {
            self.source.furthest.set(location);
        }
        Cursor {
            source: Rc::clone(&self.source),
            location,
        }
    }

    /// Matches the character `c`
    pub fn match_char(&self, c: char) -> Option<Matched<char>> {
        self.match_range(c, c)
    }

    /// Matches one character between `lo` and `hi` inclusive
    pub fn match_range(&self, lo: char, hi: char) -> Option<Matched<char>> {
        let rest = self.rest();
        let c = rest.chars().next()?;
        if !(lo..=hi).contains(&c) {
            return None;
        }
        Some(Matched::new(c, self.advance(&rest[..c.len_utf8()])))
    }

    /// Matches `s` literally, or ignoring ASCII case
    pub fn match_text(&self, s: &str, ignore_case: bool) -> Option<Matched<String>> {
        let candidate = self.rest().get(..s.len())?;
        let matches = if ignore_case {
            candidate.eq_ignore_ascii_case(s)
        } else {
            candidate == s
        };
        if !matches {
            return None;
        }
        Some(Matched::new(candidate.to_string(), self.advance(candidate)))
    }

    /// Matches everything up to and including the next `last`.
    /// No match when `last` does not occur in the remaining text.
    pub fn match_until(&self, last: char) -> Option<Matched<String>> {
        let rest = self.rest();
        let index = rest.find(last)?;
        let consumed = &rest[..index + last.len_utf8()];
        Some(Matched::new(consumed.to_string(), self.advance(consumed)))
    }
}

pub trait Parser<T>: Sized {
    fn parse(&self, cursor: &Cursor) -> ParseResult<T>;
}

impl<T, F: Fn(&Cursor) -> ParseResult<T>> Parser<T> for F {
    fn parse(&self, cursor: &Cursor) -> ParseResult<T> {
        self(cursor)
    }
}
