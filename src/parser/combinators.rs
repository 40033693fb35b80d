use std::cell::RefCell;
use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::rc::Rc;

use log::debug;

use super::state::{Cursor, Location, Matched, ParseError, ParseResult, Parser};

type ParserFn<T> = Rc<dyn Fn(&Cursor) -> ParseResult<T>>;

// === Boxed Parser for type erasure ===

pub struct BoxedParser<T> {
    parser: ParserFn<T>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<T: 'static> BoxedParser<T> {
    pub fn new<P: Parser<T> + 'static>(parser: P) -> Self {
        BoxedParser {
            parser: Rc::new(move |cursor: &Cursor| parser.parse(cursor)),
        }
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn parse(&self, cursor: &Cursor) -> ParseResult<T> {
        (self.parser)(cursor)
    }
}

// === Combinators as methods ===

impl<T: 'static> BoxedParser<T> {
    /// Sequence: run self, then the parser built from its value
    pub fn bind<U: 'static, F: Fn(T) -> BoxedParser<U> + 'static>(self, next: F) -> BoxedParser<U> {
        BoxedParser::new(move |cursor: &Cursor| match self.parse(cursor)? {
            Some(Matched { value, cursor }) => next(value).parse(&cursor),
            None => Ok(None),
        })
    }

    /// Sequence: parse self then other, return (T, U)
    pub fn seq<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<(T, U)> {
        BoxedParser::new(move |cursor: &Cursor| {
            let Some(first) = self.parse(cursor)? else {
                return Ok(None);
            };
            let Some(second) = other.parse(&first.cursor)? else {
                return Ok(None);
            };
            Ok(Some(second.map(|b| (first.value, b))))
        })
    }

    /// Keep left: parse self then other, both required, discard other's result
    pub fn skip_right<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<T> {
        self.seq(other).map(|(a, _)| a)
    }

    /// Keep right: parse self then other, discard self's result
    pub fn skip_left<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<U> {
        self.seq(other).map(|(_, b)| b)
    }

    /// Parse self, then consume `trailing` if it happens to match
    pub fn skip<U: 'static>(self, trailing: BoxedParser<U>) -> BoxedParser<T> {
        BoxedParser::new(move |cursor: &Cursor| {
            let Some(result) = self.parse(cursor)? else {
                return Ok(None);
            };
            match trailing.parse(&result.cursor)? {
                Some(consumed) => Ok(Some(Matched::new(result.value, consumed.cursor))),
                None => Ok(Some(result)),
            }
        })
    }

    /// Map: transform result
    pub fn map<U: 'static, F: Fn(T) -> U + 'static>(self, f: F) -> BoxedParser<U> {
        BoxedParser::new(move |cursor: &Cursor| Ok(self.parse(cursor)?.map(|m| m.map(&f))))
    }

    /// Map with a conversion that may abort the parse
    pub fn try_map<U: 'static, F: Fn(T) -> Result<U, ParseError> + 'static>(
        self,
        f: F,
    ) -> BoxedParser<U> {
        BoxedParser::new(move |cursor: &Cursor| match self.parse(cursor)? {
            Some(Matched { value, cursor }) => Ok(Some(Matched::new(f(value)?, cursor))),
            None => Ok(None),
        })
    }

    /// Pair the value with the location where self started matching
    pub fn located(self) -> BoxedParser<(T, Location)> {
        BoxedParser::new(move |cursor: &Cursor| {
            let location = cursor.location();
            Ok(self.parse(cursor)?.map(|m| m.map(|value| (value, location))))
        })
    }

    /// Choice: try self, if it does not match try other from the same cursor
    pub fn or(self, other: BoxedParser<T>) -> BoxedParser<T> {
        BoxedParser::new(move |cursor: &Cursor| match self.parse(cursor)? {
            Some(matched) => Ok(Some(matched)),
            None => other.parse(cursor),
        })
    }

    /// Turn a no-match into a hard error at the current line
    pub fn or_error(self, message: &'static str) -> BoxedParser<T> {
        BoxedParser::new(move |cursor: &Cursor| match self.parse(cursor)? {
            Some(matched) => Ok(Some(matched)),
            None => Err(ParseError::new(message).at(cursor.line())),
        })
    }

    /// Run self over the whole text; anything left over is an error
    pub fn parse_to_completion(&self, text: &str) -> Result<T, ParseError> {
        let cursor = Cursor::new(text);
        let result = self.parse(&cursor).inspect_err(|err| debug!("parse aborted: {err}"))?;
        match result {
            Some(Matched { value, cursor: end }) if end.at_end() => Ok(value),
            _ => {
                let line = cursor.furthest().line;
                debug!("parse stopped short of end of source, deepest match on line {line}");
                Err(ParseError::new("expected end of source").at(line))
            }
        }
    }
}

// === Operator Overloading ===

/// `+` for sequence: A + B -> (A, B)
impl<T: 'static, U: 'static> Add<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<(T, U)>;

    fn add(self, rhs: BoxedParser<U>) -> Self::Output {
        self.seq(rhs)
    }
}

/// `-` for keep left: A - B -> A (parse B, discard result)
impl<T: 'static, U: 'static> Sub<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn sub(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip_right(rhs)
    }
}

/// `*` for keep right: A * B -> B (parse A, discard result)
impl<T: 'static, U: 'static> Mul<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn mul(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip_left(rhs)
    }
}

/// `|` for choice: A | B -> A or B
impl<T: 'static> BitOr<BoxedParser<T>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn bitor(self, rhs: BoxedParser<T>) -> Self::Output {
        self.or(rhs)
    }
}

/// `>>` for map: A >> fn -> B
impl<T: 'static, U: 'static, F: Fn(T) -> U + 'static> Shr<F> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}

// === Forward references ===

/// Placeholder for a rule that is referenced before its body exists.
///
/// `parser()` hands out parsers that delegate to whatever `define` installs.
/// The slot is shared, so a defined rule that refers to itself forms an `Rc`
/// cycle; call `clear` once the grammar is no longer needed.
pub struct Forward<T> {
    slot: Rc<RefCell<Option<BoxedParser<T>>>>,
}

impl<T: 'static> Forward<T> {
    pub fn parser(&self) -> BoxedParser<T> {
        let slot = Rc::clone(&self.slot);
        BoxedParser::new(move |cursor: &Cursor| {
            let parser = slot.borrow().clone();
            match parser {
                Some(parser) => parser.parse(cursor),
                None => panic!("forward parser used before it was defined"),
            }
        })
    }

    pub fn define(&self, parser: BoxedParser<T>) {
        *self.slot.borrow_mut() = Some(parser);
    }

    pub fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

pub fn forward<T: 'static>() -> Forward<T> {
    Forward {
        slot: Rc::new(RefCell::new(None)),
    }
}

// === Primitive Parsers ===

/// Succeeds with `value` without consuming anything
pub fn constant<T: Clone + 'static>(value: T) -> BoxedParser<T> {
    BoxedParser::new(move |cursor: &Cursor| Ok(Some(Matched::new(value.clone(), cursor.clone()))))
}

pub fn symbol(c: char) -> BoxedParser<char> {
    BoxedParser::new(move |cursor: &Cursor| Ok(cursor.match_char(c)))
}

pub fn range(lo: char, hi: char) -> BoxedParser<char> {
    BoxedParser::new(move |cursor: &Cursor| Ok(cursor.match_range(lo, hi)))
}

pub fn text(s: impl Into<String>, ignore_case: bool) -> BoxedParser<String> {
    let s = s.into();
    BoxedParser::new(move |cursor: &Cursor| Ok(cursor.match_text(&s, ignore_case)))
}

/// Everything up to and including `last`
pub fn until(last: char) -> BoxedParser<String> {
    BoxedParser::new(move |cursor: &Cursor| Ok(cursor.match_until(last)))
}

/// Parse zero or more occurrences
pub fn zero_or_more<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    let repeated = one_or_more(parser);
    BoxedParser::new(move |cursor: &Cursor| match repeated.parse(cursor)? {
        Some(matched) => Ok(Some(matched)),
        None => Ok(Some(Matched::new(Vec::new(), cursor.clone()))),
    })
}

/// Parse one or more occurrences; stops as soon as a match makes no progress
pub fn one_or_more<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    BoxedParser::new(move |start: &Cursor| {
        let Some(first) = parser.parse(start)? else {
            return Ok(None);
        };
        let mut results = vec![first.value];
        let mut cursor = first.cursor;
        if cursor.position() == start.position() {
            return Ok(Some(Matched::new(results, cursor)));
        }
        while let Some(next) = parser.parse(&cursor)? {
            if next.cursor.position() == cursor.position() {
                break;
            }
            results.push(next.value);
            cursor = next.cursor;
        }
        Ok(Some(Matched::new(results, cursor)))
    })
}

/// Negative lookahead: matches, consuming nothing, only where `parser` does not
pub fn not<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<()> {
    BoxedParser::new(move |cursor: &Cursor| {
        let mark = cursor.furthest();
        let result = parser.parse(cursor)?;
        cursor.restore_furthest(mark);
        match result {
            Some(_) => Ok(None),
            None => Ok(Some(Matched::new((), cursor.clone()))),
        }
    })
}

/// Optional: parse zero or one
pub fn maybe<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Option<T>> {
    BoxedParser::new(move |cursor: &Cursor| {
        Ok(Some(match parser.parse(cursor)? {
            Some(matched) => matched.map(Some),
            None => Matched::new(None, cursor.clone()),
        }))
    })
}
