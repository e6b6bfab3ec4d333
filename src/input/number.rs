//! Strict numeric conversion of a single line of text.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::{EeeError, NumberKind, Result};

/// Parse a base-10 integer, rejecting anything but trailing spaces/tabs after it.
pub fn parse_int(text: &str) -> Result<i64> {
    let mut scanner = Scanner::new(text);
    let token = scanner.read_integer();
    if token.is_empty() || !scanner.rest_is_blank() {
        return Err(EeeError::invalid_number(text, NumberKind::Integer));
    }

    // Out-of-range values fail here
    token
        .parse::<i64>()
        .map_err(|_| EeeError::invalid_number(text, NumberKind::Integer))
}

/// Parse a decimal real, rejecting anything but trailing spaces/tabs after it.
pub fn parse_real(text: &str) -> Result<f64> {
    let mut scanner = Scanner::new(text);
    let token = scanner.read_real();
    if token.is_empty() || !scanner.rest_is_blank() {
        return Err(EeeError::invalid_number(text, NumberKind::Real));
    }

    let value = token
        .parse::<f64>()
        .map_err(|_| EeeError::invalid_number(text, NumberKind::Real))?;

    if value.is_infinite() || (value == 0.0 && has_nonzero_mantissa(token)) {
        return Err(EeeError::invalid_number(text, NumberKind::Real));
    }

    Ok(value)
}

/// Whether a scanned real literal has a non-zero digit before its exponent.
fn has_nonzero_mantissa(token: &str) -> bool {
    token
        .chars()
        .take_while(|c| *c != 'e' && *c != 'E')
        .any(|c| matches!(c, '1'..='9'))
}

/// Character scanner over one input line.
struct Scanner<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        let mut scanner = Self {
            input,
            chars: input.char_indices().peekable(),
        };
        scanner.skip_leading_space();
        scanner
    }

    fn skip_leading_space(&mut self) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c') {
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn position(&mut self) -> usize {
        self.chars.peek().map(|(pos, _)| *pos).unwrap_or(self.input.len())
    }

    fn eat_sign(&mut self) -> bool {
        if let Some(&(_, '-' | '+')) = self.chars.peek() {
            self.chars.next();
            true
        } else {
            false
        }
    }

    fn eat_digits(&mut self) -> usize {
        let mut count = 0;
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_ascii_digit() {
                self.chars.next();
                count += 1;
            } else {
                break;
            }
        }
        count
    }

    /// Read `[sign] digits`. Returns an empty slice when no digits were found.
    fn read_integer(&mut self) -> &'a str {
        let start = self.position();
        let saved = self.chars.clone();

        self.eat_sign();
        if self.eat_digits() == 0 {
            self.chars = saved;
            return "";
        }

        let end = self.position();
        &self.input[start..end]
    }

    /// Read `[sign] (digits [. digits] | . digits) [exponent]`.
    ///
    /// An exponent marker is only consumed when digits follow it, so `"5e"`
    /// scans as `"5"` with trailing `e`.
    fn read_real(&mut self) -> &'a str {
        let start = self.position();
        let saved = self.chars.clone();

        self.eat_sign();
        let mut digits = self.eat_digits();
        if let Some(&(_, '.')) = self.chars.peek() {
            self.chars.next();
            digits += self.eat_digits();
        }

        if digits == 0 {
            self.chars = saved;
            return "";
        }

        if let Some(&(_, 'e' | 'E')) = self.chars.peek() {
            let before_exponent = self.chars.clone();
            self.chars.next();
            self.eat_sign();
            if self.eat_digits() == 0 {
                self.chars = before_exponent;
            }
        }

        let end = self.position();
        &self.input[start..end]
    }

    /// Only horizontal whitespace may follow the numeric token.
    fn rest_is_blank(&mut self) -> bool {
        self.chars.all(|(_, ch)| ch == ' ' || ch == '\t')
    }
}
