//! The tokenizer and recursive-descent grammar.
//!
//! Parsing is a single forward scan over the source bytes with one byte of
//! lookahead. The scan position doubles as the error position: every
//! failure constructs its [`ParseError`] at the offset the rule failed,
//! before the scan moves on. The line index is never consulted on the
//! success path.

use bstr::{ByteSlice, decode_utf8};

use crate::{
    error::ParseError,
    location::Location,
    options::ParseOptions,
    source::Source,
    value::{Map, Value},
};

/// Containers nested deeper than this fail with a located error instead of
/// exhausting the thread stack.
const MAX_NESTING_DEPTH: usize = 128;

/// Parses the entire source as one JSON document.
///
/// Leading and trailing whitespace (space, tab, newline, carriage return)
/// is ignored; anything else after the top-level value is an error, as is
/// an input with no value at all. The first lexical or grammar error aborts
/// the parse.
///
/// # Examples
///
/// ```rust
/// use jsonpin::{ParseOptions, Source, Value, parse};
///
/// let source = Source::new("data.json", "[1, 2, 3]");
/// let value = parse(&source, ParseOptions::default()).unwrap();
/// assert_eq!(
///     value,
///     Value::Array(vec![
///         Value::Number(1.0),
///         Value::Number(2.0),
///         Value::Number(3.0),
///     ])
/// );
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] naming the exact failing offset as
/// `file:line:column`.
pub fn parse(source: &Source, options: ParseOptions) -> Result<Value, ParseError> {
    let mut parser = Parser {
        source,
        contents: source.contents(),
        char_index: 0,
        options,
        depth: 0,
    };
    parser.skip_whitespace();
    if parser.peek().is_none() {
        return Err(parser.error("input contains no value"));
    }
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if parser.peek().is_some() {
        return Err(parser.error("unexpected text after the top-level value"));
    }
    Ok(value)
}

struct Parser<'s> {
    source: &'s Source,
    contents: &'s [u8],
    char_index: usize,
    options: ParseOptions,
    depth: usize,
}

impl<'s> Parser<'s> {
    fn peek(&self) -> Option<u8> {
        self.contents.get(self.char_index).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.char_index += 1;
        Some(byte)
    }

    fn error(&self, message: impl std::fmt::Display) -> ParseError {
        self.error_at(self.char_index, message)
    }

    fn error_at(&self, char_index: usize, message: impl std::fmt::Display) -> ParseError {
        ParseError::new(Location::new(self.source, char_index), message)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.char_index += 1;
        }
    }

    /// Consumes `keyword` byte by byte, failing at the first mismatch.
    fn expect_keyword(&mut self, keyword: &'static str) -> Result<(), ParseError> {
        for expected in keyword.bytes() {
            if self.peek() == Some(expected) {
                self.char_index += 1;
            } else {
                return Err(self.error(format_args!("invalid literal; expected `{keyword}`")));
            }
        }
        Ok(())
    }

    fn enter_nested(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(self.error("structure nests too deeply"));
        }
        Ok(())
    }

    /// `value → object | array | string | number | true | false | null`,
    /// with the current byte selecting the production.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.peek() {
            Some(b'{') => self.parse_object(),
            Some(b'[') => self.parse_array(),
            Some(b'"') => Ok(Value::String(self.parse_string()?)),
            Some(b'\'') if self.options.allow_single_quote_strings => {
                Ok(Value::String(self.parse_string()?))
            }
            Some(b't') => {
                self.expect_keyword("true")?;
                Ok(Value::Boolean(true))
            }
            Some(b'f') => {
                self.expect_keyword("false")?;
                Ok(Value::Boolean(false))
            }
            Some(b'n') => {
                self.expect_keyword("null")?;
                Ok(Value::Null)
            }
            Some(b'N') if self.options.allow_infinity_and_nan => {
                self.expect_keyword("NaN")?;
                Ok(Value::Number(f64::NAN))
            }
            Some(b'I') if self.options.allow_infinity_and_nan => self.parse_number(),
            Some(b'-' | b'+' | b'.' | b'0'..=b'9') => self.parse_number(),
            Some(_) => Err(self.error("unexpected character")),
            None => Err(self.error("unexpected end of input; expected a value")),
        }
    }

    /// `object → '{' (pair (',' pair)*)? '}'` with `pair → string ':'
    /// value`. Duplicate keys overwrite, keeping the first occurrence's
    /// position.
    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter_nested()?;
        self.char_index += 1;
        let mut map = Map::new();
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.char_index += 1;
            self.depth -= 1;
            return Ok(Value::Object(map));
        }
        loop {
            self.skip_whitespace();
            let key = match self.peek() {
                Some(b'"') => self.parse_string()?,
                Some(b'\'') if self.options.allow_single_quote_strings => self.parse_string()?,
                Some(_) => return Err(self.error("expected a string as object key")),
                None => return Err(self.error("unterminated object; expected `}`")),
            };
            self.skip_whitespace();
            if self.peek() == Some(b':') {
                self.char_index += 1;
            } else {
                return Err(self.error("expected `:` after object key"));
            }
            self.skip_whitespace();
            let value = self.parse_value()?;
            map.insert(key, value);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.char_index += 1,
                Some(b'}') => {
                    self.char_index += 1;
                    self.depth -= 1;
                    return Ok(Value::Object(map));
                }
                Some(_) => return Err(self.error("expected `,` or `}` in object")),
                None => return Err(self.error("unterminated object; expected `}`")),
            }
        }
    }

    /// `array → '[' (value (',' value)*)? ']'`.
    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter_nested()?;
        self.char_index += 1;
        let mut array = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.char_index += 1;
            self.depth -= 1;
            return Ok(Value::Array(array));
        }
        loop {
            self.skip_whitespace();
            array.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.char_index += 1,
                Some(b']') => {
                    self.char_index += 1;
                    self.depth -= 1;
                    return Ok(Value::Array(array));
                }
                Some(_) => return Err(self.error("expected `,` or `]` in array")),
                None => return Err(self.error("unterminated array; expected `]`")),
            }
        }
    }

    /// Scans a string literal. The caller guarantees the current byte is
    /// the opening delimiter; the same byte closes it.
    fn parse_string(&mut self) -> Result<String, ParseError> {
        let delimiter = self.contents[self.char_index];
        self.char_index += 1;
        let mut string = String::new();
        loop {
            match self.peek() {
                None => return Err(self.error("unterminated string")),
                Some(byte) if byte == delimiter => {
                    self.char_index += 1;
                    return Ok(string);
                }
                Some(b'\\') => {
                    self.char_index += 1;
                    self.parse_escape(&mut string)?;
                }
                Some(byte) if byte < 0x20 => {
                    return Err(self.error("unescaped control character in string"));
                }
                Some(byte) if byte.is_ascii() => {
                    string.push(byte as char);
                    self.char_index += 1;
                }
                Some(_) => match decode_utf8(&self.contents[self.char_index..]) {
                    (Some(ch), size) => {
                        string.push(ch);
                        self.char_index += size;
                    }
                    (None, _) => return Err(self.error("invalid UTF-8 sequence in string")),
                },
            }
        }
    }

    /// Resolves one escape sequence; the backslash is already consumed.
    /// Malformed escapes report at the backslash.
    fn parse_escape(&mut self, string: &mut String) -> Result<(), ParseError> {
        let escape_index = self.char_index - 1;
        match self.bump() {
            Some(b'"') => string.push('"'),
            Some(b'\\') => string.push('\\'),
            Some(b'/') => string.push('/'),
            Some(b'b') => string.push('\u{8}'),
            Some(b'f') => string.push('\u{c}'),
            Some(b'n') => string.push('\n'),
            Some(b'r') => string.push('\r'),
            Some(b't') => string.push('\t'),
            Some(b'\'') if self.options.allow_single_quote_strings => string.push('\''),
            Some(b'u') => string.push(self.parse_unicode_escape(escape_index)?),
            Some(_) => return Err(self.error_at(escape_index, "invalid escape sequence")),
            None => return Err(self.error("unterminated string")),
        }
        Ok(())
    }

    /// Reads exactly four hex digits.
    fn parse_hex4(&mut self) -> Result<u32, ParseError> {
        let mut value = 0u32;
        for _ in 0..4 {
            let Some(byte) = self.peek() else {
                return Err(self.error("incomplete `\\u` escape"));
            };
            let Some(digit) = (byte as char).to_digit(16) else {
                return Err(self.error("invalid hex digit in `\\u` escape"));
            };
            value = value * 16 + digit;
            self.char_index += 1;
        }
        Ok(value)
    }

    /// `\uXXXX`, combining surrogate pairs into one code point. A high
    /// surrogate must be immediately followed by `\u` and a low surrogate.
    fn parse_unicode_escape(&mut self, escape_index: usize) -> Result<char, ParseError> {
        let first = self.parse_hex4()?;
        let code_point = match first {
            0xD800..=0xDBFF => {
                if self.peek() == Some(b'\\') && self.contents.get(self.char_index + 1) == Some(&b'u')
                {
                    self.char_index += 2;
                    let second = self.parse_hex4()?;
                    if !(0xDC00..=0xDFFF).contains(&second) {
                        return Err(
                            self.error_at(escape_index, "unpaired surrogate in `\\u` escape")
                        );
                    }
                    0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00)
                } else {
                    return Err(self.error_at(escape_index, "unpaired surrogate in `\\u` escape"));
                }
            }
            0xDC00..=0xDFFF => {
                return Err(self.error_at(escape_index, "unpaired surrogate in `\\u` escape"));
            }
            _ => first,
        };
        char::from_u32(code_point)
            .ok_or_else(|| self.error_at(escape_index, "invalid `\\u` escape"))
    }

    fn skip_digits(&mut self) -> bool {
        let start = self.char_index;
        while matches!(self.peek(), Some(byte) if byte.is_ascii_digit()) {
            self.char_index += 1;
        }
        self.char_index > start
    }

    /// Scans a number literal and converts it through `str::parse::<f64>`,
    /// which keeps the literal's mathematical value to the nearest
    /// representable double.
    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.char_index;
        let mut negative = false;
        match self.peek() {
            Some(b'-') => {
                negative = true;
                self.char_index += 1;
            }
            Some(b'+') => {
                if !self.options.allow_explicit_plus_sign_in_mantissa {
                    return Err(self.error("a leading `+` is not allowed"));
                }
                self.char_index += 1;
            }
            _ => {}
        }

        if self.options.allow_infinity_and_nan && self.peek() == Some(b'I') {
            self.expect_keyword("Infinity")?;
            return Ok(Value::Number(if negative {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }));
        }

        let mut saw_integer_digits = false;
        if let Some(byte) = self.peek() {
            if byte.is_ascii_digit() {
                saw_integer_digits = true;
                self.char_index += 1;
                if byte == b'0' {
                    if matches!(self.peek(), Some(next) if next.is_ascii_digit()) {
                        return Err(self.error("leading zeros are not allowed"));
                    }
                } else {
                    self.skip_digits();
                }
            }
        }

        if self.peek() == Some(b'.') {
            if !saw_integer_digits && !self.options.allow_number_to_start_with_dot {
                return Err(self.error("a number may not start with `.`"));
            }
            self.char_index += 1;
            if !self.skip_digits() {
                return Err(self.error("expected digits after `.`"));
            }
        } else if !saw_integer_digits {
            return Err(self.error("expected digits in number"));
        }

        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.char_index += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.char_index += 1;
            }
            if !self.skip_digits() {
                return Err(self.error("expected digits in exponent"));
            }
        }

        let literal = self.contents[start..self.char_index]
            .to_str()
            .map_err(|_| self.error_at(start, "invalid number"))?;
        let number: f64 = literal
            .parse()
            .map_err(|_| self.error_at(start, "invalid number"))?;
        Ok(Value::Number(number))
    }
}
