// SPDX-License-Identifier: Apache-2.0

use alloc::boxed::Box;

use crate::number_parser::parse_number_prefix;
use crate::parse_error::ParseError;
use crate::scratch_stack::ScratchStack;
use crate::slice_input_buffer::SliceInputBuffer;
use crate::value::{Member, Value};
use crate::{DefaultConfig, ScratchConfig};

/// Parses one complete JSON document.
///
/// # Example
/// ```
/// use scratchjson::{parse, ParseError, ValueType};
///
/// let value = parse(b" [ null , true ] ").unwrap();
/// assert_eq!(value.get_type(), ValueType::Array);
/// assert_eq!(parse(b"null x"), Err(ParseError::RootNotSingular));
/// ```
pub fn parse(input: &[u8]) -> Result<Value, ParseError> {
    Parser::new(input).parse()
}

/// Parses one complete JSON document from a string slice.
pub fn parse_str(input: &str) -> Result<Value, ParseError> {
    parse(input.as_bytes())
}

/// A single-use recursive-descent parser.
///
/// Holds the input cursor and the scratch stacks that stage string bytes,
/// array elements and object members until their closing delimiter is seen.
/// Generic over [`ScratchConfig`] for the initial scratch capacity.
pub struct Parser<'a, C: ScratchConfig = DefaultConfig> {
    input: SliceInputBuffer<'a>,
    bytes: ScratchStack<u8, C>,
    elements: ScratchStack<Value, C>,
    members: ScratchStack<Member, C>,
}

impl<'a> Parser<'a, DefaultConfig> {
    /// Creates a parser over `input` with the default configuration.
    ///
    /// # Example
    /// ```
    /// use scratchjson::Parser;
    /// let value = Parser::new(br#"{"key": "value"}"#).parse().unwrap();
    /// assert_eq!(value.get_object_size(), 1);
    /// ```
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_config(input)
    }
}

impl<'a, C: ScratchConfig> Parser<'a, C> {
    /// Creates a parser over `input` with a custom [`ScratchConfig`].
    pub fn with_config(input: &'a [u8]) -> Self {
        Parser {
            input: SliceInputBuffer::new(input),
            bytes: ScratchStack::new(),
            elements: ScratchStack::new(),
            members: ScratchStack::new(),
        }
    }

    /// Parses the whole input as exactly one JSON value.
    ///
    /// On error nothing built so far survives: staged children are dropped
    /// before the error is returned.
    pub fn parse(mut self) -> Result<Value, ParseError> {
        let result = self.parse_root();
        debug_assert!(
            self.bytes.is_empty() && self.elements.is_empty() && self.members.is_empty(),
            "scratch stacks not empty after parse"
        );
        if let Err(err) = &result {
            log::debug!(
                "parse failed at byte {}: {:?}",
                self.input.current_pos(),
                err
            );
        }
        result
    }

    fn parse_root(&mut self) -> Result<Value, ParseError> {
        self.input.skip_whitespace();
        let value = self.parse_value()?;
        self.input.skip_whitespace();
        if !self.input.is_at_end() {
            return Err(ParseError::RootNotSingular);
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.input.peek() {
            Some(b'n') => self.parse_literal(b"null", Value::Null),
            Some(b't') => self.parse_literal(b"true", Value::True),
            Some(b'f') => self.parse_literal(b"false", Value::False),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(_) => self.parse_number(),
            None => Err(ParseError::ExpectValue),
        }
    }

    fn parse_literal(&mut self, literal: &[u8], value: Value) -> Result<Value, ParseError> {
        if self.input.consume_literal(literal) {
            Ok(value)
        } else {
            Err(ParseError::InvalidValue)
        }
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let (number, consumed) =
            parse_number_prefix(self.input.remaining()).ok_or(ParseError::InvalidValue)?;
        self.input.advance_by(consumed);
        Ok(Value::Number(number))
    }

    /// Stages raw bytes up to the closing quote, then compacts them.
    /// The cursor must be on the opening quote.
    fn parse_string(&mut self) -> Result<Box<[u8]>, ParseError> {
        let head = self.bytes.top();
        let opened = self.input.consume_if(b'"');
        debug_assert!(opened, "string production entered without a quote");
        loop {
            match self.input.consume_byte() {
                Some(b'"') => {
                    let len = self.bytes.top() - head;
                    log::trace!("string complete, compacting {} bytes", len);
                    return Ok(self.bytes.pop_compact(len));
                }
                Some(byte) => self.bytes.push(byte),
                None => {
                    self.bytes.rewind(head);
                    return Err(ParseError::MissQuotationMark);
                }
            }
        }
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        let opened = self.input.consume_if(b'[');
        debug_assert!(opened, "array production entered without '['");
        self.input.skip_whitespace();
        if self.input.consume_if(b']') {
            return Ok(Value::Array(Box::default()));
        }
        let head = self.elements.top();
        match self.parse_elements(head) {
            Ok(elements) => Ok(Value::Array(elements)),
            Err(err) => {
                // Drops every element staged for this array, with their subtrees
                self.elements.rewind(head);
                Err(err)
            }
        }
    }

    fn parse_elements(&mut self, head: usize) -> Result<Box<[Value]>, ParseError> {
        loop {
            let element = self.parse_value()?;
            self.elements.push(element);
            self.input.skip_whitespace();
            match self.input.peek() {
                Some(b',') => {
                    self.input.advance_by(1);
                    self.input.skip_whitespace();
                }
                Some(b']') => {
                    self.input.advance_by(1);
                    let count = self.elements.top() - head;
                    log::trace!("array complete, compacting {} elements", count);
                    return Ok(self.elements.pop_compact(count));
                }
                _ => return Err(ParseError::MissCommaOrSquareBracket),
            }
        }
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        let opened = self.input.consume_if(b'{');
        debug_assert!(opened, "object production entered without '{{'");
        self.input.skip_whitespace();
        if self.input.consume_if(b'}') {
            return Ok(Value::Object(Box::default()));
        }
        let head = self.members.top();
        match self.parse_members(head) {
            Ok(members) => Ok(Value::Object(members)),
            Err(err) => {
                self.members.rewind(head);
                Err(err)
            }
        }
    }

    fn parse_members(&mut self, head: usize) -> Result<Box<[Member]>, ParseError> {
        loop {
            if self.input.peek() != Some(b'"') {
                return Err(ParseError::MissKey);
            }
            // Owned locally until the member is staged, so it is dropped on any error below
            let key = self.parse_string()?;
            self.input.skip_whitespace();
            if !self.input.consume_if(b':') {
                return Err(ParseError::MissColon);
            }
            self.input.skip_whitespace();
            let value = self.parse_value()?;
            self.members.push(Member::new(key, value));
            self.input.skip_whitespace();
            match self.input.peek() {
                Some(b',') => {
                    self.input.advance_by(1);
                    self.input.skip_whitespace();
                }
                Some(b'}') => {
                    self.input.advance_by(1);
                    let count = self.members.top() - head;
                    log::trace!("object complete, compacting {} members", count);
                    return Ok(self.members.pop_compact(count));
                }
                _ => return Err(ParseError::MissCommaOrCurlyBracket),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueType;
    use test_log::test;

    fn parser_for(input: &str) -> Parser<'_> {
        Parser::new(input.as_bytes())
    }

    #[test]
    fn test_literals() {
        assert_eq!(parse(b"null"), Ok(Value::Null));
        assert_eq!(parse(b"true"), Ok(Value::True));
        assert_eq!(parse(b"false"), Ok(Value::False));
        assert_eq!(parse(b"nul"), Err(ParseError::InvalidValue));
        assert_eq!(parse(b"tru"), Err(ParseError::InvalidValue));
        assert_eq!(parse(b"fals"), Err(ParseError::InvalidValue));
        assert_eq!(parse(b"nulL"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_literal_followed_by_junk_is_not_singular() {
        assert_eq!(parse(b"nullx"), Err(ParseError::RootNotSingular));
        assert_eq!(parse(b"true false"), Err(ParseError::RootNotSingular));
    }

    #[test]
    fn test_expect_value() {
        assert_eq!(parse(b""), Err(ParseError::ExpectValue));
        assert_eq!(parse(b" \t\r\n"), Err(ParseError::ExpectValue));
        assert_eq!(parse(b"[1,"), Err(ParseError::ExpectValue));
        assert_eq!(parse(br#"{"a":"#), Err(ParseError::ExpectValue));
    }

    #[test]
    fn test_string_is_raw() {
        let value = parse(br#""a\nb""#).unwrap();
        // Escapes are not interpreted
        assert_eq!(value.get_string(), br"a\nb");
        let value = parse(b"\"tab\there\"").unwrap();
        assert_eq!(value.get_string(), b"tab\there");
    }

    #[test]
    fn test_string_keeps_interior_nul() {
        let value = parse(b"\"a\0b\"").unwrap();
        assert_eq!(value.get_string_length(), 3);
    }

    #[test]
    fn test_long_string_grows_scratch() {
        let body = "x".repeat(1000);
        let json = format!("\"{body}\"");
        let value = parse_str(&json).unwrap();
        assert_eq!(value.get_string(), body.as_bytes());
    }

    #[test]
    fn test_stacks_empty_after_success_and_failure() {
        for input in [
            r#"{"a": [1, "two", {"b": null}], "c": "d"}"#,
            r#"{"a": [1, "two", {"b": null}], "c" "d"}"#,
            r#"[[1, 2], [3, "unterminated]]"#,
            r#"[{"k": [true false]}]"#,
        ] {
            let mut parser = parser_for(input);
            let _ = parser.parse_root();
            assert_eq!(parser.bytes.top(), 0, "{input}");
            assert_eq!(parser.elements.top(), 0, "{input}");
            assert_eq!(parser.members.top(), 0, "{input}");
        }
    }

    #[test]
    fn test_nested_structures() {
        let value = parse_str(r#"{"outer": {"inner": [[], [{}]]}}"#).unwrap();
        let inner = value
            .find_member("outer")
            .and_then(|o| o.find_member("inner"))
            .unwrap();
        assert_eq!(inner.get_array_size(), 2);
        assert_eq!(inner.get_array_element(0).get_array_size(), 0);
        let last = inner.get_array_element(1).get_array_element(0);
        assert_eq!(last.get_type(), ValueType::Object);
        assert_eq!(last.get_object_size(), 0);
    }

    #[test]
    fn test_custom_config() {
        struct Small;
        impl ScratchConfig for Small {
            const INITIAL_CAPACITY: usize = 2;
        }
        let value = Parser::<Small>::with_config(br#"["abcdefgh", [1, 2, 3, 4, 5]]"#)
            .parse()
            .unwrap();
        assert_eq!(value.get_array_element(0).get_string(), b"abcdefgh");
        assert_eq!(value.get_array_element(1).get_array_size(), 5);
    }

    #[test]
    fn test_parse_from_resets_on_error() {
        let mut value = Value::new();
        assert_eq!(value.parse_from("[1, 2]"), Ok(()));
        assert_eq!(value.get_array_size(), 2);
        assert_eq!(value.parse_from("[1 2]"), Err(ParseError::MissCommaOrSquareBracket));
        assert!(value.is_null());
    }
}
