// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur during JSON parsing.
///
/// Each variant corresponds to exactly one grammar violation. A successful
/// parse is the `Ok` arm of the returned `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// The input is empty or contains only whitespace.
    ExpectValue,
    /// A literal, number or other token is malformed.
    InvalidValue,
    /// Non-whitespace content follows a complete top-level value.
    RootNotSingular,
    /// A string is missing its closing quotation mark.
    MissQuotationMark,
    /// Invalid escape sequence inside a string. Reserved: strings are not unescaped.
    InvalidStringEscape,
    /// Invalid character inside a string. Reserved: strings are taken as raw bytes.
    InvalidStringChar,
    /// An array element is followed by something other than `,` or `]`.
    MissCommaOrSquareBracket,
    /// An object member does not start with a quoted key.
    MissKey,
    /// An object key is not followed by `:`.
    MissColon,
    /// An object member is followed by something other than `,` or `}`.
    MissCommaOrCurlyBracket,
}

impl ParseError {
    /// Stable numeric code. `0` is reserved for success, so codes start at `1`.
    pub const fn code(self) -> u8 {
        match self {
            ParseError::ExpectValue => 1,
            ParseError::InvalidValue => 2,
            ParseError::RootNotSingular => 3,
            ParseError::MissQuotationMark => 4,
            ParseError::InvalidStringEscape => 5,
            ParseError::InvalidStringChar => 6,
            ParseError::MissCommaOrSquareBracket => 7,
            ParseError::MissKey => 8,
            ParseError::MissColon => 9,
            ParseError::MissCommaOrCurlyBracket => 10,
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ParseError::ExpectValue => "expected a value",
            ParseError::InvalidValue => "invalid value",
            ParseError::RootNotSingular => "unexpected content after the root value",
            ParseError::MissQuotationMark => "missing closing quotation mark",
            ParseError::InvalidStringEscape => "invalid string escape",
            ParseError::InvalidStringChar => "invalid character in string",
            ParseError::MissCommaOrSquareBracket => "expected ',' or ']' after array element",
            ParseError::MissKey => "expected a quoted object key",
            ParseError::MissColon => "expected ':' after object key",
            ParseError::MissCommaOrCurlyBracket => "expected ',' or '}' after object member",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_grammar_order() {
        let all = [
            ParseError::ExpectValue,
            ParseError::InvalidValue,
            ParseError::RootNotSingular,
            ParseError::MissQuotationMark,
            ParseError::InvalidStringEscape,
            ParseError::InvalidStringChar,
            ParseError::MissCommaOrSquareBracket,
            ParseError::MissKey,
            ParseError::MissColon,
            ParseError::MissCommaOrCurlyBracket,
        ];
        for (i, err) in all.iter().enumerate() {
            assert_eq!(err.code() as usize, i + 1, "{err:?}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ParseError::MissColon.to_string(), "expected ':' after object key");
        assert_eq!(ParseError::ExpectValue.to_string(), "expected a value");
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn std::error::Error> = Box::new(ParseError::MissKey);
        assert_eq!(err.to_string(), "expected a quoted object key");
    }
}
