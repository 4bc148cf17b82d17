// SPDX-License-Identifier: Apache-2.0

//! Prefix number conversion.
//!
//! Finds the longest prefix of the input that C `strtod` would consume in the
//! "C" locale and converts it with the correctly rounded `f64` parser from
//! `core`. Hexadecimal floats are not recognized.

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn starts_with_ignore_case(bytes: &[u8], word: &[u8]) -> bool {
    bytes.len() >= word.len() && bytes[..word.len()].eq_ignore_ascii_case(word)
}

/// Length of `inf`, `infinity` or `nan` at the start of `bytes`, if present.
fn special_word_len(bytes: &[u8]) -> Option<usize> {
    if starts_with_ignore_case(bytes, b"infinity") {
        Some(8)
    } else if starts_with_ignore_case(bytes, b"inf") || starts_with_ignore_case(bytes, b"nan") {
        Some(3)
    } else {
        None
    }
}

/// Length of the longest numeric prefix of `bytes`; `0` if there is none.
pub fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos = 1;
    }
    let unsigned = bytes.get(pos..).unwrap_or_default();
    if let Some(len) = special_word_len(unsigned) {
        return pos + len;
    }

    let int_digits = count_digits(unsigned);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(bytes.get(pos + 1..).unwrap_or_default());
        // A lone '.' is not a number
        if int_digits + frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    // The exponent only counts if at least one digit follows it
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+' | b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(bytes.get(exp_pos..).unwrap_or_default());
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }
    pos
}

/// Converts the numeric prefix of `bytes`.
///
/// Returns the value and the number of bytes consumed, or `None` when no
/// prefix forms a number. Out-of-range magnitudes round to `0.0` or infinity.
pub fn parse_number_prefix(bytes: &[u8]) -> Option<(f64, usize)> {
    let len = numeric_prefix_len(bytes);
    if len == 0 {
        return None;
    }
    let text = core::str::from_utf8(bytes.get(..len)?).ok()?;
    let value = text.parse::<f64>().ok()?;
    Some((value, len))
}
