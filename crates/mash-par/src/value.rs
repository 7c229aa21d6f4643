//! Numeric and string value materialization (spec §4.4.3).
//!
//! The lexer validates but does not decode: a `NUMBER` token's literal is
//! the verbatim source digits, and a `STRING` token's literal keeps its
//! surrounding quotes (or none, for a bare command word) and its escapes
//! unprocessed. Turning that text into the `f64`/`String` the AST carries
//! is this module's job, run once per literal as the parser builds it.

use mash_util::error::LexError;

/// Parses a `NUMBER` token's literal into its `f64` value, honoring the
/// base prefixes of spec §4.2.7 (`0x`/`0b`/`0o`, bare leading `0` as
/// octal), underscores as digit separators, and `e`/`p` exponents.
pub fn parse_number(literal: &str) -> Result<f64, LexError> {
    let clean: String = literal.chars().filter(|&c| c != '_').collect();
    let bytes = clean.as_bytes();

    if clean.len() > 1 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => return parse_hex_float(&clean[2..]),
            b'b' | b'B' => {
                return u64::from_str_radix(&clean[2..], 2)
                    .map(|v| v as f64)
                    .map_err(|_| LexError::InvalidNumber)
            }
            b'o' | b'O' => {
                return u64::from_str_radix(&clean[2..], 8)
                    .map(|v| v as f64)
                    .map_err(|_| LexError::InvalidNumber)
            }
            b'0'..=b'9' => {
                // Bare leading zero: octal. Spec's open question preserves
                // this rather than treating it as a bug.
                return u64::from_str_radix(&clean[1..], 8)
                    .map(|v| v as f64)
                    .map_err(|_| LexError::InvalidNumber);
            }
            _ => {}
        }
    }

    clean.parse::<f64>().map_err(|_| LexError::InvalidNumber)
}

/// Parses the hex digits after `0x`/`0X`: an optional `.` fraction and an
/// optional signed `p`/`P` binary exponent, e.g. `1A`, `1.8p4`.
fn parse_hex_float(digits: &str) -> Result<f64, LexError> {
    if digits.is_empty() {
        return Err(LexError::InvalidNumber);
    }

    let (mantissa, exponent) = match digits.find(['p', 'P']) {
        Some(idx) => {
            let exp = digits[idx + 1..]
                .parse::<i32>()
                .map_err(|_| LexError::InvalidNumber)?;
            (&digits[..idx], exp)
        }
        None => (digits, 0),
    };

    let (int_part, frac_part) = match mantissa.find('.') {
        Some(idx) => (&mantissa[..idx], &mantissa[idx + 1..]),
        None => (mantissa, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(LexError::InvalidNumber);
    }

    let mut value = 0f64;
    for c in int_part.chars() {
        let digit = c.to_digit(16).ok_or(LexError::InvalidNumber)?;
        value = value * 16.0 + digit as f64;
    }

    let mut scale = 1.0 / 16.0;
    for c in frac_part.chars() {
        let digit = c.to_digit(16).ok_or(LexError::InvalidNumber)?;
        value += digit as f64 * scale;
        scale /= 16.0;
    }

    Ok(value * 2f64.powi(exponent))
}

/// Materializes a `STRING` token's literal: strips and decodes `"..."`,
/// strips (without decoding) `` `...` ``, and passes a bare command word
/// through verbatim.
pub fn unquote(literal: &str) -> Result<String, LexError> {
    match literal.chars().next() {
        Some('"') => decode_escapes(&literal[1..literal.len() - 1]),
        Some('`') => Ok(literal[1..literal.len() - 1].to_string()),
        _ => Ok(literal.to_string()),
    }
}

/// Materializes one fragment of a template string's literal portion: the
/// lexer hands the parser the bare text between quote/brace boundaries,
/// still carrying unprocessed escapes.
pub fn unescape_fragment(literal: &str) -> Result<String, LexError> {
    decode_escapes(literal)
}

fn decode_escapes(text: &str) -> Result<String, LexError> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '\\' {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        i += 1;
        let Some(&escape) = chars.get(i) else {
            return Err(LexError::UnterminatedEscape);
        };

        match escape {
            'a' => { out.push('\u{07}'); i += 1; }
            'b' => { out.push('\u{08}'); i += 1; }
            'f' => { out.push('\u{0C}'); i += 1; }
            'n' => { out.push('\n'); i += 1; }
            'r' => { out.push('\r'); i += 1; }
            't' => { out.push('\t'); i += 1; }
            'v' => { out.push('\u{0B}'); i += 1; }
            '\\' => { out.push('\\'); i += 1; }
            '"' => { out.push('"'); i += 1; }
            '\'' => { out.push('\''); i += 1; }
            '{' => { out.push('{'); i += 1; }
            '0'..='7' => {
                let mut value = 0u32;
                let mut consumed = 0;
                while consumed < 3 && chars.get(i).is_some_and(|c| ('0'..='7').contains(c)) {
                    value = value * 8 + chars[i].to_digit(8).unwrap();
                    i += 1;
                    consumed += 1;
                }
                if consumed < 3 {
                    return Err(LexError::UnterminatedEscape);
                }
                out.push(char::from_u32(value).unwrap_or('\u{FFFD}'));
            }
            'x' => {
                i += 1;
                let value = read_hex_digits(&chars, &mut i, 2)?;
                out.push(value as u8 as char);
            }
            'u' => {
                i += 1;
                let value = read_hex_digits(&chars, &mut i, 4)?;
                out.push(char::from_u32(value).ok_or(LexError::InvalidEscape)?);
            }
            'U' => {
                i += 1;
                let value = read_hex_digits(&chars, &mut i, 8)?;
                out.push(char::from_u32(value).ok_or(LexError::InvalidEscape)?);
            }
            _ => return Err(LexError::InvalidEscape),
        }
    }

    Ok(out)
}

fn read_hex_digits(chars: &[char], i: &mut usize, n: usize) -> Result<u32, LexError> {
    let mut value = 0u32;
    for _ in 0..n {
        let digit = chars
            .get(*i)
            .and_then(|c| c.to_digit(16))
            .ok_or(LexError::UnterminatedEscape)?;
        value = value * 16 + digit;
        *i += 1;
    }
    Ok(value)
}
