//! Turns raw string and number token texts into values.

use crate::data::Number;
use std::char::REPLACEMENT_CHARACTER;

/// Strips the outermost quotes of a raw string token and interprets its escapes.
///
/// The closing quote is only stripped when it is not itself escaped, so an
/// unterminated token decodes everything after its opening quote.
pub fn decode_string(raw: &str) -> String {
    let body = raw.strip_prefix('"').unwrap_or(raw);
    let body = strip_closing_quote(body);
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some(escape) => decode_escape(escape, &mut chars, &mut out),
                None => out.push('\\'),
            },
            x => out.push(x),
        }
    }

    out
}

fn strip_closing_quote(body: &str) -> &str {
    match body.strip_suffix('"') {
        // An odd run of backslashes before the quote escapes it
        Some(inner) if inner.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 0 => inner,
        _ => body,
    }
}

fn decode_escape(escape: char, chars: &mut std::str::Chars<'_>, out: &mut String) {
    match escape {
        'b' => out.push('\x08'),
        'f' => out.push('\x0C'),
        'n' => out.push('\n'),
        'r' => out.push('\r'),
        't' => out.push('\t'),
        'u' => {
            let rest = chars.as_str();
            match rest.get(..4).filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit())) {
                Some(hex) => {
                    // No surrogate pairing: a lone half has no `char`, so it becomes U+FFFD.
                    let ch = u32::from_str_radix(hex, 16)
                        .ok()
                        .and_then(char::from_u32)
                        .unwrap_or(REPLACEMENT_CHARACTER);
                    out.push(ch);
                    *chars = rest[4..].chars();
                }
                None => out.push('u'),
            }
        }
        // Covers \\ \/ \" as well as unknown escapes, which lose their backslash
        x => out.push(x),
    }
}

/// Decodes a raw number token.
///
/// Texts containing a `.` are floats, everything else is an integer made of
/// the leading digit run. This makes `1e2` decode as `1`.
pub fn decode_number(raw: &str) -> Option<Number> {
    if raw.contains('.') {
        decode_float(raw).map(Number::Float)
    } else {
        decode_int(raw).map(Number::Int)
    }
}

fn decode_int(raw: &str) -> Option<i64> {
    let sign = usize::from(raw.starts_with('-'));
    let digits = digit_run(&raw[sign..]);
    if digits == 0 {
        return None;
    }
    raw[..sign + digits].parse().ok()
}

fn decode_float(raw: &str) -> Option<f64> {
    /* Takes the longest prefix shaped like -?d*(.d*)?([eE][+-]?d+)? */
    let bytes = raw.as_bytes();
    let mut end = usize::from(raw.starts_with('-'));

    let int_digits = digit_run(&raw[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_run(&raw[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digit_run(&raw[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    raw[..end].parse().ok()
}

fn digit_run(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}
