use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A complete decimal literal: optional sign, ASCII digits with an optional fraction
    /// (or a bare fraction), optional exponent.
    /// Examples: "10", "-2.5", ".5", "5.", "1e3", "+4E-2"
    static ref DECIMAL_LITERAL: Regex = Regex::new(
        r"^[+-]?([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?$"
    ).unwrap();

    /// The longest numeric prefix the browser's parseFloat accepts.
    /// Examples: "12km" -> "12", "3.5e2x" -> "3.5e2", "-Infinity!" -> "-Infinity", "1e" -> "1"
    static ref NUMERIC_PREFIX: Regex = Regex::new(
        r"^[+-]?(Infinity|([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?)"
    ).unwrap();
}

/// Whitespace as the browser's number parsing sees it: tab, vertical tab, form feed,
/// space, no-break space, BOM, the other space separators and line terminators.
/// Unlike `char::is_whitespace` this includes U+FEFF and excludes U+0085.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn trim_js(s: &str) -> &str {
    s.trim_matches(is_js_whitespace)
}

/// Check if a (trimmed) string is a complete decimal literal
pub fn is_decimal_literal(s: &str) -> bool {
    DECIMAL_LITERAL.is_match(trim_js(s))
}

/// Parse the whole string as a decimal number.
/// Surrounding whitespace is ignored; NaN, infinities and out-of-range values are rejected.
pub fn parse_strict(s: &str) -> Option<f64> {
    let trimmed = trim_js(s);
    if !DECIMAL_LITERAL.is_match(trimmed) {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse like the browser's parseFloat: skip leading whitespace, read the longest
/// numeric prefix and ignore the rest. No prefix gives NaN.
pub fn parse_prefix(s: &str) -> f64 {
    let trimmed = s.trim_start_matches(is_js_whitespace);
    let prefix = match NUMERIC_PREFIX.find(trimmed) {
        Some(m) => m.as_str(),
        None => return f64::NAN,
    };

    match prefix {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // ASCII decimal literals always parse
        digits => digits.parse::<f64>().unwrap_or(f64::NAN),
    }
}
