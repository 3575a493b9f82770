//! # Words Module
//!
//! Renders a value as the English words typed into a contract, and parses
//! such words back.
//!
//! ## Rendering Steps
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1532.3611111…                                                          │
//! │      │  fixed3()      round to exactly 3 decimals                      │
//! │      ▼                                                                  │
//! │  "1532.361"                                                             │
//! │      │  split at '.'                                                    │
//! │      ├──► "1532" ─► cardinal ─► one thousand five hundred thirty two   │
//! │      └──► "361"  ─► digit by digit ─► three six one                     │
//! │      │                                                                  │
//! │      ▼  join with "point", title-case every token                       │
//! │  "One Thousand Five Hundred Thirty Two Point Three Six One"            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Conventions
//! - Short scale, no "and": 1,234 is "one thousand two hundred thirty four"
//! - Compound tens are two tokens ("Thirty Two"), so title-casing reaches both
//! - The three fractional digits are always spelled, even "Zero Zero Zero"
//! - Scales past nonillion use Conway–Wechsler names (decillion, undecillion,
//!   …, centillion), which covers every finite `f64`
//!
//! ## Rounding
//! [`fixed3`] uses Rust's `{:.3}` formatting: the exact binary value is
//! rounded to the nearest 3-decimal string, and an exact binary tie rounds
//! half to even. The grouped display in [`crate::format`] is built from the
//! same string, so the digits and the words always agree.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{CoreError, CoreResult};

/// Word placed between the whole part and the fractional digits.
pub const POINT: &str = "point";

/// Number of fractional digits rendered.
pub const FRACTION_DIGITS: usize = 3;

const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const HUNDRED: &str = "hundred";
const THOUSAND: &str = "thousand";

// =============================================================================
// Rendering
// =============================================================================

/// Formats `value` with exactly three decimals, never in scientific
/// notation.
///
/// ## Errors
/// - [`CoreError::NonFiniteValue`] for NaN and infinities
/// - [`CoreError::NegativeValue`] for anything below zero
///
/// `-0.0` is treated as zero.
///
/// ## Example
/// ```rust
/// use renewal_core::words::fixed3;
///
/// assert_eq!(fixed3(1103.3).unwrap(), "1103.300");
/// assert_eq!(fixed3(-0.0).unwrap(), "0.000");
/// assert!(fixed3(-1.0).is_err());
/// ```
pub fn fixed3(value: f64) -> CoreResult<String> {
    if !value.is_finite() {
        return Err(CoreError::NonFiniteValue { value });
    }

    if value < 0.0 {
        return Err(CoreError::NegativeValue { value });
    }

    // Adding +0.0 turns -0.0 into +0.0 so no sign is printed.
    Ok(format!("{:.*}", FRACTION_DIGITS, value + 0.0))
}

/// Renders a value as title-cased English words.
///
/// ## Example
/// ```rust
/// use renewal_core::to_words;
///
/// assert_eq!(
///     to_words(1103.3).unwrap(),
///     "One Thousand One Hundred Three Point Three Zero Zero"
/// );
/// assert_eq!(to_words(0.0).unwrap(), "Zero Point Zero Zero Zero");
/// ```
pub fn to_words(value: f64) -> CoreResult<String> {
    let fixed = fixed3(value)?;
    Ok(fixed_to_words(&fixed))
}

/// Renders an already formatted `"<digits>.<digits>"` string.
///
/// Anything that is not an ASCII digit is skipped.
pub fn fixed_to_words(fixed: &str) -> String {
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed, ""));

    let mut words = cardinal(whole);
    words.push(POINT.to_string());
    words.extend(
        fraction
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| ONES[usize::from(b - b'0')].to_string()),
    );

    words
        .iter()
        .map(|word| title_case(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cardinal words for a string of decimal digits, lowercase, one word per
/// element.
fn cardinal(digits: &str) -> Vec<String> {
    let digits: Vec<u8> = digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .skip_while(|d| *d == 0)
        .collect();

    if digits.is_empty() {
        return vec![ONES[0].to_string()];
    }

    // Split into groups of three from the right; group 0 is units.
    let groups: Vec<u16> = digits
        .rchunks(3)
        .map(|chunk| chunk.iter().fold(0u16, |acc, d| acc * 10 + u16::from(*d)))
        .collect();

    let mut words = Vec::new();
    for (scale, group) in groups.iter().enumerate().rev() {
        if *group == 0 {
            continue;
        }
        push_below_thousand(&mut words, *group);
        if scale > 0 {
            words.push(scale_name(scale));
        }
    }
    words
}

fn push_below_thousand(words: &mut Vec<String>, n: u16) {
    let (hundreds, rest) = (usize::from(n / 100), usize::from(n % 100));

    if hundreds > 0 {
        words.push(ONES[hundreds].to_string());
        words.push(HUNDRED.to_string());
    }

    match rest {
        0 => {}
        1..=19 => words.push(ONES[rest].to_string()),
        _ => {
            words.push(TENS[rest / 10].to_string());
            if rest % 10 > 0 {
                words.push(ONES[rest % 10].to_string());
            }
        }
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// =============================================================================
// Scale Names
// =============================================================================

/// Name of the `scale`-th group of three digits (1 = thousand, 2 = million).
fn scale_name(scale: usize) -> String {
    if scale == 1 {
        THOUSAND.to_string()
    } else {
        illion(scale - 1)
    }
}

/// Conway–Wechsler name for 10^(3n + 3), valid for `1 <= n <= 999`.
fn illion(n: usize) -> String {
    const SMALL: [&str; 10] = [
        "", "m", "b", "tr", "quadr", "quint", "sext", "sept", "oct", "non",
    ];

    if n < SMALL.len() {
        return format!("{}illion", SMALL[n]);
    }

    // (prefix, markers) where markers drive the spelling of a preceding unit.
    const TENS_PREFIX: [(&str, &str); 10] = [
        ("", ""),
        ("deci", "N"),
        ("viginti", "MS"),
        ("triginta", "NS"),
        ("quadraginta", "NS"),
        ("quinquaginta", "NS"),
        ("sexaginta", "N"),
        ("septuaginta", "N"),
        ("octoginta", "MX"),
        ("nonaginta", ""),
    ];
    const HUNDREDS_PREFIX: [(&str, &str); 10] = [
        ("", ""),
        ("centi", "NX"),
        ("ducenti", "N"),
        ("trecenti", "NS"),
        ("quadringenti", "NS"),
        ("quingenti", "NS"),
        ("sescenti", "N"),
        ("septingenti", "N"),
        ("octingenti", "MX"),
        ("nongenti", ""),
    ];

    let (units, tens, hundreds) = (n % 10, n / 10 % 10, n / 100 % 10);
    let markers = if tens > 0 {
        TENS_PREFIX[tens].1
    } else {
        HUNDREDS_PREFIX[hundreds].1
    };

    let mut name = String::from(unit_prefix(units, markers));
    name.push_str(TENS_PREFIX[tens].0);
    name.push_str(HUNDREDS_PREFIX[hundreds].0);

    if name.ends_with(['a', 'i']) {
        name.pop();
    }
    name.push_str("illion");
    name
}

fn unit_prefix(units: usize, markers: &str) -> &'static str {
    let has = |m: char| markers.contains(m);
    match units {
        1 => "un",
        2 => "duo",
        3 if has('S') || has('X') => "tres",
        3 => "tre",
        4 => "quattuor",
        5 => "quin",
        6 if has('S') => "ses",
        6 if has('X') => "sex",
        6 => "se",
        7 if has('M') => "septem",
        7 if has('N') => "septen",
        7 => "septe",
        8 => "octo",
        9 if has('M') => "novem",
        9 if has('N') => "noven",
        9 => "nove",
        _ => "",
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Scale word → group index, for every scale an `f64` can reach and more.
fn scale_lookup() -> &'static HashMap<String, usize> {
    static LOOKUP: OnceLock<HashMap<String, usize>> = OnceLock::new();
    LOOKUP.get_or_init(|| (1..=1000).map(|scale| (scale_name(scale), scale)).collect())
}

enum Token {
    Small(u16),
    Hundred,
    Scale(usize),
}

fn classify(word: &str) -> CoreResult<Token> {
    if let Some(n) = ONES.iter().position(|w| *w == word) {
        return Ok(Token::Small(n as u16));
    }
    if let Some(n) = TENS.iter().position(|w| !w.is_empty() && *w == word) {
        return Ok(Token::Small(n as u16 * 10));
    }
    if word == HUNDRED {
        return Ok(Token::Hundred);
    }
    scale_lookup()
        .get(word)
        .map(|scale| Token::Scale(*scale))
        .ok_or_else(|| CoreError::UnrecognizedWord {
            word: word.to_string(),
        })
}

fn malformed(reason: impl Into<String>) -> CoreError {
    CoreError::MalformedWords {
        reason: reason.into(),
    }
}

/// Parses a words transcription back into its `"<digits>.<digits>"` form.
///
/// Accepts any letter case, extra whitespace, and hyphenated tens
/// ("thirty-two"). The fractional digits are returned exactly as spelled.
///
/// ## Example
/// ```rust
/// use renewal_core::parse_words;
///
/// let fixed = parse_words("One Thousand One Hundred Three Point Three Zero Zero").unwrap();
/// assert_eq!(fixed, "1103.300");
/// ```
pub fn parse_words(text: &str) -> CoreResult<String> {
    let normalized = text.to_lowercase().replace('-', " ");
    let tokens: Vec<&str> = normalized.split_whitespace().collect();

    let point = tokens
        .iter()
        .position(|t| *t == POINT)
        .ok_or_else(|| malformed("missing 'point'"))?;
    let (whole, fraction) = (&tokens[..point], &tokens[point + 1..]);

    if whole.is_empty() {
        return Err(malformed("nothing before 'point'"));
    }
    if fraction.is_empty() {
        return Err(malformed("no digits after 'point'"));
    }

    let mut fixed = parse_cardinal(whole)?;
    fixed.push('.');
    for word in fraction {
        match ONES[..10].iter().position(|w| w == word) {
            Some(digit) => fixed.push(char::from(b'0' + digit as u8)),
            None if *word == POINT => return Err(malformed("'point' appears twice")),
            None => {
                return Err(CoreError::UnrecognizedWord {
                    word: word.to_string(),
                })
            }
        }
    }
    Ok(fixed)
}

fn parse_cardinal(tokens: &[&str]) -> CoreResult<String> {
    if tokens == [ONES[0]] {
        return Ok("0".to_string());
    }

    // groups[scale] = value of that three-digit group
    let mut groups: Vec<(usize, u16)> = Vec::new();
    let mut current: u16 = 0;
    let mut seen_any = false;

    for word in tokens {
        match classify(word)? {
            Token::Small(0) => return Err(malformed("'zero' inside a larger number")),
            Token::Small(n) => {
                let tail = current % 100;
                let fits = tail == 0 || (tail >= 20 && tail % 10 == 0 && n < 10);
                if !fits {
                    return Err(malformed(format!("'{word}' cannot follow the previous word")));
                }
                current += n;
                seen_any = true;
            }
            Token::Hundred => {
                if !(1..=9).contains(&current) {
                    return Err(malformed("'hundred' must follow a single digit"));
                }
                current *= 100;
            }
            Token::Scale(scale) => {
                if current == 0 {
                    return Err(malformed(format!("'{word}' has no multiplier")));
                }
                if groups.last().is_some_and(|(prev, _)| *prev <= scale) {
                    return Err(malformed(format!("'{word}' is out of order")));
                }
                groups.push((scale, current));
                current = 0;
            }
        }
    }

    if !seen_any {
        return Err(malformed("no number words before 'point'"));
    }
    if current > 0 {
        groups.push((0, current));
    }

    let top = groups.first().map_or(0, |(scale, _)| *scale);
    let mut digits = String::new();
    for scale in (0..=top).rev() {
        let value = groups
            .iter()
            .find(|(s, _)| *s == scale)
            .map_or(0, |(_, v)| *v);
        if scale == top {
            digits.push_str(&value.to_string());
        } else {
            digits.push_str(&format!("{value:03}"));
        }
    }
    Ok(digits)
}

// =============================================================================
// Unit Tests
// =============================================================================
