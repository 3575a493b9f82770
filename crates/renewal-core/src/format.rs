//! # Number Formatting
//!
//! The decimal display line: three fractional digits with the integer part
//! grouped in thousands.
//!
//! ```text
//! 1532.3611111…  ──fixed3──►  "1532.361"  ──group──►  "1,532.361"
//! ```
//!
//! The separators come from a [`NumberFormat`] so the presentation layer can
//! follow its locale. The digits themselves always come from
//! [`fixed3`](crate::words::fixed3), the same string the words are built from.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::words::fixed3;

/// Separators used for the decimal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberFormat {
    /// Thousands separator, or `None` for no grouping.
    pub grouping: Option<char>,

    /// Character between the whole part and the fraction.
    pub decimal_point: char,
}

impl Default for NumberFormat {
    /// `1,234.567`
    fn default() -> Self {
        NumberFormat {
            grouping: Some(','),
            decimal_point: '.',
        }
    }
}

impl NumberFormat {
    /// Formats `value` with exactly three decimals.
    ///
    /// ## Example
    /// ```rust
    /// use renewal_core::NumberFormat;
    ///
    /// let en = NumberFormat::default();
    /// assert_eq!(en.format_fixed3(1103.3).unwrap(), "1,103.300");
    ///
    /// let de = NumberFormat { grouping: Some('.'), decimal_point: ',' };
    /// assert_eq!(de.format_fixed3(1103.3).unwrap(), "1.103,300");
    /// ```
    ///
    /// ## Errors
    /// Same as [`fixed3`]: negative or non-finite values.
    pub fn format_fixed3(&self, value: f64) -> CoreResult<String> {
        let fixed = fixed3(value)?;
        Ok(self.regroup(&fixed))
    }

    /// Applies the separators to a plain `"<digits>.<digits>"` string.
    pub fn regroup(&self, fixed: &str) -> String {
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed, ""));

        let mut out = group_digits(whole, self.grouping);
        if !fraction.is_empty() {
            out.push(self.decimal_point);
            out.push_str(fraction);
        }
        out
    }
}

/// Inserts `separator` every three digits from the right.
///
/// - `"999"` → `"999"`
/// - `"1000"` → `"1,000"`
/// - `"1234567"` → `"1,234,567"`
pub fn group_digits(digits: &str, separator: Option<char>) -> String {
    let Some(separator) = separator else {
        return digits.to_string();
    };

    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================
