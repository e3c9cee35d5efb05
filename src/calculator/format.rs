//! Number formatting for the calculator display.
//!
//! Operands are kept as the strings the user typed. Formatting only touches
//! the integer part; whatever follows the decimal point is shown verbatim so
//! trailing zeros being typed (`1.50`) stay visible.

use serde::Deserialize;

/// Digit grouping options for the display.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    /// Inserted between groups of three integer digits.
    pub group_separator: String,
    /// Whether to group integer digits at all.
    pub grouping: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            group_separator: ",".to_string(),
            grouping: true,
        }
    }
}

impl NumberFormat {
    /// Insert the group separator every three digits, counting from the right.
    fn group_digits(&self, digits: &str) -> String {
        if !self.grouping {
            return digits.to_string();
        }

        let mut result = String::new();
        for (i, c) in digits.chars().rev().enumerate() {
            if i > 0 && i % 3 == 0 {
                result.extend(self.group_separator.chars().rev());
            }
            result.push(c);
        }

        result.chars().rev().collect()
    }
}

/// Format an operand string for display.
///
/// The integer part is grouped, the decimal part (if any) is reattached raw
/// after a `.`. An integer part that isn't a number, e.g. the empty string
/// in front of a freshly typed point, shows as `0`.
pub fn format_for_display(value: &str, format: &NumberFormat) -> String {
    let (int_part, decimal_part) = match value.split_once('.') {
        Some((int_part, decimal_part)) => (int_part, Some(decimal_part)),
        None => (value, None),
    };

    let int_display = match int_part.parse::<f64>() {
        Ok(int_value) if int_value.is_finite() => {
            let digits = format!("{:.0}", int_value.abs().trunc());
            let grouped = format.group_digits(&digits);
            if int_part.starts_with('-') {
                format!("-{}", grouped)
            } else {
                grouped
            }
        }
        // Too long for f64, but still a plain run of digits.
        _ if is_integer_literal(int_part) => {
            let digits = int_part.trim_start_matches('-').trim_start_matches('0');
            let grouped = format.group_digits(if digits.is_empty() { "0" } else { digits });
            if int_part.starts_with('-') {
                format!("-{}", grouped)
            } else {
                grouped
            }
        }
        _ => "0".to_string(),
    };

    match decimal_part {
        Some(decimal) => format!("{}.{}", int_display, decimal),
        None => int_display,
    }
}

/// An optional `-` followed by one or more ASCII digits.
fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Turn a computed value back into an operand string.
///
/// Uses the shortest decimal form that parses back to the same value, never
/// exponent notation. Negative zero becomes `0`.
pub fn stringify_result(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
