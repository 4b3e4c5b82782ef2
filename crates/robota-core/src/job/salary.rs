//! Salary string helpers.
//!
//! Listing salaries are free-form display strings ("₴60 000 – ₴90 000").
//! Sorting and filtering need a comparable number, so `extract_salary` pulls
//! the first digit group out of the string, treating whitespace as a
//! thousands separator.

use once_cell::sync::Lazy;
use regex::Regex;

// Digits with interleaved whitespace, e.g. "60 000".
static SALARY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\d\s]+").unwrap());

/// Extracts the leading salary figure from a display string.
///
/// Returns 0 when the string is absent or carries no digits, so undisclosed
/// salaries sort below every disclosed one.
pub fn extract_salary(salary: Option<&str>) -> u64 {
    let Some(salary) = salary else {
        return 0;
    };
    let Some(matched) = SALARY_RE.find(salary) else {
        return 0;
    };
    let digits: String = matched
        .as_str()
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Formats a hryvnia amount the way listings display it: non-breaking-space
/// thousands grouping with a trailing ₴.
pub fn format_salary(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(c);
    }
    grouped.push('\u{a0}');
    grouped.push('₴');
    grouped
}
