//! # Shared Utility Functions
//!
//! Display helpers used by the core components and the browser app.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - Alias for `format_address` with default parameters
//!
//! ## Amount Formatting
//!
//! - [`format_amount`] - Group the integer part and keep 2 to 7 fraction digits,
//!   working on the decimal string so no precision is lost
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_address, format_amount};
//!
//! let address = "GAAZI4TCR3TY5OJHCTJC2A4QSY6CJWJH5IAJTGKIN2ER7LBNVKOCCWN7";
//! assert_eq!(format_address(address, 4, 4), "GAAZ...CWN7");
//! assert_eq!(format_amount("10000.0000000"), "10,000.00");
//! ```

/// Maximum fraction digits the ledger tracks (1 stroop = 0.0000001 XLM).
pub const MAX_FRACTION_DIGITS: usize = 7;

/// Minimum fraction digits shown for amounts.
pub const MIN_FRACTION_DIGITS: usize = 2;

/// Format an account address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "GAAZI4TCR3TY5OJHCTJC2A4QSY6CJWJH5IAJTGKIN2ER7LBNVKOCCWN7";
/// assert_eq!(format_address(addr, 4, 4), "GAAZ...CWN7");
/// assert_eq!(format_address(addr, 6, 6), "GAAZI4...OCCWN7");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    let len = chars.len();

    if len <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[len - suffix_len..].iter().collect();

    format!("{}...{}", prefix, suffix)
}

/// Format an address with default 4-character prefix and suffix.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "GAAZI4TCR3TY5OJHCTJC2A4QSY6CJWJH5IAJTGKIN2ER7LBNVKOCCWN7";
/// assert_eq!(truncate_address(addr), "GAAZ...CWN7");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

/// Format a decimal amount string for display.
///
/// The integer part gets comma separators, trailing zeros are trimmed from the
/// fraction, which is then padded to [`MIN_FRACTION_DIGITS`] and cut at
/// [`MAX_FRACTION_DIGITS`]. Input that is not a plain decimal number is
/// returned unchanged.
///
/// ```rust
/// use shared::utils::format_amount;
///
/// assert_eq!(format_amount("1234567.5000000"), "1,234,567.50");
/// assert_eq!(format_amount("0.0000001"), "0.0000001");
/// assert_eq!(format_amount("5"), "5.00");
/// assert_eq!(format_amount("n/a"), "n/a");
/// ```
pub fn format_amount(value: &str) -> String {
    let trimmed = value.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (integer_part, fraction_part) = match digits.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (digits, ""),
    };

    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (integer_part.is_empty() && fraction_part.is_empty())
        || !is_digits(integer_part)
        || !is_digits(fraction_part)
    {
        return value.to_string();
    }

    let integer_part = integer_part.trim_start_matches('0');
    let integer_part = if integer_part.is_empty() { "0" } else { integer_part };

    let mut fraction: String = fraction_part
        .trim_end_matches('0')
        .chars()
        .take(MAX_FRACTION_DIGITS)
        .collect();
    while fraction.len() < MIN_FRACTION_DIGITS {
        fraction.push('0');
    }

    // Add commas to integer part
    let mut grouped = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}
