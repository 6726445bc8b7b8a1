// File: crates/linegraph-core/src/format.rs
// Summary: Tooltip text: en-US dollar amounts and short "MMM DD, h:mm A" dates.

use chrono::{DateTime, FixedOffset};
use num_format::{Locale, ToFormattedString};

/// Largest |epoch millis| a browser Date accepts; beyond it the date tooltip reads "Invalid date".
pub const MAX_TIMESTAMP_MS: i64 = 8_640_000_000_000_000;

/// Format `value` as US dollars: `$1,234.57`, `-$0.50`.
///
/// Rounds the shortest decimal form of `value` to cents, half away from zero, so
/// `1.005` reads `$1.01` even though its binary value sits just below the half.
pub fn format_usd(value: f64) -> String {
    if value.is_nan() {
        return "$NaN".to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}$∞");
    }

    // f64 Display never uses an exponent, so this is plain digits with an optional fraction.
    let (whole, cents) = round_to_cents(&value.abs().to_string());
    let whole = match whole.parse::<u128>() {
        Ok(n) => n.to_formatted_string(&Locale::en),
        // Beyond u128 the digits are left ungrouped.
        Err(_) => whole,
    };
    format!("{sign}${whole}.{cents:02}")
}

/// Split a plain decimal string into whole dollars and cents, rounding on the third fraction digit.
fn round_to_cents(decimal: &str) -> (String, u32) {
    let Some((whole, frac)) = decimal.split_once('.') else {
        return (decimal.to_string(), 0);
    };
    let digit = |i: usize| frac.as_bytes().get(i).map_or(0, |b| u32::from(b.wrapping_sub(b'0')));
    let cents = digit(0) * 10 + digit(1) + u32::from(digit(2) >= 5);
    if cents < 100 {
        (whole.to_string(), cents)
    } else {
        (carry_one(whole), 0)
    }
}

/// Add one to a string of decimal digits: `"199"` becomes `"200"`.
fn carry_one(digits: &str) -> String {
    let mut out: Vec<char> = digits.chars().collect();
    for c in out.iter_mut().rev() {
        if *c == '9' {
            *c = '0';
        } else {
            *c = char::from(*c as u8 + 1);
            return out.into_iter().collect();
        }
    }
    std::iter::once('1').chain(out).collect()
}

/// Format epoch milliseconds like `Jan 05, 3:07 PM` in the given offset.
pub fn format_timestamp(timestamp_ms: i64, offset: FixedOffset) -> String {
    if timestamp_ms.unsigned_abs() > MAX_TIMESTAMP_MS as u64 {
        return "Invalid date".to_string();
    }
    match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(utc) => utc.with_timezone(&offset).format("%b %d, %-I:%M %p").to_string(),
        None => "Invalid date".to_string(),
    }
}
