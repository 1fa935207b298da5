// src/estimator.rs
use crate::checker::is_special;

/// Assumed attacker speed: one trillion guesses per second.
pub const GUESSES_PER_SECOND: f64 = 1.0e12;

/// Label shown when the search space overflows anything representable.
pub const UNCRACKABLE_LABEL: &str = "effectively uncrackable";

// Unit thresholds in seconds. 3.154e9 seconds is one hundred years, so the
// ladder tops out in centuries.
const MINUTE: f64 = 60.0;
const HOUR: f64 = 3600.0;
const DAY: f64 = 86400.0;
const YEAR: f64 = 31_536_000.0;
const CENTURY: f64 = 3.154e9;

/// Alphabet size for the character classes present in the candidate:
/// 26 lowercase, 26 uppercase, 10 digits and 32 specials. A class counts
/// in full as soon as one character from it appears.
pub fn alphabet_size(password: &str) -> u32 {
    let mut size = 0;
    if password.chars().any(|c| c.is_lowercase()) {
        size += 26;
    }
    if password.chars().any(|c| c.is_uppercase()) {
        size += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        size += 10;
    }
    if password.chars().any(is_special) {
        size += 32;
    }
    size
}

/// Seconds a brute-force attacker needs to walk the whole search space.
///
/// The space is alphabet^length in f64, which goes to infinity for very
/// long candidates instead of failing.
pub fn crack_seconds(password: &str) -> f64 {
    let length = password.chars().count() as f64;
    let combinations = f64::from(alphabet_size(password)).powf(length);
    combinations / GUESSES_PER_SECOND
}

/// Format a duration in the coarsest unit where the value is at least one,
/// with two decimals. Non-finite input gets a fixed sentinel label rather
/// than whatever the float formatter would print.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() {
        return UNCRACKABLE_LABEL.to_string();
    }

    if seconds < MINUTE {
        format!("{:.2} seconds", seconds)
    } else if seconds < HOUR {
        format!("{:.2} minutes", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{:.2} hours", seconds / HOUR)
    } else if seconds < YEAR {
        format!("{:.2} days", seconds / DAY)
    } else if seconds < CENTURY {
        format!("{:.2} years", seconds / YEAR)
    } else {
        format!("{:.2} centuries", seconds / CENTURY)
    }
}

/// Estimated wall-clock time to crack the candidate, ready for display.
pub fn estimate_crack_time(password: &str) -> String {
    format_duration(crack_seconds(password))
}
