// src/masking.rs

/// Number of trailing characters the mask leaves visible.
const VISIBLE_TAIL: usize = 3;

/// Replace all but the last three characters with asterisks.
///
/// Candidates of three characters or fewer come back fully masked. Counting
/// is per character, so multi-byte input is never split mid-character.
pub fn mask_password(password: &str) -> String {
    let chars: Vec<char> = password.chars().collect();
    if chars.len() > VISIBLE_TAIL {
        let hidden = chars.len() - VISIBLE_TAIL;
        let tail: String = chars[hidden..].iter().collect();
        format!("{}{}", "*".repeat(hidden), tail)
    } else {
        "*".repeat(chars.len())
    }
}
