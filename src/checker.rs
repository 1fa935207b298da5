// src/checker.rs
use std::fmt;

/// The special characters the composition rules count.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Minimum acceptable password length, in characters.
pub const MIN_LENGTH: usize = 8;

/// One reason a candidate fails the composition policy. Variants are listed
/// in the order the rules run, which is also the order results come back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    TooShort,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSpecial,
}

impl Violation {
    /// User-facing message text. Display glyphs are the caller's job.
    pub fn message(&self) -> &'static str {
        match self {
            Violation::TooShort => "Password should be at least 8 characters long.",
            Violation::MissingUppercase => {
                "Password should contain at least one uppercase letter."
            }
            Violation::MissingLowercase => {
                "Password should contain at least one lowercase letter."
            }
            Violation::MissingDigit => "Password should contain at least one digit.",
            Violation::MissingSpecial => {
                "Password should contain at least one special character."
            }
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Returns true if the character belongs to the fixed special set.
pub fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

/// Run a candidate through every composition rule.
///
/// Nothing short-circuits, so the caller always sees the complete list of
/// problems at once. An empty candidate fails all five rules. Length is
/// counted in characters, not bytes.
pub fn check_password(password: &str) -> Vec<Violation> {
    let mut violations = Vec::new();

    if password.chars().count() < MIN_LENGTH {
        violations.push(Violation::TooShort);
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        violations.push(Violation::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        violations.push(Violation::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push(Violation::MissingDigit);
    }
    if !password.chars().any(is_special) {
        violations.push(Violation::MissingSpecial);
    }

    violations
}
