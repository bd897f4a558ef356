//! Password strength rule for newly created accounts.

pub const MIN_PASSWORD_LEN: usize = 6;

pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordCheck {
    /// Nothing typed yet; no message is shown.
    Empty,
    TooShort,
    Valid,
}

impl PasswordCheck {
    /// Message shown under the password field, if any.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::TooShort => Some(PASSWORD_TOO_SHORT),
            Self::Empty | Self::Valid => None,
        }
    }

    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }
}

/// Length is counted in characters, so multi-byte input is not penalised.
pub fn check_password(candidate: &str) -> PasswordCheck {
    match candidate.chars().count() {
        0 => PasswordCheck::Empty,
        n if n < MIN_PASSWORD_LEN => PasswordCheck::TooShort,
        _ => PasswordCheck::Valid,
    }
}
