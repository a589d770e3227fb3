//! Input validation predicates
//!
//! Pure functions, no side effects. Used by account registration before a
//! password is hashed or a user is persisted.

use crate::error::{Result, TuneError};

/// Minimum password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// Punctuation allowed in passwords besides ASCII letters and digits
const PASSWORD_SYMBOLS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];

/// Check that `email` looks like `local@domain.tld`
///
/// The local part and the domain must be non-empty and free of whitespace
/// and `@`. The domain must contain a `.` that is neither its first nor its
/// last character.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let clean = |part: &str| !part.is_empty() && !part.chars().any(|c| c == '@' || c.is_whitespace());
    if !clean(local) || !clean(domain) {
        return false;
    }

    // Some dot must have at least one character on each side
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Check password strength
///
/// At least eight characters, one ASCII uppercase letter and one digit;
/// only ASCII letters, digits and `@$!%*?&` are accepted.
pub fn is_valid_password(password: &str) -> bool {
    let allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(&c));

    allowed
        && password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Validate a registration's email and password, email first
pub fn validate_credentials(email: &str, password: &str) -> Result<()> {
    if !is_valid_email(email) {
        return Err(TuneError::InvalidEmail);
    }
    if !is_valid_password(password) {
        return Err(TuneError::WeakPassword);
    }
    Ok(())
}
