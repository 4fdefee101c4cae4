//! Operator input validation: password composition, confirmation, app names.

use thiserror::Error;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Longest DNS label a hosting subdomain may use.
const MAX_APP_NAME_LENGTH: usize = 63;

/// Reason a password was rejected. Shown verbatim to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Password must be at least {min} characters long")]
    TooShort { min: usize },
    #[error("Password must contain uppercase letters")]
    MissingUppercase,
    #[error("Password must contain lowercase letters")]
    MissingLowercase,
    #[error("Password must contain numbers")]
    MissingDigit,
}

/// Confirmation entry differs from the first entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Passwords don't match. Try again.")]
pub struct InputMismatch;

/// Validates password composition.
///
/// Checks, in order:
/// - At least [`MIN_PASSWORD_LENGTH`] characters
/// - An ASCII uppercase letter
/// - An ASCII lowercase letter
/// - An ASCII digit
///
/// Special characters are allowed but not required.
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordError::TooShort { min: MIN_PASSWORD_LENGTH });
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordError::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordError::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordError::MissingDigit);
    }
    Ok(())
}

/// Both masked entries must be byte-equal.
pub fn confirm_password(password: &str, confirmation: &str) -> Result<(), InputMismatch> {
    if password.as_bytes() == confirmation.as_bytes() { Ok(()) } else { Err(InputMismatch) }
}

/// Validates an app name as a single DNS label.
///
/// Returns the reason on failure so the prompter can show it.
pub fn validate_app_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("app name cannot be empty".to_string());
    }
    if name.len() > MAX_APP_NAME_LENGTH {
        return Err(format!("app name must be at most {} characters", MAX_APP_NAME_LENGTH));
    }
    if name.starts_with('-') || name.ends_with('-') {
        return Err("app name cannot start or end with a hyphen".to_string());
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err("app name may only contain letters, digits, and hyphens".to_string());
    }
    Ok(())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn short_inputs_are_always_rejected(input in ".{0,7}") {
            prop_assume!(input.chars().count() < MIN_PASSWORD_LENGTH);
            prop_assert_eq!(validate_password(&input), Err(PasswordError::TooShort { min: MIN_PASSWORD_LENGTH }));
        }

        #[test]
        fn inputs_without_digits_are_rejected(input in "[A-Z][a-z][A-Za-z!@#]{6,20}") {
            prop_assert_eq!(validate_password(&input), Err(PasswordError::MissingDigit));
        }

        #[test]
        fn three_class_inputs_are_accepted(input in "[A-Z][a-z][0-9][A-Za-z0-9]{5,20}") {
            prop_assert_eq!(validate_password(&input), Ok(()));
        }
    }
}
