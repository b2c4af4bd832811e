//! Form shape validation.
//!
//! Everything here resolves before any storage access: a submission that
//! fails shape validation never reaches the credential store.

/// Validation error for a login or registration submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Login username or password is empty.
    MissingCredentials,
    /// A required registration field is empty.
    MissingFields,
    /// Password is shorter than 8 characters.
    PasswordTooShort,
    /// Password and confirmation differ.
    PasswordMismatch,
    /// Email lacks the minimal expected shape.
    InvalidEmail,
}

impl ValidationError {
    /// Get the user-facing error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "Please enter both username and password",
            Self::MissingFields => "All fields are required",
            Self::PasswordTooShort => "Password must be at least 8 characters",
            Self::PasswordMismatch => "Passwords do not match",
            Self::InvalidEmail => "Please enter a valid email address",
        }
    }

    /// Get the form field this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingCredentials | Self::MissingFields => "form",
            Self::PasswordTooShort => "password",
            Self::PasswordMismatch => "confirm_password",
            Self::InvalidEmail => "email",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Validate a login submission: both fields present.
///
/// # Errors
///
/// Returns the first failed check.
pub fn validate_login(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}

/// Validate a registration submission.
///
/// Checks run in form order and the first failure wins: required fields,
/// password length, confirmation match, email shape.
///
/// # Errors
///
/// Returns the first failed check.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    if username.is_empty() || email.is_empty() || password.is_empty() || confirm_password.is_empty()
    {
        return Err(ValidationError::MissingFields);
    }
    if password.chars().count() < 8 {
        return Err(ValidationError::PasswordTooShort);
    }
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if !has_email_shape(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Coarse email check: an `@` and a `.` anywhere in the string.
///
/// Deliberately weak. Tightening it would silently change the set of
/// accepted addresses for existing deployments, so it stays byte-for-byte
/// compatible with the historical behavior.
fn has_email_shape(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}
