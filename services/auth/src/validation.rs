//! Input validation for the login and registration forms
//!
//! The session store trusts its inputs; these checks run before a form is
//! submitted to it.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use crate::models::LoginCredentials;

/// Reasons a form is rejected before submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("all fields are required")]
    MissingFields,

    #[error("invalid email format")]
    InvalidEmail,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("password must be at least {min} characters long")]
    PasswordTooShort { min: usize },
}

/// Raw login form input
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Check that both fields are filled in; trims the email
    pub fn validate(&self) -> Result<LoginCredentials, ValidationError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.trim().is_empty() {
            return Err(ValidationError::MissingFields);
        }

        Ok(LoginCredentials {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Raw registration form input
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Check the form; trims the email, leaves the password untouched
    pub fn validate(&self, min_password_length: usize) -> Result<LoginCredentials, ValidationError> {
        let email = self.email.trim();
        if email.is_empty()
            || self.password.trim().is_empty()
            || self.confirm_password.trim().is_empty()
        {
            return Err(ValidationError::MissingFields);
        }

        validate_email(email)?;

        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        if self.password.chars().count() < min_password_length {
            return Err(ValidationError::PasswordTooShort {
                min: min_password_length,
            });
        }

        Ok(LoginCredentials {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.len() > 254 {
        return Err(ValidationError::InvalidEmail);
    }

    static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    let regex = EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok());

    match regex {
        Some(regex) if regex.is_match(email) => Ok(()),
        _ => Err(ValidationError::InvalidEmail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn registration(email: &str, password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn login_form_trims_email_only() {
        let form = LoginForm {
            email: "  test@example.com ".to_string(),
            password: " password123".to_string(),
        };
        let credentials = form.validate().unwrap();
        assert_eq!(credentials.email, "test@example.com");
        assert_eq!(credentials.password, " password123");
    }

    #[rstest]
    #[case("", "password123")]
    #[case("   ", "password123")]
    #[case("test@example.com", "  ")]
    fn login_form_requires_both_fields(#[case] email: &str, #[case] password: &str) {
        let form = LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        };
        assert_eq!(form.validate().unwrap_err(), ValidationError::MissingFields);
    }

    #[rstest]
    #[case(registration("", "secret1", "secret1"), ValidationError::MissingFields)]
    #[case(registration("a@b.tw", "secret1", " "), ValidationError::MissingFields)]
    #[case(registration("not-an-email", "secret1", "secret1"), ValidationError::InvalidEmail)]
    #[case(registration("a@b.tw", "secret1", "secret2"), ValidationError::PasswordMismatch)]
    #[case(registration("a@b.tw", "abc", "abc"), ValidationError::PasswordTooShort { min: 6 })]
    fn registration_form_rejections(
        #[case] form: RegistrationForm,
        #[case] expected: ValidationError,
    ) {
        assert_eq!(form.validate(6).unwrap_err(), expected);
    }

    #[test]
    fn registration_password_length_counts_characters() {
        // six CJK characters are six characters, not eighteen bytes
        let form = registration("a@b.tw", "流浪動物之家", "流浪動物之家");
        assert!(form.validate(6).is_ok());
        assert!(form.validate(7).is_err());
    }

    #[test]
    fn valid_registration_is_accepted() {
        let credentials = registration(" new@example.com ", "secret1", "secret1")
            .validate(6)
            .unwrap();
        assert_eq!(credentials.email, "new@example.com");
    }
}
