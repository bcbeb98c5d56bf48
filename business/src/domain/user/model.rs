use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::UserError;
use crate::domain::shared::permissions::Principal;
use crate::domain::shared::value_objects::UserId;

pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub is_staff: bool,
    pub date_joined: DateTime<Utc>,
}

pub struct NewUserProps {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks a plain-text password before it is hashed.
pub fn validate_password(password: &str, confirmation: &str) -> Result<(), UserError> {
    if password != confirmation {
        return Err(UserError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserError::PasswordTooShort);
    }
    Ok(())
}

impl User {
    pub fn new(props: NewUserProps) -> Result<Self, UserError> {
        let username = props.username.trim().to_string();
        if username.is_empty() {
            return Err(UserError::UsernameEmpty);
        }
        let email = props.email.trim().to_lowercase();
        if !is_valid_email(&email) {
            return Err(UserError::InvalidEmail);
        }
        if props.first_name.trim().is_empty() {
            return Err(UserError::FirstNameEmpty);
        }
        if props.last_name.trim().is_empty() {
            return Err(UserError::LastNameEmpty);
        }

        Ok(Self {
            id: UserId::generate(),
            username,
            email,
            first_name: props.first_name.trim().to_string(),
            last_name: props.last_name.trim().to_string(),
            password_hash: props.password_hash,
            is_staff: false,
            date_joined: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: UserId,
        username: String,
        email: String,
        first_name: String,
        last_name: String,
        password_hash: String,
        is_staff: bool,
        date_joined: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            first_name,
            last_name,
            password_hash,
            is_staff,
            date_joined,
        }
    }

    pub fn principal(&self) -> Principal {
        Principal::new(self.id, self.is_staff)
    }

    pub fn rename(&mut self, username: String) -> Result<(), UserError> {
        let username = username.trim().to_string();
        if username.is_empty() {
            return Err(UserError::UsernameEmpty);
        }
        self.username = username;
        Ok(())
    }

    pub fn set_first_name(&mut self, first_name: String) -> Result<(), UserError> {
        if first_name.trim().is_empty() {
            return Err(UserError::FirstNameEmpty);
        }
        self.first_name = first_name.trim().to_string();
        Ok(())
    }

    pub fn set_last_name(&mut self, last_name: String) -> Result<(), UserError> {
        if last_name.trim().is_empty() {
            return Err(UserError::LastNameEmpty);
        }
        self.last_name = last_name.trim().to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> NewUserProps {
        NewUserProps {
            username: "  jdoe ".to_string(),
            email: "John.Doe@Example.com".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            password_hash: "$argon2id$hash".to_string(),
        }
    }

    #[test]
    fn should_create_user_with_normalized_fields() {
        let user = User::new(props()).unwrap();

        assert_eq!(user.username, "jdoe");
        assert_eq!(user.email, "john.doe@example.com");
        assert!(!user.is_staff);
    }

    #[test]
    fn should_reject_invalid_email() {
        let result = User::new(NewUserProps {
            email: "john.example.com".to_string(),
            ..props()
        });

        assert!(matches!(result.unwrap_err(), UserError::InvalidEmail));
    }

    #[test]
    fn should_reject_blank_username() {
        let result = User::new(NewUserProps {
            username: "   ".to_string(),
            ..props()
        });

        assert!(matches!(result.unwrap_err(), UserError::UsernameEmpty));
    }

    #[test]
    fn should_reject_missing_last_name() {
        let result = User::new(NewUserProps {
            last_name: String::new(),
            ..props()
        });

        assert!(matches!(result.unwrap_err(), UserError::LastNameEmpty));
    }

    #[test]
    fn should_reject_mismatched_passwords() {
        let result = validate_password("correct-horse", "correct-house");
        assert!(matches!(result.unwrap_err(), UserError::PasswordMismatch));
    }

    #[test]
    fn should_reject_short_password() {
        let result = validate_password("short", "short");
        assert!(matches!(result.unwrap_err(), UserError::PasswordTooShort));
    }

    #[test]
    fn should_accept_matching_long_password() {
        assert!(validate_password("correct-horse", "correct-horse").is_ok());
    }

    #[test]
    fn should_expose_principal_with_staff_flag() {
        let mut user = User::new(props()).unwrap();
        user.is_staff = true;

        let principal = user.principal();
        assert_eq!(principal.user_id, user.id);
        assert!(principal.is_staff);
    }
}
