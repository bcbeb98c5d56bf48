use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use business::domain::user::errors::UserError;
use business::domain::user::services::PasswordHasher;

/// Argon2id hasher with the crate's default parameters.
#[derive(Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, UserError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                tracing::error!(target: "Backend -- ", "Argon2 hashing failed: {}", e);
                UserError::HashingFailed
            })
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, UserError> {
        let parsed = PasswordHash::new(password_hash).map_err(|e| {
            tracing::error!(target: "Backend -- ", "Stored password hash is malformed: {}", e);
            UserError::HashingFailed
        })?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => {
                tracing::error!(target: "Backend -- ", "Argon2 verification failed: {}", e);
                Err(UserError::HashingFailed)
            }
        }
    }
}
