use super::errors::UserError;
use crate::domain::shared::permissions::Principal;

/// One-way password hashing.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, UserError>;
    /// Returns `Ok(false)` on a mismatch; errors are reserved for malformed hashes.
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, UserError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Access => write!(f, "access"),
            TokenKind::Refresh => write!(f, "refresh"),
        }
    }
}

impl std::str::FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "access" => Ok(TokenKind::Access),
            "refresh" => Ok(TokenKind::Refresh),
            _ => Err(format!("Invalid token kind: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Issues and verifies signed bearer tokens.
pub trait TokenService: Send + Sync {
    fn issue(&self, principal: &Principal, kind: TokenKind) -> Result<String, UserError>;
    /// Fails with `UserError::InvalidToken` when the signature, expiry or kind do not match.
    fn verify(&self, token: &str, expected: TokenKind) -> Result<Principal, UserError>;
}
