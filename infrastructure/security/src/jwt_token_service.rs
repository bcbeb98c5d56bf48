use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::shared::permissions::Principal;
use business::domain::shared::value_objects::UserId;
use business::domain::user::errors::UserError;
use business::domain::user::services::{TokenKind, TokenService};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    staff: bool,
    kind: String,
    iat: i64,
    exp: i64,
}

/// HS256 bearer tokens carrying the caller's id, staff flag and token kind.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl JwtTokenService {
    pub fn new(secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    fn ttl(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, principal: &Principal, kind: TokenKind) -> Result<String, UserError> {
        let now = Utc::now();
        let claims = Claims {
            sub: principal.user_id.to_string(),
            staff: principal.is_staff,
            kind: kind.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl(kind)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(target: "Backend -- ", "Failed to sign {} token: {}", kind, e);
            UserError::TokenIssueFailed
        })
    }

    fn verify(&self, token: &str, expected: TokenKind) -> Result<Principal, UserError> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!(target: "Backend -- ", "Rejected bearer token: {}", e);
            UserError::InvalidToken
        })?;
        let claims = data.claims;

        let kind = claims
            .kind
            .parse::<TokenKind>()
            .map_err(|_| UserError::InvalidToken)?;
        if kind != expected {
            return Err(UserError::InvalidToken);
        }

        let user_id = claims
            .sub
            .parse::<Uuid>()
            .map_err(|_| UserError::InvalidToken)?;

        Ok(Principal::new(UserId::new(user_id), claims.staff))
    }
}
