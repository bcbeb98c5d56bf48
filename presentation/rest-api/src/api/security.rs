use std::sync::Arc;

use poem::Request;
use poem::http::header::AUTHORIZATION;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::Bearer;

use business::domain::shared::permissions::Principal;
use business::domain::user::errors::UserError;
use business::domain::user::services::{TokenKind, TokenService};

/// Access token issued by `POST /auth/login`
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "jwt_bearer_checker")]
pub struct JwtBearer(pub Principal);

async fn jwt_bearer_checker(req: &Request, bearer: Bearer) -> Option<Principal> {
    let Some(tokens) = req.data::<Arc<dyn TokenService>>() else {
        tracing::error!("Token service is not registered on the endpoint");
        return None;
    };

    match tokens.verify(&bearer.token, TokenKind::Access) {
        Ok(principal) => Some(principal),
        Err(e) => {
            tracing::warn!("Bearer authentication failed: {e}");
            None
        }
    }
}

/// Resolves the caller on endpoints where authentication is optional.
///
/// No `Authorization` header means an anonymous caller. A header that is
/// present but malformed or carries an invalid token is an error.
pub fn optional_principal(req: &Request) -> Result<Option<Principal>, UserError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .map(|value| value.to_str().map_err(|_| UserError::InvalidToken))
        .transpose()?;

    let Some(tokens) = req.data::<Arc<dyn TokenService>>() else {
        tracing::error!("Token service is not registered on the endpoint");
        return Err(UserError::InvalidToken);
    };

    principal_from_header(tokens.as_ref(), header)
}

fn principal_from_header(
    tokens: &dyn TokenService,
    header: Option<&str>,
) -> Result<Option<Principal>, UserError> {
    let Some(header) = header else {
        return Ok(None);
    };

    let token = header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(UserError::InvalidToken)?;

    tokens.verify(token, TokenKind::Access).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::value_objects::UserId;
    use chrono::Duration;
    use security::JwtTokenService;

    fn tokens() -> JwtTokenService {
        JwtTokenService::new("secret", Duration::minutes(5), Duration::days(1))
    }

    #[test]
    fn should_treat_missing_header_as_anonymous() {
        assert_eq!(principal_from_header(&tokens(), None).unwrap(), None);
    }

    #[test]
    fn should_resolve_principal_from_bearer_header() {
        let tokens = tokens();
        let principal = Principal::customer(UserId::generate());
        let token = tokens.issue(&principal, TokenKind::Access).unwrap();

        let resolved = principal_from_header(&tokens, Some(&format!("Bearer {token}"))).unwrap();

        assert_eq!(resolved, Some(principal));
    }

    #[test]
    fn should_reject_non_bearer_scheme() {
        let result = principal_from_header(&tokens(), Some("Basic dXNlcjpwYXNz"));

        assert!(matches!(result, Err(UserError::InvalidToken)));
    }

    #[test]
    fn should_reject_refresh_token_on_optional_endpoints() {
        let tokens = tokens();
        let token = tokens
            .issue(&Principal::customer(UserId::generate()), TokenKind::Refresh)
            .unwrap();

        let result = principal_from_header(&tokens, Some(&format!("Bearer {token}")));

        assert!(matches!(result, Err(UserError::InvalidToken)));
    }
}
