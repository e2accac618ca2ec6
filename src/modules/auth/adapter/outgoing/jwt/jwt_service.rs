use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use std::fmt;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};

use super::jwt_config::JwtConfig;

/// Validates access tokens issued by the external identity service. The
/// shared secret is the only coupling between the two deployments.
#[derive(Clone)]
pub struct JwtTokenService {
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService").finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());
        Self { decoding_key }
    }
}

impl TokenProvider for JwtTokenService {
    /// Verify and decode a token
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn service() -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret_key: SECRET.to_string(),
            issuer: "CVStack".to_string(),
        })
    }

    fn mint(claims: &TokenClaims, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn valid_claims(user_id: Uuid) -> TokenClaims {
        let now = Utc::now().timestamp();
        TokenClaims {
            sub: user_id,
            exp: now + 600,
            iat: now,
            nbf: now,
            token_type: "access".to_string(),
        }
    }

    #[test]
    fn accepts_a_valid_access_token() {
        let user_id = Uuid::new_v4();
        let token = mint(&valid_claims(user_id), SECRET);

        let claims = service().verify_token(&token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn rejects_an_expired_token() {
        let mut claims = valid_claims(Uuid::new_v4());
        claims.exp = Utc::now().timestamp() - 3600;
        let token = mint(&claims, SECRET);

        assert!(matches!(
            service().verify_token(&token),
            Err(TokenError::TokenExpired)
        ));
    }

    #[test]
    fn rejects_a_token_signed_with_another_secret() {
        let token = mint(
            &valid_claims(Uuid::new_v4()),
            "ffffffffffffffffffffffffffffffff",
        );

        assert!(matches!(
            service().verify_token(&token),
            Err(TokenError::InvalidSignature)
        ));
    }
}
