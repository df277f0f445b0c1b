//! HS256 access tokens for the in-memory backend.

use digitalpro_core::types::RowId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default access token lifetime in minutes.
pub const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 60;

/// Claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the auth user id.
    pub sub: RowId,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
    /// Unique token id so two tokens issued in the same second differ.
    pub jti: String,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_mins: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_expiry_mins: DEFAULT_ACCESS_EXPIRY_MINS,
        }
    }

    pub fn expires_in_secs(&self) -> i64 {
        self.access_token_expiry_mins * 60
    }
}

pub fn generate_access_token(
    user_id: RowId,
    email: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        exp: now + config.expires_in_secs(),
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validates signature and expiry.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

#[derive(Deserialize)]
struct ExpiryClaim {
    exp: i64,
}

/// Seconds until `token` expires, read from its `exp` claim without checking
/// the signature. `None` when the token is not a JWT or carries no `exp`.
///
/// Only for cache bookkeeping; authorization still goes through the auth
/// service.
pub fn remaining_lifetime_secs(token: &str) -> Option<i64> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;

    let data = decode::<ExpiryClaim>(token, &DecodingKey::from_secret(&[]), &validation).ok()?;
    Some(data.claims.exp - chrono::Utc::now().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig::new("test-secret-that-is-long-enough-for-hmac")
    }

    #[test]
    fn generated_token_validates() {
        let config = test_config();
        let id = Uuid::new_v4();
        let token = generate_access_token(id, "ops@digitalpro.test", &config)
            .expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.sub, id);
        assert_eq!(claims.email, "ops@digitalpro.test");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_fails() {
        let config = test_config();
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            email: "late@digitalpro.test".into(),
            exp: now - 300,
            iat: now - 600,
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn remaining_lifetime_reads_exp_from_any_token() {
        let mut config = test_config();
        let token = generate_access_token(Uuid::new_v4(), "a@b.test", &config).unwrap();
        let remaining = remaining_lifetime_secs(&token).unwrap();
        assert!((3590..=3600).contains(&remaining), "got {remaining}");

        config.access_token_expiry_mins = -5;
        let stale = generate_access_token(Uuid::new_v4(), "a@b.test", &config).unwrap();
        assert!(remaining_lifetime_secs(&stale).unwrap() <= -299);

        assert_eq!(remaining_lifetime_secs("not-a-jwt"), None);
    }

    #[test]
    fn different_secret_fails() {
        let token = generate_access_token(Uuid::new_v4(), "a@b.test", &JwtConfig::new("alpha"))
            .expect("token generation should succeed");
        assert!(validate_token(&token, &JwtConfig::new("bravo")).is_err());
    }
}
