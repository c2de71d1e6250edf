use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use roster_core::{AccountId, TokenError, TokenIssuer};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct JwtConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

impl JwtConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account id, as a string per RFC 7519.
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

/// HS256 bearer tokens signed with a process-wide secret.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    config: JwtConfig,
}

impl JwtTokenIssuer {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, account_id: AccountId) -> Result<String, TokenError> {
        generate_auth_token(
            account_id,
            self.config.token_ttl_in_seconds,
            self.config.as_bytes(),
        )
    }

    fn validate(&self, token: &str) -> Result<AccountId, TokenError> {
        let claims = validate_auth_token(token, self.config.as_bytes())?;

        claims
            .sub
            .parse::<i64>()
            .map(AccountId::new)
            .map_err(|_| TokenError::InvalidToken)
    }
}

// Create JWT auth token
pub fn generate_auth_token(
    account_id: AccountId,
    token_ttl_seconds: i64,
    secret: &[u8],
) -> Result<String, TokenError> {
    let delta = chrono::Duration::try_seconds(token_ttl_seconds).ok_or(
        TokenError::UnexpectedError("Failed to create auth token duration".to_string()),
    )?;

    let now = Utc::now();

    // Create JWT expiration time
    let exp = now
        .checked_add_signed(delta)
        .ok_or(TokenError::UnexpectedError(
            "Duration out of range".to_string(),
        ))?
        .timestamp();

    // Cast to usize, which is what Claims expects
    let exp: usize = exp
        .try_into()
        .map_err(|_| TokenError::UnexpectedError("Failed to cast i64 to usize".to_string()))?;
    let iat: usize = now
        .timestamp()
        .try_into()
        .map_err(|_| TokenError::UnexpectedError("Failed to cast i64 to usize".to_string()))?;

    let claims = Claims {
        sub: account_id.to_string(),
        iat,
        exp,
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))
        .map_err(|e| TokenError::UnexpectedError(e.to_string()))
}

// Check signature and expiry by decoding with the JWT secret
pub fn validate_auth_token(token: &str, secret: &[u8]) -> Result<Claims, TokenError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::debug!(error = %e, "rejected bearer token");
        TokenError::InvalidToken
    })
}
