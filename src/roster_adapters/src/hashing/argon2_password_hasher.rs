use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{self, PasswordHasher as _, PasswordVerifier as _, SaltString, rand_core},
};
use roster_core::{Password, PasswordHash, PasswordHasher, PasswordHasherError};
use secrecy::{ExposeSecret, Secret};

const MEMORY_COST_KIB: u32 = 15000;
const ITERATIONS: u32 = 2;
const PARALLELISM: u32 = 1;

/// Argon2id hasher producing PHC strings.
///
/// Both operations run on tokio's blocking pool with the caller's span re-entered, and
/// always run to completion.
#[derive(Debug, Default, Clone)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

fn argon2() -> Result<Argon2<'static>, PasswordHasherError> {
    let params = Params::new(MEMORY_COST_KIB, ITERATIONS, PARALLELISM, None)
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: Password) -> Result<PasswordHash, PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || -> Result<PasswordHash, PasswordHasherError> {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                argon2()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| PasswordHash::new(Secret::from(h.to_string())))
                    .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        candidate: Password,
        expected: PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || -> Result<bool, PasswordHasherError> {
                let expected = match password_hash::PasswordHash::new(
                    expected.as_ref().expose_secret(),
                ) {
                    Ok(expected) => expected,
                    Err(e) => {
                        tracing::warn!(error = %e, "stored hash is not a valid PHC string");
                        return Ok(false);
                    }
                };

                Ok(argon2()?
                    .verify_password(candidate.as_ref().expose_secret().as_bytes(), &expected)
                    .is_ok())
            })
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?
    }
}
