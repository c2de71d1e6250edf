use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roster_application::{
    ChangePasswordError, DeleteAccountError, ListAccountsError, LoginError, SignupError,
    UpdateSettingsError,
};
use roster_core::{AccountStoreError, PasswordHasherError, TokenError};
use serde_json::json;
use thiserror::Error;

/// Every failure an HTTP handler can report.
///
/// Existing clients read either a `message` or an `error` key depending on the route, so
/// each variant picks its own body key.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    MissingFields(String),

    #[error("Username is required")]
    MissingUsername,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("Missing token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

enum BodyKey {
    Message,
    Error,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, key) = match self {
            ApiError::MissingFields(_) => (StatusCode::BAD_REQUEST, BodyKey::Message),
            ApiError::MissingUsername => (StatusCode::BAD_REQUEST, BodyKey::Error),
            ApiError::UserAlreadyExists => (StatusCode::CONFLICT, BodyKey::Message),
            ApiError::InvalidCredentials | ApiError::MissingToken | ApiError::InvalidToken => {
                (StatusCode::UNAUTHORIZED, BodyKey::Error)
            }
            ApiError::UserNotFound => (StatusCode::NOT_FOUND, BodyKey::Message),
            ApiError::UnexpectedError(_) => (StatusCode::INTERNAL_SERVER_ERROR, BodyKey::Error),
        };

        let text = match &self {
            ApiError::UnexpectedError(detail) => {
                tracing::error!(error = %detail, "request failed");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = match key {
            BodyKey::Message => json!({ "message": text }),
            BodyKey::Error => json!({ "error": text }),
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<AccountStoreError> for ApiError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::UsernameTaken => ApiError::UserAlreadyExists,
            AccountStoreError::AccountNotFound => ApiError::UserNotFound,
            AccountStoreError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<PasswordHasherError> for ApiError {
    fn from(error: PasswordHasherError) -> Self {
        ApiError::UnexpectedError(error.to_string())
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::InvalidToken => ApiError::InvalidToken,
            TokenError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<SignupError> for ApiError {
    fn from(error: SignupError) -> Self {
        match error {
            SignupError::MissingFields => ApiError::MissingFields(error.to_string()),
            SignupError::UsernameTaken => ApiError::UserAlreadyExists,
            SignupError::AccountStoreError(e) => e.into(),
            SignupError::PasswordHasherError(e) => e.into(),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => ApiError::InvalidCredentials,
            LoginError::AccountStoreError(e) => ApiError::UnexpectedError(e.to_string()),
            LoginError::PasswordHasherError(e) => e.into(),
            LoginError::TokenError(e) => ApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<ListAccountsError> for ApiError {
    fn from(error: ListAccountsError) -> Self {
        match error {
            ListAccountsError::AccountStoreError(e) => ApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<UpdateSettingsError> for ApiError {
    fn from(error: UpdateSettingsError) -> Self {
        match error {
            UpdateSettingsError::MissingFields => ApiError::MissingFields(error.to_string()),
            UpdateSettingsError::AccountNotFound => ApiError::UserNotFound,
            UpdateSettingsError::AccountStoreError(e) => e.into(),
        }
    }
}

impl From<DeleteAccountError> for ApiError {
    fn from(error: DeleteAccountError) -> Self {
        match error {
            DeleteAccountError::MissingUsername => ApiError::MissingUsername,
            DeleteAccountError::AccountNotFound => ApiError::UserNotFound,
            DeleteAccountError::AccountStoreError(e) => e.into(),
        }
    }
}

impl From<ChangePasswordError> for ApiError {
    fn from(error: ChangePasswordError) -> Self {
        match error {
            ChangePasswordError::MissingFields => ApiError::MissingFields(error.to_string()),
            ChangePasswordError::InvalidCredentials => ApiError::InvalidCredentials,
            ChangePasswordError::AccountStoreError(e) => e.into(),
            ChangePasswordError::PasswordHasherError(e) => e.into(),
        }
    }
}
