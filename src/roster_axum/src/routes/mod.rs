//! Route handlers. Each one decodes its request, calls the account service and encodes
//! the result; failures go through [`ApiError`](crate::ApiError).

use secrecy::Secret;

pub mod delete_user;
pub mod health;
pub mod login;
pub mod signup;
pub mod update_settings;
pub mod users;
pub mod verify_token;

pub use delete_user::delete_user;
pub use health::health;
pub use login::login;
pub use signup::signup;
pub use update_settings::update_settings;
pub use users::list_users;
pub use verify_token::verify_token;

/// Missing or `null` credentials become empty strings, which the use cases reject.
fn credentials(
    username: Option<String>,
    password: Option<Secret<String>>,
) -> (String, Secret<String>) {
    (
        username.unwrap_or_default(),
        password.unwrap_or_else(|| Secret::new(String::new())),
    )
}
