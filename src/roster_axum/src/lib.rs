//! Axum HTTP surface for the roster account service.
//!
//! Handlers are generic over the store, hasher and token issuer and take an
//! [`AccountService`](roster_application::AccountService) as router state.
//!
//! ```ignore
//! use axum::{Router, routing::post};
//! use roster_axum::routes;
//!
//! let app = Router::new()
//!     .route("/signup", post(routes::signup::<S, H, T>))
//!     .with_state(account_service);
//! ```

pub mod error;
pub mod routes;

pub use error::ApiError;
