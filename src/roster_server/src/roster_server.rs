use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
        request,
    },
    routing::{delete, get, post},
};
use roster_adapters::config::AllowedOrigins;
use roster_application::AccountService;
use roster_axum::routes::{
    delete_user, health, list_users, login, signup, update_settings, verify_token,
};
use roster_core::{AccountStore, PasswordHasher, TokenIssuer};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeFile,
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The roster HTTP API with every route wired to one [`AccountService`].
pub struct RosterServer {
    router: Router,
}

impl RosterServer {
    /// Build the router.
    ///
    /// `assets_dir` must contain `favicon.ico` for `GET /favicon.ico` to succeed; a missing
    /// file is served as 404.
    pub fn new<S, H, T>(service: AccountService<S, H, T>, assets_dir: String) -> Self
    where
        S: AccountStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
        T: TokenIssuer + Clone + 'static,
    {
        let favicon = ServeFile::new(format!("{assets_dir}/favicon.ico"));

        let router = Router::new()
            .route("/", get(health))
            .route("/signup", post(signup::<S, H, T>))
            .route("/login", post(login::<S, H, T>))
            .route("/users", get(list_users::<S, H, T>))
            .route("/update_settings", post(update_settings::<S, H, T>))
            .route("/delete_user", delete(delete_user::<S, H, T>))
            .route("/verify_token", get(verify_token::<S, H, T>))
            .route_service("/favicon.ico", favicon)
            .with_state(service);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert into a router that can be served directly or nested into another one.
    ///
    /// With `allowed_origins` set, browsers may call the API from exactly those origins.
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::DELETE])
                .allow_headers([CONTENT_TYPE, AUTHORIZATION])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        origin
                            .to_str()
                            .is_ok_and(|origin| allowed_origins.contains(origin))
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Roster listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
