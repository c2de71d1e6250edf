use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{BASE_CONFIG_FILE, env, prod};
use crate::tokens::JwtConfig;

#[derive(Debug, Deserialize)]
pub struct RosterSettings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub auth: AuthSettings,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
    pub assets_dir: String,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    pub url: Secret<String>,
}

#[derive(Debug, Deserialize)]
pub struct AuthSettings {
    pub jwt: JwtSettings,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Deserialize)]
pub struct JwtSettings {
    pub secret: Secret<String>,
    pub time_to_live: i64,
}

/// Origins allowed to call the API from a browser. Empty means no CORS layer.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl RosterSettings {
    /// Load settings from `config/base.json` (optional) overlaid with `ROSTER__*`
    /// environment variables. A `.env` file in the working directory is read first.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_environment(Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix(env::ENV_PREFIX)
            .prefix_separator(env::ENV_SEPARATOR)
            .separator(env::ENV_SEPARATOR)
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("auth.allowed_origins")
    }

    fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default("application.assets_dir", prod::ASSETS_DIR)?
            .set_default("database.url", prod::DATABASE_URL)?
            .set_default("auth.jwt.time_to_live", prod::TOKEN_TTL_SECONDS)?
            .add_source(File::with_name(BASE_CONFIG_FILE).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig {
            jwt_secret: self.auth.jwt.secret.clone(),
            token_ttl_in_seconds: self.auth.jwt.time_to_live,
        }
    }
}
