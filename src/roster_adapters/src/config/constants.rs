pub mod env {
    pub const ENV_PREFIX: &str = "ROSTER";
    pub const ENV_SEPARATOR: &str = "__";
    pub const DATABASE_URL_ENV_VAR: &str = "ROSTER__DATABASE__URL";
    pub const JWT_SECRET_ENV_VAR: &str = "ROSTER__AUTH__JWT__SECRET";
    pub const ALLOWED_ORIGINS_ENV_VAR: &str = "ROSTER__AUTH__ALLOWED_ORIGINS";
}

pub const BASE_CONFIG_FILE: &str = "config/base";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:5000";
    pub const ASSETS_DIR: &str = "assets";
    pub const DATABASE_URL: &str = "sqlite://roster.db";
    pub const TOKEN_TTL_SECONDS: i64 = 3600;
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const DATABASE_URL: &str = "sqlite::memory:";
    pub const JWT_SECRET: &str = "test-signing-secret";
}
