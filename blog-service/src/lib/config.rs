use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

const DEFAULT_JWT_SECRET: &str = "default_secret_key";

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Flat variables `DB_URL`, `PORT`, `JWT_SECRET`
    /// 2. Environment variables (DATABASE__URL, SERVER__HTTP_PORT, JWT__SECRET, etc.)
    /// 3. Environment-specific config file (config/{environment}.toml)
    /// 4. Default config file (config/default.toml)
    /// 5. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// Same as [`Config::load`], resolving the flat variables and `RUN_MODE` through `lookup`.
    fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let run_mode = lookup("RUN_MODE").unwrap_or_else(|| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .set_default("database.url", "sqlite://sqlite3.db?mode=rwc")?
            .set_default("database.max_connections", 5)?
            .set_default("server.http_port", 8080)?
            .set_default("server.static_dir", "static")?
            .set_default("jwt.secret", DEFAULT_JWT_SECRET)?
            .set_default("jwt.expiration_hours", 1)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .set_override_option(
                "database.url",
                lookup("DB_URL").map(|url| sqlite_url(&url)),
            )?
            .set_override_option("server.http_port", lookup("PORT"))?
            .set_override_option("jwt.secret", lookup("JWT_SECRET"))?
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        if config.uses_default_jwt_secret() {
            tracing::warn!(
                "JWT secret is the built-in default; set JWT_SECRET before exposing the service"
            );
        }

        Ok(config)
    }

    pub fn uses_default_jwt_secret(&self) -> bool {
        self.jwt.secret == DEFAULT_JWT_SECRET
    }

    /// Lifetime of issued tokens.
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.jwt.expiration_hours)
    }
}

/// `file:<path>` URLs are rewritten to sqlx's `sqlite://<path>` form.
fn sqlite_url(url: &str) -> String {
    match url
        .strip_prefix("file://")
        .or_else(|| url.strip_prefix("file:"))
    {
        Some(path) => format!("sqlite://{path}"),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_fills_every_section() {
        let config = Config::load().expect("Failed to load configuration");

        assert!(!config.database.url.is_empty());
        assert!(config.database.max_connections > 0);
        assert!(!config.jwt.secret.is_empty());
        assert!(config.jwt.expiration_hours > 0);
    }

    #[test]
    fn test_token_ttl_in_hours() {
        let config = Config {
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
            server: ServerConfig {
                http_port: 0,
                static_dir: "static".to_string(),
            },
            jwt: JwtConfig {
                secret: "secret".to_string(),
                expiration_hours: 1,
            },
        };

        assert_eq!(config.token_ttl(), chrono::Duration::hours(1));
    }

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| {
            vars.iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn test_flat_variables_override_everything() {
        let config = Config::load_with(lookup_from(&[
            ("JWT_SECRET", "operator-chosen-secret"),
            ("PORT", "9999"),
            ("DB_URL", "file:other.db"),
        ]))
        .expect("Failed to load configuration");

        assert_eq!(config.jwt.secret, "operator-chosen-secret");
        assert_eq!(config.server.http_port, 9999);
        assert_eq!(config.database.url, "sqlite://other.db");
        assert!(!config.uses_default_jwt_secret());
    }

    #[test]
    fn test_empty_flat_variables_are_ignored() {
        let config = Config::load_with(lookup_from(&[("JWT_SECRET", ""), ("PORT", "")]))
            .expect("Failed to load configuration");

        assert_ne!(config.jwt.secret, "");
        assert!(config.server.http_port > 0);
    }

    #[test]
    fn test_default_secret_is_detected() {
        let config = Config::load_with(lookup_from(&[])).expect("Failed to load configuration");

        assert_eq!(
            config.uses_default_jwt_secret(),
            config.jwt.secret == "default_secret_key"
        );
    }

    #[test]
    fn test_sqlite_url() {
        assert_eq!(sqlite_url("file:sqlite3.db"), "sqlite://sqlite3.db");
        assert_eq!(sqlite_url("file:///var/lib/app.db"), "sqlite:///var/lib/app.db");
        assert_eq!(sqlite_url("sqlite::memory:"), "sqlite::memory:");
    }
}
