use once_cell::sync::Lazy;
use std::env;

/// Runtime configuration, read once from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite connection string, e.g. `sqlite://starwars.db`.
    pub database_url: String,
    /// Listening port for the HTTP server.
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://starwars.db".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(3000);

        Self { database_url, port }
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

/// Process-wide configuration accessor.
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_env() {
        // from_env falls back when the variables are unset or unparsable
        let config = AppConfig::from_env();
        assert!(!config.database_url.is_empty());
        assert!(config.port > 0);
    }
}
