use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub token: TokenConfig,
    pub shutdown_grace_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("APP_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8080);
        let database_url = std::env::var("DATABASE_URL")?;
        let token = TokenConfig {
            secret: std::env::var("TOKEN_SECRET")?,
            issuer: std::env::var("TOKEN_ISSUER").unwrap_or_else(|_| "todo-service".into()),
            audience: std::env::var("TOKEN_AUDIENCE").unwrap_or_else(|_| "todo-users".into()),
            ttl_minutes: std::env::var("TOKEN_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(30),
        };
        let shutdown_grace_secs = std::env::var("SHUTDOWN_GRACE_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(5);
        Ok(Self {
            host,
            port,
            database_url,
            token,
            shutdown_grace_secs,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only test in the crate touching these env vars, so no races with
    // parallel test threads.
    #[test]
    fn from_env_applies_defaults() {
        std::env::set_var("DATABASE_URL", "postgres://localhost:5432/todo");
        std::env::set_var("TOKEN_SECRET", "test-secret");
        for var in [
            "APP_HOST",
            "APP_PORT",
            "TOKEN_ISSUER",
            "TOKEN_AUDIENCE",
            "TOKEN_TTL_MINUTES",
            "SHUTDOWN_GRACE_SECS",
        ] {
            std::env::remove_var(var);
        }

        let config = AppConfig::from_env().expect("config from env");
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.token.issuer, "todo-service");
        assert_eq!(config.token.ttl_minutes, 30);
        assert_eq!(config.shutdown_grace_secs, 5);
    }
}
