use anyhow::{Context, Result, bail};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub redis_addr: String,
    pub redis_password: Option<String>,
    /// Logical database; `None` keeps the one named in a URL-form address, else 0
    pub redis_db: Option<i64>,
    pub service_port: u16,
    pub service_host: String,
    /// Serve the old `GET /remove/{key}` route alongside `DELETE /define/{key}`
    pub legacy_remove_route: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let redis_addr = lookup("REDIS_ADDR").unwrap_or_else(|| "localhost:6379".to_string());

        let redis_password = lookup("REDIS_PASSWORD").filter(|p| !p.is_empty());

        let redis_db = lookup("REDIS_DB")
            .map(|raw| raw.parse::<u32>())
            .transpose()
            .context("REDIS_DB must be a non-negative database index")?;

        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let legacy_remove_route = match lookup("LEGACY_REMOVE_ROUTE") {
            Some(raw) => parse_bool(&raw).context("LEGACY_REMOVE_ROUTE must be true or false")?,
            None => true,
        };

        Ok(Config {
            redis_addr,
            redis_password,
            redis_db: redis_db.map(i64::from),
            service_port,
            service_host,
            legacy_remove_route,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Redis address: {}", self.redacted_redis_addr());
        let password = self.redis_password.as_ref().map_or("none", |_| "<redacted>");
        tracing::info!("  Redis password: {}", password);
        match self.redis_db {
            Some(db) => tracing::info!("  Redis database: {}", db),
            None => tracing::info!("  Redis database: default"),
        }
        let legacy = if self.legacy_remove_route {
            "enabled"
        } else {
            "disabled"
        };
        tracing::info!("  Legacy GET /remove route: {}", legacy);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }

    /// `redis_addr` with any `user:password@` part of a URL hidden
    pub fn redacted_redis_addr(&self) -> String {
        match (self.redis_addr.find("://"), self.redis_addr.rfind('@')) {
            (Some(scheme_end), Some(at)) if at > scheme_end => format!(
                "{}://<redacted>@{}",
                &self.redis_addr[..scheme_end],
                &self.redis_addr[at + 1..]
            ),
            _ => self.redis_addr.clone(),
        }
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got '{}'", other),
    }
}
