use anyhow::{Context, Result};
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, ConnectionInfo, IntoConnectionInfo};

use super::KvStore;
use crate::config::Config;

/// Shareable Redis client for use across async handlers
///
/// Wraps a `ConnectionManager`, which multiplexes concurrent commands over a
/// single connection and transparently reconnects if it drops. Cloning is cheap.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connect to Redis using the provided config and verify the connection
    ///
    /// Fails if the address cannot be parsed, the connection cannot be
    /// established, or the server does not answer a PING. Callers at startup
    /// treat any of these as fatal.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let info = connection_info(config)?;

        let addr = config.redacted_redis_addr();

        tracing::info!("Connecting to Redis at {} (db {})", addr, info.redis.db);

        let client = redis::Client::open(info).context("Failed to create Redis client")?;
        let conn = ConnectionManager::new(client)
            .await
            .with_context(|| format!("Failed to connect to Redis at {}", addr))?;

        let store = Self { conn };
        store.ping().await?;

        tracing::info!("Successfully connected to Redis at {}", addr);
        Ok(store)
    }

    fn connection(&self) -> ConnectionManager {
        self.conn.clone()
    }
}

/// Resolve `REDIS_ADDR` plus the credential and database overrides
///
/// The address may be a bare `host:port` or a full `redis://` / `rediss://`
/// URL. `REDIS_PASSWORD` and `REDIS_DB`, when set, win over the URL's own.
fn connection_info(config: &Config) -> Result<ConnectionInfo> {
    let url = if config.redis_addr.contains("://") {
        config.redis_addr.clone()
    } else {
        format!("redis://{}", config.redis_addr)
    };

    let mut info = url
        .as_str()
        .into_connection_info()
        .with_context(|| format!("Invalid REDIS_ADDR '{}'", config.redacted_redis_addr()))?;
    if let Some(db) = config.redis_db {
        info.redis.db = db;
    }
    if let Some(password) = &config.redis_password {
        info.redis.password = Some(password.clone());
    }
    Ok(info)
}

/// Values are opaque bytes; invalid UTF-8 is replaced rather than failing the read
fn decode_value(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

#[async_trait]
impl KvStore for RedisStore {
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.connection();
        let _: () = conn
            .set(key, value)
            .await
            .with_context(|| format!("SET {} failed", key))?;

        tracing::debug!("Set key: {}", key);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection();
        let value: Option<Vec<u8>> = conn
            .get(key)
            .await
            .with_context(|| format!("GET {} failed", key))?;

        tracing::debug!("Get key: {} (found: {})", key, value.is_some());
        Ok(value.map(decode_value))
    }

    async fn get_many(&self, keys: &[String]) -> Result<Vec<Option<String>>> {
        // MGET with no arguments is a protocol error
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let mut cmd = redis::cmd("MGET");
        for key in keys {
            cmd.arg(key.as_str());
        }

        let mut conn = self.connection();
        let values: Vec<Option<Vec<u8>>> = cmd
            .query_async(&mut conn)
            .await
            .with_context(|| format!("MGET of {} keys failed", keys.len()))?;

        tracing::debug!("Fetched {} values", values.len());
        Ok(values
            .into_iter()
            .map(|value| value.map(decode_value))
            .collect())
    }

    async fn delete(&self, key: &str) -> Result<u64> {
        let mut conn = self.connection();
        let removed: u64 = conn
            .del(key)
            .await
            .with_context(|| format!("DEL {} failed", key))?;

        tracing::debug!("Deleted key: {} (removed: {})", key, removed);
        Ok(removed)
    }

    async fn list_keys(&self, pattern: &str) -> Result<Vec<String>> {
        let mut conn = self.connection();
        let keys: Vec<String> = conn
            .keys(pattern)
            .await
            .with_context(|| format!("KEYS {} failed", pattern))?;

        tracing::debug!("Listed {} keys matching {}", keys.len(), pattern);
        Ok(keys)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.connection();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .context("PING failed")?;

        tracing::debug!("Ping: {}", pong);
        Ok(())
    }
}
