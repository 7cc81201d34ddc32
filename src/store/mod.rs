use anyhow::Result;
use async_trait::async_trait;

mod redis_store;

#[cfg(test)]
pub mod memory;

pub use redis_store::RedisStore;

/// Glob pattern matching every key in the store
pub const MATCH_ALL: &str = "*";

/// Operations the HTTP layer needs from the backing key-value store
///
/// Every method is a single round trip with no retry. Absence of a key is
/// reported through the return value (`None`, or a removed count of 0),
/// never as an error; errors are reserved for transport and protocol failures.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Store `value` under `key`, overwriting any previous value, with no expiry
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Fetch the value stored under `key`
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Fetch several values at once, positionally aligned with `keys`
    async fn get_many(&self, keys: &[String]) -> Result<Vec<Option<String>>>;

    /// Remove `key`, returning how many entries were removed (0 or 1)
    async fn delete(&self, key: &str) -> Result<u64>;

    /// All keys matching a glob `pattern`, in store order
    async fn list_keys(&self, pattern: &str) -> Result<Vec<String>>;

    /// Round-trip a PING to verify the store is reachable
    async fn ping(&self) -> Result<()>;
}
