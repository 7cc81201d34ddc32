use anyhow::{Result, bail};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use super::KvStore;

/// In-process stand-in for Redis, injected into the router by handler tests
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails as if the connection were down
    pub fn failing() -> Self {
        let store = Self::default();
        store.set_failing(true);
        store
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            bail!("connection refused");
        }
        Ok(())
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn get_many(&self, keys: &[String]) -> Result<Vec<Option<String>>> {
        self.check()?;
        let entries = self.entries.lock().unwrap();
        Ok(keys.iter().map(|key| entries.get(key).cloned()).collect())
    }

    async fn delete(&self, key: &str) -> Result<u64> {
        self.check()?;
        Ok(self.entries.lock().unwrap().remove(key).map_or(0, |_| 1))
    }

    async fn list_keys(&self, pattern: &str) -> Result<Vec<String>> {
        self.check()?;
        Ok(self
            .entries
            .lock()
            .unwrap()
            .keys()
            .filter(|key| glob_match(pattern.as_bytes(), key.as_bytes()))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<()> {
        self.check()
    }
}

/// `*` and `?` wildcards, as KEYS understands them
fn glob_match(pattern: &[u8], key: &[u8]) -> bool {
    match (pattern.first(), key.first()) {
        (None, None) => true,
        (Some(b'*'), _) => {
            glob_match(&pattern[1..], key) || (!key.is_empty() && glob_match(pattern, &key[1..]))
        }
        (Some(b'?'), Some(_)) => glob_match(&pattern[1..], &key[1..]),
        (Some(p), Some(k)) if p == k => glob_match(&pattern[1..], &key[1..]),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_match() {
        assert!(glob_match(b"*", b""));
        assert!(glob_match(b"*", b"anything"));
        assert!(glob_match(b"user-*", b"user-42"));
        assert!(!glob_match(b"user-*", b"admin-1"));
        assert!(glob_match(b"a?c", b"abc"));
        assert!(!glob_match(b"a?c", b"ac"));
    }

    #[tokio::test]
    async fn test_failing_store_errors() {
        let store = MemoryStore::failing();
        assert!(store.get("k").await.is_err());

        store.set_failing(false);
        assert_eq!(store.get("k").await.unwrap(), None);
    }
}
