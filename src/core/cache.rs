//! File-backed blob cache with mtime-based freshness.
//!
//! Each logical key is one JSON file under the store root. Freshness is
//! binary: a blob aged at or past the caller-supplied max age reads as
//! absent, never as a partial or stale-but-usable value. Stale files are
//! simply ignored until overwritten; there is no expiry sweep.

use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs,
    path::PathBuf,
    time::Duration,
};

use crate::Result;

/// On-disk cache store rooted at an injectable directory.
pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Default store location: `<platform cache dir>/sleeper-keeper`.
    pub fn default_dir() -> PathBuf {
        let base = dirs::cache_dir().unwrap_or_else(|| {
            let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.push(".cache");
            home
        });
        base.join("sleeper-keeper")
    }

    pub fn open_default() -> Self {
        Self::new(Self::default_dir())
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    fn entry_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }

    /// Read the blob stored under `name`. Returns `None` when no blob exists
    /// or its age (time since last write) is `max_age` or more. Any other
    /// I/O failure is fatal to the caller.
    pub fn read(&self, name: &str, max_age: Duration) -> Result<Option<Vec<u8>>> {
        let path = self.entry_path(name);
        let meta = match fs::metadata(&path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        // A modification time in the future reads as age zero.
        let age = meta.modified()?.elapsed().unwrap_or(Duration::ZERO);
        if age >= max_age {
            return Ok(None);
        }
        Ok(Some(fs::read(&path)?))
    }

    /// Write `bytes` under `name`, overwriting unconditionally and resetting
    /// the age clock. Creates the store root on demand.
    pub fn write(&self, name: &str, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.entry_path(name), bytes)?;
        Ok(())
    }

    pub fn read_json<T: DeserializeOwned>(
        &self,
        name: &str,
        max_age: Duration,
    ) -> Result<Option<T>> {
        match self.read(name, max_age)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    pub fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        self.write(name, &serde_json::to_vec(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::SystemTime;
    use tempfile::tempdir;

    const HOUR: Duration = Duration::from_secs(3600);

    fn backdate(store: &CacheStore, name: &str, by: Duration) {
        let path = store.entry_path(name);
        let file = fs::File::options().write(true).open(path).unwrap();
        file.set_modified(SystemTime::now() - by).unwrap();
    }

    #[test]
    fn test_read_missing_entry_is_absent() {
        let dir = tempdir().unwrap();
        let store = CacheStore::new(dir.path());

        assert_eq!(store.read("nope", HOUR).unwrap(), None);
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let dir = tempdir().unwrap();
        let store = CacheStore::new(dir.path());

        store.write("blob", b"payload").unwrap();
        assert_eq!(store.read("blob", HOUR).unwrap(), Some(b"payload".to_vec()));
    }

    #[test]
    fn test_zero_max_age_is_always_stale() {
        let dir = tempdir().unwrap();
        let store = CacheStore::new(dir.path());

        store.write("blob", b"payload").unwrap();
        // age >= max_age at the boundary, even when both are zero
        assert_eq!(store.read("blob", Duration::ZERO).unwrap(), None);
    }

    #[test]
    fn test_entry_older_than_ttl_is_absent() {
        let dir = tempdir().unwrap();
        let store = CacheStore::new(dir.path());

        store.write("blob", b"payload").unwrap();
        backdate(&store, "blob", Duration::from_secs(13 * 3600));
        assert_eq!(store.read("blob", 12 * HOUR).unwrap(), None);
    }

    #[test]
    fn test_entry_aged_exactly_ttl_is_absent() {
        let dir = tempdir().unwrap();
        let store = CacheStore::new(dir.path());

        store.write("blob", b"payload").unwrap();
        // elapsed time only grows, so age >= ttl holds from here on
        backdate(&store, "blob", HOUR);
        assert_eq!(store.read("blob", HOUR).unwrap(), None);
    }

    #[test]
    fn test_overwrite_resets_age_clock() {
        let dir = tempdir().unwrap();
        let store = CacheStore::new(dir.path());

        store.write("blob", b"old").unwrap();
        backdate(&store, "blob", 2 * HOUR);
        assert_eq!(store.read("blob", HOUR).unwrap(), None);

        store.write("blob", b"new").unwrap();
        assert_eq!(store.read("blob", HOUR).unwrap(), Some(b"new".to_vec()));
    }

    #[test]
    fn test_stale_entry_is_ignored_not_deleted() {
        let dir = tempdir().unwrap();
        let store = CacheStore::new(dir.path());

        store.write("blob", b"payload").unwrap();
        backdate(&store, "blob", 2 * HOUR);
        assert_eq!(store.read("blob", HOUR).unwrap(), None);
        assert!(store.entry_path("blob").exists());
    }

    #[test]
    fn test_json_roundtrip() {
        let dir = tempdir().unwrap();
        let store = CacheStore::new(dir.path());

        let value = vec!["a".to_string(), "b".to_string()];
        store.write_json("list", &value).unwrap();

        let back: Option<Vec<String>> = store.read_json("list", HOUR).unwrap();
        assert_eq!(back, Some(value));
    }
}
