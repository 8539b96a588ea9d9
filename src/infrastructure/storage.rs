//! Persistent key/value store holding the selected language.

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use color_eyre::eyre::{Result, WrapErr};

use crate::domain::Language;

/// Storage key of the selected language
pub const LANGUAGE_KEY: &str = "lang";

const STORAGE_FILE: &str = "storage.json";

pub trait LanguageStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Reads the stored language, falling back to English when it is absent
/// or unreadable.
pub fn load_language(store: &dyn LanguageStore) -> Language {
    match store.get(LANGUAGE_KEY) {
        Ok(Some(value)) => Language::from_str(&value).unwrap_or_else(|_| {
            log::warn!("Unknown stored language {value:?}, using {}", Language::En);
            Language::En
        }),
        Ok(None) => Language::default(),
        Err(e) => {
            log::warn!("Failed to read stored language: {e:?}");
            Language::default()
        }
    }
}

pub fn save_language(store: &mut dyn LanguageStore, language: Language) -> Result<()> {
    store.set(LANGUAGE_KEY, language.as_str())
}

/// JSON object on disk, created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store file inside `data_dir`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(STORAGE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)
            .wrap_err_with(|| format!("Failed to read {}", self.path.display()))?;
        let entries = serde_json::from_str(&content)
            .wrap_err_with(|| format!("Malformed store {}", self.path.display()))?;
        Ok(entries)
    }
}

impl LanguageStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_all().unwrap_or_else(|e| {
            log::warn!("Discarding unreadable store: {e:?}");
            BTreeMap::new()
        });
        entries.insert(key.to_owned(), value.to_owned());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)
            .wrap_err_with(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl LanguageStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_memory_store_defaults_to_english() {
        let store = MemoryStore::default();
        assert_eq!(load_language(&store), Language::En);
    }

    #[test]
    fn test_unknown_value_falls_back_to_english() -> Result<()> {
        let mut store = MemoryStore::default();
        store.set(LANGUAGE_KEY, "DE")?;
        assert_eq!(load_language(&store), Language::En);
        Ok(())
    }

    #[test]
    fn test_file_store_round_trip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut store = FileStore::in_dir(&dir.path().join("nested"));
        assert_eq!(store.get(LANGUAGE_KEY)?, None);

        save_language(&mut store, Language::Lt)?;
        assert_eq!(store.get(LANGUAGE_KEY)?, Some("LT".to_owned()));

        let reopened = FileStore::in_dir(&dir.path().join("nested"));
        assert_eq!(load_language(&reopened), Language::Lt);
        Ok(())
    }

    #[test]
    fn test_file_store_recovers_from_garbage() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut store = FileStore::in_dir(dir.path());
        fs::write(store.path(), "not json")?;
        assert_eq!(load_language(&store), Language::En);

        save_language(&mut store, Language::En)?;
        assert_eq!(store.get(LANGUAGE_KEY)?, Some("EN".to_owned()));
        Ok(())
    }
}
