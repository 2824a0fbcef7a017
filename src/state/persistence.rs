use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{BioError, Result};
use crate::models::{MealPlan, UserProfile, WeightEntry};

pub const PROFILE_KEY: &str = "biolife_v3_profile";
pub const HISTORY_KEY: &str = "biolife_v3_history";
pub const MEAL_PLAN_KEY: &str = "biolife_v3_mealplan";

/// Minimal string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Stores each key as `<key>.json` inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

fn load_slot<T: DeserializeOwned, S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Option<T>> {
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| BioError::CorruptSlot {
                key: key.to_string(),
                source,
            }),
        None => {
            debug!(key, "slot empty, using default");
            Ok(None)
        }
    }
}

fn save_slot<T: Serialize + ?Sized, S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    value: &T,
) -> Result<()> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)?;
    debug!(key, bytes = json.len(), "slot written");
    Ok(())
}

/// Load the profile, falling back to defaults when absent.
pub fn load_profile<S: KeyValueStore + ?Sized>(store: &S) -> Result<UserProfile> {
    Ok(load_slot(store, PROFILE_KEY)?.unwrap_or_default())
}

pub fn save_profile<S: KeyValueStore + ?Sized>(store: &mut S, profile: &UserProfile) -> Result<()> {
    save_slot(store, PROFILE_KEY, profile)
}

/// Load the weight history (newest first), empty when absent.
pub fn load_history<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<WeightEntry>> {
    Ok(load_slot(store, HISTORY_KEY)?.unwrap_or_default())
}

pub fn save_history<S: KeyValueStore + ?Sized>(store: &mut S, history: &[WeightEntry]) -> Result<()> {
    save_slot(store, HISTORY_KEY, history)
}

pub fn load_meal_plan<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<MealPlan>> {
    load_slot(store, MEAL_PLAN_KEY)
}

pub fn save_meal_plan<S: KeyValueStore + ?Sized>(store: &mut S, plan: &MealPlan) -> Result<()> {
    save_slot(store, MEAL_PLAN_KEY, plan)
}
