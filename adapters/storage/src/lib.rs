#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Local persistence for Hive Planner.
//!
//! Two keys are used: one holding the live layout token, overwritten after
//! every committed mutation, and one holding the JSON collection of saved
//! configurations, always read and written as a whole. Writes of the live
//! layout are best-effort; the in-memory session stays authoritative when the
//! backing store is unavailable.

mod store;

use std::time::{SystemTime, UNIX_EPOCH};

use hive_planner_core::{ConfigId, SavedConfig};
use sha2::{Digest, Sha256};

pub use self::store::{FileStore, KeyValueStore, MemoryStore, StoreError};

/// Key holding the live layout token.
pub const LIVE_LAYOUT_KEY: &str = "hive-builder-layout";
/// Key holding the saved configuration collection.
pub const SAVED_CONFIGS_KEY: &str = "hive-builder-saved-configs";

const UNTITLED_CONFIG_NAME: &str = "Untitled hive";
const CONFIG_ID_BYTES: usize = 6;

/// Milliseconds since the unix epoch, or zero when the clock predates it.
#[must_use]
pub fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// Layout persistence built on top of a key/value store.
#[derive(Debug)]
pub struct LayoutStore<S> {
    store: S,
}

impl<S> LayoutStore<S>
where
    S: KeyValueStore,
{
    /// Wraps the provided key/value store.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrows the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads the persisted live layout token, treating read failures as absent.
    #[must_use]
    pub fn load_live(&self) -> Option<String> {
        match self.store.get(LIVE_LAYOUT_KEY) {
            Ok(token) => token,
            Err(error) => {
                log::warn!("could not read persisted layout: {error}");
                None
            }
        }
    }

    /// Overwrites the persisted live layout token. Failures are logged and swallowed.
    pub fn persist_live(&mut self, token: &str) {
        match self.store.set(LIVE_LAYOUT_KEY, token) {
            Ok(()) => log::debug!("persisted live layout ({} bytes)", token.len()),
            Err(error) => log::warn!("could not persist layout: {error}"),
        }
    }

    /// Reads every saved configuration in save order.
    ///
    /// A missing, unreadable or corrupt collection reads as empty.
    #[must_use]
    pub fn saved_configs(&self) -> Vec<SavedConfig> {
        let document = match self.store.get(SAVED_CONFIGS_KEY) {
            Ok(Some(document)) => document,
            Ok(None) => return Vec::new(),
            Err(error) => {
                log::warn!("could not read saved configurations: {error}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&document) {
            Ok(configs) => configs,
            Err(error) => {
                log::warn!("ignoring corrupt saved configurations: {error}");
                Vec::new()
            }
        }
    }

    /// Finds a saved configuration by identifier.
    #[must_use]
    pub fn find_config(&self, id: &ConfigId) -> Option<SavedConfig> {
        self.saved_configs()
            .into_iter()
            .find(|config| &config.id == id)
    }

    /// Appends a named configuration and writes the whole collection back.
    ///
    /// Blank names are replaced with a placeholder.
    pub fn save_config(
        &mut self,
        name: &str,
        serialized_layout: &str,
        created_at: u64,
    ) -> Result<SavedConfig, StoreError> {
        let mut configs = self.saved_configs();
        let name = match name.trim() {
            "" => UNTITLED_CONFIG_NAME,
            trimmed => trimmed,
        };
        let id = unique_config_id(&configs, name, serialized_layout, created_at);
        let config = SavedConfig {
            id,
            name: name.to_owned(),
            serialized_layout: serialized_layout.to_owned(),
            created_at,
        };

        configs.push(config.clone());
        self.write_configs(&configs)?;
        log::debug!("saved configuration `{}` as {}", config.name, config.id);
        Ok(config)
    }

    /// Removes a configuration, reporting whether it existed.
    pub fn delete_config(&mut self, id: &ConfigId) -> Result<bool, StoreError> {
        let mut configs = self.saved_configs();
        let before = configs.len();
        configs.retain(|config| &config.id != id);
        if configs.len() == before {
            return Ok(false);
        }

        self.write_configs(&configs)?;
        log::debug!("deleted configuration {id}");
        Ok(true)
    }

    fn write_configs(&mut self, configs: &[SavedConfig]) -> Result<(), StoreError> {
        let document = serde_json::to_string(configs)?;
        self.store.set(SAVED_CONFIGS_KEY, &document)
    }
}

fn unique_config_id(
    existing: &[SavedConfig],
    name: &str,
    serialized_layout: &str,
    created_at: u64,
) -> ConfigId {
    let mut attempt: u32 = 0;
    loop {
        let mut hasher = Sha256::new();
        hasher.update(created_at.to_le_bytes());
        hasher.update(attempt.to_le_bytes());
        hasher.update(name.as_bytes());
        hasher.update(serialized_layout.as_bytes());
        let digest = hasher.finalize();
        let id = ConfigId::new(
            digest[..CONFIG_ID_BYTES]
                .iter()
                .map(|byte| format!("{byte:02x}"))
                .collect::<String>(),
        );

        if existing.iter().all(|config| config.id != id) {
            return id;
        }
        attempt = attempt.wrapping_add(1);
    }
}
