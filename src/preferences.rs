// ABOUTME: Durable local key-value storage and the display-name preference built on it
// ABOUTME: JSON-file and in-memory stores behind a KeyValueStore trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Preference store
//!
//! One durable string, the display name, stored under the `username` key.
//! No validation and no expiry; the last write wins.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use nutrilog_core::constants::storage_keys;
use nutrilog_core::errors::{AppError, AppResult};
use tracing::debug;

/// Process-wide durable string storage
pub trait KeyValueStore: Send + Sync {
    /// Read a value; a missing key is `Ok(None)`
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
}

/// Key-value store persisted as one JSON object on disk
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    /// Store backed by the given file; it is created on first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> AppResult<BTreeMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(AppError::from(e).with_resource_id(self.path.display().to_string()))
            }
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw)
            .map_err(|e| AppError::from(e).with_resource_id(self.path.display().to_string()))
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> AppResult<()> {
        let resource = || self.path.display().to_string();
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::from(e).with_resource_id(resource()))?;
        }

        // Replaced by rename, never rewritten in place.
        let tmp = self.path.with_extension("json.tmp");
        let body = serde_json::to_string_pretty(values)?;
        fs::write(&tmp, body).map_err(|e| AppError::from(e).with_resource_id(resource()))?;
        fs::rename(&tmp, &self.path).map_err(|e| AppError::from(e).with_resource_id(resource()))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_owned(), value.to_owned());
        self.write_all(&values)?;
        debug!(key, path = %self.path.display(), "Preference stored");
        Ok(())
    }
}

/// Key-value store that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| AppError::internal("Preference store lock poisoned"))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.values
            .lock()
            .map_err(|_| AppError::internal("Preference store lock poisoned"))?
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// The display-name preference
pub struct PreferenceStore {
    store: Box<dyn KeyValueStore>,
}

impl PreferenceStore {
    /// Wrap a key-value store
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Saved display name, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read
    pub fn get(&self) -> AppResult<Option<String>> {
        self.store.get(storage_keys::USERNAME)
    }

    /// Save a display name
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written
    pub fn set(&self, value: &str) -> AppResult<()> {
        self.store.set(storage_keys::USERNAME, value)
    }
}
