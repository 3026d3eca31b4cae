use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use scout_logging::scout_debug;
use serde::{Deserialize, Serialize};

use crate::persist::AtomicFileWriter;
use crate::HostError;

/// Key-value store for boolean user preferences that outlive a session.
pub trait PreferenceStore: Send + Sync {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, HostError>;
    fn set_bool(&self, key: &str, value: bool) -> Result<(), HostError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Arc<T> {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, HostError> {
        (**self).get_bool(key)
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<(), HostError> {
        (**self).set_bool(key, value)
    }
}

#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, bool>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, HostError> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).copied())
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<(), HostError> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value);
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceFile {
    flags: BTreeMap<String, bool>,
}

/// Preferences kept in a small RON file, rewritten atomically on every change.
pub struct RonPreferenceStore {
    dir: PathBuf,
    filename: String,
    // Serializes read-modify-write cycles.
    lock: Mutex<()>,
}

impl RonPreferenceStore {
    pub const DEFAULT_FILENAME: &'static str = ".scout_prefs.ron";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_filename(dir, Self::DEFAULT_FILENAME)
    }

    pub fn with_filename(dir: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            filename: filename.into(),
            lock: Mutex::new(()),
        }
    }

    /// Splits a full file path into directory and file name.
    pub fn at_path(path: &Path) -> Self {
        let dir = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| Self::DEFAULT_FILENAME.to_string());
        Self::with_filename(dir, filename)
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }

    fn load(&self) -> Result<PreferenceFile, HostError> {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                scout_debug!("No preference file at {:?}", path);
                return Ok(PreferenceFile::default());
            }
            Err(err) => return Err(HostError::Persist(err.into())),
        };
        ron::from_str(&content).map_err(|err| HostError::PreferenceFormat(err.to_string()))
    }
}

impl PreferenceStore for RonPreferenceStore {
    fn get_bool(&self, key: &str) -> Result<Option<bool>, HostError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.load()?.flags.get(key).copied())
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<(), HostError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        // A corrupt file is replaced rather than blocking the new value.
        let mut file = self.load().unwrap_or_default();
        file.flags.insert(key.to_string(), value);

        let content = ron::ser::to_string_pretty(&file, ron::ser::PrettyConfig::new())
            .map_err(|err| HostError::PreferenceFormat(err.to_string()))?;
        AtomicFileWriter::new(self.dir.clone()).write(&self.filename, &content)?;
        Ok(())
    }
}
