use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, trace};

use crate::preferences::{Preferences, PreferencesError};

///
/// Preferences stored as a single JSON object on disk.
///
/// Example file:
///
/// ```json
/// {
///   "region": 2
/// }
/// ```
///
/// Values which are not integers are kept untouched but are invisible to `get_int`.
/// Every modification rewrites the whole file.
///
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, Value>,
}

impl FilePreferences {
    /// Opens preferences at `path`. Missing file is treated as empty one.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PreferencesError> {
        let mut prefs = FilePreferences {
            path: path.as_ref().to_path_buf(),
            values: BTreeMap::new(),
        };
        prefs.values = prefs.load()?;
        Ok(prefs)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, Value>, PreferencesError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no preferences file yet");
                return Ok(BTreeMap::new());
            }
            Err(e) => return Err(e.into()),
        };
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn store(&self) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, contents)?;
        trace!(path = %self.path.display(), entries = self.values.len(), "preferences saved");
        Ok(())
    }
}

impl Preferences for FilePreferences {
    fn get_int(&self, key: &str) -> Option<i64> {
        self.values.get(key).and_then(Value::as_i64)
    }

    fn set_int(&mut self, key: &str, value: i64) -> Result<(), PreferencesError> {
        self.values.insert(key.to_string(), Value::from(value));
        self.store()
    }

    fn remove(&mut self, key: &str) -> Result<(), PreferencesError> {
        if self.values.remove(key).is_some() {
            self.store()?;
        }
        Ok(())
    }

    fn reload(&mut self) -> Result<(), PreferencesError> {
        self.values = self.load()?;
        Ok(())
    }
}
