//!
//! Persisted key/value settings of the front-end.
//!
//! Only integer values are needed right now, region override being the main user.
//! Implementations:
//!   * [MemoryPreferences](struct.MemoryPreferences.html) - kept in memory, useful for tests
//!   * [FilePreferences](struct.FilePreferences.html) - JSON object stored on disk
//!

use std::env;
use std::fmt;
use std::io;
use std::path::PathBuf;

mod file;
mod memory;

pub use self::file::FilePreferences;
pub use self::memory::MemoryPreferences;

/// Environment variable which overrides location of the preferences file.
pub const PREFERENCES_PATH_VAR: &str = "EMUFRONT_PREFERENCES";

const APP_DIR: &str = "emufront";
const PREFERENCES_FILE: &str = "preferences.json";

pub trait Preferences {
    /// Returns value stored under `key` if it exists and is an integer.
    fn get_int(&self, key: &str) -> Option<i64>;

    fn set_int(&mut self, key: &str, value: i64) -> Result<(), PreferencesError>;

    /// Removing missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), PreferencesError>;

    /// Re-reads backing storage so changes made by someone else become visible.
    fn reload(&mut self) -> Result<(), PreferencesError> {
        Ok(())
    }
}

impl<P> Preferences for Box<P>
    where P: Preferences + ?Sized
{
    fn get_int(&self, key: &str) -> Option<i64> {
        (**self).get_int(key)
    }

    fn set_int(&mut self, key: &str, value: i64) -> Result<(), PreferencesError> {
        (**self).set_int(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), PreferencesError> {
        (**self).remove(key)
    }

    fn reload(&mut self) -> Result<(), PreferencesError> {
        (**self).reload()
    }
}

#[derive(Debug, From)]
pub enum PreferencesError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for PreferencesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferencesError::Io(e) => write!(f, "Preferences io error: {}", e),
            PreferencesError::Json(e) => write!(f, "Malformed preferences file: {}", e),
        }
    }
}

impl std::error::Error for PreferencesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PreferencesError::Io(e) => Some(e),
            PreferencesError::Json(e) => Some(e),
        }
    }
}

///
/// Location of the preferences file, checked in order:
///
///   Source | Path
///   ------ | ----
///   `EMUFRONT_PREFERENCES` | used as is
///   `XDG_CONFIG_HOME` | `$XDG_CONFIG_HOME/emufront/preferences.json`
///   `HOME` | `$HOME/.config/emufront/preferences.json`
///
/// `None` is returned when none of these variables is set.
///
pub fn default_preferences_path() -> Option<PathBuf> {
    preferences_path_from(|name| env::var_os(name).filter(|v| !v.is_empty()).map(PathBuf::from))
}

fn preferences_path_from<F>(var: F) -> Option<PathBuf>
    where F: Fn(&str) -> Option<PathBuf>
{
    if let Some(path) = var(PREFERENCES_PATH_VAR) {
        return Some(path);
    }
    let config_dir = match var("XDG_CONFIG_HOME") {
        Some(dir) => dir,
        None => var("HOME")?.join(".config"),
    };
    Some(config_dir.join(APP_DIR).join(PREFERENCES_FILE))
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_preferences_path_resolution_order() {
        let lookup = |vars: &'static [(&'static str, &'static str)]| {
            move |name: &str| {
                vars.iter()
                    .find(|(k, _)| *k == name)
                    .map(|(_, v)| PathBuf::from(*v))
            }
        };

        assert_eq!(
            preferences_path_from(lookup(&[
                ("EMUFRONT_PREFERENCES", "/tmp/prefs.json"),
                ("XDG_CONFIG_HOME", "/xdg"),
                ("HOME", "/home/user"),
            ])).unwrap(),
            Path::new("/tmp/prefs.json")
        );
        assert_eq!(
            preferences_path_from(lookup(&[
                ("XDG_CONFIG_HOME", "/xdg"),
                ("HOME", "/home/user"),
            ])).unwrap(),
            Path::new("/xdg/emufront/preferences.json")
        );
        assert_eq!(
            preferences_path_from(lookup(&[("HOME", "/home/user")])).unwrap(),
            Path::new("/home/user/.config/emufront/preferences.json")
        );
        assert_eq!(preferences_path_from(lookup(&[])), None);
    }
}
