use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use tracing::{debug, warn};

use crate::preferences::{default_preferences_path, FilePreferences, MemoryPreferences, Preferences, PreferencesError};
use crate::region::{current_region_code, Region};

/// Preferences key under which region override is stored as raw integer.
pub const REGION_KEY: &str = "region";

pub type SharedLocalizationHelper = Mutex<LocalizationHelper<Box<dyn Preferences + Send>>>;

/// LocalizationHelper resolves region of the user.
///
/// Stored override always wins. Otherwise region comes from the locale and
/// if there is no usable locale `Region::Other` is used.
#[derive(Debug)]
pub struct LocalizationHelper<P> {
    prefs: P,
    region_code: Option<String>,
    region: Region,
}

impl<P> LocalizationHelper<P>
    where P: Preferences
{
    /// Creates helper which uses region code of the current process locale.
    pub fn new(prefs: P) -> Self {
        Self::with_region_code(prefs, current_region_code())
    }

    pub fn with_region_code(prefs: P, region_code: Option<String>) -> Self {
        let mut helper = Self {
            prefs,
            region_code,
            region: Region::Other,
        };
        helper.update_region();
        helper
    }

    fn update_region(&mut self) {
        self.region = match self.prefs.get_int(REGION_KEY) {
            Some(raw) => {
                let region = Region::from_raw(raw);
                debug!(raw, region = %region, "using stored region override");
                region
            }
            None => {
                let region = self.region_code.as_ref()
                    .map(|code| Region::from_region_code(code))
                    .unwrap_or(Region::Other);
                debug!(code = ?self.region_code, region = %region, "region detected from locale");
                region
            }
        };
    }

    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    pub fn region_name(&self) -> &'static str {
        self.region.name()
    }

    pub fn is_region_na(&self) -> bool {
        self.region == Region::NorthAmerica
    }

    pub fn is_region_eu(&self) -> bool {
        self.region == Region::Europe
    }

    pub fn is_region_jpn(&self) -> bool {
        self.region == Region::Japan
    }

    /// Region code detected from locale, if any.
    pub fn region_code(&self) -> Option<&str> {
        self.region_code.as_ref().map(|c| c.as_str())
    }

    /// Stores override. It's used from now on regardless of locale.
    pub fn set_region(&mut self, region: Region) -> Result<(), PreferencesError> {
        self.prefs.set_int(REGION_KEY, region.raw())?;
        self.update_region();
        Ok(())
    }

    /// Removes override so region follows locale again.
    pub fn clear_region(&mut self) -> Result<(), PreferencesError> {
        self.prefs.remove(REGION_KEY)?;
        self.update_region();
        Ok(())
    }

    /// Picks up override changed in preferences by someone else.
    pub fn refresh(&mut self) -> Result<(), PreferencesError> {
        self.prefs.reload()?;
        self.update_region();
        Ok(())
    }

    pub fn preferences(&self) -> &P {
        &self.prefs
    }
}

impl LocalizationHelper<Box<dyn Preferences + Send>> {
    /// Process wide helper backed by preferences file at default location.
    /// It's created on first use.
    pub fn shared() -> &'static SharedLocalizationHelper {
        static SHARED: OnceLock<SharedLocalizationHelper> = OnceLock::new();
        SHARED.get_or_init(|| Mutex::new(LocalizationHelper::new(default_preferences())))
    }
}

fn default_preferences() -> Box<dyn Preferences + Send> {
    preferences_at(default_preferences_path())
}

/// Opens file preferences at `path`, falling back to memory ones when that's not possible.
fn preferences_at(path: Option<PathBuf>) -> Box<dyn Preferences + Send> {
    match path {
        Some(path) => match FilePreferences::open(&path) {
            Ok(prefs) => return Box::new(prefs),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unable to load preferences, region override won't persist");
            }
        },
        None => {
            warn!("no location for preferences file, region override won't persist");
        }
    }
    Box::new(MemoryPreferences::new())
}

#[cfg(test)]
mod test {
    use std::fs;
    use std::process;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

    fn scratch_path(name: &str) -> PathBuf {
        let id = NEXT_ID.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir()
            .join(format!("emufront-helper-test-{}-{}", process::id(), id))
            .join(name)
    }

    fn helper(code: Option<&str>) -> LocalizationHelper<MemoryPreferences> {
        LocalizationHelper::with_region_code(MemoryPreferences::new(), code.map(|c| c.to_string()))
    }

    #[test]
    fn test_region_follows_locale() {
        for (i, o) in [
            (Some("FR"), Region::Europe),
            (Some("US"), Region::NorthAmerica),
            (Some("JP"), Region::Japan),
            (Some("TW"), Region::Japan),
            (Some("BR"), Region::Other),
            (None, Region::Other),
        ].iter() {
            let h = helper(*i);
            assert_eq!(h.region(), *o);
            assert_eq!(h.region_name(), o.name());
        }
    }

    #[test]
    fn test_override_wins_over_locale() {
        let mut h = helper(Some("US"));
        assert!(h.is_region_na());

        h.set_region(Region::Japan).unwrap();
        assert!(h.is_region_jpn());
        assert!(!h.is_region_na());
        assert_eq!(h.preferences().get_int(REGION_KEY), Some(1));

        h.set_region(Region::Europe).unwrap();
        assert!(h.is_region_eu());
        assert_eq!(h.region_name(), "Europe");

        h.clear_region().unwrap();
        assert!(h.is_region_na());
        assert_eq!(h.preferences().get_int(REGION_KEY), None);
    }

    #[test]
    fn test_stored_value_is_used_on_creation() {
        let mut prefs = MemoryPreferences::new();
        prefs.set_int(REGION_KEY, 2).unwrap();
        let h = LocalizationHelper::with_region_code(prefs, Some("JP".to_string()));
        assert_eq!(h.region(), Region::Europe);
        assert_eq!(h.region_code(), Some("JP"));
    }

    #[test]
    fn test_unknown_stored_value_gives_other() {
        for raw in [3i64, 4, -1, 1000].iter().cloned() {
            let mut prefs = MemoryPreferences::new();
            prefs.set_int(REGION_KEY, raw).unwrap();
            let h = LocalizationHelper::with_region_code(prefs, Some("FR".to_string()));
            assert_eq!(h.region(), Region::Other, "raw: {}", raw);
        }
    }

    #[test]
    fn test_works_with_boxed_preferences() {
        let prefs: Box<dyn Preferences + Send> = Box::new(MemoryPreferences::new());
        let mut h = LocalizationHelper::with_region_code(prefs, Some("DE".to_string()));
        assert!(h.is_region_eu());
        h.set_region(Region::NorthAmerica).unwrap();
        h.refresh().unwrap();
        assert!(h.is_region_na());
    }

    #[test]
    fn test_refresh_picks_up_file_changes() {
        let path = scratch_path("preferences.json");
        let prefs = FilePreferences::open(&path).unwrap();
        let mut h = LocalizationHelper::with_region_code(prefs, Some("US".to_string()));
        assert_eq!(h.region(), Region::NorthAmerica);

        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"region": 2}"#).unwrap();
        assert_eq!(h.region(), Region::NorthAmerica);

        h.refresh().unwrap();
        assert_eq!(h.region(), Region::Europe);

        // override removed by someone else, locale applies again
        fs::write(&path, "{}").unwrap();
        h.refresh().unwrap();
        assert_eq!(h.region(), Region::NorthAmerica);

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_set_region_is_persisted_to_file() {
        let path = scratch_path("preferences.json");
        {
            let prefs = FilePreferences::open(&path).unwrap();
            let mut h = LocalizationHelper::with_region_code(prefs, Some("FR".to_string()));
            h.set_region(Region::Japan).unwrap();
        }
        let h = LocalizationHelper::with_region_code(FilePreferences::open(&path).unwrap(), Some("FR".to_string()));
        assert!(h.is_region_jpn());

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_malformed_file_falls_back_to_memory() {
        let path = scratch_path("preferences.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let mut prefs = preferences_at(Some(path.clone()));
        assert_eq!(prefs.get_int(REGION_KEY), None);
        prefs.set_int(REGION_KEY, 1).unwrap();
        assert_eq!(prefs.get_int(REGION_KEY), Some(1));
        // broken file is left alone
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");

        let mut prefs = preferences_at(None);
        assert_eq!(prefs.get_int(REGION_KEY), None);
        prefs.set_int(REGION_KEY, 2).unwrap();
        assert_eq!(prefs.get_int(REGION_KEY), Some(2));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}
