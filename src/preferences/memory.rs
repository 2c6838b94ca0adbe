use std::collections::HashMap;

use crate::preferences::{Preferences, PreferencesError};

/// MemoryPreferences keeps values in memory only. Nothing is ever persisted.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: HashMap<String, i64>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Preferences for MemoryPreferences {
    fn get_int(&self, key: &str) -> Option<i64> {
        self.values.get(key).cloned()
    }

    fn set_int(&mut self, key: &str, value: i64) -> Result<(), PreferencesError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PreferencesError> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let mut p = MemoryPreferences::new();
        assert_eq!(p.get_int("region"), None);
        p.set_int("region", 2).unwrap();
        assert_eq!(p.get_int("region"), Some(2));
        p.set_int("region", 0).unwrap();
        assert_eq!(p.get_int("region"), Some(0));
        p.remove("region").unwrap();
        p.remove("region").unwrap();
        assert_eq!(p.get_int("region"), None);
    }
}
