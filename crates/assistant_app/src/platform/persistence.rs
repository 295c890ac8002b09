use std::collections::BTreeMap;
use std::path::PathBuf;

use assistant_core::{PreferenceStore, ThemeError};
use assistant_engine::{read_optional, AtomicFileWriter};
use engine_logging::engine_debug;

const PREFERENCES_FILENAME: &str = "preferences.ron";

/// String preferences kept as a RON map in the state directory.
///
/// Every read goes to disk so edits made by another instance are picked up.
pub(crate) struct FileThemeStore {
    writer: AtomicFileWriter,
}

impl FileThemeStore {
    pub(crate) fn new(state_dir: PathBuf) -> Self {
        Self {
            writer: AtomicFileWriter::new(state_dir),
        }
    }

    fn path(&self) -> PathBuf {
        self.writer.dir().join(PREFERENCES_FILENAME)
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, ThemeError> {
        let path = self.path();
        let Some(text) = read_optional(&path).map_err(|err| ThemeError::Read(err.to_string()))?
        else {
            return Ok(BTreeMap::new());
        };
        ron::from_str(&text)
            .map_err(|err| ThemeError::Read(format!("{}: {}", path.display(), err)))
    }
}

impl PreferenceStore for FileThemeStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.read_all()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        // A corrupt file is replaced rather than blocking the write.
        let mut values = self.read_all().unwrap_or_default();
        values.insert(key.to_string(), value.to_string());

        let content = ron::ser::to_string_pretty(&values, ron::ser::PrettyConfig::new())
            .map_err(|err| ThemeError::Write(err.to_string()))?;
        let target = self
            .writer
            .write(PREFERENCES_FILENAME, &content)
            .map_err(|err| ThemeError::Write(err.to_string()))?;
        engine_debug!("Saved preference {}={} to {:?}", key, value, target);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use assistant_core::THEME_KEY;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn empty_directory_has_no_preference() {
        let temp = TempDir::new().unwrap();
        let store = FileThemeStore::new(temp.path().join("state"));
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn written_value_survives_a_new_store() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("state");

        let mut store = FileThemeStore::new(dir.clone());
        store.set(THEME_KEY, "dark").unwrap();
        store.set("other", "kept").unwrap();

        let reopened = FileThemeStore::new(dir);
        assert_eq!(reopened.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn corrupt_file_is_a_read_error_but_can_be_overwritten() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PREFERENCES_FILENAME), "{ not ron").unwrap();

        let mut store = FileThemeStore::new(temp.path().to_path_buf());
        assert!(matches!(store.get(THEME_KEY), Err(ThemeError::Read(_))));

        store.set(THEME_KEY, "light").unwrap();
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn unwritable_location_is_a_write_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("file");
        fs::write(&blocker, "x").unwrap();

        let mut store = FileThemeStore::new(blocker);
        assert!(matches!(store.set(THEME_KEY, "dark"), Err(ThemeError::Write(_))));
    }
}
