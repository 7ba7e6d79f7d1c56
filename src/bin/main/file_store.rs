use std::{fs, io, path::PathBuf};

use folio_core::settings::{
    AnimationPreference, PREFERENCE_KEY, PreferenceStore, decode_enabled, encode_enabled,
};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FileStoreError {
    Read(io::ErrorKind),
    Write(io::ErrorKind),
    Corrupted,
}

/// `key=value` lines on disk; other keys in the file are preserved.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_lines(&self) -> Result<Option<String>, FileStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(FileStoreError::Read(err.kind())),
        }
    }
}

fn value_for<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    text.lines().find_map(|line| {
        let (line_key, value) = line.split_once('=')?;
        (line_key.trim() == key).then_some(value)
    })
}

impl PreferenceStore for FilePreferenceStore {
    type Error = FileStoreError;

    fn load(&mut self) -> Result<Option<AnimationPreference>, Self::Error> {
        let Some(text) = self.read_lines()? else {
            return Ok(None);
        };
        let Some(raw) = value_for(&text, PREFERENCE_KEY) else {
            return Ok(None);
        };

        decode_enabled(raw)
            .map(Some)
            .ok_or(FileStoreError::Corrupted)
    }

    fn save(&mut self, preference: &AnimationPreference) -> Result<(), Self::Error> {
        let existing = self.read_lines()?.unwrap_or_default();
        let entry = format!("{}={}", PREFERENCE_KEY, encode_enabled(*preference));

        let mut replaced = false;
        let mut lines: Vec<String> = existing
            .lines()
            .map(|line| match line.split_once('=') {
                Some((key, _)) if key.trim() == PREFERENCE_KEY => {
                    replaced = true;
                    entry.clone()
                }
                _ => line.to_string(),
            })
            .collect();
        if !replaced {
            lines.push(entry);
        }

        let mut out = lines.join("\n");
        out.push('\n');
        fs::write(&self.path, out).map_err(|err| FileStoreError::Write(err.kind()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FilePreferenceStore::new(dir.path().join("prefs.txt"));
        assert_eq!(store.load(), Ok(None));
    }

    #[test]
    fn save_then_load_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.txt");
        fs::write(&path, "theme=dark\n").unwrap();

        let mut store = FilePreferenceStore::new(&path);
        store.save(&AnimationPreference::new(false)).unwrap();
        assert_eq!(store.load(), Ok(Some(AnimationPreference::new(false))));

        store.save(&AnimationPreference::new(true)).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, format!("theme=dark\n{}=true\n", PREFERENCE_KEY));
    }

    #[test]
    fn garbage_value_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.txt");
        fs::write(&path, format!("{}=sometimes\n", PREFERENCE_KEY)).unwrap();

        let mut store = FilePreferenceStore::new(&path);
        assert_eq!(store.load(), Err(FileStoreError::Corrupted));
    }
}
