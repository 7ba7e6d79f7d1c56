//! Persisted animation preference.

use core::fmt::Debug;

use log::{debug, warn};

/// Application-scoped key the preference is stored under.
pub const PREFERENCE_KEY: &str = "folio.animations-enabled";

/// Whether flip timing and decorative effects are active.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnimationPreference {
    pub enabled: bool,
}

impl Default for AnimationPreference {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl AnimationPreference {
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub const fn toggled(self) -> Self {
        Self {
            enabled: !self.enabled,
        }
    }
}

pub fn encode_enabled(preference: AnimationPreference) -> &'static str {
    if preference.enabled { "true" } else { "false" }
}

pub fn decode_enabled(raw: &str) -> Option<AnimationPreference> {
    match raw.trim() {
        "true" | "1" => Some(AnimationPreference::new(true)),
        "false" | "0" => Some(AnimationPreference::new(false)),
        _ => None,
    }
}

/// Abstract preference persistence backend.
pub trait PreferenceStore {
    type Error;

    fn load(&mut self) -> Result<Option<AnimationPreference>, Self::Error>;
    fn save(&mut self, preference: &AnimationPreference) -> Result<(), Self::Error>;
}

/// Read the stored preference, falling back to the default when it is
/// absent or unreadable.
pub fn load_or_default<S>(store: &mut S) -> AnimationPreference
where
    S: PreferenceStore,
    S::Error: Debug,
{
    match store.load() {
        Ok(Some(preference)) => {
            debug!("prefs: restored enabled={}", preference.enabled);
            preference
        }
        Ok(None) => {
            debug!("prefs: nothing stored; using default");
            AnimationPreference::default()
        }
        Err(err) => {
            warn!("prefs: load failed: {:?}; using default", err);
            AnimationPreference::default()
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MemoryStoreError {
    Corrupted,
    WriteRejected,
}

/// Volatile store holding the encoded value, used for tests and hosts
/// without storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryPreferenceStore {
    raw: Option<&'static str>,
    reject_writes: bool,
    writes: u32,
}

impl MemoryPreferenceStore {
    pub const fn new() -> Self {
        Self {
            raw: None,
            reject_writes: false,
            writes: 0,
        }
    }

    pub const fn with_raw(mut self, raw: &'static str) -> Self {
        self.raw = Some(raw);
        self
    }

    pub fn set_reject_writes(&mut self, reject_writes: bool) {
        self.reject_writes = reject_writes;
    }

    pub fn raw(&self) -> Option<&'static str> {
        self.raw
    }

    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    type Error = MemoryStoreError;

    fn load(&mut self) -> Result<Option<AnimationPreference>, Self::Error> {
        match self.raw {
            None => Ok(None),
            Some(raw) => decode_enabled(raw)
                .map(Some)
                .ok_or(MemoryStoreError::Corrupted),
        }
    }

    fn save(&mut self, preference: &AnimationPreference) -> Result<(), Self::Error> {
        if self.reject_writes {
            return Err(MemoryStoreError::WriteRejected);
        }
        self.raw = Some(encode_enabled(*preference));
        self.writes = self.writes.saturating_add(1);
        Ok(())
    }
}

/// Tracks the last persisted value and writes whenever the live one differs.
/// Failed writes stay pending and are retried on the next flush.
#[derive(Clone, Copy, Debug)]
pub struct PreferenceSync {
    last_saved: AnimationPreference,
    pending: Option<AnimationPreference>,
}

impl PreferenceSync {
    pub const fn new(initial: AnimationPreference) -> Self {
        Self {
            last_saved: initial,
            pending: None,
        }
    }

    pub fn track_current(&mut self, current: AnimationPreference) {
        if current == self.last_saved {
            self.pending = None;
            return;
        }
        self.pending = Some(current);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn flush<S>(&mut self, store: &mut S) -> bool
    where
        S: PreferenceStore,
        S::Error: Debug,
    {
        let Some(candidate) = self.pending else {
            return false;
        };

        match store.save(&candidate) {
            Ok(()) => {
                debug!("prefs: saved enabled={}", candidate.enabled);
                self.last_saved = candidate;
                self.pending = None;
                true
            }
            Err(err) => {
                warn!("prefs: save failed: {:?}; will retry", err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_defaults_to_enabled() {
        let mut store = MemoryPreferenceStore::new();
        assert_eq!(load_or_default(&mut store), AnimationPreference::new(true));
    }

    #[test]
    fn stored_value_is_restored() {
        let mut store = MemoryPreferenceStore::new().with_raw("false");
        assert_eq!(load_or_default(&mut store), AnimationPreference::new(false));

        let mut store = MemoryPreferenceStore::new().with_raw(" 0\n");
        assert!(!load_or_default(&mut store).enabled);
    }

    #[test]
    fn unreadable_value_falls_back_to_default() {
        let mut store = MemoryPreferenceStore::new().with_raw("maybe");
        assert_eq!(store.load(), Err(MemoryStoreError::Corrupted));
        assert!(load_or_default(&mut store).enabled);
    }

    #[test]
    fn sync_writes_every_change() {
        let mut store = MemoryPreferenceStore::new();
        let mut sync = PreferenceSync::new(AnimationPreference::default());

        sync.track_current(AnimationPreference::default());
        assert!(!sync.flush(&mut store));
        assert_eq!(store.writes(), 0);

        sync.track_current(AnimationPreference::new(false));
        assert!(sync.flush(&mut store));
        assert_eq!(store.raw(), Some("false"));

        sync.track_current(AnimationPreference::new(true));
        assert!(sync.flush(&mut store));
        assert_eq!(store.raw(), Some("true"));
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn failed_write_is_retried() {
        let mut store = MemoryPreferenceStore::new();
        store.set_reject_writes(true);
        let mut sync = PreferenceSync::new(AnimationPreference::default());

        sync.track_current(AnimationPreference::new(false));
        assert!(!sync.flush(&mut store));
        assert!(sync.is_pending());

        store.set_reject_writes(false);
        assert!(sync.flush(&mut store));
        assert!(!sync.is_pending());
        assert_eq!(store.raw(), Some("false"));
    }
}
