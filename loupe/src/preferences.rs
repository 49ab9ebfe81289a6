// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::ViewerConfig;
use crate::error::PreferenceError;

/// Which storage area a preference lives in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageArea {
    /// Synchronized across the user's devices.
    #[default]
    Sync,
    /// Local to this device.
    Local,
}

/// A preference was written or removed somewhere.
///
/// Hosts deliver these to every live [`Viewer`](crate::Viewer) through
/// [`Viewer::on_preference_changed`](crate::Viewer::on_preference_changed).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreferenceChange {
    /// Area the change happened in.
    pub area: StorageArea,
    /// Key that changed.
    pub key: String,
    /// The new value, or `None` when the key was removed or is not a boolean.
    pub new_value: Option<bool>,
}

/// Persistent boolean preferences.
pub trait PreferenceStore {
    /// Reads `key`, returning `default` when it has never been written.
    fn get_bool(&self, area: StorageArea, key: &str, default: bool)
    -> Result<bool, PreferenceError>;

    /// Writes `key`.
    fn set_bool(&mut self, area: StorageArea, key: &str, value: bool)
    -> Result<(), PreferenceError>;
}

/// In-memory [`PreferenceStore`].
///
/// Values are kept as [`toml::Value`] so a store can hold entries of the
/// wrong type. Every write and removal is recorded; drain the log with
/// [`take_changes`](Self::take_changes) and feed it to the viewers.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<(StorageArea, String), toml::Value>,
    changes: Vec<PreferenceChange>,
    unavailable: Option<String>,
}

impl MemoryPreferenceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an arbitrary value, recording the change.
    pub fn insert_value(&mut self, area: StorageArea, key: &str, value: impl Into<toml::Value>) {
        let value = value.into();
        self.changes.push(PreferenceChange {
            area,
            key: key.to_owned(),
            new_value: value.as_bool(),
        });
        self.values.insert((area, key.to_owned()), value);
    }

    /// Removes `key`, recording the change if it was present.
    pub fn remove(&mut self, area: StorageArea, key: &str) -> Option<toml::Value> {
        let old = self.values.remove(&(area, key.to_owned()))?;
        self.changes.push(PreferenceChange {
            area,
            key: key.to_owned(),
            new_value: None,
        });
        Some(old)
    }

    /// Makes every read and write fail with [`PreferenceError::Unavailable`],
    /// or restores the store with `None`.
    pub fn set_unavailable(&mut self, reason: Option<&str>) {
        self.unavailable = reason.map(str::to_owned);
    }

    /// Drains the recorded changes, oldest first.
    pub fn take_changes(&mut self) -> Vec<PreferenceChange> {
        std::mem::take(&mut self.changes)
    }

    fn check_available(&self) -> Result<(), PreferenceError> {
        match &self.unavailable {
            Some(reason) => Err(PreferenceError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_bool(
        &self,
        area: StorageArea,
        key: &str,
        default: bool,
    ) -> Result<bool, PreferenceError> {
        self.check_available()?;
        match self.values.get(&(area, key.to_owned())) {
            None => Ok(default),
            Some(value) => value.as_bool().ok_or_else(|| PreferenceError::WrongType {
                key: key.to_owned(),
            }),
        }
    }

    fn set_bool(
        &mut self,
        area: StorageArea,
        key: &str,
        value: bool,
    ) -> Result<(), PreferenceError> {
        self.check_available()?;
        self.insert_value(area, key, value);
        Ok(())
    }
}

/// Two-way binding between a checkbox and a boolean preference.
///
/// This is the settings-page side of the minimap flag: [`load`](Self::load)
/// fills the checkbox when the page opens and
/// [`set_checked`](Self::set_checked) persists every user toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreferenceToggle {
    area: StorageArea,
    key: String,
    default: bool,
    checked: bool,
}

impl PreferenceToggle {
    /// Creates a toggle for `key`, showing `default` until loaded.
    #[must_use]
    pub fn new(area: StorageArea, key: &str, default: bool) -> Self {
        Self {
            area,
            key: key.to_owned(),
            default,
            checked: default,
        }
    }

    /// Creates the toggle for the minimap flag described by `config`.
    #[must_use]
    pub fn for_minimap(config: &ViewerConfig) -> Self {
        Self::new(
            config.preference_area,
            &config.preference_key,
            config.show_minimap_default,
        )
    }

    /// Whether the checkbox is checked.
    #[must_use]
    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Reads the stored value into the checkbox.
    ///
    /// On failure the checkbox shows the default.
    pub fn load(&mut self, store: &impl PreferenceStore) -> Result<bool, PreferenceError> {
        match store.get_bool(self.area, &self.key, self.default) {
            Ok(value) => {
                self.checked = value;
                Ok(value)
            }
            Err(err) => {
                self.checked = self.default;
                Err(err)
            }
        }
    }

    /// The user toggled the checkbox; persists the new value.
    pub fn set_checked(
        &mut self,
        store: &mut impl PreferenceStore,
        checked: bool,
    ) -> Result<(), PreferenceError> {
        self.checked = checked;
        store.set_bool(self.area, &self.key, checked)
    }
}
