// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors surfaced at the edges of the viewer.
///
/// The viewport itself never fails; these come from locating the image,
/// reading configuration and talking to the preference store.
#[derive(Error, Debug)]
pub enum ViewerError {
    /// The image element to attach to does not exist.
    #[error("no image element with id `{0}`")]
    MissingTarget(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The configuration text is not valid TOML for [`ViewerConfig`](crate::ViewerConfig).
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The preference store failed.
    #[error("preference store error: {0}")]
    Preference(#[from] PreferenceError),
}

/// Errors reported by a [`PreferenceStore`](crate::PreferenceStore).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    /// The backing storage cannot be reached.
    #[error("preference storage is unavailable: {0}")]
    Unavailable(String),

    /// The stored value has a different type.
    #[error("preference `{key}` is not a boolean")]
    WrongType {
        /// Key of the offending entry.
        key: String,
    },
}

/// Result alias for fallible viewer operations.
pub type Result<T> = std::result::Result<T, ViewerError>;
