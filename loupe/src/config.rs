// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use loupe_input::InputBindings;
use loupe_minimap::DEFAULT_MAP_SIZE;
use loupe_viewport::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_ZOOM_STEP, ScaleLimits};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewerError};
use crate::preferences::StorageArea;

/// Default id of the image element the viewer attaches to.
pub const DEFAULT_TARGET_ID: &str = "viewer";

/// Default preference key for the minimap flag.
pub const DEFAULT_PREFERENCE_KEY: &str = "showNavigator";

/// Configuration for a [`Viewer`](crate::Viewer).
///
/// Every field has a default, so a TOML document only needs to name what it
/// changes:
///
/// ```rust
/// use loupe::ViewerConfig;
///
/// let config = ViewerConfig::from_toml_str("max_scale = 8.0\nmap_size = 120.0").unwrap();
/// assert_eq!(config.max_scale, 8.0);
/// assert_eq!(config.min_scale, 0.2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Id of the image element to attach to.
    pub target_id: String,
    /// Lower scale bound.
    pub min_scale: f64,
    /// Upper scale bound.
    pub max_scale: f64,
    /// Scale change per wheel tick and per zoom button click.
    pub zoom_step: f64,
    /// Side of the square minimap, in pixels.
    pub map_size: f64,
    /// Whether the minimap is shown when no preference has been stored.
    pub show_minimap_default: bool,
    /// Preference key holding the minimap flag.
    pub preference_key: String,
    /// Storage area holding the minimap flag.
    pub preference_area: StorageArea,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            target_id: DEFAULT_TARGET_ID.to_owned(),
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            zoom_step: DEFAULT_ZOOM_STEP,
            map_size: DEFAULT_MAP_SIZE,
            show_minimap_default: true,
            preference_key: DEFAULT_PREFERENCE_KEY.to_owned(),
            preference_area: StorageArea::Sync,
        }
    }
}

impl ViewerConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every numeric field is usable.
    pub fn validate(&self) -> Result<()> {
        let numbers = [
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("zoom_step", self.zoom_step),
            ("map_size", self.map_size),
        ];
        for (name, value) in numbers {
            if !value.is_finite() || value <= 0.0 {
                return Err(ViewerError::Config(format!(
                    "`{name}` must be a positive number, got {value}"
                )));
            }
        }
        if self.min_scale > self.max_scale {
            return Err(ViewerError::Config(format!(
                "`min_scale` ({}) is larger than `max_scale` ({})",
                self.min_scale, self.max_scale
            )));
        }
        if self.target_id.is_empty() {
            return Err(ViewerError::Config("`target_id` is empty".to_owned()));
        }
        Ok(())
    }

    /// Scale limits described by this configuration.
    #[must_use]
    pub fn limits(&self) -> ScaleLimits {
        ScaleLimits::new(self.min_scale, self.max_scale)
    }

    /// Input bindings described by this configuration.
    #[must_use]
    pub fn bindings(&self) -> InputBindings {
        InputBindings::default().with_zoom_step(self.zoom_step)
    }
}
