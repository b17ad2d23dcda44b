//! Layout context and theme settings.
//!
//! Layout strategies never reach for global state. Every pass receives a
//! [`LayoutContext`] snapshot taken from an [`Environment`], which combines the
//! theme (the padding unit) and the device (its orientation) behind one seam.
//!
//! [`ThemeSettings`] is the stock environment. Its values can be changed at
//! runtime; containers pick up the new values on their next resize or refresh.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::LayoutError;

/// Padding used when no theme configuration is supplied.
pub const DEFAULT_PADDING: f32 = 4.0;

/// Environment variable overriding the padding unit.
pub const PADDING_ENV: &str = "WEFT_PADDING";

/// Environment variable overriding the device orientation.
pub const ORIENTATION_ENV: &str = "WEFT_ORIENTATION";

/// Device orientation, consulted by adaptive grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn is_horizontal(self) -> bool {
        self == Orientation::Horizontal
    }
}

impl std::str::FromStr for Orientation {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "landscape" => Ok(Orientation::Horizontal),
            "vertical" | "portrait" => Ok(Orientation::Vertical),
            other => Err(LayoutError::InvalidOrientation(other.to_string())),
        }
    }
}

/// Read-only values a layout pass depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutContext {
    /// Gap between children and inset from container edges.
    pub padding: f32,
    /// Current device orientation.
    pub orientation: Orientation,
}

impl LayoutContext {
    pub fn new(padding: f32, orientation: Orientation) -> Self {
        Self {
            padding,
            orientation,
        }
    }

    /// A context with the given padding and a horizontal device.
    pub fn with_padding(padding: f32) -> Self {
        Self::new(padding, Orientation::Horizontal)
    }

    /// Snapshot the current values of an environment.
    pub fn from_env(env: &dyn Environment) -> Self {
        Self::new(env.padding(), env.orientation())
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::with_padding(DEFAULT_PADDING)
    }
}

/// Source of the values captured in a [`LayoutContext`].
pub trait Environment: Send + Sync {
    /// The theme padding unit. Must be finite and non-negative.
    fn padding(&self) -> f32;

    /// The device orientation.
    fn orientation(&self) -> Orientation;
}

/// Serializable theme configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub padding: f32,
    pub orientation: Orientation,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            orientation: Orientation::Horizontal,
        }
    }
}

impl ThemeConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: ThemeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Build a configuration from `WEFT_PADDING` and `WEFT_ORIENTATION`,
    /// falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self, LayoutError> {
        let mut config = ThemeConfig::default();

        if let Ok(raw) = std::env::var(PADDING_ENV) {
            config.padding = raw
                .trim()
                .parse::<f32>()
                .map_err(|_| LayoutError::InvalidPaddingValue(raw.clone()))?;
        }
        if let Ok(raw) = std::env::var(ORIENTATION_ENV) {
            config.orientation = raw.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject padding values that would produce nonsensical geometry.
    pub fn validate(&self) -> Result<(), LayoutError> {
        validate_padding(self.padding)
    }
}

fn validate_padding(padding: f32) -> Result<(), LayoutError> {
    if !padding.is_finite() || padding < 0.0 {
        return Err(LayoutError::InvalidPadding(padding));
    }
    Ok(())
}

/// The stock [`Environment`]: a theme padding and a device orientation that
/// can be changed while containers are alive.
#[derive(Debug)]
pub struct ThemeSettings {
    padding_bits: AtomicU32,
    vertical: AtomicBool,
}

impl ThemeSettings {
    pub fn new(config: ThemeConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self {
            padding_bits: AtomicU32::new(config.padding.to_bits()),
            vertical: AtomicBool::new(!config.orientation.is_horizontal()),
        })
    }

    /// Change the padding unit. Takes effect on the next layout pass.
    pub fn set_padding(&self, padding: f32) -> Result<(), LayoutError> {
        validate_padding(padding)?;
        debug!(padding, "theme padding changed");
        self.padding_bits.store(padding.to_bits(), Ordering::Relaxed);
        Ok(())
    }

    /// Change the device orientation. Takes effect on the next layout pass.
    pub fn set_orientation(&self, orientation: Orientation) {
        debug!(?orientation, "device orientation changed");
        self.vertical
            .store(!orientation.is_horizontal(), Ordering::Relaxed);
    }

    /// Current values as a serializable configuration.
    pub fn config(&self) -> ThemeConfig {
        ThemeConfig {
            padding: self.padding(),
            orientation: self.orientation(),
        }
    }
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            padding_bits: AtomicU32::new(DEFAULT_PADDING.to_bits()),
            vertical: AtomicBool::new(false),
        }
    }
}

impl Environment for ThemeSettings {
    fn padding(&self) -> f32 {
        f32::from_bits(self.padding_bits.load(Ordering::Relaxed))
    }

    fn orientation(&self) -> Orientation {
        if self.vertical.load(Ordering::Relaxed) {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }
}
