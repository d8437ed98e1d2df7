use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Preference key used when the configuration does not name one.
pub const DEFAULT_STORAGE_KEY: &str = "app-theme";
/// Root-node custom property carrying the page background color.
pub const BACKGROUND_PROPERTY: &str = "--background";
/// Root-node custom property carrying the page foreground color.
pub const FOREGROUND_PROPERTY: &str = "--foreground";

/// Display mode of the presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Both root-node class markers. Exactly one is applied at a time.
    pub const CLASS_MARKERS: [&'static str; 2] = ["light", "dark"];

    /// Storage value and class marker for this mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Fixed custom-property colors applied to the root node for this mode.
    pub const fn colors(self) -> ThemeColors {
        match self {
            Self::Light => ThemeColors::LIGHT,
            Self::Dark => ThemeColors::DARK,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    /// Accepts exactly `light` or `dark`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::UnknownThemeMode(other.to_string())),
        }
    }
}

/// Background/foreground pair written to [`BACKGROUND_PROPERTY`] and [`FOREGROUND_PROPERTY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: &'static str,
    pub foreground: &'static str,
}

impl ThemeColors {
    pub const LIGHT: Self = Self {
        background: "#ffffff",
        foreground: "#111111",
    };
    pub const DARK: Self = Self {
        background: "#111111",
        foreground: "#ffffff",
    };
}

/// Construction-time controller configuration. Read once, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Mode used when neither a persisted record nor a system preference is available.
    pub default_theme: ThemeMode,
    /// Consult and follow the system color-scheme preference.
    pub enable_system_theme: bool,
    /// Preference key holding the persisted mode.
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: ThemeMode::Light,
            enable_system_theme: true,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl ThemeConfig {
    pub fn with_default_theme(mut self, default_theme: ThemeMode) -> Self {
        self.default_theme = default_theme;
        self
    }

    pub fn with_system_theme(mut self, enabled: bool) -> Self {
        self.enable_system_theme = enabled;
        self
    }

    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    /// Parses a JSON configuration document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] for malformed JSON, an unknown `default_theme`, or an
    /// empty `storage_key`.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| ThemeError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] when `storage_key` is blank.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.storage_key.trim().is_empty() {
            return Err(ThemeError::InvalidConfig(
                "storage_key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
