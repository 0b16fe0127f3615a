use serde::{Deserialize, Serialize};

use crate::shared::theme::{Palette, DARK, LIGHT};

/// Appearance mode reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
            ColorScheme::Unspecified => "unspecified",
        }
    }

    /// Parse a mode name. Anything that is not `light` or `dark` is `Unspecified`.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "light" => ColorScheme::Light,
            "dark" => ColorScheme::Dark,
            _ => ColorScheme::Unspecified,
        }
    }

    /// Collapse `Unspecified` to `Light`.
    pub fn resolved(&self) -> ColorScheme {
        match self {
            ColorScheme::Dark => ColorScheme::Dark,
            ColorScheme::Light | ColorScheme::Unspecified => ColorScheme::Light,
        }
    }

    /// Color tokens for this mode.
    pub fn palette(&self) -> &'static Palette {
        match self.resolved() {
            ColorScheme::Dark => &DARK,
            _ => &LIGHT,
        }
    }
}
