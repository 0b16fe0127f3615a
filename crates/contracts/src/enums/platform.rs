use serde::{Deserialize, Serialize};

/// Execution platform, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Web,
    Ios,
    Android,
    Macos,
    Windows,
}

impl Platform {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "web" => Some(Platform::Web),
            "ios" => Some(Platform::Ios),
            "android" => Some(Platform::Android),
            "macos" => Some(Platform::Macos),
            "windows" => Some(Platform::Windows),
            _ => None,
        }
    }

    pub fn is_web(&self) -> bool {
        matches!(self, Platform::Web)
    }

    pub fn is_apple(&self) -> bool {
        matches!(self, Platform::Ios | Platform::Macos)
    }

    /// Glyph used next to outbound links.
    pub fn link_glyph(&self) -> &'static str {
        if self.is_apple() {
            "arrow.up.right.square"
        } else {
            "link"
        }
    }
}
