use serde::{Deserialize, Serialize};

/// Name of a palette token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeColor {
    #[default]
    Text,
    Background,
    BackgroundElement,
    BackgroundSelected,
    TextSecondary,
    Tint,
}
