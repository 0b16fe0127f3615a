//! Color tokens for the light and dark appearance modes.

use serde::Serialize;

use crate::enums::ThemeColor;

/// Upper bound for the width of centered content, in px.
pub const MAX_CONTENT_WIDTH: f32 = 800.0;

/// Palette of color tokens for one appearance mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub text: &'static str,
    pub background: &'static str,
    pub background_element: &'static str,
    pub background_selected: &'static str,
    pub text_secondary: &'static str,
    pub tint: &'static str,
}

pub const LIGHT: Palette = Palette {
    text: "#000000",
    background: "#ffffff",
    background_element: "#F0F0F3",
    background_selected: "#E0E1E6",
    text_secondary: "#60646C",
    tint: "#0a7ea4",
};

pub const DARK: Palette = Palette {
    text: "#ffffff",
    background: "#000000",
    background_element: "#212225",
    background_selected: "#2E3135",
    text_secondary: "#B0B4BA",
    tint: "#3fb5e0",
};

impl Palette {
    pub fn get(&self, color: ThemeColor) -> &'static str {
        match color {
            ThemeColor::Text => self.text,
            ThemeColor::Background => self.background,
            ThemeColor::BackgroundElement => self.background_element,
            ThemeColor::BackgroundSelected => self.background_selected,
            ThemeColor::TextSecondary => self.text_secondary,
            ThemeColor::Tint => self.tint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_lookup() {
        assert_eq!(LIGHT.get(ThemeColor::Tint), LIGHT.tint);
        assert_eq!(DARK.get(ThemeColor::TextSecondary), "#B0B4BA");
        assert_eq!(DARK.get(ThemeColor::Background), "#000000");
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(LIGHT, DARK);
    }
}
