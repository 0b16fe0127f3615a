use serde::{Deserialize, Serialize};

/// Typography variants of themed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextType {
    #[default]
    Default,
    Title,
    Subtitle,
    Small,
    SmallBold,
    Link,
    Code,
}

impl TextType {
    /// (font size, line height, weight)
    pub fn metrics(&self) -> (u16, u16, u16) {
        match self {
            TextType::Default => (16, 24, 500),
            TextType::Title => (48, 52, 600),
            TextType::Subtitle => (32, 44, 600),
            TextType::Small => (14, 20, 500),
            TextType::SmallBold => (14, 20, 700),
            TextType::Link => (14, 30, 400),
            TextType::Code => (12, 20, 500),
        }
    }

    pub fn is_monospace(&self) -> bool {
        matches!(self, TextType::Code)
    }

    /// Inline CSS for the variant, without color.
    pub fn css(&self) -> String {
        let (size, line_height, weight) = self.metrics();
        let mut css = format!(
            "font-size: {}px; line-height: {}px; font-weight: {};",
            size, line_height, weight
        );
        if self.is_monospace() {
            css.push_str(" font-family: ui-monospace, Menlo, monospace;");
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_bold_is_heavier_than_small() {
        assert_eq!(TextType::Small.metrics().0, TextType::SmallBold.metrics().0);
        assert!(TextType::SmallBold.metrics().2 > TextType::Small.metrics().2);
    }

    #[test]
    fn test_code_css_is_monospace() {
        assert!(TextType::Code.css().contains("monospace"));
        assert_eq!(
            TextType::Small.css(),
            "font-size: 14px; line-height: 20px; font-weight: 500;"
        );
    }
}
