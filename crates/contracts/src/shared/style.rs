//! Style records and the tab bar style resolver.
//!
//! A [`Style`] is a sparse set of visual attributes. Styles are layered with
//! [`Style::merge`]: attributes set on the upper layer win, everything else
//! falls through from below. [`resolve_tab_styles`] derives the named rules of
//! the tab bar from the spacing profile and palette; it is pure and is simply
//! called again whenever one of its inputs changes.

use serde::Serialize;

use super::interaction::InteractionState;
use super::spacing::SpacingProfile;
use super::theme::Palette;

/// Opacity applied to a control while it is pressed.
pub const PRESSED_OPACITY: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Dimension {
    Px(f32),
    Percent(f32),
    Auto,
}

impl Dimension {
    pub fn css(&self) -> String {
        match self {
            Dimension::Px(v) => format!("{}px", v),
            Dimension::Percent(v) => format!("{}%", v),
            Dimension::Auto => "auto".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Position {
    Absolute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlexDirection {
    Row,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Align {
    Center,
}

impl Align {
    fn css(&self) -> &'static str {
        match self {
            Align::Center => "center",
        }
    }
}

/// Sparse record of visual attributes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Style {
    pub position: Option<Position>,
    pub width: Option<Dimension>,
    pub max_width: Option<Dimension>,
    pub padding: Option<Dimension>,
    pub padding_vertical: Option<Dimension>,
    pub padding_horizontal: Option<Dimension>,
    pub margin_right: Option<Dimension>,
    pub gap: Option<Dimension>,
    pub flex_direction: Option<FlexDirection>,
    pub flex_grow: Option<f32>,
    pub justify_content: Option<Align>,
    pub align_items: Option<Align>,
    pub border_radius: Option<Dimension>,
    pub border_width: Option<Dimension>,
    pub border_color: Option<&'static str>,
    pub opacity: Option<f32>,
}

macro_rules! merge_fields {
    ($base:expr, $over:expr; $($field:ident),* $(,)?) => {
        Style {
            $($field: $over.$field.or($base.$field),)*
        }
    };
}

impl Style {
    /// Layer `over` on top of `self`.
    pub fn merge(&self, over: &Style) -> Style {
        merge_fields!(self, over;
            position,
            width,
            max_width,
            padding,
            padding_vertical,
            padding_horizontal,
            margin_right,
            gap,
            flex_direction,
            flex_grow,
            justify_content,
            align_items,
            border_radius,
            border_width,
            border_color,
            opacity,
        )
    }

    /// Render as an inline CSS declaration list.
    pub fn to_css(&self) -> String {
        let mut decls: Vec<String> = Vec::new();
        let mut push = |name: &str, value: String| decls.push(format!("{}: {};", name, value));

        if let Some(position) = self.position {
            let value = match position {
                Position::Absolute => "absolute",
            };
            push("position", value.to_string());
        }
        if let Some(v) = self.width {
            push("width", v.css());
        }
        if let Some(v) = self.max_width {
            push("max-width", v.css());
        }
        if let Some(v) = self.padding {
            push("padding", v.css());
        }
        if let Some(v) = self.padding_vertical {
            push("padding-top", v.css());
            push("padding-bottom", v.css());
        }
        if let Some(v) = self.padding_horizontal {
            push("padding-left", v.css());
            push("padding-right", v.css());
        }
        if let Some(v) = self.margin_right {
            push("margin-right", v.css());
        }
        if let Some(direction) = self.flex_direction {
            push("display", "flex".to_string());
            let value = match direction {
                FlexDirection::Row => "row",
            };
            push("flex-direction", value.to_string());
        }
        if let Some(v) = self.flex_grow {
            push("flex-grow", v.to_string());
        }
        if let Some(v) = self.gap {
            push("gap", v.css());
        }
        if let Some(v) = self.justify_content {
            push("justify-content", v.css().to_string());
        }
        if let Some(v) = self.align_items {
            push("align-items", v.css().to_string());
        }
        if let Some(v) = self.border_radius {
            push("border-radius", v.css());
        }
        if let Some(v) = self.border_width {
            push("border-width", v.css());
            push("border-style", "solid".to_string());
        }
        if let Some(v) = self.border_color {
            push("border-color", v.to_string());
        }
        if let Some(v) = self.opacity {
            push("opacity", v.to_string());
        }

        decls.join(" ")
    }
}

/// Named rules of the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TabStyles {
    pub tab_list_container: Style,
    pub inner_container: Style,
    pub brand_text: Style,
    pub pressed: Style,
    pub focused: Style,
    pub tab_button_view: Style,
}

pub fn resolve_tab_styles(
    spacing: &SpacingProfile,
    palette: &Palette,
    max_content_width: f32,
) -> TabStyles {
    TabStyles {
        tab_list_container: Style {
            position: Some(Position::Absolute),
            width: Some(Dimension::Percent(100.0)),
            padding: Some(Dimension::Px(spacing.three)),
            justify_content: Some(Align::Center),
            align_items: Some(Align::Center),
            flex_direction: Some(FlexDirection::Row),
            ..Style::default()
        },
        inner_container: Style {
            padding_vertical: Some(Dimension::Px(spacing.two)),
            padding_horizontal: Some(Dimension::Px(spacing.five)),
            border_radius: Some(Dimension::Px(spacing.five)),
            flex_direction: Some(FlexDirection::Row),
            align_items: Some(Align::Center),
            flex_grow: Some(1.0),
            gap: Some(Dimension::Px(spacing.two)),
            max_width: Some(Dimension::Px(max_content_width)),
            ..Style::default()
        },
        brand_text: Style {
            margin_right: Some(Dimension::Auto),
            ..Style::default()
        },
        pressed: Style {
            opacity: Some(PRESSED_OPACITY),
            ..Style::default()
        },
        focused: Style {
            border_color: Some(palette.tint),
            ..Style::default()
        },
        tab_button_view: Style {
            padding_vertical: Some(Dimension::Px(spacing.one)),
            padding_horizontal: Some(Dimension::Px(spacing.three)),
            border_radius: Some(Dimension::Px(spacing.three)),
            border_width: Some(Dimension::Px(1.0)),
            border_color: Some(palette.background_element),
            ..Style::default()
        },
    }
}

/// Layers applied to a tab button, bottom first: base, focused, pressed.
pub fn tab_button_layers(styles: &TabStyles, state: InteractionState) -> Vec<&Style> {
    let mut layers = vec![&styles.tab_button_view];
    if state.shows_focus_ring() {
        layers.push(&styles.focused);
    }
    if state.shows_pressed() {
        layers.push(&styles.pressed);
    }
    layers
}

pub fn compose_layers<'a>(layers: impl IntoIterator<Item = &'a Style>) -> Style {
    layers
        .into_iter()
        .fold(Style::default(), |acc, layer| acc.merge(layer))
}

/// Final style of a tab button for the given interaction state.
pub fn tab_button_style(styles: &TabStyles, state: InteractionState) -> Style {
    compose_layers(tab_button_layers(styles, state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::theme::{DARK, LIGHT, MAX_CONTENT_WIDTH};

    fn styles() -> TabStyles {
        resolve_tab_styles(&SpacingProfile::REGULAR, &LIGHT, MAX_CONTENT_WIDTH)
    }

    #[test]
    fn test_resolver_uses_spacing_and_palette() {
        let s = resolve_tab_styles(&SpacingProfile::WIDE, &DARK, 640.0);
        assert_eq!(s.tab_list_container.padding, Some(Dimension::Px(20.0)));
        assert_eq!(s.inner_container.max_width, Some(Dimension::Px(640.0)));
        assert_eq!(s.inner_container.border_radius, Some(Dimension::Px(40.0)));
        assert_eq!(s.focused.border_color, Some(DARK.tint));
        assert_eq!(s.tab_button_view.border_color, Some(DARK.background_element));
        assert_eq!(s.brand_text.margin_right, Some(Dimension::Auto));
    }

    #[test]
    fn test_resolver_is_deterministic() {
        assert_eq!(styles(), styles());
    }

    #[test]
    fn test_idle_button_uses_base_only() {
        let s = styles();
        let style = tab_button_style(&s, InteractionState::default());
        assert_eq!(style, s.tab_button_view);
    }

    #[test]
    fn test_hover_on_active_button_has_no_focus_layer() {
        let s = styles();
        let state = InteractionState {
            hovered: true,
            focused: true,
            ..InteractionState::active()
        };
        let layers = tab_button_layers(&s, state);
        assert_eq!(layers.len(), 1);
        assert_eq!(
            tab_button_style(&s, state).border_color,
            Some(LIGHT.background_element)
        );
    }

    #[test]
    fn test_pressed_and_focused_compose() {
        let s = styles();
        let state = InteractionState {
            pressed: true,
            hovered: true,
            ..Default::default()
        };
        let style = tab_button_style(&s, state);
        assert_eq!(style.opacity, Some(PRESSED_OPACITY));
        assert_eq!(style.border_color, Some(LIGHT.tint));
        assert_eq!(style.padding_horizontal, Some(Dimension::Px(16.0)));
    }

    #[test]
    fn test_pressed_applies_to_active_button() {
        let s = styles();
        let state = InteractionState {
            pressed: true,
            ..InteractionState::active()
        };
        assert_eq!(tab_button_style(&s, state).opacity, Some(PRESSED_OPACITY));
    }

    #[test]
    fn test_merge_keeps_lower_attributes() {
        let base = Style {
            opacity: Some(1.0),
            border_color: Some("#111111"),
            ..Style::default()
        };
        let over = Style {
            border_color: Some("#222222"),
            ..Style::default()
        };
        let merged = base.merge(&over);
        assert_eq!(merged.opacity, Some(1.0));
        assert_eq!(merged.border_color, Some("#222222"));
    }

    #[test]
    fn test_to_css() {
        let css = styles().tab_list_container.to_css();
        assert_eq!(
            css,
            "position: absolute; width: 100%; padding: 16px; display: flex; \
             flex-direction: row; justify-content: center; align-items: center;"
        );
        assert_eq!(styles().pressed.to_css(), "opacity: 0.7;");
        assert_eq!(Style::default().to_css(), "");
    }
}
