use crate::shared::theme::use_theme;
use contracts::enums::{TextType, ThemeColor};
use leptos::prelude::*;

/// Text styled by typography variant and colored from the palette.
#[component]
pub fn ThemedText(
    #[prop(optional)] text_type: TextType,
    /// Palette token for the text color (default: `text`).
    #[prop(optional, into)]
    color: Option<Signal<ThemeColor>>,
    /// Extra inline styles appended after the variant styles.
    #[prop(optional, into)]
    style: Option<Signal<String>>,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let color = color.unwrap_or_else(|| Signal::stored(ThemeColor::Text));

    let css = move || {
        let token = if text_type == TextType::Link {
            ThemeColor::Tint
        } else {
            color.get()
        };
        let extra = style.map(|s| s.get()).unwrap_or_default();
        format!(
            "{} color: {}; {}",
            text_type.css(),
            theme.palette().get(token),
            extra
        )
    };

    view! {
        <span class="themed-text" style=css>
            {children()}
        </span>
    }
}
