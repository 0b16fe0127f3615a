use crate::shared::theme::use_theme;
use contracts::enums::ThemeColor;
use leptos::prelude::*;

/// Container painted with a palette background token.
#[component]
pub fn ThemedView(
    #[prop(default = ThemeColor::Background)] background: ThemeColor,
    #[prop(optional, into)] style: Option<Signal<String>>,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let css = move || {
        format!(
            "background-color: {}; {}",
            theme.palette().get(background),
            style.map(|s| s.get()).unwrap_or_default()
        )
    };

    view! {
        <div class="themed-view" style=css>
            {children()}
        </div>
    }
}
