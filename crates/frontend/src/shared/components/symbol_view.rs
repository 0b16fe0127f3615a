use crate::shared::icons;
use leptos::prelude::*;

/// Named glyph tinted with `tint` (any CSS color).
#[component]
pub fn SymbolView(
    name: &'static str,
    #[prop(default = 12)] size: u32,
    #[prop(into)] tint: Signal<String>,
) -> impl IntoView {
    view! {
        <span
            class="symbol-view"
            style=move || format!("display: inline-flex; color: {};", tint.get())
        >
            {icons::icon(name, size)}
        </span>
    }
}
