//! Tab list container: brand label followed by the tab buttons it is given.
//! Which buttons exist (including the web-only documentation link) is decided
//! by the tab list model the caller renders.

use super::tab_button::TabButton;
use super::use_tab_styles;
use crate::shared::components::symbol_view::SymbolView;
use crate::shared::components::themed_text::ThemedText;
use crate::shared::components::themed_view::ThemedView;
use crate::shared::theme::use_theme;
use contracts::enums::{TextType, ThemeColor};
use contracts::shared::tab_list::TabButtonModel;
use leptos::prelude::*;

/// Tab button for one entry of the tab list model; the glyph, if any, follows
/// the label.
#[component]
pub fn TabListButton(#[prop(into)] model: Signal<TabButtonModel>) -> impl IntoView {
    let theme = use_theme();
    let (label, icon) = model.with_untracked(|m| (m.label.clone(), m.icon));
    let tint = Signal::derive(move || theme.palette().text.to_string());

    let content = match icon {
        Some(name) => view! {
            {label}
            <SymbolView name=name size=12 tint=tint />
        }
        .into_any(),
        None => label.into_any(),
    };

    view! { <TabButton model=model>{content}</TabButton> }
}

#[component]
pub fn TabList(#[prop(into)] brand: String, children: Children) -> impl IntoView {
    let styles = use_tab_styles();

    view! {
        <nav
            class="tab-list"
            role="tablist"
            style=move || format!("box-sizing: border-box; top: 0; left: 0; {}", styles.get().tab_list_container.to_css())
        >
            <ThemedView
                background=ThemeColor::BackgroundElement
                style=Signal::derive(move || styles.get().inner_container.to_css())
            >
                <ThemedText
                    text_type=TextType::SmallBold
                    style=Signal::derive(move || styles.get().brand_text.to_css())
                >
                    {brand}
                </ThemedText>

                {children()}
            </ThemedView>
        </nav>
    }
}
