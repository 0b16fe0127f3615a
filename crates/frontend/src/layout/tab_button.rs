//! Pressable tab element.
//!
//! Driven by a [`TabButtonModel`]. Route targets render as plain anchors so the
//! router's link handling performs the navigation; external targets open in a
//! new context. While the model is focused the button is the active
//! destination: it drops its `href` and cannot be re-selected.

use super::use_tab_styles;
use crate::shared::components::external_link::{log_external_open, EXTERNAL_REL, EXTERNAL_TARGET};
use crate::shared::components::themed_text::ThemedText;
use crate::shared::components::themed_view::ThemedView;
use contracts::enums::{TextType, ThemeColor};
use contracts::shared::interaction::InteractionState;
use contracts::shared::style::tab_button_style;
use contracts::shared::tab_list::TabButtonModel;
use leptos::prelude::*;

/// Resets user-agent link styling; the resolved rules follow it.
const BUTTON_RESET: &str =
    "display: inline-flex; align-items: center; text-decoration: none; outline: none; \
     background: transparent; cursor: pointer; user-select: none;";

const DISABLED_EXTRA: &str = "cursor: default; pointer-events: none;";

#[component]
pub fn TabButton(
    #[prop(into)] model: Signal<TabButtonModel>,
    children: Children,
) -> impl IntoView {
    let styles = use_tab_styles();
    let pressed = RwSignal::new(false);
    let hovered = RwSignal::new(false);
    let focused = RwSignal::new(false);

    let is_disabled = move || model.with(|m| m.is_disabled());
    let external = move || model.with(|m| m.target.is_external());

    let state = move || InteractionState {
        pressed: pressed.get(),
        hovered: hovered.get(),
        focused: focused.get(),
        is_active: model.with(|m| m.is_focused),
    };

    let style = move || {
        let state = state();
        let resolved = tab_button_style(&styles.get(), state).to_css();
        if state.is_disabled() {
            format!("{} {} {}", BUTTON_RESET, resolved, DISABLED_EXTRA)
        } else {
            format!("{} {}", BUTTON_RESET, resolved)
        }
    };

    let on_click = move |_| {
        let (disabled, external, href) = model.with_untracked(|m| {
            (m.is_disabled(), m.target.is_external(), m.target.href().to_string())
        });
        if disabled {
            return;
        }
        if external {
            log_external_open(&href);
        } else {
            log::debug!("Tab activated: {}", href);
        }
    };

    let label_color = Signal::derive(move || model.with(|m| m.label_color()));

    view! {
        <a
            class="tab-button"
            role=move || model.with(|m| m.target.aria_role())
            href=move || model.with(|m| (!m.is_disabled()).then(|| m.target.href().to_string()))
            target=move || external().then_some(EXTERNAL_TARGET)
            rel=move || external().then_some(EXTERNAL_REL)
            aria-selected=move || (!external()).then(|| is_disabled().to_string())
            aria-disabled=move || is_disabled().then_some("true")
            tabindex=move || if is_disabled() { "-1" } else { "0" }
            style=style
            on:click=on_click
            on:pointerdown=move |_| pressed.set(true)
            on:pointerup=move |_| pressed.set(false)
            on:pointercancel=move |_| pressed.set(false)
            on:pointerenter=move |_| hovered.set(true)
            on:pointerleave=move |_| {
                hovered.set(false);
                pressed.set(false);
            }
            on:focus=move |_| focused.set(true)
            on:blur=move |_| focused.set(false)
        >
            <ThemedView
                background=ThemeColor::BackgroundElement
                style=Signal::stored("display: inline-flex; align-items: center; gap: 4px;".to_string())
            >
                <ThemedText text_type=TextType::Small color=label_color>
                    {children()}
                </ThemedText>
            </ThemedView>
        </a>
    }
}
