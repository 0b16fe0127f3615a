//! Explore: shows the resolved appearance, spacing and tab list state.

use crate::layout::use_tab_styles;
use crate::shared::components::themed_text::ThemedText;
use crate::shared::config::use_config;
use crate::shared::page_frame::PageFrame;
use crate::shared::screen::use_screen;
use crate::shared::theme::use_theme;
use contracts::enums::{TextType, ThemeColor};
use contracts::shared::destination::DESTINATIONS;
use contracts::shared::tab_list::build_tab_list;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use thaw::Card;

fn pretty<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("<{}>", e))
}

#[component]
fn Section(title: &'static str, #[prop(into)] body: Signal<String>) -> impl IntoView {
    view! {
        <Card attr:style="padding: 12px;">
            <ThemedText text_type=TextType::SmallBold>{title}</ThemedText>
            <pre style="margin: 0; white-space: pre-wrap;">
                <ThemedText text_type=TextType::Code color=Signal::stored(ThemeColor::TextSecondary)>
                    {move || body.get()}
                </ThemedText>
            </pre>
        </Card>
    }
}

#[component]
pub fn ExplorePage() -> impl IntoView {
    let config = use_config();
    let theme = use_theme();
    let screen = use_screen();
    let styles = use_tab_styles();
    let location = use_location();

    let appearance = Signal::derive(move || {
        let scheme = theme.scheme();
        format!(
            "scheme: {} (resolved: {})\npalette: {}",
            scheme.as_str(),
            scheme.resolved().as_str(),
            pretty(scheme.palette())
        )
    });

    let layout = Signal::derive(move || {
        format!(
            "width: {}px\nclass: {:?}\nspacing: {}",
            screen.width.get(),
            screen.class(),
            pretty(&screen.spacing())
        )
    });

    let config_dump = pretty(&config);
    let configuration = Signal::derive(move || config_dump.clone());

    let brand = config.brand_label.clone();
    let docs_url = config.docs_url.clone();
    let platform = config.platform;
    let tab_list = Signal::derive(move || {
        let model = build_tab_list(
            &brand,
            &DESTINATIONS,
            &location.pathname.get(),
            platform,
            &docs_url,
        );
        pretty(&model)
    });

    let rules = Signal::derive(move || pretty(&styles.get()));

    view! {
        <PageFrame page_id="explore--page">
            <ThemedText text_type=TextType::Subtitle>"Explore"</ThemedText>
            <Section title="Appearance" body=appearance />
            <Section title="Screen" body=layout />
            <Section title="Tab list" body=tab_list />
            <Section title="Style rules" body=rules />
            <Section title="Configuration" body=configuration />
        </PageFrame>
    }
}
