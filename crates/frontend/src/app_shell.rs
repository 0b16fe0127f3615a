//! Application Shell: content slot plus the tab list.
//!
//! Destinations are declared once in `contracts`. The whole tab bar is rendered
//! from a single tab list model rebuilt from the router location; switching
//! happens through the router's own link handling.

use crate::layout::tab_list::{TabList, TabListButton};
use crate::routes::routes::AppRoutes;
use crate::shared::config::use_config;
use contracts::shared::destination::DESTINATIONS;
use contracts::shared::tab_list::{build_tab_list, TabButtonModel};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn AppShell() -> impl IntoView {
    let config = use_config();
    let location = use_location();

    let brand = config.brand_label.clone();
    let docs_url = config.docs_url.clone();
    let platform = config.platform;
    let model = Memo::new(move |_| {
        build_tab_list(
            &brand,
            &DESTINATIONS,
            &location.pathname.get(),
            platform,
            &docs_url,
        )
    });

    // Keys and order are fixed for the process lifetime; only focus changes.
    let initial = model.get_untracked();
    let buttons = initial
        .buttons
        .into_iter()
        .map(|fallback: TabButtonModel| {
            let key = fallback.key.clone();
            let button = Signal::derive(move || {
                model.with(|m| {
                    m.buttons
                        .iter()
                        .find(|b| b.key == key)
                        .cloned()
                        .unwrap_or_else(|| fallback.clone())
                })
            });
            view! { <TabListButton model=button /> }
        })
        .collect_view();

    view! {
        <div class="app-tabs" style="position: relative; height: 100%;">
            <div class="app-tabs__slot" style="height: 100%;">
                <AppRoutes />
            </div>
            <TabList brand=initial.brand>
                {buttons}
            </TabList>
        </div>
    }
}
