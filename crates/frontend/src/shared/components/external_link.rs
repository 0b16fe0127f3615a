//! Outbound links. On the web they open in a new browsing context, which also
//! keeps the router from intercepting them.

use crate::shared::theme::use_theme;
use leptos::prelude::*;

pub const EXTERNAL_TARGET: &str = "_blank";
pub const EXTERNAL_REL: &str = "noopener noreferrer";

pub fn log_external_open(href: &str) {
    log::info!("Opening external link: {}", href);
}

#[component]
pub fn ExternalLink(#[prop(into)] href: String, children: Children) -> impl IntoView {
    let theme = use_theme();
    let logged = href.clone();

    view! {
        <a
            href=href
            target=EXTERNAL_TARGET
            rel=EXTERNAL_REL
            style=move || format!("color: {};", theme.palette().tint)
            on:click=move |_| log_external_open(&logged)
        >
            {children()}
        </a>
    }
}
