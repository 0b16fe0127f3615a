//! PageFrame — root wrapper for every page rendered in the content slot.
//!
//! Fills the slot with the themed background and keeps content clear of the
//! floating tab list.

use crate::shared::config::use_config;
use crate::shared::screen::use_screen;
use crate::shared::theme::use_theme;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id of the page root, e.g. `"explore--page"`.
    page_id: &'static str,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let screen = use_screen();
    let max_width = use_config().max_content_width;

    let style = move || {
        let spacing = screen.spacing();
        let palette = theme.palette();
        // Tab list height is roughly three steps of the scale plus the label line.
        let top = spacing.three * 2.0 + spacing.two * 2.0 + 32.0;
        format!(
            "box-sizing: border-box; min-height: 100%; background-color: {}; \
             padding: {}px {}px {}px; display: flex; flex-direction: column; \
             align-items: center;",
            palette.background, top, spacing.four, spacing.four
        )
    };

    view! {
        <div id=page_id class="page" style=style>
            <div style=format!("width: 100%; max-width: {}px; display: flex; flex-direction: column; gap: 16px;", max_width)>
                {children()}
            </div>
        </div>
    }
}
