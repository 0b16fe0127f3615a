pub mod tab_button;
pub mod tab_list;

use crate::shared::config::use_config;
use crate::shared::screen::use_screen;
use crate::shared::theme::use_theme;
use contracts::shared::style::{resolve_tab_styles, TabStyles};
use leptos::prelude::*;

/// Tab bar style rules, re-derived from theme and spacing on every read.
pub fn use_tab_styles() -> Signal<TabStyles> {
    let theme = use_theme();
    let screen = use_screen();
    let max_content_width = use_config().max_content_width;
    Signal::derive(move || resolve_tab_styles(&screen.spacing(), theme.palette(), max_content_width))
}
