use crate::app_shell::AppShell;
use crate::shared::config::{load_app_config, provide_config};
use crate::shared::screen::ScreenProvider;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    // Platform and forced appearance are resolved once here and never re-queried.
    let config = load_app_config();
    let forced_scheme = config.color_scheme;
    provide_config(config);

    view! {
        <ThemeProvider forced=forced_scheme>
            <ScreenProvider>
                <Router>
                    <AppShell />
                </Router>
            </ScreenProvider>
        </ThemeProvider>
    }
}
