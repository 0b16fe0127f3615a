//! Theme management module for the application.
//!
//! Follows the system appearance through the `prefers-color-scheme` media query,
//! unless the startup configuration forces a mode. Components read the current
//! palette through [`use_theme`].

use contracts::enums::ColorScheme;
use contracts::shared::theme::Palette;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

fn dark_query() -> Option<web_sys::MediaQueryList> {
    window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
}

/// Current system appearance; `Unspecified` when the host cannot tell.
fn system_scheme() -> ColorScheme {
    match dark_query() {
        Some(query) if query.matches() => ColorScheme::Dark,
        Some(_) => ColorScheme::Light,
        None => ColorScheme::Unspecified,
    }
}

/// Mirror the scheme on the document body for page-level styling.
fn apply_scheme(scheme: ColorScheme) {
    let body = match window().and_then(|w| w.document()).and_then(|d| d.body()) {
        Some(body) => body,
        None => return,
    };

    let palette = scheme.palette();
    let _ = body.set_attribute("data-theme", scheme.resolved().as_str());
    let _ = body.style().set_property("background-color", palette.background);
    let _ = body.style().set_property("color", palette.text);
    let _ = body.style().set_property("margin", "0");
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Appearance reported by the system.
    pub system: RwSignal<ColorScheme>,
    /// Appearance forced by configuration.
    pub forced: Option<ColorScheme>,
}

impl ThemeContext {
    pub fn scheme(&self) -> ColorScheme {
        self.forced.unwrap_or_else(|| self.system.get())
    }

    pub fn palette(&self) -> &'static Palette {
        self.scheme().palette()
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(forced: Option<ColorScheme>, children: Children) -> impl IntoView {
    let system = RwSignal::new(system_scheme());
    let context = ThemeContext { system, forced };
    provide_context(context);

    if let Some(query) = dark_query() {
        let closure = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
            let scheme = if event.matches() {
                ColorScheme::Dark
            } else {
                ColorScheme::Light
            };
            log::info!("System color scheme changed: {}", scheme.as_str());
            system.set(scheme);
        }) as Box<dyn FnMut(_)>);
        let _ = query.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget(); // Keep the closure alive
    }

    Effect::new(move |_| {
        let scheme = context.scheme();
        log::debug!("Applying color scheme: {}", scheme.resolved().as_str());
        apply_scheme(scheme);
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}
