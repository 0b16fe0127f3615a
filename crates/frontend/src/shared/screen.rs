//! Viewport width tracking and the derived spacing profile.

use contracts::shared::spacing::{ScreenClass, SpacingProfile};
use leptos::prelude::window_event_listener;
use leptos::prelude::*;
use web_sys::window;

/// Width used when the window is unavailable.
const FALLBACK_WIDTH: f64 = 800.0;

fn inner_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(FALLBACK_WIDTH)
}

#[derive(Clone, Copy)]
pub struct ScreenContext {
    pub width: RwSignal<f64>,
}

impl ScreenContext {
    pub fn class(&self) -> ScreenClass {
        ScreenClass::from_width(self.width.get())
    }

    pub fn spacing(&self) -> SpacingProfile {
        SpacingProfile::for_width(self.width.get())
    }
}

/// Provides [`ScreenContext`], updated on window resize.
#[component]
pub fn ScreenProvider(children: Children) -> impl IntoView {
    let width = RwSignal::new(inner_width());
    provide_context(ScreenContext { width });

    let _ = window_event_listener(leptos::ev::resize, move |_| {
        width.set(inner_width());
    });

    let class = Memo::new(move |_| ScreenClass::from_width(width.get()));
    Effect::new(move |_| {
        log::debug!("Screen class: {:?}", class.get());
    });

    children()
}

pub fn use_screen() -> ScreenContext {
    use_context::<ScreenContext>().expect("ScreenContext not found. Wrap your app with ScreenProvider.")
}
