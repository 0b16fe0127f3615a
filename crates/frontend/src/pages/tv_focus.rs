//! Events: focusable tiles that record focus and blur events, for checking
//! keyboard and remote-style navigation.

use crate::shared::components::themed_text::ThemedText;
use crate::shared::components::themed_view::ThemedView;
use crate::shared::page_frame::PageFrame;
use crate::shared::theme::use_theme;
use contracts::enums::{TextType, ThemeColor};
use leptos::prelude::*;

/// Number of most recent events kept on screen.
const EVENT_LOG_CAPACITY: usize = 20;

const TILES: [&str; 4] = ["First", "Second", "Third", "Fourth"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusEventKind {
    Focus,
    Blur,
}

impl FocusEventKind {
    fn as_str(&self) -> &'static str {
        match self {
            FocusEventKind::Focus => "focus",
            FocusEventKind::Blur => "blur",
        }
    }
}

/// Prepend `entry`, keeping at most `capacity` entries.
fn push_event(log: &mut Vec<String>, entry: String, capacity: usize) {
    log.insert(0, entry);
    log.truncate(capacity);
}

#[component]
fn FocusTile(
    label: &'static str,
    events: RwSignal<Vec<String>>,
) -> impl IntoView {
    let theme = use_theme();
    let focused = RwSignal::new(false);

    let record = move |kind: FocusEventKind| {
        focused.set(kind == FocusEventKind::Focus);
        log::debug!("{} tile: {}", label, kind.as_str());
        events.update(|log| push_event(log, format!("{}: {}", label, kind.as_str()), EVENT_LOG_CAPACITY));
    };

    let style = move || {
        let palette = theme.palette();
        let border = if focused.get() {
            palette.tint
        } else {
            palette.background_element
        };
        format!(
            "padding: 16px; border-radius: 12px; border: 2px solid {}; outline: none; \
             background-color: {}; min-width: 120px; text-align: center;",
            border, palette.background_element
        )
    };

    view! {
        <div
            tabindex="0"
            style=style
            on:focus=move |_| record(FocusEventKind::Focus)
            on:blur=move |_| record(FocusEventKind::Blur)
        >
            <ThemedText text_type=TextType::SmallBold>{label}</ThemedText>
        </div>
    }
}

#[component]
pub fn TvFocusPage() -> impl IntoView {
    let events = RwSignal::new(Vec::<String>::new());

    view! {
        <PageFrame page_id="tv_focus--page">
            <ThemedText text_type=TextType::Subtitle>"Events"</ThemedText>
            <ThemedText color=Signal::stored(ThemeColor::TextSecondary)>
                "Move focus between the tiles with Tab or the arrow keys of a remote."
            </ThemedText>
            <div style="display: flex; flex-wrap: wrap; gap: 12px;">
                {TILES
                    .into_iter()
                    .map(|label| view! { <FocusTile label=label events=events /> })
                    .collect_view()}
            </div>
            <ThemedView
                background=ThemeColor::BackgroundElement
                style=Signal::stored("padding: 12px; border-radius: 12px;".to_string())
            >
                <Show
                    when=move || !events.get().is_empty()
                    fallback=|| view! { <ThemedText text_type=TextType::Small>"No events yet"</ThemedText> }
                >
                    <ul style="margin: 0; padding-left: 16px;">
                        {move || {
                            events
                                .get()
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <li>
                                            <ThemedText text_type=TextType::Code>{entry}</ThemedText>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </ThemedView>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_event_keeps_newest_first() {
        let mut log = Vec::new();
        push_event(&mut log, "a".to_string(), 2);
        push_event(&mut log, "b".to_string(), 2);
        push_event(&mut log, "c".to_string(), 2);
        assert_eq!(log, vec!["c".to_string(), "b".to_string()]);
    }
}
