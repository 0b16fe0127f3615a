use crate::shared::components::themed_text::ThemedText;
use crate::shared::page_frame::PageFrame;
use contracts::enums::TextType;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    Effect::new(move |_| {
        log::warn!("No destination for path: {}", location.pathname.get());
    });

    view! {
        <PageFrame page_id="not-found--page">
            <ThemedText text_type=TextType::Subtitle>"Not found"</ThemedText>
            <ThemedText text_type=TextType::Code>{move || location.pathname.get()}</ThemedText>
        </PageFrame>
    }
}
