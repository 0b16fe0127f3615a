use crate::shared::components::external_link::ExternalLink;
use crate::shared::components::themed_text::ThemedText;
use crate::shared::config::use_config;
use crate::shared::page_frame::PageFrame;
use contracts::enums::{TextType, ThemeColor};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_config();

    view! {
        <PageFrame page_id="home--page">
            <ThemedText text_type=TextType::Title>"Welcome"</ThemedText>
            <ThemedText color=Signal::stored(ThemeColor::TextSecondary)>
                "Pick a tab above to switch screens. The active tab cannot be selected again."
            </ThemedText>
            <ThemedText text_type=TextType::Small>
                <ExternalLink href=config.docs_url.clone()>"Read the documentation"</ExternalLink>
            </ThemedText>
        </PageFrame>
    }
}
