use crate::pages::explore::ExplorePage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::tv_focus::TvFocusPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Content slot: renders the page of the active destination.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/explore") view=ExplorePage />
            <Route path=path!("/tv_focus") view=TvFocusPage />
        </Routes>
    }
}
