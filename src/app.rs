/// Main application entry point for Campground.
/// Wires the shell state into the directory and campsite pages.
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{use_params_map, Redirect, Route, Router, Routes};

use crate::components::campsite_info::CampsiteInfo;
use crate::components::directory::DirectoryPage;
use crate::state::{provide_app_state, AppState};

/// Prefix prepended to every campsite image path. Injected via context so
/// views never hardcode where assets live.
#[derive(Clone, Debug)]
pub struct BaseUrl(pub String);

impl Default for BaseUrl {
    fn default() -> Self {
        BaseUrl("/assets/".to_string())
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(BaseUrl::default());
    provide_app_state();

    view! {
        <Title text="Campground"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/directory" view=DirectoryPage/>
                    <Route path="/directory/:id" view=CampsitePage/>
                    <Route path="/*any" view=|| view! { <Redirect path="/directory"/> }/>
                </Routes>
            </main>
        </Router>
    }
}

/// Route view for a single campsite: resolves the `:id` param against the
/// shell state and hands plain props to `CampsiteInfo`.
#[component]
fn CampsitePage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let params = use_params_map();

    let campsite_id = move || params.with(|p| p.get("id").and_then(|s| s.parse::<i32>().ok()));

    let campsite = Signal::derive(move || {
        let id = campsite_id()?;
        state.campsites.get()?.into_iter().find(|c| c.id == id)
    });

    // Filtering keeps the supplied order; absent comments stay absent
    // rather than becoming an empty list.
    let comments = Signal::derive(move || {
        let id = campsite_id()?;
        let comments = state.comments.get()?;
        Some(
            comments
                .into_iter()
                .filter(|c| c.campsite_id == id)
                .collect::<Vec<_>>(),
        )
    });

    view! {
        <CampsiteInfo
            is_loading=state.is_loading
            err_mess=state.err_mess
            campsite=campsite
            comments=comments
            post_comment=state.post_comment
        />
    }
}
