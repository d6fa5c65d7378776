use leptos::*;
use leptos_router::A;

use crate::components::loading::Loading;
use crate::state::AppState;

/// Directory listing: one entry per campsite, linking to its page.
#[component]
pub fn DirectoryPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="container">
            <div class="row">
                <div class="col">
                    <h2>"Directory"</h2>
                    <hr/>
                </div>
            </div>
            <div class="row">
                {move || {
                    if state.is_loading.get() {
                        return view! { <Loading/> }.into_view();
                    }
                    if let Some(message) = state.err_mess.get() {
                        return view! {
                            <div class="col">
                                <h4>{message}</h4>
                            </div>
                        }
                        .into_view();
                    }
                    state
                        .campsites
                        .get()
                        .unwrap_or_default()
                        .into_iter()
                        .map(|campsite| view! {
                            <div class="col-md-3 m-1 directory-entry">
                                <A href=format!("/directory/{}", campsite.id)>
                                    <h5>{campsite.name}</h5>
                                </A>
                                <p>{campsite.description}</p>
                            </div>
                        })
                        .collect::<Vec<_>>()
                        .into_view()
                }}
            </div>
        </div>
    }
}
