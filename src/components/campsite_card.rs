use leptos::*;

use crate::app::BaseUrl;
use crate::models::campsite::Campsite;

/// Card view for a single campsite: image on top, description below.
/// Callers guarantee the campsite exists; there is no absent state here.
#[component]
pub fn CampsiteCard(campsite: Campsite) -> impl IntoView {
    // Asset base URL comes from the application shell, not from this view.
    let base_url = use_context::<BaseUrl>().unwrap_or_default();

    view! {
        <div class="col-md-5 m-1">
            <div class="card">
                <img
                    class="card-img-top"
                    src={format!("{}{}", base_url.0, campsite.image)}
                    alt={campsite.name.clone()}
                />
                <div class="card-body">
                    <p class="card-text">{campsite.description}</p>
                </div>
            </div>
        </div>
    }
}
