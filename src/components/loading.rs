use leptos::*;

/// Spinner shown while the surrounding page waits for data.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="col">
            <span class="spinner" aria-hidden="true"></span>
            <p>"Loading..."</p>
        </div>
    }
}
