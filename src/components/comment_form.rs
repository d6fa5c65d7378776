use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::*;

use crate::validation::validate_author;

/// Signature of the outbound submission callback:
/// `(campsite_id, rating, author, text)`. Fire-and-forget; the form never
/// observes the callback's outcome.
pub type PostComment = Callback<(i32, u8, String, String)>;

/// Modal form for submitting a new comment on a campsite.
///
/// Owns exactly one piece of state beyond the draft fields: whether the
/// modal is open. Closed is the initial state; submit and cancel both
/// return to it. The draft is reset every time the modal opens, so a
/// cancelled draft is discarded rather than restored.
#[component]
pub fn CommentForm(campsite_id: i32, post_comment: PostComment) -> impl IntoView {
    let (is_open, set_open) = create_signal(false);

    // Draft fields. Rating defaults to the first option of the select.
    let (rating, set_rating) = create_signal(1u8);
    let (author, set_author) = create_signal(String::new());
    let (text, set_text) = create_signal(String::new());

    // Validation messages only appear once the field has been interacted
    // with (blurred, or a submit was attempted).
    let (author_touched, set_author_touched) = create_signal(false);

    let author_error = move || validate_author(&author.get()).err();

    let open_modal = move |_| {
        set_rating.set(1);
        set_author.set(String::new());
        set_text.set(String::new());
        set_author_touched.set(false);
        set_open.set(true);
    };

    let close_modal = move |_| set_open.set(false);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if validate_author(&author.get()).is_err() {
            set_author_touched.set(true);
            return;
        }
        set_open.set(false);
        log!("[COMMENT_FORM] submitting comment for campsite {}", campsite_id);
        post_comment.call((campsite_id, rating.get(), author.get(), text.get()));
    };

    view! {
        <button class="btn btn-outline-secondary" on:click=open_modal>
            "Submit Comment"
        </button>
        <Show when=move || is_open.get()>
            <div class="modal-overlay">
                <div class="modal-dialog" role="dialog" aria-label="Submit Comment">
                    <div class="modal-header">
                        <h5>"Submit Comment"</h5>
                        <button class="modal-close" aria-label="Close" on:click=close_modal>
                            "\u{00d7}"
                        </button>
                    </div>
                    <div class="modal-body">
                        <form on:submit=handle_submit>
                            <div class="form-group">
                                <label for="rating">"Rating"</label>
                                <select
                                    id="rating"
                                    class="form-control"
                                    on:change=move |e| {
                                        set_rating.set(event_target_value(&e).parse::<u8>().unwrap_or(1))
                                    }
                                >
                                    <option value="1">"1"</option>
                                    <option value="2">"2"</option>
                                    <option value="3">"3"</option>
                                    <option value="4">"4"</option>
                                    <option value="5">"5"</option>
                                </select>
                            </div>
                            <div class="form-group">
                                <label for="author">"Your Name"</label>
                                <input
                                    id="author"
                                    class="form-control"
                                    type="text"
                                    placeholder="Your Name"
                                    on:input=move |e: web_sys::Event| set_author.set(event_target_value(&e))
                                    on:blur=move |_| set_author_touched.set(true)
                                />
                                {move || {
                                    (author_touched.get())
                                        .then(author_error)
                                        .flatten()
                                        .map(|err| view! {
                                            <div class="text-danger">{err.to_string()}</div>
                                        })
                                }}
                            </div>
                            <div class="form-group">
                                <label for="text">"Comment"</label>
                                <textarea
                                    id="text"
                                    class="form-control"
                                    rows="6"
                                    placeholder="Type Comment"
                                    on:input=move |e: web_sys::Event| set_text.set(event_target_value(&e))
                                ></textarea>
                            </div>
                            <button type="submit" class="btn btn-primary">"Submit"</button>
                        </form>
                    </div>
                </div>
            </div>
        </Show>
    }
}
