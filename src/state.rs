//! Application shell state: stands in for the external data-fetching layer
//! and the comment-posting backend that the page components treat as
//! collaborators.

use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::comment_form::PostComment;
use crate::data;
use crate::models::campsite::Campsite;
use crate::models::comment::Comment;

const FETCH_DELAY_MS: u32 = 1_200;
const POST_DELAY_MS: u32 = 2_000;

/// Read side of the shell state, provided via context. Signals are Copy,
/// so pages grab this once and derive what they need.
#[derive(Clone, Copy)]
pub struct AppState {
    pub is_loading: ReadSignal<bool>,
    pub err_mess: ReadSignal<Option<String>>,
    pub campsites: ReadSignal<Option<Vec<Campsite>>>,
    pub comments: ReadSignal<Option<Vec<Comment>>>,
    pub post_comment: PostComment,
}

pub fn provide_app_state() -> AppState {
    let (is_loading, set_loading) = create_signal(true);
    let (err_mess, set_err) = create_signal(None::<String>);
    let (campsites, set_campsites) = create_signal(None::<Vec<Campsite>>);
    let (comments, set_comments) = create_signal(None::<Vec<Comment>>);

    // Simulated fetch: the embedded seed stands in for a server, behind a
    // short delay so the loading state is actually visible.
    spawn_local(async move {
        TimeoutFuture::new(FETCH_DELAY_MS).await;
        match data::load_seed() {
            Ok(seed) => {
                log!(
                    "[STATE] loaded {} campsites, {} comments",
                    seed.campsites.len(),
                    seed.comments.len()
                );
                set_campsites.set(Some(seed.campsites));
                set_comments.set(Some(seed.comments));
            }
            Err(err) => {
                log!("[STATE] failed to load seed data: {}", err);
                set_err.set(Some(err.to_string()));
            }
        }
        set_loading.set(false);
    });

    // Fire-and-forget from the form's perspective: the comment appears in
    // the list once the simulated round trip completes.
    let post_comment: PostComment = Callback::new(
        move |(campsite_id, rating, author, text): (i32, u8, String, String)| {
            spawn_local(async move {
                TimeoutFuture::new(POST_DELAY_MS).await;
                set_comments.update(|comments| {
                    if let Some(comments) = comments {
                        let id = comments.iter().map(|c| c.id).max().map_or(0, |id| id + 1);
                        comments.push(Comment {
                            id,
                            campsite_id,
                            rating,
                            text,
                            author,
                            date: Utc::now().to_rfc3339(),
                        });
                    }
                });
            });
        },
    );

    let state = AppState {
        is_loading,
        err_mess,
        campsites,
        comments,
        post_comment,
    };
    provide_context(state);
    state
}
