use leptos::*;

use crate::components::comment_form::{CommentForm, PostComment};
use crate::models::comment::Comment;
use crate::utils::date::format_comment_date;

/// Comments column for a campsite page.
///
/// `None` means the data source has not supplied comments at all; the
/// defined fallback is an empty view with no heading and no form. An empty
/// `Some(vec![])` is different: the section renders with its heading and
/// the submission form, just with zero entries.
#[component]
pub fn CommentsList(
    comments: Option<Vec<Comment>>,
    post_comment: PostComment,
    campsite_id: i32,
) -> impl IntoView {
    match comments {
        Some(comments) => view! {
            <div class="col-md-5 m-1">
                <h4>"Comments"</h4>
                {comments
                    .into_iter()
                    .map(|comment| view! {
                        <div class="comment">
                            <p>
                                {comment.text}
                                <br/>
                                {format!(
                                    "{}, {}",
                                    comment.author,
                                    format_comment_date(&comment.date)
                                )}
                            </p>
                        </div>
                    })
                    .collect::<Vec<_>>()}
                <CommentForm campsite_id=campsite_id post_comment=post_comment/>
            </div>
        }
        .into_view(),
        None => view! { <div></div> }.into_view(),
    }
}
