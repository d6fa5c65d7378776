use leptos::*;

use crate::components::campsite_card::CampsiteCard;
use crate::components::comment_form::PostComment;
use crate::components::comments_list::CommentsList;
use crate::components::loading::Loading;
use crate::models::campsite::Campsite;
use crate::models::comment::Comment;

/// What the campsite page shows, as an explicit tagged union so the
/// branch priority is auditable in one place.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading,
    Failed(String),
    Loaded(Campsite),
    Empty,
}

/// First match wins, in this order: loading beats an error message beats
/// loaded content. A well-behaved data source never sets more than one,
/// but the tie-break is deliberate, not incidental.
pub fn page_state(
    is_loading: bool,
    err_mess: Option<String>,
    campsite: Option<Campsite>,
) -> PageState {
    if is_loading {
        return PageState::Loading;
    }
    if let Some(message) = err_mess {
        return PageState::Failed(message);
    }
    match campsite {
        Some(campsite) => PageState::Loaded(campsite),
        None => PageState::Empty,
    }
}

/// Top-level campsite view: selects between loading, error, and loaded
/// states, then composes the campsite card and the comments column.
#[component]
pub fn CampsiteInfo(
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into)] err_mess: Signal<Option<String>>,
    #[prop(into)] campsite: Signal<Option<Campsite>>,
    #[prop(into)] comments: Signal<Option<Vec<Comment>>>,
    post_comment: PostComment,
) -> impl IntoView {
    view! {
        <div class="container">
            {move || match page_state(is_loading.get(), err_mess.get(), campsite.get()) {
                PageState::Loading => view! {
                    <div class="row">
                        <Loading/>
                    </div>
                }
                .into_view(),
                PageState::Failed(message) => view! {
                    <div class="row">
                        <div class="col">
                            <h4>{message}</h4>
                        </div>
                    </div>
                }
                .into_view(),
                PageState::Loaded(campsite) => {
                    let name = campsite.name.clone();
                    let campsite_id = campsite.id;
                    view! {
                        <div class="row">
                            <div class="col">
                                <ol class="breadcrumb">
                                    <li class="breadcrumb-item">
                                        <a href="/directory">"Directory"</a>
                                    </li>
                                    <li class="breadcrumb-item active">{name.clone()}</li>
                                </ol>
                                <h2>{name}</h2>
                                <hr/>
                            </div>
                        </div>
                        <div class="row">
                            <CampsiteCard campsite=campsite/>
                            <CommentsList
                                comments=comments.get()
                                post_comment=post_comment
                                campsite_id=campsite_id
                            />
                        </div>
                    }
                    .into_view()
                }
                PageState::Empty => view! { <div></div> }.into_view(),
            }}
        </div>
    }
}
