// src/update.rs
//
// Action dispatcher: one async handler per action. Each handler awaits a
// single collaborator call and, only once it succeeded, derives a new state
// fragment from the borrowed state.
//
use crate::debug_log;
use crate::messages::Action;
use crate::models::{
    CommentEdit, CommentRef, CommentStatus, CommentsState, NewComment, StatePatch,
};
use crate::network::{AdminApi, CommentsApi};
use crate::reducers::comments;

/// Run the handler for `action` and return the fragment to merge.
///
/// Collaborator errors are returned as-is and no fragment is produced.
pub async fn dispatch<A, M>(
    action: &Action,
    state: &CommentsState,
    api: &A,
    admin_api: &M,
) -> Result<StatePatch, A::Error>
where
    A: CommentsApi,
    M: AdminApi<Error = A::Error>,
{
    debug_log!("dispatch {}", action.name());

    match action {
        Action::LoadMoreComments => load_more_comments(state, api).await,
        Action::AddComment(comment) => add_comment(state, api, comment).await,
        Action::EditComment(comment) => edit_comment(state, api, comment).await,
        Action::DeleteComment(comment) => delete_comment(state, api, comment).await,
        Action::HideComment(comment) => hide_comment(state, admin_api, comment).await,
        Action::ShowComment(comment) => show_comment(state, admin_api, comment).await,
        Action::LikeComment(comment) => like_comment(state, api, comment).await,
        Action::UnlikeComment(comment) => unlike_comment(state, api, comment).await,
    }
}

async fn load_more_comments<A: CommentsApi>(
    state: &CommentsState,
    api: &A,
) -> Result<StatePatch, A::Error> {
    let page = state.next_page();
    let data = api.browse(page, &state.post_id).await?;
    debug_log!("loaded page {} ({} comments)", page, data.comments.len());

    Ok(StatePatch {
        comments: Some(comments::append_page(&state.comments, data.comments)),
        pagination: Some(data.meta.pagination),
    })
}

async fn add_comment<A: CommentsApi>(
    state: &CommentsState,
    api: &A,
    comment: &NewComment,
) -> Result<StatePatch, A::Error> {
    let data = api.add(comment).await?;
    let Some(created) = data.into_first() else {
        debug_log!("addComment: API returned no comment");
        return Ok(StatePatch::comments(state.comments.clone()));
    };

    Ok(StatePatch::comments(comments::prepend(
        &state.comments,
        created,
        state.member.as_ref(),
    )))
}

async fn edit_comment<A: CommentsApi>(
    state: &CommentsState,
    api: &A,
    comment: &CommentEdit,
) -> Result<StatePatch, A::Error> {
    let data = api.edit(comment).await?;
    let Some(updated) = data.into_first() else {
        debug_log!("editComment: API returned no comment for {}", comment.id);
        return Ok(StatePatch::comments(state.comments.clone()));
    };

    Ok(StatePatch::comments(comments::replace(&state.comments, &updated)))
}

async fn delete_comment<A: CommentsApi>(
    state: &CommentsState,
    api: &A,
    comment: &CommentRef,
) -> Result<StatePatch, A::Error> {
    // Deleting is an edit of the status; the response body is not needed.
    api.edit(&CommentEdit::status_only(&comment.id, CommentStatus::Deleted))
        .await?;

    Ok(StatePatch::comments(comments::set_status(
        &state.comments,
        &comment.id,
        CommentStatus::Deleted,
    )))
}

async fn hide_comment<M: AdminApi>(
    state: &CommentsState,
    admin_api: &M,
    comment: &CommentRef,
) -> Result<StatePatch, M::Error> {
    admin_api.hide_comment(&comment.id).await?;

    Ok(StatePatch::comments(comments::set_status(
        &state.comments,
        &comment.id,
        CommentStatus::Hidden,
    )))
}

async fn show_comment<M: AdminApi>(
    state: &CommentsState,
    admin_api: &M,
    comment: &CommentRef,
) -> Result<StatePatch, M::Error> {
    admin_api.show_comment(&comment.id).await?;

    Ok(StatePatch::comments(comments::set_status(
        &state.comments,
        &comment.id,
        CommentStatus::Published,
    )))
}

async fn like_comment<A: CommentsApi>(
    state: &CommentsState,
    api: &A,
    comment: &CommentRef,
) -> Result<StatePatch, A::Error> {
    api.like(comment).await?;
    Ok(StatePatch::comments(comments::like(&state.comments, &comment.id)))
}

async fn unlike_comment<A: CommentsApi>(
    state: &CommentsState,
    api: &A,
    comment: &CommentRef,
) -> Result<StatePatch, A::Error> {
    api.unlike(comment).await?;
    Ok(StatePatch::comments(comments::unlike(&state.comments, &comment.id)))
}
