// src/messages.rs
//
// The actions the comments widget can dispatch.
//
use crate::models::{CommentEdit, CommentRef, NewComment};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Pagination
    LoadMoreComments,

    // Authoring
    AddComment(NewComment),
    EditComment(CommentEdit),
    DeleteComment(CommentRef),

    // Moderation (admin only)
    HideComment(CommentRef),
    ShowComment(CommentRef),

    // Reactions
    LikeComment(CommentRef),
    UnlikeComment(CommentRef),
}

impl Action {
    /// Name the widget's JavaScript uses for this action.
    pub fn name(&self) -> &'static str {
        match self {
            Action::LoadMoreComments => "loadMoreComments",
            Action::AddComment(_) => "addComment",
            Action::EditComment(_) => "editComment",
            Action::DeleteComment(_) => "deleteComment",
            Action::HideComment(_) => "hideComment",
            Action::ShowComment(_) => "showComment",
            Action::LikeComment(_) => "likeComment",
            Action::UnlikeComment(_) => "unlikeComment",
        }
    }

    /// Whether a legacy name is registered and, if so, whether its action
    /// reads the payload. `None` means the name is unknown.
    pub fn takes_payload(name: &str) -> Option<bool> {
        match name {
            "loadMoreComments" => Some(false),
            "addComment" | "editComment" | "deleteComment" | "hideComment" | "showComment"
            | "likeComment" | "unlikeComment" => Some(true),
            _ => None,
        }
    }

    /// Build an action from its legacy name and untyped payload.
    ///
    /// Returns `Ok(None)` for names that are not registered; the caller treats
    /// those as a silent no-op. A known name with a malformed payload is an
    /// error.
    pub fn from_name(name: &str, data: Value) -> Result<Option<Action>, serde_json::Error> {
        let action = match name {
            "loadMoreComments" => Action::LoadMoreComments,
            "addComment" => Action::AddComment(serde_json::from_value(data)?),
            "editComment" => Action::EditComment(serde_json::from_value(data)?),
            "deleteComment" => Action::DeleteComment(serde_json::from_value(data)?),
            "hideComment" => Action::HideComment(serde_json::from_value(data)?),
            "showComment" => Action::ShowComment(serde_json::from_value(data)?),
            "likeComment" => Action::LikeComment(serde_json::from_value(data)?),
            "unlikeComment" => Action::UnlikeComment(serde_json::from_value(data)?),
            _ => return Ok(None),
        };
        Ok(Some(action))
    }
}
