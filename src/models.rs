use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Moderation state of a comment as the members API reports it.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    Published,
    Hidden,
    Deleted,
}

/// A commenting member. Only passed through, never inspected.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug, Default)]
pub struct Member {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Comment represents one entry of the comment list
///
/// Fields the handlers touch are optional so that a comment which was never
/// liked or updated encodes back to exactly the keys it arrived with.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct Comment {
    pub id: String,
    pub status: CommentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes_count: Option<u32>,
    // Outer `None`: key absent. `Some(None)`: explicit `null` author.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "present_or_null"
    )]
    pub member: Option<Option<Member>>,
    // html, created_at, replies, ... (kept verbatim)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Comment {
    pub fn with_status(&self, status: CommentStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    pub fn is_liked(&self) -> bool {
        self.liked.unwrap_or(false)
    }

    pub fn likes(&self) -> u32 {
        self.likes_count.unwrap_or(0)
    }

    pub fn author(&self) -> Option<&Member> {
        self.member.as_ref().and_then(Option::as_ref)
    }
}

mod present_or_null {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<Option<Member>>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(inner) => inner.serialize(s),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Option<Member>>, D::Error> {
        Option::<Member>::deserialize(d).map(Some)
    }
}

/// Payload of the actions that only need to know which comment they target.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct CommentRef {
    pub id: String,
}

impl From<&Comment> for CommentRef {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.clone(),
        }
    }
}

/// Page metadata returned alongside a browse call.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug, Default)]
pub struct Pagination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    // limit, pages, total, next, prev
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The slice of widget state the action handlers read.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommentsState {
    // Stored from new to old, rendered in reverse
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    pub post_id: String,
    #[serde(default)]
    pub member: Option<Member>,
}

impl CommentsState {
    /// The page a "load more" request should ask for.
    pub fn next_page(&self) -> u32 {
        self.pagination
            .as_ref()
            .and_then(|p| p.page)
            .map_or(crate::constants::FIRST_PAGE, |page| page.saturating_add(1))
    }
}

/// Partial update produced by a handler; merged into the caller's state.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug, Default)]
pub struct StatePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl StatePatch {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn comments(comments: Vec<Comment>) -> Self {
        Self {
            comments: Some(comments),
            pagination: None,
        }
    }

    /// Merge this patch over `state`, the same way the widget merges it into
    /// its own state object. Fields the patch does not carry are kept.
    pub fn apply(&self, state: &CommentsState) -> CommentsState {
        CommentsState {
            comments: self
                .comments
                .clone()
                .unwrap_or_else(|| state.comments.clone()),
            pagination: self
                .pagination
                .clone()
                .or_else(|| state.pagination.clone()),
            post_id: state.post_id.clone(),
            member: state.member.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Request / response bodies of the members comments API
// ---------------------------------------------------------------------------

/// Body of a new comment as submitted by the comment form.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct NewComment {
    pub post_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub html: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CommentStatus>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial comment sent to the edit endpoint. Only `id` is mandatory.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct CommentEdit {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CommentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CommentEdit {
    pub fn status_only(id: &str, status: CommentStatus) -> Self {
        Self {
            id: id.to_string(),
            status: Some(status),
            html: None,
            extra: Map::new(),
        }
    }
}

/// `{"comments": [...]}` envelope returned by add and edit.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug, Default)]
pub struct CommentsResponse {
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl CommentsResponse {
    pub fn into_first(self) -> Option<Comment> {
        self.comments.into_iter().next()
    }
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug, Default)]
pub struct BrowseMeta {
    #[serde(default)]
    pub pagination: Pagination,
}

/// Response of the browse endpoint: one page of comments plus metadata.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug, Default)]
pub struct BrowseResponse {
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub meta: BrowseMeta,
}

/// Request envelope; the API always expects a list even for one comment.
#[derive(Serialize)]
pub struct CommentsEnvelope<'a, T: Serialize> {
    pub comments: [&'a T; 1],
}

impl<'a, T: Serialize> CommentsEnvelope<'a, T> {
    pub fn single(comment: &'a T) -> Self {
        Self { comments: [comment] }
    }
}
