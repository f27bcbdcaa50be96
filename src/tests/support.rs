//! Recording in-memory collaborators for the dispatcher tests.

use std::cell::RefCell;

use serde_json::{json, Map};

use crate::models::{
    BrowseMeta, BrowseResponse, Comment, CommentEdit, CommentRef, CommentStatus,
    CommentsResponse, CommentsState, Member, NewComment, Pagination,
};
use crate::network::{AdminApi, CommentsApi};

#[derive(Debug, Clone, PartialEq)]
pub struct MockError(pub String);

impl From<MockError> for wasm_bindgen::JsValue {
    fn from(e: MockError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.0)
    }
}

/// One recorded collaborator call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Browse { page: u32, post_id: String },
    Add(NewComment),
    Edit(CommentEdit),
    Like(String),
    Unlike(String),
    Hide(String),
    Show(String),
}

/// Plays both collaborator roles and records every call it receives.
#[derive(Default)]
pub struct MockApi {
    pub calls: RefCell<Vec<Call>>,
    pub browse_response: BrowseResponse,
    pub write_response: CommentsResponse,
    pub fail_with: Option<String>,
}

impl MockApi {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> Result<(), MockError> {
        self.calls.borrow_mut().push(call);
        match &self.fail_with {
            Some(msg) => Err(MockError(msg.clone())),
            None => Ok(()),
        }
    }
}

impl CommentsApi for MockApi {
    type Error = MockError;

    async fn browse(&self, page: u32, post_id: &str) -> Result<BrowseResponse, MockError> {
        self.record(Call::Browse {
            page,
            post_id: post_id.to_string(),
        })?;
        Ok(self.browse_response.clone())
    }

    async fn add(&self, comment: &NewComment) -> Result<CommentsResponse, MockError> {
        self.record(Call::Add(comment.clone()))?;
        Ok(self.write_response.clone())
    }

    async fn edit(&self, comment: &CommentEdit) -> Result<CommentsResponse, MockError> {
        self.record(Call::Edit(comment.clone()))?;
        Ok(self.write_response.clone())
    }

    async fn like(&self, comment: &CommentRef) -> Result<(), MockError> {
        self.record(Call::Like(comment.id.clone()))
    }

    async fn unlike(&self, comment: &CommentRef) -> Result<(), MockError> {
        self.record(Call::Unlike(comment.id.clone()))
    }
}

impl AdminApi for MockApi {
    type Error = MockError;

    async fn hide_comment(&self, id: &str) -> Result<(), MockError> {
        self.record(Call::Hide(id.to_string()))
    }

    async fn show_comment(&self, id: &str) -> Result<(), MockError> {
        self.record(Call::Show(id.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn member(uuid: &str) -> Member {
    Member {
        uuid: Some(uuid.to_string()),
        name: Some(format!("Member {}", uuid)),
        extra: Map::new(),
    }
}

pub fn comment(id: &str) -> Comment {
    let mut extra = Map::new();
    extra.insert("html".into(), json!(format!("<p>comment {}</p>", id)));
    extra.insert("created_at".into(), json!("2022-07-01T10:00:00.000Z"));
    Comment {
        id: id.to_string(),
        status: CommentStatus::Published,
        liked: Some(false),
        likes_count: Some(0),
        member: Some(Some(member("author"))),
        extra,
    }
}

pub fn target(id: &str) -> CommentRef {
    CommentRef { id: id.to_string() }
}

pub fn state_with(comments: Vec<Comment>) -> CommentsState {
    CommentsState {
        comments,
        pagination: None,
        post_id: "post-1".to_string(),
        member: Some(member("viewer")),
    }
}

pub fn page_meta(page: u32, pages: u32) -> BrowseMeta {
    let mut extra = Map::new();
    extra.insert("pages".into(), json!(pages));
    extra.insert("limit".into(), json!(20));
    BrowseMeta {
        pagination: Pagination {
            page: Some(page),
            extra,
        },
    }
}
