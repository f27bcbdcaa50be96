use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::config::ApiConfig;
use super::{AdminApi, CommentsApi};
use crate::debug_log;
use crate::models::{
    BrowseResponse, CommentEdit, CommentRef, CommentStatus, CommentsEnvelope, CommentsResponse,
    NewComment,
};

// ----------------------------------------------------------------------------
// Shared fetch helpers
// ----------------------------------------------------------------------------

/// Perform a request and return the raw body text.
///
/// Member requests carry the session cookie (`credentials: include`), the
/// widget usually lives on a different origin than the site's API.
pub async fn fetch_text(url: &str, method: &str, body: Option<&str>) -> Result<String, JsValue> {
    use web_sys::{Headers, Request, RequestCredentials, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    opts.set_credentials(RequestCredentials::Include);

    let headers = Headers::new()?;
    if let Some(data) = body {
        opts.set_body(&JsValue::from_str(data));
        headers.append("Content-Type", "application/json")?;
    }
    opts.set_headers(&headers);

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "API request failed: {} {} ({} {})",
            resp.status(),
            resp.status_text(),
            method,
            url
        )));
    }

    // 204 responses (like/unlike) have an empty body; callers ignore it.
    let text = JsFuture::from(resp.text()?).await?;
    Ok(text.as_string().unwrap_or_default())
}

/// A fully described HTTP call: built synchronously, sent by `send_*`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: &'static str,
    pub url: String,
    pub body: Option<String>,
}

impl ApiRequest {
    fn bare(method: &'static str, url: String) -> Self {
        Self {
            method,
            url,
            body: None,
        }
    }

    /// Request whose body is `{"comments": [comment]}`.
    fn with_comment<T: Serialize>(
        method: &'static str,
        url: String,
        comment: &T,
    ) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(&CommentsEnvelope::single(comment))?;
        Ok(Self {
            method,
            url,
            body: Some(body),
        })
    }

    pub async fn send(&self) -> Result<String, JsValue> {
        debug_log!("{} {}", self.method, self.url);
        fetch_text(&self.url, self.method, self.body.as_deref()).await
    }

    pub async fn send_json<T: DeserializeOwned>(&self) -> Result<T, JsValue> {
        let text = self.send().await?;
        serde_json::from_str::<T>(&text).map_err(|e| {
            JsValue::from_str(&format!("Failed to parse response from {}: {}", self.url, e))
        })
    }
}

fn serialize_error(e: serde_json::Error) -> JsValue {
    JsValue::from_str(&format!("Failed to serialize comment: {}", e))
}

// ----------------------------------------------------------------------------
// Members API
// ----------------------------------------------------------------------------

/// `CommentsApi` over the members comments endpoints of the site.
#[derive(Clone, Debug, Default)]
pub struct MembersApiClient {
    config: ApiConfig,
}

impl MembersApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn browse_request(&self, page: u32, post_id: &str) -> ApiRequest {
        ApiRequest::bare("GET", self.config.browse_url(page, post_id))
    }

    pub fn add_request(&self, comment: &NewComment) -> Result<ApiRequest, serde_json::Error> {
        ApiRequest::with_comment("POST", self.config.comments_url(), comment)
    }

    pub fn edit_request(&self, comment: &CommentEdit) -> Result<ApiRequest, serde_json::Error> {
        ApiRequest::with_comment("PUT", self.config.comment_url(&comment.id), comment)
    }

    pub fn like_request(&self, comment: &CommentRef) -> ApiRequest {
        ApiRequest::bare("POST", self.config.like_url(&comment.id))
    }

    pub fn unlike_request(&self, comment: &CommentRef) -> ApiRequest {
        ApiRequest::bare("DELETE", self.config.like_url(&comment.id))
    }
}

impl CommentsApi for MembersApiClient {
    type Error = JsValue;

    async fn browse(&self, page: u32, post_id: &str) -> Result<BrowseResponse, JsValue> {
        self.browse_request(page, post_id).send_json().await
    }

    async fn add(&self, comment: &NewComment) -> Result<CommentsResponse, JsValue> {
        self.add_request(comment).map_err(serialize_error)?.send_json().await
    }

    async fn edit(&self, comment: &CommentEdit) -> Result<CommentsResponse, JsValue> {
        self.edit_request(comment).map_err(serialize_error)?.send_json().await
    }

    async fn like(&self, comment: &CommentRef) -> Result<(), JsValue> {
        self.like_request(comment).send().await?;
        Ok(())
    }

    async fn unlike(&self, comment: &CommentRef) -> Result<(), JsValue> {
        self.unlike_request(comment).send().await?;
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// Admin API
// ----------------------------------------------------------------------------

/// `AdminApi` over the admin comments endpoint; relies on the staff session.
#[derive(Clone, Debug, Default)]
pub struct AdminApiClient {
    config: ApiConfig,
}

impl AdminApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn status_request(
        &self,
        id: &str,
        status: CommentStatus,
    ) -> Result<ApiRequest, serde_json::Error> {
        ApiRequest::with_comment(
            "PUT",
            self.config.admin_comment_url(id),
            &CommentEdit::status_only(id, status),
        )
    }
}

impl AdminApi for AdminApiClient {
    type Error = JsValue;

    async fn hide_comment(&self, id: &str) -> Result<(), JsValue> {
        self.status_request(id, CommentStatus::Hidden)
            .map_err(serialize_error)?
            .send()
            .await?;
        Ok(())
    }

    async fn show_comment(&self, id: &str) -> Result<(), JsValue> {
        self.status_request(id, CommentStatus::Published)
            .map_err(serialize_error)?
            .send()
            .await?;
        Ok(())
    }
}
