// Re-export network modules
pub mod api_client;
pub mod config;

// Re-export commonly used items
pub use api_client::{AdminApiClient, ApiRequest, MembersApiClient};

use crate::models::{BrowseResponse, CommentEdit, CommentRef, CommentsResponse, NewComment};
use config::ApiConfig;
use lazy_static::lazy_static;
use std::sync::RwLock;

lazy_static! {
    static ref API_CONFIG: RwLock<Option<ApiConfig>> = RwLock::new(None);
}

// ---------------------------------------------------------------------------
// Collaborator contracts
// ---------------------------------------------------------------------------

/// Members-facing comments API.
///
/// Futures are not `Send`: everything runs on the browser's single thread.
#[allow(async_fn_in_trait)]
pub trait CommentsApi {
    type Error;

    async fn browse(&self, page: u32, post_id: &str) -> Result<BrowseResponse, Self::Error>;
    async fn add(&self, comment: &NewComment) -> Result<CommentsResponse, Self::Error>;
    async fn edit(&self, comment: &CommentEdit) -> Result<CommentsResponse, Self::Error>;
    async fn like(&self, comment: &CommentRef) -> Result<(), Self::Error>;
    async fn unlike(&self, comment: &CommentRef) -> Result<(), Self::Error>;
}

/// Moderation endpoints, only reachable for staff users.
#[allow(async_fn_in_trait)]
pub trait AdminApi {
    type Error;

    async fn hide_comment(&self, id: &str) -> Result<(), Self::Error>;
    async fn show_comment(&self, id: &str) -> Result<(), Self::Error>;
}

// ---------------------------------------------------------------------------
// Global configuration
// ---------------------------------------------------------------------------

/// Initialize the API configuration from compile-time environment.
pub fn init_api_config() -> Result<(), &'static str> {
    set_api_config(ApiConfig::new())
}

pub(crate) fn set_api_config(config: ApiConfig) -> Result<(), &'static str> {
    let mut slot = API_CONFIG.write().map_err(|_| "API config lock poisoned")?;
    *slot = Some(config);
    Ok(())
}

/// Snapshot of the active configuration, falling back to same-origin.
pub(crate) fn current_api_config() -> Result<ApiConfig, &'static str> {
    let guard = API_CONFIG.read().map_err(|_| "API config lock poisoned")?;
    Ok(guard.clone().unwrap_or_default())
}
