use crate::constants::{
    ADMIN_COMMENTS_PATH, COMMENTS_ORDER, COMMENTS_PAGE_LIMIT, MEMBERS_COMMENTS_PATH,
};

/// API route configuration
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ApiConfig {
    // When empty, the widget assumes it is served from the site itself and
    // builds relative URLs ("/members/api/...").
    site_url: String,
    admin_url: String,
}

impl ApiConfig {
    /// Create a new ApiConfig from the COMMENTS_SITE_URL / COMMENTS_ADMIN_URL
    /// build-time environment variables. Both are optional.
    pub fn new() -> Self {
        Self::from_urls(
            option_env!("COMMENTS_SITE_URL").unwrap_or(""),
            option_env!("COMMENTS_ADMIN_URL").unwrap_or(""),
        )
    }

    /// Create a new ApiConfig from URL strings
    pub fn from_urls(site_url: &str, admin_url: &str) -> Self {
        Self {
            site_url: site_url.trim_end_matches('/').to_string(),
            admin_url: admin_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    pub fn admin_url(&self) -> &str {
        &self.admin_url
    }

    /// Collection endpoint of the members comments API.
    pub fn comments_url(&self) -> String {
        format!("{}{}/", self.site_url, MEMBERS_COMMENTS_PATH)
    }

    /// One page of top-level comments for a post, newest first.
    pub fn browse_url(&self, page: u32, post_id: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("limit", &COMMENTS_PAGE_LIMIT.to_string())
            .append_pair("order", COMMENTS_ORDER)
            .append_pair("page", &page.to_string())
            .append_pair("filter", &format!("post_id:{}", post_id))
            .finish();
        format!("{}?{}", self.comments_url(), query)
    }

    pub fn comment_url(&self, id: &str) -> String {
        format!("{}{}/", self.comments_url(), id)
    }

    pub fn like_url(&self, id: &str) -> String {
        format!("{}like/", self.comment_url(id))
    }

    pub fn admin_comment_url(&self, id: &str) -> String {
        format!("{}{}/{}/", self.admin_url, ADMIN_COMMENTS_PATH, id)
    }
}
