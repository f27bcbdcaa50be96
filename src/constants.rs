// Pagination defaults for the browse endpoint
pub const FIRST_PAGE: u32 = 1;
pub const COMMENTS_PAGE_LIMIT: u32 = 20;
pub const COMMENTS_ORDER: &str = "created_at DESC";

// Path of the members comments API, relative to the site URL
pub const MEMBERS_COMMENTS_PATH: &str = "/members/api/comments";
// Path of the admin comments endpoint, relative to the admin API URL
pub const ADMIN_COMMENTS_PATH: &str = "/comments";
