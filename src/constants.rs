// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Notion API version sent with every request.
pub const NOTION_API_VERSION: &str = "2022-06-28";

/// Base URL of the Notion REST API.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// How many objects the Notion API returns per page of results.
///
/// The Notion API maximum is 100.
pub const NOTION_API_PAGE_SIZE: usize = 100;

/// Most children a single create or append call may carry.
pub const NOTION_CHILDREN_PER_REQUEST: usize = 100;

/// Block levels a single create or append call may carry: top-level blocks
/// and their children.
pub const NOTION_MAX_REQUEST_DEPTH: usize = 2;

/// Most characters Notion accepts in one text run's `content`.
pub const NOTION_TEXT_CONTENT_LIMIT: usize = 2000;

/// Results asked for when a search names no limit.
pub const SEARCH_DEFAULT_LIMIT: usize = 20;

// ---------------------------------------------------------------------------
// Local state
// ---------------------------------------------------------------------------

/// Storage key of the saved API keys.
pub const STORAGE_KEY_NOTION_KEYS: &str = "notionKeys";

/// Storage key of the recently imported pages.
pub const STORAGE_KEY_RECENT_IMPORTS: &str = "recentImportPages";

/// Storage key of the recently exported pages.
pub const STORAGE_KEY_RECENT_EXPORTS: &str = "recentExportPages";

/// How many entries each recent-pages list keeps.
pub const RECENT_PAGES_LIMIT: usize = 3;

/// Directory name used under the user's config dir.
pub const APP_DIR_NAME: &str = "notion2blocknote";

// ---------------------------------------------------------------------------
// Fallback labels
// ---------------------------------------------------------------------------

/// Name shown when `users/me` carries no name.
pub const UNNAMED_WORKSPACE: &str = "Unnamed Workspace";

/// Title used for pages and databases without one.
pub const UNTITLED: &str = "Untitled";

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;
