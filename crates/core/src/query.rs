//! Query state boundary
//!
//! The trail builder never reads global state. Everything it knows about the
//! current request and the site comes through [`QueryState`], which hosts
//! implement over their own content store.

use crate::context::Conditionals;
use crate::models::{ContentId, ContentItem, ContentType, ContentTypeObject, Term, TermId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What the site shows on its front page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontPageMode {
    /// Latest posts
    #[default]
    Posts,
    /// A static page
    Page,
}

/// Read-only view of the current request and the site's content
///
/// Lookups that can miss return `Option` or an empty `Vec`; the builder
/// degrades instead of failing.
pub trait QueryState {
    /// Conditional flags for the current request
    fn conditionals(&self) -> Conditionals;

    /// The content item the request is about, if any
    fn current_item(&self) -> Option<ContentItem>;

    /// Look up a content item by id
    fn content_item(&self, id: ContentId) -> Option<ContentItem>;

    /// The term being viewed on a term archive
    fn queried_term(&self) -> Option<Term>;

    /// The content type being viewed on a content type archive
    fn queried_content_type(&self) -> Option<ContentType>;

    /// Display name of the author being viewed
    fn queried_author(&self) -> Option<String>;

    /// Search string of a search request
    fn search_query(&self) -> Option<String>;

    /// Date of a date archive request
    fn archive_date(&self) -> Option<NaiveDate>;

    /// Site home URL
    fn home_url(&self) -> String;

    /// Ancestor ids of a content item, nearest parent first
    fn ancestors(&self, id: ContentId) -> Vec<ContentId>;

    /// Canonical URL of a content item
    fn permalink(&self, id: ContentId) -> Option<String>;

    /// Registry record for a content type
    fn content_type_object(&self, content_type: &ContentType) -> Option<ContentTypeObject>;

    /// Ancestor ids of a term, nearest parent first
    fn term_ancestors(&self, id: TermId, taxonomy: &str) -> Vec<TermId>;

    /// Look up a term by id within a taxonomy
    fn term_by_id(&self, id: TermId, taxonomy: &str) -> Option<Term>;

    /// Archive URL of a term
    fn term_link(&self, id: TermId) -> Option<String>;

    /// URL of a year archive
    fn year_link(&self, year: i32) -> Option<String>;

    /// URL of a month archive
    fn month_link(&self, year: i32, month: u32) -> Option<String>;

    /// What the front page shows
    fn front_page_mode(&self) -> FrontPageMode;

    /// The page that lists posts when the front page is static
    fn posts_page(&self) -> Option<ContentId>;

    /// Translate a fixed string
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}
