//! Site snapshots
//!
//! A [`SiteSnapshot`] is a serializable picture of a site and one request
//! against it. It implements [`QueryState`] so trails can be built from JSON
//! or YAML fixtures without a live content platform.

use crate::context::Conditionals;
use crate::models::{ContentId, ContentItem, ContentType, ContentTypeObject, Term, TermId};
use crate::query::{FrontPageMode, QueryState};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Snapshot loading errors
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Unsupported snapshot extension: {0}")]
    UnsupportedExtension(String),
}

/// Site-wide settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    /// Site home URL
    pub home_url: String,

    /// What the front page shows
    pub front_page: FrontPageMode,

    /// Page listing posts when the front page is static
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts_page: Option<ContentId>,
}

/// The request being rendered
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestState {
    /// Conditional flags
    #[serde(flatten)]
    pub conditionals: Conditionals,

    /// Active content item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<ContentId>,

    /// Queried term on term archives
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<TermId>,

    /// Queried content type on content type archives
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,

    /// Author display name on author archives
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Search string on search pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Archive date on date archives
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// In-memory site and request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSnapshot {
    pub site: SiteInfo,
    pub content_types: Vec<ContentTypeObject>,
    pub items: Vec<ContentItem>,
    pub terms: Vec<Term>,
    pub translations: HashMap<String, String>,
    pub request: RequestState,
}

impl SiteSnapshot {
    /// Create an empty snapshot for a site
    pub fn new(home_url: impl Into<String>) -> Self {
        Self {
            site: SiteInfo {
                home_url: home_url.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Load a snapshot from a `.json`, `.yaml` or `.yml` file
    pub fn from_path(path: &Path) -> Result<Self, SnapshotError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let source = match ext.as_str() {
            "json" | "yaml" | "yml" => fs::read_to_string(path)?,
            _ => return Err(SnapshotError::UnsupportedExtension(ext)),
        };

        if ext == "json" {
            Self::from_json_str(&source)
        } else {
            Self::from_yaml_str(&source)
        }
    }

    /// Parse a snapshot from JSON
    pub fn from_json_str(source: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(source).map_err(SnapshotError::from)
    }

    /// Parse a snapshot from YAML
    pub fn from_yaml_str(source: &str) -> Result<Self, SnapshotError> {
        serde_yaml::from_str(source).map_err(SnapshotError::from)
    }

    /// Add a content item (builder pattern)
    pub fn with_item(mut self, item: ContentItem) -> Self {
        self.items.push(item);
        self
    }

    /// Add a term (builder pattern)
    pub fn with_term(mut self, term: Term) -> Self {
        self.terms.push(term);
        self
    }

    /// Add a content type record (builder pattern)
    pub fn with_content_type(mut self, object: ContentTypeObject) -> Self {
        self.content_types.push(object);
        self
    }

    /// Add a translation (builder pattern)
    pub fn with_translation(
        mut self,
        text: impl Into<String>,
        translated: impl Into<String>,
    ) -> Self {
        self.translations.insert(text.into(), translated.into());
        self
    }

    /// Set the front page mode and posts page (builder pattern)
    pub fn with_front_page(mut self, mode: FrontPageMode, posts_page: Option<ContentId>) -> Self {
        self.site.front_page = mode;
        self.site.posts_page = posts_page;
        self
    }

    /// Set the request (builder pattern)
    pub fn with_request(mut self, request: RequestState) -> Self {
        self.request = request;
        self
    }

    fn item(&self, id: ContentId) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn term(&self, id: TermId, taxonomy: &str) -> Option<&Term> {
        self.terms
            .iter()
            .find(|term| term.id == id && term.taxonomy == taxonomy)
    }

    fn home(&self) -> &str {
        self.site.home_url.trim_end_matches('/')
    }
}

impl QueryState for SiteSnapshot {
    fn conditionals(&self) -> Conditionals {
        self.request.conditionals
    }

    fn current_item(&self) -> Option<ContentItem> {
        self.request.item.and_then(|id| self.content_item(id))
    }

    fn content_item(&self, id: ContentId) -> Option<ContentItem> {
        self.item(id).cloned()
    }

    fn queried_term(&self) -> Option<Term> {
        self.request
            .term
            .and_then(|id| self.terms.iter().find(|term| term.id == id))
            .cloned()
    }

    fn queried_content_type(&self) -> Option<ContentType> {
        self.request.content_type.clone()
    }

    fn queried_author(&self) -> Option<String> {
        self.request.author.clone()
    }

    fn search_query(&self) -> Option<String> {
        self.request.search.clone()
    }

    fn archive_date(&self) -> Option<NaiveDate> {
        self.request.date
    }

    fn home_url(&self) -> String {
        self.site.home_url.clone()
    }

    fn ancestors(&self, id: ContentId) -> Vec<ContentId> {
        let mut chain = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut parent = self.item(id).and_then(|item| item.parent);

        while let Some(parent_id) = parent {
            if !seen.insert(parent_id) {
                break;
            }
            chain.push(parent_id);
            parent = self.item(parent_id).and_then(|item| item.parent);
        }

        chain
    }

    fn permalink(&self, id: ContentId) -> Option<String> {
        self.item(id).and_then(|item| item.permalink.clone())
    }

    fn content_type_object(&self, content_type: &ContentType) -> Option<ContentTypeObject> {
        self.content_types
            .iter()
            .find(|object| &object.content_type == content_type)
            .cloned()
    }

    fn term_ancestors(&self, id: TermId, taxonomy: &str) -> Vec<TermId> {
        let mut chain = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut parent = self.term(id, taxonomy).and_then(|term| term.parent);

        while let Some(parent_id) = parent {
            if !seen.insert(parent_id) {
                break;
            }
            chain.push(parent_id);
            parent = self.term(parent_id, taxonomy).and_then(|term| term.parent);
        }

        chain
    }

    fn term_by_id(&self, id: TermId, taxonomy: &str) -> Option<Term> {
        self.term(id, taxonomy).cloned()
    }

    fn term_link(&self, id: TermId) -> Option<String> {
        self.terms
            .iter()
            .find(|term| term.id == id)
            .and_then(|term| term.link.clone())
    }

    fn year_link(&self, year: i32) -> Option<String> {
        Some(format!("{}/{}/", self.home(), year))
    }

    fn month_link(&self, year: i32, month: u32) -> Option<String> {
        Some(format!("{}/{}/{:02}/", self.home(), year, month))
    }

    fn front_page_mode(&self) -> FrontPageMode {
        self.site.front_page
    }

    fn posts_page(&self) -> Option<ContentId> {
        self.site.posts_page
    }

    fn translate(&self, text: &str) -> String {
        self.translations
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}
