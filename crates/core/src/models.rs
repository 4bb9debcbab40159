//! Data models for breadcrumb trails
//!
//! This module defines the core data structures used throughout the crate,
//! including content items, taxonomy terms, the content type registry record,
//! and the crumbs and trails produced by a build.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier of a content item (post, page, custom entry)
pub type ContentId = u64;

/// Identifier of a taxonomy term
pub type TermId = u64;

/// Content type tag of a content item
///
/// `Post` is the only type with a fixed resolution rule; every other type
/// goes through the content type registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentType {
    Post,
    Page,
    Custom(String),
}

impl ContentType {
    /// Parse a content type from its tag
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "post" => ContentType::Post,
            "page" => ContentType::Page,
            other => ContentType::Custom(other.to_string()),
        }
    }

    /// Get the tag string for this content type
    pub fn tag(&self) -> &str {
        match self {
            ContentType::Post => "post",
            ContentType::Page => "page",
            ContentType::Custom(tag) => tag,
        }
    }
}

impl Default for ContentType {
    fn default() -> Self {
        ContentType::Post
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for ContentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for ContentType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(ContentType::from_tag(&tag))
    }
}

/// A single addressable unit of content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Identifier of the item
    pub id: ContentId,

    /// Content type tag
    #[serde(default, rename = "type")]
    pub content_type: ContentType,

    /// Display title
    #[serde(default)]
    pub title: String,

    /// Parent item, if this item sits inside a hierarchy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ContentId>,

    /// Canonical URL of the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
}

impl ContentItem {
    /// Create a new content item without parent or permalink
    pub fn new(id: ContentId, content_type: ContentType, title: impl Into<String>) -> Self {
        Self {
            id,
            content_type,
            title: title.into(),
            parent: None,
            permalink: None,
        }
    }

    /// Set the parent item (builder pattern)
    pub fn with_parent(mut self, parent: ContentId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Set the permalink (builder pattern)
    pub fn with_permalink(mut self, permalink: impl Into<String>) -> Self {
        self.permalink = Some(permalink.into());
        self
    }
}

/// Registry record describing a content type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeObject {
    /// Content type tag this record describes
    #[serde(rename = "type")]
    pub content_type: ContentType,

    /// Singular display label ("Product")
    #[serde(default)]
    pub singular_name: String,

    /// Plural display label ("Products")
    #[serde(default)]
    pub plural_name: String,

    /// Archive URL, if the type has an archive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_link: Option<String>,
}

/// A taxonomy term (category, tag, custom taxonomy term)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Identifier of the term
    pub id: TermId,

    /// Display name
    pub name: String,

    /// Taxonomy the term belongs to ("category", "genre", ...)
    pub taxonomy: String,

    /// Parent term within the same taxonomy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<TermId>,

    /// Archive URL for the term
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A single crumb in a trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crumb {
    /// Text shown for the crumb
    pub label: String,

    /// Target URL; `None` marks a terminal crumb
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// 1-based position within the trail
    pub position: usize,
}

impl Crumb {
    /// Check whether the crumb carries a non-empty link
    pub fn is_linked(&self) -> bool {
        self.link.as_deref().is_some_and(|l| !l.is_empty())
    }
}

/// An ordered breadcrumb trail for one page render
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trail {
    /// The crumbs of the trail (from home to current page)
    pub crumbs: Vec<Crumb>,
}

impl Trail {
    /// Create an empty trail
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of crumbs
    pub fn len(&self) -> usize {
        self.crumbs.len()
    }

    /// Check if the trail has no crumbs
    pub fn is_empty(&self) -> bool {
        self.crumbs.is_empty()
    }

    /// Labels of all crumbs in order
    pub fn labels(&self) -> Vec<&str> {
        self.crumbs.iter().map(|c| c.label.as_str()).collect()
    }

    /// Get the formatted path string
    pub fn path(&self) -> String {
        self.labels().join(" > ")
    }

    /// Reassign positions so they run contiguously from 1
    pub fn reindex(&mut self) {
        for (idx, crumb) in self.crumbs.iter_mut().enumerate() {
            crumb.position = idx + 1;
        }
    }

    /// Check that positions run contiguously from 1
    pub fn is_contiguous(&self) -> bool {
        self.crumbs
            .iter()
            .enumerate()
            .all(|(idx, c)| c.position == idx + 1)
    }
}
