//! Page context classification
//!
//! A request is classified exactly once into a [`PageContext`] from the
//! host's conditional flags. Branches are checked top-down and the first
//! match wins.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Conditional flags describing the current request
///
/// Hosts set whichever flags apply; several may be true at once (a day
/// archive is also an archive). Classification resolves the overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conditionals {
    pub is_404: bool,
    pub is_singular: bool,
    pub is_page: bool,
    pub is_home: bool,
    pub is_front_page: bool,
    pub is_day: bool,
    pub is_month: bool,
    pub is_year: bool,
    pub is_author: bool,
    pub is_search: bool,
    pub is_post_type_archive: bool,
    pub is_tax: bool,
    pub is_category: bool,
    pub is_tag: bool,
    pub is_archive: bool,
}

/// The kind of page being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageContext {
    /// Blog index shown on a page other than the front page
    Home,
    SingularPage,
    SingularPost,
    DateYear,
    DateMonth,
    DateDay,
    AuthorArchive,
    SearchResults,
    ContentTypeArchive,
    /// Custom taxonomy term archive
    TaxonomyTerm,
    CategoryTerm,
    /// Tag archive or any other archive without a dedicated branch
    GenericArchive,
    NotFound,
    /// Index fallback, including the blog front page
    Fallback,
}

impl PageContext {
    /// Classify a request, first match wins
    pub fn classify(c: &Conditionals) -> Self {
        let context = if c.is_404 {
            PageContext::NotFound
        } else if c.is_singular && c.is_page {
            PageContext::SingularPage
        } else if c.is_singular {
            PageContext::SingularPost
        } else if c.is_home && !c.is_front_page {
            PageContext::Home
        } else if c.is_day {
            PageContext::DateDay
        } else if c.is_month {
            PageContext::DateMonth
        } else if c.is_year {
            PageContext::DateYear
        } else if c.is_author {
            PageContext::AuthorArchive
        } else if c.is_search {
            PageContext::SearchResults
        } else if c.is_post_type_archive {
            PageContext::ContentTypeArchive
        } else if c.is_tax {
            PageContext::TaxonomyTerm
        } else if c.is_category {
            PageContext::CategoryTerm
        } else if c.is_tag || c.is_archive {
            PageContext::GenericArchive
        } else {
            PageContext::Fallback
        };

        debug!(context = context.label(), "classified request");
        context
    }

    /// Get human-readable label for the context
    pub fn label(&self) -> &'static str {
        match self {
            PageContext::Home => "home",
            PageContext::SingularPage => "singular page",
            PageContext::SingularPost => "singular post",
            PageContext::DateYear => "year archive",
            PageContext::DateMonth => "month archive",
            PageContext::DateDay => "day archive",
            PageContext::AuthorArchive => "author archive",
            PageContext::SearchResults => "search results",
            PageContext::ContentTypeArchive => "content type archive",
            PageContext::TaxonomyTerm => "taxonomy term",
            PageContext::CategoryTerm => "category",
            PageContext::GenericArchive => "archive",
            PageContext::NotFound => "not found",
            PageContext::Fallback => "fallback",
        }
    }
}
