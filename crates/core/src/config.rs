//! Configuration module for the trail builder
//!
//! This module provides the builder configuration: the separator and
//! homepage label, rendering options, and the host hooks that can override
//! or adjust parts of a trail.

use crate::ancestors::Ancestor;
use crate::models::{ContentId, ContentItem, ContentTypeObject, Trail};
use std::fmt;
use std::sync::Arc;

/// Default separator emitted after every linked crumb
pub const DEFAULT_SEPARATOR: &str = " &raquo; ";

/// Default label of the homepage crumb
pub const DEFAULT_HOMEPAGE_TEXT: &str = "Home";

/// What the override and transform hooks get to see about a build
#[derive(Debug, Clone, Copy)]
pub struct HookContext<'a> {
    /// Content id the build was requested for, if any
    pub content_id: Option<ContentId>,

    /// The active content item, if one resolved
    pub item: Option<&'a ContentItem>,
}

pub type OverrideHook = Arc<dyn Fn(&HookContext<'_>) -> Option<String> + Send + Sync>;
pub type TransformHook = Arc<dyn Fn(Trail, &HookContext<'_>) -> Trail + Send + Sync>;
pub type SingularNameHook = Arc<dyn Fn(String, &ContentTypeObject) -> String + Send + Sync>;
pub type ArchiveLinkHook =
    Arc<dyn Fn(Option<String>, &ContentItem) -> Option<String> + Send + Sync>;
pub type PageCrumbsHook = Arc<dyn Fn(Vec<Ancestor>, ContentId) -> Vec<Ancestor> + Send + Sync>;
pub type HomepageCrumbHook =
    Arc<dyn Fn(String, Option<String>) -> Option<(String, Option<String>)> + Send + Sync>;

/// Host hooks, each a single-input single-output filter
///
/// `singular_name` and `archive_link` only run for content types without a
/// fixed resolution rule.
#[derive(Clone, Default)]
pub struct Hooks {
    /// Returning `Some` replaces the whole output verbatim
    pub output_override: Option<OverrideHook>,

    /// Runs on the assembled trail before it is returned
    pub output_transform: Option<TransformHook>,

    /// Adjusts the registry singular name of a content type
    pub singular_name: Option<SingularNameHook>,

    /// Adjusts the registry archive link of a content item's type
    pub archive_link: Option<ArchiveLinkHook>,

    /// Adjusts the ancestor list of a page before it is formatted
    pub page_crumbs: Option<PageCrumbsHook>,

    /// Relabels or relinks the leading homepage crumb. `None` drops it
    pub homepage_crumb: Option<HomepageCrumbHook>,
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("output_override", &self.output_override.is_some())
            .field("output_transform", &self.output_transform.is_some())
            .field("singular_name", &self.singular_name.is_some())
            .field("archive_link", &self.archive_link.is_some())
            .field("page_crumbs", &self.page_crumbs.is_some())
            .field("homepage_crumb", &self.homepage_crumb.is_some())
            .finish()
    }
}

/// Configuration for the trail builder
#[derive(Debug, Clone)]
pub struct TrailConfig {
    /// Markup emitted after each linked crumb
    pub separator: String,

    /// Label of the homepage crumb
    pub homepage_text: String,

    /// Render `<ul></ul>` for an empty trail instead of nothing
    pub render_empty_container: bool,

    /// Host hooks
    pub hooks: Hooks,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            homepage_text: DEFAULT_HOMEPAGE_TEXT.to_string(),
            render_empty_container: false,
            hooks: Hooks::default(),
        }
    }
}

impl TrailConfig {
    /// Create a config with default separator and homepage label
    pub fn new() -> Self {
        Self::default()
    }

    /// Set separator (builder pattern)
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set homepage label (builder pattern)
    pub fn with_homepage_text(mut self, text: impl Into<String>) -> Self {
        self.homepage_text = text.into();
        self
    }

    /// Set empty container rendering (builder pattern)
    pub fn with_empty_container(mut self, render: bool) -> Self {
        self.render_empty_container = render;
        self
    }

    /// Set the output override hook (builder pattern)
    pub fn with_output_override<F>(mut self, hook: F) -> Self
    where
        F: Fn(&HookContext<'_>) -> Option<String> + Send + Sync + 'static,
    {
        self.hooks.output_override = Some(Arc::new(hook));
        self
    }

    /// Set the output transform hook (builder pattern)
    pub fn with_output_transform<F>(mut self, hook: F) -> Self
    where
        F: Fn(Trail, &HookContext<'_>) -> Trail + Send + Sync + 'static,
    {
        self.hooks.output_transform = Some(Arc::new(hook));
        self
    }

    /// Set the singular name hook (builder pattern)
    pub fn with_singular_name<F>(mut self, hook: F) -> Self
    where
        F: Fn(String, &ContentTypeObject) -> String + Send + Sync + 'static,
    {
        self.hooks.singular_name = Some(Arc::new(hook));
        self
    }

    /// Set the archive link hook (builder pattern)
    pub fn with_archive_link<F>(mut self, hook: F) -> Self
    where
        F: Fn(Option<String>, &ContentItem) -> Option<String> + Send + Sync + 'static,
    {
        self.hooks.archive_link = Some(Arc::new(hook));
        self
    }

    /// Set the page ancestors hook (builder pattern)
    pub fn with_page_crumbs<F>(mut self, hook: F) -> Self
    where
        F: Fn(Vec<Ancestor>, ContentId) -> Vec<Ancestor> + Send + Sync + 'static,
    {
        self.hooks.page_crumbs = Some(Arc::new(hook));
        self
    }

    /// Set the homepage crumb hook (builder pattern)
    pub fn with_homepage_crumb<F>(mut self, hook: F) -> Self
    where
        F: Fn(String, Option<String>) -> Option<(String, Option<String>)> + Send + Sync + 'static,
    {
        self.hooks.homepage_crumb = Some(Arc::new(hook));
        self
    }
}
