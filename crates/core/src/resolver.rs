//! Name and link resolution
//!
//! Derives the section name and section archive link of a content item, and
//! the title/permalink entry of arbitrary items by id. Results are memoized
//! per item id for the lifetime of one resolver, which is one trail build.

use crate::config::Hooks;
use crate::models::{ContentId, ContentItem, ContentType};
use crate::query::QueryState;
use std::collections::HashMap;
use tracing::trace;

/// Title and permalink of a content item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub permalink: Option<String>,
}

/// Per-build resolver with memoized lookups
pub struct Resolver<'a> {
    query: &'a dyn QueryState,
    hooks: &'a Hooks,
    names: HashMap<ContentId, String>,
    archive_links: HashMap<ContentId, Option<String>>,
    entries: HashMap<ContentId, Option<Entry>>,
}

impl<'a> Resolver<'a> {
    /// Create a resolver with empty memo maps
    pub fn new(query: &'a dyn QueryState, hooks: &'a Hooks) -> Self {
        Self {
            query,
            hooks,
            names: HashMap::new(),
            archive_links: HashMap::new(),
            entries: HashMap::new(),
        }
    }

    /// Section name of an item's content type, memoized per item
    pub fn resolve_name(&mut self, item: &ContentItem) -> String {
        if let Some(name) = self.names.get(&item.id) {
            trace!(id = item.id, "section name memo hit");
            return name.clone();
        }

        let name = self.type_name(&item.content_type);
        self.names.insert(item.id, name.clone());
        name
    }

    /// Section archive link of an item's content type, memoized per item
    pub fn resolve_archive_link(&mut self, item: &ContentItem) -> Option<String> {
        if let Some(link) = self.archive_links.get(&item.id) {
            trace!(id = item.id, "archive link memo hit");
            return link.clone();
        }

        let link = match &item.content_type {
            ContentType::Post => self.registry_archive_link(&ContentType::Post),
            other => {
                let link = self.registry_archive_link(other);
                match &self.hooks.archive_link {
                    Some(hook) => hook(link, item),
                    None => link,
                }
            }
        };

        self.archive_links.insert(item.id, link.clone());
        link
    }

    /// Title and permalink of an item by id, `None` if the item is missing
    pub fn resolve_entry(&mut self, id: ContentId) -> Option<Entry> {
        if let Some(entry) = self.entries.get(&id) {
            trace!(id, "entry memo hit");
            return entry.clone();
        }

        let entry = self.query.content_item(id).map(|item| Entry {
            permalink: self.query.permalink(id).or(item.permalink),
            title: item.title,
        });

        self.entries.insert(id, entry.clone());
        entry
    }

    /// Section name of a content type without an item to memoize on
    ///
    /// `Post` has a fixed label; every other type reads the registry and
    /// passes through the singular name hook. Unknown types give "".
    pub fn type_name(&self, content_type: &ContentType) -> String {
        match content_type {
            ContentType::Post => self.query.translate("Blog"),
            ContentType::Page | ContentType::Custom(_) => {
                let Some(object) = self.query.content_type_object(content_type) else {
                    return String::new();
                };
                let name = object.singular_name.clone();
                match &self.hooks.singular_name {
                    Some(hook) => hook(name, &object),
                    None => name,
                }
            }
        }
    }

    fn registry_archive_link(&self, content_type: &ContentType) -> Option<String> {
        self.query
            .content_type_object(content_type)
            .and_then(|object| object.archive_link)
    }
}
