//! Ancestor walking
//!
//! Hosts report ancestors nearest-parent first. Trails need them root first,
//! so both walkers reverse the chain before resolving each id. Ancestors that
//! no longer resolve are skipped.

use crate::models::{ContentId, Term};
use crate::query::QueryState;
use crate::resolver::Resolver;
use std::collections::HashSet;
use tracing::trace;

/// A resolved ancestor, ready to become a crumb
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ancestor {
    /// Id of the ancestor item or term
    pub id: u64,

    /// Display name
    pub name: String,

    /// Target URL
    pub link: Option<String>,
}

/// Ancestors of a content item, root first
pub fn page_ancestors(
    query: &dyn QueryState,
    resolver: &mut Resolver<'_>,
    id: ContentId,
) -> Vec<Ancestor> {
    root_first(query.ancestors(id))
        .into_iter()
        .filter_map(|ancestor_id| match resolver.resolve_entry(ancestor_id) {
            Some(entry) => Some(Ancestor {
                id: ancestor_id,
                name: entry.title,
                link: entry.permalink,
            }),
            None => {
                trace!(id = ancestor_id, "skipping unresolved page ancestor");
                None
            }
        })
        .collect()
}

/// Ancestors of a taxonomy term, root first
pub fn term_ancestors(query: &dyn QueryState, term: &Term) -> Vec<Ancestor> {
    root_first(query.term_ancestors(term.id, &term.taxonomy))
        .into_iter()
        .filter_map(|ancestor_id| match query.term_by_id(ancestor_id, &term.taxonomy) {
            Some(ancestor) => Some(Ancestor {
                id: ancestor.id,
                link: query.term_link(ancestor.id).or(ancestor.link),
                name: ancestor.name,
            }),
            None => {
                trace!(id = ancestor_id, "skipping unresolved term ancestor");
                None
            }
        })
        .collect()
}

/// Reverse a leaf-to-root chain, dropping repeats so a cyclic chain ends
fn root_first(mut chain: Vec<u64>) -> Vec<u64> {
    let mut seen = HashSet::new();
    if let Some(cut) = chain.iter().position(|id| !seen.insert(*id)) {
        chain.truncate(cut);
    }
    chain.reverse();
    chain
}
