//! crumbtrail_core - Core library for breadcrumb trails
//!
//! This crate builds the breadcrumb trail for a single page request of a
//! content-managed site: home → section → ancestors → current item, rendered
//! as a schema.org `BreadcrumbList`.
//!
//! # Features
//!
//! - **Page Classification**: Each request maps to exactly one page context
//!   (singular page or post, date/author/term/type archive, search, 404,
//!   index) in a fixed priority order.
//! - **Ancestor Walking**: Page and term hierarchies are walked root first,
//!   skipping ancestors that no longer resolve.
//! - **Memoized Resolution**: Section names and archive links are resolved
//!   once per item per build.
//! - **Host Hooks**: Override, transform and naming hooks supplied at
//!   construction time.
//! - **Multiple Output Formats**: HTML microdata, JSON, YAML, ANSI-colored
//!   terminal output and a plain summary.
//!
//! # Example
//!
//! ```rust,no_run
//! use crumbtrail_core::{SiteSnapshot, TrailBuilder, TrailConfig};
//! use std::path::Path;
//!
//! // Load a site and request
//! let site = SiteSnapshot::from_path(Path::new("site.yaml")).unwrap();
//!
//! // Build and render the trail
//! let builder = TrailBuilder::new(TrailConfig::new().with_separator(" / "));
//! println!("{}", builder.render(&site, None));
//! ```

pub mod ancestors;
pub mod config;
pub mod context;
pub mod engine;
pub mod formatter;
pub mod models;
pub mod output;
pub mod query;
pub mod resolver;
pub mod snapshot;

// Re-exports for convenience
pub use ancestors::Ancestor;
pub use config::{HookContext, Hooks, TrailConfig, DEFAULT_HOMEPAGE_TEXT, DEFAULT_SEPARATOR};
pub use context::{Conditionals, PageContext};
pub use engine::{BuildOutcome, TrailBuilder};
pub use formatter::CrumbFormatter;
pub use models::{
    ContentId, ContentItem, ContentType, ContentTypeObject, Crumb, Term, TermId, Trail,
};
pub use output::{format_output, render_html, FormatError, OutputFormat};
pub use query::{FrontPageMode, QueryState};
pub use resolver::{Entry, Resolver};
pub use snapshot::{RequestState, SiteInfo, SiteSnapshot, SnapshotError};
