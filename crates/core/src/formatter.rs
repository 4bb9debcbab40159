//! Crumb formatter
//!
//! Assigns positions to crumbs as they are produced. One formatter lives for
//! exactly one trail build, so positions always start at 1.

use crate::models::{Crumb, Trail};

/// Positioned crumb producer for a single build
#[derive(Debug, Default)]
pub struct CrumbFormatter {
    position: usize,
}

impl CrumbFormatter {
    /// Create a formatter whose first crumb gets position 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Format a crumb, empty links are treated as no link
    pub fn format(&mut self, label: impl Into<String>, link: Option<String>) -> Crumb {
        self.position += 1;
        Crumb {
            label: label.into(),
            link: link.filter(|l| !l.is_empty()),
            position: self.position,
        }
    }

    /// Format a linked crumb, or nothing when the link is missing or empty
    pub fn format_linked(
        &mut self,
        label: impl Into<String>,
        link: Option<String>,
    ) -> Option<Crumb> {
        match link {
            Some(link) if !link.is_empty() => Some(self.format(label, Some(link))),
            _ => None,
        }
    }

    /// Collect formatted crumbs into a trail
    pub fn finish(self, crumbs: Vec<Crumb>) -> Trail {
        debug_assert_eq!(crumbs.len(), self.position);
        Trail { crumbs }
    }
}
