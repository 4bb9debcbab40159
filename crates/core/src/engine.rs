//! Trail engine module
//!
//! This module provides the trail builder: it classifies the request, runs
//! the branch for that page context and assembles the positioned crumbs.

use crate::ancestors::{page_ancestors, term_ancestors};
use crate::config::{HookContext, TrailConfig};
use crate::context::PageContext;
use crate::formatter::CrumbFormatter;
use crate::models::{ContentId, ContentItem, ContentType, Crumb, Trail};
use crate::output::html::render_html;
use crate::query::{FrontPageMode, QueryState};
use crate::resolver::Resolver;
use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

/// Result of a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// The override hook supplied the output verbatim
    Override(String),
    /// A trail assembled for the request
    Trail(Trail),
}

impl BuildOutcome {
    /// The trail, if the build was not overridden
    pub fn trail(&self) -> Option<&Trail> {
        match self {
            BuildOutcome::Trail(trail) => Some(trail),
            BuildOutcome::Override(_) => None,
        }
    }
}

/// Main trail builder
#[derive(Debug, Clone, Default)]
pub struct TrailBuilder {
    config: TrailConfig,
}

impl TrailBuilder {
    /// Create a new builder with the given configuration
    pub fn new(config: TrailConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    /// Build the trail for a request
    ///
    /// `content_id` selects the item the trail is about; without it the
    /// request's active item is used.
    pub fn build(&self, query: &dyn QueryState, content_id: Option<ContentId>) -> BuildOutcome {
        let item = match content_id {
            Some(id) => query.content_item(id),
            None => query.current_item(),
        };
        let hook_context = HookContext {
            content_id: content_id.or(item.as_ref().map(|i| i.id)),
            item: item.as_ref(),
        };

        if let Some(hook) = &self.config.hooks.output_override {
            if let Some(output) = hook(&hook_context) {
                debug!("trail output overridden");
                return BuildOutcome::Override(output);
            }
        }

        let context = PageContext::classify(&query.conditionals());
        let mut build = Build {
            query,
            config: &self.config,
            resolver: Resolver::new(query, &self.config.hooks),
            formatter: CrumbFormatter::new(),
            crumbs: Vec::new(),
            item: item.as_ref(),
        };
        build.run(context);

        let mut trail = build.formatter.finish(build.crumbs);
        if let Some(hook) = &self.config.hooks.output_transform {
            trail = hook(trail, &hook_context);
            trail.reindex();
        }

        debug!(context = context.label(), crumbs = trail.len(), "trail built");
        BuildOutcome::Trail(trail)
    }

    /// Build the trail and render it as HTML microdata
    pub fn render(&self, query: &dyn QueryState, content_id: Option<ContentId>) -> String {
        match self.build(query, content_id) {
            BuildOutcome::Override(output) => output,
            BuildOutcome::Trail(trail) => render_html(&trail, &self.config),
        }
    }
}

/// State of one build
struct Build<'a> {
    query: &'a dyn QueryState,
    config: &'a TrailConfig,
    resolver: Resolver<'a>,
    formatter: CrumbFormatter,
    crumbs: Vec<Crumb>,
    item: Option<&'a ContentItem>,
}

impl Build<'_> {
    fn run(&mut self, context: PageContext) {
        if context == PageContext::NotFound {
            return;
        }

        // The blog front page is its own terminal crumb.
        if context == PageContext::Fallback && self.query.conditionals().is_front_page {
            let label = self.config.homepage_text.clone();
            self.push(label, None);
            return;
        }

        self.homepage_crumb();

        match context {
            PageContext::SingularPage => self.singular_page(),
            PageContext::SingularPost => self.singular_post(),
            PageContext::Home => self.posts_index(),
            PageContext::DateYear | PageContext::DateMonth | PageContext::DateDay => {
                self.date_crumbs(context)
            }
            PageContext::AuthorArchive => {
                if let Some(author) = self.query.queried_author() {
                    self.push(author, None);
                }
            }
            PageContext::SearchResults => self.search_crumb(),
            PageContext::ContentTypeArchive => self.type_name_crumb(),
            PageContext::TaxonomyTerm => self.taxonomy_crumbs(),
            PageContext::CategoryTerm => self.category_crumbs(),
            PageContext::GenericArchive => match self.query.queried_term() {
                Some(term) => self.push(term.name, None),
                None => self.type_name_crumb(),
            },
            PageContext::Fallback => {
                if let Some(item) = self.item {
                    let name = self.resolver.resolve_name(item);
                    self.push(name, None);
                }
            }
            PageContext::NotFound => {}
        }
    }

    fn push(&mut self, label: String, link: Option<String>) {
        let crumb = self.formatter.format(label, link);
        self.crumbs.push(crumb);
    }

    fn push_linked(&mut self, label: String, link: Option<String>) {
        if let Some(crumb) = self.formatter.format_linked(label, link) {
            self.crumbs.push(crumb);
        }
    }

    fn homepage_crumb(&mut self) {
        let label = self.config.homepage_text.clone();
        let link = Some(self.query.home_url());

        let crumb = match &self.config.hooks.homepage_crumb {
            Some(hook) => hook(label, link),
            None => Some((label, link)),
        };

        match crumb {
            Some((label, link)) => self.push_linked(label, link),
            None => trace!("homepage crumb dropped by hook"),
        }
    }

    fn singular_page(&mut self) {
        let Some(item) = self.item else {
            return;
        };

        let mut ancestors = page_ancestors(self.query, &mut self.resolver, item.id);
        if let Some(hook) = &self.config.hooks.page_crumbs {
            ancestors = hook(ancestors, item.id);
        }
        for ancestor in ancestors {
            self.push_linked(ancestor.name, ancestor.link);
        }

        self.push(item.title.clone(), None);
    }

    fn singular_post(&mut self) {
        let Some(item) = self.item else {
            return;
        };

        let link = self.resolver.resolve_archive_link(item);
        let name = self.resolver.resolve_name(item);
        self.push_linked(name, link);

        self.push(item.title.clone(), None);
    }

    fn posts_index(&mut self) {
        let page_title = self
            .query
            .posts_page()
            .and_then(|id| self.resolver.resolve_entry(id))
            .map(|entry| entry.title);

        let label = match page_title {
            Some(title) => title,
            None => self.resolver.type_name(&ContentType::Post),
        };
        self.push(label, None);
    }

    fn date_crumbs(&mut self, context: PageContext) {
        let Some(date) = self.query.archive_date() else {
            return;
        };
        let year = date.year();

        if context == PageContext::DateYear {
            self.push(year.to_string(), None);
            return;
        }
        self.push_linked(year.to_string(), self.query.year_link(year));

        let month = date.format("%B").to_string();
        if context == PageContext::DateMonth {
            self.push(month, None);
            return;
        }
        self.push_linked(month, self.query.month_link(year, date.month()));

        self.push(day_label(&date), None);
    }

    fn search_crumb(&mut self) {
        let label = match self.query.search_query().filter(|q| !q.trim().is_empty()) {
            Some(search) => format!("{}: {}", self.query.translate("Search results for"), search),
            None => self.query.translate("Search results"),
        };
        self.push(label, None);
    }

    fn type_name_crumb(&mut self) {
        let name = match (self.query.queried_content_type(), self.item) {
            (Some(content_type), _) => self.resolver.type_name(&content_type),
            (None, Some(item)) => self.resolver.resolve_name(item),
            (None, None) => return,
        };
        self.push(name, None);
    }

    fn taxonomy_crumbs(&mut self) {
        let Some(term) = self.query.queried_term() else {
            return;
        };

        for ancestor in term_ancestors(self.query, &term) {
            self.push(ancestor.name, ancestor.link);
        }
        self.push(term.name, None);
    }

    fn category_crumbs(&mut self) {
        let Some(term) = self.query.queried_term() else {
            return;
        };

        if self.query.front_page_mode() == FrontPageMode::Page {
            if let Some(entry) = self
                .query
                .posts_page()
                .and_then(|id| self.resolver.resolve_entry(id))
            {
                self.push_linked(entry.title, entry.permalink);
            }
        }
        self.push(term.name, None);
    }
}

/// Day of month with English ordinal suffix ("1st", "12th", "23rd")
fn day_label(date: &NaiveDate) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", day, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Conditionals;
    use crate::models::{ContentTypeObject, Term};
    use crate::snapshot::{RequestState, SiteSnapshot};

    const HOME: &str = "https://site.test/";

    fn site() -> SiteSnapshot {
        SiteSnapshot::new(HOME)
            .with_content_type(ContentTypeObject {
                content_type: ContentType::Post,
                singular_name: "Post".to_string(),
                plural_name: "Posts".to_string(),
                archive_link: Some("https://site.test/blog/".to_string()),
            })
            .with_content_type(ContentTypeObject {
                content_type: ContentType::from_tag("recipe"),
                singular_name: "Recipe".to_string(),
                plural_name: "Recipes".to_string(),
                archive_link: Some("https://site.test/recipes/".to_string()),
            })
            .with_item(
                ContentItem::new(10, ContentType::Post, "Hello World")
                    .with_permalink("https://site.test/hello-world/"),
            )
            .with_item(
                ContentItem::new(20, ContentType::from_tag("recipe"), "Pancakes")
                    .with_permalink("https://site.test/recipes/pancakes/"),
            )
            .with_item(
                ContentItem::new(1, ContentType::Page, "Company")
                    .with_permalink("https://site.test/company/"),
            )
            .with_item(
                ContentItem::new(2, ContentType::Page, "Team")
                    .with_parent(1)
                    .with_permalink("https://site.test/company/team/"),
            )
            .with_item(
                ContentItem::new(3, ContentType::Page, "Engineering")
                    .with_parent(2)
                    .with_permalink("https://site.test/company/team/engineering/"),
            )
            .with_item(
                ContentItem::new(4, ContentType::Page, "News")
                    .with_permalink("https://site.test/news/"),
            )
            .with_term(Term {
                id: 100,
                name: "Music".to_string(),
                taxonomy: "genre".to_string(),
                parent: None,
                link: Some("https://site.test/genre/music/".to_string()),
            })
            .with_term(Term {
                id: 101,
                name: "Jazz".to_string(),
                taxonomy: "genre".to_string(),
                parent: Some(100),
                link: Some("https://site.test/genre/music/jazz/".to_string()),
            })
            .with_term(Term {
                id: 200,
                name: "Updates".to_string(),
                taxonomy: "category".to_string(),
                parent: None,
                link: Some("https://site.test/category/updates/".to_string()),
            })
    }

    fn request(conditionals: Conditionals) -> RequestState {
        RequestState {
            conditionals,
            ..Default::default()
        }
    }

    fn trail(site: &SiteSnapshot) -> Trail {
        match TrailBuilder::default().build(site, None) {
            BuildOutcome::Trail(trail) => trail,
            BuildOutcome::Override(output) => panic!("unexpected override: {output}"),
        }
    }

    fn links(trail: &Trail) -> Vec<bool> {
        trail.crumbs.iter().map(|c| c.is_linked()).collect()
    }

    #[test]
    fn test_singular_post() {
        let site = site().with_request(RequestState {
            item: Some(10),
            ..request(Conditionals {
                is_singular: true,
                ..Default::default()
            })
        });

        let trail = trail(&site);
        assert_eq!(trail.labels(), vec!["Home", "Blog", "Hello World"]);
        assert_eq!(links(&trail), vec![true, true, false]);
        assert_eq!(
            trail.crumbs[1].link.as_deref(),
            Some("https://site.test/blog/")
        );
        assert!(trail.is_contiguous());
    }

    #[test]
    fn test_singular_custom_type_uses_registry() {
        let site = site().with_request(RequestState {
            item: Some(20),
            ..request(Conditionals {
                is_singular: true,
                ..Default::default()
            })
        });

        let trail = trail(&site);
        assert_eq!(trail.labels(), vec!["Home", "Recipe", "Pancakes"]);
    }

    #[test]
    fn test_page_with_two_ancestors() {
        let site = site().with_request(RequestState {
            item: Some(3),
            ..request(Conditionals {
                is_singular: true,
                is_page: true,
                ..Default::default()
            })
        });

        let trail = trail(&site);
        assert_eq!(
            trail.labels(),
            vec!["Home", "Company", "Team", "Engineering"]
        );
        assert_eq!(links(&trail), vec![true, true, true, false]);
        let positions: Vec<usize> = trail.crumbs.iter().map(|c| c.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_explicit_content_id_wins() {
        let site = site().with_request(RequestState {
            item: Some(10),
            ..request(Conditionals {
                is_singular: true,
                is_page: true,
                ..Default::default()
            })
        });

        let outcome = TrailBuilder::default().build(&site, Some(2));
        let trail = outcome.trail().unwrap();
        assert_eq!(trail.labels(), vec!["Home", "Company", "Team"]);
    }

    #[test]
    fn test_not_found_is_empty() {
        let site = site().with_request(request(Conditionals {
            is_404: true,
            ..Default::default()
        }));

        assert!(trail(&site).is_empty());
        assert_eq!(TrailBuilder::default().render(&site, None), "");
    }

    #[test]
    fn test_override_bypasses_everything() {
        let site = site().with_request(request(Conditionals {
            is_404: true,
            ..Default::default()
        }));
        let builder =
            TrailBuilder::new(TrailConfig::new().with_output_override(|_| Some("custom".into())));

        assert_eq!(
            builder.build(&site, None),
            BuildOutcome::Override("custom".to_string())
        );
        assert_eq!(builder.render(&site, None), "custom");
    }

    #[test]
    fn test_override_sees_item() {
        let site = site().with_request(RequestState {
            item: Some(10),
            ..request(Conditionals {
                is_singular: true,
                ..Default::default()
            })
        });
        let builder = TrailBuilder::new(TrailConfig::new().with_output_override(|ctx| {
            ctx.item
                .filter(|item| item.content_type == ContentType::Post)
                .map(|item| format!("post {}", item.id))
        }));

        assert_eq!(builder.render(&site, None), "post 10");
        assert!(builder.build(&site, Some(3)).trail().is_some());
    }

    #[test]
    fn test_taxonomy_term_with_ancestor() {
        let site = site().with_request(RequestState {
            term: Some(101),
            ..request(Conditionals {
                is_tax: true,
                is_archive: true,
                ..Default::default()
            })
        });

        let trail = trail(&site);
        assert_eq!(trail.labels(), vec!["Home", "Music", "Jazz"]);
        assert_eq!(links(&trail), vec![true, true, false]);
    }

    #[test]
    fn test_category_with_static_front_page() {
        let conditionals = Conditionals {
            is_category: true,
            is_archive: true,
            ..Default::default()
        };
        let with_posts_page = site()
            .with_front_page(FrontPageMode::Page, Some(4))
            .with_request(RequestState {
                term: Some(200),
                ..request(conditionals)
            });
        let trail_with_page = trail(&with_posts_page);
        assert_eq!(trail_with_page.labels(), vec!["Home", "News", "Updates"]);
        assert_eq!(
            trail_with_page.crumbs[1].link.as_deref(),
            Some("https://site.test/news/")
        );

        let latest_posts = site().with_request(RequestState {
            term: Some(200),
            ..request(conditionals)
        });
        assert_eq!(trail(&latest_posts).labels(), vec!["Home", "Updates"]);
    }

    #[test]
    fn test_date_archives() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 22);

        let day = site().with_request(RequestState {
            date,
            ..request(Conditionals {
                is_day: true,
                is_archive: true,
                ..Default::default()
            })
        });
        let trail_day = trail(&day);
        assert_eq!(trail_day.labels(), vec!["Home", "2024", "March", "22nd"]);
        assert_eq!(links(&trail_day), vec![true, true, true, false]);
        assert_eq!(
            trail_day.crumbs[2].link.as_deref(),
            Some("https://site.test/2024/03/")
        );

        let month = site().with_request(RequestState {
            date,
            ..request(Conditionals {
                is_month: true,
                ..Default::default()
            })
        });
        let trail_month = trail(&month);
        assert_eq!(trail_month.labels(), vec!["Home", "2024", "March"]);
        assert_eq!(links(&trail_month), vec![true, true, false]);

        let year = site().with_request(RequestState {
            date,
            ..request(Conditionals {
                is_year: true,
                ..Default::default()
            })
        });
        let trail_year = trail(&year);
        assert_eq!(trail_year.labels(), vec!["Home", "2024"]);
        assert_eq!(links(&trail_year), vec![true, false]);
    }

    #[test]
    fn test_day_label_ordinals() {
        let label = |d| day_label(&NaiveDate::from_ymd_opt(2024, 1, d).unwrap());
        assert_eq!(label(1), "1st");
        assert_eq!(label(2), "2nd");
        assert_eq!(label(3), "3rd");
        assert_eq!(label(4), "4th");
        assert_eq!(label(11), "11th");
        assert_eq!(label(12), "12th");
        assert_eq!(label(13), "13th");
        assert_eq!(label(21), "21st");
        assert_eq!(label(31), "31st");
    }

    #[test]
    fn test_author_and_search() {
        let author = site().with_request(RequestState {
            author: Some("Ada Lovelace".to_string()),
            ..request(Conditionals {
                is_author: true,
                is_archive: true,
                ..Default::default()
            })
        });
        assert_eq!(trail(&author).labels(), vec!["Home", "Ada Lovelace"]);

        let search = site()
            .with_translation("Search results for", "Searched for")
            .with_request(RequestState {
                search: Some("waffles".to_string()),
                ..request(Conditionals {
                    is_search: true,
                    ..Default::default()
                })
            });
        assert_eq!(
            trail(&search).labels(),
            vec!["Home", "Searched for: waffles"]
        );

        let empty_search = site().with_request(request(Conditionals {
            is_search: true,
            ..Default::default()
        }));
        assert_eq!(
            trail(&empty_search).labels(),
            vec!["Home", "Search results"]
        );
    }

    #[test]
    fn test_content_type_archive() {
        let site = site().with_request(RequestState {
            content_type: Some(ContentType::from_tag("recipe")),
            ..request(Conditionals {
                is_post_type_archive: true,
                is_archive: true,
                ..Default::default()
            })
        });

        let trail = trail(&site);
        assert_eq!(trail.labels(), vec!["Home", "Recipe"]);
        assert_eq!(links(&trail), vec![true, false]);
    }

    #[test]
    fn test_tag_archive_uses_term_name() {
        let site = site().with_request(RequestState {
            term: Some(200),
            ..request(Conditionals {
                is_tag: true,
                is_archive: true,
                ..Default::default()
            })
        });

        assert_eq!(trail(&site).labels(), vec!["Home", "Updates"]);
    }

    #[test]
    fn test_posts_index() {
        let blog_index = site()
            .with_front_page(FrontPageMode::Page, Some(4))
            .with_request(request(Conditionals {
                is_home: true,
                ..Default::default()
            }));
        assert_eq!(trail(&blog_index).labels(), vec!["Home", "News"]);

        let without_page = site().with_request(request(Conditionals {
            is_home: true,
            ..Default::default()
        }));
        assert_eq!(trail(&without_page).labels(), vec!["Home", "Blog"]);
    }

    #[test]
    fn test_blog_front_page_is_terminal_home() {
        let site = site().with_request(request(Conditionals {
            is_home: true,
            is_front_page: true,
            ..Default::default()
        }));

        let trail = trail(&site);
        assert_eq!(trail.labels(), vec!["Home"]);
        assert_eq!(links(&trail), vec![false]);
    }

    #[test]
    fn test_fallback_uses_item_section_name() {
        let site = site().with_request(RequestState {
            item: Some(20),
            ..Default::default()
        });
        assert_eq!(trail(&site).labels(), vec!["Home", "Recipe"]);
    }

    #[test]
    fn test_missing_item_degrades_to_home() {
        let site = site().with_request(RequestState {
            item: Some(999),
            ..request(Conditionals {
                is_singular: true,
                ..Default::default()
            })
        });

        let trail = trail(&site);
        assert_eq!(trail.labels(), vec!["Home"]);
        assert!(trail.is_contiguous());
    }

    #[test]
    fn test_missing_archive_link_omits_section() {
        let site = SiteSnapshot::new(HOME)
            .with_item(ContentItem::new(10, ContentType::Post, "Hello World"))
            .with_request(RequestState {
                item: Some(10),
                ..request(Conditionals {
                    is_singular: true,
                    ..Default::default()
                })
            });

        let trail = trail(&site);
        assert_eq!(trail.labels(), vec!["Home", "Hello World"]);
        assert_eq!(trail.crumbs[1].position, 2);
    }

    #[test]
    fn test_transform_hook_is_reindexed() {
        let site = site().with_request(RequestState {
            item: Some(3),
            ..request(Conditionals {
                is_singular: true,
                is_page: true,
                ..Default::default()
            })
        });
        let builder = TrailBuilder::new(TrailConfig::new().with_output_transform(|mut trail, _| {
            trail.crumbs.retain(|c| c.label != "Team");
            trail
        }));

        let trail = builder.build(&site, None).trail().cloned().unwrap();
        assert_eq!(trail.labels(), vec!["Home", "Company", "Engineering"]);
        assert!(trail.is_contiguous());
    }

    #[test]
    fn test_page_crumbs_hook() {
        let site = site().with_request(RequestState {
            item: Some(3),
            ..request(Conditionals {
                is_singular: true,
                is_page: true,
                ..Default::default()
            })
        });
        let builder = TrailBuilder::new(
            TrailConfig::new()
                .with_page_crumbs(|ancestors, _| ancestors.into_iter().skip(1).collect()),
        );

        let trail = builder.build(&site, None).trail().cloned().unwrap();
        assert_eq!(trail.labels(), vec!["Home", "Team", "Engineering"]);
        assert!(trail.is_contiguous());
    }

    #[test]
    fn test_custom_homepage_text() {
        let site = site().with_request(RequestState {
            item: Some(10),
            ..request(Conditionals {
                is_singular: true,
                ..Default::default()
            })
        });
        let builder = TrailBuilder::new(TrailConfig::new().with_homepage_text("Start"));

        let trail = builder.build(&site, None).trail().cloned().unwrap();
        assert_eq!(trail.crumbs[0].label, "Start");
        assert_eq!(trail.crumbs[0].link.as_deref(), Some(HOME));
    }

    #[test]
    fn test_homepage_crumb_hook_relinks() {
        let site = site().with_request(RequestState {
            item: Some(10),
            ..request(Conditionals {
                is_singular: true,
                ..Default::default()
            })
        });
        let builder = TrailBuilder::new(TrailConfig::new().with_homepage_crumb(|label, _| {
            Some((label.to_uppercase(), Some("https://site.test/start/".to_string())))
        }));

        let trail = builder.build(&site, None).trail().cloned().unwrap();
        assert_eq!(trail.labels(), vec!["HOME", "Blog", "Hello World"]);
        assert_eq!(
            trail.crumbs[0].link.as_deref(),
            Some("https://site.test/start/")
        );
    }

    #[test]
    fn test_homepage_crumb_hook_drops_crumb() {
        let site = site().with_request(RequestState {
            item: Some(10),
            ..request(Conditionals {
                is_singular: true,
                ..Default::default()
            })
        });
        let builder = TrailBuilder::new(TrailConfig::new().with_homepage_crumb(|_, _| None));

        let trail = builder.build(&site, None).trail().cloned().unwrap();
        assert_eq!(trail.labels(), vec!["Blog", "Hello World"]);
        assert_eq!(trail.crumbs[0].position, 1);
        assert!(trail.is_contiguous());
    }
}
