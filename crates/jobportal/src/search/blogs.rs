//! Blog search and filtering.

use serde::Serialize;
use tracing::{debug, trace};

use super::first_seen;
use super::query::{contains_folded, encode_pairs, normalize, parse_pairs, present, same_text};
use crate::model::Blog;

/// Search term, category and tag for the blog listing.
///
/// Blank values are the same as absent ones.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BlogFilter {
    /// Matched against title, excerpt, content and tags.
    pub search: Option<String>,
    /// Exact category name.
    pub category: Option<String>,
    /// Exact tag, ignoring case.
    pub tag: Option<String>,
}

impl PartialEq for BlogFilter {
    fn eq(&self, other: &Self) -> bool {
        same_text(self.search.as_deref(), other.search.as_deref())
            && same_text(self.category.as_deref(), other.category.as_deref())
            && same_text(self.tag.as_deref(), other.tag.as_deref())
    }
}

impl Eq for BlogFilter {}

impl BlogFilter {
    /// A filter that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search term. Blank input clears it.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = normalize(term);
        self
    }

    /// Restrict to one category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = normalize(category);
        self
    }

    /// Restrict to posts carrying `tag`.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = normalize(tag);
        self
    }

    /// Parse the filter from a `/blogs` query string.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut filter = Self::default();
        for (key, value) in parse_pairs(query) {
            let Some(value) = normalize(value) else {
                continue;
            };
            match key.as_str() {
                "search" => filter.search = Some(value),
                "category" => filter.category = Some(value),
                "tag" => filter.tag = Some(value),
                other => trace!(key = other, "Ignoring unknown blog query key"),
            }
        }
        filter
    }

    /// Encode the filter as a query string (no leading `?`).
    #[must_use]
    pub fn to_query(&self) -> String {
        encode_pairs([
            ("search", present(self.search.as_deref()).map(str::to_string)),
            ("category", present(self.category.as_deref()).map(str::to_string)),
            ("tag", present(self.tag.as_deref()).map(str::to_string)),
        ])
    }

    /// Whether nothing is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        present(self.search.as_deref()).is_none()
            && present(self.category.as_deref()).is_none()
            && present(self.tag.as_deref()).is_none()
    }

    /// Reset every criterion.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a single post satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, blog: &Blog) -> bool {
        if let Some(term) = present(self.search.as_deref()) {
            let term = term.to_lowercase();
            let hit = contains_folded(&blog.title, &term)
                || contains_folded(&blog.excerpt, &term)
                || contains_folded(&blog.content, &term)
                || blog.tags.iter().any(|t| contains_folded(t, &term));
            if !hit {
                return false;
            }
        }

        if let Some(category) = present(self.category.as_deref()) {
            if blog.category != category {
                return false;
            }
        }

        if let Some(tag) = present(self.tag.as_deref()) {
            if !blog.has_tag(tag) {
                return false;
            }
        }

        true
    }

    /// Keep the matching posts, preserving their order.
    #[must_use]
    pub fn apply(&self, blogs: Vec<Blog>) -> Vec<Blog> {
        let total = blogs.len();
        let matched: Vec<Blog> = blogs.into_iter().filter(|b| self.matches(b)).collect();
        debug!(total, matched = matched.len(), "Applied blog filter");
        matched
    }
}

/// A category with the number of posts in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Category and tag lists for the blog sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BlogFacets {
    /// Categories in first-seen order with post counts.
    pub categories: Vec<CategoryCount>,
    /// Distinct tags in first-seen order.
    pub tags: Vec<String>,
}

impl BlogFacets {
    /// Collect categories and tags from a set of posts.
    #[must_use]
    pub fn from_blogs(blogs: &[Blog]) -> Self {
        let categories = first_seen(blogs.iter().map(|b| b.category.clone()))
            .into_iter()
            .map(|name| CategoryCount {
                count: blogs.iter().filter(|b| b.category == name).count(),
                name,
            })
            .collect();
        let tags = first_seen(blogs.iter().flat_map(|b| b.tags.iter().cloned()));
        Self { categories, tags }
    }

    /// Category names only.
    #[must_use]
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::blog::tests::sample_blog;

    fn create_test_blogs() -> Vec<Blog> {
        let mut upsc = sample_blog("1", "How to Prepare for UPSC", "Exam Preparation");
        upsc.tags = vec!["UPSC".into(), "IAS".into()];

        let mut bank = sample_blog("2", "Banking Recruitment Trends", "Banking Jobs");
        bank.excerpt = "What changes in SBI and IBPS hiring".to_string();
        bank.tags = vec!["Banking".into(), "SBI".into()];

        let mut balance = sample_blog("3", "Work-Life Balance", "Career Advice");
        balance.content = "Teaching jobs offer long vacations.".to_string();
        balance.tags = vec!["Government Jobs".into(), "IAS".into()];

        let mut timetable = sample_blog("4", "Daily Timetable", "Exam Preparation");
        timetable.tags = vec!["UPSC".into(), "Study Plan".into()];

        vec![upsc, bank, balance, timetable]
    }

    fn ids(blogs: &[Blog]) -> Vec<&str> {
        blogs.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let blogs = create_test_blogs();
        assert_eq!(BlogFilter::new().apply(blogs.clone()).len(), blogs.len());
    }

    #[test]
    fn test_search_fields() {
        let blogs = create_test_blogs();
        assert_eq!(ids(&BlogFilter::new().with_search("prepare").apply(blogs.clone())), vec!["1"]);
        assert_eq!(ids(&BlogFilter::new().with_search("ibps").apply(blogs.clone())), vec!["2"]);
        assert_eq!(
            ids(&BlogFilter::new().with_search("vacations").apply(blogs.clone())),
            vec!["3"]
        );
        assert_eq!(
            ids(&BlogFilter::new().with_search("study pl").apply(blogs)),
            vec!["4"]
        );
    }

    #[test]
    fn test_category_is_exact() {
        let blogs = create_test_blogs();
        let result = BlogFilter::new().with_category("Exam Preparation").apply(blogs.clone());
        assert_eq!(ids(&result), vec!["1", "4"]);

        let result = BlogFilter::new().with_category("exam preparation").apply(blogs);
        assert!(result.is_empty());
    }

    #[test]
    fn test_tag_filter() {
        let result = BlogFilter::new().with_tag("ias").apply(create_test_blogs());
        assert_eq!(ids(&result), vec!["1", "3"]);
    }

    #[test]
    fn test_search_and_category_intersect() {
        let result = BlogFilter::new()
            .with_search("upsc")
            .with_category("Exam Preparation")
            .with_tag("Study Plan")
            .apply(create_test_blogs());
        assert_eq!(ids(&result), vec!["4"]);
    }

    #[test]
    fn test_clear() {
        let mut filter = BlogFilter::new().with_search("x").with_tag("y");
        filter.clear();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_query_sync() {
        let filter = BlogFilter::from_query("?tag=Exam%20Tips&category=&ref=home");
        assert_eq!(filter.tag.as_deref(), Some("Exam Tips"));
        assert!(filter.category.is_none());
        assert_eq!(filter.to_query(), "tag=Exam+Tips");
        assert_eq!(BlogFilter::from_query(&filter.to_query()), filter);
    }

    #[test]
    fn test_blank_query_value_keeps_earlier_one() {
        let filter = BlogFilter::from_query("search=upsc&search=&tag=IAS&tag=%20");
        assert_eq!(filter.search.as_deref(), Some("upsc"));
        assert_eq!(filter.tag.as_deref(), Some("IAS"));
    }

    #[test]
    fn test_blank_fields_set_directly_are_absent() {
        let filter = BlogFilter {
            search: Some(" ".to_string()),
            category: Some(String::new()),
            tag: None,
        };
        assert!(filter.is_empty());
        assert_eq!(filter.to_query(), "");
        assert_eq!(BlogFilter::from_query(&filter.to_query()), filter);
        assert_eq!(filter.apply(create_test_blogs()).len(), 4);
    }

    #[test]
    fn test_facets() {
        let facets = BlogFacets::from_blogs(&create_test_blogs());
        assert_eq!(
            facets.category_names(),
            vec!["Exam Preparation", "Banking Jobs", "Career Advice"]
        );
        assert_eq!(facets.categories[0].count, 2);
        assert_eq!(
            facets.tags,
            vec!["UPSC", "IAS", "Banking", "SBI", "Government Jobs", "Study Plan"]
        );
    }
}
