//! Blog post records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An editorial article with a markdown body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: String,
    pub title: String,
    /// URL-safe form of the title, unique across the catalog.
    pub slug: String,
    pub excerpt: String,
    /// Markdown source.
    pub content: String,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
    pub cover_image: String,
    pub published_date: NaiveDate,
    /// Estimated reading time in minutes.
    pub read_time: u32,
}

impl Blog {
    /// The first `n` tags, as shown on listing cards.
    #[must_use]
    pub fn tag_preview(&self, n: usize) -> &[String] {
        &self.tags[..n.min(self.tags.len())]
    }

    /// Whether any tag equals `tag`, ignoring case.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim().to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }

    /// Detail page path.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/blogs/{}", self.id)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::job::tests::date;

    pub(crate) fn sample_blog(id: &str, title: &str, category: &str) -> Blog {
        Blog {
            id: id.to_string(),
            title: title.to_string(),
            slug: format!("post-{id}"),
            excerpt: "A short summary.".to_string(),
            content: "# Heading\n\nBody text.".to_string(),
            author: "Rajesh Kumar".to_string(),
            category: category.to_string(),
            tags: vec!["UPSC".to_string(), "Exam Tips".to_string()],
            cover_image: "https://images.example.com/cover.jpg".to_string(),
            published_date: date("2025-01-15"),
            read_time: 5,
        }
    }

    #[test]
    fn test_tag_preview() {
        let mut blog = sample_blog("1", "Guide", "Exam Guide");
        blog.tags = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        assert_eq!(blog.tag_preview(3).len(), 3);
        assert_eq!(blog.tag_preview(10).len(), 4);
    }

    #[test]
    fn test_has_tag_ignores_case() {
        let blog = sample_blog("1", "Guide", "Exam Guide");
        assert!(blog.has_tag("upsc"));
        assert!(blog.has_tag(" Exam Tips "));
        assert!(!blog.has_tag("Exam"));
    }

    #[test]
    fn test_has_tag_folds_non_ascii() {
        let mut blog = sample_blog("1", "Guide", "Exam Guide");
        blog.tags = vec!["Präsident".into(), "ÉCOLE".into()];
        assert!(blog.has_tag("PRÄSIDENT"));
        assert!(blog.has_tag("école"));
    }

    #[test]
    fn test_blog_json_shape() {
        let blog = sample_blog("3", "Guide", "Exam Guide");
        let json = serde_json::to_value(&blog).unwrap();
        assert_eq!(json["coverImage"], "https://images.example.com/cover.jpg");
        assert_eq!(json["publishedDate"], "2025-01-15");
        assert_eq!(json["readTime"], 5);
    }

    #[test]
    fn test_blog_path() {
        assert_eq!(sample_blog("4", "Guide", "Exam Guide").path(), "/blogs/4");
    }
}
