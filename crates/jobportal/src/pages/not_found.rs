//! Not-found views.

use serde::Serialize;

/// A not-found view with a single way back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundPage {
    pub heading: &'static str,
    pub message: &'static str,
    pub back_label: &'static str,
    pub back_path: &'static str,
    /// Requested path, for the generic 404 only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested: Option<String>,
}

impl NotFoundPage {
    /// Unknown job id.
    #[must_use]
    pub fn job() -> Self {
        Self {
            heading: "Job Not Found",
            message: "The job you're looking for doesn't exist or has been removed.",
            back_label: "Back to Jobs",
            back_path: "/jobs",
            requested: None,
        }
    }

    /// Unknown blog id or slug.
    #[must_use]
    pub fn blog() -> Self {
        Self {
            heading: "Blog Post Not Found",
            message: "The article you're looking for doesn't exist or has been removed.",
            back_label: "Back to Blogs",
            back_path: "/blogs",
            requested: None,
        }
    }

    /// Any path outside the route table.
    #[must_use]
    pub fn page(path: &str) -> Self {
        Self {
            heading: "Page Not Found",
            message: "The page you're looking for doesn't exist or has been moved.",
            back_label: "Back to Home",
            back_path: "/",
            requested: Some(path.to_string()),
        }
    }
}
