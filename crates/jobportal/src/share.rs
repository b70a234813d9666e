//! Social share links for detail pages.

use serde::Serialize;
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{Blog, Job};

const FACEBOOK_SHARER: &str = "https://www.facebook.com/sharer/sharer.php";
const TWITTER_INTENT: &str = "https://twitter.com/intent/tweet";
const LINKEDIN_SHARE: &str = "https://www.linkedin.com/sharing/share-offsite/";

/// Outbound share URLs for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub facebook: String,
    pub twitter: String,
    pub linkedin: String,
}

impl ShareLinks {
    /// Links sharing `page_url`, with `text` as the tweet body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Internal`] if a share endpoint fails to parse.
    pub fn for_url(page_url: &Url, text: &str) -> Result<Self> {
        let page = page_url.as_str();
        Ok(Self {
            facebook: endpoint(FACEBOOK_SHARER, &[("u", page)])?,
            twitter: endpoint(TWITTER_INTENT, &[("url", page), ("text", text)])?,
            linkedin: endpoint(LINKEDIN_SHARE, &[("url", page)])?,
        })
    }

    /// Share links for a job detail page; text reads "{title} at {department}".
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL cannot address the page.
    pub fn for_job(config: &Config, job: &Job) -> Result<Self> {
        let url = config.page_url(&job.path())?;
        Self::for_url(&url, &format!("{} at {}", job.title, job.department))
    }

    /// Share links for a blog detail page; text is the post title.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL cannot address the page.
    pub fn for_blog(config: &Config, blog: &Blog) -> Result<Self> {
        let url = config.page_url(&blog.path())?;
        Self::for_url(&url, &blog.title)
    }
}

fn endpoint(base: &str, params: &[(&str, &str)]) -> Result<String> {
    Url::parse_with_params(base, params)
        .map(String::from)
        .map_err(|e| Error::internal(format!("invalid share endpoint '{base}': {e}")))
}
