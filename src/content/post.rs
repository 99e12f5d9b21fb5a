//! Post model

use chrono::NaiveDate;
use serde::Serialize;

/// A blog post built from one source file
///
/// Built once and never modified afterwards. Two posts are equal when every
/// field is equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    title: String,
    summary: String,
    date: NaiveDate,
    url: String,
    content: String,
    tags: Vec<String>,
}

impl Post {
    pub fn new(
        title: String,
        summary: String,
        date: NaiveDate,
        url: String,
        content: String,
        tags: Vec<String>,
    ) -> Self {
        Self {
            title,
            summary,
            date,
            url,
            content,
            tags,
        }
    }

    /// Post title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Short summary shown in listings
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Publication date
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// URL path, always starting with `/`
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Rendered HTML content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Post tags, in source order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}
