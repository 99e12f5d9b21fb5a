//! Builds posts from Markdown files with YAML front-matter

use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::frontmatter::{extract_metadata, get_list_or_default, get_or_default};
use super::markdown::{Document, MarkdownRenderer};
use super::post::Post;
use crate::config::{BuilderConfig, UrlStyle};
use crate::error::{PostError, Result};

/// File extension handled by the builder
pub const MARKDOWN_EXTENSION: &str = ".md";

/// ISO-8601 calendar date, the only accepted front-matter date format
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Turns one Markdown source file into a [`Post`]
///
/// Holds only its configuration, so building is a pure function of the file
/// contents and name.
#[derive(Debug, Clone)]
pub struct FrontMatterPostBuilder {
    config: BuilderConfig,
    renderer: MarkdownRenderer,
}

impl FrontMatterPostBuilder {
    /// Create a new builder
    pub fn new(config: BuilderConfig) -> Self {
        let renderer = MarkdownRenderer::with_options(&config.markdown);
        Self { config, renderer }
    }

    /// Read and build a post from a file
    pub fn build(&self, path: &Path) -> Result<Post> {
        let text = {
            let file = File::open(path).map_err(|source| PostError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let mut reader = BufReader::new(file);
            let mut text = String::new();
            reader
                .read_to_string(&mut text)
                .map_err(|source| PostError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
            text
        };

        self.build_from_str(path, &text)
    }

    /// Build a post from already loaded text
    ///
    /// `path` supplies the file name for the URL and the context for errors.
    pub fn build_from_str(&self, path: &Path, text: &str) -> Result<Post> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| PostError::InvalidFileName {
                path: path.to_path_buf(),
            })?;

        let document = self.renderer.parse(text);
        let metadata = extract_metadata(&document, path)?;
        let defaults = &self.config.defaults;

        let title = get_or_default(&metadata, "title", &defaults.title);
        let summary = get_or_default(&metadata, "summary", &defaults.summary);
        let default_date = defaults.date.format(DATE_FORMAT).to_string();
        let date = to_date(&get_or_default(&metadata, "date", &default_date))?;

        if file_name.matches(MARKDOWN_EXTENSION).count() > 1 {
            tracing::warn!(
                "{:?} contains {} more than once, removing it per url style {:?}",
                file_name,
                MARKDOWN_EXTENSION,
                self.config.url.style
            );
        }
        let url = to_url(file_name, self.config.url.style);
        let content = self.render(&document);
        let tags = get_list_or_default(&metadata, "tags", &defaults.tags);

        tracing::debug!("Built post {} from {:?}", url, path);

        Ok(Post::new(title, summary, date, url, content, tags))
    }

    /// Render the document body to HTML
    pub fn render(&self, document: &Document) -> String {
        self.renderer.render(document)
    }
}

impl Default for FrontMatterPostBuilder {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}

/// Parse a strict ISO-8601 calendar date (`YYYY-MM-DD`)
pub fn to_date(value: &str) -> Result<NaiveDate> {
    let invalid = || PostError::InvalidDate {
        value: value.to_string(),
    };

    // chrono alone accepts single-digit months and days
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

/// Derive the post URL from the source file name
///
/// # Examples
/// ```ignore
/// to_url("post.md", UrlStyle::FirstOccurrence) // -> "/post"
/// to_url("a.md.backup.md", UrlStyle::FirstOccurrence) // -> "/a.backup.md"
/// to_url("a.md.backup.md", UrlStyle::StripSuffix) // -> "/a.md.backup"
/// ```
pub fn to_url(file_name: &str, style: UrlStyle) -> String {
    let stem = match style {
        UrlStyle::FirstOccurrence => file_name.replacen(MARKDOWN_EXTENSION, "", 1),
        UrlStyle::StripSuffix => file_name
            .strip_suffix(MARKDOWN_EXTENSION)
            .unwrap_or(file_name)
            .to_string(),
    };
    format!("/{}", stem)
}
