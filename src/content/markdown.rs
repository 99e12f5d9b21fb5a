//! Markdown parsing and HTML rendering

use pulldown_cmark::{html, Event, MetadataBlockKind, Options, Parser, Tag, TagEnd};

use crate::config::MarkdownConfig;

/// A parsed Markdown document
///
/// Holds the full event stream of one source file, including the YAML
/// metadata block when the file starts with one.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    events: Vec<Event<'static>>,
}

impl Document {
    /// Raw text of the leading YAML metadata block, if any
    pub fn front_matter(&self) -> Option<String> {
        let mut yaml: Option<String> = None;

        for event in &self.events {
            match event {
                Event::Start(Tag::MetadataBlock(MetadataBlockKind::YamlStyle)) => {
                    yaml = Some(String::new());
                }
                Event::End(TagEnd::MetadataBlock(MetadataBlockKind::YamlStyle)) => break,
                Event::Text(text) => match yaml.as_mut() {
                    Some(buf) => buf.push_str(text),
                    // Metadata can only open the document
                    None => break,
                },
                _ => {
                    if yaml.is_none() {
                        break;
                    }
                }
            }
        }

        yaml
    }
}

/// Markdown parser and renderer
///
/// A fresh pulldown-cmark parser is built for every call, so one renderer can
/// be shared freely between threads.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a renderer for plain CommonMark with YAML front-matter
    pub fn new() -> Self {
        Self::with_options(&MarkdownConfig::default())
    }

    /// Create with the extensions enabled in the config
    pub fn with_options(config: &MarkdownConfig) -> Self {
        let mut options = Options::ENABLE_YAML_STYLE_METADATA_BLOCKS;
        if config.tables {
            options |= Options::ENABLE_TABLES;
        }
        if config.footnotes {
            options |= Options::ENABLE_FOOTNOTES;
        }
        if config.strikethrough {
            options |= Options::ENABLE_STRIKETHROUGH;
        }
        if config.tasklists {
            options |= Options::ENABLE_TASKLISTS;
        }
        if config.smart_punctuation {
            options |= Options::ENABLE_SMART_PUNCTUATION;
        }
        Self { options }
    }

    /// Parse markdown text into a document
    pub fn parse(&self, markdown: &str) -> Document {
        let events = Parser::new_ext(markdown, self.options)
            .map(Event::into_static)
            .collect();
        Document { events }
    }

    /// Render a document to HTML
    ///
    /// The metadata block is consumed by the HTML writer and never shows up
    /// in the output.
    pub fn render(&self, document: &Document) -> String {
        let mut html_output = String::new();
        html::push_html(&mut html_output, document.events.iter().cloned());
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
