//! Content module - parses Markdown sources and builds posts

mod builder;
mod frontmatter;
mod markdown;
mod post;

pub use builder::{to_date, to_url, FrontMatterPostBuilder, MARKDOWN_EXTENSION};
pub use frontmatter::{
    extract_metadata, get_list_or_default, get_or_default, FieldValues, Metadata,
};
pub use markdown::{Document, MarkdownRenderer};
pub use post::Post;
