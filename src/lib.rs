//! mdpost: builds blog post records from Markdown files
//!
//! A source file holds an optional YAML front-matter block followed by a
//! Markdown body. The front-matter supplies the post title, summary, date and
//! tags, the body is rendered to HTML and the URL is derived from the file name.

pub mod config;
pub mod content;
pub mod error;
pub mod factory;

pub use config::BuilderConfig;
pub use content::{FrontMatterPostBuilder, Post};
pub use error::{PostError, Result};
pub use factory::{FactoryRegistry, MarkdownPostFactory, PostFactory};
