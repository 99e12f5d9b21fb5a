//! Configuration module

mod builder;

pub use builder::BuilderConfig;
pub use builder::MarkdownConfig;
pub use builder::PostDefaults;
pub use builder::UrlConfig;
pub use builder::UrlStyle;
pub use builder::{DEFAULT_SUMMARY, DEFAULT_TITLE};
