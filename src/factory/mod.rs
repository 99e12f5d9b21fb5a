//! Post factories keyed by file extension
//!
//! Every supported source format registers one [`PostFactory`] in a
//! [`FactoryRegistry`] when the process starts. Files are then dispatched to
//! the factory matching their extension.

use std::collections::HashMap;
use std::path::Path;

use crate::config::BuilderConfig;
use crate::content::{FrontMatterPostBuilder, Post, MARKDOWN_EXTENSION};
use crate::error::{PostError, Result};

/// Builds posts from files of one extension
pub trait PostFactory: Send + Sync {
    /// Extension handled by this factory, including the leading dot
    fn extension(&self) -> &str;

    /// Build a post from the given file
    fn create(&self, path: &Path) -> Result<Post>;
}

/// Factory for Markdown files with YAML front-matter
#[derive(Debug, Clone, Default)]
pub struct MarkdownPostFactory {
    builder: FrontMatterPostBuilder,
}

impl MarkdownPostFactory {
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            builder: FrontMatterPostBuilder::new(config),
        }
    }
}

impl PostFactory for MarkdownPostFactory {
    fn extension(&self) -> &str {
        MARKDOWN_EXTENSION
    }

    fn create(&self, path: &Path) -> Result<Post> {
        self.builder.build(path)
    }
}

/// Registry mapping extensions to factories
#[derive(Default)]
pub struct FactoryRegistry {
    factories: HashMap<String, Box<dyn PostFactory>>,
}

impl FactoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in factory
    pub fn with_defaults(config: BuilderConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(MarkdownPostFactory::new(config)));
        registry
    }

    /// Register a factory, replacing any previous one for the same extension
    pub fn register(&mut self, factory: Box<dyn PostFactory>) {
        let extension = factory.extension().to_string();
        if self.factories.insert(extension.clone(), factory).is_some() {
            tracing::debug!("Replaced post factory for {}", extension);
        }
    }

    /// Registered extensions, sorted
    pub fn extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        extensions.sort_unstable();
        extensions
    }

    /// Factory responsible for the given file, if any
    pub fn factory_for(&self, path: &Path) -> Option<&dyn PostFactory> {
        let extension = path.extension().and_then(|e| e.to_str())?;
        self.factories
            .get(&format!(".{}", extension))
            .map(|factory| factory.as_ref())
    }

    /// Build a post with the factory matching the file extension
    pub fn create(&self, path: &Path) -> Result<Post> {
        let factory = self
            .factory_for(path)
            .ok_or_else(|| PostError::UnsupportedExtension {
                path: path.to_path_buf(),
            })?;
        tracing::debug!("Dispatching {:?} to {} factory", path, factory.extension());
        factory.create(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;

    struct TextFactory;

    impl PostFactory for TextFactory {
        fn extension(&self) -> &str {
            ".txt"
        }

        fn create(&self, path: &Path) -> Result<Post> {
            let content = fs::read_to_string(path).map_err(|source| PostError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Post::new(
                "text".to_string(),
                "text".to_string(),
                NaiveDate::default(),
                "/text".to_string(),
                content,
                Vec::new(),
            ))
        }
    }

    #[test]
    fn test_markdown_factory_extension() {
        assert_eq!(MarkdownPostFactory::default().extension(), ".md");
    }

    #[test]
    fn test_default_registry() {
        let registry = FactoryRegistry::with_defaults(BuilderConfig::default());
        assert_eq!(registry.extensions(), vec![".md"]);
        assert!(registry.factory_for(Path::new("posts/hello.md")).is_some());
        assert!(registry.factory_for(Path::new("posts/hello.txt")).is_none());
        assert!(registry.factory_for(Path::new("README")).is_none());
    }

    #[test]
    fn test_dispatch_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let md = dir.path().join("hello.md");
        let txt = dir.path().join("notes.txt");
        fs::write(&md, "---\ntitle: Hello\n---\nBody\n").unwrap();
        fs::write(&txt, "plain").unwrap();

        let mut registry = FactoryRegistry::with_defaults(BuilderConfig::default());
        registry.register(Box::new(TextFactory));
        assert_eq!(registry.extensions(), vec![".md", ".txt"]);

        let post = registry.create(&md).unwrap();
        assert_eq!(post.title(), "Hello");
        assert_eq!(post.url(), "/hello");

        let post = registry.create(&txt).unwrap();
        assert_eq!(post.content(), "plain");
    }

    #[test]
    fn test_unknown_extension() {
        let registry = FactoryRegistry::with_defaults(BuilderConfig::default());
        let err = registry.create(Path::new("image.png")).unwrap_err();
        assert!(matches!(err, PostError::UnsupportedExtension { .. }));
    }
}
