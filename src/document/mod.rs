//! A markdown document read from a content source

pub mod markdown_meta;
pub mod parser;

use crate::metadata::{Metadata, MetadataValue};
use std::path::{Path, PathBuf};

/// Rendered body and normalized metadata of one document
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Document {
    /// HTML body (without the metadata header)
    content: String,

    /// Normalized metadata
    metadata: Metadata,

    /// Source file path (if loaded from disk)
    path: Option<PathBuf>,
}

impl Document {
    /// Create new [`Document`]
    #[must_use]
    pub const fn new(content: String, metadata: Metadata, path: Option<PathBuf>) -> Self {
        Self {
            content,
            metadata,
            path,
        }
    }

    /// Rendered HTML body
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Normalized metadata
    #[inline]
    #[must_use]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Source path, [`None`] for documents read from memory
    #[inline]
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Get a metadata field by lowercase name
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MetadataValue> {
        self.metadata.get(name)
    }

    /// Split into `(content, metadata)`
    #[must_use]
    pub fn into_parts(self) -> (String, Metadata) {
        (self.content, self.metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn accessors() {
        let mut metadata = Metadata::new();
        metadata.insert("slug".to_string(), MetadataValue::Text("post".to_string()));

        let document = Document::new(
            "<p>Body</p>\n".to_string(),
            metadata.clone(),
            Some(PathBuf::from("content/post.md")),
        );

        assert_eq!(document.content(), "<p>Body</p>\n");
        assert_eq!(document.path(), Some(Path::new("content/post.md")));
        assert_eq!(document.get("slug").and_then(MetadataValue::as_text), Some("post"));
        assert_eq!(document.get("title"), None);
        assert_eq!(document.into_parts(), ("<p>Body</p>\n".to_string(), metadata));
    }
}
