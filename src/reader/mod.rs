//! Readers turning markdown files into [`Document`]s

pub mod reader_dir;
pub mod registry;

use crate::{
    document::{
        Document,
        markdown_meta::parse_markdown_meta,
        parser::{ResultSplit, split_header},
    },
    error::Error,
    metadata::{load_yaml_metadata, normalize},
    render::{MarkdownRenderer, Renderer},
    settings::Settings,
};
use std::{fs::File, io::Read, path::Path};

#[cfg(feature = "tracing")]
use crate::metadata::display_source;

/// Reads documents of some file formats
pub trait Reader: Send + Sync {
    /// Extensions (without the dot) this reader handles
    fn file_extensions(&self) -> &[String];

    /// Read and parse the file at `path`
    ///
    /// # Errors
    /// - [`Error::Io`] for filesystem errors
    /// - [`Error::FromUtf8`] if the file is not UTF-8
    /// - [`Error::Date`] if a date field can't be parsed
    fn read(&self, path: &Path) -> Result<Document, Error>;
}

/// Reader for markdown files with a YAML metadata header
///
/// Files starting with a `---` line and a closing `---` or `...` line have their header
/// parsed as YAML. Other files fall back to `Key: value` metadata lines.
///
/// # Example
/// ```
/// use yaml_metadata_reader::prelude::*;
///
/// let reader = YamlMetadataReader::new(Settings::default());
/// let text = "---\ntitle: Hello\ntags: [rust, yaml]\n---\nSome *text*";
///
/// let document = reader.read_string(text, None::<&str>).unwrap();
///
/// assert_eq!(document.content(), "<p>Some <em>text</em></p>\n");
/// assert_eq!(document.get("tags").and_then(MetadataValue::as_tags).map(<[_]>::len), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct YamlMetadataReader {
    settings: Settings,
}

impl YamlMetadataReader {
    /// Create new [`YamlMetadataReader`]
    #[must_use]
    pub const fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Get settings
    #[inline]
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Parses a document from a string with a fresh [`MarkdownRenderer`]
    ///
    /// # Errors
    /// - [`Error::Date`] if a date field can't be parsed
    pub fn read_string(
        &self,
        raw_text: impl AsRef<str>,
        path: Option<impl AsRef<Path>>,
    ) -> Result<Document, Error> {
        let mut renderer = MarkdownRenderer::new(self.settings.get_markdown());
        self.read_string_with(raw_text, path, &mut renderer)
    }

    /// Parses a document from a string with the given renderer
    ///
    /// # Errors
    /// - [`Error::Date`] if a date field can't be parsed
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn read_string_with<R>(
        &self,
        raw_text: impl AsRef<str>,
        path: Option<impl AsRef<Path>>,
        renderer: &mut R,
    ) -> Result<Document, Error>
    where
        R: Renderer,
    {
        let raw_text = raw_text.as_ref();
        let path_buf = path.map(|x| x.as_ref().to_path_buf());
        let source = path_buf.as_deref();

        let (content, metadata) = match split_header(raw_text) {
            ResultSplit::WithHeader { metadata, content } => {
                #[cfg(feature = "tracing")]
                tracing::trace!("YAML header detected, parsing metadata");

                let content = renderer.render(content);
                let metadata = load_yaml_metadata(metadata, &self.settings, renderer, source)?;

                (content, metadata)
            }
            ResultSplit::WithoutHeader => {
                #[cfg(feature = "tracing")]
                tracing::info!(
                    "No YAML metadata header found in '{}' - falling back to Markdown metadata parsing.",
                    display_source(source)
                );

                let fallback = parse_markdown_meta(raw_text);
                let content = renderer.render(fallback.content);
                let metadata = normalize(fallback.metadata, &self.settings, renderer, source)?;

                (content, metadata)
            }
        };

        Ok(Document::new(content, metadata, path_buf))
    }

    /// Parses a document from a reader
    ///
    /// # Errors
    /// - [`Error::Io`] for read errors
    /// - [`Error::FromUtf8`] if the data is not UTF-8
    /// - [`Error::Date`] if a date field can't be parsed
    pub fn read_from(
        &self,
        read: &mut impl Read,
        path: Option<impl AsRef<Path>>,
    ) -> Result<Document, Error> {
        #[cfg(feature = "tracing")]
        tracing::trace!("Read document from reader");

        let mut data = Vec::new();
        read.read_to_end(&mut data)?;

        let text = String::from_utf8(data)?;
        self.read_string(text, path)
    }
}

impl Reader for YamlMetadataReader {
    fn file_extensions(&self) -> &[String] {
        self.settings.get_file_extensions()
    }

    fn read(&self, path: &Path) -> Result<Document, Error> {
        #[cfg(feature = "tracing")]
        tracing::trace!("Read document from file: {}", path.display());

        let mut file = File::open(path)?;
        self.read_from(&mut file, Some(path))
    }
}
