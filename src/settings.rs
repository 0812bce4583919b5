//! Settings shared by the reader, the renderer and the value objects

use crate::error::Error;
use pulldown_cmark::Options;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, path::Path};

/// Extensions handled by [`YamlMetadataReader`] unless configured otherwise
///
/// [`YamlMetadataReader`]: crate::reader::YamlMetadataReader
pub const DEFAULT_FILE_EXTENSIONS: &[&str] = &["md", "markdown", "mkd", "mdown"];

/// Fields rendered from markdown unless configured otherwise
pub const DEFAULT_FORMATTED_FIELDS: &[&str] = &["summary"];

/// Markdown extensions passed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct MarkdownSettings {
    /// GitHub-style tables
    pub tables: bool,

    /// Footnote references and definitions
    pub footnotes: bool,

    /// `~~strikethrough~~`
    pub strikethrough: bool,

    /// `- [x]` task lists
    pub tasklists: bool,

    /// Curly quotes, dashes and ellipses
    pub smart_punctuation: bool,
}

impl Default for MarkdownSettings {
    fn default() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: false,
            tasklists: false,
            smart_punctuation: false,
        }
    }
}

impl MarkdownSettings {
    /// Convert to [`pulldown_cmark::Options`]
    #[must_use]
    pub fn options(&self) -> Options {
        let mut options = Options::empty();

        options.set(Options::ENABLE_TABLES, self.tables);
        options.set(Options::ENABLE_FOOTNOTES, self.footnotes);
        options.set(Options::ENABLE_STRIKETHROUGH, self.strikethrough);
        options.set(Options::ENABLE_TASKLISTS, self.tasklists);
        options.set(Options::ENABLE_SMART_PUNCTUATION, self.smart_punctuation);

        options
    }
}

/// Settings context for reading documents
///
/// Read-only once a reader is constructed. Can be loaded from YAML:
///
/// ```
/// use yaml_metadata_reader::settings::Settings;
///
/// let settings = Settings::from_yaml("formatted_fields: [Summary, Abstract]").unwrap();
///
/// assert!(settings.is_formatted_field("summary"));
/// assert!(settings.is_formatted_field("abstract"));
/// assert!(!settings.is_formatted_field("title"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Lowercase names of fields rendered as markdown
    #[serde(deserialize_with = "deserialize_lowercase_set")]
    formatted_fields: BTreeSet<String>,

    /// Options for the markdown renderer
    markdown: MarkdownSettings,

    /// Extensions the reader registers for
    file_extensions: Vec<String>,

    /// Keep the case of names when building slugs
    slugify_preserve_case: bool,
}

fn deserialize_lowercase_set<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let fields = Vec::<String>::deserialize(deserializer)?;
    Ok(fields.iter().map(|field| field.to_lowercase()).collect())
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            formatted_fields: DEFAULT_FORMATTED_FIELDS
                .iter()
                .map(ToString::to_string)
                .collect(),
            markdown: MarkdownSettings::default(),
            file_extensions: DEFAULT_FILE_EXTENSIONS
                .iter()
                .map(ToString::to_string)
                .collect(),
            slugify_preserve_case: false,
        }
    }
}

macro_rules! impl_setter {
    ($name:ident, $t:ty) => {
        #[must_use]
        #[allow(missing_docs)]
        pub const fn $name(mut self, $name: $t) -> Self {
            self.$name = $name;
            self
        }
    };
}

impl Settings {
    /// Parse settings from YAML text, missing keys take their defaults
    ///
    /// # Errors
    /// - [`Error::Settings`] for invalid YAML or unknown value types
    pub fn from_yaml(text: &str) -> Result<Self, Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(serde_yml::from_str(text)?)
    }

    /// Read settings from a YAML file
    ///
    /// # Errors
    /// - [`Error::Io`] if the file can't be read
    /// - [`Error::Settings`] for invalid YAML
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        #[cfg(feature = "tracing")]
        tracing::debug!("Load settings from {}", path.as_ref().display());

        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    impl_setter!(markdown, MarkdownSettings);
    impl_setter!(slugify_preserve_case, bool);

    /// Replace formatted fields
    #[must_use]
    pub fn formatted_fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.formatted_fields = fields
            .into_iter()
            .map(|field| field.as_ref().to_lowercase())
            .collect();
        self
    }

    /// Replace file extensions
    #[must_use]
    pub fn file_extensions<I>(mut self, extensions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.file_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `name` (lowercase) is rendered as markdown
    #[inline]
    #[must_use]
    pub fn is_formatted_field(&self, name: &str) -> bool {
        self.formatted_fields.contains(name)
    }

    /// Get formatted fields
    #[inline]
    #[must_use]
    pub const fn get_formatted_fields(&self) -> &BTreeSet<String> {
        &self.formatted_fields
    }

    /// Get markdown options
    #[inline]
    #[must_use]
    pub const fn get_markdown(&self) -> &MarkdownSettings {
        &self.markdown
    }

    /// Get file extensions
    #[inline]
    #[must_use]
    pub fn get_file_extensions(&self) -> &[String] {
        &self.file_extensions
    }

    /// Get slug case policy
    #[inline]
    #[must_use]
    pub const fn get_slugify_preserve_case(&self) -> bool {
        self.slugify_preserve_case
    }
}
