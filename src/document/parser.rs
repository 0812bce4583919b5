//! Splits a markdown document into its YAML header and body

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"\A---$(?P<metadata>.+?)^(?:---|\.\.\.)$(?P<content>.*)\z")
        .multi_line(true)
        .crlf(true)
        .dot_matches_new_line(true)
        .build()
        .unwrap()
});

/// Result of [`split_header`]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ResultSplit<'a> {
    /// Document starts with a `---` line and has a closing `---` or `...` line
    WithHeader {
        /// Raw YAML between the delimiter lines
        metadata: &'a str,

        /// Everything after the closing delimiter line
        content: &'a str,
    },

    /// No complete YAML header
    WithoutHeader,
}

impl<'a> ResultSplit<'a> {
    /// Raw YAML block, if a header was found
    #[must_use]
    pub const fn metadata(&self) -> Option<&'a str> {
        match self {
            Self::WithHeader { metadata, .. } => Some(metadata),
            Self::WithoutHeader => None,
        }
    }

    /// Body text, if a header was found
    #[must_use]
    pub const fn content(&self) -> Option<&'a str> {
        match self {
            Self::WithHeader { content, .. } => Some(content),
            Self::WithoutHeader => None,
        }
    }
}

/// Splits `raw_text` into YAML metadata and body
///
/// The whole text must match: a first line that is exactly `---`, the metadata, the first
/// line that is exactly `---` or `...`, then the body up to the end of input.
///
/// # Example
/// ```
/// use yaml_metadata_reader::document::parser::{ResultSplit, split_header};
///
/// let result = split_header("---\ntitle: Hello\n---\nBody");
/// assert_eq!(
///     result,
///     ResultSplit::WithHeader {
///         metadata: "\ntitle: Hello\n",
///         content: "\nBody",
///     }
/// );
///
/// assert_eq!(split_header("Just text"), ResultSplit::WithoutHeader);
/// ```
#[must_use]
pub fn split_header(raw_text: &str) -> ResultSplit<'_> {
    #[cfg(feature = "tracing")]
    tracing::trace!("Split YAML header");

    HEADER_REGEX
        .captures(raw_text)
        .and_then(|captures| {
            Some(ResultSplit::WithHeader {
                metadata: captures.name("metadata")?.as_str(),
                content: captures.name("content")?.as_str(),
            })
        })
        .unwrap_or(ResultSplit::WithoutHeader)
}

#[cfg(test)]
mod tests {
    use super::{ResultSplit, split_header};

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn split_without_header() {
        assert_eq!(split_header("test_data"), ResultSplit::WithoutHeader);
        assert_eq!(split_header(""), ResultSplit::WithoutHeader);
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn split_with_header() {
        let result = split_header("---\ntitle: data\n---\ntest data");

        assert_eq!(
            result,
            ResultSplit::WithHeader {
                metadata: "\ntitle: data\n",
                content: "\ntest data",
            }
        );
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn split_with_dots_closer() {
        let result = split_header("---\ntitle: data\n...\nbody");

        assert_eq!(result.metadata(), Some("\ntitle: data\n"));
        assert_eq!(result.content(), Some("\nbody"));
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn split_stops_at_first_closer() {
        let result = split_header("---\na: 1\n---\nbody\n---\nmore body");

        assert_eq!(result.metadata(), Some("\na: 1\n"));
        assert_eq!(result.content(), Some("\nbody\n---\nmore body"));
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn split_with_crlf() {
        let result = split_header("---\r\ntitle: data\r\n---\r\nbody");

        assert_eq!(result.metadata(), Some("\r\ntitle: data\r\n"));
        assert_eq!(result.content(), Some("\r\nbody"));
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn split_empty_header() {
        let result = split_header("---\n---\nbody");

        assert_eq!(result.metadata(), Some("\n"));
        assert_eq!(result.content(), Some("\nbody"));
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn split_without_closer() {
        assert_eq!(
            split_header("---\ntitle: data\ntest data"),
            ResultSplit::WithoutHeader
        );
        assert_eq!(split_header("---\n"), ResultSplit::WithoutHeader);
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn split_delimiter_must_be_whole_line() {
        assert_eq!(split_header("---title: data\n---\n"), ResultSplit::WithoutHeader);
        assert_eq!(split_header("  ---\ntitle: data\n---\n"), ResultSplit::WithoutHeader);
        assert_eq!(
            split_header("---\ntitle: data\n----\nbody"),
            ResultSplit::WithoutHeader
        );
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn split_header_not_at_start() {
        assert_eq!(
            split_header("intro\n---\ntitle: data\n---\nbody"),
            ResultSplit::WithoutHeader
        );
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn split_rejoin_reconstructs_text() {
        let text = "---\ntitle: data\ntags: [a, b]\n---\n# Heading\n\nBody text\n";
        let result = split_header(text);

        let (Some(metadata), Some(content)) = (result.metadata(), result.content()) else {
            panic!("header not found");
        };

        assert_eq!(format!("---{metadata}---{content}"), text);
    }
}
