//! Fallback for documents without a YAML header: `Key: value` lines at the top
//!
//! ```text
//! Title: My post
//! Tags: rust, yaml
//! Summary: First line
//!     continued here
//!
//! Body starts after the first blank line.
//! ```

use regex::{Regex, RegexBuilder};
use serde_yml::{Mapping, Value};
use std::sync::LazyLock;

static META_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^[ ]{0,3}(?P<key>[A-Za-z0-9_-]+):\s*(?P<value>.*)$")
        .build()
        .unwrap()
});

static META_MORE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| RegexBuilder::new(r"^[ ]{4,}(?P<value>.*)$").build().unwrap());

static BEGIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| RegexBuilder::new(r"^-{3}(\s.*)?$").build().unwrap());

static END_REGEX: LazyLock<Regex> =
    LazyLock::new(|| RegexBuilder::new(r"^(-{3}|\.{3})(\s.*)?$").build().unwrap());

/// Result of [`parse_markdown_meta`]
#[derive(Debug, Default, PartialEq, Clone)]
pub struct ResultMeta<'a> {
    /// Collected fields, names lowercased
    pub metadata: Mapping,

    /// Text after the metadata lines
    pub content: &'a str,
}

/// Splits leading `Key: value` lines from `raw_text`
///
/// Lines indented by four or more spaces continue the previous field, a repeated key adds
/// another value. The block ends at the first blank line, `---`/`...` line, or line that
/// doesn't look like metadata. `tags` are split on commas and `authors` on semicolons (or
/// commas when there are none).
///
/// If no field is found the text is returned unchanged.
///
/// # Example
/// ```
/// use yaml_metadata_reader::document::markdown_meta::parse_markdown_meta;
///
/// let result = parse_markdown_meta("Title: Hello\nTags: a, b\n\nBody");
///
/// assert_eq!(result.content, "Body");
/// assert_eq!(result.metadata["title"], "Hello");
/// assert_eq!(result.metadata["tags"][1], "b");
/// ```
#[must_use]
pub fn parse_markdown_meta(raw_text: &str) -> ResultMeta<'_> {
    let mut fields: Vec<(String, Vec<String>)> = Vec::new();
    let mut current: Option<usize> = None;
    let mut offset = 0;

    let mut lines = raw_text.split_inclusive('\n').peekable();

    if let Some(first) = lines.peek() {
        if BEGIN_REGEX.is_match(trim_newline(first)) {
            offset += first.len();
            lines.next();
        }
    }

    for line in lines {
        let trimmed = trim_newline(line);

        if trimmed.trim().is_empty() || END_REGEX.is_match(trimmed) {
            offset += line.len();
            break;
        }

        if let Some(captures) = META_REGEX.captures(trimmed) {
            let key = captures["key"].to_lowercase();
            let value = captures["value"].trim().to_string();

            let index = match fields.iter().position(|(name, _)| *name == key) {
                Some(index) => index,
                None => {
                    fields.push((key, Vec::new()));
                    fields.len() - 1
                }
            };

            fields[index].1.push(value);
            current = Some(index);
        } else if let (Some(captures), Some(index)) = (META_MORE_REGEX.captures(trimmed), current)
        {
            fields[index].1.push(captures["value"].trim().to_string());
        } else {
            break;
        }

        offset += line.len();
    }

    if fields.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::trace!("No markdown metadata found");

        return ResultMeta {
            metadata: Mapping::new(),
            content: raw_text,
        };
    }

    let metadata = fields
        .into_iter()
        .map(|(key, values)| {
            let value = to_value(&key, values);
            (Value::String(key), value)
        })
        .collect();

    ResultMeta {
        metadata,
        content: &raw_text[offset..],
    }
}

fn trim_newline(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

fn split_list(values: &[String], separator: char) -> Value {
    Value::Sequence(
        values
            .iter()
            .flat_map(|value| value.split(separator))
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| Value::String(item.to_string()))
            .collect(),
    )
}

fn to_value(key: &str, mut values: Vec<String>) -> Value {
    match key {
        "tags" => split_list(&values, ','),
        "authors" if values.iter().any(|value| value.contains(';')) => split_list(&values, ';'),
        "authors" => split_list(&values, ','),
        _ if values.len() == 1 => Value::String(values.remove(0)),
        _ => Value::Sequence(values.into_iter().map(Value::String).collect()),
    }
}
