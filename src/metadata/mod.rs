//! Loads a YAML header and normalizes it into document metadata
//!
//! Every field name is lowercased. Fields listed in [`Settings`] as formatted are rendered
//! from markdown, fields with a rule in [`Field`] are converted to typed values, and
//! everything else is passed through as raw YAML.
//!
//! ```
//! use yaml_metadata_reader::metadata::{MetadataValue, load_yaml_metadata};
//! use yaml_metadata_reader::render::MarkdownRenderer;
//! use yaml_metadata_reader::settings::Settings;
//!
//! let settings = Settings::default();
//! let mut renderer = MarkdownRenderer::new(settings.get_markdown());
//!
//! let text = "Title: Hello\nauthor: [Jane, Bob]\nslug: '  '\n";
//! let metadata = load_yaml_metadata(text, &settings, &mut renderer, None).unwrap();
//!
//! assert_eq!(metadata["title"].as_raw().and_then(|v| v.as_str()), Some("Hello"));
//! assert_eq!(metadata["authors"].as_authors().map(<[_]>::len), Some(2));
//! assert!(!metadata.contains_key("author"));
//! assert!(!metadata.contains_key("slug"));
//! ```

pub mod date;
pub mod processors;
pub mod taxonomy;
mod yaml;

use crate::{error::Error, render::Renderer, settings::Settings};
pub use date::Date;
pub use processors::{DUPLICATES_NOT_ALLOWED, Field};
use processors::value_to_string;
use serde::Serialize;
use serde_yml::{Mapping, Value};
use std::{collections::HashMap, path::Path};
pub use taxonomy::{Author, Category, Tag};

/// Normalized metadata: lowercase field name to value
pub type Metadata = HashMap<String, MetadataValue>;

/// Normalized value of a metadata field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// `tags`
    Tags(Vec<Tag>),

    /// `authors`, or `author` given several times
    Authors(Vec<Author>),

    /// `category`
    Category(Category),

    /// `author`
    Author(Author),

    /// `date` and `modified`
    Date(Date),

    /// Trimmed `slug`, `save_as` and `status`, or rendered HTML of a formatted field
    Text(String),

    /// Any other field, unchanged
    Raw(Value),
}

macro_rules! impl_getter {
    ($name:ident, $variant:ident, $t:ty) => {
        #[doc = concat!("Get value if it is [`MetadataValue::", stringify!($variant), "`]")]
        #[must_use]
        pub fn $name(&self) -> Option<&$t> {
            match self {
                Self::$variant(value) => Some(value),
                _ => None,
            }
        }
    };
}

impl MetadataValue {
    impl_getter!(as_tags, Tags, [Tag]);
    impl_getter!(as_authors, Authors, [Author]);
    impl_getter!(as_category, Category, Category);
    impl_getter!(as_author, Author, Author);
    impl_getter!(as_date, Date, Date);
    impl_getter!(as_text, Text, str);
    impl_getter!(as_raw, Raw, Value);
}

const AUTHOR: &str = "author";
const AUTHORS: &str = "authors";

#[cfg(feature = "tracing")]
pub(crate) fn display_source(source: Option<&Path>) -> String {
    source.map_or_else(|| "<string>".to_string(), |path| path.display().to_string())
}

/// Parses `text` as YAML and normalizes it with [`normalize`]
///
/// Invalid YAML and YAML that isn't a mapping are logged and give empty metadata. An empty
/// block gives empty metadata without a diagnostic.
///
/// # Errors
/// - [`Error::Date`] if a `date` or `modified` value can't be parsed
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn load_yaml_metadata<R>(
    text: &str,
    settings: &Settings,
    renderer: &mut R,
    source: Option<&Path>,
) -> Result<Metadata, Error>
where
    R: Renderer,
{
    if text.trim().is_empty() {
        return Ok(Metadata::new());
    }

    let mapping = match yaml::from_str(text) {
        Ok(Value::Mapping(mapping)) => mapping,
        Ok(Value::Null) => return Ok(Metadata::new()),
        Ok(value) => {
            #[cfg(feature = "tracing")]
            {
                tracing::error!(
                    "YAML header didn't parse as a mapping for file '{}'",
                    display_source(source)
                );
                tracing::debug!("YAML data: {value:?}");
            }

            return Ok(Metadata::new());
        }
        Err(error) => {
            #[cfg(feature = "tracing")]
            tracing::error!(
                "Error parsing YAML for file '{}': {error}",
                display_source(source)
            );

            return Ok(Metadata::new());
        }
    };

    normalize(mapping, settings, renderer, source)
}

/// Normalizes a parsed YAML mapping
///
/// For each field, in order:
/// 1. the name is lowercased;
/// 2. a formatted field is rendered (lists are joined with newlines first);
/// 3. otherwise a list of several `author`s is renamed to `authors`;
/// 4. otherwise a list in a field from [`DUPLICATES_NOT_ALLOWED`] keeps its first item;
/// 5. the [`Field`] rule runs, if there is one.
///
/// Fields whose rule yields nothing are left out.
///
/// # Errors
/// - [`Error::Date`] if a `date` or `modified` value can't be parsed
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn normalize<R>(
    mapping: Mapping,
    settings: &Settings,
    renderer: &mut R,
    source: Option<&Path>,
) -> Result<Metadata, Error>
where
    R: Renderer,
{
    let mut output = Metadata::with_capacity(mapping.len());

    for (key, value) in mapping {
        let Some(mut name) = key_to_name(&key) else {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                "Skipping non-scalar metadata key {key:?} in '{}'",
                display_source(source)
            );

            continue;
        };

        let formatted = settings.is_formatted_field(&name);
        let value = if formatted {
            let text = match &value {
                Value::Sequence(items) => items
                    .iter()
                    .map(value_to_string)
                    .collect::<Vec<_>>()
                    .join("\n"),
                other => value_to_string(other),
            };

            renderer.reset();
            Value::String(renderer.render(&text))
        } else {
            match value {
                Value::Sequence(items) if items.len() > 1 && name == AUTHOR => {
                    name = AUTHORS.to_string();
                    Value::Sequence(items)
                }
                Value::Sequence(items) if DUPLICATES_NOT_ALLOWED.contains(&name.as_str()) => {
                    first_definition(items, &name, source)
                }
                other => other,
            }
        };

        let processed = match Field::from_name(&name) {
            Some(field) => field.process(&value, settings)?,
            None if formatted => Some(MetadataValue::Text(value_to_string(&value))),
            None => Some(MetadataValue::Raw(value)),
        };

        if let Some(processed) = processed {
            output.insert(name, processed);
        }
    }

    Ok(output)
}

fn key_to_name(key: &Value) -> Option<String> {
    match key {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => {
            Some(value_to_string(key).to_lowercase())
        }
        Value::Tagged(tagged) => key_to_name(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn first_definition(items: Vec<Value>, name: &str, source: Option<&Path>) -> Value {
    if items.len() > 1 {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            "Duplicate definition of `{name}` for '{}' ({}). Using first one.",
            display_source(source),
            items
                .iter()
                .map(value_to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    items
        .into_iter()
        .next()
        .unwrap_or(Value::Null)
}
