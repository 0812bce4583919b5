//! Per-field normalization keyed by lowercase field name

use super::{
    MetadataValue,
    date::{self, Date},
    taxonomy::{Author, Category, Tag},
};
use crate::settings::Settings;
use serde_yml::Value;

/// Fields that keep only their first definition when given a list
pub const DUPLICATES_NOT_ALLOWED: &[&str] = &[
    "date", "modified", "status", "category", "author", "save_as", "url", "slug",
];

/// Field with a dedicated normalization rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `tags`: list of [`Tag`]
    Tags,
    /// `date`: [`Date`]
    Date,
    /// `modified`: [`Date`]
    Modified,
    /// `category`: [`Category`]
    Category,
    /// `author`: single [`Author`]
    Author,
    /// `authors`: list of [`Author`]
    Authors,
    /// `slug`: trimmed text
    Slug,
    /// `save_as`: trimmed text
    SaveAs,
    /// `status`: trimmed text
    Status,
}

impl Field {
    /// Every field with a rule
    pub const ALL: [Self; 9] = [
        Self::Tags,
        Self::Date,
        Self::Modified,
        Self::Category,
        Self::Author,
        Self::Authors,
        Self::Slug,
        Self::SaveAs,
        Self::Status,
    ];

    /// Look up the rule for a lowercase field name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tags" => Some(Self::Tags),
            "date" => Some(Self::Date),
            "modified" => Some(Self::Modified),
            "category" => Some(Self::Category),
            "author" => Some(Self::Author),
            "authors" => Some(Self::Authors),
            "slug" => Some(Self::Slug),
            "save_as" => Some(Self::SaveAs),
            "status" => Some(Self::Status),
            _ => None,
        }
    }

    /// Lowercase field name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tags => "tags",
            Self::Date => "date",
            Self::Modified => "modified",
            Self::Category => "category",
            Self::Author => "author",
            Self::Authors => "authors",
            Self::Slug => "slug",
            Self::SaveAs => "save_as",
            Self::Status => "status",
        }
    }

    /// Normalize `value`
    ///
    /// Returns `Ok(None)` when the field must be left out of the metadata.
    ///
    /// # Errors
    /// - [`date::Error`] if a `date` or `modified` value can't be parsed
    pub fn process(
        self,
        value: &Value,
        settings: &Settings,
    ) -> Result<Option<MetadataValue>, date::Error> {
        let processed = match self {
            Self::Tags => non_empty(
                to_list(value)
                    .iter()
                    .map(|tag| Tag::new(strip(tag), settings))
                    .collect(),
            )
            .map(MetadataValue::Tags),
            Self::Date | Self::Modified => Some(MetadataValue::Date(parse_date(value)?)),
            Self::Category => {
                non_blank(value).map(|name| MetadataValue::Category(Category::new(name, settings)))
            }
            Self::Author => {
                non_blank(value).map(|name| MetadataValue::Author(Author::new(name, settings)))
            }
            Self::Authors => non_empty(
                to_list(value)
                    .iter()
                    .map(|author| Author::new(strip(author), settings))
                    .collect(),
            )
            .map(MetadataValue::Authors),
            Self::Slug | Self::SaveAs | Self::Status => {
                Some(strip(value)).filter(|text| !text.is_empty()).map(MetadataValue::Text)
            }
        };

        Ok(processed)
    }
}

/// Text form of a YAML value, `null` becomes an empty string
#[must_use]
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(value) => value.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Tagged(tagged) => value_to_string(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => serde_yml::to_string(value)
            .map(|text| text.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Whether `value` counts as "not given"
#[must_use]
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(value) => !value,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Sequence(items) => items.is_empty(),
        Value::Mapping(mapping) => mapping.is_empty(),
        Value::Tagged(tagged) => is_falsy(&tagged.value),
    }
}

fn strip(value: &Value) -> String {
    value_to_string(value).trim().to_string()
}

fn to_list(value: &Value) -> &[Value] {
    match value {
        Value::Sequence(items) => items,
        other => std::slice::from_ref(other),
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    Some(items).filter(|items| !items.is_empty())
}

fn non_blank(value: &Value) -> Option<String> {
    if is_falsy(value) {
        return None;
    }

    Some(strip(value)).filter(|text| !text.is_empty())
}

fn parse_date(value: &Value) -> Result<Date, date::Error> {
    date::parse_date(&strip(value).replace('_', " "))
}
