//! Value objects for tags, categories and authors

use crate::settings::Settings;
use serde::Serialize;
use std::fmt::Display;

/// Builds a URL slug from `name`
///
/// Word characters are kept, runs of whitespace and hyphens become a single `-`, anything
/// else is dropped.
///
/// # Example
/// ```
/// use yaml_metadata_reader::metadata::taxonomy::slugify;
///
/// assert_eq!(slugify("Rust & C++ tips", false), "rust-c-tips");
/// assert_eq!(slugify("Don't Panic", true), "Dont-Panic");
/// ```
#[must_use]
pub fn slugify(name: &str, preserve_case: bool) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut separator = false;

    for c in name.trim().chars() {
        if c.is_alphanumeric() || c == '_' {
            if separator && !slug.is_empty() {
                slug.push('-');
            }
            separator = false;

            if preserve_case {
                slug.push(c);
            } else {
                slug.extend(c.to_lowercase());
            }
        } else if c.is_whitespace() || c == '-' {
            separator = true;
        }
    }

    slug
}

macro_rules! impl_taxonomy {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub struct $name {
            name: String,
            slug: String,
        }

        impl $name {
            #[doc = concat!("Create new [`", stringify!($name), "`]")]
            #[must_use]
            pub fn new(name: impl Into<String>, settings: &Settings) -> Self {
                let name = name.into();
                let slug = slugify(&name, settings.get_slugify_preserve_case());

                Self { name, slug }
            }

            /// Name as written in the document
            #[inline]
            #[must_use]
            pub fn name(&self) -> &str {
                &self.name
            }

            /// URL slug
            #[inline]
            #[must_use]
            pub fn slug(&self) -> &str {
                &self.slug
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.name)
            }
        }
    };
}

impl_taxonomy!(
    /// Tag of a document
    Tag
);

impl_taxonomy!(
    /// Category of a document
    Category
);

impl_taxonomy!(
    /// Author of a document
    Author
);
