//! `yaml-metadata-reader` - Markdown reader with YAML front-matter for static site generators
//!
//! Reads markdown documents whose metadata lives in a YAML header:
//!
//! ```text
//! ---
//! title: My post
//! date: 2024-05-01 10:00
//! author: [Jane, Bob]
//! tags: [rust, yaml]
//! summary: A *short* summary
//! ---
//! Body in **markdown**
//! ```
//!
//! The header is split off, parsed as YAML and normalized:
//! - field names are lowercased;
//! - formatted fields (like `summary`) are rendered from markdown to HTML;
//! - `tags`, `category`, `author` and `authors` become [`Tag`], [`Category`] and [`Author`];
//! - `date` and `modified` are parsed to [`Date`];
//! - blank `slug`, `save_as`, `status`, `category` and `author` are dropped;
//! - a list given for a single-valued field keeps its first item;
//! - several `author`s become `authors`.
//!
//! A broken header never fails the document, it is logged and the document gets empty
//! metadata. An unparseable date does fail the document.
//!
//! ## Example
//! ```
//! use yaml_metadata_reader::prelude::*;
//!
//! let reader = YamlMetadataReader::new(Settings::default());
//! let text = "---\nTitle: Hello\nauthor: [Jane, Bob]\ndate: 2024-05-01\n---\nBody";
//!
//! let document = reader.read_string(text, None::<&str>).unwrap();
//!
//! assert_eq!(document.content(), "<p>Body</p>\n");
//! assert!(document.get("title").is_some());
//! assert_eq!(document.get("authors").and_then(MetadataValue::as_authors).map(<[_]>::len), Some(2));
//! assert!(document.get("date").and_then(MetadataValue::as_date).is_some());
//! ```
//!
//! ## Content directories
//! ```no_run
//! use yaml_metadata_reader::prelude::*;
//!
//! let mut readers = Readers::new();
//! register(&mut readers, &Settings::default());
//!
//! for (path, document) in read_dir(&readers, "content").unwrap() {
//!     match document {
//!         Ok(document) => println!("{}: {} fields", path.display(), document.metadata().len()),
//!         Err(error) => eprintln!("{}: {error}", path.display()),
//!     }
//! }
//! ```
//!
//! Enable the `rayon` feature for `par_read_dir`. Diagnostics go through [`tracing`] when the
//! `tracing` feature is enabled (default).
//!
//! [`Tag`]: metadata::Tag
//! [`Category`]: metadata::Category
//! [`Author`]: metadata::Author
//! [`Date`]: metadata::Date
//! [`tracing`]: https://docs.rs/tracing

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![warn(clippy::nursery)]
#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::panic)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::as_conversions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod document;
pub mod error;
pub mod metadata;
pub mod prelude;
pub mod reader;
pub mod render;
pub mod settings;

pub use error::Error;

#[cfg(test)]
pub(crate) mod test_utils;
