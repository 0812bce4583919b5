//! All prelude

pub use crate::document::Document;
pub use crate::error::Error;
pub use crate::metadata::{
    Author, Category, Date, Metadata, MetadataValue, Tag, load_yaml_metadata, normalize,
};
pub use crate::reader::reader_dir::read_dir;
pub use crate::reader::registry::{Readers, register};
pub use crate::reader::{Reader, YamlMetadataReader};
pub use crate::render::{MarkdownRenderer, Renderer};
pub use crate::settings::{MarkdownSettings, Settings};

#[cfg(feature = "rayon")]
pub use crate::reader::reader_dir::par_read_dir;
