//! Extension to reader registry

use super::{Reader, YamlMetadataReader};
use crate::{document::Document, error::Error, settings::Settings};
use std::{collections::HashMap, fmt::Debug, path::Path, sync::Arc};

/// Readers keyed by lowercase file extension
#[derive(Default, Clone)]
pub struct Readers {
    reader_classes: HashMap<String, Arc<dyn Reader>>,
}

impl Debug for Readers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut extensions: Vec<_> = self.extensions().collect();
        extensions.sort_unstable();

        f.debug_struct("Readers")
            .field("extensions", &extensions)
            .finish()
    }
}

impl Readers {
    /// Create empty [`Readers`]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `reader` for `extension`, returning the reader it replaces
    pub fn insert(
        &mut self,
        extension: impl AsRef<str>,
        reader: Arc<dyn Reader>,
    ) -> Option<Arc<dyn Reader>> {
        self.reader_classes
            .insert(extension.as_ref().to_lowercase(), reader)
    }

    /// Get reader for `extension`
    #[must_use]
    pub fn get(&self, extension: &str) -> Option<&Arc<dyn Reader>> {
        self.reader_classes.get(&extension.to_lowercase())
    }

    /// Get reader for the extension of `path`
    #[must_use]
    pub fn reader_for(&self, path: &Path) -> Option<&Arc<dyn Reader>> {
        path.extension()
            .and_then(|extension| extension.to_str())
            .and_then(|extension| self.get(extension))
    }

    /// Registered extensions
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.reader_classes.keys().map(String::as_str)
    }

    /// Read `path` with the reader registered for its extension
    ///
    /// # Errors
    /// - [`Error::UnsupportedExtension`] if no reader handles the extension
    /// - any error of [`Reader::read`]
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<Document, Error> {
        let path = path.as_ref();

        self.reader_for(path)
            .ok_or_else(|| Error::UnsupportedExtension(path.to_path_buf()))?
            .read(path)
    }
}

/// Installs a [`YamlMetadataReader`] for every extension in `settings`
///
/// Readers already registered for those extensions are replaced.
pub fn register(readers: &mut Readers, settings: &Settings) {
    let reader: Arc<dyn Reader> = Arc::new(YamlMetadataReader::new(settings.clone()));

    for extension in reader.file_extensions() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Register YAML metadata reader for `.{extension}`");

        readers.insert(extension, Arc::clone(&reader));
    }
}
