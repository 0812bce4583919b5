//! Reading every document of a content directory

use super::registry::Readers;
use crate::{document::Document, error::Error};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Outcome of reading one file
pub type ReadResult = (PathBuf, Result<Document, Error>);

fn is_hidden(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .file_name()
        .is_some_and(|e| e.to_str().is_some_and(|name| name.starts_with('.')))
}

fn get_files_for_read(readers: &Readers, path: &Path) -> Result<Vec<PathBuf>, Error> {
    if !path.is_dir() {
        return Err(Error::IsNotDir(path.to_path_buf()));
    }

    #[cfg(feature = "tracing")]
    tracing::trace!("Get files for read: {}", path.display());

    let files = WalkDir::new(path)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(DirEntry::into_path)
        .filter(|path| readers.reader_for(path).is_some())
        .collect();

    Ok(files)
}

/// Reads every file under `path` that has a registered reader
///
/// Hidden files and directories are skipped. A failing document doesn't stop the others,
/// its error is returned next to its path.
///
/// # Errors
/// - [`Error::IsNotDir`] if `path` is not a directory
pub fn read_dir(readers: &Readers, path: impl AsRef<Path>) -> Result<Vec<ReadResult>, Error> {
    let files = get_files_for_read(readers, path.as_ref())?;

    #[cfg(feature = "tracing")]
    tracing::debug!("Reading {} documents", files.len());

    Ok(files
        .into_iter()
        .map(|path| {
            let document = readers.read_file(&path);
            (path, document)
        })
        .collect())
}

/// Same as [`read_dir`], reading documents in parallel
///
/// # Errors
/// - [`Error::IsNotDir`] if `path` is not a directory
#[cfg_attr(docsrs, doc(cfg(feature = "rayon")))]
#[cfg(feature = "rayon")]
pub fn par_read_dir(readers: &Readers, path: impl AsRef<Path>) -> Result<Vec<ReadResult>, Error> {
    use rayon::prelude::*;

    let files = get_files_for_read(readers, path.as_ref())?;

    #[cfg(feature = "tracing")]
    tracing::debug!("Reading {} documents in parallel", files.len());

    Ok(files
        .into_par_iter()
        .map(|path| {
            let document = readers.read_file(&path);
            (path, document)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{metadata::MetadataValue, reader::registry::register, settings::Settings};
    use std::fs::{File, create_dir};
    use std::io::Write;
    use tempfile::TempDir;

    fn create_content_dir() -> std::io::Result<TempDir> {
        let dir = TempDir::new()?;
        let path = dir.path();

        create_dir(path.join("posts"))?;
        create_dir(path.join(".drafts"))?;

        let files: [(&str, &str); 6] = [
            ("first.md", "---\ntitle: First\n---\nBody"),
            ("posts/second.markdown", "---\ntitle: Second\n---\nBody"),
            ("posts/third.md", "Title: Third\n\nBody"),
            ("posts/broken.md", "---\ndate: never\n---\nBody"),
            ("notes.txt", "---\ntitle: Ignored\n---\n"),
            (".drafts/hidden.md", "---\ntitle: Hidden\n---\n"),
        ];

        for (name, text) in files {
            File::create(path.join(name))?.write_all(text.as_bytes())?;
        }

        Ok(dir)
    }

    fn check_results(mut results: Vec<ReadResult>, root: &Path) {
        results.sort_by(|a, b| a.0.cmp(&b.0));

        let paths: Vec<_> = results
            .iter()
            .map(|(path, _)| path.strip_prefix(root).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            paths,
            [
                PathBuf::from("first.md"),
                PathBuf::from("posts/broken.md"),
                PathBuf::from("posts/second.markdown"),
                PathBuf::from("posts/third.md"),
            ]
        );

        let titles: Vec<_> = results
            .iter()
            .filter_map(|(_, document)| document.as_ref().ok())
            .filter_map(|document| document.get("title").and_then(MetadataValue::as_raw))
            .filter_map(|title| title.as_str())
            .collect();
        assert_eq!(titles, ["First", "Second", "Third"]);

        assert!(matches!(results[1].1, Err(Error::Date(_))));
    }

    fn readers() -> Readers {
        let mut readers = Readers::new();
        register(&mut readers, &Settings::default());
        readers
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn read_content_dir() {
        let dir = create_content_dir().unwrap();
        let results = read_dir(&readers(), dir.path()).unwrap();

        check_results(results, dir.path());
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    #[cfg(feature = "rayon")]
    fn par_read_content_dir() {
        let dir = create_content_dir().unwrap();
        let results = par_read_dir(&readers(), dir.path()).unwrap();

        check_results(results, dir.path());
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn read_not_a_dir() {
        let dir = create_content_dir().unwrap();
        let result = read_dir(&readers(), dir.path().join("first.md"));

        assert!(matches!(result, Err(Error::IsNotDir(_))));
    }

    #[cfg_attr(feature = "tracing", tracing_test::traced_test)]
    #[test]
    fn is_hidden() {
        assert!(super::is_hidden(".test"));
        assert!(!super::is_hidden("test"));
    }
}
