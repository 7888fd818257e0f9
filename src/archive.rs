//! Read-only access to the entry list of an archive.
//!
//! The validator only needs entry names, so archives are abstracted behind
//! two small traits. [`ZipOpener`] is the production implementation; tests
//! plug in their own to observe handle lifetimes.
//!
//! An open archive is released when the value returned by
//! [`ArchiveOpener::open`] is dropped.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::{debug, warn};
use zip::ZipArchive;

use crate::error::{DdpError, Result};

/// An opened archive whose entries can be listed by index.
pub trait EntryListing {
    /// Number of entries, including directories.
    fn len(&self) -> usize;

    /// Returns true if the archive has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full in-archive path of the entry at `index`.
    fn entry_name(&mut self, index: usize) -> Result<String>;
}

/// Opens archives from the filesystem.
pub trait ArchiveOpener {
    /// Handle type; dropping it closes the archive.
    type Archive: EntryListing;

    /// Opens the archive at `path`.
    ///
    /// Any failure, including a missing file, means the archive cannot be read.
    fn open(&self, path: &Path) -> Result<Self::Archive>;
}

impl<O: ArchiveOpener + ?Sized> ArchiveOpener for &O {
    type Archive = O::Archive;

    fn open(&self, path: &Path) -> Result<Self::Archive> {
        (**self).open(path)
    }
}

/// Opens zip containers with the `zip` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipOpener;

/// An open zip container.
#[derive(Debug)]
pub struct ZipEntries {
    inner: ZipArchive<BufReader<File>>,
}

impl ArchiveOpener for ZipOpener {
    type Archive = ZipEntries;

    fn open(&self, path: &Path) -> Result<ZipEntries> {
        let file = File::open(path)?;
        let inner = ZipArchive::new(BufReader::new(file)).map_err(|e| DdpError::bad_archive(e, path))?;
        debug!(path = %path.display(), entries = inner.len(), "opened archive");
        Ok(ZipEntries { inner })
    }
}

impl EntryListing for ZipEntries {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn entry_name(&mut self, index: usize) -> Result<String> {
        let entry = self.inner.by_index_raw(index).map_err(|e| DdpError::entry(index, e))?;
        Ok(entry.name().to_string())
    }
}

/// Lists every readable entry name. Unreadable entries are logged and skipped.
pub fn list_entries<A: EntryListing + ?Sized>(archive: &mut A) -> Vec<String> {
    let mut names = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        match archive.entry_name(index) {
            Ok(name) => names.push(name),
            Err(e) => warn!(index, error = %e, "skipping unreadable entry"),
        }
    }
    names
}

/// Final component of an in-archive path. Both `/` and `\` separate components.
///
/// ```rust
/// use ddpack::archive::entry_file_name;
///
/// assert_eq!(entry_file_name("Takeout/My Activity/Search/My Activity.json"), "My Activity.json");
/// assert_eq!(entry_file_name("inbox\\chat\\message_1.html"), "message_1.html");
/// assert_eq!(entry_file_name("folder/"), "");
/// ```
pub fn entry_file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Extension of an entry's final component, without the dot.
///
/// Names starting with a dot and names ending in one have no extension.
pub fn entry_extension(path: &str) -> Option<&str> {
    let name = entry_file_name(path);
    match name.rfind('.') {
        Some(dot) if dot > 0 && dot + 1 < name.len() => Some(&name[dot + 1..]),
        _ => None,
    }
}
