//! Owned listing types.

use std::ffi::{OsStr, OsString};
use std::ops::Index;
use std::path::{Path, PathBuf};
use std::slice;

use crate::sorting::SortPolicy;

/// One name returned by directory enumeration. No metadata beyond the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectoryEntry {
    name: OsString,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<OsString>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Name as text, with invalid UTF-8 replaced.
    pub fn to_string_lossy(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }

    /// Whether this is the "." or ".." pseudo-entry.
    pub fn is_dot_entry(&self) -> bool {
        self.name == "." || self.name == ".."
    }

    pub fn into_name(self) -> OsString {
        self.name
    }
}

/// A sorted, immutable sequence of entry names, owned by whoever listed it.
///
/// Not `Clone`. Dropping it (or calling [`DirectoryListing::release`]) frees every
/// entry.
#[derive(Debug)]
pub struct DirectoryListing {
    path: PathBuf,
    policy: SortPolicy,
    entries: Box<[DirectoryEntry]>,
}

impl DirectoryListing {
    pub(crate) fn new(path: PathBuf, policy: SortPolicy, entries: Vec<DirectoryEntry>) -> Self {
        Self {
            path,
            policy,
            entries: entries.into_boxed_slice(),
        }
    }

    /// The directory this listing was read from, as given by the caller.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> SortPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DirectoryEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> slice::Iter<'_, DirectoryEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &OsStr> + '_ {
        self.entries.iter().map(DirectoryEntry::name)
    }

    /// Frees the listing. Consumes it, so nothing can touch it afterwards.
    pub fn release(self) {
        log::trace!("release: path={}, entries={}", self.path.display(), self.entries.len());
    }
}

impl Index<usize> for DirectoryListing {
    type Output = DirectoryEntry;

    fn index(&self, index: usize) -> &DirectoryEntry {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a DirectoryListing {
    type Item = &'a DirectoryEntry;
    type IntoIter = slice::Iter<'a, DirectoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for DirectoryListing {
    type Item = DirectoryEntry;
    type IntoIter = std::vec::IntoIter<DirectoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_vec().into_iter()
    }
}
