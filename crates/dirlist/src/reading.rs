//! Directory enumeration.
//!
//! Pure I/O: reads names from disk, sorts them, and hands back an owned listing.

use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::ListingError;
use crate::listing::{DirectoryEntry, DirectoryListing};
use crate::sorting::SortPolicy;

/// Extra knobs on top of plain enumeration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListOptions {
    /// Report "." and ".." like `scandir` does. `read_dir` never yields them.
    pub include_dot_entries: bool,
    /// Append `/` to names of directories (symlinks followed). Applied after sorting,
    /// so the marker never affects order.
    pub mark_directories: bool,
}

/// Lists `directory` and sorts the names by `policy`.
///
/// A trailing separator on `directory` makes no difference. An empty directory gives
/// an empty listing, not an error.
pub fn list_directory(directory: &Path, policy: SortPolicy) -> Result<DirectoryListing, ListingError> {
    list_directory_with(directory, policy, ListOptions::default())
}

/// Like [`list_directory`], with [`ListOptions`].
pub fn list_directory_with(
    directory: &Path,
    policy: SortPolicy,
    options: ListOptions,
) -> Result<DirectoryListing, ListingError> {
    let start = Instant::now();
    let fail = |e| ListingError::from_io(directory, e);

    let mut names: Vec<(OsString, bool)> = Vec::new();
    if options.include_dot_entries {
        names.push((OsString::from("."), true));
        names.push((OsString::from(".."), true));
    }

    for entry in fs::read_dir(directory).map_err(fail)? {
        let entry = entry.map_err(fail)?;
        let is_dir = options.mark_directories && entry_is_dir(&entry);
        names.push((entry.file_name(), is_dir));
    }
    let read_time = start.elapsed();

    names.sort_by(|(a, _), (b, _)| policy.compare(a, b));

    let entries: Vec<DirectoryEntry> = names
        .into_iter()
        .map(|(mut name, is_dir)| {
            if is_dir {
                name.push("/");
            }
            DirectoryEntry::new(name)
        })
        .collect();

    log::debug!(
        "list_directory: path={}, policy={:?}, entries={}, read_dir={}ms, total={}ms",
        directory.display(),
        policy,
        entries.len(),
        read_time.as_millis(),
        start.elapsed().as_millis()
    );

    Ok(DirectoryListing::new(directory.to_path_buf(), policy, entries))
}

/// Whether an entry is a directory, following symlinks. Broken links and entries we
/// can't stat count as files.
fn entry_is_dir(entry: &fs::DirEntry) -> bool {
    match entry.file_type() {
        Ok(file_type) if file_type.is_symlink() => fs::metadata(entry.path()).map(|m| m.is_dir()).unwrap_or(false),
        Ok(file_type) => file_type.is_dir(),
        Err(_) => false,
    }
}
