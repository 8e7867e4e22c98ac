//! Tests for directory enumeration.

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::ListingError;
use crate::reading::{ListOptions, list_directory, list_directory_with};
use crate::sorting::SortPolicy;

fn populate(dir: &Path, files: &[&str], dirs: &[&str]) {
    for name in files {
        fs::write(dir.join(name), b"x").unwrap();
    }
    for name in dirs {
        fs::create_dir(dir.join(name)).unwrap();
    }
}

fn names(listing: &crate::DirectoryListing) -> Vec<String> {
    listing.iter().map(|e| e.to_string_lossy()).collect()
}

#[test]
fn test_count_matches_entries_for_every_policy() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path(), &["b.txt", "A.txt", "c10", "c9"], &["sub", "Other"]);

    for policy in SortPolicy::ALL {
        let listing = list_directory(dir.path(), policy).unwrap();
        assert_eq!(listing.len(), 6, "{:?}", policy);
        assert_eq!(listing.policy(), policy);
        listing.release();
    }
}

#[test]
fn test_listing_is_sorted_under_its_policy() {
    let dir = tempfile::tempdir().unwrap();
    populate(
        dir.path(),
        &["file10", "file2", "file1", "File3", "readme", "README.md", "z", "_x"],
        &["dir20", "dir3"],
    );

    for policy in SortPolicy::ALL {
        let listing = list_directory(dir.path(), policy).unwrap();
        let entries = listing.entries();
        for pair in entries.windows(2) {
            assert_ne!(
                policy.compare(pair[0].name(), pair[1].name()),
                Ordering::Greater,
                "{:?}: {:?} before {:?}",
                policy,
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn test_natural_and_alpha_orders_differ_on_numbers() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path(), &["file10", "file2", "file1"], &[]);

    let natural = list_directory(dir.path(), SortPolicy::Numeric).unwrap();
    assert_eq!(names(&natural), vec!["file1", "file2", "file10"]);

    let alpha = list_directory(dir.path(), SortPolicy::Alpha).unwrap();
    assert_eq!(names(&alpha), vec!["file1", "file10", "file2"]);
}

#[test]
fn test_empty_directory_lists_zero_entries() {
    let dir = tempfile::tempdir().unwrap();
    let listing = list_directory(dir.path(), SortPolicy::CaseNumeric).unwrap();
    assert!(listing.is_empty());
    assert_eq!(listing.len(), 0);
    assert!(listing.get(0).is_none());
}

#[test]
fn test_nonexistent_path_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("definitely_does_not_exist_12345");

    match list_directory(&missing, SortPolicy::Alpha) {
        Err(ListingError::NotFound { path, .. }) => assert_eq!(path, missing),
        other => panic!("Expected NotFound, got: {:?}", other),
    }
}

#[test]
fn test_error_exposes_host_code() {
    let dir = tempfile::tempdir().unwrap();
    let err = list_directory(&dir.path().join("missing"), SortPolicy::Alpha).unwrap_err();
    assert!(err.raw_os_error().is_some());
    assert!(err.to_string().contains("missing"));
}

#[cfg(unix)]
#[test]
fn test_regular_file_is_not_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("plain.txt");
    fs::write(&file, b"hello").unwrap();

    match list_directory(&file, SortPolicy::Alpha) {
        Err(ListingError::NotADirectory { .. }) => (),
        other => panic!("Expected NotADirectory, got: {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_is_permission_denied() {
    use std::os::unix::fs::PermissionsExt;

    // Skip if running as root (root bypasses permission checks)
    if unsafe { libc::geteuid() } == 0 {
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("secret"), b"x").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let result = list_directory(&locked, SortPolicy::Alpha);

    // Restore permissions so the temp dir can be cleaned up
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    match result {
        Err(ListingError::PermissionDenied { path, source }) => {
            assert_eq!(path, locked);
            assert_eq!(source.raw_os_error(), Some(libc::EACCES));
        }
        other => panic!("Expected PermissionDenied, got: {:?}", other),
    }
}

#[test]
fn test_error_kinds_are_classified() {
    let path = Path::new("/some/dir");

    let denied = ListingError::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied));
    assert!(matches!(denied, ListingError::PermissionDenied { .. }));
    assert_eq!(denied.path(), path);
    assert!(denied.to_string().starts_with("Permission denied"));

    let missing = ListingError::from_io(path, io::Error::from(io::ErrorKind::NotFound));
    assert!(matches!(missing, ListingError::NotFound { .. }));

    let other = ListingError::from_io(path, io::Error::other("disk on fire"));
    assert!(matches!(other, ListingError::Io { .. }));
    assert!(other.to_string().contains("disk on fire"));
    assert_eq!(other.raw_os_error(), None);
}

#[test]
fn test_trailing_separator_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path(), &["one", "two"], &["three"]);

    let plain = list_directory(dir.path(), SortPolicy::Alpha).unwrap();
    let with_slash = format!("{}{}", dir.path().display(), std::path::MAIN_SEPARATOR);
    let slashed = list_directory(Path::new(&with_slash), SortPolicy::Alpha).unwrap();
    assert_eq!(names(&plain), names(&slashed));
}

#[test]
fn test_repeated_listing_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path(), &["a", "b", "c"], &[]);

    let first = list_directory(dir.path(), SortPolicy::CaseAlpha).unwrap();
    let second = list_directory(dir.path(), SortPolicy::CaseAlpha).unwrap();
    assert_eq!(names(&first), names(&second));
}

#[test]
fn test_dot_entries_are_omitted_by_default() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path(), &["a"], &[]);

    let listing = list_directory(dir.path(), SortPolicy::Alpha).unwrap();
    assert!(listing.iter().all(|e| !e.is_dot_entry()));
}

#[test]
fn test_dot_entries_when_requested() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path(), &["a", "-dash"], &[]);

    let options = ListOptions {
        include_dot_entries: true,
        ..ListOptions::default()
    };
    let listing = list_directory_with(dir.path(), SortPolicy::Alpha, options).unwrap();
    // '-' (0x2D) sorts before '.' (0x2E)
    assert_eq!(names(&listing), vec!["-dash", ".", "..", "a"]);
}

#[test]
fn test_mark_directories_appends_slash_after_sorting() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path(), &["a-file", "b"], &["a", "c"]);

    let options = ListOptions {
        mark_directories: true,
        ..ListOptions::default()
    };
    let listing = list_directory_with(dir.path(), SortPolicy::Alpha, options).unwrap();
    // Sorted by bare name: "a" < "a-file", even though "a/" > "a-file"
    assert_eq!(names(&listing), vec!["a/", "a-file", "b", "c/"]);
}

#[cfg(unix)]
#[test]
fn test_mark_directories_follows_symlinks() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path(), &["target-file"], &["target-dir"]);
    std::os::unix::fs::symlink(dir.path().join("target-dir"), dir.path().join("link-dir")).unwrap();
    std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("link-broken")).unwrap();

    let options = ListOptions {
        mark_directories: true,
        ..ListOptions::default()
    };
    let listing = list_directory_with(dir.path(), SortPolicy::Alpha, options).unwrap();
    assert_eq!(
        names(&listing),
        vec!["link-broken", "link-dir/", "target-dir/", "target-file"]
    );
}

#[test]
fn test_listing_moves_out_entries() {
    let dir = tempfile::tempdir().unwrap();
    populate(dir.path(), &["x", "y"], &[]);

    let listing = list_directory(dir.path(), SortPolicy::Alpha).unwrap();
    assert_eq!(listing[0].name(), "x");
    let owned: Vec<_> = listing.into_iter().map(|e| e.into_name()).collect();
    assert_eq!(owned, vec!["x", "y"]);
}
