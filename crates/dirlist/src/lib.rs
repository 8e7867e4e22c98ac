//! Directory listing: enumerate a directory and hand back its entry names, sorted.
//!
//! The listing is an owned, immutable value. Releasing it is a move, so it can't be
//! used after release or released twice.

// Deny unused code to catch dead code early
#![deny(unused)]
// Warn on unused dependencies to catch platform-specific cfg mismatches
#![warn(unused_crate_dependencies)]
// Warn on redundant path prefixes (e.g., std::path::Path when Path is imported)
#![warn(unused_qualifications)]
// Use log::* macros instead of println!/eprintln! for proper log level control
#![deny(clippy::print_stdout, clippy::print_stderr)]

mod error;
mod listing;
mod reading;
mod sorting;

pub use error::ListingError;
pub use listing::{DirectoryEntry, DirectoryListing};
pub use reading::{ListOptions, list_directory, list_directory_with};
pub use sorting::{SortPolicy, compare_lexical, compare_natural};

#[cfg(test)]
mod reading_test;
#[cfg(test)]
mod sorting_test;
