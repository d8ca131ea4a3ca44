//! Utility functions for path manipulation and common operations.

use std::path::PathBuf;

/// Constructs a file system path by joining a directory path with a file or
/// subdirectory name.
///
/// # Arguments
///
/// * `dir_path` - The base directory path
/// * `subdir_path` - The subdirectory or file name to append
///
/// # Panics
///
/// Panics if the resulting path contains invalid UTF-8 characters.
///
/// # Examples
///
/// ```
/// # use grouper::utils::get_path;
/// let path = get_path("/var/data", "tracker.json");
/// assert_eq!(path, "/var/data/tracker.json");
/// ```
pub fn get_path(dir_path: &str, subdir_path: &str) -> String {
    let path_buf: PathBuf = [dir_path, subdir_path].iter().collect();
    path_buf.to_str().unwrap().to_owned()
}
