//! Test helpers for webserver service tests

use std::io::Write;
use tempfile::NamedTempFile;

/// Write `contents` to a temporary file that lives as long as the handle
pub fn write_temp_catalog(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp catalog");
    file.write_all(contents.as_bytes()).expect("write temp catalog");
    file
}
