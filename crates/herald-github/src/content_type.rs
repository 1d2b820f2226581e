//! Content types for uploaded assets

use std::path::Path;

/// Fallback for unrecognized extensions
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

const CONTENT_TYPES: &[(&str, &str)] = &[
    ("zip", "application/zip"),
    ("tar", "application/x-tar"),
    ("gz", "application/gzip"),
    ("exe", "application/x-msdownload"),
    ("jar", "application/java-archive"),
];

/// Infer an asset's content type from its final extension.
///
/// Only the last extension counts, so `app.tar.gz` is `application/gzip`.
pub fn content_type_for(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return DEFAULT_CONTENT_TYPE;
    };

    CONTENT_TYPES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map(|(_, content_type)| *content_type)
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(content_type_for(Path::new("app.zip")), "application/zip");
        assert_eq!(content_type_for(Path::new("app.tar")), "application/x-tar");
        assert_eq!(content_type_for(Path::new("app.tar.gz")), "application/gzip");
        assert_eq!(content_type_for(Path::new("setup.exe")), "application/x-msdownload");
        assert_eq!(content_type_for(Path::new("lib.jar")), "application/java-archive");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(content_type_for(Path::new("SETUP.EXE")), "application/x-msdownload");
        assert_eq!(content_type_for(Path::new("dist/App.Zip")), "application/zip");
    }

    #[test]
    fn test_unknown_extensions() {
        assert_eq!(content_type_for(Path::new("notes.txt")), DEFAULT_CONTENT_TYPE);
        assert_eq!(content_type_for(Path::new("binary")), DEFAULT_CONTENT_TYPE);
        assert_eq!(content_type_for(Path::new(".gitignore")), DEFAULT_CONTENT_TYPE);
    }
}
