use crate::config::{FALLBACK_MIME_TYPE, SUPPORTED_IMAGE_EXTENSIONS};
use crate::error::{AppError, Result};
use crate::file::BinaryFile;
use chrono::{DateTime, Utc};
use image::ImageFormat;
use log::debug;
use std::fs;
use std::path::Path;

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_str.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Guesses the MIME type of a file from its content, then from its name.
pub fn guess_mime_type(name: &str, bytes: &[u8]) -> String {
    if let Ok(format) = image::guess_format(bytes) {
        return format.to_mime_type().to_string();
    }

    Path::new(name)
        .extension()
        .and_then(ImageFormat::from_extension)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|| FALLBACK_MIME_TYPE.to_string())
}

/// Loads a file from disk into a `BinaryFile` handle.
pub fn load_file(path: &Path) -> Result<BinaryFile> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| AppError::InvalidFileName(path.to_path_buf()))?;

    let bytes = fs::read(path)?;
    let last_modified: DateTime<Utc> = fs::metadata(path)?.modified()?.into();
    let mime_type = guess_mime_type(&name, &bytes);

    debug!(
        "Loaded {} ({} bytes, {})",
        path.display(),
        bytes.len(),
        mime_type
    );

    Ok(BinaryFile::with_last_modified(
        name,
        mime_type,
        bytes,
        last_modified,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn supported_extensions_ignore_case() {
        assert!(is_supported_image(Path::new("photo.JPG")));
        assert!(is_supported_image(Path::new("dir/banner.webp")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }

    #[test]
    fn mime_type_prefers_content_over_name() {
        assert_eq!(guess_mime_type("misnamed.jpg", PNG_MAGIC), "image/png");
    }

    #[test]
    fn mime_type_falls_back_to_extension_then_default() {
        assert_eq!(guess_mime_type("photo.jpeg", b"not an image"), "image/jpeg");
        assert_eq!(guess_mime_type("blob", b"not an image"), FALLBACK_MIME_TYPE);
    }

    #[test]
    fn load_file_reads_name_bytes_and_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.png");
        fs::write(&path, PNG_MAGIC).unwrap();

        let file = load_file(&path).unwrap();
        assert_eq!(file.name(), "avatar.png");
        assert_eq!(file.bytes(), PNG_MAGIC);
        assert_eq!(file.mime_type(), "image/png");
    }

    #[test]
    fn load_file_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_file(&dir.path().join("missing.png"));
        assert!(matches!(result, Err(AppError::FileRead(_))));
    }

    #[test]
    fn load_file_rejects_path_without_name() {
        let result = load_file(&PathBuf::from("/"));
        assert!(matches!(result, Err(AppError::InvalidFileName(_))));
    }
}
