//! Image capture: declared MIME types and data-URL previews
//!
//! The declared type of a file is derived from its extension and is trusted
//! as-is; content is never sniffed.

use std::path::Path;
use std::sync::Arc;

use base64::Engine as _;

/// MIME type declared for files we do not recognise.
pub const UNKNOWN_MIME: &str = "application/octet-stream";

const EXTENSION_MIME_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("webp", "image/webp"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("avif", "image/avif"),
    ("heic", "image/heic"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
    ("pdf", "application/pdf"),
    ("txt", "text/plain"),
    ("json", "application/json"),
    ("csv", "text/csv"),
];

/// MIME type declared by a path's extension (case-insensitive).
pub fn declared_mime_type(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return UNKNOWN_MIME;
    };
    let ext = ext.to_ascii_lowercase();
    EXTENSION_MIME_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or(UNKNOWN_MIME)
}

/// Whether a declared MIME type is accepted as an image.
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// An accepted image: raw bytes for upload plus a data-URL preview.
///
/// Bytes are shared so the image can move from the home form into the
/// preview bundle and into upload requests without copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub file_name: String,
    pub mime: String,
    pub bytes: Arc<[u8]>,
    pub preview: String,
}

impl CapturedImage {
    /// Build a captured image, encoding the preview as `data:<mime>;base64,...`.
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        let mime = mime.into();
        let preview = data_url(&mime, &bytes);
        Self {
            file_name: file_name.into(),
            mime,
            bytes: bytes.into(),
            preview,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Human readable size, e.g. `"12.4 KB"`.
    pub fn size_label(&self) -> String {
        size_label(self.size())
    }

    /// Media type carried in the data-URL preview header.
    pub fn preview_media_type(&self) -> &str {
        self.preview
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(';'))
            .map(|(media_type, _)| media_type)
            .unwrap_or(&self.mime)
    }

    /// Size of the encoded preview.
    pub fn preview_size_label(&self) -> String {
        size_label(self.preview.len())
    }
}

fn size_label(bytes: usize) -> String {
    let size = bytes as f64;
    if size >= 1024.0 * 1024.0 {
        format!("{:.1} MB", size / (1024.0 * 1024.0))
    } else if size >= 1024.0 {
        format!("{:.1} KB", size / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_mime_from_extension() {
        assert_eq!(declared_mime_type(Path::new("/a/b/photo.JPG")), "image/jpeg");
        assert_eq!(declared_mime_type(Path::new("shot.png")), "image/png");
        assert_eq!(declared_mime_type(Path::new("shot.webp")), "image/webp");
        assert_eq!(declared_mime_type(Path::new("notes.txt")), "text/plain");
        assert_eq!(declared_mime_type(Path::new("Makefile")), UNKNOWN_MIME);
        assert_eq!(declared_mime_type(Path::new("archive.tar.gz")), UNKNOWN_MIME);
    }

    #[test]
    fn test_is_image_mime() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/svg+xml"));
        assert!(!is_image_mime("application/pdf"));
        assert!(!is_image_mime(UNKNOWN_MIME));
    }

    #[test]
    fn test_extension_is_trusted_over_content() {
        // A text file renamed to .png is still declared as an image
        assert!(is_image_mime(declared_mime_type(Path::new("renamed.png"))));
    }

    #[test]
    fn test_captured_image_preview_is_data_url() {
        let image = CapturedImage::new("dot.png", "image/png", b"abc".to_vec());
        assert_eq!(image.preview, "data:image/png;base64,YWJj");
        assert_eq!(image.size(), 3);
        assert_eq!(&*image.bytes, b"abc");
    }

    #[test]
    fn test_preview_header_and_size() {
        let image = CapturedImage::new("dot.webp", "image/webp", b"abc".to_vec());
        assert_eq!(image.preview_media_type(), "image/webp");
        // "data:image/webp;base64," plus four encoded chars
        assert_eq!(image.preview_size_label(), "27 B");
    }

    #[test]
    fn test_size_label() {
        assert_eq!(
            CapturedImage::new("a.png", "image/png", vec![0; 512]).size_label(),
            "512 B"
        );
        assert_eq!(
            CapturedImage::new("a.png", "image/png", vec![0; 2048]).size_label(),
            "2.0 KB"
        );
        assert_eq!(
            CapturedImage::new("a.png", "image/png", vec![0; 3 * 1024 * 1024]).size_label(),
            "3.0 MB"
        );
    }
}
