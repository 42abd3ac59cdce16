//! Application configuration constants.

/// Supported image file extensions for picking preview files.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Scheme prefix of every minted preview reference.
pub const OBJECT_URL_SCHEME: &str = "blob:";

/// Origin used by `ObjectUrlRegistry::new`.
pub const DEFAULT_OBJECT_URL_ORIGIN: &str = "admin-ui";

/// MIME type reported when neither the content nor the extension identifies the file.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Environment variable read by the demo binary as the baseline preview.
pub const INITIAL_PREVIEW_ENV: &str = "ADMIN_UI_INITIAL_PREVIEW";
