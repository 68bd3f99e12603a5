//! Local image intake: extension checks, native file dialog, async reads.
//!
//! Intake failures never reach the error dialog; they are logged and leave
//! the upload UI where it was.

use std::path::{Path, PathBuf};

use anyhow::Context;

/// File types the backend accepts for upload.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// An image ready to be uploaded: raw bytes plus the metadata the multipart
/// request needs.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

pub fn is_allowed_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.iter().any(|allowed| *allowed == ext)
        })
        .unwrap_or(false)
}

/// Opens the native file dialog filtered to supported image types.
pub async fn pick_image() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Choose a product photo")
        .add_filter("Images", &ALLOWED_EXTENSIONS)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Reads the image off the UI thread and infers its MIME type from the
/// file extension.
pub async fn read_image(path: PathBuf) -> anyhow::Result<ImagePayload> {
    let bytes = tokio::fs::read(&path)
        .await
        .with_context(|| format!("could not read {}", path.display()))?;
    let mime = mime_guess::from_path(&path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image")
        .to_string();
    Ok(ImagePayload {
        file_name,
        mime,
        bytes,
    })
}
