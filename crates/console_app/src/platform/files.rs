use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use console_core::SelectedFile;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Opens the native file dialog. Any file type is accepted.
pub(crate) fn pick_file() -> Option<PathBuf> {
    rfd::FileDialog::new().set_title("Choose an image").pick_file()
}

pub(crate) fn read_selected_file(path: &Path) -> io::Result<SelectedFile> {
    let bytes = fs::read(path)?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    Ok(SelectedFile {
        name,
        mime: mime_for_path(path).to_string(),
        bytes,
    })
}

pub(crate) fn mime_for_path(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return FALLBACK_MIME;
    };
    match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "tif" | "tiff" => "image/tiff",
        "bmp" => "image/bmp",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => FALLBACK_MIME,
    }
}
