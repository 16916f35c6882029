use std::path::{Path, PathBuf};

use crate::config::EditorConfig;

/// Opens the native "Open Image" dialog and returns the chosen path.
///
/// Returns `None` when the user cancels. The dialog is modal: the frame
/// blocks until it closes.
pub fn pick_image(config: &EditorConfig) -> Option<PathBuf> {
    let path = rfd::FileDialog::new()
        .set_title("Open Image")
        .add_filter("Images", config.image_extensions.as_slice())
        .pick_file();

    match &path {
        Some(path) => log::info!("Selected image file: {}", path.display()),
        None => log::debug!("Open dialog cancelled"),
    }
    path
}

/// Check if a path has one of the accepted image extensions
pub fn is_image_file(path: &Path, config: &EditorConfig) -> bool {
    path.extension()
        .map(|ext| config.accepts_extension(&ext.to_string_lossy()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_file() {
        let config = EditorConfig::default();
        assert!(is_image_file(Path::new("photo.JPG"), &config));
        assert!(is_image_file(Path::new("/tmp/scan.bmp"), &config));
        assert!(!is_image_file(Path::new("notes.txt"), &config));
        assert!(!is_image_file(Path::new("no_extension"), &config));
    }
}
