use serde::{Deserialize, Serialize};

use crate::stroke::Pen;

/// Static settings for the editor window.
///
/// Nothing here is persisted; the binary runs with [`EditorConfig::default`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct EditorConfig {
    pub title: String,
    pub window_size: [f32; 2],
    pub window_position: [f32; 2],
    pub draw_pen: Pen,
    pub erase_pen: Pen,
    /// Lower-case extensions offered by the open dialog.
    pub image_extensions: Vec<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            title: "💖 Image Drawer 💖".to_owned(),
            window_size: [800.0, 600.0],
            window_position: [100.0, 100.0],
            draw_pen: Pen::draw(),
            erase_pen: Pen::erase(),
            image_extensions: ["png", "jpg", "jpeg", "bmp"]
                .iter()
                .map(|ext| (*ext).to_owned())
                .collect(),
        }
    }
}

impl EditorConfig {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn accepts_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.image_extensions.iter().any(|e| *e == ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let config = EditorConfig::default();
        assert_eq!(config.window_size, [800.0, 600.0]);
        assert_eq!(config.window_position, [100.0, 100.0]);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: EditorConfig = serde_json::from_str(r#"{ "title": "Scratch" }"#).unwrap();
        assert_eq!(config.title, "Scratch");
        assert_eq!(config.draw_pen, Pen::draw());
        assert_eq!(config.erase_pen, Pen::erase());
    }

    #[test]
    fn test_accepts_extension_ignores_case() {
        let config = EditorConfig::default();
        assert!(config.accepts_extension("PNG"));
        assert!(config.accepts_extension("jpeg"));
        assert!(!config.accepts_extension("gif"));
        assert!(!config.accepts_extension("webp"));
    }
}
