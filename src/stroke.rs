use egui::Color32;
use serde::{Deserialize, Serialize};

/// A solid pen with round caps and round joins.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    color: Color32,
    width: f32,
}

impl Pen {
    pub fn new(color: Color32, width: f32) -> Self {
        Self { color, width }
    }

    /// Freehand drawing pen: red, 4px.
    pub fn draw() -> Self {
        Self::new(Color32::RED, 4.0)
    }

    /// Eraser pen: white, 10px.
    pub fn erase() -> Self {
        Self::new(Color32::WHITE, 10.0)
    }

    pub fn radius(&self) -> f32 {
        self.width * 0.5
    }

    /// The pen color as an RGBA pixel.
    pub fn rgba(&self) -> image::Rgba<u8> {
        image::Rgba(self.color.to_srgba_unmultiplied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_and_erase_pens() {
        assert_eq!(Pen::draw(), Pen::new(Color32::RED, 4.0));
        assert_eq!(Pen::erase(), Pen::new(Color32::WHITE, 10.0));
        assert_eq!(Pen::draw().radius(), 2.0);
        assert_eq!(Pen::erase().radius(), 5.0);
    }

    #[test]
    fn test_rgba_is_opaque() {
        assert_eq!(Pen::draw().rgba(), image::Rgba([255, 0, 0, 255]));
        assert_eq!(Pen::erase().rgba(), image::Rgba([255, 255, 255, 255]));
    }
}
