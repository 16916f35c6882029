use egui::{ColorImage, Pos2, Vec2};
use image::RgbaImage;

use crate::error::LoadError;
use crate::stroke::Pen;

/// The pixel buffer shown in the display label.
///
/// `version` is bumped on every mutation so the texture upload can tell
/// when the label needs re-rendering.
#[derive(Clone)]
pub struct Canvas {
    image: RgbaImage,
    original: RgbaImage,
    version: u64,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .field("version", &self.version)
            .finish()
    }
}

impl Canvas {
    pub fn new(image: RgbaImage) -> Self {
        let original = image.clone();
        Self {
            image,
            original,
            version: 0,
        }
    }

    /// Decode an encoded image (png, jpeg, bmp) into a canvas.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LoadError> {
        let decoded = image::load_from_memory(bytes)?;
        log::debug!("Decoded image: {}x{}", decoded.width(), decoded.height());
        Ok(Self::new(decoded.to_rgba8()))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// The pixels as they were when the image was loaded.
    pub fn original(&self) -> &RgbaImage {
        &self.original
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32)
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, pos: Pos2) -> bool {
        pos.x >= 0.0 && pos.y >= 0.0 && pos.x < self.size().x && pos.y < self.size().y
    }

    /// Paint a segment from `from` to `to` with `pen`.
    ///
    /// Every pixel whose center lies within `pen.radius()` of the segment is
    /// set, which yields round caps; consecutive segments sharing an endpoint
    /// therefore also meet with a round join.
    pub fn draw_line(&mut self, from: Pos2, to: Pos2, pen: &Pen) {
        let radius = pen.radius();
        let color = pen.rgba();
        let (a, b) = (pixel_center(from), pixel_center(to));

        let min_x = (a.x.min(b.x) - radius).floor().max(0.0) as u32;
        let min_y = (a.y.min(b.y) - radius).floor().max(0.0) as u32;
        let max_x = ((a.x.max(b.x) + radius).ceil() as i64).min(self.width() as i64 - 1);
        let max_y = ((a.y.max(b.y) + radius).ceil() as i64).min(self.height() as i64 - 1);
        if max_x < 0 || max_y < 0 {
            return;
        }

        for y in min_y..=max_y as u32 {
            for x in min_x..=max_x as u32 {
                let p = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                if distance_to_segment(p, a, b) <= radius {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
        self.version += 1;
    }

    pub fn to_color_image(&self) -> ColorImage {
        let size = [self.width() as usize, self.height() as usize];
        ColorImage::from_rgba_unmultiplied(size, self.image.as_raw())
    }
}

/// Center of the pixel containing `pos`.
fn pixel_center(pos: Pos2) -> Pos2 {
    Pos2::new(pos.x.floor() + 0.5, pos.y.floor() + 0.5)
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
