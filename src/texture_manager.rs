use egui::{Context, TextureHandle, TextureId, TextureOptions};

use crate::canvas::Canvas;

const TEXTURE_NAME: &str = "canvas";

/// Keeps the GPU copy of the canvas in sync.
///
/// The canvas is uploaded once per load and re-uploaded only when its
/// version changes.
#[derive(Default)]
pub struct CanvasTexture {
    handle: Option<TextureHandle>,
    /// (canvas size, canvas version) of the last upload
    uploaded: Option<([usize; 2], u64)>,
    upload_count: usize,
}

impl CanvasTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the texture for `canvas`, uploading it first if it is stale.
    ///
    /// Returns `None` if the canvas exceeds the backend's maximum texture side.
    pub fn texture_for(&mut self, ctx: &Context, canvas: &Canvas) -> Option<TextureId> {
        let key = (
            [canvas.width() as usize, canvas.height() as usize],
            canvas.version(),
        );

        if let (Some(handle), Some(uploaded)) = (&self.handle, self.uploaded) {
            if uploaded == key {
                return Some(handle.id());
            }
        }

        let max_side = ctx.input(|i| i.max_texture_side);
        if key.0[0].max(key.0[1]) > max_side {
            log::debug!("Canvas {:?} exceeds max texture side {}", key.0, max_side);
            return None;
        }

        let image = canvas.to_color_image();
        let handle = match self.handle.take() {
            Some(mut handle) => {
                handle.set(image, TextureOptions::NEAREST);
                handle
            }
            None => ctx.load_texture(TEXTURE_NAME, image, TextureOptions::NEAREST),
        };
        let id = handle.id();
        self.handle = Some(handle);
        self.uploaded = Some(key);
        self.upload_count += 1;
        Some(id)
    }

    /// Forget the current upload, e.g. after a new image was loaded
    pub fn invalidate(&mut self) {
        self.uploaded = None;
    }

    /// Number of uploads performed so far
    pub fn upload_count(&self) -> usize {
        self.upload_count
    }
}
