use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading an image onto the canvas
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    /// The image can't be uploaded as a single texture
    #[error("Image is {width}x{height}, larger than the maximum side of {max_side}")]
    TooLarge {
        width: u32,
        height: u32,
        max_side: usize,
    },
}
