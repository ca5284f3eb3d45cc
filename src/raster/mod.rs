pub mod manipulate;

use std::path::Path;

use crate::error::ArtError;

pub const WHITE: [u8; 3] = [255, 255, 255];

/// Row-major RGB pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<[u8; 3]>,
}

impl Image {
    pub fn new(width: usize, height: usize, pixels: Vec<[u8; 3]>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn filled(width: usize, height: usize, color: [u8; 3]) -> Self {
        Self::new(width, height, vec![color; width * height])
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        self.pixels[y * self.width + x]
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: [u8; 3]) {
        self.pixels[y * self.width + x] = color;
    }
}

pub fn load_image_file(path: &Path) -> Result<Image, ArtError> {
    // Format is sniffed from the content, not the extension.
    let decoded = image::ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(image::ImageError::IoError)
        .and_then(|reader| reader.decode())
        .map_err(|source| ArtError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;
    let rgb = decoded.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    if width == 0 || height == 0 {
        return Err(ArtError::EmptyImage {
            path: path.to_path_buf(),
        });
    }

    let pixels = rgb.pixels().map(|p| p.0).collect();
    tracing::info!(path = %path.display(), width, height, "loaded image");
    Ok(Image::new(width, height, pixels))
}
