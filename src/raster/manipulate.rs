use rayon::prelude::*;

use super::{Image, WHITE};
use crate::error::ArtError;

const RED_WEIGHT: f64 = 0.2126;
const GREEN_WEIGHT: f64 = 0.7152;
const BLUE_WEIGHT: f64 = 0.0722;
const MAX_CHANNEL: f64 = 255.0;

/// Per-cell brightness in `[0, 1]`, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct BrightnessGrid {
    pub rows: usize,
    pub cols: usize,
    pub values: Vec<f64>,
}

impl BrightnessGrid {
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.cols + col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks(self.cols.max(1))
    }
}

pub fn luminance(rgb: [u8; 3]) -> f64 {
    rgb[0] as f64 * RED_WEIGHT + rgb[1] as f64 * GREEN_WEIGHT + rgb[2] as f64 * BLUE_WEIGHT
}

/// Centres `image` on a white canvas whose sides are the next powers of two.
pub fn pad_to_power_of_two(image: &Image) -> Image {
    let new_width = image.width.next_power_of_two();
    let new_height = image.height.next_power_of_two();
    if new_width == image.width && new_height == image.height {
        return image.clone();
    }

    let left = (new_width - image.width) / 2;
    let top = (new_height - image.height) / 2;
    let mut padded = Image::filled(new_width, new_height, WHITE);
    for y in 0..image.height {
        let src = &image.pixels[y * image.width..(y + 1) * image.width];
        let dst_start = (y + top) * new_width + left;
        padded.pixels[dst_start..dst_start + image.width].copy_from_slice(src);
    }

    tracing::debug!(
        from_width = image.width,
        from_height = image.height,
        to_width = new_width,
        to_height = new_height,
        "padded image"
    );
    padded
}

/// Splits `image` into `resolution` square cells per row and averages each
/// cell's luminance. Expects an image already padded to power-of-two sides.
pub fn sub_image_brightnesses(image: &Image, resolution: usize) -> Result<BrightnessGrid, ArtError> {
    let invalid = || ArtError::InvalidResolution {
        resolution,
        width: image.width,
    };
    if resolution == 0 || !resolution.is_power_of_two() || resolution > image.width {
        return Err(invalid());
    }

    let cell = image.width / resolution;
    let rows = image.height / cell;
    if rows == 0 {
        return Err(invalid());
    }

    let cols = resolution;
    let scale = (cell * cell) as f64 * MAX_CHANNEL;
    let mut values = vec![0.0_f64; rows * cols];
    values
        .par_chunks_mut(cols)
        .enumerate()
        .for_each(|(row, out)| {
            for (col, slot) in out.iter_mut().enumerate() {
                let mut sum = 0.0;
                for py in row * cell..(row + 1) * cell {
                    let line = &image.pixels[py * image.width..(py + 1) * image.width];
                    for &px in &line[col * cell..(col + 1) * cell] {
                        sum += luminance(px);
                    }
                }
                *slot = sum / scale;
            }
        });

    Ok(BrightnessGrid { rows, cols, values })
}
