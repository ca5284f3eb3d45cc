use rayon::prelude::*;

use crate::error::ArtError;
use crate::matching::CharMatcher;
use crate::raster::manipulate::{sub_image_brightnesses, BrightnessGrid};
use crate::raster::Image;

pub type AsciiGrid = Vec<Vec<char>>;

pub const MIN_PALETTE: usize = 2;

/// Converts one padded image to ASCII art, remembering the brightness grid
/// of the most recent resolution.
#[derive(Debug)]
pub struct AsciiArtRenderer {
    image: Image,
    last: Option<(usize, BrightnessGrid)>,
}

impl AsciiArtRenderer {
    /// `image` must already have power-of-two sides.
    pub fn new(image: Image) -> Self {
        Self { image, last: None }
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn cached_resolution(&self) -> Option<usize> {
        self.last.as_ref().map(|(res, _)| *res)
    }

    pub fn render(
        &mut self,
        resolution: usize,
        matcher: &mut CharMatcher,
    ) -> Result<AsciiGrid, ArtError> {
        if matcher.len() < MIN_PALETTE {
            return Err(ArtError::SmallCharset);
        }

        let grid = self.brightnesses(resolution)?;
        let policy = matcher.rounding();
        let levels = matcher.levels();

        let art: Option<AsciiGrid> = grid
            .values
            .par_chunks(grid.cols)
            .map(|row| {
                row.iter()
                    .map(|&b| policy.pick(b, levels))
                    .collect::<Option<Vec<char>>>()
            })
            .collect();
        let art = art.ok_or(ArtError::SmallCharset)?;

        tracing::info!(
            resolution,
            rows = grid.rows,
            cols = grid.cols,
            rounding = policy.name(),
            "rendered ascii art"
        );
        Ok(art)
    }

    fn brightnesses(&mut self, resolution: usize) -> Result<&BrightnessGrid, ArtError> {
        match &self.last {
            Some((cached, _)) if *cached == resolution => {
                tracing::debug!(resolution, "brightness cache hit");
            }
            _ => {
                tracing::debug!(resolution, "brightness cache miss");
                let grid = sub_image_brightnesses(&self.image, resolution)?;
                self.last = Some((resolution, grid));
            }
        }
        match &self.last {
            Some((_, grid)) => Ok(grid),
            None => Err(ArtError::InvalidResolution {
                resolution,
                width: self.image.width,
            }),
        }
    }
}
