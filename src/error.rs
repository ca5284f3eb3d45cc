use std::path::PathBuf;

use thiserror::Error;

pub type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Everything that can go wrong between loading an image and writing its art.
///
/// The shell prints the `Display` text of a failed command verbatim, so the
/// command variants carry the exact user-facing messages.
#[derive(Debug, Error)]
pub enum ArtError {
    #[error("Did not execute due to incorrect command.")]
    IncorrectCommand,
    #[error("Did not add due to incorrect format.")]
    AddFormat,
    #[error("Did not remove due to incorrect format.")]
    RemoveFormat,
    #[error("Did not change resolution due to incorrect format.")]
    ResolutionFormat,
    #[error("Did not change resolution due to exceeding boundaries.")]
    ResolutionBoundary,
    #[error("Did not change rounding method due to incorrect format")]
    RoundingFormat,
    #[error("Did not change output method due to incorrect format.")]
    OutputFormat,
    #[error("Did not execute. Charset is too small.")]
    SmallCharset,
    #[error("resolution {resolution} is invalid for an image {width} pixels wide")]
    InvalidResolution { resolution: usize, width: usize },
    #[error("failed to load image '{}': {source}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("image '{}' has no pixels", path.display())]
    EmptyImage { path: PathBuf },
    #[error("failed to write '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ArtError {
    /// Command errors are reported and the session continues; the rest abort it.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::Io(_) | Self::ImageLoad { .. } | Self::EmptyImage { .. }
        )
    }
}
