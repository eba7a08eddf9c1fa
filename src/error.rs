use super::*;

/// The two recoverable failures of the classification pipeline. Anything
/// else propagates as a plain `anyhow::Error` or panics inside ndarray.
#[derive(Debug, Error)]
pub(crate) enum ClassifyError {
  #[error("unreadable image: {0}")]
  UnreadableImage(image::ImageError),
  #[error("model unavailable: {0}")]
  ModelUnavailable(anyhow::Error),
}
