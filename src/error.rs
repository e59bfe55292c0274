/// Errors raised when constructing track inputs
///
/// Degenerate *geometry* (missing radii, too few usable points) is never an
/// error: the builders return `None` and the caller simply draws nothing.
/// These variants only cover inputs that violate the track contract itself.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Track must contain at least one point")]
    EmptyTrack,

    #[error("Track point times must be non-decreasing (point {index} goes backwards)")]
    OutOfOrderTrack { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
