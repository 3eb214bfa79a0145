/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when two images expected to have the same size do not.
    #[error("Images have different sizes ({0}x{1} != {2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a pixel coordinate lies outside the image bounds.
    #[error("Pixel coordinate ({0}, {1}) is out of bounds ({2}x{3})")]
    PixelOutOfBounds(usize, usize, usize, usize),
}
