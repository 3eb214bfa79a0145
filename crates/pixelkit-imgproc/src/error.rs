use pixelkit_image::ImageError;

/// Errors surfaced by the spatial filtering routines.
///
/// Every variant except `Image` is a violated precondition: the call is
/// rejected before any output pixel is written, so a filtering call either
/// fully succeeds or produces nothing.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FilterError {
    /// A dense kernel must be odd in both dimensions.
    #[error("Kernel dimensions must be odd, got {0}x{1}")]
    EvenKernelDimensions(usize, usize),

    /// A separable kernel vector must have odd, nonzero length.
    #[error("Kernel length must be odd, got {0}")]
    EvenKernelLength(usize),

    /// The kernel data length does not match its declared shape.
    #[error("Kernel data length ({0}) does not match shape {1}x{2}")]
    InvalidKernelData(usize, usize, usize),

    /// The scale divisor must be nonzero.
    #[error("Scale must be nonzero")]
    ZeroScale,

    /// Pixel types with an alpha channel cannot be filtered.
    #[error("Alpha-channel pixel types are not supported")]
    AlphaNotSupported,

    /// Sigma of a Gaussian must be positive.
    #[error("Sigma must be positive, got {0}")]
    InvalidSigma(f64),

    /// A synthesized kernel size must be odd and positive.
    #[error("Kernel size must be odd and positive, got {0}")]
    InvalidKernelSize(usize),

    /// A block window, expanded by its one-pixel margin, must lie fully
    /// inside the image.
    #[error("Block window at ({0}, {1}) with shape {2}x{3} does not fit inside the interior of a {4}x{5} image")]
    WindowOutOfBounds(usize, usize, usize, usize, usize, usize),

    /// An error from the image container.
    #[error(transparent)]
    Image(#[from] ImageError),
}
