use std::f64::consts::PI;

use super::kernel::{intensity_as, KernelElement};
use crate::error::FilterError;

/// Evaluate a 1D Gaussian density with mean 0 and standard deviation
/// `sigma` at `x`.
///
/// `sigma` must be positive.
///
/// ```
/// use pixelkit_imgproc::filter::gaussian;
///
/// let peak = gaussian(0.0, 1.0);
/// assert!((peak - 0.3989422804014327).abs() < 1e-12);
/// ```
pub fn gaussian(x: f64, sigma: f64) -> f64 {
    debug_assert!(sigma > 0.0, "sigma must be positive, got {sigma}");
    (-(x * x) / (2.0 * sigma * sigma)).exp() / (sigma * (2.0 * PI).sqrt())
}

/// Create a discretized 1D Gaussian filter of the given odd `size`.
///
/// The vector holds the density sampled at the integer offsets
/// `-size/2 ..= size/2`, centered on the midpoint, and is suitable as a
/// row or column filter for
/// [`filter_separable`](super::filter_separable). The samples are not
/// renormalized: their sum converges to 1 on its own once `size` covers
/// about six standard deviations, so a wide enough kernel preserves flat
/// image regions.
///
/// # Errors
///
/// If `sigma` is not positive, or `size` is zero or even, an error is
/// returned.
pub fn gaussian_kernel_1d<K: KernelElement>(sigma: f64, size: usize) -> Result<Vec<K>, FilterError> {
    if sigma <= 0.0 {
        return Err(FilterError::InvalidSigma(sigma));
    }
    if size == 0 || size % 2 == 0 {
        return Err(FilterError::InvalidKernelSize(size));
    }

    let half = (size / 2) as i64;
    Ok((-half..=half)
        .map(|x| intensity_as::<K>(gaussian(x as f64, sigma)))
        .collect())
}
