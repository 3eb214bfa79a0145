use pixelkit_image::{Image, Pixel};

use super::kernels::gaussian_kernel_1d;
use super::separable::filter_separable;
use crate::error::FilterError;

/// Default cap on the synthesized Gaussian kernel width.
pub const DEFAULT_MAX_KERNEL_SIZE: usize = 1001;

/// Blur an image with a Gaussian filter of width `sigma`.
///
/// The kernel size is the smallest odd width covering about three
/// standard deviations on each side (`ceil(6 * sigma)`, at least 3),
/// clipped to `max_size`; pass
/// [`DEFAULT_MAX_KERNEL_SIZE`] when no tighter cap is needed. The
/// synthesized 1D kernel is applied as both row and column filter through
/// [`filter_separable`] with scale 1 and no rectification (Gaussian
/// weights are nonnegative, so rectification would be a no-op), which
/// also fixes the edge and color-space behavior: borders where the kernel
/// does not fit are black, and color pixels are blurred on intensity
/// only.
///
/// # Errors
///
/// If `sigma` is not positive, `max_size` is zero or even, the pixel
/// type carries an alpha channel, or `src` and `dst` differ in size, an
/// error is returned before any pixel is written.
///
/// # Example
///
/// ```
/// use pixelkit_image::{Image, ImageSize};
/// use pixelkit_imgproc::filter::{gaussian_blur, DEFAULT_MAX_KERNEL_SIZE};
///
/// let size = ImageSize { width: 9, height: 9 };
/// let src = Image::<u8>::from_size_val(size, 100).unwrap();
/// let mut dst = Image::<u8>::from_size_val(size, 0).unwrap();
///
/// gaussian_blur(&src, &mut dst, 1.0, DEFAULT_MAX_KERNEL_SIZE).unwrap();
///
/// assert_eq!(*dst.get(4, 4).unwrap(), 100);
/// ```
pub fn gaussian_blur<P: Pixel>(
    src: &Image<P>,
    dst: &mut Image<P>,
    sigma: f64,
    max_size: usize,
) -> Result<(), FilterError> {
    if sigma <= 0.0 {
        return Err(FilterError::InvalidSigma(sigma));
    }
    if max_size == 0 || max_size % 2 == 0 {
        return Err(FilterError::InvalidKernelSize(max_size));
    }

    let mut size = (6.0 * sigma).ceil() as usize;
    if size % 2 == 0 {
        size += 1;
    }
    let size = size.max(3).min(max_size);

    let kernel = gaussian_kernel_1d::<f64>(sigma, size)?;
    filter_separable(src, dst, &kernel, &kernel, 1.0, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pixelkit_image::{ImageSize, Rgb};

    #[test]
    fn flat_image_stays_flat_inside() -> Result<(), FilterError> {
        let size = ImageSize {
            width: 9,
            height: 9,
        };
        let src = Image::<u8>::from_size_val(size, 100)?;
        let mut dst = Image::<u8>::from_size_val(size, 7)?;

        gaussian_blur(&src, &mut dst, 1.0, DEFAULT_MAX_KERNEL_SIZE)?;

        // sigma 1.0 picks a 7-tap kernel, radius 3
        for r in 0..9 {
            for c in 0..9 {
                let interior = (3..=5).contains(&r) && (3..=5).contains(&c);
                let expected = if interior { 100 } else { 0 };
                assert_eq!(*dst.get(r, c)?, expected, "({r}, {c})");
            }
        }

        Ok(())
    }

    #[test]
    fn flat_float_image_within_truncation_error() -> Result<(), FilterError> {
        let size = ImageSize {
            width: 11,
            height: 11,
        };
        let src = Image::<f64>::from_size_val(size, 0.5)?;
        let mut dst = Image::<f64>::from_size_val(size, 0.0)?;

        gaussian_blur(&src, &mut dst, 1.0, DEFAULT_MAX_KERNEL_SIZE)?;

        assert_relative_eq!(*dst.get(5, 5)?, 0.5, epsilon = 5e-3);
        Ok(())
    }

    #[test]
    fn max_size_clips_kernel_width() -> Result<(), FilterError> {
        let size = ImageSize {
            width: 9,
            height: 9,
        };
        let src = Image::<u8>::from_size_val(size, 100)?;
        let mut dst = Image::<u8>::from_size_val(size, 7)?;

        // sigma 3.0 wants 19 taps; the cap forces 5, so the black border
        // is only two pixels wide
        gaussian_blur(&src, &mut dst, 3.0, 5)?;

        assert_eq!(*dst.get(0, 4)?, 0);
        assert_eq!(*dst.get(1, 4)?, 0);
        assert_ne!(*dst.get(2, 4)?, 0);

        Ok(())
    }

    #[test]
    fn tiny_sigma_still_uses_a_3_tap_kernel() -> Result<(), FilterError> {
        let size = ImageSize {
            width: 5,
            height: 5,
        };
        let src = Image::<u8>::from_size_val(size, 100)?;
        let mut dst = Image::<u8>::from_size_val(size, 7)?;

        gaussian_blur(&src, &mut dst, 0.2, DEFAULT_MAX_KERNEL_SIZE)?;

        // one-pixel black border from the 3-tap kernel; the interior is
        // written (a sub-unit-sigma sample grid overshoots, so no exact
        // value is asserted here)
        assert_eq!(*dst.get(0, 2)?, 0);
        assert_eq!(*dst.get(4, 2)?, 0);
        assert_ne!(*dst.get(2, 2)?, 7);
        assert_ne!(*dst.get(2, 2)?, 0);

        Ok(())
    }

    #[test]
    fn color_blur_preserves_flat_color() -> Result<(), FilterError> {
        let size = ImageSize {
            width: 9,
            height: 9,
        };
        let px = Rgb::new(80u8, 160, 240);
        let src = Image::from_size_val(size, px)?;
        let mut dst = Image::from_size_val(size, Rgb::<u8>::black())?;

        gaussian_blur(&src, &mut dst, 1.0, DEFAULT_MAX_KERNEL_SIZE)?;

        let out = *dst.get(4, 4)?;
        assert_relative_eq!(out.intensity(), px.intensity(), epsilon = 2.0);
        assert_relative_eq!(out.to_hsi().h, px.to_hsi().h, epsilon = 0.05);
        assert_eq!(*dst.get(0, 0)?, Rgb::black());

        Ok(())
    }

    #[test]
    fn rejects_degenerate_inputs() {
        let size = ImageSize {
            width: 5,
            height: 5,
        };
        let src = Image::<u8>::from_size_val(size, 0).unwrap();
        let mut dst = Image::<u8>::from_size_val(size, 0).unwrap();

        assert_eq!(
            gaussian_blur(&src, &mut dst, 0.0, 1001).unwrap_err(),
            FilterError::InvalidSigma(0.0)
        );
        assert_eq!(
            gaussian_blur(&src, &mut dst, 1.0, 10).unwrap_err(),
            FilterError::InvalidKernelSize(10)
        );
        assert_eq!(
            gaussian_blur(&src, &mut dst, 1.0, 0).unwrap_err(),
            FilterError::InvalidKernelSize(0)
        );
    }
}
