use pixelkit_image::{Image, ImageError, Pixel};
use rayon::prelude::*;

use super::is_interior;
use super::kernel::{as_f64, intensity_as, Kernel2, KernelElement};
use crate::error::FilterError;

/// Apply a dense spatial filter to an image.
///
/// For every destination pixel whose kernel footprint lies fully inside
/// the input, the weighted sum over the kernel extent is computed in the
/// kernel element type `K`, divided by `scale` and stored through the
/// saturating pixel store. Grayscale pixels are filtered on their channel
/// value directly; color pixels are filtered on the intensity channel of
/// their HSI representation, keeping hue and saturation. Pixels too close
/// to an edge for the kernel to fit are set to black.
///
/// With `use_abs`, negative filtered values are replaced by their
/// absolute value before storage.
///
/// # Errors
///
/// The call is rejected before any pixel is written when the kernel has
/// an even dimension, `scale` is zero, the pixel type carries an alpha
/// channel, or `src` and `dst` differ in size.
///
/// # Example
///
/// ```
/// use pixelkit_image::{Image, ImageSize};
/// use pixelkit_imgproc::filter::{filter, Kernel2};
///
/// let size = ImageSize { width: 5, height: 5 };
/// let src = Image::<u8>::from_size_val(size, 100).unwrap();
/// let mut dst = Image::<u8>::from_size_val(size, 0).unwrap();
///
/// let kernel = Kernel2::new(3, 3, vec![1.0f32; 9]).unwrap();
/// filter(&src, &mut dst, &kernel, 9.0, false).unwrap();
///
/// assert_eq!(*dst.get(2, 2).unwrap(), 100);
/// assert_eq!(*dst.get(0, 2).unwrap(), 0);
/// ```
pub fn filter<P, K>(
    src: &Image<P>,
    dst: &mut Image<P>,
    kernel: &Kernel2<K>,
    scale: K,
    use_abs: bool,
) -> Result<(), FilterError>
where
    P: Pixel,
    K: KernelElement,
{
    if P::HAS_ALPHA {
        return Err(FilterError::AlphaNotSupported);
    }
    if kernel.rows() % 2 == 0 || kernel.cols() % 2 == 0 {
        return Err(FilterError::EvenKernelDimensions(
            kernel.rows(),
            kernel.cols(),
        ));
    }
    if scale.is_zero() {
        return Err(FilterError::ZeroScale);
    }
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        )
        .into());
    }

    let rows = src.rows();
    let cols = src.cols();
    if rows == 0 || cols == 0 {
        return Ok(());
    }
    let row_radius = kernel.rows() / 2;
    let col_radius = kernel.cols() / 2;
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_mut(cols)
        .enumerate()
        .for_each(|(r, dst_row)| {
            for (c, dst_pixel) in dst_row.iter_mut().enumerate() {
                if !is_interior(r, c, rows, cols, row_radius, col_radius) {
                    *dst_pixel = P::black();
                    continue;
                }

                let mut acc = K::zero();
                for m in 0..kernel.rows() {
                    let sr = r + m - row_radius;
                    for n in 0..kernel.cols() {
                        let sc = c + n - col_radius;
                        let sample = intensity_as::<K>(src_data[sr * cols + sc].intensity());
                        acc = acc + kernel.at(m, n) * sample;
                    }
                }

                let mut value = acc / scale;
                if use_abs {
                    value = value.abs();
                }
                *dst_pixel = src_data[r * cols + c].with_intensity(as_f64(value));
            }
        });

    Ok(())
}
