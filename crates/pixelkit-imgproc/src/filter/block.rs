use pixelkit_image::{Image, Pixel, PixelChannel, Rgb};

use super::kernel::{intensity_as, KernelElement};
use crate::error::FilterError;

/// The 3-tap weights in application order.
fn taps<K: KernelElement>(fe1: K, fm: K, fe2: K) -> [K; 3] {
    [fe1, fm, fe2]
}

fn check_window<P: Pixel>(
    img: &Image<P>,
    row: usize,
    col: usize,
    nr: usize,
    nc: usize,
) -> Result<(), FilterError> {
    // the window plus a one-pixel margin must fit inside the image
    if row < 1 || col < 1 || row + nr + 1 > img.rows() || col + nc + 1 > img.cols() {
        return Err(FilterError::WindowOutOfBounds(
            row,
            col,
            nr,
            nc,
            img.rows(),
            img.cols(),
        ));
    }
    Ok(())
}

/// Evaluate a 3-tap separable filter over a window of a grayscale image.
///
/// The filter `[fe1, fm, fe2]` is applied along both axes, so the
/// effective dense kernel is its outer product with itself:
///
/// ```text
/// fe1*fe1  fm*fe1   fe2*fe1
/// fe1*fm   fm*fm    fe2*fm
/// fe1*fe2  fm*fe2   fe2*fe2
/// ```
///
/// The response for the window pixel at `(row + i, col + j)` is written
/// to `block[i][j]`. The image is read through its intensity, so any
/// pixel type is interpreted as grayscale. This is an interior-only fast
/// path: no edge zeroing happens here, and the window expanded by one
/// pixel on every side must lie inside the image.
///
/// # Errors
///
/// If the expanded window does not fit inside the image, an error is
/// returned and the block is untouched.
pub fn filter_block_grayscale<P, K, const NR: usize, const NC: usize>(
    block: &mut [[K; NC]; NR],
    img: &Image<P>,
    row: usize,
    col: usize,
    fe1: K,
    fm: K,
    fe2: K,
) -> Result<(), FilterError>
where
    P: Pixel,
    K: KernelElement,
{
    check_window(img, row, col, NR, NC)?;

    let cols = img.cols();
    let data = img.as_slice();
    let taps = taps(fe1, fm, fe2);

    for (i, block_row) in block.iter_mut().enumerate() {
        for (j, out) in block_row.iter_mut().enumerate() {
            let mut acc = K::zero();
            for (di, &fv) in taps.iter().enumerate() {
                let sr = row + i + di - 1;
                let mut row_sum = K::zero();
                for (dj, &fh) in taps.iter().enumerate() {
                    let sc = col + j + dj - 1;
                    row_sum = row_sum + fh * intensity_as::<K>(data[sr * cols + sc].intensity());
                }
                acc = acc + fv * row_sum;
            }
            *out = acc;
        }
    }

    Ok(())
}

/// Evaluate a 3-tap separable filter over a window of an RGB image,
/// per color component.
///
/// Same filter and window contract as [`filter_block_grayscale`], but the
/// weighted sum runs independently over the red, green and blue channels;
/// `block[i][j]` holds the three component responses in `[r, g, b]`
/// order.
///
/// # Errors
///
/// If the expanded window does not fit inside the image, an error is
/// returned and the block is untouched.
pub fn filter_block_rgb<T, K, const NR: usize, const NC: usize>(
    block: &mut [[[K; 3]; NC]; NR],
    img: &Image<Rgb<T>>,
    row: usize,
    col: usize,
    fe1: K,
    fm: K,
    fe2: K,
) -> Result<(), FilterError>
where
    T: PixelChannel,
    K: KernelElement,
{
    check_window(img, row, col, NR, NC)?;

    let cols = img.cols();
    let data = img.as_slice();
    let taps = taps(fe1, fm, fe2);

    for (i, block_row) in block.iter_mut().enumerate() {
        for (j, out) in block_row.iter_mut().enumerate() {
            let mut acc = [K::zero(); 3];
            for (di, &fv) in taps.iter().enumerate() {
                let sr = row + i + di - 1;
                let mut row_sum = [K::zero(); 3];
                for (dj, &fh) in taps.iter().enumerate() {
                    let px = &data[sr * cols + col + j + dj - 1];
                    row_sum[0] = row_sum[0] + fh * intensity_as::<K>(px.r.to_f64());
                    row_sum[1] = row_sum[1] + fh * intensity_as::<K>(px.g.to_f64());
                    row_sum[2] = row_sum[2] + fh * intensity_as::<K>(px.b.to_f64());
                }
                for ch in 0..3 {
                    acc[ch] = acc[ch] + fv * row_sum[ch];
                }
            }
            *out = acc;
        }
    }

    Ok(())
}
