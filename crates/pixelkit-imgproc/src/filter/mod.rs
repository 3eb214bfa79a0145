//! Spatial (convolution-based) image filtering.

mod block;
mod convolution;
mod kernel;
/// synthesis of 1D filter kernels.
pub mod kernels;
mod ops;
mod separable;

pub use block::{filter_block_grayscale, filter_block_rgb};
pub use convolution::filter;
pub use kernel::{Kernel2, KernelElement};
pub use kernels::{gaussian, gaussian_kernel_1d};
pub use ops::{gaussian_blur, DEFAULT_MAX_KERNEL_SIZE};
pub use separable::filter_separable;

/// True when a kernel footprint with the given radii, centered at
/// `(row, col)`, lies fully inside an image of `rows x cols`.
///
/// Pixels failing this predicate are set to black by the filters; both
/// the dense and the separable path share it so the edge policy cannot
/// diverge.
pub(crate) fn is_interior(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
    row_radius: usize,
    col_radius: usize,
) -> bool {
    row >= row_radius
        && col >= col_radius
        && row + row_radius < rows
        && col + col_radius < cols
}
