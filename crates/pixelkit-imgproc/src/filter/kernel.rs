use num_traits::{NumCast, Signed};

use crate::error::FilterError;

/// Numeric type usable as a kernel element.
///
/// The same type is used as the accumulator for the intermediate weighted
/// sums, independently of the pixel storage type, so precision is
/// controlled by the kernel and not lost to narrow pixel channels.
pub trait KernelElement:
    Signed + NumCast + Copy + PartialOrd + Send + Sync + std::fmt::Debug + 'static
{
}

impl<K> KernelElement for K where
    K: Signed + NumCast + Copy + PartialOrd + Send + Sync + std::fmt::Debug + 'static
{
}

/// Cast an intensity into the kernel element type.
///
/// Values that the target type cannot represent collapse to zero; in
/// practice pixel intensities always fit any sensible kernel type.
pub(crate) fn intensity_as<K: KernelElement>(v: f64) -> K {
    K::from(v).unwrap_or_else(K::zero)
}

/// Cast a finished accumulation back to f64 for the pixel store.
pub(crate) fn as_f64<K: KernelElement>(v: K) -> f64 {
    v.to_f64().unwrap_or(0.0)
}

/// A dense 2D filter kernel in row-major order.
///
/// Both dimensions must be odd when the kernel is applied, so that a
/// unique center element exists; the shape is validated by
/// [`filter`](crate::filter::filter) rather than at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel2<K> {
    rows: usize,
    cols: usize,
    data: Vec<K>,
}

impl<K: KernelElement> Kernel2<K> {
    /// Create a kernel from row-major weight data.
    ///
    /// # Errors
    ///
    /// If the data length does not match `rows * cols`, an error is
    /// returned.
    pub fn new(rows: usize, cols: usize, data: Vec<K>) -> Result<Self, FilterError> {
        if data.len() != rows * cols {
            return Err(FilterError::InvalidKernelData(data.len(), rows, cols));
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a kernel by evaluating `f(row, col)` over the shape.
    ///
    /// ```
    /// use pixelkit_imgproc::filter::Kernel2;
    ///
    /// // outer product of [1, 2, 1] with itself
    /// let weights = [1.0, 2.0, 1.0];
    /// let kernel = Kernel2::from_fn(3, 3, |r, c| weights[r] * weights[c]);
    /// assert_eq!(kernel.get(1, 1), Some(&4.0));
    /// ```
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> K) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    /// The number of kernel rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of kernel columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The weight at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&K> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(&self.data[row * self.cols + col])
    }

    /// The weights as a row-major slice.
    pub fn as_slice(&self) -> &[K] {
        &self.data
    }

    pub(crate) fn at(&self, row: usize, col: usize) -> K {
        self.data[row * self.cols + col]
    }
}
