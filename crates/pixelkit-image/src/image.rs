use crate::error::ImageError;
use crate::pixel::Pixel;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use pixelkit_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents an image as a row-major 2D grid of pixels.
///
/// The pixel type carries its own channel layout and color-space
/// classification through the [`Pixel`] trait, so a grayscale image is an
/// `Image<u8>` (or `Image<f32>`, ...) and a color image is an
/// `Image<Rgb<u8>>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<P: Pixel> {
    size: ImageSize,
    data: Vec<P>,
}

impl<P: Pixel> Image<P> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image in row-major order.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an
    /// error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelkit_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8>::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// ```
    pub fn new(size: ImageSize, data: Vec<P>) -> Result<Self, ImageError> {
        if data.len() != size.width * size.height {
            return Err(ImageError::InvalidDataLength(
                data.len(),
                size.width * size.height,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size, filled with `val`.
    pub fn from_size_val(size: ImageSize, val: P) -> Result<Self, ImageError> {
        Image::new(size, vec![val; size.width * size.height])
    }

    /// The size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// The width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// The height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// The number of rows (same as the height).
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// The number of columns (same as the width).
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// The pixel data as a row-major slice.
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    /// The pixel data as a mutable row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [P] {
        &mut self.data
    }

    /// Get the pixel at `(row, col)`.
    ///
    /// # Errors
    ///
    /// If the coordinate lies outside the image bounds, an error is
    /// returned.
    pub fn get(&self, row: usize, col: usize) -> Result<&P, ImageError> {
        if row >= self.rows() || col >= self.cols() {
            return Err(ImageError::PixelOutOfBounds(
                row,
                col,
                self.rows(),
                self.cols(),
            ));
        }
        Ok(&self.data[row * self.cols() + col])
    }

    /// Set the pixel at `(row, col)`.
    ///
    /// # Errors
    ///
    /// If the coordinate lies outside the image bounds, an error is
    /// returned.
    pub fn set(&mut self, row: usize, col: usize, val: P) -> Result<(), ImageError> {
        if row >= self.rows() || col >= self.cols() {
            return Err(ImageError::PixelOutOfBounds(
                row,
                col,
                self.rows(),
                self.cols(),
            ));
        }
        let cols = self.cols();
        self.data[row * cols + col] = val;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Rgb;

    #[test]
    fn image_new_and_size() -> Result<(), ImageError> {
        let img = Image::<u8>::new(
            ImageSize {
                width: 4,
                height: 3,
            },
            vec![7u8; 12],
        )?;

        assert_eq!(img.rows(), 3);
        assert_eq!(img.cols(), 4);
        assert_eq!(img.as_slice().len(), 12);
        assert_eq!(*img.get(2, 3)?, 7);

        Ok(())
    }

    #[test]
    fn image_invalid_data_length() {
        let res = Image::<u8>::new(
            ImageSize {
                width: 4,
                height: 3,
            },
            vec![0u8; 11],
        );
        assert_eq!(res.unwrap_err(), ImageError::InvalidDataLength(11, 12));
    }

    #[test]
    fn image_get_set() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 2,
        };
        let mut img = Image::from_size_val(size, Rgb::new(0u8, 0, 0))?;
        img.set(1, 0, Rgb::new(1, 2, 3))?;

        assert_eq!(*img.get(1, 0)?, Rgb::new(1, 2, 3));
        assert!(img.get(2, 0).is_err());

        Ok(())
    }
}
