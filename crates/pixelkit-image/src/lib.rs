#![deny(missing_docs)]
//! Image container, pixel traits and color-space conversion.

/// image representation for computer vision purposes.
pub mod image;

/// pixel traits and concrete pixel types.
pub mod pixel;

/// RGB <-> HSI color-space conversion.
pub mod color;

/// Error types for the image module.
pub mod error;

pub use crate::color::{hsi_from_rgb, rgb_from_hsi, Hsi};
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
pub use crate::pixel::{Pixel, PixelChannel, Rgb, Rgba};
