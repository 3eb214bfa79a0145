//! Pixel traits and concrete pixel types.
//!
//! The filtering routines never inspect pixel types at runtime. A pixel
//! type declares its color-space classification once through associated
//! constants, and the two fixed code paths (grayscale vs. color) fall out
//! of the [`Pixel::intensity`] / [`Pixel::with_intensity`] pair: grayscale
//! types expose their single channel directly, while [`Rgb`] routes
//! through HSI so that only intensity is touched and chrominance is
//! preserved.

use crate::color::{hsi_from_rgb, rgb_from_hsi, Hsi};

/// A single channel scalar of a pixel.
pub trait PixelChannel:
    Copy + Default + PartialEq + Send + Sync + std::fmt::Debug + 'static
{
    /// Largest representable channel value, as f64. For floating point
    /// channels this is 1.0 by convention.
    const MAX: f64;

    /// The channel value as f64.
    fn to_f64(self) -> f64;

    /// Saturating conversion from f64.
    ///
    /// Integer channels round half away from zero and clamp to
    /// `[0, MAX]`; floating point channels pass the value through.
    fn from_f64(v: f64) -> Self;
}

macro_rules! impl_int_channel {
    ($t:ty, $max:expr) => {
        impl PixelChannel for $t {
            const MAX: f64 = $max;

            fn to_f64(self) -> f64 {
                self as f64
            }

            fn from_f64(v: f64) -> Self {
                v.round().clamp(0.0, $max) as $t
            }
        }
    };
}

impl_int_channel!(u8, 255.0);
impl_int_channel!(u16, 65535.0);

impl PixelChannel for f32 {
    const MAX: f64 = 1.0;

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

impl PixelChannel for f64 {
    const MAX: f64 = 1.0;

    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(v: f64) -> Self {
        v
    }
}

/// A pixel of an [`Image`](crate::Image).
///
/// The associated constants classify the pixel type at compile time;
/// filters consult them once per call, never per pixel.
pub trait Pixel: Copy + Default + PartialEq + Send + Sync + std::fmt::Debug + 'static {
    /// Whether the pixel has a single luminance channel.
    const GRAYSCALE: bool;

    /// Whether the pixel carries an alpha channel. Spatial filters reject
    /// such images up front.
    const HAS_ALPHA: bool;

    /// The zero (black) pixel value.
    fn black() -> Self;

    /// The pixel's intensity in channel units: the channel value itself
    /// for grayscale pixels, the HSI intensity for color pixels.
    fn intensity(&self) -> f64;

    /// Store a new intensity into this pixel, saturating to the channel
    /// range. Grayscale pixels are replaced outright; color pixels keep
    /// their original hue and saturation.
    fn with_intensity(&self, value: f64) -> Self;
}

macro_rules! impl_gray_pixel {
    ($t:ty) => {
        impl Pixel for $t {
            const GRAYSCALE: bool = true;
            const HAS_ALPHA: bool = false;

            fn black() -> Self {
                <$t>::default()
            }

            fn intensity(&self) -> f64 {
                self.to_f64()
            }

            fn with_intensity(&self, value: f64) -> Self {
                <$t as PixelChannel>::from_f64(value)
            }
        }
    };
}

impl_gray_pixel!(u8);
impl_gray_pixel!(u16);
impl_gray_pixel!(f32);
impl_gray_pixel!(f64);

/// An RGB color pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb<T: PixelChannel> {
    /// Red channel.
    pub r: T,
    /// Green channel.
    pub g: T,
    /// Blue channel.
    pub b: T,
}

impl<T: PixelChannel> Rgb<T> {
    /// Create a pixel from its three channels.
    pub fn new(r: T, g: T, b: T) -> Self {
        Self { r, g, b }
    }

    /// The pixel in HSI space, channels normalized to `[0, 1]`.
    pub fn to_hsi(&self) -> Hsi {
        hsi_from_rgb(
            self.r.to_f64() / T::MAX,
            self.g.to_f64() / T::MAX,
            self.b.to_f64() / T::MAX,
        )
    }

    /// Build a pixel from an HSI value, saturating each channel.
    pub fn from_hsi(hsi: Hsi) -> Self {
        let (r, g, b) = rgb_from_hsi(hsi);
        Self {
            r: T::from_f64(r * T::MAX),
            g: T::from_f64(g * T::MAX),
            b: T::from_f64(b * T::MAX),
        }
    }
}

impl<T: PixelChannel> Pixel for Rgb<T> {
    const GRAYSCALE: bool = false;
    const HAS_ALPHA: bool = false;

    fn black() -> Self {
        Self::default()
    }

    fn intensity(&self) -> f64 {
        (self.r.to_f64() + self.g.to_f64() + self.b.to_f64()) / 3.0
    }

    fn with_intensity(&self, value: f64) -> Self {
        let hsi = self.to_hsi();
        Self::from_hsi(Hsi {
            i: (value / T::MAX).clamp(0.0, 1.0),
            ..hsi
        })
    }
}

/// An RGB color pixel with an alpha channel.
///
/// Spatial filters do not support alpha blending and reject images of
/// this pixel type; it exists so that callers holding RGBA data get a
/// deterministic error instead of silently dropped transparency.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba<T: PixelChannel> {
    /// Red channel.
    pub r: T,
    /// Green channel.
    pub g: T,
    /// Blue channel.
    pub b: T,
    /// Alpha channel.
    pub a: T,
}

impl<T: PixelChannel> Rgba<T> {
    /// Create a pixel from its four channels.
    pub fn new(r: T, g: T, b: T, a: T) -> Self {
        Self { r, g, b, a }
    }
}

impl<T: PixelChannel> Pixel for Rgba<T> {
    const GRAYSCALE: bool = false;
    const HAS_ALPHA: bool = true;

    fn black() -> Self {
        Self::default()
    }

    fn intensity(&self) -> f64 {
        (self.r.to_f64() + self.g.to_f64() + self.b.to_f64()) / 3.0
    }

    fn with_intensity(&self, value: f64) -> Self {
        let rgb = Rgb::new(self.r, self.g, self.b).with_intensity(value);
        Self {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            a: self.a,
        }
    }
}
