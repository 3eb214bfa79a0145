//! Conversion between RGB and the HSI (hue, saturation, intensity)
//! representation.
//!
//! HSI is the working color space for intensity-only filtering: the
//! intensity channel carries the image structure while hue and saturation
//! carry the chrominance, so an operation on intensity alone leaves the
//! perceived color untouched.

use std::f64::consts::PI;

/// A pixel in the HSI color space, with all channels normalized.
///
/// * `h`: hue angle in radians, in `[0, 2*pi)`.
/// * `s`: saturation in `[0, 1]`.
/// * `i`: intensity in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsi {
    /// Hue angle in radians.
    pub h: f64,
    /// Saturation.
    pub s: f64,
    /// Intensity.
    pub i: f64,
}

/// Convert normalized RGB channels (each in `[0, 1]`) to HSI.
pub fn hsi_from_rgb(r: f64, g: f64, b: f64) -> Hsi {
    let i = (r + g + b) / 3.0;
    let min = r.min(g).min(b);

    let s = if i > 0.0 { 1.0 - min / i } else { 0.0 };

    let num = 0.5 * ((r - g) + (r - b));
    let den = ((r - g) * (r - g) + (r - b) * (g - b)).sqrt();

    let h = if den == 0.0 {
        0.0
    } else {
        let theta = (num / den).clamp(-1.0, 1.0).acos();
        if b > g {
            2.0 * PI - theta
        } else {
            theta
        }
    };

    Hsi { h, s, i }
}

/// Convert an HSI pixel back to normalized RGB channels.
///
/// The sector formulas can overshoot the unit range by a small amount for
/// extreme saturations, so each channel is clamped to `[0, 1]`.
pub fn rgb_from_hsi(hsi: Hsi) -> (f64, f64, f64) {
    let Hsi { h, s, i } = hsi;

    if s == 0.0 {
        return (i.clamp(0.0, 1.0), i.clamp(0.0, 1.0), i.clamp(0.0, 1.0));
    }

    let third = 2.0 * PI / 3.0;
    let sector = |h: f64| i * (1.0 + s * h.cos() / (PI / 3.0 - h).cos());

    let (r, g, b) = if h < third {
        let r = sector(h);
        let b = i * (1.0 - s);
        (r, 3.0 * i - (r + b), b)
    } else if h < 2.0 * third {
        let h = h - third;
        let g = sector(h);
        let r = i * (1.0 - s);
        (r, g, 3.0 * i - (r + g))
    } else {
        let h = h - 2.0 * third;
        let b = sector(h);
        let g = i * (1.0 - s);
        (3.0 * i - (g + b), g, b)
    };

    (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gray_has_no_saturation() {
        let hsi = hsi_from_rgb(0.5, 0.5, 0.5);
        assert_relative_eq!(hsi.s, 0.0);
        assert_relative_eq!(hsi.i, 0.5);
    }

    #[test]
    fn primary_hues() {
        let red = hsi_from_rgb(1.0, 0.0, 0.0);
        assert_relative_eq!(red.h, 0.0);
        assert_relative_eq!(red.i, 1.0 / 3.0);
        assert_relative_eq!(red.s, 1.0);

        let green = hsi_from_rgb(0.0, 1.0, 0.0);
        assert_relative_eq!(green.h, 2.0 * PI / 3.0, epsilon = 1e-12);

        let blue = hsi_from_rgb(0.0, 0.0, 1.0);
        assert_relative_eq!(blue.h, 4.0 * PI / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn roundtrip_preserves_rgb() {
        let samples = [
            (0.2, 0.4, 0.6),
            (0.9, 0.1, 0.3),
            (0.0, 0.0, 0.0),
            (1.0, 1.0, 1.0),
            (0.5, 0.5, 0.0),
        ];

        for (r, g, b) in samples {
            let (r2, g2, b2) = rgb_from_hsi(hsi_from_rgb(r, g, b));
            assert_relative_eq!(r, r2, epsilon = 1e-9);
            assert_relative_eq!(g, g2, epsilon = 1e-9);
            assert_relative_eq!(b, b2, epsilon = 1e-9);
        }
    }

    #[test]
    fn intensity_rescale_keeps_hue() {
        let hsi = hsi_from_rgb(0.8, 0.4, 0.2);
        let dimmed = Hsi { i: hsi.i / 2.0, ..hsi };
        let (r, g, b) = rgb_from_hsi(dimmed);
        let back = hsi_from_rgb(r, g, b);

        assert_relative_eq!(back.h, hsi.h, epsilon = 1e-9);
        assert_relative_eq!(back.s, hsi.s, epsilon = 1e-9);
        assert_relative_eq!(back.i, hsi.i / 2.0, epsilon = 1e-9);
    }
}
