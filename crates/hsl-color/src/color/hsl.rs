//! HSL color type and the RGB <-> HSL row formulas

use super::rgb::Rgb;
use super::EPSILON;

/// Channel permutations for the six 60° hue sectors, as indices into `[c, x, 0]`.
const SECTORS: [[usize; 3]; 6] = [
    [0, 1, 2], // (c, x, 0)
    [1, 0, 2], // (x, c, 0)
    [2, 0, 1], // (0, c, x)
    [2, 1, 0], // (0, x, c)
    [1, 2, 0], // (x, 0, c)
    [0, 2, 1], // (c, 0, x)
];

/// A color in the Hue-Saturation-Lightness cylindrical model.
///
/// Hue is in degrees and is not range-checked: any real value is reduced
/// modulo 360 when converting. Saturation and lightness are fractions,
/// nominally in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees
    pub h: f64,
    /// Saturation (0.0..=1.0)
    pub s: f64,
    /// Lightness (0.0..=1.0)
    pub l: f64,
}

impl Hsl {
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    #[inline]
    pub fn from_array(hsl: [f64; 3]) -> Self {
        Self::new(hsl[0], hsl[1], hsl[2])
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.h, self.s, self.l]
    }
}

impl From<Rgb> for Hsl {
    /// Convert an 8-bit RGB color to HSL.
    ///
    /// Lightness within [`EPSILON`] of 0 or 1 is nudged inward by `EPSILON`
    /// so the saturation denominator never reaches zero. Grays (chroma
    /// within `EPSILON` of 0) get hue 0. When two channels share the
    /// maximum, the first of red, green, blue wins.
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.normalized();
        let c_min = r.min(g).min(b);
        let c_max = r.max(g).max(b);
        let chroma = c_max - c_min;

        let mut l = (c_max + c_min) / 2.0;
        if l.abs() <= EPSILON {
            l += EPSILON;
        }
        if (l - 1.0).abs() <= EPSILON {
            l -= EPSILON;
        }
        let s = 2.0 * (c_max - l) / (1.0 - (2.0 * l - 1.0).abs());

        let h = if chroma.abs() <= EPSILON {
            0.0
        } else if r == c_max {
            60.0 * ((g - b) / chroma).rem_euclid(6.0)
        } else if g == c_max {
            60.0 * ((b - r) / chroma + 2.0)
        } else {
            60.0 * ((r - g) / chroma + 4.0)
        };

        Self { h, s, l }
    }
}

impl From<Hsl> for Rgb {
    /// Convert an HSL color to 8-bit RGB.
    ///
    /// Each channel is `(value + m) * 255` cast to `u8`, so the fractional
    /// part is truncated. Results outside 0..=255 saturate at the bounds.
    fn from(hsl: Hsl) -> Self {
        let Hsl { h, s, l } = hsl;
        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let hue_prime = h.rem_euclid(360.0) / 60.0;
        let x = chroma * (1.0 - (hue_prime.rem_euclid(2.0) - 1.0).abs());
        let m = l - chroma / 2.0;

        // rem_euclid may round up to exactly 360.0 for tiny negative hues,
        // which lands on sector 6; that is hue 0 again.
        let sector = (hue_prime as usize) % SECTORS.len();
        let values = [chroma, x, 0.0];
        let [ri, gi, bi] = SECTORS[sector];

        let channel = |v: f64| ((v + m) * 255.0) as u8;
        Rgb::new(channel(values[ri]), channel(values[gi]), channel(values[bi]))
    }
}
