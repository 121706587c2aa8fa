//! Single-color types and the per-row conversion formulas
//!
//! [`Rgb`] holds 8-bit channels, [`Hsl`] holds hue in degrees plus saturation
//! and lightness as fractions. The `From` impls between them are the row
//! formulas that [`ColorModel`](crate::ColorModel) applies to whole batches.
//!
//! # Example
//!
//! ```
//! use hsl_color::{Hsl, Rgb};
//!
//! let hsl = Hsl::from(Rgb::new(255, 0, 0));
//! assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 1.0, 0.5));
//!
//! let rgb = Rgb::from(Hsl::new(240.0, 1.0, 0.5));
//! assert_eq!(rgb.to_bytes(), [0, 0, 255]);
//! ```

mod hsl;
mod rgb;

pub use hsl::Hsl;
pub use rgb::Rgb;

/// Tolerance for the lightness nudge and the achromatic hue check.
pub const EPSILON: f64 = 1e-6;
