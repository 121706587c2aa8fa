//! hsl-color: tagged RGB and HSL color values
//!
//! Colors are stored as rows of three channels. A batch is an ordered
//! sequence of rows in a single representation:
//!
//! - [`Representation::Rgb`]: three `u8` channels in 0..=255
//! - [`Representation::Hsl`]: hue in degrees, saturation and lightness in 0.0..=1.0
//!
//! Conversion is always explicit, row-independent and order-preserving.
//!
//! ```
//! use hsl_color::ColorModel;
//!
//! let green = ColorModel::from_rgb(0, 128, 0);
//! let [h, s, l] = green.to_hsl()[0];
//! assert!((h - 120.0).abs() < 1e-9);
//! assert!((s - 1.0).abs() < 1e-9);
//! assert!((l - 128.0 / 255.0 / 2.0).abs() < 1e-9);
//! ```
//!
//! # Numerical guards
//!
//! RGB to HSL divides by `1 - |2L - 1|`, which is zero for pure black and
//! pure white. Lightness within [`EPSILON`] of either extreme is moved
//! inward by `EPSILON` before that division. Grays are detected by chroma
//! within `EPSILON` of zero and get hue 0.
//!
//! HSL to RGB scales by 255 and truncates, so round trips through HSL may
//! land one step below the original channel value.

pub mod color;
pub mod error;
pub mod model;


pub use color::{Hsl, Rgb, EPSILON};
pub use error::ColorError;
pub use model::{ColorModel, Representation};
