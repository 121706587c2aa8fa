//! Tagged color values and batch conversion
//!
//! A [`ColorModel`] stores a batch of N rows in exactly one
//! [`Representation`]. The tag and the channel storage are the same enum, so
//! a value can never hold RGB channels while claiming to be HSL.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::color::{Hsl, Rgb};
use crate::error::ColorError;

/// Which representation a [`ColorModel`]'s channels are stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    Rgb,
    Hsl,
}

impl Representation {
    pub fn as_str(self) -> &'static str {
        match self {
            Representation::Rgb => "rgb",
            Representation::Hsl => "hsl",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Representation {
    type Err = ColorError;

    /// Case-insensitive; anything other than `rgb` or `hsl` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(Representation::Rgb),
            "hsl" => Ok(Representation::Hsl),
            other => Err(ColorError::UnsupportedRepresentation(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Channels {
    Rgb(Vec<[u8; 3]>),
    Hsl(Vec<[f64; 3]>),
}

/// An immutable batch of colors tagged with its representation.
///
/// Conversions never mutate; they return the channels in the requested
/// representation, borrowing when no conversion is needed.
///
/// # Example
///
/// ```
/// use hsl_color::{ColorModel, Representation};
///
/// let colors = ColorModel::from_rgb_batch(vec![[255, 0, 0], [0, 0, 255]]);
/// assert_eq!(colors.representation(), Representation::Rgb);
///
/// let hsl = colors.to_hsl();
/// assert_eq!(hsl[0], [0.0, 1.0, 0.5]);
/// assert_eq!(hsl[1], [240.0, 1.0, 0.5]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorModel {
    channels: Channels,
}

impl ColorModel {
    /// Single-row RGB value.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgb_batch(vec![[r, g, b]])
    }

    /// Batch RGB value from pre-built rows.
    pub fn from_rgb_batch(rows: Vec<[u8; 3]>) -> Self {
        Self {
            channels: Channels::Rgb(rows),
        }
    }

    /// Single-row HSL value.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        Self::from_hsl_batch(vec![[h, s, l]])
    }

    /// Batch HSL value from pre-built rows.
    pub fn from_hsl_batch(rows: Vec<[f64; 3]>) -> Self {
        Self {
            channels: Channels::Hsl(rows),
        }
    }

    /// Build a value from an untrusted representation tag and numeric rows.
    ///
    /// RGB rows must hold integers in 0..=255. HSL rows are taken as-is.
    ///
    /// # Errors
    ///
    /// [`ColorError::UnsupportedRepresentation`] for an unknown tag,
    /// [`ColorError::ChannelOutOfRange`] for an invalid RGB channel.
    pub fn from_tagged(tag: &str, rows: &[[f64; 3]]) -> Result<Self, ColorError> {
        match tag.parse::<Representation>()? {
            Representation::Rgb => {
                let rgb = rows
                    .iter()
                    .enumerate()
                    .map(|(row, values)| {
                        let mut out = [0u8; 3];
                        for (channel, &value) in values.iter().enumerate() {
                            if value.fract() != 0.0 || !(0.0..=255.0).contains(&value) {
                                return Err(ColorError::ChannelOutOfRange {
                                    row,
                                    channel,
                                    value,
                                });
                            }
                            out[channel] = value as u8;
                        }
                        Ok(out)
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::from_rgb_batch(rgb))
            }
            Representation::Hsl => Ok(Self::from_hsl_batch(rows.to_vec())),
        }
    }

    pub fn representation(&self) -> Representation {
        match self.channels {
            Channels::Rgb(_) => Representation::Rgb,
            Channels::Hsl(_) => Representation::Hsl,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        match &self.channels {
            Channels::Rgb(rows) => rows.len(),
            Channels::Hsl(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Channels as RGB rows; borrowed unchanged when already RGB.
    pub fn to_rgb(&self) -> Cow<'_, [[u8; 3]]> {
        match &self.channels {
            Channels::Rgb(rows) => Cow::Borrowed(rows.as_slice()),
            Channels::Hsl(rows) => {
                tracing::debug!(rows = rows.len(), "Converting HSL batch to RGB");
                Cow::Owned(
                    rows.iter()
                        .map(|&row| Rgb::from(Hsl::from_array(row)).to_bytes())
                        .collect(),
                )
            }
        }
    }

    /// Channels as HSL rows; borrowed unchanged when already HSL.
    pub fn to_hsl(&self) -> Cow<'_, [[f64; 3]]> {
        match &self.channels {
            Channels::Hsl(rows) => Cow::Borrowed(rows.as_slice()),
            Channels::Rgb(rows) => {
                tracing::debug!(rows = rows.len(), "Converting RGB batch to HSL");
                Cow::Owned(
                    rows.iter()
                        .map(|&row| Hsl::from(Rgb::from_bytes(row)).to_array())
                        .collect(),
                )
            }
        }
    }

    /// A new value holding the same colors in `target`.
    pub fn convert(&self, target: Representation) -> Self {
        match target {
            Representation::Rgb => Self::from_rgb_batch(self.to_rgb().into_owned()),
            Representation::Hsl => Self::from_hsl_batch(self.to_hsl().into_owned()),
        }
    }
}

impl From<Rgb> for ColorModel {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Hsl> for ColorModel {
    fn from(hsl: Hsl) -> Self {
        Self::from_hsl(hsl.h, hsl.s, hsl.l)
    }
}
