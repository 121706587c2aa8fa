//! Serializable color batch documents
//!
//! A batch file names its representation and lists one row per color:
//!
//! ```json
//! { "representation": "rgb", "colors": [[255, 0, 0], [0, 255, 0]] }
//! ```
//!
//! JSON and YAML are both accepted; the format follows the file extension.

use hsl_color::{ColorError, ColorModel, Representation};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::AppError;

/// Rows as they appear in a document.
///
/// Integer rows that fit in `u8` deserialize as [`ColorRows::Rgb`], anything
/// else as [`ColorRows::Hsl`]. The document's `representation` decides how
/// they are interpreted, so an HSL batch may be written with integer rows.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ColorRows {
    Rgb(Vec<[u8; 3]>),
    Hsl(Vec<[f64; 3]>),
}

impl ColorRows {
    fn to_f64(&self) -> Vec<[f64; 3]> {
        match self {
            ColorRows::Rgb(rows) => rows
                .iter()
                .map(|row| row.map(|channel| channel as f64))
                .collect(),
            ColorRows::Hsl(rows) => rows.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColorRows::Rgb(rows) => rows.len(),
            ColorRows::Hsl(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A batch of colors tagged with its representation
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ColorBatch {
    /// `rgb` or `hsl`
    pub representation: String,

    pub colors: ColorRows,
}

/// File format of a batch document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchFormat {
    Json,
    Yaml,
}

impl BatchFormat {
    /// `.yaml` / `.yml` are YAML, everything else is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                BatchFormat::Yaml
            }
            _ => BatchFormat::Json,
        }
    }
}

impl ColorBatch {
    /// Validate the document and build a [`ColorModel`] from it
    pub fn to_model(&self) -> Result<ColorModel, ColorError> {
        ColorModel::from_tagged(&self.representation, &self.colors.to_f64())
    }

    pub fn from_model(model: &ColorModel) -> Self {
        let representation = model.representation();
        let colors = match representation {
            Representation::Rgb => ColorRows::Rgb(model.to_rgb().into_owned()),
            Representation::Hsl => ColorRows::Hsl(model.to_hsl().into_owned()),
        };
        Self {
            representation: representation.to_string(),
            colors,
        }
    }

    pub fn parse(content: &str, format: BatchFormat) -> Result<Self, AppError> {
        let batch = match format {
            BatchFormat::Json => serde_json::from_str(content)?,
            BatchFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(batch)
    }

    /// Read a batch file, choosing the format by extension
    pub fn read(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)?;
        let batch = Self::parse(&content, BatchFormat::from_path(path))?;
        tracing::debug!(
            path = %path.display(),
            representation = %batch.representation,
            rows = batch.colors.len(),
            "Read color batch"
        );
        Ok(batch)
    }
}
