use hsl_color::{ColorModel, Representation, Rgb};
use std::path::Path;

use crate::error::AppError;
use crate::models::ColorBatch;

/// Convert a batch document into `target`
pub fn convert_batch(batch: &ColorBatch, target: Representation) -> Result<ColorBatch, AppError> {
    let model = batch.to_model()?;
    tracing::debug!(
        from = %model.representation(),
        to = %target,
        rows = model.len(),
        "Converting color batch"
    );
    Ok(ColorBatch::from_model(&model.convert(target)))
}

/// Read a batch file and convert it into `target`
pub fn convert_file(path: &Path, target: Representation) -> Result<ColorBatch, AppError> {
    let batch = ColorBatch::read(path)?;
    convert_batch(&batch, target)
}

/// Parse a byte given as decimal (`155`) or hex (`0x9B`)
pub fn parse_byte(value: &str) -> Result<u8, AppError> {
    let value = value.trim();
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(digits) => u8::from_str_radix(digits, 16),
        None => value.parse::<u8>(),
    };
    parsed.map_err(|e| AppError::InvalidArgument(format!("'{value}' is not a byte: {e}")))
}

/// Parse RGB given either as one hex color or as three channel values
pub fn parse_rgb_args(args: &[String]) -> Result<Rgb, AppError> {
    match args {
        [hex] => Ok(hex.parse::<Rgb>()?),
        [r, g, b] => {
            let channel = |value: &String| {
                value.trim().parse::<u8>().map_err(|e| {
                    AppError::InvalidArgument(format!("'{value}' is not an RGB channel: {e}"))
                })
            };
            Ok(Rgb::new(channel(r)?, channel(g)?, channel(b)?))
        }
        _ => Err(AppError::InvalidArgument(format!(
            "expected a hex color or 3 channels, got {} values",
            args.len()
        ))),
    }
}

/// Build a single-row model from parsed RGB arguments
pub fn rgb_model(args: &[String]) -> Result<ColorModel, AppError> {
    Ok(ColorModel::from(parse_rgb_args(args)?))
}
