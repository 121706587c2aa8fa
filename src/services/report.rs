//! Rendering command results as text, JSON or YAML

use serde::Serialize;

use crate::checksum;
use crate::error::AppError;
use crate::models::{AppConfig, ColorBatch, ColorRows, OutputFormat};

/// Human-readable rendering used for [`OutputFormat::Text`]
pub trait TextReport {
    fn to_text(&self, precision: usize) -> String;
}

/// Render a result in the configured output format, without a trailing newline
pub fn render<T>(report: &T, config: &AppConfig) -> Result<String, AppError>
where
    T: Serialize + TextReport,
{
    let rendered = match config.output {
        OutputFormat::Text => report.to_text(config.precision),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
        OutputFormat::Yaml => serde_yaml::to_string(report)?,
    };
    Ok(rendered.trim_end_matches('\n').to_string())
}

/// Result of a CRC-8 computation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrcReport {
    /// Number of data bytes, excluding the padding or check byte
    pub length: usize,
    pub crc: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<u8>,
}

impl CrcReport {
    pub fn compute(data: &[u8], check: Option<u8>) -> Self {
        let crc = checksum::crc8(data, check);
        tracing::debug!(length = data.len(), ?check, crc, "Computed CRC-8");
        Self {
            length: data.len(),
            crc,
            check,
        }
    }
}

impl TextReport for CrcReport {
    fn to_text(&self, _precision: usize) -> String {
        format!("0x{:02X}", self.crc)
    }
}

/// Result of checking data against a CRC-8 byte
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifyReport {
    pub valid: bool,
    /// Remainder after dividing data plus check byte; zero when valid
    pub residue: u8,
}

impl VerifyReport {
    pub fn check(data: &[u8], check: u8) -> Self {
        Self {
            valid: checksum::verify(data, check),
            residue: checksum::crc8(data, Some(check)),
        }
    }
}

impl TextReport for VerifyReport {
    fn to_text(&self, _precision: usize) -> String {
        if self.valid {
            "ok".to_string()
        } else {
            format!("corrupted (residue 0x{:02X})", self.residue)
        }
    }
}

impl TextReport for ColorBatch {
    /// One `rgb(r, g, b)` or `hsl(h, s, l)` line per row
    fn to_text(&self, precision: usize) -> String {
        let label = &self.representation;
        let lines: Vec<String> = match &self.colors {
            ColorRows::Rgb(rows) => rows
                .iter()
                .map(|[r, g, b]| format!("{label}({r}, {g}, {b})"))
                .collect(),
            ColorRows::Hsl(rows) => rows
                .iter()
                .map(|[h, s, l]| format!("{label}({h:.precision$}, {s:.precision$}, {l:.precision$})"))
                .collect(),
        };
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hsl_color::ColorModel;
    use pretty_assertions::assert_eq;

    fn config(output: OutputFormat) -> AppConfig {
        AppConfig {
            output,
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_crc_text() {
        let report = CrcReport {
            length: 8,
            crc: 0x0A,
            check: None,
        };
        assert_eq!(render(&report, &config(OutputFormat::Text)).unwrap(), "0x0A");
    }

    #[test]
    fn test_crc_json_skips_missing_check() {
        let report = CrcReport {
            length: 3,
            crc: 155,
            check: None,
        };
        let json: serde_json::Value =
            serde_json::from_str(&render(&report, &config(OutputFormat::Json)).unwrap()).unwrap();
        assert_eq!(json["crc"], 155);
        assert_eq!(json["length"], 3);
        assert!(json.get("check").is_none());
    }

    #[test]
    fn test_verify_text() {
        let ok = VerifyReport {
            valid: true,
            residue: 0,
        };
        assert_eq!(ok.to_text(5), "ok");

        let bad = VerifyReport {
            valid: false,
            residue: 0x3C,
        };
        assert_eq!(bad.to_text(5), "corrupted (residue 0x3C)");
    }

    #[test]
    fn test_verify_yaml() {
        let report = VerifyReport {
            valid: true,
            residue: 0,
        };
        let yaml = render(&report, &config(OutputFormat::Yaml)).unwrap();
        assert_eq!(yaml, "valid: true\nresidue: 0");
    }

    #[test]
    fn test_json_and_yaml_have_no_trailing_newline() {
        let report = CrcReport::compute(b"abc", None);
        for output in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Yaml] {
            let rendered = render(&report, &config(output)).unwrap();
            assert!(!rendered.ends_with('\n'), "{output:?}: {rendered:?}");
        }
    }

    #[test]
    fn test_crc_report_compute() {
        let report = CrcReport::compute(b"123456789", None);
        assert_eq!(
            report,
            CrcReport {
                length: 9,
                crc: 0xEA,
                check: None,
            }
        );
        assert_eq!(CrcReport::compute(b"123456789", Some(0xEA)).crc, 0);
    }

    #[test]
    fn test_verify_report_check() {
        let crc = checksum::crc8(b"testing!", None);
        assert_eq!(
            VerifyReport::check(b"testing!", crc),
            VerifyReport {
                valid: true,
                residue: 0,
            }
        );

        let bad = VerifyReport::check(b"testing!", 0x00);
        assert!(!bad.valid);
        assert_eq!(bad.residue, crc);
    }

    #[test]
    fn test_rgb_batch_text() {
        let batch = ColorBatch::from_model(&ColorModel::from_rgb_batch(vec![[255, 0, 0], [1, 2, 3]]));
        assert_eq!(batch.to_text(5), "rgb(255, 0, 0)\nrgb(1, 2, 3)");
    }

    #[test]
    fn test_hsl_batch_text_precision() {
        let batch = ColorBatch::from_model(&ColorModel::from_hsl(120.0, 1.0, 0.25098039));
        assert_eq!(batch.to_text(3), "hsl(120.000, 1.000, 0.251)");
        assert_eq!(batch.to_text(0), "hsl(120, 1, 0)");
    }
}
