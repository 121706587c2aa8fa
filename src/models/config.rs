use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Environment variable naming the config file when `--config` is absent
pub const CONFIG_ENV: &str = "CONFIG_FILE";

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    /// How results are printed
    #[serde(default)]
    pub output: OutputFormat,

    /// Decimal places for HSL channels in text output
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// How CRC data arguments are turned into bytes
    #[serde(default)]
    pub encoding: InputEncoding,
}

fn default_precision() -> usize {
    5
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Interpretation of data passed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputEncoding {
    /// Raw UTF-8 bytes of the argument
    #[default]
    Utf8,
    /// Hex digits, optionally `0x`-prefixed, whitespace ignored
    Hex,
}

impl InputEncoding {
    /// Turn a command-line argument into the bytes to checksum
    pub fn decode(self, data: &str) -> Result<Vec<u8>, AppError> {
        match self {
            InputEncoding::Utf8 => Ok(data.as_bytes().to_vec()),
            InputEncoding::Hex => {
                let trimmed = data.trim();
                let digits: String = trimmed
                    .strip_prefix("0x")
                    .or_else(|| trimmed.strip_prefix("0X"))
                    .unwrap_or(trimmed)
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect();
                Ok(hex::decode(digits)?)
            }
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            output = ?config.output,
            precision = config.precision,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Load configuration, falling back to defaults if the file is unusable
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file configured, using defaults");
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Replace the configured output format when a command-line flag gives one
    pub fn with_output_override(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(format) = format {
            self.output = format;
        }
        self
    }

    /// Encoding for CRC data arguments; `force_hex` wins over the config
    pub fn data_encoding(&self, force_hex: bool) -> InputEncoding {
        if force_hex {
            InputEncoding::Hex
        } else {
            self.encoding
        }
    }

    /// Config file path from an explicit flag or the `CONFIG_FILE` env var
    pub fn resolve_path(flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            precision: default_precision(),
            encoding: InputEncoding::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.precision, 5);
        assert_eq!(config.encoding, InputEncoding::Utf8);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = "output: json\nprecision: 2\nencoding: hex\n";
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.precision, 2);
        assert_eq!(config.encoding, InputEncoding::Hex);
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("output: yaml\n").unwrap();

        assert_eq!(config.output, OutputFormat::Yaml);
        assert_eq!(config.precision, 5);
        assert_eq!(config.encoding, InputEncoding::Utf8);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config: AppConfig = serde_yaml::from_str("precision: 3\ncolour: red\n").unwrap();
        assert_eq!(config.precision, 3);
    }

    #[test]
    fn test_invalid_output_format_is_error() {
        let result: Result<AppConfig, _> = serde_yaml::from_str("output: xml\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "precision: 1").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.precision, 1);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Some(Path::new("/nonexistent/config.yaml")));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(AppConfig::load_or_default(None), AppConfig::default());
    }

    #[test]
    fn test_resolve_path_prefers_flag() {
        let path = AppConfig::resolve_path(Some(PathBuf::from("flag.yaml")));
        assert_eq!(path, Some(PathBuf::from("flag.yaml")));
    }

    #[test]
    fn test_output_override() {
        let config = AppConfig {
            output: OutputFormat::Yaml,
            ..AppConfig::default()
        };
        assert_eq!(
            config.clone().with_output_override(Some(OutputFormat::Json)).output,
            OutputFormat::Json
        );
        assert_eq!(config.with_output_override(None).output, OutputFormat::Yaml);
    }

    #[test]
    fn test_hex_flag_wins_over_config_encoding() {
        let utf8 = AppConfig::default();
        assert_eq!(utf8.data_encoding(true), InputEncoding::Hex);
        assert_eq!(utf8.data_encoding(false), InputEncoding::Utf8);

        let hex = AppConfig {
            encoding: InputEncoding::Hex,
            ..AppConfig::default()
        };
        assert_eq!(hex.data_encoding(false), InputEncoding::Hex);
    }

    #[test]
    fn test_decode_utf8() {
        let bytes = InputEncoding::Utf8.decode("testing!").unwrap();
        assert_eq!(bytes, b"testing!");
    }

    #[test]
    fn test_decode_hex() {
        assert_eq!(InputEncoding::Hex.decode("deadbeef").unwrap(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(InputEncoding::Hex.decode("0x01 02 ff").unwrap(), vec![0x01, 0x02, 0xFF]);
        assert!(InputEncoding::Hex.decode("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_hex_invalid() {
        assert!(matches!(
            InputEncoding::Hex.decode("zz"),
            Err(AppError::InvalidHex(_))
        ));
        assert!(matches!(
            InputEncoding::Hex.decode("abc"),
            Err(AppError::InvalidHex(_))
        ));
    }
}
