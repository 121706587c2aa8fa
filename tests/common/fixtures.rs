//! Test fixtures and constants.

/// Batch documents used across conversion tests
pub mod batches {
    /// Red, green, blue primaries as RGB JSON
    pub const PRIMARIES_RGB_JSON: &str = r#"{
        "representation": "rgb",
        "colors": [[255, 0, 0], [0, 255, 0], [0, 0, 255]]
    }"#;

    /// Red, green, blue primaries as HSL YAML
    pub const PRIMARIES_HSL_YAML: &str = "\
representation: hsl
colors:
  - [0.0, 1.0, 0.5]
  - [120.0, 1.0, 0.5]
  - [240.0, 1.0, 0.5]
";

    /// Worked examples with non-trivial lightness and saturation
    pub const MIXED_RGB_YAML: &str = "\
representation: RGB
colors:
  - [255, 0, 0]
  - [0, 128, 0]
  - [64, 64, 128]
";

    /// Tag that is neither RGB nor HSL
    pub const HSV_JSON: &str = r#"{"representation": "hsv", "colors": [[0, 1, 1]]}"#;
}

/// Data/CRC pairs
pub mod frames {
    pub const TESTING: &[u8] = b"testing!";

    /// CRC-8/LTE catalogue check input and value
    pub const CHECK_INPUT: &[u8] = b"123456789";
    pub const CHECK_VALUE: u8 = 0xEA;
}
