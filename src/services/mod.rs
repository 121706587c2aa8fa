pub mod converter;
pub mod report;

pub use converter::{convert_batch, convert_file, parse_byte, parse_rgb_args, rgb_model};
pub use report::{render, CrcReport, TextReport, VerifyReport};
