pub mod batch;
pub mod config;

pub use batch::{BatchFormat, ColorBatch, ColorRows};
pub use config::{AppConfig, InputEncoding, OutputFormat};
