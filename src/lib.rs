//! colorcrc - color conversion and CRC-8 checksums
//!
//! Command-line front end over the `hsl-color` crate plus the CRC-8 used
//! to frame color data on the wire. This library exposes modules for
//! integration testing.

pub mod checksum;
pub mod error;
pub mod models;
pub mod services;

pub use error::AppError;
