//! Checksums for framing transported color data
//!
//! Currently a single fixed CRC-8 variant; see [`crc8`].

mod crc8;

pub use crc8::{crc8, crc8_long_division, verify, POLYNOMIAL};
