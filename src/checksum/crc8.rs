//! CRC-8 with generator x^8 + x^7 + x^4 + x^3 + x + 1 (0x9B)
//!
//! Message bits are processed most-significant-bit first with a zero
//! initial register and no final XOR. The checksum of `data` is the
//! remainder of `data` followed by one zero byte, divided by the 9-bit
//! pattern `1 1 0 0 1 1 0 1 1`. Dividing `data` followed by its own
//! checksum leaves a zero remainder, which is what [`verify`] checks.

/// Generator polynomial without its implicit leading x^8 term.
pub const POLYNOMIAL: u8 = 0x9B;

/// Generator as an explicit 9-bit pattern, including the leading 1.
const PATTERN: [u8; 9] = [1, 1, 0, 0, 1, 1, 0, 1, 1];

/// Register value after shifting each possible byte through the divider.
static TABLE: [u8; 256] = build_table();

const fn build_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Compute the CRC-8 of `data`.
///
/// With `check` set to `None`, one zero padding byte is appended before
/// division and the result is the checksum. With `check` set to a previously
/// computed checksum, the check byte takes the place of the padding and the
/// result is zero exactly when `data` and `check` agree.
///
/// Any input is accepted, including an empty slice, whose checksum is the
/// padding byte itself.
///
/// ```
/// use colorcrc::checksum::crc8;
///
/// let crc = crc8(b"testing!", None);
/// assert_eq!(crc8(b"testing!", Some(crc)), 0);
/// ```
pub fn crc8(data: &[u8], check: Option<u8>) -> u8 {
    // Table-driven shift register; bit-for-bit equal to crc8_long_division.
    // The trailing byte is never a leading bit of any division step, so it
    // only XORs into the final remainder.
    let register = data
        .iter()
        .fold(0u8, |crc, &byte| TABLE[(crc ^ byte) as usize]);
    register ^ check.unwrap_or(0)
}

/// `true` when `check` is the CRC-8 of `data`.
pub fn verify(data: &[u8], check: u8) -> bool {
    crc8(data, Some(check)) == 0
}

/// CRC-8 computed by explicit binary long division over an expanded bit array.
///
/// Slow reference form of [`crc8`], kept to pin the table-driven version to
/// the textbook definition.
pub fn crc8_long_division(data: &[u8], check: Option<u8>) -> u8 {
    let padding = check.unwrap_or(0);
    let mut bits: Vec<u8> = data
        .iter()
        .chain(std::iter::once(&padding))
        .flat_map(|&byte| (0..8).rev().map(move |shift| (byte >> shift) & 1))
        .collect();

    let steps = bits.len() - 8;
    for i in 0..steps {
        if bits[i] == 1 {
            for (bit, p) in bits[i..i + PATTERN.len()].iter_mut().zip(PATTERN) {
                *bit ^= p;
            }
        }
    }

    bits[steps..].iter().fold(0u8, |acc, &bit| (acc << 1) | bit)
}
