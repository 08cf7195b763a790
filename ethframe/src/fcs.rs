//! Provide utility functions for the Ethernet frame check sequence.
//!
//! The frame check sequence is an IEEE CRC32 computed over every byte of the
//! encoded frame and appended to it in network byte order.

use byteorder::{ByteOrder, NetworkEndian};

use crate::{Error, Result};

/// The length of the frame check sequence trailer.
pub const FCS_LEN: usize = 4;

/// Compute the IEEE CRC32 of `data`.
#[inline]
pub fn checksum(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}

/// Fill the last 4 bytes of `buf` with the checksum of the bytes before them.
///
/// # Panics
/// The function panics if `buf` is shorter than 4 bytes.
pub fn write_trailer(buf: &mut [u8]) {
    assert!(buf.len() >= FCS_LEN);
    let (body, trailer) = buf.split_at_mut(buf.len() - FCS_LEN);
    NetworkEndian::write_u32(trailer, checksum(body));
}

/// Check the trailing frame check sequence of `buf` and return the bytes it
/// covers.
pub fn verify(buf: &[u8]) -> Result<&[u8]> {
    if buf.len() < FCS_LEN {
        return Err(Error::TruncatedInput);
    }

    let (body, trailer) = buf.split_at(buf.len() - FCS_LEN);
    let expected = NetworkEndian::read_u32(trailer);
    let computed = checksum(body);
    if expected != computed {
        return Err(Error::ChecksumMismatch { expected, computed });
    }
    Ok(body)
}
