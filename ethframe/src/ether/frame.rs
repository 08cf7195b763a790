use bytes::{Buf, BufMut};

use super::{EtherAddr, EtherType};
use crate::fcs::{self, FCS_LEN};
use crate::vlan::{VlanTag, VLAN_TAG_BODY_LEN, VLAN_TAG_LEN};
use crate::{Error, Result};

/// The length of the two hardware addresses plus a single EtherType.
pub const ETHER_HEADER_LEN: usize = 14;

/// The minimum payload length of a frame without VLAN tags. Shorter payloads
/// are zero-padded on encode.
pub const MIN_PAYLOAD_LEN: usize = 46;

/// An IEEE 802.3 Ethernet II frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    /// Destination hardware address. [`EtherAddr::BROADCAST`] delivers the
    /// frame to every device on the LAN segment.
    pub destination: EtherAddr,

    /// Source hardware address.
    pub source: EtherAddr,

    /// 802.1Q VLAN tags in on-wire order, outermost first. Empty when the
    /// frame is untagged.
    pub vlan: Vec<VlanTag>,

    /// Identifies the protocol carried in the payload.
    pub ether_type: EtherType,

    /// The frame payload.
    pub payload: Vec<u8>,
}

impl Frame {
    /// The exact number of bytes produced by [`Frame::encode`].
    pub fn encoded_len(&self) -> usize {
        ETHER_HEADER_LEN
            + VLAN_TAG_LEN * self.vlan.len()
            + self.payload.len().max(MIN_PAYLOAD_LEN)
    }

    /// Encode the frame into the front of `buf` and return the number of
    /// bytes written.
    ///
    /// Payloads shorter than 46 bytes are followed by zero padding. Fails with
    /// [`Error::BufferTooSmall`] if `buf` is shorter than
    /// [`Frame::encoded_len`], and with [`Error::InvalidVlanId`] if any tag
    /// carries a reserved ID. `buf` is left untouched on failure.
    pub fn encode_into(&self, buf: &mut [u8]) -> Result<usize> {
        let len = self.encoded_len();
        if buf.len() < len {
            return Err(Error::BufferTooSmall {
                need: len,
                have: buf.len(),
            });
        }
        for tag in self.vlan.iter() {
            tag.check_id()?;
        }

        let mut out = &mut buf[..len];
        out.put_slice(self.destination.as_bytes());
        out.put_slice(self.source.as_bytes());
        for tag in self.vlan.iter() {
            out.put_u16(EtherType::VLAN.raw());
            out.put_slice(&tag.to_bytes()?);
        }
        out.put_u16(self.ether_type.raw());
        out.put_slice(&self.payload);

        let padding = out.remaining_mut();
        out.put_bytes(0, padding);

        Ok(len)
    }

    /// Allocate a buffer and encode the frame into it.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut buf = vec![0; self.encoded_len()];
        self.encode_into(&mut buf[..])?;
        Ok(buf)
    }

    /// Encode the frame followed by its 4-byte IEEE CRC32 frame check
    /// sequence.
    pub fn encode_with_fcs(&self) -> Result<Vec<u8>> {
        let len = self.encoded_len();
        let mut buf = vec![0; len + FCS_LEN];
        self.encode_into(&mut buf[..len])?;
        fcs::write_trailer(&mut buf[..]);
        Ok(buf)
    }

    /// Decode a frame from `data`.
    ///
    /// Every VLAN tag in the chain is collected until a non-VLAN EtherType is
    /// found. All bytes after that EtherType, padding included, become the
    /// payload.
    ///
    /// The payload must hold at least 46 bytes, less 4 bytes if the frame
    /// carried at least one VLAN tag. A frame without tags whose payload is
    /// exactly 42 bytes is also accepted, because some network stacks strip
    /// the VLAN tag without re-padding the frame. This slack is deliberately
    /// narrow: it is credited once no matter how many tags were present, and
    /// an untagged payload of 43 to 45 bytes is still rejected. Keep it that
    /// way unless the stripping behavior it models changes.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < ETHER_HEADER_LEN {
            return Err(Error::TruncatedInput);
        }

        let mut cursor = data;
        let destination = EtherAddr::from_bytes(&cursor[..6]);
        cursor.advance(6);
        let source = EtherAddr::from_bytes(&cursor[..6]);
        cursor.advance(6);

        let mut vlan = Vec::new();
        let mut ether_type = EtherType::from(cursor.get_u16());
        while ether_type == EtherType::VLAN {
            // A tag body and the EtherType after it.
            if cursor.remaining() < VLAN_TAG_LEN {
                return Err(Error::TruncatedInput);
            }
            vlan.push(VlanTag::from_bytes(&cursor[..VLAN_TAG_BODY_LEN])?);
            cursor.advance(VLAN_TAG_BODY_LEN);
            ether_type = EtherType::from(cursor.get_u16());
        }

        check_payload_len(cursor.remaining(), vlan.len())?;

        Ok(Self {
            destination,
            source,
            vlan,
            ether_type,
            payload: cursor.to_vec(),
        })
    }

    /// Verify the trailing frame check sequence of `data`, then decode the
    /// frame it covers.
    ///
    /// Fails with [`Error::ChecksumMismatch`] without decoding anything if the
    /// checksum does not match.
    pub fn decode_with_fcs(data: &[u8]) -> Result<Self> {
        Self::decode(fcs::verify(data)?)
    }
}

// At most one tag is ever stripped, so at most one tag's worth of bytes is
// forgiven.
fn check_payload_len(payload_len: usize, tags: usize) -> Result<()> {
    let mut counted = tags.min(1);
    if counted == 0 && payload_len + VLAN_TAG_LEN == MIN_PAYLOAD_LEN {
        counted = 1;
    }

    if payload_len + VLAN_TAG_LEN * counted < MIN_PAYLOAD_LEN {
        return Err(Error::TruncatedInput);
    }
    Ok(())
}
