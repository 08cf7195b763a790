//! IEEE 802.1Q VLAN tags.
//!
//! A VLAN tag sits between the source address and the EtherType of an
//! Ethernet II frame. On the wire each tag occupies four bytes: the VLAN
//! marker EtherType `0x8100` followed by a 2-byte tag control field:
//!
//! ```text
//!  15  13  12  11                     0
//! +-------+---+------------------------+
//! |  PCP  |DEI|          VID           |
//! +-------+---+------------------------+
//! ```
//!
//! - **PCP**: 3-bit IEEE 802.1p priority class.
//! - **DEI**: drop eligible indicator.
//! - **VID**: 12-bit VLAN identifier. `0x000` ([`VLAN_NONE`]) marks a
//!   priority-only tag, `0xfff` ([`VLAN_MAX`]) is reserved and rejected.
//!
//! This module only handles the 2-byte tag body. Chaining tags and writing
//! the marker is done by [`Frame`](crate::ether::Frame).
//!
//! # Example
//!
//! ```rust
//! use ethframe::vlan::VlanTag;
//!
//! let tag = VlanTag::new(5, true, 666);
//! let bytes = tag.to_bytes()?;
//! assert_eq!(bytes, [0xb2, 0x9a]);
//! assert_eq!(VlanTag::from_bytes(&bytes)?, tag);
//! # Ok::<(), ethframe::Error>(())
//! ```

use byteorder::{ByteOrder, NetworkEndian};

use crate::{Error, Result};

/// The VLAN ID of a priority-only tag that carries no VLAN membership.
pub const VLAN_NONE: u16 = 0x000;

/// The reserved VLAN ID. It may never be transmitted in a tag.
pub const VLAN_MAX: u16 = 0xfff;

/// The length of the tag body, excluding the VLAN marker EtherType.
pub const VLAN_TAG_BODY_LEN: usize = 2;

/// The on-wire length of a tag, including the VLAN marker EtherType.
pub const VLAN_TAG_LEN: usize = 4;

/// An IEEE 802.1Q VLAN tag.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Default)]
pub struct VlanTag {
    /// IEEE 802.1p priority level. Only the low 3 bits are transmitted.
    pub priority: u8,

    /// Whether the frame may be dropped in the presence of congestion.
    pub drop_eligible: bool,

    /// The VLAN ID, valid from `0x000` to `0xffe`.
    pub id: u16,
}

impl VlanTag {
    /// Create a new tag.
    pub const fn new(priority: u8, drop_eligible: bool, id: u16) -> Self {
        Self {
            priority,
            drop_eligible,
            id,
        }
    }

    /// Return the packed 2-byte tag body.
    ///
    /// Fails with [`Error::InvalidVlanId`] if the ID is `0xfff` or larger.
    pub fn to_bytes(&self) -> Result<[u8; VLAN_TAG_BODY_LEN]> {
        let mut bytes = [0; VLAN_TAG_BODY_LEN];
        self.write_to(&mut bytes[..])?;
        Ok(bytes)
    }

    /// Write the packed tag body into `buf`, which must be exactly 2 bytes.
    pub fn write_to(&self, buf: &mut [u8]) -> Result<()> {
        if buf.len() != VLAN_TAG_BODY_LEN {
            return Err(Error::TruncatedInput);
        }
        NetworkEndian::write_u16(buf, self.tci()?);
        Ok(())
    }

    /// Parse a tag from exactly 2 bytes of tag body.
    ///
    /// Fails with [`Error::TruncatedInput`] for any other length, and with
    /// [`Error::InvalidVlanId`] if all twelve ID bits are set.
    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        if buf.len() != VLAN_TAG_BODY_LEN {
            return Err(Error::TruncatedInput);
        }

        let tci = NetworkEndian::read_u16(buf);
        let tag = Self {
            priority: (tci >> 13) as u8,
            drop_eligible: tci & 0x1000 != 0,
            id: tci & 0x0fff,
        };
        tag.check_id()?;
        Ok(tag)
    }

    // Tag control information, the 16-bit word behind the tag body.
    fn tci(&self) -> Result<u16> {
        self.check_id()?;
        let mut tci = ((self.priority & 0x07) as u16) << 13;
        if self.drop_eligible {
            tci |= 0x1000;
        }
        Ok(tci | self.id)
    }

    #[inline]
    pub(crate) fn check_id(&self) -> Result<()> {
        if self.id >= VLAN_MAX {
            return Err(Error::InvalidVlanId(self.id));
        }
        Ok(())
    }
}
