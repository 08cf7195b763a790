//! Ethernet II frames.
//!
//! The layout of an encoded frame, all fields in network byte order:
//!
//! ```text
//! +-------------+-------------+------------------+-----------+-------------+-----+
//! | destination |   source    | k x (0x8100+tag) | EtherType |   payload   | FCS |
//! |   6 bytes   |   6 bytes   |    4k bytes      |  2 bytes  | >= 46 bytes | (4) |
//! +-------------+-------------+------------------+-----------+-------------+-----+
//! ```
//!
//! The FCS trailer is only present when the `*_with_fcs` methods of
//! [`Frame`] are used.

use core::fmt;

enum_sim! {
    /// An enum-like type for representing the EtherType of an Ethernet frame.
    pub struct EtherType (u16) {
        /// Frame payload is Ipv4 protocol.
        IPV4 = 0x0800,
        /// Frame payload is Arp protocol.
        ARP =  0x0806,
        /// An IEEE 802.1Q VLAN tag follows.
        VLAN = 0x8100,
        /// Frame payload is Ipv6 protocol.
        IPV6 = 0x86DD,
    }
}

/// A six-octet Ethernet II address.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub struct EtherAddr(pub [u8; 6]);

impl EtherAddr {
    /// The broadcast address.
    pub const BROADCAST: EtherAddr = EtherAddr([0xff; 6]);

    /// Construct an Ethernet address from a sequence of octets, in big-endian.
    ///
    /// # Panics
    /// The function panics if `data` is not six octets long.
    pub fn from_bytes(data: &[u8]) -> EtherAddr {
        let mut bytes = [0; 6];
        bytes.copy_from_slice(data);
        EtherAddr(bytes)
    }

    /// Return an Ethernet address as a sequence of octets, in big-endian.
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Query whether the address is an unicast address.
    pub fn is_unicast(&self) -> bool {
        !(self.is_broadcast() || self.is_multicast())
    }

    /// Query whether this address is the broadcast address.
    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// Query whether the 'multicast' bit in the OUI is set.
    pub const fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// Query whether the 'locally administered' bit in the OUI is set.
    pub const fn is_local(&self) -> bool {
        self.0[0] & 0x02 != 0
    }

    /// Parse a string with the form 'Aa:0b:Cc:11:02:33' into `EtherAddr`.
    ///
    /// Every octet must be exactly two hex digits.
    pub fn parse_from<T: AsRef<str>>(s: T) -> Option<Self> {
        let mut result = [0; 6];
        let mut octets = s.as_ref().split(':');
        for byte in result.iter_mut() {
            let octet = octets.next()?;
            if octet.len() != 2 || !octet.chars().all(|c| c.is_ascii_hexdigit()) {
                return None;
            }
            *byte = u8::from_str_radix(octet, 16).ok()?;
        }
        if octets.next().is_some() {
            return None;
        }
        Some(Self(result))
    }
}

impl fmt::Display for EtherAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]
        )
    }
}

mod frame;
pub use frame::{Frame, ETHER_HEADER_LEN, MIN_PAYLOAD_LEN};
