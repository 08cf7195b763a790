#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

//! Encode and decode IEEE 802.3 Ethernet II frames.
//!
//! A [`Frame`](ether::Frame) carries two hardware addresses, a chain of
//! zero or more IEEE 802.1Q VLAN tags, a terminal EtherType and a payload.
//! Frames are converted to and from the exact byte layout seen on the wire,
//! optionally followed by a 4-byte IEEE CRC32 frame check sequence.
//!
//! # Example
//!
//! ```rust
//! use ethframe::ether::{EtherAddr, EtherType, Frame};
//! use ethframe::vlan::VlanTag;
//!
//! let frame = Frame {
//!     destination: EtherAddr::BROADCAST,
//!     source: EtherAddr([0x00, 0x50, 0x56, 0xae, 0x76, 0xf5]),
//!     vlan: vec![VlanTag::new(5, false, 100)],
//!     ether_type: EtherType::ARP,
//!     payload: vec![0xde, 0xad, 0xbe, 0xef],
//! };
//!
//! let bytes = frame.encode_with_fcs()?;
//! assert_eq!(bytes.len(), 14 + 4 + 46 + 4);
//!
//! let decoded = Frame::decode_with_fcs(&bytes)?;
//! assert_eq!(decoded.vlan, frame.vlan);
//! assert_eq!(&decoded.payload[..4], &frame.payload[..]);
//! assert_eq!(decoded.payload.len(), 46);
//! # Ok::<(), ethframe::Error>(())
//! ```

#[macro_use]
extern crate quick_error;

#[macro_use]
mod macros;

mod error;
pub use error::{Error, Result};

pub mod ether;
pub mod fcs;
pub mod vlan;
