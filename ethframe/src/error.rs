quick_error! {
    /// The error type shared by every encode and decode operation.
    ///
    /// Errors are returned at the point of violation. An encode that fails
    /// never hands out a partially built buffer and a decode that fails never
    /// hands out a partially populated frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Error {
        /// A VLAN tag carries the reserved ID `0xfff` (or larger).
        InvalidVlanId(id: u16) {
            display("invalid VLAN ID: {}", id)
        }
        /// Not enough bytes remain for a fixed-size field, a VLAN tag or the
        /// minimum payload.
        TruncatedInput {
            display("unexpected end of input")
        }
        /// The frame check sequence does not match the frame contents.
        ChecksumMismatch { expected: u32, computed: u32 } {
            display("invalid frame check sequence: expected {:#010x}, computed {:#010x}", expected, computed)
        }
        /// The output buffer cannot hold the encoded frame.
        BufferTooSmall { need: usize, have: usize } {
            display("output buffer too small: need {} bytes, have {}", need, have)
        }
    }
}

/// A specialized `Result` type for frame encoding and decoding.
pub type Result<T> = std::result::Result<T, Error>;
