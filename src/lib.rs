#![warn(missing_docs)]
#![allow(clippy::upper_case_acronyms)]

//! Pure Rust implementation to work with DNS messages in their binary wire format
//!
//! You can parse or write a DNS message by using the [`Packet`] struct
//!
//! ```rust
//! use dns_wire::Packet;
//!
//! let bytes = b"\x00\x03\x01\x00\x00\x01\x00\x00\x00\x00\x00\x00\x06\x67\x6f\x6f\x67\x6c\x65\x03\x63\x6f\x6d\x00\x00\x01\x00\x01";
//! let packet = Packet::parse(&bytes[..]);
//! assert!(packet.is_ok());
//! ```
//!
//! Records that share an owner name, class and type are grouped into [`RRSet`]s
//! when a message is parsed, and the header section counts are recomputed from
//! the actual section contents.

mod bytes_buffer;
mod dns;
mod dns_wire_error;

pub use dns::*;
pub use dns_wire_error::DnsWireError;

/// Alias type for Result<T, DnsWireError>;
pub type Result<T> = std::result::Result<T, DnsWireError>;
