//! Provides parsing and manipulation for DNS messages

mod character_string;
mod header;
mod name;
mod packet;
mod question;
pub mod rdata;
mod resource_record;
mod rrset;
mod wire_format;

use std::convert::TryFrom;

pub use character_string::CharacterString;
pub use header::Header;
pub use name::Name;
pub use packet::Packet;
pub use question::Question;
pub use rdata::TYPE;
pub use resource_record::ResourceRecord;
pub use rrset::RRSet;

pub(crate) use wire_format::WireFormat;

const MAX_LABEL_LENGTH: usize = 63;
const MAX_NAME_LENGTH: usize = 255;
const MAX_CHARACTER_STRING_LENGTH: usize = 255;

/// Upper bound for compression pointer chasing while expanding a single name.
/// Pointers must point backwards, the cap stops maliciously long chains.
const MAX_POINTER_HOPS: usize = 64;

/// Possible QTYPE values for a Question in a DNS packet
/// Each value is described according to its own RFC
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum QTYPE {
    /// Query for a specific record [`TYPE`]
    TYPE(TYPE),
    /// A request for a transfer of an entire zone, [RFC 1035](https://tools.ietf.org/html/rfc1035)
    AXFR,
    /// A request for mailbox-related records (MB, MG or MR), [RFC 1035](https://tools.ietf.org/html/rfc1035)
    MAILB,
    /// A request for mail agent RRs (Obsolete - see MX), [RFC 1035](https://tools.ietf.org/html/rfc1035)
    MAILA,
    /// A request for all records, [RFC 1035](https://tools.ietf.org/html/rfc1035)
    ANY,
}

impl From<TYPE> for QTYPE {
    fn from(v: TYPE) -> Self {
        Self::TYPE(v)
    }
}

impl From<u16> for QTYPE {
    fn from(value: u16) -> Self {
        match value {
            252 => QTYPE::AXFR,
            253 => QTYPE::MAILB,
            254 => QTYPE::MAILA,
            255 => QTYPE::ANY,
            v => QTYPE::TYPE(TYPE::from(v)),
        }
    }
}

impl From<QTYPE> for u16 {
    fn from(val: QTYPE) -> Self {
        match val {
            QTYPE::TYPE(ty) => ty.into(),
            QTYPE::AXFR => 252,
            QTYPE::MAILB => 253,
            QTYPE::MAILA => 254,
            QTYPE::ANY => 255,
        }
    }
}

/// Possible CLASS values for a Resource in a DNS packet
/// Each value is described according to its own RFC
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CLASS {
    /// The Internet, [RFC 1035](https://tools.ietf.org/html/rfc1035)
    IN = 1,
    /// The CSNET class (Obsolete - used only for examples in some obsolete RFCs), [RFC 1035](https://tools.ietf.org/html/rfc1035)
    CS = 2,
    /// The CHAOS class, [RFC 1035](https://tools.ietf.org/html/rfc1035)
    CH = 3,
    /// Hesiod [Dyer 87], [RFC 1035](https://tools.ietf.org/html/rfc1035)
    HS = 4,
}

impl TryFrom<u16> for CLASS {
    type Error = crate::DnsWireError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        use self::CLASS::*;
        match value {
            1 => Ok(IN),
            2 => Ok(CS),
            3 => Ok(CH),
            4 => Ok(HS),
            v => Err(Self::Error::InvalidClass(v)),
        }
    }
}

/// Possible QCLASS values for a Question in a DNS packet
/// Each value is described according to its own RFC
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum QCLASS {
    /// Query for a specific record [`CLASS`]
    CLASS(CLASS),
    /// [RFC 1035](https://tools.ietf.org/html/rfc1035)
    ANY,
}

impl From<CLASS> for QCLASS {
    fn from(v: CLASS) -> Self {
        Self::CLASS(v)
    }
}

impl TryFrom<u16> for QCLASS {
    type Error = crate::DnsWireError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            v @ 1..=4 => CLASS::try_from(v).map(|x| x.into()),
            255 => Ok(QCLASS::ANY),
            v => Err(Self::Error::InvalidQClass(v)),
        }
    }
}

impl From<QCLASS> for u16 {
    fn from(val: QCLASS) -> Self {
        match val {
            QCLASS::CLASS(class) => class as u16,
            QCLASS::ANY => 255,
        }
    }
}

/// Possible OPCODE values for a DNS packet, use to specify the type of operation.
/// [RFC 1035](https://tools.ietf.org/html/rfc1035): A four bit field that specifies kind of query in this message.
/// This value is set by the originator of a query and copied into the response.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OPCODE {
    /// Normal query
    StandardQuery = 0,
    /// Inverse query (query a name by IP)
    InverseQuery = 1,
    /// Server status request
    ServerStatusRequest = 2,
    /// Reserved opcode for future use
    Reserved,
}

impl From<u16> for OPCODE {
    fn from(code: u16) -> Self {
        match code {
            0 => OPCODE::StandardQuery,
            1 => OPCODE::InverseQuery,
            2 => OPCODE::ServerStatusRequest,
            _ => OPCODE::Reserved,
        }
    }
}

/// Possible RCODE values for a DNS packet
/// [RFC 1035](https://tools.ietf.org/html/rfc1035) Response code - this 4 bit field is set as part of responses.
/// The values have the following interpretation
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RCODE {
    /// No error condition
    NoError = 0,
    /// Format error - The name server was unable to interpret the query.
    FormatError = 1,
    /// Server failure - The name server was unable to process this query due to a problem with the name server.
    ServerFailure = 2,
    /// Name Error - Meaningful only for responses from an authoritative name server,
    /// this code signifies that the domain name referenced in the query does not exist.
    NameError = 3,
    /// Not Implemented - The name server does not support the requested kind of query.
    NotImplemented = 4,
    /// Refused - The name server refuses to perform the specified operation for policy reasons.
    Refused = 5,
    /// Reserved for future use.
    Reserved,
}

impl From<u16> for RCODE {
    fn from(code: u16) -> Self {
        match code {
            0 => RCODE::NoError,
            1 => RCODE::FormatError,
            2 => RCODE::ServerFailure,
            3 => RCODE::NameError,
            4 => RCODE::NotImplemented,
            5 => RCODE::Refused,
            _ => RCODE::Reserved,
        }
    }
}

bitflags::bitflags! {
    /// Single bit flags of the header second word.
    ///
    /// The opcode and response code share the same word but are not part of this set,
    /// they are exposed as [`OPCODE`] and [`RCODE`] in the [`Header`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PacketFlag: u16 {
        /// Indicates if this packet is a query or a response.
        const RESPONSE = 0b1000_0000_0000_0000;
        /// Authoritative Answer - this bit is valid in responses, and specifies that the responding name server
        /// is an authority for the domain name in question section.
        const AUTHORITATIVE_ANSWER = 0b0000_0100_0000_0000;
        /// TrunCation - specifies that this message was truncated due to length greater than that permitted on the transmission channel.
        const TRUNCATION = 0b0000_0010_0000_0000;
        /// Recursion Desired - this bit may be set in a query and is copied into the response.
        /// If RD is set, it directs the name server to pursue the query recursively.
        const RECURSION_DESIRED = 0b0000_0001_0000_0000;
        /// Recursion Available - this be is set or cleared in a response, and denotes whether recursive query support is available in the name server.
        const RECURSION_AVAILABLE = 0b0000_0000_1000_0000;
        /// Reserved (Z) bit, must be zero in well formed messages but is carried as-is.
        const RESERVED = 0b0000_0000_0100_0000;
        /// Authentic Data - in a response, indicates that the data included has been verified by the server providing it. [RFC 4035](https://datatracker.ietf.org/doc/html/rfc4035)
        const AUTHENTIC_DATA = 0b0000_0000_0010_0000;
        /// Checking Disabled - in a query, indicates that non-verified data is acceptable to the resolver sending the query. [RFC 4035](https://datatracker.ietf.org/doc/html/rfc4035)
        const CHECKING_DISABLED = 0b0000_0000_0001_0000;
    }
}
