//! Contains RData implementations

use crate::bytes_buffer::BytesBuffer;
use crate::Name;

use super::WireFormat;

mod macros;

mod a;
mod aaaa;
mod dnskey;
mod ds;
mod hinfo;
mod naptr;
mod nsec;
mod nsec3;
mod nsec3param;
mod opaque;
mod opt;
mod rrsig;
mod soa;
mod sshfp;
mod txt;

pub use a::A;
pub use aaaa::AAAA;
pub use dnskey::DNSKEY;
pub use ds::DS;
pub use hinfo::HINFO;
pub use naptr::NAPTR;
pub use nsec::{TypeBitMap, NSEC};
pub use nsec3::NSEC3;
pub use nsec3param::NSEC3PARAM;
pub use opaque::Opaque;
pub use opt::OPT;
pub use rrsig::RRSIG;
pub use soa::SOA;
pub use sshfp::SSHFP;
pub use txt::TXT;

use macros::{rdata_enum, rr_wrapper};

pub(crate) trait RR {
    const TYPE_CODE: u16;
}

rr_wrapper! {
    #[doc="Canonical name for an alias, [RFC 1035](https://tools.ietf.org/html/rfc1035)"]
    CNAME: Name = 5
}

rr_wrapper! {
    #[doc="Domain name pointer, [RFC 1035](https://tools.ietf.org/html/rfc1035)"]
    PTR: Name = 12
}

rr_wrapper! {
    #[doc="Sender Policy Framework record, stores TXT shaped data, [RFC 4408](https://datatracker.ietf.org/doc/html/rfc4408)"]
    SPF: TXT = 99
}

rdata_enum! {
    A,
    AAAA,
    CNAME<'a>,
    PTR<'a>,
    HINFO<'a>,
    NAPTR<'a>,
    SOA<'a>,
    TXT<'a>,
    SPF<'a>,
    SSHFP<'a>,
    DS<'a>,
    DNSKEY<'a>,
    NSEC<'a>,
    NSEC3<'a>,
    NSEC3PARAM<'a>,
    RRSIG<'a>,
    OPT<'a>,
}
