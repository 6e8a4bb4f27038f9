use crate::{bytes_buffer::BytesBuffer, dns::WireFormat};
use std::borrow::Cow;

use super::RR;

pub mod masks {
    pub const DNSSEC_OK: u16 = 0b1000_0000_0000_0000;
}

/// OPT is the EDNS0 pseudo-rr used to carry control information,
/// see [rfc6891](https://datatracker.ietf.org/doc/html/rfc6891).
///
/// It reuses the class slot for the requestor's UDP payload size and the ttl
/// slot for the extended rcode, the EDNS version and the flags word.
///
/// Writing an OPT record always emits a zero extended rcode and version and
/// forces the DNSSEC OK bit on, whatever this struct holds.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct OPT<'a> {
    /// UDP payload size supported by the requestor
    pub udp_payload_size: u16,
    /// Upper 8 bits of the extended 12-bit RCODE
    pub extended_rcode: u8,
    /// EDNS version supported by the requestor
    pub version: u8,
    /// The EDNS flags word, only the DNSSEC OK bit is defined so far
    pub flags: u16,
    /// The variable part of this OPT RR, raw option bytes
    pub data: Cow<'a, [u8]>,
}

impl RR for OPT<'_> {
    const TYPE_CODE: u16 = 41;
}

impl<'a> WireFormat<'a> for OPT<'a> {
    const MINIMUM_LEN: usize = 0;

    fn parse(data: &mut BytesBuffer<'a>) -> crate::Result<Self>
    where
        Self: Sized,
    {
        // udp payload size comes from the class slot
        let udp_payload_size = data.get_u16()?;
        // extended rcode, version and flags come from the ttl slot
        let extended_rcode = data.get_u8()?;
        let version = data.get_u8()?;
        let flags = data.get_u16()?;

        // rdlength, already bounded by the enclosing buffer
        data.advance(2)?;

        let data = Cow::Borrowed(data.get_remaining());

        Ok(Self {
            udp_payload_size,
            extended_rcode,
            version,
            flags,
            data,
        })
    }

    fn write_to<T: std::io::Write>(&self, out: &mut T) -> crate::Result<()> {
        out.write_all(&self.data).map_err(crate::DnsWireError::from)
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

impl OPT<'_> {
    /// Returns true if the DNSSEC OK bit is set
    pub fn dnssec_ok(&self) -> bool {
        self.flags & masks::DNSSEC_OK != 0
    }

    /// The value written to the ttl slot when this record is encoded.
    /// Always zero extended rcode and version with the DNSSEC OK bit set.
    pub(crate) fn encode_ttl(&self) -> u32 {
        masks::DNSSEC_OK as u32
    }

    /// Transforms the inner data into its owned type
    pub fn into_owned<'b>(self) -> OPT<'b> {
        OPT {
            udp_payload_size: self.udp_payload_size,
            extended_rcode: self.extended_rcode,
            version: self.version,
            flags: self.flags,
            data: self.data.into_owned().into(),
        }
    }
}
