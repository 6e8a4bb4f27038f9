use crate::{bytes_buffer::BytesBuffer, dns::WireFormat};
use std::borrow::Cow;

use super::RR;

mod flag {
    pub const ZONE_KEY: u16 = 0b0000_0001_0000_0000;
    pub const SECURE_ENTRY_POINT: u16 = 0b0000_0000_0000_0001;
}

/// A DNS key record see [rfc4034](https://www.rfc-editor.org/rfc/rfc4034#section-2)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct DNSKEY<'a> {
    /// The flags field contains various flags that describe the key's properties
    pub flags: u16,
    /// The protocol field must be set to 3 per RFC4034
    pub protocol: u8,
    /// The algorithm field identifies the public key's cryptographic algorithm
    pub algorithm: u8,
    /// The public key field contains the cryptographic key material
    pub public_key: Cow<'a, [u8]>,
}

impl RR for DNSKEY<'_> {
    const TYPE_CODE: u16 = 48;
}

impl<'a> WireFormat<'a> for DNSKEY<'a> {
    const MINIMUM_LEN: usize = 4;

    fn parse(data: &mut BytesBuffer<'a>) -> crate::Result<Self>
    where
        Self: Sized,
    {
        let flags = data.get_u16()?;
        let protocol = data.get_u8()?;
        let algorithm = data.get_u8()?;
        let public_key = Cow::Borrowed(data.get_remaining());

        Ok(Self {
            flags,
            protocol,
            algorithm,
            public_key,
        })
    }

    fn write_to<T: std::io::Write>(&self, out: &mut T) -> crate::Result<()> {
        out.write_all(&self.flags.to_be_bytes())?;
        out.write_all(&[self.protocol])?;
        out.write_all(&[self.algorithm])?;
        out.write_all(&self.public_key)?;

        Ok(())
    }

    fn len(&self) -> usize {
        self.public_key.len() + Self::MINIMUM_LEN
    }
}

impl DNSKEY<'_> {
    /// Returns true if the Zone Key flag is set, the key signs zone data
    pub fn is_zone_key(&self) -> bool {
        self.flags & flag::ZONE_KEY != 0
    }

    /// Returns true if the Secure Entry Point flag is set, the key is a KSK
    pub fn is_secure_entry_point(&self) -> bool {
        self.flags & flag::SECURE_ENTRY_POINT != 0
    }

    /// Returns true if the protocol and flags fields hold the values RFC 4034 permits.
    /// A key that fails this check still decodes, the classification is informational.
    pub fn is_valid(&self) -> bool {
        self.protocol == 3 && matches!(self.flags, 0 | 256 | 257)
    }

    /// Computes the key tag of this key, see [rfc4034 appendix B](https://www.rfc-editor.org/rfc/rfc4034#appendix-B)
    pub fn key_tag(&self) -> u16 {
        let rdata = self
            .flags
            .to_be_bytes()
            .into_iter()
            .chain([self.protocol, self.algorithm])
            .chain(self.public_key.iter().copied());

        let mut accumulator: u32 = 0;
        for (i, byte) in rdata.enumerate() {
            if i & 1 == 0 {
                accumulator += (byte as u32) << 8;
            } else {
                accumulator += byte as u32;
            }
        }

        accumulator += (accumulator >> 16) & 0xFFFF;
        (accumulator & 0xFFFF) as u16
    }

    /// Transforms the inner data into its owned type
    pub fn into_owned<'b>(self) -> DNSKEY<'b> {
        DNSKEY {
            flags: self.flags,
            protocol: self.protocol,
            algorithm: self.algorithm,
            public_key: Cow::Owned(self.public_key.into_owned()),
        }
    }
}
