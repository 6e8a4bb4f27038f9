use crate::{bytes_buffer::BytesBuffer, dns::WireFormat};
use std::net::Ipv6Addr;

use super::RR;

/// Represents a Resource Address (IPv6) [rfc3596](https://tools.ietf.org/html/rfc3596)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct AAAA {
    /// a 128 bit internet address
    pub address: Ipv6Addr,
}

impl RR for AAAA {
    const TYPE_CODE: u16 = 28;
}

impl<'a> WireFormat<'a> for AAAA {
    const MINIMUM_LEN: usize = 16;

    fn parse(data: &mut BytesBuffer<'a>) -> crate::Result<Self>
    where
        Self: Sized,
    {
        if data.remaining() != 16 {
            return Err(crate::DnsWireError::InvalidRecordLength);
        }

        let address = Ipv6Addr::from(data.get_array::<16>()?);
        Ok(Self { address })
    }

    fn write_to<T: std::io::Write>(&self, out: &mut T) -> crate::Result<()> {
        out.write_all(&self.address.octets())
            .map_err(crate::DnsWireError::from)
    }
}

impl AAAA {
    /// Transforms the inner data into it's owned type
    pub fn into_owned(self) -> Self {
        self
    }
}

impl From<Ipv6Addr> for AAAA {
    fn from(address: Ipv6Addr) -> Self {
        Self { address }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_write_aaaa() {
        let address: Ipv6Addr = "2001:db8::8:800:200c:417a".parse().unwrap();
        let aaaa = AAAA { address };

        let mut bytes = Vec::new();
        assert!(aaaa.write_to(&mut bytes).is_ok());

        let aaaa = AAAA::parse(&mut BytesBuffer::new(&bytes)).unwrap();
        assert_eq!(address, aaaa.address);
        assert_eq!(bytes.len(), aaaa.len());
    }

    #[test]
    fn parse_rejects_wrong_rdata_length() {
        let bytes = [0u8; 10];
        assert_eq!(
            Err(crate::DnsWireError::InvalidRecordLength),
            AAAA::parse(&mut BytesBuffer::new(&bytes))
        );
    }
}
