use crate::{bytes_buffer::BytesBuffer, dns::WireFormat};
use std::net::Ipv4Addr;

use super::RR;

/// Represents a Resource Address (IPv4)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct A {
    /// a 32 bit internet address
    pub address: Ipv4Addr,
}

impl RR for A {
    const TYPE_CODE: u16 = 1;
}

impl<'a> WireFormat<'a> for A {
    const MINIMUM_LEN: usize = 4;

    fn parse(data: &mut BytesBuffer<'a>) -> crate::Result<Self>
    where
        Self: Sized,
    {
        if data.remaining() != 4 {
            return Err(crate::DnsWireError::InvalidRecordLength);
        }

        let address = Ipv4Addr::from(data.get_array::<4>()?);
        Ok(Self { address })
    }

    fn write_to<T: std::io::Write>(&self, out: &mut T) -> crate::Result<()> {
        out.write_all(&self.address.octets())
            .map_err(crate::DnsWireError::from)
    }
}

impl A {
    /// Transforms the inner data into it's owned type
    pub fn into_owned(self) -> Self {
        self
    }
}

impl From<Ipv4Addr> for A {
    fn from(address: Ipv4Addr) -> Self {
        Self { address }
    }
}
