use crate::{bytes_buffer::BytesBuffer, dns::WireFormat};
use std::borrow::Cow;

/// Raw rdata of a record type without a dedicated representation.
/// The bytes are carried untouched so the record survives a decode and encode cycle.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Opaque<'a> {
    /// The raw rdata bytes
    pub data: Cow<'a, [u8]>,
}

impl<'a> WireFormat<'a> for Opaque<'a> {
    const MINIMUM_LEN: usize = 0;

    fn parse(data: &mut BytesBuffer<'a>) -> crate::Result<Self>
    where
        Self: Sized,
    {
        Ok(Self {
            data: Cow::Borrowed(data.get_remaining()),
        })
    }

    fn write_to<T: std::io::Write>(&self, out: &mut T) -> crate::Result<()> {
        out.write_all(&self.data).map_err(crate::DnsWireError::from)
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<'a> From<&'a [u8]> for Opaque<'a> {
    fn from(data: &'a [u8]) -> Self {
        Self {
            data: Cow::Borrowed(data),
        }
    }
}

impl Opaque<'_> {
    /// Transforms the inner data into its owned type
    pub fn into_owned<'b>(self) -> Opaque<'b> {
        Opaque {
            data: self.data.into_owned().into(),
        }
    }
}
