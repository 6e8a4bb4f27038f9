use std::borrow::Cow;

use crate::{bytes_buffer::BytesBuffer, dns::WireFormat};

use super::RR;

/// A DS record refers to a DNSKEY record in the delegated zone, see [rfc4034](https://www.rfc-editor.org/rfc/rfc4034#section-5)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct DS<'a> {
    /// The key tag of the DNSKEY record referred to by this record
    pub key_tag: u16,
    /// The algorithm of the DNSKEY record referred to by this record
    pub algorithm: u8,
    /// The algorithm used to construct the digest
    pub digest_type: u8,
    /// The digest of the DNSKEY record this record refers to
    pub digest: Cow<'a, [u8]>,
}

impl RR for DS<'_> {
    const TYPE_CODE: u16 = 43;
}

impl DS<'_> {
    /// Transforms the inner data into its owned type
    pub fn into_owned<'b>(self) -> DS<'b> {
        DS {
            key_tag: self.key_tag,
            algorithm: self.algorithm,
            digest_type: self.digest_type,
            digest: Cow::Owned(self.digest.into_owned()),
        }
    }
}

impl<'a> WireFormat<'a> for DS<'a> {
    const MINIMUM_LEN: usize = 4;

    fn parse(data: &mut BytesBuffer<'a>) -> crate::Result<Self>
    where
        Self: Sized,
    {
        let key_tag = data.get_u16()?;
        let algorithm = data.get_u8()?;
        let digest_type = data.get_u8()?;
        let digest = Cow::Borrowed(data.get_remaining());

        Ok(Self {
            key_tag,
            algorithm,
            digest_type,
            digest,
        })
    }

    fn write_to<T: std::io::Write>(&self, out: &mut T) -> crate::Result<()> {
        out.write_all(&self.key_tag.to_be_bytes())?;
        out.write_all(&[self.algorithm, self.digest_type])?;
        out.write_all(&self.digest)
            .map_err(crate::DnsWireError::from)
    }

    fn len(&self) -> usize {
        self.digest.len() + Self::MINIMUM_LEN
    }
}
