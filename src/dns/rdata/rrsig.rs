use crate::{
    bytes_buffer::BytesBuffer,
    dns::{Name, WireFormat},
};
use std::borrow::Cow;

use super::RR;

/// An RRSIG record holds the signature for an RRset, see [rfc4034](https://www.rfc-editor.org/rfc/rfc4034#section-3)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct RRSIG<'a> {
    /// The type of RR that is covered by this RRSIG
    pub type_covered: u16,
    /// The cryptographic algorithm used for the signature
    pub algorithm: u8,
    /// The number of labels in the original RRSIG RR owner name
    pub labels: u8,
    /// The original TTL value of the covered record
    pub original_ttl: u32,
    /// When the signature expires (seconds since Jan 1 1970)
    pub signature_expiration: u32,
    /// When the signature was created (seconds since Jan 1 1970)
    pub signature_inception: u32,
    /// Key tag value of the DNSKEY RR that validates this signature
    pub key_tag: u16,
    /// The domain name of the zone that contains the signed RRset
    pub signer_name: Name<'a>,
    /// The cryptographic signature that covers the RRSIG RDATA
    pub signature: Cow<'a, [u8]>,
}

impl RR for RRSIG<'_> {
    const TYPE_CODE: u16 = 46;
}

impl<'a> WireFormat<'a> for RRSIG<'a> {
    const MINIMUM_LEN: usize = 18;

    fn parse(data: &mut BytesBuffer<'a>) -> crate::Result<Self>
    where
        Self: Sized,
    {
        let type_covered = data.get_u16()?;
        let algorithm = data.get_u8()?;
        let labels = data.get_u8()?;
        let original_ttl = data.get_u32()?;
        let signature_expiration = data.get_u32()?;
        let signature_inception = data.get_u32()?;
        let key_tag = data.get_u16()?;

        let signer_name = Name::parse(data)?;
        let signature = Cow::Borrowed(data.get_remaining());

        Ok(Self {
            type_covered,
            algorithm,
            labels,
            original_ttl,
            signature_expiration,
            signature_inception,
            key_tag,
            signer_name,
            signature,
        })
    }

    fn write_to<T: std::io::Write>(&self, out: &mut T) -> crate::Result<()> {
        out.write_all(&self.type_covered.to_be_bytes())?;
        out.write_all(&[self.algorithm])?;
        out.write_all(&[self.labels])?;
        out.write_all(&self.original_ttl.to_be_bytes())?;
        out.write_all(&self.signature_expiration.to_be_bytes())?;
        out.write_all(&self.signature_inception.to_be_bytes())?;
        out.write_all(&self.key_tag.to_be_bytes())?;
        self.signer_name.write_to(out)?;
        out.write_all(&self.signature)?;

        Ok(())
    }

    fn len(&self) -> usize {
        self.signer_name.len() + self.signature.len() + Self::MINIMUM_LEN
    }
}

impl RRSIG<'_> {
    /// Returns true if this signature covers a wildcard expansion, the owner name
    /// of the signed RRset has more labels than the labels field counts
    pub fn is_wildcard(&self, owner: &Name) -> bool {
        owner.label_count() as u8 > self.labels
    }

    /// Transforms the inner data into its owned type
    pub fn into_owned<'b>(self) -> RRSIG<'b> {
        RRSIG {
            type_covered: self.type_covered,
            algorithm: self.algorithm,
            labels: self.labels,
            original_ttl: self.original_ttl,
            signature_expiration: self.signature_expiration,
            signature_inception: self.signature_inception,
            key_tag: self.key_tag,
            signer_name: self.signer_name.into_owned(),
            signature: Cow::Owned(self.signature.into_owned()),
        }
    }
}
