use std::borrow::Cow;

use crate::{bytes_buffer::BytesBuffer, dns::WireFormat};

use super::RR;

/// A SSHFP record, used to publish SSH public host key fingerprints in the zone, see [rfc4255](https://datatracker.ietf.org/doc/html/rfc4255)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct SSHFP<'a> {
    /// The algorithm of the public key
    pub algorithm: u8,
    /// The message-digest algorithm used to calculate the fingerprint
    pub fingerprint_type: u8,
    /// The fingerprint of the public key
    pub fingerprint: Cow<'a, [u8]>,
}

impl RR for SSHFP<'_> {
    const TYPE_CODE: u16 = 44;
}

impl SSHFP<'_> {
    /// Transforms the inner data into its owned type
    pub fn into_owned<'b>(self) -> SSHFP<'b> {
        SSHFP {
            algorithm: self.algorithm,
            fingerprint_type: self.fingerprint_type,
            fingerprint: Cow::Owned(self.fingerprint.into_owned()),
        }
    }
}

impl<'a> WireFormat<'a> for SSHFP<'a> {
    const MINIMUM_LEN: usize = 2;

    fn parse(data: &mut BytesBuffer<'a>) -> crate::Result<Self>
    where
        Self: Sized,
    {
        let algorithm = data.get_u8()?;
        let fingerprint_type = data.get_u8()?;
        let fingerprint = Cow::Borrowed(data.get_remaining());

        Ok(Self {
            algorithm,
            fingerprint_type,
            fingerprint,
        })
    }

    fn write_to<T: std::io::Write>(&self, out: &mut T) -> crate::Result<()> {
        out.write_all(&[self.algorithm, self.fingerprint_type])?;
        out.write_all(&self.fingerprint)
            .map_err(crate::DnsWireError::from)
    }

    fn len(&self) -> usize {
        self.fingerprint.len() + Self::MINIMUM_LEN
    }
}
