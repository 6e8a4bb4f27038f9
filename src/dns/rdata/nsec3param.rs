use std::borrow::Cow;

use crate::{bytes_buffer::BytesBuffer, dns::WireFormat};

use super::RR;

/// A NSEC3PARAM record carries the NSEC3 parameters needed to calculate hashed owner names,
/// see [rfc5155](https://datatracker.ietf.org/doc/html/rfc5155#section-4)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct NSEC3PARAM<'a> {
    /// The hash algorithm used to hash the owner names in the zone
    pub hash_algorithm: u8,
    /// Flags field, must be zero in well formed records
    pub flags: u8,
    /// Number of additional times the hash function has been performed
    pub iterations: u16,
    /// Salt appended to the owner name before hashing
    pub salt: Cow<'a, [u8]>,
}

impl RR for NSEC3PARAM<'_> {
    const TYPE_CODE: u16 = 51;
}

impl<'a> WireFormat<'a> for NSEC3PARAM<'a> {
    const MINIMUM_LEN: usize = 5;

    fn parse(data: &mut BytesBuffer<'a>) -> crate::Result<Self>
    where
        Self: Sized,
    {
        let hash_algorithm = data.get_u8()?;
        let flags = data.get_u8()?;
        let iterations = data.get_u16()?;

        let salt_length = data.get_u8()? as usize;
        let salt = Cow::Borrowed(data.get_slice(salt_length)?);

        Ok(Self {
            hash_algorithm,
            flags,
            iterations,
            salt,
        })
    }

    fn write_to<T: std::io::Write>(&self, out: &mut T) -> crate::Result<()> {
        out.write_all(&[self.hash_algorithm, self.flags])?;
        out.write_all(&self.iterations.to_be_bytes())?;
        out.write_all(&[self.salt.len() as u8])?;
        out.write_all(&self.salt).map_err(crate::DnsWireError::from)
    }

    fn len(&self) -> usize {
        self.salt.len() + Self::MINIMUM_LEN
    }
}

impl NSEC3PARAM<'_> {
    /// Transforms the inner data into its owned type
    pub fn into_owned<'b>(self) -> NSEC3PARAM<'b> {
        NSEC3PARAM {
            hash_algorithm: self.hash_algorithm,
            flags: self.flags,
            iterations: self.iterations,
            salt: Cow::Owned(self.salt.into_owned()),
        }
    }
}
