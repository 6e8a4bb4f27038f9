use std::borrow::Cow;

use crate::{bytes_buffer::BytesBuffer, dns::WireFormat};

use super::{TypeBitMap, RR, TYPE};

mod flag {
    pub const OPT_OUT: u8 = 0b0000_0001;
}

/// A NSEC3 record for hashed authenticated denial of existence, see [rfc5155](https://datatracker.ietf.org/doc/html/rfc5155#section-3)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct NSEC3<'a> {
    /// The hash algorithm used to hash the owner names in the zone
    pub hash_algorithm: u8,
    /// Flags field, only the Opt-Out flag is defined so far
    pub flags: u8,
    /// Number of additional times the hash function has been performed
    pub iterations: u16,
    /// Salt appended to the owner name before hashing
    pub salt: Cow<'a, [u8]>,
    /// The hashed next owner name in hash order of the zone
    pub next_hashed_owner_name: Cow<'a, [u8]>,
    /// The type bit maps representing the RR types present at the original owner name
    pub type_bit_maps: Vec<TypeBitMap<'a>>,
}

impl RR for NSEC3<'_> {
    const TYPE_CODE: u16 = 50;
}

impl<'a> WireFormat<'a> for NSEC3<'a> {
    const MINIMUM_LEN: usize = 6;

    fn parse(data: &mut BytesBuffer<'a>) -> crate::Result<Self>
    where
        Self: Sized,
    {
        let hash_algorithm = data.get_u8()?;
        let flags = data.get_u8()?;
        let iterations = data.get_u16()?;

        let salt_length = data.get_u8()? as usize;
        let salt = Cow::Borrowed(data.get_slice(salt_length)?);

        let hash_length = data.get_u8()? as usize;
        let next_hashed_owner_name = Cow::Borrowed(data.get_slice(hash_length)?);

        let type_bit_maps = TypeBitMap::parse_all(data)?;

        Ok(Self {
            hash_algorithm,
            flags,
            iterations,
            salt,
            next_hashed_owner_name,
            type_bit_maps,
        })
    }

    fn write_to<T: std::io::Write>(&self, out: &mut T) -> crate::Result<()> {
        out.write_all(&[self.hash_algorithm, self.flags])?;
        out.write_all(&self.iterations.to_be_bytes())?;
        out.write_all(&[self.salt.len() as u8])?;
        out.write_all(&self.salt)?;
        out.write_all(&[self.next_hashed_owner_name.len() as u8])?;
        out.write_all(&self.next_hashed_owner_name)?;

        for window in self.type_bit_maps.iter() {
            window.write_to(out)?;
        }

        Ok(())
    }

    fn len(&self) -> usize {
        self.salt.len()
            + self.next_hashed_owner_name.len()
            + self.type_bit_maps.iter().map(|w| w.len()).sum::<usize>()
            + Self::MINIMUM_LEN
    }
}

impl NSEC3<'_> {
    /// Returns true if the Opt-Out flag is set, the zone may contain unsigned delegations
    /// in the span covered by this record
    pub fn opt_out(&self) -> bool {
        self.flags & flag::OPT_OUT != 0
    }

    /// All record types marked present by the type bit maps
    pub fn types(&self) -> Vec<TYPE> {
        self.type_bit_maps.iter().flat_map(|w| w.types()).collect()
    }

    /// Transforms the inner data into its owned type
    pub fn into_owned<'b>(self) -> NSEC3<'b> {
        NSEC3 {
            hash_algorithm: self.hash_algorithm,
            flags: self.flags,
            iterations: self.iterations,
            salt: Cow::Owned(self.salt.into_owned()),
            next_hashed_owner_name: Cow::Owned(self.next_hashed_owner_name.into_owned()),
            type_bit_maps: self
                .type_bit_maps
                .into_iter()
                .map(|x| x.into_owned())
                .collect(),
        }
    }
}
