use std::borrow::Cow;

use crate::{
    bytes_buffer::BytesBuffer,
    dns::{Name, WireFormat},
};

use super::{RR, TYPE};

/// A NSEC record see [rfc4034](https://datatracker.ietf.org/doc/html/rfc4034#section-4)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct NSEC<'a> {
    /// The next owner name in the canonical ordering of the zone
    pub next_name: Name<'a>,
    /// The type bit maps representing the RR types present at the NSEC RR's owner name
    pub type_bit_maps: Vec<TypeBitMap<'a>>,
}

/// A type bit map entry, one 256-type window of the map described in
/// [rfc4034 4.1.2](https://datatracker.ietf.org/doc/html/rfc4034#section-4.1.2).
/// Used by the NSEC and NSEC3 records.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct TypeBitMap<'a> {
    /// The window block number of this bit map
    pub window_block: u8,
    /// The bitmap containing the RR types present in this window block, 1 to 32 bytes
    pub bitmap: Cow<'a, [u8]>,
}

impl<'a> TypeBitMap<'a> {
    pub(crate) fn parse(data: &mut BytesBuffer<'a>) -> crate::Result<Self> {
        let window_block = data.get_u8()?;
        let length = data.get_u8()? as usize;

        if length == 0 || length > 32 {
            return Err(crate::DnsWireError::InvalidRecordData);
        }

        let bitmap = Cow::Borrowed(data.get_slice(length)?);

        Ok(Self {
            window_block,
            bitmap,
        })
    }

    pub(crate) fn parse_all(data: &mut BytesBuffer<'a>) -> crate::Result<Vec<Self>> {
        let mut type_bit_maps = Vec::new();
        while data.has_remaining() {
            type_bit_maps.push(Self::parse(data)?);
        }

        Ok(type_bit_maps)
    }

    pub(crate) fn write_to<T: std::io::Write>(&self, out: &mut T) -> crate::Result<()> {
        out.write_all(&[self.window_block, self.bitmap.len() as u8])?;
        out.write_all(&self.bitmap)
            .map_err(crate::DnsWireError::from)
    }

    pub(crate) fn len(&self) -> usize {
        self.bitmap.len() + 2
    }

    /// The record types marked in this window, most significant bit first
    pub fn types(&self) -> impl Iterator<Item = TYPE> + '_ {
        let base = self.window_block as u16 * 256;
        self.bitmap.iter().enumerate().flat_map(move |(i, byte)| {
            (0..8u16)
                .filter(move |bit| byte & (0x80 >> bit) != 0)
                .map(move |bit| TYPE::from(base + i as u16 * 8 + bit))
        })
    }

    /// Transforms the inner data into its owned type
    pub fn into_owned<'b>(self) -> TypeBitMap<'b> {
        TypeBitMap {
            window_block: self.window_block,
            bitmap: self.bitmap.into_owned().into(),
        }
    }
}

impl RR for NSEC<'_> {
    const TYPE_CODE: u16 = 47;
}

impl<'a> WireFormat<'a> for NSEC<'a> {
    const MINIMUM_LEN: usize = 1;

    fn parse(data: &mut BytesBuffer<'a>) -> crate::Result<Self>
    where
        Self: Sized,
    {
        let next_name = Name::parse(data)?;
        let type_bit_maps = TypeBitMap::parse_all(data)?;

        Ok(Self {
            next_name,
            type_bit_maps,
        })
    }

    fn write_to<T: std::io::Write>(&self, out: &mut T) -> crate::Result<()> {
        self.next_name.write_to(out)?;

        for window in self.type_bit_maps.iter() {
            window.write_to(out)?;
        }

        Ok(())
    }

    fn len(&self) -> usize {
        self.next_name.len() + self.type_bit_maps.iter().map(|w| w.len()).sum::<usize>()
    }
}

impl NSEC<'_> {
    /// All record types marked present by the type bit maps
    pub fn types(&self) -> Vec<TYPE> {
        self.type_bit_maps.iter().flat_map(|w| w.types()).collect()
    }

    /// Transforms the inner data into its owned type
    pub fn into_owned<'b>(self) -> NSEC<'b> {
        NSEC {
            next_name: self.next_name.into_owned(),
            type_bit_maps: self
                .type_bit_maps
                .into_iter()
                .map(|x| x.into_owned())
                .collect(),
        }
    }
}
