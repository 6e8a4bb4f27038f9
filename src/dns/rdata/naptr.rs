use crate::{
    bytes_buffer::BytesBuffer,
    dns::{Name, WireFormat},
    CharacterString,
};

use super::RR;

/// NAPTR records are used for dynamic delegation discovery, see [rfc3403](https://datatracker.ietf.org/doc/html/rfc3403)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct NAPTR<'a> {
    /// Order in which the NAPTR records MUST be processed, low numbers first
    pub order: u16,
    /// Order in which NAPTR records with equal "order" values SHOULD be processed
    pub preference: u16,
    /// Flags to control aspects of the rewriting and interpretation of the fields
    pub flags: CharacterString<'a>,
    /// Services available down this rewrite path
    pub services: CharacterString<'a>,
    /// A substitution expression that is applied to the original string
    pub regexp: CharacterString<'a>,
    /// The next domain-name to query for, depending on the value of the flags field
    pub replacement: Name<'a>,
}

impl RR for NAPTR<'_> {
    const TYPE_CODE: u16 = 35;
}

impl NAPTR<'_> {
    /// Transforms the inner data into its owned type
    pub fn into_owned<'b>(self) -> NAPTR<'b> {
        NAPTR {
            order: self.order,
            preference: self.preference,
            flags: self.flags.into_owned(),
            services: self.services.into_owned(),
            regexp: self.regexp.into_owned(),
            replacement: self.replacement.into_owned(),
        }
    }
}

impl<'a> WireFormat<'a> for NAPTR<'a> {
    const MINIMUM_LEN: usize = 4;

    fn parse(data: &mut BytesBuffer<'a>) -> crate::Result<Self>
    where
        Self: Sized,
    {
        let order = data.get_u16()?;
        let preference = data.get_u16()?;
        let flags = CharacterString::parse(data)?;
        let services = CharacterString::parse(data)?;
        let regexp = CharacterString::parse(data)?;
        let replacement = Name::parse(data)?;

        Ok(Self {
            order,
            preference,
            flags,
            services,
            regexp,
            replacement,
        })
    }

    fn write_to<T: std::io::Write>(&self, out: &mut T) -> crate::Result<()> {
        out.write_all(&self.order.to_be_bytes())?;
        out.write_all(&self.preference.to_be_bytes())?;
        self.flags.write_to(out)?;
        self.services.write_to(out)?;
        self.regexp.write_to(out)?;
        self.replacement.write_to(out)
    }

    fn len(&self) -> usize {
        self.flags.len()
            + self.services.len()
            + self.regexp.len()
            + self.replacement.len()
            + Self::MINIMUM_LEN
    }
}
