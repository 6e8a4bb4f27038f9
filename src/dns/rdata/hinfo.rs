use crate::{bytes_buffer::BytesBuffer, dns::WireFormat, CharacterString};

use super::RR;

/// HINFO records are used to acquire general information about a host.
/// The main use is for protocols such as FTP that can use special procedures
/// when talking between machines or operating systems of the same type.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct HINFO<'a> {
    /// A [CharacterString](`CharacterString`) which specifies the CPU type.
    pub cpu: CharacterString<'a>,
    /// A [CharacterString](`CharacterString`) which specifies the operating system type.
    pub os: CharacterString<'a>,
}

impl RR for HINFO<'_> {
    const TYPE_CODE: u16 = 13;
}

impl HINFO<'_> {
    /// Transforms the inner data into its owned type
    pub fn into_owned<'b>(self) -> HINFO<'b> {
        HINFO {
            cpu: self.cpu.into_owned(),
            os: self.os.into_owned(),
        }
    }
}

impl<'a> WireFormat<'a> for HINFO<'a> {
    const MINIMUM_LEN: usize = 2;

    fn parse(data: &mut BytesBuffer<'a>) -> crate::Result<Self>
    where
        Self: Sized,
    {
        let cpu = CharacterString::parse(data)?;
        let os = CharacterString::parse(data)?;

        Ok(Self { cpu, os })
    }

    fn write_to<T: std::io::Write>(&self, out: &mut T) -> crate::Result<()> {
        self.cpu.write_to(out)?;
        self.os.write_to(out)
    }

    fn len(&self) -> usize {
        self.cpu.len() + self.os.len()
    }
}
