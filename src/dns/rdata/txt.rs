use std::convert::{TryFrom, TryInto};

use crate::bytes_buffer::BytesBuffer;
use crate::dns::{WireFormat, MAX_CHARACTER_STRING_LENGTH};
use crate::CharacterString;

use super::RR;

/// Represents a TXT Resource Record, a sequence of [`CharacterString`]s
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub struct TXT<'a> {
    strings: Vec<CharacterString<'a>>,
}

impl RR for TXT<'_> {
    const TYPE_CODE: u16 = 16;
}

impl<'a> TXT<'a> {
    /// Creates a new empty TXT Record
    pub fn new() -> Self {
        Self { strings: vec![] }
    }

    /// Add `char_string` to this TXT record as a validated [`CharacterString`](`CharacterString`)
    pub fn add_string(&mut self, char_string: &'a str) -> crate::Result<()> {
        self.add_char_string(char_string.try_into()?);
        Ok(())
    }

    /// Add `char_string` to this TXT record
    pub fn add_char_string(&mut self, char_string: CharacterString<'a>) {
        self.strings.push(char_string);
    }

    /// Add `char_string` to this TXT record as a validated [`CharacterString`](`CharacterString`), consuming and returning Self
    pub fn with_string(mut self, char_string: &'a str) -> crate::Result<Self> {
        self.add_char_string(char_string.try_into()?);
        Ok(self)
    }

    /// The character strings of this TXT record
    pub fn strings(&self) -> &[CharacterString<'a>] {
        &self.strings
    }

    /// Transforms the inner data into its owned type
    pub fn into_owned<'b>(self) -> TXT<'b> {
        TXT {
            strings: self.strings.into_iter().map(|s| s.into_owned()).collect(),
        }
    }
}

impl<'a> TryFrom<&'a str> for TXT<'a> {
    type Error = crate::DnsWireError;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        let mut txt = TXT::new();
        for v in value.as_bytes().chunks(MAX_CHARACTER_STRING_LENGTH) {
            txt.add_char_string(CharacterString::new(v)?);
        }
        Ok(txt)
    }
}

impl<'a> WireFormat<'a> for TXT<'a> {
    const MINIMUM_LEN: usize = 0;

    fn parse(data: &mut BytesBuffer<'a>) -> crate::Result<Self>
    where
        Self: Sized,
    {
        let mut strings = Vec::new();
        while data.has_remaining() {
            strings.push(CharacterString::parse(data)?);
        }

        Ok(Self { strings })
    }

    fn write_to<T: std::io::Write>(&self, out: &mut T) -> crate::Result<()> {
        for string in self.strings.iter() {
            string.write_to(out)?;
        }

        Ok(())
    }

    fn len(&self) -> usize {
        self.strings.iter().map(|s| s.len()).sum()
    }
}
