use std::io::Write;

use crate::bytes_buffer::BytesBuffer;

use super::{PacketFlag, OPCODE, RCODE};

pub(crate) mod masks {
    pub const OPCODE_MASK: u16 = 0b0111_1000_0000_0000;
    pub const RESPONSE_CODE_MASK: u16 = 0b0000_0000_0000_1111;
}

/// Contains general information about the message.
///
/// The section counts reflect the wire message and are recomputed by
/// [`Packet`](crate::Packet) after parsing and before writing, they are not
/// authoritative on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// The identification of the message, must be defined when querying
    pub id: u16,
    /// Indicates the type of query in this message
    pub opcode: OPCODE,
    /// [RCODE](`RCODE`) indicates the response code for this message
    pub response_code: RCODE,
    /// The single bit flags of the header flag word
    pub flags: PacketFlag,

    /// Number of entries in the question section
    pub questions: u16,
    /// Number of records in the answer section
    pub answers: u16,
    /// Number of records in the authority section
    pub name_servers: u16,
    /// Number of records in the additional section
    pub additional_records: u16,
}

impl Header {
    /// Creates a new header for a query message
    pub fn new_query(id: u16) -> Self {
        Self {
            id,
            opcode: OPCODE::StandardQuery,
            response_code: RCODE::NoError,
            flags: PacketFlag::empty(),

            questions: 0,
            answers: 0,
            name_servers: 0,
            additional_records: 0,
        }
    }

    /// Creates a new header for a reply message
    pub fn new_reply(id: u16, opcode: OPCODE) -> Self {
        Self {
            id,
            opcode,
            response_code: RCODE::NoError,
            flags: PacketFlag::RESPONSE,

            questions: 0,
            answers: 0,
            name_servers: 0,
            additional_records: 0,
        }
    }

    /// Sets the given flags in this header
    pub fn set_flags(&mut self, flags: PacketFlag) {
        self.flags |= flags;
    }

    /// Removes the given flags from this header
    pub fn remove_flags(&mut self, flags: PacketFlag) {
        self.flags.remove(flags);
    }

    /// Returns true if all given flags are set
    pub fn has_flags(&self, flags: PacketFlag) -> bool {
        self.flags.contains(flags)
    }

    /// Parse a slice of 12 bytes into a message header
    pub(crate) fn parse(data: &mut BytesBuffer) -> crate::Result<Self> {
        let id = data.get_u16()?;
        let flags = data.get_u16()?;

        let header = Self {
            id,
            opcode: ((flags & masks::OPCODE_MASK) >> masks::OPCODE_MASK.trailing_zeros()).into(),
            response_code: (flags & masks::RESPONSE_CODE_MASK).into(),
            flags: PacketFlag::from_bits_truncate(flags),

            questions: data.get_u16()?,
            answers: data.get_u16()?,
            name_servers: data.get_u16()?,
            additional_records: data.get_u16()?,
        };

        Ok(header)
    }

    /// Writes this header to a buffer of 12 bytes, the section counts are
    /// provided by the caller, derived from the actual section contents
    pub(crate) fn write_to<T: Write>(
        &self,
        buffer: &mut T,
        questions: u16,
        answers: u16,
        name_servers: u16,
        additional_records: u16,
    ) -> crate::Result<()> {
        buffer.write_all(&self.id.to_be_bytes())?;
        buffer.write_all(&self.get_flags().to_be_bytes())?;
        buffer.write_all(&questions.to_be_bytes())?;
        buffer.write_all(&answers.to_be_bytes())?;
        buffer.write_all(&name_servers.to_be_bytes())?;
        buffer.write_all(&additional_records.to_be_bytes())?;

        Ok(())
    }

    fn get_flags(&self) -> u16 {
        let mut flags = self.flags.bits();

        flags |= (self.opcode as u16) << masks::OPCODE_MASK.trailing_zeros();
        flags |= self.response_code as u16 & masks::RESPONSE_CODE_MASK;

        flags
    }
}
