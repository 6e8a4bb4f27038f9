use std::io::Write;

use crate::bytes_buffer::BytesBuffer;

/// Represents anything that can be part of a dns message (Question, Resource Record, RData)
pub(crate) trait WireFormat<'a> {
    const MINIMUM_LEN: usize;

    /// Parse the contents of the buffer at its current position.
    /// The buffer must alias the full message so name compression pointers can be followed.
    /// The implementor must leave the position at the end of the data just parsed.
    fn parse(data: &mut BytesBuffer<'a>) -> crate::Result<Self>
    where
        Self: Sized;

    /// Write this part bytes to the writer
    fn write_to<T: Write>(&self, out: &mut T) -> crate::Result<()>;

    /// Returns the length in bytes of this content
    fn len(&self) -> usize {
        Self::MINIMUM_LEN
    }
}
