/// This buffer is used to read bytes from a slice in a safe way. It keeps track of the current
/// position and ensures that the buffer does not read past the end of the slice.
///
/// `get_*` functions return the value at the current position and advances the buffer position by the
/// size of the value read.
///
/// `peek_*` functions return the value at the specified offset without advancing the buffer position.
///
/// [`mark`](BytesBuffer::mark) and [`reset`](BytesBuffer::reset) save and restore a single read
/// position, they are used to re-read a region that was already consumed.
#[derive(Debug, Clone)]
pub struct BytesBuffer<'a> {
    data: &'a [u8],
    offset: usize,
    marked: usize,
}

impl<'a> BytesBuffer<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: 0,
            marked: 0,
        }
    }

    /// Returns `true` if there are more bytes remaining to read.
    pub fn has_remaining(&self) -> bool {
        self.offset < self.data.len()
    }

    /// Returns the number of bytes remaining to read.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Returns the current read position, relative to the start of the underlying slice.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Saves the current read position, a later [`reset`](BytesBuffer::reset) returns to it.
    ///
    /// Only one position is kept, a new call overwrites the previous mark.
    pub fn mark(&mut self) {
        self.marked = self.offset;
    }

    /// Restores the read position saved by the last [`mark`](BytesBuffer::mark).
    pub fn reset(&mut self) {
        self.offset = self.marked;
    }

    /// advances the buffer position by `length` bytes if there are enough bytes remaining.
    pub fn advance(&mut self, length: usize) -> crate::Result<()> {
        self.bounds_check(length)?;
        self.offset += length;

        Ok(())
    }

    /// Returns a new buffer with the offset set to the specified position.
    ///
    /// `position` must point strictly before the two bytes just consumed, compression pointers
    /// are only allowed to point backwards in the message.
    pub fn new_at(&self, position: usize) -> crate::Result<Self> {
        if position + 2 >= self.offset {
            return Err(crate::DnsWireError::InvalidCompressionPointer);
        }

        Ok(Self {
            data: self.data,
            offset: position,
            marked: position,
        })
    }

    /// Returns a new buffer with the end of the buffer set to the relative `offset` position
    /// The current offset is advanced by `offset`.
    ///
    /// Used when parsing data where the length is not known inside the function receiving the
    /// buffer.
    pub fn new_limited_to(&mut self, offset: usize) -> crate::Result<Self> {
        self.bounds_check(offset)?;

        let buffer = Self {
            data: &self.data[..self.offset + offset],
            offset: self.offset,
            marked: self.offset,
        };
        self.offset += offset;

        Ok(buffer)
    }

    /// Returns a slice of the remaining bytes in the buffer.
    pub fn get_remaining(&mut self) -> &'a [u8] {
        let value = &self.data[self.offset..];
        self.offset = self.data.len();

        value
    }

    /// Returns a slice of the next `offset` bytes in the buffer.
    pub fn get_slice(&mut self, offset: usize) -> crate::Result<&'a [u8]> {
        self.bounds_check(offset)?;

        let value = &self.data[self.offset..self.offset + offset];
        self.offset += offset;

        Ok(value)
    }

    /// Returns the u32 value at the `offset` position without advancing the offset.
    pub fn peek_u32_in(&self, offset: usize) -> crate::Result<u32> {
        self.peek_array(offset).map(u32::from_be_bytes)
    }

    /// Returns the u16 value at the `offset` position without advancing the offset.
    pub fn peek_u16_in(&self, offset: usize) -> crate::Result<u16> {
        self.peek_array(offset).map(u16::from_be_bytes)
    }

    /// Returns the u32 value in the current position and advances the offset.
    pub fn get_u32(&mut self) -> crate::Result<u32> {
        self.get_array().map(u32::from_be_bytes)
    }

    /// Returns the u16 value in the current position and advances the offset.
    pub fn get_u16(&mut self) -> crate::Result<u16> {
        self.get_array().map(u16::from_be_bytes)
    }

    /// Returns the u8 value in the current position and advances the offset.
    pub fn get_u8(&mut self) -> crate::Result<u8> {
        self.bounds_check(1)?;

        let value = self.data[self.offset];
        self.offset += 1;

        Ok(value)
    }

    /// Peek an array of size N at the specified offset without advancing the offset.
    fn peek_array<const N: usize>(&self, offset: usize) -> crate::Result<[u8; N]> {
        self.bounds_check(N + offset)?;

        let offset = self.offset + offset;
        let value = self.data[offset..offset + N].try_into()?;

        Ok(value)
    }

    /// Returns an array of size N in the current position and advances the offset.
    pub fn get_array<const N: usize>(&mut self) -> crate::Result<[u8; N]> {
        self.bounds_check(N)?;

        let value = self.data[self.offset..self.offset + N].try_into()?;
        self.offset += N;

        Ok(value)
    }

    /// Checks if there are `length` bytes available to read from the current offset.
    fn bounds_check(&self, length: usize) -> crate::Result<()> {
        if (self.offset + length) <= self.data.len() {
            Ok(())
        } else {
            Err(crate::DnsWireError::InsufficientData)
        }
    }
}

impl<'a> From<&'a [u8]> for BytesBuffer<'a> {
    fn from(value: &'a [u8]) -> BytesBuffer<'a> {
        Self::new(value)
    }
}
