#![doc = r#"
A forward-reading cursor over a MIDI byte buffer.

The [`Reader`] never copies the source. Every read is bounds checked; reading
past the end of the buffer returns [`ReaderErrorKind::TruncatedInput`] and
leaves the cursor where it was.
"#]

mod error;
pub use error::*;

mod event;
pub use event::*;

use alloc::{borrow::Cow, vec::Vec};

/// A source of bytes a [`Reader`] can walk over.
pub trait MidiSource {
    /// The complete, immutable byte buffer.
    fn bytes(&self) -> &[u8];
}

impl MidiSource for &[u8] {
    fn bytes(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> MidiSource for &[u8; N] {
    fn bytes(&self) -> &[u8] {
        self.as_slice()
    }
}

impl MidiSource for Vec<u8> {
    fn bytes(&self) -> &[u8] {
        self.as_slice()
    }
}

impl MidiSource for Cow<'_, [u8]> {
    fn bytes(&self) -> &[u8] {
        self.as_ref()
    }
}

#[doc = r#"
A sequential cursor over some [`MidiSource`].

# Example
```rust
# use smf_reader::reader::Reader;
let mut reader = Reader::from_byte_slice(&[0x4D, 0x54, 0x68, 0x64]);
assert_eq!(reader.read_exact_size::<4>().unwrap(), *b"MThd");
assert!(reader.is_at_end());
```
"#]
#[derive(Debug, Clone)]
pub struct Reader<R> {
    data: R,
    position: usize,
}

impl<'slc> Reader<&'slc [u8]> {
    /// Create a reader over a borrowed slice.
    pub const fn from_byte_slice(bytes: &'slc [u8]) -> Self {
        Self {
            data: bytes,
            position: 0,
        }
    }
}

impl<R: MidiSource> Reader<R> {
    /// Create a reader over any [`MidiSource`].
    pub const fn new(data: R) -> Self {
        Self { data, position: 0 }
    }

    /// The absolute offset of the next byte to be read.
    #[inline]
    pub const fn buffer_position(&self) -> usize {
        self.position
    }

    /// Total length of the underlying buffer.
    pub fn len(&self) -> usize {
        self.data.bytes().len()
    }

    /// True if the underlying buffer holds no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.data.bytes().is_empty()
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.position)
    }

    /// True if every byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    /// Looks at the next byte without consuming it.
    pub fn peek_byte(&self) -> ReadResult<u8> {
        self.data
            .bytes()
            .get(self.position)
            .copied()
            .ok_or_else(|| ReaderError::truncated(self.position))
    }

    /// Consumes a single byte.
    pub fn read_next(&mut self) -> ReadResult<u8> {
        let byte = self.peek_byte()?;
        self.position += 1;
        Ok(byte)
    }

    /// Consumes exactly `len` bytes, returning them as a slice of the source.
    pub fn read_exact(&mut self, len: usize) -> ReadResult<&[u8]> {
        let start = self.position;
        let end = start
            .checked_add(len)
            .filter(|end| *end <= self.len())
            .ok_or_else(|| ReaderError::truncated(start))?;
        self.position = end;
        Ok(&self.data.bytes()[start..end])
    }

    /// Consumes exactly `N` bytes into a fixed size array.
    pub fn read_exact_size<const N: usize>(&mut self) -> ReadResult<[u8; N]> {
        let mut out = [0; N];
        out.copy_from_slice(self.read_exact(N)?);
        Ok(out)
    }

    /// Reads a big-endian `u16`.
    pub fn read_u16(&mut self) -> ReadResult<u16> {
        self.read_exact_size().map(u16::from_be_bytes)
    }

    /// Reads a big-endian `u32`.
    pub fn read_u32(&mut self) -> ReadResult<u32> {
        self.read_exact_size().map(u32::from_be_bytes)
    }

    /// Advances the cursor by `len` bytes without looking at them.
    pub fn skip(&mut self, len: usize) -> ReadResult<()> {
        self.read_exact(len).map(|_| ())
    }

    /// Absolute seek. The position may equal the buffer length but never exceed it.
    pub fn set_position(&mut self, position: usize) -> ReadResult<()> {
        if position > self.len() {
            return Err(ReaderError::truncated(self.position));
        }
        self.position = position;
        Ok(())
    }

    /// Relative seek by one byte backwards, un-reading the last consumed byte.
    pub fn step_back(&mut self) -> ReadResult<()> {
        let position = self
            .position
            .checked_sub(1)
            .ok_or_else(|| ReaderError::truncated(self.position))?;
        self.set_position(position)
    }

    /// Decodes a variable length quantity at the cursor.
    ///
    /// See [`crate::vlq`] for the encoding.
    pub fn read_vlq(&mut self) -> ReadResult<u32> {
        crate::vlq::read(self)
    }
}
