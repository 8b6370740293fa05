#![doc = r#"
Variable length quantities.

Delta times and meta/sysex lengths are stored big-endian in base 128: each
byte carries seven payload bits, and bit 7 is set on every byte except the
last. Standard MIDI Files never use more than four bytes, so the largest
representable value is `0x0FFF_FFFF`.

```text
value        bytes
0x00000000   00
0x00000040   40
0x00000080   81 00
0x00002000   C0 00
0x0FFFFFFF   FF FF FF 7F
```
"#]

use crate::{
    ParseError,
    reader::{MidiSource, ReadResult, Reader, ReaderError},
};
use alloc::vec::Vec;

/// Most bytes a quantity may span.
pub const MAX_LEN: usize = 4;

/// Largest value that fits in [`MAX_LEN`] bytes.
pub const MAX_VALUE: u32 = 0x0FFF_FFFF;

/// Decodes one quantity at the reader's cursor.
///
/// Fails with a truncation error if the buffer ends before a terminating byte,
/// and with [`ParseError::MalformedVlq`] if four bytes all carry the
/// continuation bit.
pub fn read<R: MidiSource>(reader: &mut Reader<R>) -> ReadResult<u32> {
    let start = reader.buffer_position();
    let mut value: u32 = 0;
    for _ in 0..MAX_LEN {
        let byte = reader.read_next()?;
        value = (value << 7) | (byte & 0x7F) as u32;
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(ReaderError::parse_error(start, ParseError::MalformedVlq))
}

/// Encodes `value`, most significant group first.
///
/// Values above [`MAX_VALUE`] panic in debug builds and are truncated to
/// their low 28 bits otherwise.
pub fn encode(value: u32) -> Vec<u8> {
    debug_assert!(value <= MAX_VALUE, "{value:#X} does not fit in four bytes");
    let value = value & MAX_VALUE;
    let mut out = Vec::with_capacity(MAX_LEN);
    let mut shift = 21;
    while shift > 0 && value >> shift == 0 {
        shift -= 7;
    }
    while shift > 0 {
        out.push(((value >> shift) & 0x7F) as u8 | 0x80);
        shift -= 7;
    }
    out.push((value & 0x7F) as u8);
    out
}
