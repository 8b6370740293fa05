use crate::{
    ParseError, TextDecodeError,
    reader::{MidiSource, ReadResult, Reader, ReaderError},
};
use alloc::string::String;

/// Consumes `length` bytes and decodes them as ASCII.
///
/// The reported position of a failure is the offending byte.
pub fn read_ascii<R: MidiSource>(length: u32, reader: &mut Reader<R>) -> ReadResult<String> {
    let start = reader.buffer_position();
    let bytes = reader.read_exact(length as usize)?;
    if let Some(index) = bytes.iter().position(|b| !b.is_ascii()) {
        let error = TextDecodeError {
            byte: bytes[index],
            index,
        };
        return Err(ReaderError::parse_error(
            start + index,
            ParseError::TextDecode(error),
        ));
    }
    Ok(bytes.iter().map(|&b| b as char).collect())
}
