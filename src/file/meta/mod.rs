#![doc = r#"
Meta events: the non-sounding `0xFF` events of a track

```text
FF | type | length (vlq) | payload (length bytes)
```

The type byte selects a decoder from [`MetaType`]. Text and blob payloads
take exactly `length` bytes. Fixed layouts (tempo, time signature, ...) read
their layout and skip whatever the declared length adds beyond it, so the
cursor always lands right after the declared payload.
"#]

mod smpte_offset;
pub use smpte_offset::*;

mod tempo;
pub use tempo::*;

mod signature;
pub use signature::*;

mod text;
pub use text::*;

use crate::{
    ParseError,
    reader::{MidiSource, ReadResult, Reader, ReaderError},
};
use alloc::{string::String, vec::Vec};
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The registry of meta event decoders, keyed by the type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum MetaType {
    /// `FF 00 02 ssss`
    SequenceNumber = 0x00,
    /// `FF 01 len text`
    Text = 0x01,
    /// `FF 02 len text`
    Copyright = 0x02,
    /// `FF 03 len text`
    TrackName = 0x03,
    /// `FF 04 len text`
    InstrumentName = 0x04,
    /// `FF 05 len text`
    Lyric = 0x05,
    /// `FF 06 len text`
    Marker = 0x06,
    /// `FF 07 len text`
    CuePoint = 0x07,
    /// `FF 08 len text`
    ProgramName = 0x08,
    /// `FF 09 len text`
    DeviceName = 0x09,
    /// `FF 20 01 cc`
    MidiChannelPrefix = 0x20,
    /// `FF 21 01 pp`
    MidiPort = 0x21,
    /// `FF 2F 00`
    EndOfTrack = 0x2F,
    /// `FF 51 03 tttttt`
    Tempo = 0x51,
    /// `FF 54 05 hr mn se fr ff`
    SmpteOffset = 0x54,
    /// `FF 58 04 nn dd cc bb`
    TimeSignature = 0x58,
    /// `FF 59 02 sf mi`
    KeySignature = 0x59,
    /// `FF 7F len data`
    Sequencer = 0x7F,
}

impl MetaType {
    /// Bytes a fixed layout occupies, `None` for text and blob payloads.
    pub const fn fixed_len(&self) -> Option<usize> {
        match self {
            Self::SequenceNumber | Self::KeySignature => Some(2),
            Self::MidiChannelPrefix | Self::MidiPort => Some(1),
            Self::EndOfTrack => Some(0),
            Self::Tempo => Some(3),
            Self::SmpteOffset => Some(5),
            Self::TimeSignature => Some(4),
            Self::Text
            | Self::Copyright
            | Self::TrackName
            | Self::InstrumentName
            | Self::Lyric
            | Self::Marker
            | Self::CuePoint
            | Self::ProgramName
            | Self::DeviceName
            | Self::Sequencer => None,
        }
    }

    /// Consumes the `length` payload bytes of this meta type.
    pub fn decode<R: MidiSource>(
        &self,
        length: u32,
        reader: &mut Reader<R>,
    ) -> ReadResult<MetaEvent> {
        use MetaType as T;
        let event = match self {
            T::SequenceNumber => {
                MetaEvent::SequenceNumber(u16::from_be_bytes(self.fixed(length, reader)?))
            }
            T::Text => MetaEvent::Text(read_ascii(length, reader)?),
            T::Copyright => MetaEvent::Copyright(read_ascii(length, reader)?),
            T::TrackName => MetaEvent::TrackName(read_ascii(length, reader)?),
            T::InstrumentName => MetaEvent::InstrumentName(read_ascii(length, reader)?),
            T::Lyric => MetaEvent::Lyric(read_ascii(length, reader)?),
            T::Marker => MetaEvent::Marker(read_ascii(length, reader)?),
            T::CuePoint => MetaEvent::CuePoint(read_ascii(length, reader)?),
            T::ProgramName => MetaEvent::ProgramName(read_ascii(length, reader)?),
            T::DeviceName => MetaEvent::DeviceName(read_ascii(length, reader)?),
            T::MidiChannelPrefix => {
                let [prefix] = self.fixed::<1, R>(length, reader)?;
                MetaEvent::MidiChannelPrefix(prefix)
            }
            T::MidiPort => {
                let [port] = self.fixed::<1, R>(length, reader)?;
                MetaEvent::MidiPort(port)
            }
            T::EndOfTrack => {
                self.fixed::<0, R>(length, reader)?;
                MetaEvent::EndOfTrack
            }
            T::Tempo => MetaEvent::Tempo(Tempo::from_be_bytes(self.fixed(length, reader)?)),
            T::SmpteOffset => {
                MetaEvent::SmpteOffset(SmpteOffset::from_bytes(self.fixed(length, reader)?))
            }
            T::TimeSignature => {
                MetaEvent::TimeSignature(TimeSignature::from_bytes(self.fixed(length, reader)?))
            }
            T::KeySignature => {
                MetaEvent::KeySignature(KeySignature::from_bytes(self.fixed(length, reader)?))
            }
            T::Sequencer => MetaEvent::Sequencer(reader.read_exact(length as usize)?.to_vec()),
        };
        Ok(event)
    }

    /// Reads an `N` byte layout out of a `length` byte payload.
    fn fixed<const N: usize, R: MidiSource>(
        &self,
        length: u32,
        reader: &mut Reader<R>,
    ) -> ReadResult<[u8; N]> {
        if (length as usize) < N {
            return Err(ReaderError::parse_error(
                reader.buffer_position(),
                ParseError::InvalidMetaLength {
                    meta_type: (*self).into(),
                    expected: N,
                    found: length,
                },
            ));
        }
        let bytes = reader.read_exact_size::<N>()?;
        reader.skip(length as usize - N)?;
        Ok(bytes)
    }
}

#[doc = r#"
A decoded meta event.

Text payloads are ASCII by contract; anything else fails with
[`ParseError::TextDecode`].
"#]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetaEvent {
    /// Identifies a sequence in a format 2 file
    SequenceNumber(u16),
    /// Free text
    Text(String),
    /// Copyright notice
    Copyright(String),
    /// Sequence or track name
    TrackName(String),
    /// Instrument description
    InstrumentName(String),
    /// A syllable to be sung
    Lyric(String),
    /// Rehearsal letter or section name
    Marker(String),
    /// Something happening on stage or screen
    CuePoint(String),
    /// Patch name
    ProgramName(String),
    /// Target device name
    DeviceName(String),
    /// Channel that following sysex and meta events apply to
    MidiChannelPrefix(u8),
    /// Output port
    MidiPort(u8),
    /// Last event of every track
    EndOfTrack,
    /// Microseconds per quarter note
    Tempo(Tempo),
    /// Track start time
    SmpteOffset(SmpteOffset),
    /// Time signature
    TimeSignature(TimeSignature),
    /// Key signature
    KeySignature(KeySignature),
    /// Sequencer specific data
    Sequencer(Vec<u8>),
}

impl MetaEvent {
    /// Reads the type byte, the length and the payload.
    ///
    /// The `0xFF` status must already be consumed.
    pub fn read<R: MidiSource>(reader: &mut Reader<R>) -> ReadResult<Self> {
        let type_position = reader.buffer_position();
        let type_byte = reader.read_next()?;
        let meta_type = MetaType::try_from(type_byte).map_err(|e| {
            ReaderError::parse_error(type_position, ParseError::UnknownMetaType(e.number))
        })?;
        let length = reader.read_vlq()?;
        meta_type.decode(length, reader)
    }

    /// The registry key of the event.
    pub const fn meta_type(&self) -> MetaType {
        use MetaEvent as E;
        match self {
            E::SequenceNumber(_) => MetaType::SequenceNumber,
            E::Text(_) => MetaType::Text,
            E::Copyright(_) => MetaType::Copyright,
            E::TrackName(_) => MetaType::TrackName,
            E::InstrumentName(_) => MetaType::InstrumentName,
            E::Lyric(_) => MetaType::Lyric,
            E::Marker(_) => MetaType::Marker,
            E::CuePoint(_) => MetaType::CuePoint,
            E::ProgramName(_) => MetaType::ProgramName,
            E::DeviceName(_) => MetaType::DeviceName,
            E::MidiChannelPrefix(_) => MetaType::MidiChannelPrefix,
            E::MidiPort(_) => MetaType::MidiPort,
            E::EndOfTrack => MetaType::EndOfTrack,
            E::Tempo(_) => MetaType::Tempo,
            E::SmpteOffset(_) => MetaType::SmpteOffset,
            E::TimeSignature(_) => MetaType::TimeSignature,
            E::KeySignature(_) => MetaType::KeySignature,
            E::Sequencer(_) => MetaType::Sequencer,
        }
    }

    /// The text of any of the text events.
    pub fn text(&self) -> Option<&str> {
        use MetaEvent as E;
        match self {
            E::Text(s)
            | E::Copyright(s)
            | E::TrackName(s)
            | E::InstrumentName(s)
            | E::Lyric(s)
            | E::Marker(s)
            | E::CuePoint(s)
            | E::ProgramName(s)
            | E::DeviceName(s) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vlq;
    use alloc::{string::ToString, vec};
    use pretty_assertions::assert_eq;

    /// `type | vlq(len) | payload`, the bytes after `FF`.
    fn meta_bytes(type_byte: u8, payload: &[u8]) -> Vec<u8> {
        let mut bytes = vec![type_byte];
        bytes.extend(vlq::encode(payload.len() as u32));
        bytes.extend_from_slice(payload);
        bytes
    }

    fn decode_exact(bytes: &[u8]) -> MetaEvent {
        let mut reader = Reader::from_byte_slice(bytes);
        let event = MetaEvent::read(&mut reader).unwrap();
        assert_eq!(reader.buffer_position(), bytes.len(), "{event:?}");
        event
    }

    #[test]
    fn every_registered_type_decodes() {
        let cases = [
            (0x00, vec![0x01, 0x02], MetaEvent::SequenceNumber(0x0102)),
            (0x01, b"test".to_vec(), MetaEvent::Text("test".to_string())),
            (0x02, b"(C)".to_vec(), MetaEvent::Copyright("(C)".to_string())),
            (0x03, b"Piano".to_vec(), MetaEvent::TrackName("Piano".to_string())),
            (0x04, b"Oboe".to_vec(), MetaEvent::InstrumentName("Oboe".to_string())),
            (0x05, b"la".to_vec(), MetaEvent::Lyric("la".to_string())),
            (0x06, b"Verse".to_vec(), MetaEvent::Marker("Verse".to_string())),
            (0x07, b"Door".to_vec(), MetaEvent::CuePoint("Door".to_string())),
            (0x08, b"Pad".to_vec(), MetaEvent::ProgramName("Pad".to_string())),
            (0x09, b"Synth".to_vec(), MetaEvent::DeviceName("Synth".to_string())),
            (0x20, vec![0x09], MetaEvent::MidiChannelPrefix(9)),
            (0x21, vec![0x01], MetaEvent::MidiPort(1)),
            (0x2F, vec![], MetaEvent::EndOfTrack),
            (0x51, vec![0x07, 0xA1, 0x20], MetaEvent::Tempo(Tempo::new(500_000))),
            (
                0x54,
                vec![0x41, 0x17, 0x2D, 0x0C, 0x22],
                MetaEvent::SmpteOffset(SmpteOffset {
                    hours: 0x41,
                    minutes: 0x17,
                    seconds: 0x2D,
                    fps: 0x0C,
                    fractional_frames: 0x22,
                }),
            ),
            (
                0x58,
                vec![6, 3, 36, 8],
                MetaEvent::TimeSignature(TimeSignature {
                    numerator: 6,
                    denominator: 3,
                    clocks_per_click: 36,
                    thirty_second_per_24_clocks: 8,
                }),
            ),
            (
                0x59,
                vec![0xFD, 0x01],
                MetaEvent::KeySignature(KeySignature {
                    flats_sharps: -3,
                    major_minor: 1,
                }),
            ),
            (0x7F, vec![0x00, 0x41, 0x7F], MetaEvent::Sequencer(vec![0x00, 0x41, 0x7F])),
        ];
        for (type_byte, payload, expected) in cases {
            let event = decode_exact(&meta_bytes(type_byte, &payload));
            assert_eq!(event, expected);
            assert_eq!(u8::from(event.meta_type()), type_byte);
            assert_eq!(
                event.meta_type().fixed_len().unwrap_or(payload.len()),
                payload.len()
            );
        }
    }

    #[test]
    fn empty_text() {
        assert_eq!(decode_exact(&[0x03, 0x00]), MetaEvent::TrackName(String::new()));
    }

    #[test]
    fn text_consumes_declared_length_regardless_of_content() {
        let bytes = [0x01, 0x03, b'a', 0x00, b'b', 0x2F];
        let mut reader = Reader::from_byte_slice(&bytes);
        let event = MetaEvent::read(&mut reader).unwrap();
        assert_eq!(event.text(), Some("a\0b"));
        assert_eq!(reader.buffer_position(), 5);
    }

    #[test]
    fn long_text_uses_multi_byte_length() {
        let text = "x".repeat(200);
        let bytes = meta_bytes(0x05, text.as_bytes());
        assert_eq!(&bytes[1..3], &[0x81, 0x48]);
        assert_eq!(decode_exact(&bytes), MetaEvent::Lyric(text));
    }

    #[test]
    fn fixed_layout_skips_surplus_length() {
        let event = decode_exact(&[0x21, 0x02, 0x05, 0x06]);
        assert_eq!(event, MetaEvent::MidiPort(5));
        assert_eq!(decode_exact(&[0x2F, 0x01, 0x00]), MetaEvent::EndOfTrack);
    }

    #[test]
    fn fixed_layout_too_short() {
        let mut reader = Reader::from_byte_slice(&[0x51, 0x02, 0x07, 0xA1]);
        let err = MetaEvent::read(&mut reader).unwrap_err();
        assert_eq!(
            err.parse_kind(),
            Some(&ParseError::InvalidMetaLength {
                meta_type: 0x51,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn unknown_type_is_rejected() {
        let mut reader = Reader::from_byte_slice(&[0x7E, 0x02, 0x00, 0x00]);
        let err = MetaEvent::read(&mut reader).unwrap_err();
        assert_eq!(err.parse_kind(), Some(&ParseError::UnknownMetaType(0x7E)));
        assert_eq!(err.position(), 0);
    }

    #[test]
    fn non_ascii_text_is_an_error() {
        let mut reader = Reader::from_byte_slice(&[0x01, 0x02, b'o', 0xE9]);
        let err = MetaEvent::read(&mut reader).unwrap_err();
        assert_eq!(
            err.parse_kind(),
            Some(&ParseError::TextDecode(crate::TextDecodeError {
                byte: 0xE9,
                index: 1
            }))
        );
        assert_eq!(err.position(), 3);
    }

    #[test]
    fn truncated_blob() {
        let mut reader = Reader::from_byte_slice(&[0x7F, 0x05, 0x00]);
        assert!(MetaEvent::read(&mut reader).unwrap_err().is_truncated());
    }
}
