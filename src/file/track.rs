use super::chunk::ChunkHeader;
use crate::{
    ParseError, ParseOptions,
    events::{Event, TrackEvent},
    file::meta::MetaEvent,
    reader::{EventDecoder, MidiSource, ReadResult, Reader, ReaderError},
};
use alloc::vec::Vec;

#[doc = r#"
The events of one `MTrk` chunk, in file order.

A decoded track always ends with exactly one end of track event.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    events: Vec<TrackEvent>,
}

impl Track {
    /// Decodes the next track chunk with the default [`ParseOptions`].
    pub fn read<R: MidiSource>(reader: &mut Reader<R>) -> ReadResult<Self> {
        TrackDecoder::new(ParseOptions::new()).decode(reader)
    }

    /// Every event, the end of track event included.
    pub fn events(&self) -> &[TrackEvent] {
        &self.events
    }

    /// Number of events, the end of track event included.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Never true for a decoded track.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The name given by the first track name event, if any.
    pub fn name(&self) -> Option<&str> {
        self.events.iter().find_map(|e| match e.event() {
            Event::Meta(MetaEvent::TrackName(name)) => Some(name.as_str()),
            _ => None,
        })
    }

    /// The final, end of track event.
    pub fn end_of_track(&self) -> Option<&TrackEvent> {
        self.events.last().filter(|e| e.is_end_of_track())
    }

    /// Sum of all delta times: the track's length in ticks.
    pub fn duration_ticks(&self) -> u64 {
        self.events.iter().map(|e| e.delta_time() as u64).sum()
    }

    /// Iterate over the events
    pub fn iter(&self) -> core::slice::Iter<'_, TrackEvent> {
        self.events.iter()
    }

    /// Consumes the track, returning its events
    pub fn into_events(self) -> Vec<TrackEvent> {
        self.events
    }
}

impl<'a> IntoIterator for &'a Track {
    type Item = &'a TrackEvent;
    type IntoIter = core::slice::Iter<'a, TrackEvent>;
    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[doc = r#"
Reads one track chunk and decodes its events until end of track.

```text
"MTrk" | length (4) | event* ... FF 2F 00
```

The chunk length is checked against the bytes the events consumed unless
disabled in [`ParseOptions`]. Unknown chunks in front of the track are skipped
only if [`ParseOptions::skip_unknown_chunks`] is set.
"#]
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackDecoder {
    options: ParseOptions,
}

impl TrackDecoder {
    /// Create a decoder with the given options
    pub const fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Decodes the next track chunk at the reader's cursor.
    pub fn decode<R: MidiSource>(&self, reader: &mut Reader<R>) -> ReadResult<Track> {
        let chunk = self.read_track_header(reader)?;
        let data_start = reader.buffer_position();
        let declared = chunk.length();
        let declared_end = data_start.saturating_add(declared as usize);
        let check_length = self.options.checks_chunk_length();

        let mut decoder = EventDecoder::new(self.options.sysex_handling());
        let mut events = Vec::new();
        loop {
            let position = reader.buffer_position();
            if check_length && position > declared_end {
                return Err(length_mismatch(position, declared, position - data_start)
                    .in_event(events.len()));
            }
            if reader.is_at_end() || (check_length && position == declared_end) {
                return Err(
                    ReaderError::parse_error(position, ParseError::MissingEndOfTrack)
                        .in_event(events.len()),
                );
            }

            let event = decoder
                .read_event(reader)
                .map_err(|e| e.in_event(events.len()))?;
            let done = event.is_end_of_track();
            events.push(event);
            if done {
                break;
            }
        }

        let consumed = reader.buffer_position() - data_start;
        if check_length && consumed != declared as usize {
            return Err(length_mismatch(reader.buffer_position(), declared, consumed)
                .in_event(events.len() - 1));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            events = events.len(),
            bytes = consumed,
            "decoded track chunk"
        );

        Ok(Track { events })
    }

    fn read_track_header<R: MidiSource>(&self, reader: &mut Reader<R>) -> ReadResult<ChunkHeader> {
        loop {
            let chunk_start = reader.buffer_position();
            let chunk = ChunkHeader::read(reader)?;
            if chunk.is_track() {
                return Ok(chunk);
            }
            if !self.options.skips_unknown_chunks() {
                return Err(ReaderError::parse_error(
                    chunk_start,
                    ParseError::InvalidChunkId(chunk.id()),
                ));
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(
                id = ?chunk.id(),
                length = chunk.length(),
                "skipping unknown chunk"
            );
            reader.skip(chunk.length() as usize)?;
        }
    }
}

fn length_mismatch(position: usize, declared: u32, consumed: usize) -> ReaderError {
    ReaderError::parse_error(
        position,
        ParseError::ChunkLengthMismatch { declared, consumed },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        SysExHandling,
        events::SysExEvent,
        message::channel::{Channel, ChannelEvent, ChannelMessage},
    };
    use alloc::vec;
    use pretty_assertions::assert_eq;

    fn chunk(id: &[u8; 4], data: &[u8]) -> Vec<u8> {
        let mut bytes = id.to_vec();
        bytes.extend_from_slice(&(data.len() as u32).to_be_bytes());
        bytes.extend_from_slice(data);
        bytes
    }

    const SIMPLE: &[u8] = &[
        0x00, 0xFF, 0x03, 0x04, b'L', b'e', b'a', b'd', // track name
        0x00, 0x90, 0x3C, 0x64, // note on
        0x60, 0x3C, 0x00, // running status note on
        0x00, 0xFF, 0x2F, 0x00, // end of track
    ];

    #[test]
    fn decodes_until_end_of_track() {
        let bytes = chunk(b"MTrk", SIMPLE);
        let mut reader = Reader::new(bytes);
        let track = Track::read(&mut reader).unwrap();

        assert_eq!(track.len(), 4);
        assert_eq!(track.name(), Some("Lead"));
        assert_eq!(track.duration_ticks(), 0x60);
        assert_eq!(
            track.events()[2].event(),
            &Event::Channel(ChannelEvent::new(
                Channel::One,
                ChannelMessage::NoteOn {
                    note: 0x3C,
                    velocity: 0
                }
            ))
        );
        assert!(track.end_of_track().is_some());
        assert_eq!(track.iter().filter(|e| e.is_end_of_track()).count(), 1);
        assert!(reader.is_at_end());
    }

    #[test]
    fn stops_at_end_of_track() {
        let mut data = SIMPLE.to_vec();
        // a trailing event after the end of track is left unread
        data.extend_from_slice(&[0x00, 0x90, 0x40, 0x40]);
        let bytes = chunk(b"MTrk", &data);
        let mut reader = Reader::new(bytes);
        let track = TrackDecoder::new(ParseOptions::new().check_chunk_length(false))
            .decode(&mut reader)
            .unwrap();
        assert!(track.events().last().unwrap().is_end_of_track());
        assert_eq!(reader.remaining(), 4);
    }

    #[test]
    fn length_mismatch_is_reported() {
        let mut bytes = chunk(b"MTrk", SIMPLE);
        bytes[7] += 2;
        bytes.extend_from_slice(&[0x00, 0x00]);
        let err = Track::read(&mut Reader::new(bytes)).unwrap_err();
        assert_eq!(
            err.parse_kind(),
            Some(&ParseError::ChunkLengthMismatch {
                declared: SIMPLE.len() as u32 + 2,
                consumed: SIMPLE.len()
            })
        );
        assert_eq!(err.context().event, Some(3));
    }

    #[test]
    fn missing_end_of_track() {
        let data = &SIMPLE[..SIMPLE.len() - 4];
        let err = Track::read(&mut Reader::new(chunk(b"MTrk", data))).unwrap_err();
        assert_eq!(err.parse_kind(), Some(&ParseError::MissingEndOfTrack));
        assert_eq!(err.context().event, Some(3));

        let lenient = TrackDecoder::new(ParseOptions::new().check_chunk_length(false));
        let err = lenient
            .decode(&mut Reader::new(chunk(b"MTrk", data)))
            .unwrap_err();
        assert_eq!(err.parse_kind(), Some(&ParseError::MissingEndOfTrack));
    }

    #[test]
    fn events_overrunning_the_chunk() {
        let mut bytes = chunk(b"MTrk", SIMPLE);
        // declare the chunk to end in the middle of the second event
        bytes[7] = 10;
        let err = Track::read(&mut Reader::new(bytes)).unwrap_err();
        assert_eq!(
            err.parse_kind(),
            Some(&ParseError::ChunkLengthMismatch {
                declared: 10,
                consumed: 12
            })
        );
    }

    #[test]
    fn wrong_chunk_id() {
        let err = Track::read(&mut Reader::new(chunk(b"MTrx", SIMPLE))).unwrap_err();
        assert_eq!(err.parse_kind(), Some(&ParseError::InvalidChunkId(*b"MTrx")));
        assert_eq!(err.position(), 0);
    }

    #[test]
    fn skips_unknown_chunks_when_asked() {
        let mut bytes = chunk(b"XFIH", &[1, 2, 3]);
        bytes.extend(chunk(b"MTrk", SIMPLE));
        let options = ParseOptions::new().skip_unknown_chunks(true);
        let track = TrackDecoder::new(options)
            .decode(&mut Reader::new(bytes))
            .unwrap();
        assert_eq!(track.len(), 4);
    }

    #[test]
    fn running_status_does_not_leak_between_tracks() {
        let mut bytes = chunk(b"MTrk", SIMPLE);
        bytes.extend(chunk(b"MTrk", &[0x00, 0x3C, 0x40, 0x00, 0xFF, 0x2F, 0x00]));
        let mut reader = Reader::new(bytes);
        let decoder = TrackDecoder::default();
        decoder.decode(&mut reader).unwrap();
        let err = decoder.decode(&mut reader).unwrap_err();
        assert_eq!(err.parse_kind(), Some(&ParseError::InvalidStatus(0x3C)));
        assert_eq!(err.context().event, Some(0));
    }

    #[test]
    fn sysex_in_track() {
        let data = [0x00, 0xF0, 0x02, 0x43, 0xF7, 0x00, 0xFF, 0x2F, 0x00];
        let bytes = chunk(b"MTrk", &data);

        let err = Track::read(&mut Reader::new(bytes.clone())).unwrap_err();
        assert_eq!(err.parse_kind(), Some(&ParseError::UnsupportedEvent(0xF0)));

        let options = ParseOptions::new().sysex(SysExHandling::Decode);
        let track = TrackDecoder::new(options)
            .decode(&mut Reader::new(bytes))
            .unwrap();
        assert_eq!(
            track.events()[0].event(),
            &Event::SysEx(SysExEvent::SysEx(vec![0x43, 0xF7]))
        );
    }
}
