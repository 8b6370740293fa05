use crate::{
    ParseError, SysExHandling,
    events::{Event, SysExEvent, TrackEvent},
    file::meta::MetaEvent,
    message::channel::ChannelEvent,
    reader::{MidiSource, ReadResult, Reader, ReaderError},
};

#[doc = r#"
Decodes the events of one track, one at a time.

The decoder owns the track's running status. A status byte (bit 7 set)
replaces it; a data byte in status position is left unread and the event is
decoded with the previous status, which lets consecutive channel events of the
same kind omit their status byte:

```text
00 90 3C 40   note on, status 0x90
60    3C 00   note on, status omitted
```

Use a fresh decoder for every track.
"#]
#[derive(Debug, Clone, Default)]
pub struct EventDecoder {
    running_status: u8,
    sysex: SysExHandling,
}

impl EventDecoder {
    /// A decoder with no running status yet.
    pub const fn new(sysex: SysExHandling) -> Self {
        Self {
            running_status: 0,
            sysex,
        }
    }

    /// The status applied to the last event, `None` before the first one.
    pub const fn running_status(&self) -> Option<u8> {
        match self.running_status {
            0 => None,
            s => Some(s),
        }
    }

    /// Decodes the delta time, status, and payload of the next event.
    pub fn read_event<R: MidiSource>(&mut self, reader: &mut Reader<R>) -> ReadResult<TrackEvent> {
        let delta_time = reader.read_vlq()?;
        let status_position = reader.buffer_position();
        let status = reader.read_next()?;
        if status & 0x80 != 0 {
            self.running_status = status;
        } else {
            reader.step_back()?;
        }

        let event: Event = match self.running_status {
            0xFF => MetaEvent::read(reader)?.into(),
            s @ 0x80..=0xEF => ChannelEvent::read(s, reader)?.into(),
            s @ (0xF0 | 0xF7) => self.read_sysex(s, status_position, reader)?.into(),
            _ => {
                return Err(ReaderError::parse_error(
                    status_position,
                    ParseError::InvalidStatus(status),
                ));
            }
        };
        Ok(TrackEvent::new(delta_time, event))
    }

    fn read_sysex<R: MidiSource>(
        &self,
        status: u8,
        status_position: usize,
        reader: &mut Reader<R>,
    ) -> ReadResult<SysExEvent> {
        if self.sysex == SysExHandling::Reject {
            return Err(ReaderError::parse_error(
                status_position,
                ParseError::UnsupportedEvent(status),
            ));
        }
        let length = reader.read_vlq()?;
        let data = reader.read_exact(length as usize)?.to_vec();
        Ok(if status == 0xF0 {
            SysExEvent::SysEx(data)
        } else {
            SysExEvent::EscapeSequence(data)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        file::meta::Tempo,
        message::channel::{Channel, ChannelMessage},
    };
    use alloc::{string::ToString, vec};
    use pretty_assertions::assert_eq;

    fn note_on(delta_time: u32, channel: Channel, note: u8, velocity: u8) -> TrackEvent {
        TrackEvent::new(
            delta_time,
            ChannelEvent::new(channel, ChannelMessage::NoteOn { note, velocity }),
        )
    }

    #[test]
    fn tempo_event() {
        let bytes = [0x81, 0x8F, 0x60, 0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20];
        let mut reader = Reader::from_byte_slice(&bytes);
        let event = EventDecoder::default().read_event(&mut reader).unwrap();
        assert_eq!(
            event,
            TrackEvent::new(18400, MetaEvent::Tempo(Tempo::new(500_000)))
        );
        assert_eq!(reader.buffer_position(), bytes.len());
    }

    #[test]
    fn two_byte_delta_with_continuation_bit() {
        // E0 continues the quantity, so FF 51 are swallowed as delta bytes
        // and 03 lands in status position with no running status set
        let bytes = [0x91, 0xE0, 0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20];
        let mut reader = Reader::from_byte_slice(&bytes);
        let err = EventDecoder::default().read_event(&mut reader).unwrap_err();
        assert_eq!(err.parse_kind(), Some(&ParseError::InvalidStatus(0x03)));
        assert_eq!(err.position(), 4);

        let mut reader = Reader::from_byte_slice(&bytes);
        assert_eq!(reader.read_vlq().unwrap(), 37_240_785);
    }

    #[test]
    fn text_event() {
        let bytes = [0x00, 0xFF, 0x01, 0x04, b't', b'e', b's', b't'];
        let mut reader = Reader::from_byte_slice(&bytes);
        let event = EventDecoder::default().read_event(&mut reader).unwrap();
        assert_eq!(event.delta_time(), 0);
        assert_eq!(event.event(), &Event::Meta(MetaEvent::Text("test".to_string())));
    }

    #[test]
    fn running_status_reuses_previous_channel_status() {
        let bytes = [0x00, 0x93, 0x3C, 0x40, 0x60, 0x3E, 0x41, 0x00, 0xFF, 0x2F, 0x00];
        let mut reader = Reader::from_byte_slice(&bytes);
        let mut decoder = EventDecoder::default();

        assert_eq!(
            decoder.read_event(&mut reader).unwrap(),
            note_on(0, Channel::Four, 0x3C, 0x40)
        );
        assert_eq!(reader.buffer_position(), 4);

        assert_eq!(
            decoder.read_event(&mut reader).unwrap(),
            note_on(0x60, Channel::Four, 0x3E, 0x41)
        );
        assert_eq!(reader.buffer_position(), 7);
        assert_eq!(decoder.running_status(), Some(0x93));

        assert!(decoder.read_event(&mut reader).unwrap().is_end_of_track());
        assert_eq!(decoder.running_status(), Some(0xFF));
    }

    #[test]
    fn running_status_with_single_byte_payload() {
        let bytes = [0x00, 0xC5, 0x10, 0x00, 0x11];
        let mut reader = Reader::from_byte_slice(&bytes);
        let mut decoder = EventDecoder::default();
        decoder.read_event(&mut reader).unwrap();
        let second = decoder.read_event(&mut reader).unwrap();
        assert_eq!(
            second.event(),
            &Event::Channel(ChannelEvent::new(
                Channel::Six,
                ChannelMessage::Program { program: 0x11 }
            ))
        );
        assert!(reader.is_at_end());
    }

    #[test]
    fn data_byte_without_running_status() {
        let mut reader = Reader::from_byte_slice(&[0x00, 0x3C, 0x40]);
        let err = EventDecoder::default().read_event(&mut reader).unwrap_err();
        assert_eq!(err.parse_kind(), Some(&ParseError::InvalidStatus(0x3C)));
        assert_eq!(err.position(), 1);
    }

    #[test]
    fn system_common_status_is_invalid() {
        let mut reader = Reader::from_byte_slice(&[0x00, 0xF2, 0x00, 0x00]);
        let err = EventDecoder::default().read_event(&mut reader).unwrap_err();
        assert_eq!(err.parse_kind(), Some(&ParseError::InvalidStatus(0xF2)));
    }

    #[test]
    fn sysex_rejected_by_default() {
        let mut reader = Reader::from_byte_slice(&[0x00, 0xF0, 0x02, 0x7E, 0xF7]);
        let err = EventDecoder::default().read_event(&mut reader).unwrap_err();
        assert_eq!(err.parse_kind(), Some(&ParseError::UnsupportedEvent(0xF0)));
        assert_eq!(err.position(), 1);
    }

    #[test]
    fn sysex_decoded_when_enabled() {
        let bytes = [0x00, 0xF0, 0x03, 0x7E, 0x09, 0xF7, 0x10, 0xF7, 0x01, 0xF7];
        let mut reader = Reader::from_byte_slice(&bytes);
        let mut decoder = EventDecoder::new(SysExHandling::Decode);
        assert_eq!(
            decoder.read_event(&mut reader).unwrap(),
            TrackEvent::new(0, SysExEvent::SysEx(vec![0x7E, 0x09, 0xF7]))
        );
        assert_eq!(
            decoder.read_event(&mut reader).unwrap(),
            TrackEvent::new(0x10, SysExEvent::EscapeSequence(vec![0xF7]))
        );
        assert!(reader.is_at_end());
    }

    #[test]
    fn truncated_delta_time() {
        let mut reader = Reader::from_byte_slice(&[0x91]);
        let err = EventDecoder::default().read_event(&mut reader).unwrap_err();
        assert!(err.is_truncated());
    }
}
