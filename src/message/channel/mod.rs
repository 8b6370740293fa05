#![doc = r#"
Contains all Channel event types

A channel event is identified by a status byte in `0x80..=0xEF`. The high
nibble selects the message, the low nibble the channel:

```text
 status      data bytes
|1sss|cccc| |0xxxxxxx| (|0yyyyyyy|)
```

Every message carries two data bytes, except [`ChannelMessage::Program`] and
[`ChannelMessage::ChannelPressure`] which carry one.
"#]
mod channel_id;
pub use channel_id::*;

use crate::{
    ParseError,
    reader::{MidiSource, ReadResult, Reader, ReaderError},
};
use num_enum::{IntoPrimitive, TryFromPrimitive};

#[doc = r#"
The registry of channel message decoders, keyed by the high nibble of the status byte.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum ChannelStatus {
    /// `0x8n`
    NoteOff = 0x8,
    /// `0x9n`
    NoteOn = 0x9,
    /// `0xAn`, polyphonic key pressure
    NotePressure = 0xA,
    /// `0xBn`, control change
    Controller = 0xB,
    /// `0xCn`, program change
    Program = 0xC,
    /// `0xDn`, channel aftertouch
    ChannelPressure = 0xD,
    /// `0xEn`
    PitchBend = 0xE,
}

impl ChannelStatus {
    /// Look up the decoder for a full status byte.
    pub fn from_status(status: u8) -> Result<Self, ParseError> {
        Self::try_from(status >> 4).map_err(|_| ParseError::UnknownChannelStatus(status))
    }

    /// The number of data bytes following the status byte.
    pub const fn data_len(&self) -> usize {
        match self {
            Self::Program | Self::ChannelPressure => 1,
            _ => 2,
        }
    }

    /// Consumes exactly [`Self::data_len`] bytes and builds the message.
    pub fn decode<R: MidiSource>(&self, reader: &mut Reader<R>) -> ReadResult<ChannelMessage> {
        let msg = match self {
            Self::NoteOff => {
                let [note, velocity] = reader.read_exact_size::<2>()?;
                ChannelMessage::NoteOff { note, velocity }
            }
            Self::NoteOn => {
                let [note, velocity] = reader.read_exact_size::<2>()?;
                ChannelMessage::NoteOn { note, velocity }
            }
            Self::NotePressure => {
                let [note, pressure] = reader.read_exact_size::<2>()?;
                ChannelMessage::NotePressure { note, pressure }
            }
            Self::Controller => {
                let [controller, value] = reader.read_exact_size::<2>()?;
                ChannelMessage::Controller { controller, value }
            }
            Self::Program => ChannelMessage::Program {
                program: reader.read_next()?,
            },
            Self::ChannelPressure => ChannelMessage::ChannelPressure {
                pressure: reader.read_next()?,
            },
            Self::PitchBend => {
                let [lsb, msb] = reader.read_exact_size::<2>()?;
                ChannelMessage::PitchBend { lsb, msb }
            }
        };
        Ok(msg)
    }
}

/// The payload of a channel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelMessage {
    /// Release a key
    NoteOff {
        /// Key number
        note: u8,
        /// Release velocity
        velocity: u8,
    },
    /// Strike a key. A velocity of zero is conventionally a note off; it is kept as is.
    NoteOn {
        /// Key number
        note: u8,
        /// Strike velocity
        velocity: u8,
    },
    /// Aftertouch on a single key
    NotePressure {
        /// Key number
        note: u8,
        /// Pressure amount
        pressure: u8,
    },
    /// Control change
    Controller {
        /// Controller number
        controller: u8,
        /// New value
        value: u8,
    },
    /// Select a patch
    Program {
        /// Program number
        program: u8,
    },
    /// Aftertouch for the whole channel
    ChannelPressure {
        /// Pressure amount
        pressure: u8,
    },
    /// Pitch wheel, split in two seven bit halves
    PitchBend {
        /// Low seven bits
        lsb: u8,
        /// High seven bits
        msb: u8,
    },
}

impl ChannelMessage {
    /// The registry key this message decodes from.
    pub const fn status(&self) -> ChannelStatus {
        match self {
            Self::NoteOff { .. } => ChannelStatus::NoteOff,
            Self::NoteOn { .. } => ChannelStatus::NoteOn,
            Self::NotePressure { .. } => ChannelStatus::NotePressure,
            Self::Controller { .. } => ChannelStatus::Controller,
            Self::Program { .. } => ChannelStatus::Program,
            Self::ChannelPressure { .. } => ChannelStatus::ChannelPressure,
            Self::PitchBend { .. } => ChannelStatus::PitchBend,
        }
    }

    /// The 14 bit pitch bend value, `0x2000` being centered.
    pub const fn pitch_bend(&self) -> Option<u16> {
        match self {
            Self::PitchBend { lsb, msb } => {
                Some(((*msb as u16 & 0x7F) << 7) | (*lsb as u16 & 0x7F))
            }
            _ => None,
        }
    }
}

#[doc = r#"
A channel message bound to the channel it was sent on.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelEvent {
    channel: Channel,
    message: ChannelMessage,
}

impl ChannelEvent {
    /// Create a new channel event
    pub const fn new(channel: Channel, message: ChannelMessage) -> Self {
        Self { channel, message }
    }

    /// Decodes the data bytes that follow `status`.
    ///
    /// `status` must already be known to be a channel status (`0x80..=0xEF`).
    pub fn read<R: MidiSource>(status: u8, reader: &mut Reader<R>) -> ReadResult<Self> {
        let kind = ChannelStatus::from_status(status)
            .map_err(|e| ReaderError::parse_error(reader.buffer_position(), e))?;
        let message = kind.decode(reader)?;
        Ok(Self::new(Channel::from_status(status), message))
    }

    /// The channel of the event
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// The message carried on the channel
    pub const fn message(&self) -> &ChannelMessage {
        &self.message
    }
}
