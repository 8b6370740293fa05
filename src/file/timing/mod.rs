mod smpte;
pub use smpte::*;

use crate::SmpteError;

/// The header timing type.
///
/// The header's division word is either the number of ticks per quarter note
/// (bit 15 clear) or an SMPTE frame rate and ticks per frame (bit 15 set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Timing {
    /// The midi file's delta times are defined using a tick rate per quarter note
    TicksPerQuarterNote(u16),

    /// The midi file's delta times are defined using an SMPTE and MIDI Time Code
    Smpte(SmpteHeader),
}

impl Timing {
    /// Interpret the raw division word of the header.
    pub const fn from_division(division: u16) -> Result<Self, SmpteError> {
        let [hi, lo] = division.to_be_bytes();
        if hi >> 7 == 0 {
            return Ok(Self::TicksPerQuarterNote(division));
        }
        //Bits 14 thru 8 contain one of the four values -24, -25, -29, or -30
        let fps = match hi as i8 {
            -24 => SmpteFps::TwentyFour,
            -25 => SmpteFps::TwentyFive,
            //drop frame (29.97)
            -29 => SmpteFps::TwentyNine,
            -30 => SmpteFps::Thirty,
            other => return Err(SmpteError::HeaderFrameTime(other)),
        };
        Ok(Self::Smpte(SmpteHeader {
            fps,
            ticks_per_frame: lo,
        }))
    }

    /// Returns Some if the midi timing is defined
    /// as ticks per quarter note
    pub const fn ticks_per_quarter_note(&self) -> Option<u16> {
        match self {
            Self::TicksPerQuarterNote(t) => Some(*t),
            _ => None,
        }
    }
}

/// A representation of the `smpte` timing for a MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmpteHeader {
    pub(crate) fps: SmpteFps,
    pub(crate) ticks_per_frame: u8,
}

impl SmpteHeader {
    /// Returns the frames per second
    pub const fn fps(&self) -> SmpteFps {
        self.fps
    }

    /// Returns the ticks per frame
    pub const fn ticks_per_frame(&self) -> u8 {
        self.ticks_per_frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn metrical_division() {
        let timing = Timing::from_division(0x01E0).unwrap();
        assert_eq!(timing, Timing::TicksPerQuarterNote(480));
        assert_eq!(timing.ticks_per_quarter_note(), Some(480));
    }

    #[test]
    fn smpte_division() {
        // -25 fps, 40 ticks per frame
        let timing = Timing::from_division(0xE728).unwrap();
        let Timing::Smpte(header) = timing else {
            panic!("expected smpte timing, got {timing:?}");
        };
        assert_eq!(header.fps(), SmpteFps::TwentyFive);
        assert_eq!(header.ticks_per_frame(), 40);
        assert_eq!(timing.ticks_per_quarter_note(), None);
    }

    #[test]
    fn bad_smpte_rate() {
        assert_eq!(
            Timing::from_division(0xE028),
            Err(SmpteError::HeaderFrameTime(-32))
        );
    }
}
