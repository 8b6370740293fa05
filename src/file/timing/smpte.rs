#![doc = r#"
SMPTE frame rates

A file may time its events in frames instead of beats. The header then
stores a negative frame rate and a number of ticks per frame, and SMPTE
offset events encode the same four rates in two bits.
"#]

/// The four frame rates a MIDI file can express.
///
/// `TwentyNine` is the 29.97 fps NTSC drop-frame rate: frame numbers skip
/// values so the time code stays aligned with the wall clock, no frames are
/// actually dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmpteFps {
    /// 24 frames per second, film
    TwentyFour,
    /// 25 frames per second, PAL/SECAM
    TwentyFive,
    /// 29.97 frames per second (30000/1001), NTSC drop frame
    TwentyNine,
    /// 30 frames per second
    Thirty,
}

impl SmpteFps {
    /// The nominal rate used for tick division. Drop frame divides by 30.
    pub const fn as_division(&self) -> u8 {
        match self {
            Self::TwentyFour => 24,
            Self::TwentyFive => 25,
            Self::TwentyNine | Self::Thirty => 30,
        }
    }

    /// The actual rate, fractional for drop frame.
    pub const fn as_f64(&self) -> f64 {
        match self {
            Self::TwentyFour => 24.,
            Self::TwentyFive => 25.,
            Self::TwentyNine => DROP_FRAME,
            Self::Thirty => 30.,
        }
    }
}

const DROP_FRAME: f64 = 30_000. / 1001.;

#[test]
fn drop_frame_divides_by_thirty() {
    assert_eq!(SmpteFps::TwentyNine.as_division(), 30);
    assert!(SmpteFps::TwentyNine.as_f64() < 29.98);
    assert!(SmpteFps::TwentyNine.as_f64() > 29.97);
}
