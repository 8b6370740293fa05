/// `FF 58 04 nn dd cc bb`
///
/// The denominator is stored as a power of two: 2 is a quarter note, 3 an
/// eighth note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSignature {
    /// Beats per bar
    pub numerator: u8,
    /// Negative power of two of the beat unit
    pub denominator: u8,
    /// MIDI clocks per metronome click
    pub clocks_per_click: u8,
    /// Notated 32nd notes per MIDI quarter note
    pub thirty_second_per_24_clocks: u8,
}

impl TimeSignature {
    /// Build from the four payload bytes.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            numerator: bytes[0],
            denominator: bytes[1],
            clocks_per_click: bytes[2],
            thirty_second_per_24_clocks: bytes[3],
        }
    }

    /// The denominator as written in a score, e.g. `8` for 6/8.
    ///
    /// `None` if the stored exponent does not fit a `u32`.
    pub const fn denominator_value(&self) -> Option<u32> {
        1u32.checked_shl(self.denominator as u32)
    }
}

/// `FF 59 02 sf mi`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeySignature {
    /// Negative for flats, positive for sharps
    pub flats_sharps: i8,
    /// 0 for major, 1 for minor
    pub major_minor: u8,
}

impl KeySignature {
    /// Build from the two payload bytes.
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self {
            flats_sharps: bytes[0] as i8,
            major_minor: bytes[1],
        }
    }

    /// True for a minor key.
    pub const fn is_minor(&self) -> bool {
        self.major_minor == 1
    }
}

#[test]
fn compound_meter() {
    let sig = TimeSignature::from_bytes([6, 3, 36, 8]);
    assert_eq!(sig.denominator_value(), Some(8));
    assert_eq!(TimeSignature::from_bytes([4, 40, 24, 8]).denominator_value(), None);
}

#[test]
fn flats_are_negative() {
    let key = KeySignature::from_bytes([0xFE, 0x01]);
    assert_eq!(key.flats_sharps, -2);
    assert!(key.is_minor());
}
