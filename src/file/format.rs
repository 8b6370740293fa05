use num_enum::{IntoPrimitive, TryFromPrimitive};

#[doc = r#"
How the tracks of a file relate to each other.

The header's format word is kept as read; this is only its interpretation.

- Format 0: a single track carrying every channel
- Format 1: tracks played together, the first usually holding the tempo map
- Format 2: independent single-track patterns, identified by
  sequence number events
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum FormatType {
    /// Format 0
    SingleMultiChannel = 0,
    /// Format 1
    Simultaneous = 1,
    /// Format 2
    SequentiallyIndependent = 2,
}

impl FormatType {
    /// Interpret a header format word.
    pub const fn from_word(word: u16) -> Option<Self> {
        match word {
            0 => Some(Self::SingleMultiChannel),
            1 => Some(Self::Simultaneous),
            2 => Some(Self::SequentiallyIndependent),
            _ => None,
        }
    }
}

#[test]
fn unknown_format_word() {
    assert_eq!(FormatType::from_word(2), Some(FormatType::SequentiallyIndependent));
    assert_eq!(FormatType::from_word(3), None);
    assert_eq!(u16::from(FormatType::Simultaneous), 1);
    assert!(FormatType::try_from(7u16).is_err());
}
