//! WinAnsiEncoding for the standard fonts.

use crate::errors::LayoutError;

/// Characters WinAnsi places in 0x80..=0x9F, indexed by `byte - 0x80`.
/// `None` marks the five unassigned slots.
#[rustfmt::skip]
const HIGH_CONTROL_RANGE: [Option<char>; 32] = [
    Some('€'), None, Some('‚'), Some('ƒ'), Some('„'), Some('…'), Some('†'), Some('‡'),
    Some('ˆ'), Some('‰'), Some('Š'), Some('‹'), Some('Œ'), None, Some('Ž'), None,
    None, Some('‘'), Some('’'), Some('“'), Some('”'), Some('•'), Some('–'), Some('—'),
    Some('˜'), Some('™'), Some('š'), Some('›'), Some('œ'), None, Some('ž'), Some('Ÿ'),
];

/// Maps a character to its WinAnsi byte, if it has one.
pub fn encode_char(c: char) -> Option<u8> {
    match c as u32 {
        0x20..=0x7E | 0xA0..=0xFF => Some(c as u32 as u8),
        _ => HIGH_CONTROL_RANGE
            .iter()
            .position(|slot| *slot == Some(c))
            .map(|i| 0x80 + i as u8),
    }
}

/// Encodes a whole string, failing on the first character WinAnsi cannot represent.
pub fn encode_str(s: &str) -> Result<Vec<u8>, LayoutError> {
    s.chars()
        .map(|c| encode_char(c).ok_or(LayoutError::Unencodable(c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_maps_to_itself() {
        assert_eq!(encode_str("CV | 95%").unwrap(), b"CV | 95%".to_vec());
    }

    #[test]
    fn test_latin1_letters_map_to_their_code_point() {
        assert_eq!(encode_char('ó'), Some(0xF3));
        assert_eq!(encode_char('ñ'), Some(0xF1));
        assert_eq!(encode_char('É'), Some(0xC9));
    }

    #[test]
    fn test_punctuation_in_high_control_range() {
        assert_eq!(encode_char('•'), Some(0x95));
        assert_eq!(encode_char('€'), Some(0x80));
        assert_eq!(encode_char('—'), Some(0x97));
        assert_eq!(encode_char('Ÿ'), Some(0x9F));
    }

    #[test]
    fn test_unencodable_characters_are_rejected() {
        assert_eq!(encode_char('✅'), None);
        assert_eq!(encode_char('\n'), None);
        assert_eq!(encode_str("ok ✅"), Err(LayoutError::Unencodable('✅')));
    }
}
