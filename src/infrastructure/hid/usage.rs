//! HID usage-table constants for the keyboard page (0x07).

/// Modifier byte bit masks.
pub mod modifier {
    pub const NONE: u8 = 0x00;
    pub const LEFT_CTRL: u8 = 0x01;
    pub const LEFT_SHIFT: u8 = 0x02;
    pub const LEFT_ALT: u8 = 0x04;
    pub const LEFT_GUI: u8 = 0x08;
    pub const RIGHT_CTRL: u8 = 0x10;
    pub const RIGHT_SHIFT: u8 = 0x20;
    pub const RIGHT_ALT: u8 = 0x40;
    pub const RIGHT_GUI: u8 = 0x80;
}

// Letters occupy a contiguous run starting at 'a'
pub const KEY_A: u8 = 0x04;
pub const KEY_Z: u8 = 0x1D;

// Digits: '1'..'9' then '0'
pub const KEY_1: u8 = 0x1E;
pub const KEY_0: u8 = 0x27;

pub const KEY_ENTER: u8 = 0x28;
pub const KEY_ESCAPE: u8 = 0x29;
pub const KEY_BACKSPACE: u8 = 0x2A;
pub const KEY_TAB: u8 = 0x2B;
pub const KEY_SPACE: u8 = 0x2C;

/// Map an ASCII character to a (modifier, keycode) pair.
///
/// Covers letters (upper case via left shift), digits, space, and newline.
/// Returns `None` for anything the boot-keyboard layout cannot express here.
pub fn keycode_for_char(c: char) -> Option<(u8, u8)> {
    match c {
        'a'..='z' => Some((modifier::NONE, KEY_A + (c as u8 - b'a'))),
        'A'..='Z' => Some((modifier::LEFT_SHIFT, KEY_A + (c as u8 - b'A'))),
        '1'..='9' => Some((modifier::NONE, KEY_1 + (c as u8 - b'1'))),
        '0' => Some((modifier::NONE, KEY_0)),
        ' ' => Some((modifier::NONE, KEY_SPACE)),
        '\n' => Some((modifier::NONE, KEY_ENTER)),
        '\t' => Some((modifier::NONE, KEY_TAB)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_mapping() {
        assert_eq!(keycode_for_char('a'), Some((modifier::NONE, 0x04)));
        assert_eq!(keycode_for_char('z'), Some((modifier::NONE, KEY_Z)));
        assert_eq!(keycode_for_char('A'), Some((modifier::LEFT_SHIFT, 0x04)));
    }

    #[test]
    fn digit_mapping() {
        assert_eq!(keycode_for_char('1'), Some((modifier::NONE, KEY_1)));
        assert_eq!(keycode_for_char('0'), Some((modifier::NONE, KEY_0)));
    }

    #[test]
    fn unmapped_characters() {
        assert_eq!(keycode_for_char('é'), None);
        assert_eq!(keycode_for_char('!'), None);
    }
}
