//! Keyboard input report
//!
//! Wire layout (10 bytes):
//! ```text
//! Byte 0:   Report ID (always 1)
//! Byte 1:   Modifier key bitfield
//! Byte 2:   Reserved (always 0x00)
//! Byte 3-8: Up to 6 simultaneous key codes
//! Byte 9:   Trailing pad, always 0x00 (bonded hosts expect the
//!           10-byte frame the device has always sent)
//! ```

/// Report ID declared in the descriptor.
pub const REPORT_ID: u8 = 1;

/// Encoded report size in bytes, report ID included.
pub const KEY_REPORT_LEN: usize = 10;

/// Maximum simultaneously pressed keys the layout can carry.
pub const MAX_KEYS: usize = 6;

/// One keyboard input report.
///
/// A logical keypress always produces two of these: a press report with the
/// key in slot 0, then a release report with every slot zeroed. Sending the
/// release is what prevents stuck-key state on the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyReport {
    /// Modifier key bitfield (see [`super::usage::modifier`]).
    pub modifier: u8,
    /// Key-code array; unused slots are zero.
    pub keys: [u8; MAX_KEYS],
}

impl KeyReport {
    /// Report for a single pressed key.
    pub const fn press(modifier: u8, keycode: u8) -> Self {
        Self {
            modifier,
            keys: [keycode, 0, 0, 0, 0, 0],
        }
    }

    /// All-keys-released report. Modifier and key slots are zero
    /// regardless of what was pressed.
    pub const fn release() -> Self {
        Self {
            modifier: 0,
            keys: [0; MAX_KEYS],
        }
    }

    /// Encode into the 10-byte wire form.
    pub fn encode(&self) -> [u8; KEY_REPORT_LEN] {
        let mut buf = [0u8; KEY_REPORT_LEN];
        buf[0] = REPORT_ID;
        buf[1] = self.modifier;
        // buf[2] is the reserved byte and buf[9] the trailing pad, both 0x00
        buf[3..3 + MAX_KEYS].copy_from_slice(&self.keys);
        buf
    }

    /// Returns `true` if no keys and no modifiers are down.
    pub fn is_release(&self) -> bool {
        self.modifier == 0 && self.keys.iter().all(|&k| k == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_report_wire_format() {
        // 'a' with no modifier
        let report = KeyReport::press(0x00, 0x04);
        assert_eq!(
            report.encode(),
            [0x01, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn press_report_carries_modifier() {
        let report = KeyReport::press(0x02, 0x04);
        let bytes = report.encode();
        assert_eq!(bytes[0], REPORT_ID);
        assert_eq!(bytes[1], 0x02);
        assert_eq!(bytes[2], 0x00);
        assert_eq!(bytes[3], 0x04);
        assert!(bytes[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn release_report_is_all_zero() {
        let report = KeyReport::release();
        assert!(report.is_release());
        assert_eq!(
            report.encode(),
            [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn press_is_not_release() {
        assert!(!KeyReport::press(0x00, 0x04).is_release());
        // A modifier alone still counts as held
        assert!(!KeyReport::press(0x02, 0x00).is_release());
    }
}
