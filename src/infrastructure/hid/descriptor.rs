//! Report descriptor and SDP identity
//!
//! The descriptor is the byte-encoded schema a host uses to interpret our
//! input reports; it is fixed at compile time and advertised verbatim.

/// HID device subclass: combo keyboard + pointing device.
pub const SUBCLASS_COMBO: u8 = 0xC0;

/// Report descriptor for a standard boot keyboard.
///
/// Declares one input report (ID 1) with:
///   - 8 modifier key bits
///   - 1 reserved byte
///   - 5 LED output bits + 3 padding bits
///   - 6-byte key-code array
pub const KEYBOARD_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x06, // Usage (Keyboard)
    0xA1, 0x01, // Collection (Application)
    0x85, 0x01, //   Report ID (1)
    //
    //   Modifier keys (8 bits)
    0x05, 0x07, //   Usage Page (Key Codes)
    0x19, 0xE0, //   Usage Minimum (224)
    0x29, 0xE7, //   Usage Maximum (231)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x08, //   Report Count (8)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    //   Reserved byte
    0x95, 0x01, //   Report Count (1)
    0x75, 0x08, //   Report Size (8)
    0x81, 0x01, //   Input (Constant)
    //
    //   LED output (5 bits + 3 padding)
    0x95, 0x05, //   Report Count (5)
    0x75, 0x01, //   Report Size (1)
    0x05, 0x08, //   Usage Page (LEDs)
    0x19, 0x01, //   Usage Minimum (1)
    0x29, 0x05, //   Usage Maximum (5)
    0x91, 0x02, //   Output (Data, Variable, Absolute)
    0x95, 0x01, //   Report Count (1)
    0x75, 0x03, //   Report Size (3)
    0x91, 0x01, //   Output (Constant)
    //
    //   Key codes (6 bytes)
    0x95, 0x06, //   Report Count (6)
    0x75, 0x08, //   Report Size (8)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x65, //   Logical Maximum (101)
    0x05, 0x07, //   Usage Page (Key Codes)
    0x19, 0x00, //   Usage Minimum (0)
    0x29, 0x65, //   Usage Maximum (101)
    0x81, 0x00, //   Input (Data, Array)
    //
    0xC0, // End Collection
];

/// Static identity advertised to hosts via SDP.
#[derive(Debug, Clone)]
pub struct DeviceIdentity {
    pub name: String,
    pub description: String,
    pub provider: String,
    pub version: String,
    pub subclass: u8,
}

impl Default for DeviceIdentity {
    fn default() -> Self {
        Self {
            name: "KeyBlue".to_string(),
            description: "Bluetooth Keyboard".to_string(),
            provider: "keyblue".to_string(),
            version: "1.0".to_string(),
            subclass: SUBCLASS_COMBO,
        }
    }
}

/// Identity + descriptor bundle handed to the stack on registration.
#[derive(Debug, Clone)]
pub struct SdpRecord {
    pub identity: DeviceIdentity,
    pub descriptor: Vec<u8>,
}

impl SdpRecord {
    /// Build the record for the fixed keyboard descriptor.
    pub fn keyboard(identity: DeviceIdentity) -> Self {
        Self {
            identity,
            descriptor: KEYBOARD_REPORT_DESCRIPTOR.to_vec(),
        }
    }
}
