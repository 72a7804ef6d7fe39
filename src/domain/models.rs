//! Core types shared across the crate.

/// Lifecycle of the HID-device session with the Bluetooth stack.
///
/// ```text
/// Unregistered --register + stack ack--> Registered
/// Registered   --host plugs in--------> Connected
/// Connected    --host unplugs---------> Registered
/// any state    --service lost---------> Unregistered
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No HID-device role held with the stack.
    Unregistered,
    /// Role registered and advertised; no host plugged in.
    Registered,
    /// A host is plugged in and reports can be delivered.
    Connected,
}

/// Permission grants the registrar must hold before touching the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant {
    BluetoothConnect,
    Location,
}

impl std::fmt::Display for Grant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grant::BluetoothConnect => write!(f, "bluetooth-connect"),
            Grant::Location => write!(f, "location"),
        }
    }
}

/// Point-in-time view of the session, published on a watch channel.
///
/// `host` is the Bluetooth address of the plugged host. It is set and
/// cleared only by the session tracker; everyone else observes it through
/// the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub state: ConnectionState,
    pub host: Option<u64>,
}

impl SessionSnapshot {
    pub const fn unregistered() -> Self {
        Self {
            state: ConnectionState::Unregistered,
            host: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::unregistered()
    }
}
