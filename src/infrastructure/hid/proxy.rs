//! Platform seams
//!
//! The Bluetooth stack and the permission-grant flow are consumed as black
//! boxes. These traits are the only surface the session core touches; the
//! platform (or the [`super::loopback`] stand-in) implements them.

use crate::domain::models::Grant;
use crate::error::HidError;
use crate::infrastructure::hid::descriptor::SdpRecord;
use tokio::sync::mpsc;

/// Asynchronous callback delivered by the stack.
///
/// The platform guarantees sequential delivery on a single callback thread;
/// the session tracker is the sole consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileEvent {
    /// Outcome of `register_app`, or a later registration change. `host`
    /// carries the plugged device if one was already connected when the
    /// registration landed.
    AppStatusChanged { host: Option<u64>, registered: bool },
    /// A host plugged in or unplugged.
    ConnectionStateChanged { host: u64, connected: bool },
    /// The profile service itself went away; the session is dead.
    ServiceDisconnected,
}

/// Handle to the platform's HID profile service.
pub trait HidProfileProxy: Send + Sync {
    /// Request the HID-device role for the given SDP record. Callbacks are
    /// delivered through `events`. A successful return only means the
    /// request was accepted; registration is confirmed asynchronously via
    /// [`ProfileEvent::AppStatusChanged`].
    fn register_app(
        &self,
        sdp: &SdpRecord,
        events: mpsc::UnboundedSender<ProfileEvent>,
    ) -> Result<(), HidError>;

    /// Drop the HID-device role.
    fn unregister_app(&self);

    /// Deliver an input report to a plugged host.
    fn send_report(&self, host: u64, report_id: u8, payload: &[u8]) -> Result<(), HidError>;
}

/// Read-only view of the platform's permission grants.
pub trait PermissionGate: Send + Sync {
    fn is_granted(&self, grant: Grant) -> bool;
}

/// Grants everything. For demos and tests.
pub struct AllGranted;

impl PermissionGate for AllGranted {
    fn is_granted(&self, _grant: Grant) -> bool {
        true
    }
}
