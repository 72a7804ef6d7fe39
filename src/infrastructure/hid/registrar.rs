//! Profile Registrar
//!
//! Establishes the HID-device role with the stack. Permission grants are
//! checked up front and surfaced as errors instead of being silently
//! skipped; a stack rejection likewise. Nothing is retried automatically,
//! re-registration is caller-driven.

use crate::domain::models::{ConnectionState, Grant, SessionSnapshot};
use crate::error::HidError;
use crate::infrastructure::hid::descriptor::SdpRecord;
use crate::infrastructure::hid::proxy::{HidProfileProxy, PermissionGate};
use crate::infrastructure::hid::session::SessionTracker;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Grants required before any stack call is valid.
const REQUIRED_GRANTS: [Grant; 2] = [Grant::BluetoothConnect, Grant::Location];

pub struct ProfileRegistrar {
    proxy: Arc<dyn HidProfileProxy>,
    permissions: Arc<dyn PermissionGate>,
}

impl ProfileRegistrar {
    pub fn new(proxy: Arc<dyn HidProfileProxy>, permissions: Arc<dyn PermissionGate>) -> Self {
        Self { proxy, permissions }
    }

    /// Request the HID-device role for `sdp`.
    ///
    /// On success the returned handle starts in `Unregistered`; the session
    /// reaches `Registered` only once the stack confirms the registration
    /// through its callback. Must be called from within a tokio runtime.
    pub fn register(&self, sdp: SdpRecord) -> Result<RegistrationHandle, HidError> {
        for grant in REQUIRED_GRANTS {
            if !self.permissions.is_granted(grant) {
                warn!(%grant, "registration attempted without grant");
                return Err(HidError::PermissionDenied(grant));
            }
        }

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        self.proxy.register_app(&sdp, events_tx)?;
        info!(name = %sdp.identity.name, "HID device registration requested");

        let (session, tracker) = SessionTracker::spawn(events_rx);
        Ok(RegistrationHandle {
            session,
            tracker,
            proxy: Arc::clone(&self.proxy),
        })
    }
}

/// Live registration: owns the session tracker task and the proxy binding.
pub struct RegistrationHandle {
    session: watch::Receiver<SessionSnapshot>,
    tracker: JoinHandle<()>,
    proxy: Arc<dyn HidProfileProxy>,
}

impl std::fmt::Debug for RegistrationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationHandle")
            .field("session", &*self.session.borrow())
            .finish_non_exhaustive()
    }
}

impl RegistrationHandle {
    pub fn snapshot(&self) -> SessionSnapshot {
        *self.session.borrow()
    }

    pub fn state(&self) -> ConnectionState {
        self.snapshot().state
    }

    /// Subscribe to session snapshots.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.session.clone()
    }

    /// Wait until the session reaches `want`.
    ///
    /// Fails with `SessionClosed` if the tracker goes away first.
    pub async fn wait_for_state(
        &self,
        want: ConnectionState,
    ) -> Result<SessionSnapshot, HidError> {
        let mut session = self.session.clone();
        let snapshot = session
            .wait_for(|s| s.state == want)
            .await
            .map_err(|_| HidError::SessionClosed)?;
        Ok(*snapshot)
    }

    /// Drop the HID-device role and stop tracking.
    pub fn shutdown(self) {
        self.tracker.abort();
        self.proxy.unregister_app();
        info!("HID device registration dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::hid::descriptor::DeviceIdentity;
    use crate::infrastructure::hid::loopback::LoopbackStack;
    use crate::infrastructure::hid::proxy::{AllGranted, ProfileEvent};
    use std::sync::atomic::{AtomicBool, Ordering};

    fn keyboard_sdp() -> SdpRecord {
        SdpRecord::keyboard(DeviceIdentity::default())
    }

    /// Gate that denies everything.
    struct NoGrants;
    impl PermissionGate for NoGrants {
        fn is_granted(&self, _grant: Grant) -> bool {
            false
        }
    }

    /// Proxy that records whether it was touched.
    #[derive(Default)]
    struct TouchySpy {
        called: AtomicBool,
    }
    impl HidProfileProxy for TouchySpy {
        fn register_app(
            &self,
            _sdp: &SdpRecord,
            _events: mpsc::UnboundedSender<ProfileEvent>,
        ) -> Result<(), HidError> {
            self.called.store(true, Ordering::SeqCst);
            Ok(())
        }
        fn unregister_app(&self) {}
        fn send_report(&self, _host: u64, _id: u8, _payload: &[u8]) -> Result<(), HidError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn missing_grant_surfaces_and_skips_stack() {
        let proxy = Arc::new(TouchySpy::default());
        let registrar = ProfileRegistrar::new(proxy.clone(), Arc::new(NoGrants));

        let err = registrar.register(keyboard_sdp()).unwrap_err();
        assert_eq!(err, HidError::PermissionDenied(Grant::BluetoothConnect));
        assert!(!proxy.called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn stack_rejection_surfaces() {
        let stack = Arc::new(LoopbackStack::new());
        stack.set_reject_registration(true);
        let registrar = ProfileRegistrar::new(stack, Arc::new(AllGranted));

        let err = registrar.register(keyboard_sdp()).unwrap_err();
        assert_eq!(err, HidError::RegistrationFailed);
    }

    #[tokio::test]
    async fn handle_is_debug_formattable() {
        let stack = Arc::new(LoopbackStack::new());
        let registrar = ProfileRegistrar::new(stack, Arc::new(AllGranted));

        let handle = registrar.register(keyboard_sdp()).unwrap();
        let rendered = format!("{handle:?}");
        assert!(rendered.contains("RegistrationHandle"));
        assert!(rendered.contains("session"));
    }

    #[tokio::test]
    async fn successful_registration_reaches_registered() {
        let stack = Arc::new(LoopbackStack::new());
        let registrar = ProfileRegistrar::new(stack, Arc::new(AllGranted));

        let handle = registrar.register(keyboard_sdp()).unwrap();
        let snapshot = handle
            .wait_for_state(ConnectionState::Registered)
            .await
            .unwrap();
        assert_eq!(snapshot.host, None);
    }

    #[tokio::test]
    async fn shutdown_unregisters_with_stack() {
        let stack = Arc::new(LoopbackStack::new());
        let registrar = ProfileRegistrar::new(stack.clone(), Arc::new(AllGranted));

        let handle = registrar.register(keyboard_sdp()).unwrap();
        handle.wait_for_state(ConnectionState::Registered).await.unwrap();
        assert!(stack.is_registered());

        handle.shutdown();
        assert!(!stack.is_registered());
    }
}
