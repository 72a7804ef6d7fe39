//! HID Keyboard Service
//!
//! Main coordinator tying the registrar, session tracker, and report sender
//! together behind one handle. The stack and permission gate are passed in
//! explicitly; nothing here reaches for process-wide state.

use crate::domain::models::{ConnectionState, SessionSnapshot};
use crate::domain::settings::Settings;
use crate::error::HidError;
use crate::infrastructure::hid::descriptor::{DeviceIdentity, SdpRecord, SUBCLASS_COMBO};
use crate::infrastructure::hid::proxy::{HidProfileProxy, PermissionGate};
use crate::infrastructure::hid::registrar::{ProfileRegistrar, RegistrationHandle};
use crate::infrastructure::hid::sender::ReportSender;
use crate::infrastructure::hid::usage;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::info;

pub struct HidKeyboard {
    registration: RegistrationHandle,
    sender: ReportSender,
}

impl HidKeyboard {
    /// Register the HID-device role and return a live keyboard handle.
    ///
    /// Must be called from within a tokio runtime. Fails with
    /// `PermissionDenied` or `RegistrationFailed` without retrying; calling
    /// again is the caller's decision.
    pub fn register(
        proxy: Arc<dyn HidProfileProxy>,
        permissions: Arc<dyn PermissionGate>,
        settings: &Settings,
    ) -> Result<Self, HidError> {
        let identity = DeviceIdentity {
            name: settings.device_name.clone(),
            description: settings.device_description.clone(),
            provider: settings.provider.clone(),
            version: settings.version.clone(),
            subclass: SUBCLASS_COMBO,
        };
        info!(name = %identity.name, debounce_ms = settings.debounce_ms, "bringing up HID keyboard");

        let registrar = ProfileRegistrar::new(Arc::clone(&proxy), permissions);
        let registration = registrar.register(SdpRecord::keyboard(identity))?;
        let sender = ReportSender::new(
            proxy,
            registration.subscribe(),
            Duration::from_millis(settings.debounce_ms),
        );

        Ok(Self {
            registration,
            sender,
        })
    }

    pub fn state(&self) -> ConnectionState {
        self.registration.state()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.registration.snapshot()
    }

    /// Subscribe to session snapshots.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.registration.subscribe()
    }

    /// Wait until the session reaches `want`.
    pub async fn wait_for_state(
        &self,
        want: ConnectionState,
    ) -> Result<SessionSnapshot, HidError> {
        self.registration.wait_for_state(want).await
    }

    /// Send one press/release cycle for a raw (modifier, keycode) pair.
    pub async fn send_key(&self, modifier: u8, keycode: u8) -> Result<(), HidError> {
        self.sender.send_key(modifier, keycode).await
    }

    /// Send one press/release cycle for an ASCII character.
    pub async fn send_char(&self, c: char) -> Result<(), HidError> {
        let (modifier, keycode) =
            usage::keycode_for_char(c).ok_or(HidError::UnsupportedKey(c))?;
        self.send_key(modifier, keycode).await
    }

    /// Drop the registration and stop the session tracker.
    pub fn shutdown(self) {
        self.registration.shutdown();
    }
}
