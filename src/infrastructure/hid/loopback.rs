//! In-process stack stand-in
//!
//! Plays the platform Bluetooth stack's part of the protocol: acknowledges
//! registrations, plugs and unplugs a virtual host, and records every report
//! it is asked to deliver. The demo binary and the coordinator tests run
//! against it.

use crate::error::HidError;
use crate::infrastructure::hid::descriptor::SdpRecord;
use crate::infrastructure::hid::proxy::{HidProfileProxy, ProfileEvent};
use std::sync::Mutex;
use tokio::sync::mpsc;
use tracing::debug;

#[derive(Default)]
struct Inner {
    events: Option<mpsc::UnboundedSender<ProfileEvent>>,
    registered: bool,
    reject_registration: bool,
    host: Option<u64>,
    reports: Vec<DeliveredReport>,
}

/// One report as the virtual host observed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveredReport {
    pub host: u64,
    pub report_id: u8,
    pub payload: Vec<u8>,
}

pub struct LoopbackStack {
    inner: Mutex<Inner>,
}

impl LoopbackStack {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Make the next `register_app` call fail, as a stack that refuses the
    /// HID-device role would.
    pub fn set_reject_registration(&self, reject: bool) {
        self.inner.lock().unwrap().reject_registration = reject;
    }

    /// Plug a virtual host in.
    pub fn plug_host(&self, host: u64) {
        let mut inner = self.inner.lock().unwrap();
        inner.host = Some(host);
        if let Some(events) = &inner.events {
            let _ = events.send(ProfileEvent::ConnectionStateChanged {
                host,
                connected: true,
            });
        }
    }

    /// Unplug the virtual host.
    pub fn unplug_host(&self) {
        let mut inner = self.inner.lock().unwrap();
        if let (Some(host), Some(events)) = (inner.host.take(), inner.events.as_ref()) {
            let _ = events.send(ProfileEvent::ConnectionStateChanged {
                host,
                connected: false,
            });
        }
    }

    /// Tear the profile service down entirely.
    pub fn drop_service(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.registered = false;
        inner.host = None;
        if let Some(events) = inner.events.take() {
            let _ = events.send(ProfileEvent::ServiceDisconnected);
        }
    }

    pub fn is_registered(&self) -> bool {
        self.inner.lock().unwrap().registered
    }

    /// Everything delivered to the virtual host so far.
    pub fn reports(&self) -> Vec<DeliveredReport> {
        self.inner.lock().unwrap().reports.clone()
    }
}

impl Default for LoopbackStack {
    fn default() -> Self {
        Self::new()
    }
}

impl HidProfileProxy for LoopbackStack {
    fn register_app(
        &self,
        sdp: &SdpRecord,
        events: mpsc::UnboundedSender<ProfileEvent>,
    ) -> Result<(), HidError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.reject_registration {
            return Err(HidError::RegistrationFailed);
        }

        debug!(name = %sdp.identity.name, "loopback stack accepted registration");
        // Ack asynchronously like the real stack: the event lands through
        // the callback channel, carrying the host if one is already plugged.
        let _ = events.send(ProfileEvent::AppStatusChanged {
            host: inner.host,
            registered: true,
        });
        inner.events = Some(events);
        inner.registered = true;
        Ok(())
    }

    fn unregister_app(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.registered = false;
        if let Some(events) = inner.events.take() {
            let _ = events.send(ProfileEvent::AppStatusChanged {
                host: None,
                registered: false,
            });
        }
    }

    fn send_report(&self, host: u64, report_id: u8, payload: &[u8]) -> Result<(), HidError> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.registered {
            return Err(HidError::Transport("no app registered".to_string()));
        }
        inner.reports.push(DeliveredReport {
            host,
            report_id,
            payload: payload.to_vec(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::hid::descriptor::DeviceIdentity;

    #[tokio::test]
    async fn registration_ack_carries_plugged_host() {
        let stack = LoopbackStack::new();
        stack.plug_host(0x42);

        let (tx, mut rx) = mpsc::unbounded_channel();
        stack
            .register_app(&SdpRecord::keyboard(DeviceIdentity::default()), tx)
            .unwrap();

        assert_eq!(
            rx.recv().await,
            Some(ProfileEvent::AppStatusChanged {
                host: Some(0x42),
                registered: true,
            })
        );
    }

    #[tokio::test]
    async fn send_before_registration_fails() {
        let stack = LoopbackStack::new();
        let err = stack.send_report(0x42, 1, &[0u8; 10]).unwrap_err();
        assert!(matches!(err, HidError::Transport(_)));
    }
}
