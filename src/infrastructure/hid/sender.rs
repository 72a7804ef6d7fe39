//! Report Sender
//!
//! Delivers one press/release cycle per key. Cycles are serialized through
//! an async mutex: a second `send_key` issued while a cycle is in flight
//! parks until the first release report is out, so the host never sees
//! interleaved key state.

use crate::domain::models::{ConnectionState, SessionSnapshot};
use crate::error::HidError;
use crate::infrastructure::hid::proxy::HidProfileProxy;
use crate::infrastructure::hid::report::{KeyReport, REPORT_ID};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tokio::time;
use tracing::{debug, warn};

pub struct ReportSender {
    proxy: Arc<dyn HidProfileProxy>,
    session: watch::Receiver<SessionSnapshot>,
    // One press/release cycle in flight at a time
    cycle: Mutex<()>,
    debounce: Duration,
}

impl ReportSender {
    pub fn new(
        proxy: Arc<dyn HidProfileProxy>,
        session: watch::Receiver<SessionSnapshot>,
        debounce: Duration,
    ) -> Self {
        Self {
            proxy,
            session,
            cycle: Mutex::new(()),
            debounce,
        }
    }

    /// Send a press report for `keycode`, wait out the debounce interval,
    /// then send the all-zero release report.
    ///
    /// The wait is a plain suspension, the calling task is free to be one of
    /// many. If the session leaves `Connected` before the interval elapses
    /// the pending release is aborted with [`HidError::SessionClosed`] (the
    /// host is gone, there is nobody left to un-stick).
    pub async fn send_key(&self, modifier: u8, keycode: u8) -> Result<(), HidError> {
        let _cycle = self.cycle.lock().await;

        let snapshot = *self.session.borrow();
        if snapshot.state != ConnectionState::Connected {
            debug!(keycode, state = ?snapshot.state, "send_key without a connected host");
            return Err(HidError::NotConnected);
        }
        let host = snapshot.host.ok_or(HidError::NotConnected)?;

        let press = KeyReport::press(modifier, keycode);
        self.proxy.send_report(host, REPORT_ID, &press.encode())?;
        debug!(host, modifier, keycode, "press report sent");

        self.debounce_or_disconnect(host).await?;

        let release = KeyReport::release();
        self.proxy.send_report(host, REPORT_ID, &release.encode())?;
        debug!(host, "release report sent");
        Ok(())
    }

    async fn debounce_or_disconnect(&self, host: u64) -> Result<(), HidError> {
        let mut session = self.session.clone();
        tokio::select! {
            _ = time::sleep(self.debounce) => Ok(()),
            _ = session.wait_for(|s| s.state != ConnectionState::Connected) => {
                warn!(host, "session closed before the release report, aborting");
                Err(HidError::SessionClosed)
            }
        }
    }
}
