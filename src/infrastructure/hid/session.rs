//! Session Tracker
//!
//! Single-writer state machine fed by stack callbacks. All connection state
//! lives here; everyone else observes it through a watch channel instead of
//! mutating shared fields.

use crate::domain::models::{ConnectionState, SessionSnapshot};
use crate::infrastructure::hid::proxy::ProfileEvent;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{info, warn};

pub struct SessionTracker {
    events: mpsc::UnboundedReceiver<ProfileEvent>,
    publisher: watch::Sender<SessionSnapshot>,
}

impl SessionTracker {
    /// Spawn the tracker over a stack callback channel. Returns the watch
    /// receiver for session snapshots and the task handle.
    pub fn spawn(
        events: mpsc::UnboundedReceiver<ProfileEvent>,
    ) -> (watch::Receiver<SessionSnapshot>, JoinHandle<()>) {
        let (publisher, subscriber) = watch::channel(SessionSnapshot::unregistered());
        let tracker = Self { events, publisher };
        let handle = tokio::spawn(tracker.run());
        (subscriber, handle)
    }

    async fn run(mut self) {
        while let Some(event) = self.events.recv().await {
            let current = *self.publisher.borrow();
            let next = Self::apply(current, event);
            if next != current {
                info!(from = ?current.state, to = ?next.state, host = ?next.host, "session state changed");
                let _ = self.publisher.send(next);
            }
        }

        // Callback channel gone: the stack dropped us, same as a service loss.
        let current = *self.publisher.borrow();
        if current.state != ConnectionState::Unregistered {
            warn!("stack callback channel closed, session unregistered");
            let _ = self.publisher.send(SessionSnapshot::unregistered());
        }
    }

    /// Pure transition function.
    fn apply(current: SessionSnapshot, event: ProfileEvent) -> SessionSnapshot {
        match event {
            ProfileEvent::AppStatusChanged {
                registered: false, ..
            } => SessionSnapshot::unregistered(),

            // Registration confirmed. If a host was already plugged when
            // the registration landed, we come up connected directly.
            ProfileEvent::AppStatusChanged {
                host,
                registered: true,
            } => match host {
                Some(host) => SessionSnapshot {
                    state: ConnectionState::Connected,
                    host: Some(host),
                },
                None => SessionSnapshot {
                    state: ConnectionState::Registered,
                    host: None,
                },
            },

            ProfileEvent::ConnectionStateChanged { host, connected }
                if current.state != ConnectionState::Unregistered =>
            {
                if connected {
                    SessionSnapshot {
                        state: ConnectionState::Connected,
                        host: Some(host),
                    }
                } else {
                    SessionSnapshot {
                        state: ConnectionState::Registered,
                        host: None,
                    }
                }
            }

            ProfileEvent::ConnectionStateChanged { host, .. } => {
                warn!(host, "connection event while unregistered, ignoring");
                current
            }

            ProfileEvent::ServiceDisconnected => SessionSnapshot::unregistered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: u64 = 0x0011_2233_4455;

    fn registered() -> SessionSnapshot {
        SessionSnapshot {
            state: ConnectionState::Registered,
            host: None,
        }
    }

    fn connected(host: u64) -> SessionSnapshot {
        SessionSnapshot {
            state: ConnectionState::Connected,
            host: Some(host),
        }
    }

    #[test]
    fn registration_ack_moves_to_registered() {
        let next = SessionTracker::apply(
            SessionSnapshot::unregistered(),
            ProfileEvent::AppStatusChanged {
                host: None,
                registered: true,
            },
        );
        assert_eq!(next, registered());
    }

    #[test]
    fn registration_ack_with_plugged_host_moves_to_connected() {
        let next = SessionTracker::apply(
            SessionSnapshot::unregistered(),
            ProfileEvent::AppStatusChanged {
                host: Some(HOST),
                registered: true,
            },
        );
        assert_eq!(next, connected(HOST));
    }

    #[test]
    fn peer_connect_and_disconnect_cycle() {
        let next = SessionTracker::apply(
            registered(),
            ProfileEvent::ConnectionStateChanged {
                host: HOST,
                connected: true,
            },
        );
        assert_eq!(next, connected(HOST));

        let next = SessionTracker::apply(
            next,
            ProfileEvent::ConnectionStateChanged {
                host: HOST,
                connected: false,
            },
        );
        assert_eq!(next, registered());
    }

    #[test]
    fn service_disconnect_unregisters_from_any_state() {
        for state in [SessionSnapshot::unregistered(), registered(), connected(HOST)] {
            let next = SessionTracker::apply(state, ProfileEvent::ServiceDisconnected);
            assert_eq!(next, SessionSnapshot::unregistered());
        }
    }

    #[test]
    fn peer_events_ignored_while_unregistered() {
        let next = SessionTracker::apply(
            SessionSnapshot::unregistered(),
            ProfileEvent::ConnectionStateChanged {
                host: HOST,
                connected: true,
            },
        );
        assert_eq!(next, SessionSnapshot::unregistered());
    }

    #[tokio::test]
    async fn tracker_publishes_transitions() {
        let (tx, rx) = mpsc::unbounded_channel();
        let (mut session, handle) = SessionTracker::spawn(rx);

        tx.send(ProfileEvent::AppStatusChanged {
            host: None,
            registered: true,
        })
        .unwrap();
        session.changed().await.unwrap();
        assert_eq!(session.borrow().state, ConnectionState::Registered);

        tx.send(ProfileEvent::ConnectionStateChanged {
            host: HOST,
            connected: true,
        })
        .unwrap();
        session.changed().await.unwrap();
        assert_eq!(*session.borrow(), connected(HOST));

        // Dropping the stack side counts as losing the service
        drop(tx);
        session.changed().await.unwrap();
        assert_eq!(*session.borrow(), SessionSnapshot::unregistered());

        handle.await.unwrap();
    }
}
