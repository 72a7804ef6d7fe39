//! Error taxonomy for the HID session core.
//!
//! The original design dropped all of these on the floor (permission misses
//! were skipped, registration rejections ignored, sends to a missing host
//! no-oped). Here every one of them is a typed result so callers can retry
//! or inform the user.

use crate::domain::models::Grant;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HidError {
    /// Registrar called without a required permission grant.
    #[error("missing permission grant: {0}")]
    PermissionDenied(Grant),

    /// The Bluetooth stack rejected the HID-device registration.
    #[error("bluetooth stack rejected the HID device registration")]
    RegistrationFailed,

    /// Send attempted while no host is plugged in.
    #[error("no host is connected")]
    NotConnected,

    /// The session left `Connected` while a release report was pending;
    /// the release was aborted.
    #[error("session closed before the release report was sent")]
    SessionClosed,

    /// No HID usage mapping exists for the requested character.
    #[error("no HID usage mapping for character {0:?}")]
    UnsupportedKey(char),

    /// The stack accepted the session but the write itself failed.
    #[error("transport write failed: {0}")]
    Transport(String),
}
