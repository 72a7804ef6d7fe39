//! HID Keyboard Module
//!
//! Implements the Bluetooth HID-device session core: profile registration,
//! session tracking, and keyboard report delivery.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      HidKeyboard                         │
//! │   (Main coordinator - public API for the application)    │
//! └─────────────────────┬───────────────────────────────────┘
//!                       │
//!         ┌─────────────┼──────────────┐
//!         │             │              │
//!         ▼             ▼              ▼
//! ┌───────────┐  ┌────────────┐  ┌────────────┐
//! │ Registrar │  │  Session   │  │   Sender   │
//! │           │  │  Tracker   │  │            │
//! │ - grants  │  │ - state    │  │ - press /  │
//! │ - SDP     │  │   machine  │  │   release  │
//! │   record  │  │ - watch    │  │ - debounce │
//! │           │  │   channel  │  │            │
//! └───────────┘  └────────────┘  └────────────┘
//!         │             ▲              │
//!         └──────┬──────┘              │
//!                ▼                     ▼
//!       ┌─────────────────────────────────────┐
//!       │     HidProfileProxy (trait)         │
//!       │  platform Bluetooth stack, or the   │
//!       │  in-process loopback stand-in       │
//!       └─────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`descriptor`] - Report descriptor and SDP identity
//! - [`report`] - Keyboard input report layout and encoding
//! - [`usage`] - HID usage-table constants
//! - [`proxy`] - Traits abstracting the platform stack and permission grants
//! - [`session`] - Connection-state machine fed by stack callbacks
//! - [`registrar`] - HID-device role registration
//! - [`sender`] - Serialized press/release report delivery
//! - [`service`] - Main coordinator
//! - [`loopback`] - In-process stack for demos and tests

pub mod descriptor;
pub mod loopback;
pub mod proxy;
pub mod registrar;
pub mod report;
pub mod sender;
pub mod service;
pub mod session;
pub mod usage;

// Re-export the coordinator for convenience
pub use service::HidKeyboard;
