//! KeyBlue: Bluetooth HID keyboard session core.
//!
//! Registers the HID-device role with a Bluetooth stack, tracks the plugged
//! host through the stack's asynchronous callbacks, and delivers serialized
//! press/release keyboard reports to it. The platform stack and the
//! permission-grant flow are consumed through traits; see
//! [`infrastructure::hid::proxy`].
//!
//! ```no_run
//! use keyblue::domain::models::ConnectionState;
//! use keyblue::domain::settings::Settings;
//! use keyblue::infrastructure::hid::loopback::LoopbackStack;
//! use keyblue::infrastructure::hid::proxy::AllGranted;
//! use keyblue::infrastructure::hid::HidKeyboard;
//! use std::sync::Arc;
//!
//! # async fn demo() -> Result<(), keyblue::HidError> {
//! let stack = Arc::new(LoopbackStack::new());
//! let keyboard = HidKeyboard::register(stack.clone(), Arc::new(AllGranted), &Settings::default())?;
//! stack.plug_host(0x0011_2233_4455);
//! keyboard.wait_for_state(ConnectionState::Connected).await?;
//! keyboard.send_char('a').await?;
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::models::{ConnectionState, SessionSnapshot};
pub use error::HidError;
pub use infrastructure::hid::HidKeyboard;
