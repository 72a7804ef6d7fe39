pub mod hid;
pub mod logging;
