//! Demo binary: drives the keyboard core against the in-process loopback
//! stack. Registers, plugs a virtual host, types 'a', and shows what the
//! host saw.

use anyhow::Result;
use keyblue::domain::models::ConnectionState;
use keyblue::domain::settings::SettingsService;
use keyblue::infrastructure::hid::loopback::LoopbackStack;
use keyblue::infrastructure::hid::proxy::AllGranted;
use keyblue::infrastructure::hid::HidKeyboard;
use keyblue::infrastructure::logging;
use std::sync::Arc;
use tracing::info;

const DEMO_HOST: u64 = 0x0011_2233_4455;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = SettingsService::new()?;
    let _log_guard = logging::init_logging(&settings.get().log_settings)?;
    info!("Starting KeyBlue");

    let stack = Arc::new(LoopbackStack::new());
    let keyboard = HidKeyboard::register(stack.clone(), Arc::new(AllGranted), settings.get())?;
    keyboard.wait_for_state(ConnectionState::Registered).await?;
    info!("HID device role registered");

    stack.plug_host(DEMO_HOST);
    keyboard.wait_for_state(ConnectionState::Connected).await?;
    info!("Host connected: {:#014X}", DEMO_HOST);

    keyboard.send_char('a').await?;

    for report in stack.reports() {
        info!(
            "Host received report id={} payload={:02X?}",
            report.report_id, report.payload
        );
    }

    keyboard.shutdown();
    Ok(())
}
