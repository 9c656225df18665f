//! Nocturn Daemon - control surface event logger.
//!
//! Opens the first connected Nocturn, runs the startup handshake and LED
//! sweep, then polls the surface and logs every decoded control event until
//! SIGINT/SIGTERM.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod signals;

use nocturn_hid::{NocturnDevice, listen};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("nocturn_daemon=info".parse()?)
                .add_directive("nocturn_hid=info".parse()?),
        )
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting Nocturn daemon");

    let mut device = NocturnDevice::open().context("Failed to open Nocturn")?;
    device.initialize().context("Failed to initialize Nocturn")?;

    let stop = signals::register_stop_flag()?;

    info!("Daemon running. Press Ctrl+C to exit.");

    listen(&mut device, &stop, |event| {
        info!(
            control_id = event.control_id,
            control = ?event.control,
            event = ?event.event,
            value = %event.value,
            "Control event"
        );
    })
    .context("Polling loop failed")?;

    info!("Nocturn daemon stopped");
    Ok(())
}
