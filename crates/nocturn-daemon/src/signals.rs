//! Signal handling for graceful shutdown.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use anyhow::Result;
use signal_hook::consts::{SIGINT, SIGTERM};

/// Register SIGTERM and SIGINT to raise a shared stop flag.
///
/// The polling loop checks the flag once per tick, so shutdown happens
/// within one poll interval of the signal.
pub fn register_stop_flag() -> Result<Arc<AtomicBool>> {
    let stop = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(SIGTERM, Arc::clone(&stop))?;
    signal_hook::flag::register(SIGINT, Arc::clone(&stop))?;
    Ok(stop)
}
