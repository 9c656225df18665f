//! Cancellable polling loop over a report source.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::trace;

use nocturn_core::{ControlEvent, decode};

use crate::error::HidResult;

/// Pre-read throttle per poll tick, independent of the read timeout
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Something reports can be read from.
///
/// `Ok(None)` means no report arrived this tick (a read timeout), which the
/// poll loop skips silently.
pub trait ReportSource {
    /// Read one raw report, or `None` if none arrived in time.
    ///
    /// # Errors
    /// Transport failures other than a timeout.
    fn read_report(&mut self) -> HidResult<Option<Vec<u8>>>;
}

/// Poll `source` until `stop` is raised, dispatching decoded events.
///
/// Each tick sleeps [`POLL_INTERVAL`], reads one report, and invokes
/// `on_event` only when the report decodes to a recognized control event.
/// Absent and unrecognized reports are skipped.
///
/// # Errors
/// Returns the first non-timeout read error; the device is likely gone.
pub fn listen<S, F>(source: &mut S, stop: &AtomicBool, mut on_event: F) -> HidResult<()>
where
    S: ReportSource,
    F: FnMut(&ControlEvent),
{
    while !stop.load(Ordering::Relaxed) {
        std::thread::sleep(POLL_INTERVAL);

        let Some(report) = source.read_report()? else {
            continue;
        };
        match decode(&report) {
            Some(event) => on_event(&event),
            None => trace!(?report, "Unrecognized report"),
        }
    }
    Ok(())
}
