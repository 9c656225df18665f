//! Nocturn device session: discovery, initialization, and endpoint I/O.

use std::time::Duration;

use rusb::{Direction, GlobalContext, TransferType};
use tracing::{debug, info};

use nocturn_core::RingMode;

use crate::error::{HidError, HidResult};
use crate::listen::ReportSource;

/// Novation USB Vendor ID
pub const NOVATION_VID: u16 = 0x1235;
/// Nocturn USB Product ID
pub const NOCTURN_PID: u16 = 0x000a;
/// The control surface lives on interface 0 of the second configuration
const CONTROL_INTERFACE: u8 = 0;

/// Interrupt IN read timeout; a tick with no event times out
const READ_TIMEOUT: Duration = Duration::from_millis(10);
/// Interrupt OUT write timeout
const WRITE_TIMEOUT: Duration = Duration::from_secs(1);
/// Delay between steps of the startup LED sweep
const SWEEP_STEP: Duration = Duration::from_millis(40);

/// Fixed handshake written once at startup. Opaque firmware payload,
/// reproduced byte for byte.
const INIT_SEQUENCE: [&[u8]; 4] = [
    &[0xb0, 0x00, 0x00],
    &[0x28, 0x00, 0x2b, 0x4a, 0x2c, 0x00, 0x2e, 0x35],
    &[0x2a, 0x02, 0x2c, 0x72, 0x2e, 0x30],
    &[0x7f, 0x00],
];

/// An open session with a Nocturn.
///
/// Owns the USB handle and both interrupt endpoints. All I/O is synchronous
/// and blocking; callers using the session from multiple threads must
/// serialize their own writes.
pub struct NocturnDevice {
    handle: rusb::DeviceHandle<GlobalContext>,
    endpoint_in: u8,
    endpoint_out: u8,
    max_packet_size: usize,
}

impl NocturnDevice {
    /// Open the first connected Nocturn.
    ///
    /// Detaches an active kernel driver, selects the control surface
    /// configuration, claims the control interface, and discovers the
    /// interrupt endpoints.
    ///
    /// # Errors
    /// `DeviceNotFound` if no Nocturn is connected; `DeviceBusy` if the
    /// kernel driver cannot be detached or the interface claimed.
    pub fn open() -> HidResult<Self> {
        let device = Self::find_device()?;
        let handle = device.open()?;

        if handle.kernel_driver_active(CONTROL_INTERFACE).unwrap_or(false) {
            handle
                .detach_kernel_driver(CONTROL_INTERFACE)
                .map_err(|e| HidError::DeviceBusy(format!("kernel driver detach failed: {e}")))?;
        }

        // The device exposes two configurations; the control surface is the
        // second one.
        let config = device.config_descriptor(1)?;
        handle.set_active_configuration(config.number())?;
        handle
            .claim_interface(CONTROL_INTERFACE)
            .map_err(|e| HidError::DeviceBusy(format!("interface claim failed: {e}")))?;

        let (endpoint_in, endpoint_out, max_packet_size) = Self::find_endpoints(&config)?;

        info!(
            bus = device.bus_number(),
            address = device.address(),
            endpoint_in,
            endpoint_out,
            max_packet_size,
            "Nocturn opened"
        );

        Ok(Self { handle, endpoint_in, endpoint_out, max_packet_size })
    }

    fn find_device() -> HidResult<rusb::Device<GlobalContext>> {
        for device in rusb::devices()?.iter() {
            let Ok(desc) = device.device_descriptor() else {
                continue;
            };
            if desc.vendor_id() == NOVATION_VID && desc.product_id() == NOCTURN_PID {
                debug!(bus = device.bus_number(), address = device.address(), "Nocturn found");
                return Ok(device);
            }
        }
        Err(HidError::DeviceNotFound)
    }

    fn find_endpoints(config: &rusb::ConfigDescriptor) -> HidResult<(u8, u8, usize)> {
        let mut endpoint_in = None;
        let mut endpoint_out = None;
        let mut max_packet_size = 0;

        for interface in config.interfaces() {
            if interface.number() != CONTROL_INTERFACE {
                continue;
            }
            for descriptor in interface.descriptors() {
                for endpoint in descriptor.endpoint_descriptors() {
                    if endpoint.transfer_type() != TransferType::Interrupt {
                        continue;
                    }
                    match endpoint.direction() {
                        Direction::In => {
                            endpoint_in = Some(endpoint.address());
                            max_packet_size = usize::from(endpoint.max_packet_size());
                        }
                        Direction::Out => endpoint_out = Some(endpoint.address()),
                    }
                }
            }
        }

        let endpoint_in = endpoint_in.ok_or(HidError::EndpointNotFound("IN"))?;
        let endpoint_out = endpoint_out.ok_or(HidError::EndpointNotFound("OUT"))?;
        Ok((endpoint_in, endpoint_out, max_packet_size))
    }

    /// Write the startup handshake and run the LED sweep.
    ///
    /// Turns every button LED on and back off in order, 40 ms apart, then
    /// puts every ring in fill-from-min mode.
    ///
    /// # Errors
    /// Propagates the first write failure; there are no retries.
    pub fn initialize(&self) -> HidResult<()> {
        for blob in INIT_SEQUENCE {
            self.write(blob)?;
        }
        debug!("Handshake written");

        for button in 0..=nocturn_core::command::BUTTON_MAX {
            self.set_button_led(button, 1)?;
            std::thread::sleep(SWEEP_STEP);
        }
        for button in 0..=nocturn_core::command::BUTTON_MAX {
            self.set_button_led(button, 0)?;
            std::thread::sleep(SWEEP_STEP);
        }
        for ring in 0..=nocturn_core::command::RING_MAX {
            self.set_ring_mode(ring, RingMode::FillFromMin)?;
        }

        info!("Nocturn initialized");
        Ok(())
    }

    /// Turn a button LED on (`value` 1) or off (`value` 0).
    ///
    /// # Errors
    /// Invalid arguments or a failed endpoint write.
    pub fn set_button_led(&self, button: u8, value: u8) -> HidResult<()> {
        self.write(&nocturn_core::button_led(button, value)?)
    }

    /// Set the display mode of an encoder's LED ring.
    ///
    /// # Errors
    /// Invalid ring index or a failed endpoint write.
    pub fn set_ring_mode(&self, ring: u8, mode: RingMode) -> HidResult<()> {
        self.write(&nocturn_core::ring_mode(ring, mode)?)
    }

    /// Set the value an encoder's LED ring displays.
    ///
    /// # Errors
    /// Invalid arguments or a failed endpoint write.
    pub fn set_ring_value(&self, ring: u8, value: u8) -> HidResult<()> {
        self.write(&nocturn_core::ring_value(ring, value)?)
    }

    fn write(&self, bytes: &[u8]) -> HidResult<()> {
        self.handle.write_interrupt(self.endpoint_out, bytes, WRITE_TIMEOUT)?;
        Ok(())
    }
}

impl ReportSource for NocturnDevice {
    /// Read one report from the interrupt IN endpoint.
    ///
    /// A timeout means no event arrived this tick and maps to `Ok(None)`;
    /// any other transport error propagates.
    fn read_report(&mut self) -> HidResult<Option<Vec<u8>>> {
        let mut buffer = vec![0u8; self.max_packet_size];
        match self.handle.read_interrupt(self.endpoint_in, &mut buffer, READ_TIMEOUT) {
            Ok(len) => {
                buffer.truncate(len);
                Ok(Some(buffer))
            }
            Err(rusb::Error::Timeout) => Ok(None),
            Err(e) => Err(HidError::Usb(e)),
        }
    }
}
