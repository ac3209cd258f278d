//! Hardware reset support
//!
//! The ADIN PHYs have an active-low RESET_N pin. A soft reset over MDIO is
//! usually enough before running the fixup, but boards that gate the PHY's
//! reset line can pulse it through any `embedded_hal::digital::OutputPin`
//! when the PHY may be in an unknown state.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::error::{ConfigError, Result};
use crate::fixup::PhyDevice;
use crate::mode::PhyInterfaceMode;

/// Reset pulse duration in microseconds (datasheet minimum 10µs)
const RESET_PULSE_US: u32 = 20;

/// Recovery time before the management interface is ready, in microseconds
/// (datasheet: up to 5ms from reset deassertion)
const RESET_RECOVERY_US: u32 = 5_000;

/// PHY device handle with a hardware reset pin
///
/// Wraps [`PhyDevice`] with an active-low reset line. The pin is driven
/// high (inactive) on construction.
#[derive(Debug)]
pub struct PhyDeviceWithReset<RST: OutputPin> {
    /// Inner device handle
    inner: PhyDevice,
    /// Reset pin (active low)
    reset_pin: RST,
}

impl<RST: OutputPin> PhyDeviceWithReset<RST> {
    /// Create a handle with a reset pin
    ///
    /// The pin should be configured as a push-pull output; it is set high
    /// (inactive) here.
    pub fn new(addr: u8, interface: PhyInterfaceMode, mut reset_pin: RST) -> Self {
        let _ = reset_pin.set_high();
        Self {
            inner: PhyDevice::new(addr, interface),
            reset_pin,
        }
    }

    /// Pulse the reset line and wait for the PHY to recover
    ///
    /// After this returns the management interface is ready for the fixup.
    pub fn hardware_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<()> {
        self.reset_pin
            .set_low()
            .map_err(|_| ConfigError::GpioError)?;
        delay.delay_us(RESET_PULSE_US);

        self.reset_pin
            .set_high()
            .map_err(|_| ConfigError::GpioError)?;
        delay.delay_us(RESET_RECOVERY_US);

        Ok(())
    }

    /// The inner device handle
    pub const fn device(&self) -> &PhyDevice {
        &self.inner
    }

    /// Mutable access to the inner device handle (for running fixups)
    pub fn device_mut(&mut self) -> &mut PhyDevice {
        &mut self.inner
    }

    /// Consume the wrapper and return the device handle and reset pin
    pub fn release(self) -> (PhyDevice, RST) {
        (self.inner, self.reset_pin)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
