//! Testing utilities and mock implementations
//!
//! Mock implementations of the host-provided seams (MDIO bus, firmware
//! properties, delay, reset pin) so the fixup logic can be tested on the
//! host without hardware access.
//!
//! Only available when running `cargo test`.

#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::string::{String, ToString};
use std::vec::Vec;

use crate::error::{IoError, Result};
use crate::mdio::{MdioBus, phy_reg};
use crate::properties::PropertySource;
use crate::regs::{ADIN1300_PHY_ID, reg};

// =============================================================================
// Mock MDIO Bus
// =============================================================================

/// Mock MDIO bus that models the ADIN extended register indirection
///
/// Clause 22 registers live in a flat map. A write to `EXT_REG_PTR` latches
/// the extended address per PHY, and subsequent `EXT_REG_DATA` accesses hit
/// the extended register map, like the hardware. Writes are logged and read
/// failures can be injected per register.
///
/// # Example
///
/// ```ignore
/// let mut mdio = MockMdioBus::new();
/// mdio.setup_adin1300(0);
///
/// let mut phy = PhyDevice::new(0, PhyInterfaceMode::RgmiiId);
/// adin1300_fixup(&mut phy, &mut mdio, &MockProperties::new()).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockMdioBus {
    /// Clause 22 register values: (phy_addr, reg_addr) -> value
    registers: RefCell<HashMap<(u8, u8), u16>>,
    /// Extended register values: (phy_addr, ext_addr) -> value
    ext_registers: RefCell<HashMap<(u8, u16), u16>>,
    /// Latched extended address per PHY
    ext_ptr: RefCell<HashMap<u8, u16>>,
    /// Record of writes: (phy_addr, reg_addr, value)
    write_log: RefCell<Vec<(u8, u8, u16)>>,
    /// Injected read failures: (phy_addr, reg_addr) -> error
    read_failures: RefCell<HashMap<(u8, u8), IoError>>,
}

impl MockMdioBus {
    /// Create a new mock MDIO bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a Clause 22 register value (not logged as a write)
    pub fn set_register(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);
    }

    /// Set an extended register value (not logged as a write)
    pub fn set_ext_register(&self, phy_addr: u8, ext_addr: u16, value: u16) {
        self.ext_registers
            .borrow_mut()
            .insert((phy_addr, ext_addr), value);
    }

    /// Get the current value of an extended register (for test verification)
    pub fn get_ext_register(&self, phy_addr: u8, ext_addr: u16) -> Option<u16> {
        self.ext_registers
            .borrow()
            .get(&(phy_addr, ext_addr))
            .copied()
    }

    /// Get all writes that have been made
    pub fn get_writes(&self) -> Vec<(u8, u8, u16)> {
        self.write_log.borrow().clone()
    }

    /// Clear the write log
    pub fn clear_writes(&self) {
        self.write_log.borrow_mut().clear();
    }

    /// Make every read of `(phy_addr, reg_addr)` fail with `err`
    pub fn fail_reads_of(&self, phy_addr: u8, reg_addr: u8, err: IoError) {
        self.read_failures
            .borrow_mut()
            .insert((phy_addr, reg_addr), err);
    }

    /// Populate the identifier registers of an ADIN1300 at `phy_addr`
    pub fn setup_adin1300(&self, phy_addr: u8) {
        self.set_register(phy_addr, phy_reg::PHYIDR1, (ADIN1300_PHY_ID >> 16) as u16);
        self.set_register(phy_addr, phy_reg::PHYIDR2, ADIN1300_PHY_ID as u16);
    }
}

impl MdioBus for MockMdioBus {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        if let Some(err) = self.read_failures.borrow().get(&(phy_addr, reg_addr)) {
            return Err((*err).into());
        }

        if reg_addr == reg::EXT_REG_DATA {
            if let Some(ext_addr) = self.ext_ptr.borrow().get(&phy_addr) {
                return Ok(self
                    .ext_registers
                    .borrow()
                    .get(&(phy_addr, *ext_addr))
                    .copied()
                    .unwrap_or(0));
            }
        }

        Ok(self
            .registers
            .borrow()
            .get(&(phy_addr, reg_addr))
            .copied()
            .unwrap_or(0))
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        self.write_log
            .borrow_mut()
            .push((phy_addr, reg_addr, value));

        if reg_addr == reg::EXT_REG_PTR {
            self.ext_ptr.borrow_mut().insert(phy_addr, value);
            return Ok(());
        }

        if reg_addr == reg::EXT_REG_DATA {
            if let Some(ext_addr) = self.ext_ptr.borrow().get(&phy_addr).copied() {
                self.ext_registers
                    .borrow_mut()
                    .insert((phy_addr, ext_addr), value);
                return Ok(());
            }
        }

        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);

        Ok(())
    }
}

// =============================================================================
// Mock Properties
// =============================================================================

/// Mock firmware property source
///
/// String properties and boolean (presence) flags, keyed by property name.
#[derive(Debug, Default)]
pub struct MockProperties {
    strings: HashMap<String, String>,
    flags: HashSet<String>,
}

impl MockProperties {
    /// Create an empty property source
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a string property
    pub fn set_string(&mut self, key: &str, value: &str) {
        self.strings.insert(key.to_string(), value.to_string());
    }

    /// Mark a boolean property as present
    pub fn set_flag(&mut self, key: &str) {
        self.flags.insert(key.to_string());
    }
}

impl PropertySource for MockProperties {
    fn read_string(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    fn read_bool(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: RefCell<u64>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        *self.total_ns.borrow()
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        *self.total_ns.borrow_mut() += u64::from(ns);
    }
}

// =============================================================================
// Mock Reset Pin
// =============================================================================

/// Error produced by a [`MockResetPin`] configured to fail
#[derive(Debug)]
pub struct MockPinError;

impl embedded_hal::digital::Error for MockPinError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

/// Mock reset pin recording every level transition
#[derive(Debug, Default)]
pub struct MockResetPin {
    transitions: Vec<bool>,
    failing: bool,
}

impl MockResetPin {
    /// Create a pin that records transitions
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pin whose every drive attempt fails
    pub fn failing() -> Self {
        Self {
            transitions: Vec::new(),
            failing: true,
        }
    }

    /// Levels the pin was driven to, in order (`true` = high)
    pub fn transitions(&self) -> &[bool] {
        &self.transitions
    }
}

impl embedded_hal::digital::ErrorType for MockResetPin {
    type Error = MockPinError;
}

impl embedded_hal::digital::OutputPin for MockResetPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        if self.failing {
            return Err(MockPinError);
        }
        self.transitions.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        if self.failing {
            return Err(MockPinError);
        }
        self.transitions.push(true);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn mock_mdio_read_write() {
        let mut mdio = MockMdioBus::new();

        // Initially reads 0
        assert_eq!(mdio.read(0, 1).unwrap(), 0);

        // Set a value
        mdio.set_register(0, 1, 0x1234);
        assert_eq!(mdio.read(0, 1).unwrap(), 0x1234);

        // Write updates the value and is logged
        mdio.write(0, 1, 0x5678).unwrap();
        assert_eq!(mdio.read(0, 1).unwrap(), 0x5678);
        assert_eq!(mdio.get_writes(), [(0, 1, 0x5678)]);
    }

    #[test]
    fn mock_mdio_extended_indirection() {
        let mut mdio = MockMdioBus::new();
        mdio.set_ext_register(0, 0xFF23, 0xABCD);

        // Latch the pointer, then the data register aliases the ext register
        mdio.write(0, reg::EXT_REG_PTR, 0xFF23).unwrap();
        assert_eq!(mdio.read(0, reg::EXT_REG_DATA).unwrap(), 0xABCD);

        mdio.write(0, reg::EXT_REG_DATA, 0x000F).unwrap();
        assert_eq!(mdio.get_ext_register(0, 0xFF23), Some(0x000F));
    }

    #[test]
    fn mock_mdio_read_failure_injection() {
        let mut mdio = MockMdioBus::new();
        mdio.fail_reads_of(0, reg::EXT_REG_DATA, IoError::Timeout);

        mdio.write(0, reg::EXT_REG_PTR, 0xFF1F).unwrap();
        let err = mdio.read(0, reg::EXT_REG_DATA).unwrap_err();
        assert_eq!(err, Error::Io(IoError::Timeout));

        // Other registers are unaffected
        assert!(mdio.read(0, phy_reg::BMSR).is_ok());
    }

    #[test]
    fn mock_mdio_adin1300_setup() {
        let mut mdio = MockMdioBus::new();
        mdio.setup_adin1300(7);

        assert_eq!(mdio.read(7, phy_reg::PHYIDR1).unwrap(), 0x0283);
        assert_eq!(mdio.read(7, phy_reg::PHYIDR2).unwrap(), 0xBC30);
    }

    #[test]
    fn mock_reset_pin_records_levels() {
        use embedded_hal::digital::OutputPin;

        let mut pin = MockResetPin::new();
        pin.set_high().unwrap();
        pin.set_low().unwrap();
        pin.set_high().unwrap();

        assert_eq!(pin.transitions(), [true, false, true]);
    }
}
