//! ADIN1200/ADIN1300 Ethernet PHY fixup driver
//!
//! A `no_std`, `no_alloc` Rust implementation of the board fixup for the
//! Analog Devices ADIN1200/ADIN1300 industrial Ethernet PHYs: RGMII timing
//! mode (internal RX/TX clock delays) and the optional 125 MHz recovered
//! clock output, programmed at device attach time with an optional
//! firmware-provided interface-mode override.
//!
//! # Architecture
//!
//! The crate runs inside a host networking subsystem and reaches the outside
//! world through three seams:
//!
//! 1. **MDIO bus** ([`mdio::MdioBus`]): host-provided 16-bit register access
//! 2. **Firmware properties** ([`properties::PropertySource`]): the device's
//!    configuration node (device tree or equivalent)
//! 3. **Fixup registry** ([`registry`], feature `registry`): the host's
//!    attach-time fixup table
//!
//! The core logic lives in [`fixup`]: resolve the final interface mode,
//! program `GE_RGMII_CFG`, optionally enable the recovered clock in
//! `GE_CLK_CFG`, abort on the first register access failure.
//!
//! # Features
//!
//! - `registry` (default): compile the fixup registry. Disable when the
//!   host's PHY layer cannot run attach-time fixups; this is the crate's
//!   analogue of a "PHY core built-in" build-time guard.
//! - `defmt`: enable defmt diagnostics and `defmt::Format` derives
//!
//! # Example
//!
//! ```ignore
//! use ph_adin1300::{FixupRegistry, PhyDevice, PhyInterfaceMode};
//! use ph_adin1300::registry::register_adin1300_fixup;
//!
//! // Once, at driver init
//! let mut fixups: FixupRegistry<MyMdioBus, MyFdtNode, 4> = FixupRegistry::new();
//! register_adin1300_fixup(&mut fixups);
//!
//! // At attach time, for each probed PHY
//! let mut phy = PhyDevice::new(0, PhyInterfaceMode::RgmiiId);
//! fixups.apply(&mut phy, &mut mdio, &node)?;
//! ```

#![no_std]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

// =============================================================================
// Modules
// =============================================================================

pub mod error;
pub mod ext;
pub mod fixup;
pub mod mdio;
pub mod mode;
pub mod properties;
pub mod regs;
#[cfg(feature = "registry")]
pub mod registry;
pub mod reset;

// Test utilities (only available during testing)
#[cfg(test)]
pub mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, ConfigResult, Error, IoError, Result};
pub use fixup::{PhyDevice, adin1300_fixup, config_rgmii_mode, set_clock_config};
pub use mdio::MdioBus;
pub use mode::PhyInterfaceMode;
pub use properties::{NoProperties, PropertySource};
#[cfg(feature = "registry")]
pub use registry::{FixupFn, FixupRegistry};
pub use reset::PhyDeviceWithReset;
