//! Indirect access to the ADIN extended register space
//!
//! Extended registers sit behind a two-step window: write the extended
//! address to `EXT_REG_PTR`, then read or write `EXT_REG_DATA`. The two steps
//! are not atomic with respect to other users of the same MDIO bus; the host
//! serializes attach-time callbacks per device, and any further exclusivity
//! is its responsibility.

use crate::error::Result;
use crate::mdio::MdioBus;
use crate::regs::reg;

/// Read an extended register
pub fn ext_read<M: MdioBus>(mdio: &mut M, phy_addr: u8, ext_addr: u16) -> Result<u16> {
    mdio.write(phy_addr, reg::EXT_REG_PTR, ext_addr)?;
    mdio.read(phy_addr, reg::EXT_REG_DATA)
}

/// Write an extended register
pub fn ext_write<M: MdioBus>(mdio: &mut M, phy_addr: u8, ext_addr: u16, value: u16) -> Result<()> {
    mdio.write(phy_addr, reg::EXT_REG_PTR, ext_addr)?;
    mdio.write(phy_addr, reg::EXT_REG_DATA, value)
}

// =============================================================================
// Unit Tests
// =============================================================================
