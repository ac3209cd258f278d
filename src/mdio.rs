//! MDIO (Management Data Input/Output) bus seam
//!
//! The host networking subsystem owns the MDIO transport. This module defines
//! the trait through which the fixup reaches PHY registers, plus the few
//! IEEE 802.3 Clause 22 registers the crate itself needs.

use crate::error::{ConfigError, Result};

/// Maximum valid PHY address (5-bit field)
pub const MAX_PHY_ADDR: u8 = 31;

// =============================================================================
// MDIO Bus Trait
// =============================================================================

/// Trait for MDIO bus operations
///
/// Implemented by the host's MDIO controller. The fixup performs every
/// register access through this trait and never retries: a failed access is
/// propagated to the caller as-is.
pub trait MdioBus {
    /// Read a PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16>;

    /// Write a PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()>;
}

// =============================================================================
// Clause 22 Registers
// =============================================================================

/// Standard PHY register addresses (IEEE 802.3 Clause 22)
pub mod phy_reg {
    /// Basic Mode Control Register
    pub const BMCR: u8 = 0;
    /// Basic Mode Status Register
    pub const BMSR: u8 = 1;
    /// PHY Identifier 1
    pub const PHYIDR1: u8 = 2;
    /// PHY Identifier 2
    pub const PHYIDR2: u8 = 3;
}

/// BMCR (Basic Mode Control Register) bits
pub mod bmcr {
    /// Soft reset (self-clearing)
    pub const RESET: u16 = 1 << 15;
}

// =============================================================================
// Helpers
// =============================================================================

/// Read the PHY identifier (OUI + model + revision)
///
/// Returns a 32-bit value: `(PHYIDR1 << 16) | PHYIDR2`.
pub fn read_phy_id<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<u32> {
    if phy_addr > MAX_PHY_ADDR {
        return Err(ConfigError::InvalidPhyAddress.into());
    }
    let id1 = mdio.read(phy_addr, phy_reg::PHYIDR1)? as u32;
    let id2 = mdio.read(phy_addr, phy_reg::PHYIDR2)? as u32;
    Ok((id1 << 16) | id2)
}

/// Perform a soft reset via BMCR and poll for the bit to self-clear
pub fn soft_reset<M: MdioBus>(mdio: &mut M, phy_addr: u8, max_attempts: u32) -> Result<()> {
    mdio.write(phy_addr, phy_reg::BMCR, bmcr::RESET)?;

    for _ in 0..max_attempts {
        let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;
        if (bmcr_val & bmcr::RESET) == 0 {
            return Ok(());
        }
    }

    // Some PHYs are slow to clear the bit; don't fail the attach over it
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
