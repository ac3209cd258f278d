//! ADIN1300 attach-time fixup
//!
//! The host invokes [`adin1300_fixup`] after probing a matching PHY. The
//! fixup resolves the final interface mode (firmware may override what the
//! host detected), programs the RGMII mode/delay register to match, and
//! optionally enables the 125 MHz recovered clock output. It aborts on the
//! first register access failure and performs no retries.

use crate::error::{ConfigError, ConfigResult, Result};
use crate::ext::{ext_read, ext_write};
use crate::mdio::MdioBus;
use crate::mode::PhyInterfaceMode;
use crate::properties::{CLK_RCVR_125_EN_PROP, PHY_MODE_OVERRIDE_PROP, PropertySource};
use crate::regs::{ext_reg, ge_clk_cfg, ge_rgmii_cfg};

// =============================================================================
// Device Handle
// =============================================================================

/// Per-device handle the host passes into a fixup
///
/// Owned by the host; the fixup borrows it for the duration of one call and
/// may update the interface mode when firmware overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyDevice {
    /// PHY address on the MDIO bus (0-31)
    addr: u8,
    /// Interface mode the host detected (or firmware overrode)
    interface: PhyInterfaceMode,
}

impl PhyDevice {
    /// Create a handle for a PHY at `addr` with the detected interface mode
    pub const fn new(addr: u8, interface: PhyInterfaceMode) -> Self {
        Self { addr, interface }
    }

    /// The PHY address on the MDIO bus
    pub const fn address(&self) -> u8 {
        self.addr
    }

    /// The current interface mode
    pub const fn interface(&self) -> PhyInterfaceMode {
        self.interface
    }

    /// Replace the interface mode (firmware override)
    pub fn set_interface(&mut self, interface: PhyInterfaceMode) {
        self.interface = interface;
    }
}

// =============================================================================
// Fixup Steps
// =============================================================================

/// Resolve the firmware interface-mode override
///
/// Reads [`PHY_MODE_OVERRIDE_PROP`] from the device's firmware node.
///
/// - `Ok(None)`: property absent; keep the detected mode.
/// - `Ok(Some(mode))`: property named a known mode.
/// - `Err(UnknownInterfaceMode)`: property present but unrecognized. A
///   diagnostic is emitted; callers treat this the same as "no override".
pub fn mode_override<P: PropertySource>(props: &P) -> ConfigResult<Option<PhyInterfaceMode>> {
    let Some(name) = props.read_string(PHY_MODE_OVERRIDE_PROP) else {
        return Ok(None);
    };

    match PhyInterfaceMode::from_name(name) {
        Some(mode) => Ok(Some(mode)),
        None => {
            #[cfg(feature = "defmt")]
            defmt::warn!("{}: '{}' is not a valid mode", PHY_MODE_OVERRIDE_PROP, name);
            Err(ConfigError::UnknownInterfaceMode)
        }
    }
}

/// Program the RGMII mode and internal delay configuration
///
/// Applies the firmware override first, then writes `GE_RGMII_CFG` from the
/// resolved mode: for a non-RGMII mode only the enable bit is cleared; for
/// the RGMII variants the enable bit is set and the RX/TX delay enables are
/// set or cleared per the mode. Reapplying the same mode is idempotent.
pub fn config_rgmii_mode<M, P>(phy: &mut PhyDevice, mdio: &mut M, props: &P) -> Result<()>
where
    M: MdioBus,
    P: PropertySource,
{
    // An invalid override was already diagnosed; fall back to the detected
    // mode rather than failing the attach.
    if let Ok(Some(mode)) = mode_override(props) {
        phy.set_interface(mode);
    }

    let mut cfg = ext_read(mdio, phy.address(), ext_reg::GE_RGMII_CFG)?;

    if !phy.interface().is_rgmii() {
        cfg &= !ge_rgmii_cfg::EN;
        return ext_write(mdio, phy.address(), ext_reg::GE_RGMII_CFG, cfg);
    }

    cfg |= ge_rgmii_cfg::EN;

    if phy.interface().rx_delay_internal() {
        cfg |= ge_rgmii_cfg::RXID_EN;
    } else {
        cfg &= !ge_rgmii_cfg::RXID_EN;
    }

    if phy.interface().tx_delay_internal() {
        cfg |= ge_rgmii_cfg::TXID_EN;
    } else {
        cfg &= !ge_rgmii_cfg::TXID_EN;
    }

    ext_write(mdio, phy.address(), ext_reg::GE_RGMII_CFG, cfg)
}

/// Enable the 125 MHz recovered clock output when firmware asks for it
///
/// Without [`CLK_RCVR_125_EN_PROP`] this touches no registers. With it, the
/// read of `GE_CLK_CFG` and the write-back share one error path; callers
/// cannot tell which access failed.
pub fn set_clock_config<M, P>(phy: &PhyDevice, mdio: &mut M, props: &P) -> Result<()>
where
    M: MdioBus,
    P: PropertySource,
{
    if !props.read_bool(CLK_RCVR_125_EN_PROP) {
        return Ok(());
    }

    #[cfg(feature = "defmt")]
    defmt::info!("enabling 125 MHz clock out");

    let cfg = ext_read(mdio, phy.address(), ext_reg::GE_CLK_CFG)?;
    ext_write(
        mdio,
        phy.address(),
        ext_reg::GE_CLK_CFG,
        cfg | ge_clk_cfg::CLK_RCVR_125_EN,
    )
}

// =============================================================================
// Entry Point
// =============================================================================

/// ADIN1300 fixup entry point
///
/// Runs the RGMII configuration and then the clock configuration, aborting
/// on the first failure. On success the handle's interface mode is the final
/// resolved mode and the hardware matches it.
pub fn adin1300_fixup<M, P>(phy: &mut PhyDevice, mdio: &mut M, props: &P) -> Result<()>
where
    M: MdioBus,
    P: PropertySource,
{
    config_rgmii_mode(phy, mdio, props)?;
    set_clock_config(phy, mdio, props)?;

    #[cfg(feature = "defmt")]
    defmt::info!("PHY is using mode '{}'", phy.interface().as_str());

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
