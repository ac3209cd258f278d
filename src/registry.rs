//! Fixup registry
//!
//! The host keeps a table of board fixups keyed by PHY identifier and runs
//! the matching one after probing a device. This module is compiled only
//! with the `registry` feature; hosts whose PHY layer cannot run attach-time
//! fixups build the crate without it.

use crate::error::{ConfigError, ConfigResult, Result};
use crate::fixup::{PhyDevice, adin1300_fixup};
use crate::mdio::{MdioBus, read_phy_id};
use crate::properties::PropertySource;
use crate::regs::{ADIN1300_PHY_ID, ADIN_PHY_ID_MASK};

/// Fixup callback signature
///
/// Invoked with the host-owned device handle, the MDIO bus, and the device's
/// firmware node. Returns `Ok(())` on success; any error aborts the attach.
pub type FixupFn<M, P> = fn(&mut PhyDevice, &mut M, &P) -> Result<()>;

/// One registered fixup: run `run` when the masked PHY identifier matches
#[derive(Debug)]
struct FixupEntry<M, P> {
    phy_id: u32,
    phy_id_mask: u32,
    run: FixupFn<M, P>,
}

// Manual impls: the derive would put unnecessary bounds on M and P, which
// only appear behind a fn pointer.
impl<M, P> Clone for FixupEntry<M, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, P> Copy for FixupEntry<M, P> {}

/// Fixed-capacity table of PHY fixups
///
/// `N` is the capacity. Entries are matched in registration order; the first
/// match wins.
#[derive(Debug)]
pub struct FixupRegistry<M, P, const N: usize> {
    entries: [Option<FixupEntry<M, P>>; N],
    len: usize,
}

impl<M, P, const N: usize> FixupRegistry<M, P, N> {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self {
            entries: [const { None }; N],
            len: 0,
        }
    }

    /// Number of registered fixups
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether no fixups are registered
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Register a fixup for devices whose identifier matches `phy_id` under
    /// `phy_id_mask`
    pub fn register(
        &mut self,
        phy_id: u32,
        phy_id_mask: u32,
        run: FixupFn<M, P>,
    ) -> ConfigResult<()> {
        if self.len == N {
            return Err(ConfigError::RegistryFull);
        }
        self.entries[self.len] = Some(FixupEntry {
            phy_id,
            phy_id_mask,
            run,
        });
        self.len += 1;
        Ok(())
    }
}

impl<M: MdioBus, P: PropertySource, const N: usize> FixupRegistry<M, P, N> {
    /// Run the fixup matching this device, if any
    ///
    /// Reads the PHY identifier over MDIO and invokes the first fixup whose
    /// masked identifier matches. Returns whether a fixup ran.
    pub fn apply(&self, phy: &mut PhyDevice, mdio: &mut M, props: &P) -> Result<bool> {
        let id = read_phy_id(mdio, phy.address())?;

        for entry in self.entries[..self.len].iter().flatten() {
            if (id & entry.phy_id_mask) == (entry.phy_id & entry.phy_id_mask) {
                (entry.run)(phy, mdio, props)?;
                return Ok(true);
            }
        }

        Ok(false)
    }
}

impl<M, P, const N: usize> Default for FixupRegistry<M, P, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Register the ADIN1300 fixup with the host's registry
///
/// Called once at driver init. The identifier match is exact (no revision
/// bits masked off). A full registry is logged and otherwise ignored; the
/// enclosing driver keeps loading either way.
pub fn register_adin1300_fixup<M, P, const N: usize>(registry: &mut FixupRegistry<M, P, N>)
where
    M: MdioBus,
    P: PropertySource,
{
    let res = registry.register(ADIN1300_PHY_ID, ADIN_PHY_ID_MASK, adin1300_fixup);

    #[cfg(feature = "defmt")]
    if res.is_err() {
        defmt::warn!("cannot register ADIN1300 PHY board fixup");
    }
    #[cfg(not(feature = "defmt"))]
    let _ = res;
}

// =============================================================================
// Unit Tests
// =============================================================================
