//! Firmware configuration properties
//!
//! Board firmware (a device-tree node or equivalent) carries per-PHY
//! configuration the fixup consults at attach time. Parsing that store is the
//! host's job; this module only defines the lookup seam and the property
//! names the ADIN fixup understands.

/// Interface-mode override property
///
/// Optional string naming a [`PhyInterfaceMode`](crate::mode::PhyInterfaceMode)
/// that replaces the mode the host detected.
pub const PHY_MODE_OVERRIDE_PROP: &str = "adi,phy-mode-override";

/// 125 MHz recovered clock output enable property
///
/// Boolean; when present the fixup drives the recovered 125 MHz clock onto
/// the GP_CLK pin.
pub const CLK_RCVR_125_EN_PROP: &str = "adi,clk_rcvr_125_en";

/// Trait for reading properties from the device's firmware node
///
/// Implemented by the host against its firmware store.
pub trait PropertySource {
    /// Read a string property
    ///
    /// Returns `None` when the property is absent. Absence is an ordinary
    /// outcome, not an error.
    fn read_string(&self, key: &str) -> Option<&str>;

    /// Read a boolean property
    ///
    /// Device-tree convention: the property's presence means `true`.
    fn read_bool(&self, key: &str) -> bool;
}

/// Property source for hosts without firmware configuration
///
/// Every string lookup is absent and every boolean is `false`, so the fixup
/// keeps the detected interface mode and leaves the clock output alone.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoProperties;

impl PropertySource for NoProperties {
    fn read_string(&self, _key: &str) -> Option<&str> {
        None
    }

    fn read_bool(&self, _key: &str) -> bool {
        false
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
