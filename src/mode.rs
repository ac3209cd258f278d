//! PHY interface mode selection
//!
//! The MAC and PHY must agree on the electrical/timing convention of the data
//! interface. For RGMII the convention also says which side inserts the ~2 ns
//! clock skew on the receive and transmit paths; the ADIN PHYs can insert
//! either delay internally, and the fixup programs that from the resolved
//! mode.

/// MAC-to-PHY electrical interface convention
///
/// Closed set of the modes this driver understands. Firmware names map onto
/// these via [`PhyInterfaceMode::from_name`]; unknown names are treated as an
/// invalid override, never as a new mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhyInterfaceMode {
    /// Media Independent Interface
    Mii,
    /// Gigabit Media Independent Interface
    Gmii,
    /// Serial Gigabit Media Independent Interface
    Sgmii,
    /// Reduced Media Independent Interface
    Rmii,
    /// Reduced Gigabit MII, no internal delays (board adds the skew)
    #[default]
    Rgmii,
    /// RGMII with internal RX and TX delays
    RgmiiId,
    /// RGMII with internal RX delay only
    RgmiiRxid,
    /// RGMII with internal TX delay only
    RgmiiTxid,
}

impl PhyInterfaceMode {
    /// Every mode, in firmware-name table order
    pub const ALL: [Self; 8] = [
        Self::Mii,
        Self::Gmii,
        Self::Sgmii,
        Self::Rmii,
        Self::Rgmii,
        Self::RgmiiId,
        Self::RgmiiRxid,
        Self::RgmiiTxid,
    ];

    /// The firmware name for this mode (device-tree `phy-mode` convention)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mii => "mii",
            Self::Gmii => "gmii",
            Self::Sgmii => "sgmii",
            Self::Rmii => "rmii",
            Self::Rgmii => "rgmii",
            Self::RgmiiId => "rgmii-id",
            Self::RgmiiRxid => "rgmii-rxid",
            Self::RgmiiTxid => "rgmii-txid",
        }
    }

    /// Case-insensitive lookup by firmware mode name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(name))
    }

    /// Whether this is any of the four RGMII variants
    #[must_use]
    pub const fn is_rgmii(self) -> bool {
        matches!(
            self,
            Self::Rgmii | Self::RgmiiId | Self::RgmiiRxid | Self::RgmiiTxid
        )
    }

    /// Whether the PHY inserts the RX clock delay in this mode
    #[must_use]
    pub const fn rx_delay_internal(self) -> bool {
        matches!(self, Self::RgmiiId | Self::RgmiiRxid)
    }

    /// Whether the PHY inserts the TX clock delay in this mode
    #[must_use]
    pub const fn tx_delay_internal(self) -> bool {
        matches!(self, Self::RgmiiId | Self::RgmiiTxid)
    }
}

impl core::fmt::Display for PhyInterfaceMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
