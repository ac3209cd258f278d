//! ADIN1200/ADIN1300 register map
//!
//! Only the registers the fixup touches. The RGMII and clock configuration
//! registers live in the vendor extended register space and are reached
//! indirectly through the pointer/data pair (see [`crate::ext`]).

/// ADIN1200 PHY identifier (PHYIDR1:PHYIDR2)
pub const ADIN1200_PHY_ID: u32 = 0x0283_BC20;

/// ADIN1300 PHY identifier (PHYIDR1:PHYIDR2)
pub const ADIN1300_PHY_ID: u32 = 0x0283_BC30;

/// Identifier mask for exact matching, revision bits included
pub const ADIN_PHY_ID_MASK: u32 = 0xFFFF_FFFF;

/// Clause 22 registers hosting the extended-space access window
pub mod reg {
    /// Extended register pointer
    pub const EXT_REG_PTR: u8 = 0x10;
    /// Extended register data
    pub const EXT_REG_DATA: u8 = 0x11;
}

/// Extended register addresses
pub mod ext_reg {
    /// GE_CLK_CFG - clock pin configuration
    pub const GE_CLK_CFG: u16 = 0xFF1F;
    /// GE_RGMII_CFG - RGMII mode and internal delay configuration
    pub const GE_RGMII_CFG: u16 = 0xFF23;
}

/// GE_RGMII_CFG bits
pub mod ge_rgmii_cfg {
    /// Enable the internal RX clock delay
    pub const RXID_EN: u16 = 1 << 2;
    /// Enable the internal TX clock delay
    pub const TXID_EN: u16 = 1 << 1;
    /// Enable RGMII mode
    pub const EN: u16 = 1 << 0;
}

/// GE_CLK_CFG bits
pub mod ge_clk_cfg {
    /// Drive the 125 MHz recovered clock onto GP_CLK
    pub const CLK_RCVR_125_EN: u16 = 1 << 5;
}

// =============================================================================
// Unit Tests
// =============================================================================
