use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_FEE_BPS, MIN_FEE_BPS, PROTOCOL_CONFIG_RESERVED},
    errors::ErrorCode,
};

/// Global protocol configuration (single instance)
///
/// Field order is a storage contract shared by every program version deployed at this
/// address: new fields may only be carved out of `reserved`, existing fields are never
/// moved or reinterpreted.
#[account(zero_copy(unsafe))]
#[repr(C)]
pub struct ProtocolConfig {
    /// Authority that can update fee settings (initially program upgrade authority)
    pub authority: Pubkey,
    /// Pending authority for two-step transfer (default = no pending transfer)
    pub pending_authority: Pubkey,
    /// Wallet that receives protocol fees
    pub fee_recipient: Pubkey,
    /// Protocol fee in basis points (1-9999, where 100 = 1%)
    pub fee_bps: u16,
    /// Schema version for future upgrades
    pub version: u8,
    /// Bump seed for PDA derivation (stored for CU optimization)
    pub bump: u8,
    /// Bump seed of the swap authority escrow PDA
    pub swap_authority_bump: u8,
    /// Zeroed space for fields added by later versions
    pub reserved: [u8; PROTOCOL_CONFIG_RESERVED],
}

impl ProtocolConfig {
    pub fn is_authority(&self, key: &Pubkey) -> bool {
        self.authority == *key
    }

    /// Replaces the fee, keeping the previous value when `fee_bps` is out of range
    pub fn set_fee_bps(&mut self, fee_bps: u16) -> Result<()> {
        validate_fee_bps(fee_bps)?;
        self.fee_bps = fee_bps;
        Ok(())
    }
}

/// Fee must lie strictly between 0 and 10000 bps
pub fn validate_fee_bps(fee_bps: u16) -> Result<()> {
    require!(
        (MIN_FEE_BPS..=MAX_FEE_BPS).contains(&fee_bps),
        ErrorCode::InvalidFee
    );
    Ok(())
}

// Compile-time layout assertions: offsets below are relied on by deployed clients and
// by every later program version, so a failing assert means the layout contract broke.
// ProtocolConfig: 32 + 32 + 32 + 2 + 1 + 1 + 1 + 63 = 164 (discriminator added by Anchor)
const _: () = assert!(std::mem::size_of::<ProtocolConfig>() == 164);
const _: () = assert!(std::mem::offset_of!(ProtocolConfig, authority) == 0);
const _: () = assert!(std::mem::offset_of!(ProtocolConfig, pending_authority) == 32);
const _: () = assert!(std::mem::offset_of!(ProtocolConfig, fee_recipient) == 64);
const _: () = assert!(std::mem::offset_of!(ProtocolConfig, fee_bps) == 96);
const _: () = assert!(std::mem::offset_of!(ProtocolConfig, version) == 98);
const _: () = assert!(std::mem::offset_of!(ProtocolConfig, bump) == 99);
const _: () = assert!(std::mem::offset_of!(ProtocolConfig, swap_authority_bump) == 100);
const _: () = assert!(std::mem::offset_of!(ProtocolConfig, reserved) == 101);
