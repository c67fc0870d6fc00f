use anchor_lang::prelude::*;

pub mod allocation;
pub mod constants;
pub mod errors;
pub mod events;
pub mod executor;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("8WMwD4ZD4YPbNsRWEQyETo1fNaaxyKaGTNCMUhXYXRp5");

// Security contact information (embedded on-chain)
#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Cascade Swaps",
    project_url: "https://cascade-protocol.xyz",
    contacts: "email:hello@cascade-protocol.xyz,link:https://github.com/cascade-protocol/swaps/security",
    policy: "https://github.com/cascade-protocol/swaps/blob/main/SECURITY.md",
    source_code: "https://github.com/cascade-protocol/swaps",
    source_release: "v0.1.0"
}

#[program]
pub mod cascade_swaps {
    use super::*;

    /// Initializes the protocol configuration with fee recipient and fee (bps)
    /// Can only be called once by the program's upgrade authority
    pub fn initialize_protocol(
        ctx: Context<InitializeProtocol>,
        fee_recipient: Pubkey,
        fee_bps: u16,
    ) -> Result<()> {
        instructions::initialize_protocol::handler(ctx, fee_recipient, fee_bps)
    }

    /// Replaces the protocol fee recipient
    /// Only callable by current protocol authority
    pub fn set_fee_recipient(ctx: Context<SetFeeRecipient>, new_fee_recipient: Pubkey) -> Result<()> {
        instructions::set_fee_recipient::handler(ctx, new_fee_recipient)
    }

    /// Sets the protocol fee in basis points (1-9999)
    /// Only callable by current protocol authority
    pub fn set_fee(ctx: Context<SetFee>, fee_bps: u16) -> Result<()> {
        instructions::set_fee::handler(ctx, fee_bps)
    }

    /// Returns the protocol fee in basis points
    pub fn get_fee(ctx: Context<GetFee>) -> Result<u16> {
        instructions::get_fee::handler(ctx)
    }

    /// Returns the protocol fee recipient
    pub fn get_fee_recipient(ctx: Context<GetFeeRecipient>) -> Result<Pubkey> {
        instructions::get_fee_recipient::handler(ctx)
    }

    /// Proposes protocol authority transfer to a new address (two-step pattern)
    /// Only callable by current protocol authority
    /// New authority must call accept_protocol_authority to complete
    pub fn transfer_protocol_authority(
        ctx: Context<TransferProtocolAuthority>,
        new_authority: Pubkey,
    ) -> Result<()> {
        instructions::transfer_protocol_authority::handler(ctx, new_authority)
    }

    /// Accepts a pending protocol authority transfer
    /// Only callable by the pending authority
    pub fn accept_protocol_authority(ctx: Context<AcceptProtocolAuthority>) -> Result<()> {
        instructions::accept_protocol_authority::handler(ctx)
    }

    /// Takes the protocol fee from `amount` lamports and buys each destination token
    /// with its share of the rest through the venue
    /// Permissionless - anyone can swap their own lamports
    pub fn swap<'info>(
        ctx: Context<'_, '_, 'info, 'info, Swap<'info>>,
        amount: u64,
        destinations: Vec<Pubkey>,
        shares: Vec<u16>,
    ) -> Result<()> {
        instructions::swap::handler(ctx, amount, destinations, shares)
    }

    /// Same split as `swap`, with one pre-built venue instruction per destination
    pub fn swap_with_venue_payload<'info>(
        ctx: Context<'_, '_, 'info, 'info, Swap<'info>>,
        amount: u64,
        payloads: Vec<VenuePayload>,
        shares: Vec<u16>,
        destinations: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::swap_with_venue_payload::handler(ctx, amount, payloads, shares, destinations)
    }
}
