use anchor_lang::prelude::*;

use crate::{
    constants::PROTOCOL_CONFIG_SEED,
    errors::ErrorCode,
    events::FeeUpdated,
    state::ProtocolConfig,
};

#[derive(Accounts)]
pub struct SetFee<'info> {
    #[account(
        mut,
        seeds = [PROTOCOL_CONFIG_SEED],
        bump = protocol_config.load()?.bump,
        constraint = protocol_config.load()?.is_authority(&authority.key()) @ ErrorCode::Unauthorized
    )]
    pub protocol_config: AccountLoader<'info, ProtocolConfig>,

    pub authority: Signer<'info>,
}

/// Updates the protocol fee
/// Only callable by current protocol authority, 0 and 10000 bps are rejected
pub fn handler(ctx: Context<SetFee>, new_fee_bps: u16) -> Result<()> {
    let protocol_config = &mut ctx.accounts.protocol_config.load_mut()?;
    let old_fee_bps = protocol_config.fee_bps;

    protocol_config.set_fee_bps(new_fee_bps)?;

    emit!(FeeUpdated {
        authority: ctx.accounts.authority.key(),
        old_fee_bps,
        new_fee_bps,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
