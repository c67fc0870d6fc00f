use anchor_lang::prelude::*;

use crate::{
    constants::PROTOCOL_CONFIG_SEED,
    errors::ErrorCode,
    events::FeeRecipientUpdated,
    state::ProtocolConfig,
};

#[derive(Accounts)]
pub struct SetFeeRecipient<'info> {
    #[account(
        mut,
        seeds = [PROTOCOL_CONFIG_SEED],
        bump = protocol_config.load()?.bump,
        constraint = protocol_config.load()?.is_authority(&authority.key()) @ ErrorCode::Unauthorized
    )]
    pub protocol_config: AccountLoader<'info, ProtocolConfig>,

    pub authority: Signer<'info>,
}

/// Replaces the protocol fee recipient
/// Only callable by current protocol authority; later swaps pay fees to the new address
/// Fees arrive as plain system transfers: a recipient with no lamports must first receive
/// at least the rent-exempt minimum, so fund a fresh wallet before pointing fees at it
pub fn handler(ctx: Context<SetFeeRecipient>, new_fee_recipient: Pubkey) -> Result<()> {
    let protocol_config = &mut ctx.accounts.protocol_config.load_mut()?;
    let old_fee_recipient = protocol_config.fee_recipient;

    protocol_config.fee_recipient = new_fee_recipient;

    emit!(FeeRecipientUpdated {
        authority: ctx.accounts.authority.key(),
        old_fee_recipient,
        new_fee_recipient,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
