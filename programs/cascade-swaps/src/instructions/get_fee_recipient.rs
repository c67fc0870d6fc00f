use anchor_lang::prelude::*;

use crate::{constants::PROTOCOL_CONFIG_SEED, state::ProtocolConfig};

#[derive(Accounts)]
pub struct GetFeeRecipient<'info> {
    #[account(
        seeds = [PROTOCOL_CONFIG_SEED],
        bump = protocol_config.load()?.bump
    )]
    pub protocol_config: AccountLoader<'info, ProtocolConfig>,
}

pub fn handler(ctx: Context<GetFeeRecipient>) -> Result<Pubkey> {
    Ok(ctx.accounts.protocol_config.load()?.fee_recipient)
}
