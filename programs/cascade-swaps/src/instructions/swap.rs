use anchor_lang::prelude::*;

use crate::{
    allocation::allocate,
    constants::{ACCOUNTS_PER_SWAP_LEG, PROTOCOL_CONFIG_SEED, SWAP_AUTHORITY_SEED},
    errors::ErrorCode,
    events::SwapExecuted,
    executor::{venue_execute_instruction, SwapExecutor},
    state::ProtocolConfig,
};

#[derive(Accounts)]
pub struct Swap<'info> {
    #[account(
        seeds = [PROTOCOL_CONFIG_SEED],
        bump = protocol_config.load()?.bump
    )]
    pub protocol_config: AccountLoader<'info, ProtocolConfig>,

    /// Pays the fee and every leg; receives the destination tokens
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: Only receives lamports; address pinned to the configured recipient
    #[account(
        mut,
        address = protocol_config.load()?.fee_recipient @ ErrorCode::InvalidFeeRecipient
    )]
    pub fee_recipient: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [SWAP_AUTHORITY_SEED],
        bump = protocol_config.load()?.swap_authority_bump
    )]
    pub swap_authority: SystemAccount<'info>,

    /// CHECK: External swap venue, treated as a black box. Any executable program except
    /// this one; the payer chooses it and only risks the payer's own lamports.
    #[account(
        executable,
        constraint = venue_program.key() != crate::ID @ ErrorCode::InvalidVenueProgram
    )]
    pub venue_program: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Splits `amount` lamports across `destinations` by `shares` and buys each destination
/// token through the venue
///
/// remaining_accounts: [destination_mint, destination_token_account] per destination (in
/// order), followed by any accounts the venue needs for every leg.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, Swap<'info>>,
    amount: u64,
    destinations: Vec<Pubkey>,
    shares: Vec<u16>,
) -> Result<()> {
    let (fee_bps, swap_authority_bump) = {
        let config = ctx.accounts.protocol_config.load()?;
        (config.fee_bps, config.swap_authority_bump)
    };

    let allocation = allocate(amount, &destinations, &shares, fee_bps)?;
    require!(!destinations.is_empty(), ErrorCode::InvalidDestinationCount);

    let leg_accounts_len = destinations
        .len()
        .checked_mul(ACCOUNTS_PER_SWAP_LEG)
        .ok_or(ErrorCode::MathOverflow)?;
    require!(
        ctx.remaining_accounts.len() >= leg_accounts_len,
        ErrorCode::InsufficientRemainingAccounts
    );
    let (leg_accounts, shared_venue_accounts) = ctx.remaining_accounts.split_at(leg_accounts_len);

    // Validate every leg before any lamport moves
    for (destination, accounts) in destinations
        .iter()
        .zip(leg_accounts.chunks_exact(ACCOUNTS_PER_SWAP_LEG))
    {
        require!(
            accounts[0].key() == *destination,
            ErrorCode::InvalidDestinationAccount
        );
    }

    let mut executor = SwapExecutor::new(
        ctx.accounts.payer.to_account_info(),
        ctx.accounts.swap_authority.to_account_info(),
        ctx.accounts.venue_program.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        swap_authority_bump,
    );

    for ((destination, leg_amount), accounts) in destinations
        .iter()
        .zip(allocation.destination_amounts.iter())
        .zip(leg_accounts.chunks_exact(ACCOUNTS_PER_SWAP_LEG))
    {
        if *leg_amount == 0 {
            continue; // Rounded down to nothing
        }

        let destination_mint = &accounts[0];
        let destination_token_account = &accounts[1];

        let instruction = venue_execute_instruction(
            &executor.venue_program_key(),
            &executor.swap_authority_key(),
            &executor.payer_key(),
            destination_mint.key,
            destination_token_account.key,
            shared_venue_accounts,
            *leg_amount,
        );

        let mut venue_accounts = Vec::with_capacity(2 + shared_venue_accounts.len());
        venue_accounts.push(destination_mint.clone());
        venue_accounts.push(destination_token_account.clone());
        venue_accounts.extend_from_slice(shared_venue_accounts);

        executor.run_leg(
            destination_token_account,
            destination,
            *leg_amount,
            &instruction,
            &venue_accounts,
        )?;
    }

    executor.disburse_fee(
        &ctx.accounts.fee_recipient.to_account_info(),
        allocation.fee_amount,
    )?;

    emit!(SwapExecuted {
        payer: executor.payer_key(),
        venue_program: executor.venue_program_key(),
        gross_amount: amount,
        fee_amount: allocation.fee_amount,
        fee_recipient: ctx.accounts.fee_recipient.key(),
        forwarded: executor.forwarded(),
        refunded: executor.refunded(),
        destination_count: destinations.len() as u8,
        with_payload: false,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
