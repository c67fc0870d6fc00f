use anchor_lang::prelude::*;

use crate::{
    allocation::allocate,
    errors::ErrorCode,
    events::SwapExecuted,
    executor::{venue_payload_instruction, SwapExecutor},
    instructions::swap::Swap,
};

/// Pre-built venue instruction for one destination (e.g. a quoted route)
#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct VenuePayload {
    /// Number of remaining accounts the venue instruction references
    pub account_count: u8,
    /// Venue instruction data, forwarded as-is
    pub data: Vec<u8>,
}

/// Same split as `swap`, but each leg runs a caller-supplied venue instruction
///
/// remaining_accounts, per destination in order: destination_token_account, then the
/// `account_count` accounts of that leg's venue instruction. With no destinations the
/// call only collects the fee.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, Swap<'info>>,
    amount: u64,
    payloads: Vec<VenuePayload>,
    shares: Vec<u16>,
    destinations: Vec<Pubkey>,
) -> Result<()> {
    let (fee_bps, swap_authority_bump) = {
        let config = ctx.accounts.protocol_config.load()?;
        (config.fee_bps, config.swap_authority_bump)
    };

    let allocation = allocate(amount, &destinations, &shares, fee_bps)?;
    require!(
        payloads.len() == destinations.len(),
        ErrorCode::LengthMismatch
    );

    // Slice remaining accounts into per-leg groups before any lamport moves
    let mut groups = Vec::with_capacity(payloads.len());
    let mut offset = 0usize;
    for payload in payloads.iter() {
        let end = offset
            .checked_add(1 + payload.account_count as usize)
            .ok_or(ErrorCode::MathOverflow)?;
        require!(
            ctx.remaining_accounts.len() >= end,
            ErrorCode::InsufficientRemainingAccounts
        );
        groups.push(&ctx.remaining_accounts[offset..end]);
        offset = end;
    }

    let mut executor = SwapExecutor::new(
        ctx.accounts.payer.to_account_info(),
        ctx.accounts.swap_authority.to_account_info(),
        ctx.accounts.venue_program.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        swap_authority_bump,
    );

    for (((payload, group), destination), leg_amount) in payloads
        .into_iter()
        .zip(groups)
        .zip(destinations.iter())
        .zip(allocation.destination_amounts.iter())
    {
        if *leg_amount == 0 {
            continue; // Rounded down to nothing
        }

        let (destination_token_account, venue_accounts) = (&group[0], &group[1..]);

        let instruction = venue_payload_instruction(
            &executor.venue_program_key(),
            &executor.swap_authority_key(),
            venue_accounts,
            payload.data,
        );

        executor.run_leg(
            destination_token_account,
            destination,
            *leg_amount,
            &instruction,
            venue_accounts,
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
        with_payload: true,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
