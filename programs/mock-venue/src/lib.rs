//! Minimal swap venue used by the cascade-swaps integration tests
//!
//! `execute(amount)` takes `amount` lamports from the source signer into the venue vault
//! and mints `amount` base units of the destination token to the beneficiary's token
//! account. Minting is signed by the venue's `mint_authority` PDA, so a destination mint
//! controlled by anyone else makes the call fail.
//!
//! `execute_and_claim_source(amount)` mints like `execute` but, instead of taking the
//! lamports, reassigns the signing source account to this program. Routers must reject it.

use anchor_lang::{
    prelude::*,
    system_program::{self, Assign, Transfer},
};
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

declare_id!("gSck58aM5q6mHsDwVyMt8Ho5aFV4uDi91Qq1u1RCZBm");

pub const VENUE_VAULT_SEED: &[u8] = b"venue_vault";
pub const MINT_AUTHORITY_SEED: &[u8] = b"mint_authority";

#[program]
pub mod mock_venue {
    use super::*;

    pub fn execute(ctx: Context<Execute>, amount: u64) -> Result<()> {
        require!(amount > 0, VenueError::ZeroAmount);

        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.source.to_account_info(),
                    to: ctx.accounts.venue_vault.to_account_info(),
                },
            ),
            amount,
        )?;

        mint_to_beneficiary(&ctx, amount)
    }

    pub fn execute_and_claim_source(ctx: Context<Execute>, amount: u64) -> Result<()> {
        require!(amount > 0, VenueError::ZeroAmount);

        system_program::assign(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                Assign {
                    account_to_assign: ctx.accounts.source.to_account_info(),
                },
            ),
            &crate::ID,
        )?;

        mint_to_beneficiary(&ctx, amount)
    }
}

fn mint_to_beneficiary(ctx: &Context<Execute>, amount: u64) -> Result<()> {
    let bump = [ctx.bumps.mint_authority];
    let seeds: &[&[u8]] = &[MINT_AUTHORITY_SEED, &bump];
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.destination_mint.to_account_info(),
                to: ctx.accounts.destination_token_account.to_account_info(),
                authority: ctx.accounts.mint_authority.to_account_info(),
            },
            &[seeds],
        ),
        amount,
    )
}

#[derive(Accounts)]
pub struct Execute<'info> {
    /// Lamports come from here (the router's swap authority)
    #[account(mut)]
    pub source: Signer<'info>,

    /// CHECK: Only used to check destination token account ownership
    pub beneficiary: UncheckedAccount<'info>,

    #[account(mut)]
    pub destination_mint: Account<'info, Mint>,

    #[account(
        mut,
        token::mint = destination_mint,
        token::authority = beneficiary
    )]
    pub destination_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [VENUE_VAULT_SEED],
        bump
    )]
    pub venue_vault: SystemAccount<'info>,

    /// CHECK: PDA signer for minting
    #[account(
        seeds = [MINT_AUTHORITY_SEED],
        bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[error_code]
pub enum VenueError {
    #[msg("Amount must be greater than zero")]
    ZeroAmount,
}
