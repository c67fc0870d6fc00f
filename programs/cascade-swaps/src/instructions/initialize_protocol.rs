use anchor_lang::{
    prelude::*,
    system_program::{self, Transfer},
};

use crate::{
    constants::{
        PROTOCOL_CONFIG_RESERVED, PROTOCOL_CONFIG_SEED, PROTOCOL_CONFIG_SIZE,
        PROTOCOL_CONFIG_VERSION, SWAP_AUTHORITY_SEED,
    },
    errors::ErrorCode,
    events::ProtocolConfigCreated,
    state::{validate_fee_bps, ProtocolConfig},
    ID,
};

#[derive(Accounts)]
pub struct InitializeProtocol<'info> {
    #[account(
        init,
        payer = authority,
        space = PROTOCOL_CONFIG_SIZE,
        seeds = [PROTOCOL_CONFIG_SEED],
        bump
    )]
    pub protocol_config: AccountLoader<'info, ProtocolConfig>,

    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: The program's executable data account - validated in handler
    #[account(
        constraint = program_data.owner == &anchor_lang::solana_program::bpf_loader_upgradeable::id()
            @ ErrorCode::Unauthorized
    )]
    pub program_data: AccountInfo<'info>,

    /// Escrow PDA funded here with its rent-exempt baseline
    #[account(
        mut,
        seeds = [SWAP_AUTHORITY_SEED],
        bump
    )]
    pub swap_authority: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Initializes the protocol configuration
/// Can only be called once by the program's upgrade authority
pub fn handler(ctx: Context<InitializeProtocol>, fee_recipient: Pubkey, fee_bps: u16) -> Result<()> {
    validate_fee_bps(fee_bps)?;

    // Verify program_data is the correct PDA for our program
    let (expected_program_data, _) = Pubkey::find_program_address(
        &[ID.as_ref()],
        &anchor_lang::solana_program::bpf_loader_upgradeable::id(),
    );
    require!(
        ctx.accounts.program_data.key() == expected_program_data,
        ErrorCode::Unauthorized
    );

    {
        let data = ctx.accounts.program_data.try_borrow_data()?;

        // UpgradeableLoaderState::ProgramData layout:
        // - 4 bytes: discriminant
        // - 8 bytes: slot
        // - 1 byte: Option discriminant for upgrade_authority
        // - 32 bytes: upgrade_authority pubkey (if Some)
        require!(data.len() >= 45, ErrorCode::Unauthorized);
        require!(data[12] == 1, ErrorCode::Unauthorized); // Must have upgrade authority

        let upgrade_authority =
            Pubkey::try_from(&data[13..45]).map_err(|_| ErrorCode::Unauthorized)?;

        require!(
            upgrade_authority == ctx.accounts.authority.key(),
            ErrorCode::Unauthorized
        );
    }

    // Top up the escrow so later legs can fund it with amounts below the rent minimum
    let rent_floor = Rent::get()?.minimum_balance(0);
    let escrow_balance = ctx.accounts.swap_authority.lamports();
    if escrow_balance < rent_floor {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.authority.to_account_info(),
                    to: ctx.accounts.swap_authority.to_account_info(),
                },
            ),
            rent_floor - escrow_balance,
        )?;
    }

    let protocol_config = &mut ctx.accounts.protocol_config.load_init()?;

    protocol_config.authority = ctx.accounts.authority.key();
    protocol_config.pending_authority = Pubkey::default(); // No pending transfer initially
    protocol_config.fee_recipient = fee_recipient;
    protocol_config.fee_bps = fee_bps;
    protocol_config.version = PROTOCOL_CONFIG_VERSION;
    protocol_config.bump = ctx.bumps.protocol_config;
    protocol_config.swap_authority_bump = ctx.bumps.swap_authority;
    protocol_config.reserved = [0; PROTOCOL_CONFIG_RESERVED];

    emit!(ProtocolConfigCreated {
        authority: ctx.accounts.authority.key(),
        fee_recipient,
        fee_bps,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
