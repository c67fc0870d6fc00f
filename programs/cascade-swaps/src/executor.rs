use anchor_lang::{
    prelude::*,
    solana_program::{
        instruction::{AccountMeta, Instruction},
        program::invoke_signed,
    },
    system_program::{self, Transfer},
};
use anchor_spl::{token, token_2022, token_interface::TokenAccount};

use crate::{
    constants::{SWAP_AUTHORITY_SEED, VENUE_EXECUTE_DISCRIMINATOR},
    errors::ErrorCode,
};

/// Moves allocated lamports through the swap authority escrow into the venue
///
/// Each leg funds the escrow with exactly the leg amount, invokes the venue with the
/// escrow as signer, checks the destination balance grew, and sends anything the venue
/// did not consume back to the payer. The escrow therefore sits at `baseline` between legs
/// and after the swap.
pub struct SwapExecutor<'info> {
    payer: AccountInfo<'info>,
    swap_authority: AccountInfo<'info>,
    venue_program: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    swap_authority_bump: u8,
    baseline: u64,
    forwarded: u64,
    refunded: u64,
}

impl<'info> SwapExecutor<'info> {
    pub fn new(
        payer: AccountInfo<'info>,
        swap_authority: AccountInfo<'info>,
        venue_program: AccountInfo<'info>,
        system_program: AccountInfo<'info>,
        swap_authority_bump: u8,
    ) -> Self {
        let baseline = swap_authority.lamports();
        Self {
            payer,
            swap_authority,
            venue_program,
            system_program,
            swap_authority_bump,
            baseline,
            forwarded: 0,
            refunded: 0,
        }
    }

    pub fn payer_key(&self) -> Pubkey {
        self.payer.key()
    }

    pub fn swap_authority_key(&self) -> Pubkey {
        self.swap_authority.key()
    }

    pub fn venue_program_key(&self) -> Pubkey {
        self.venue_program.key()
    }

    /// Lamports consumed by the venue so far
    pub fn forwarded(&self) -> u64 {
        self.forwarded
    }

    /// Lamports returned to the payer so far
    pub fn refunded(&self) -> u64 {
        self.refunded
    }

    /// Executes one destination leg
    ///
    /// `venue_accounts` are the accounts the venue instruction references; the escrow,
    /// payer and venue program are appended to the CPI account list here.
    pub fn run_leg(
        &mut self,
        destination_token_account: &AccountInfo<'info>,
        destination_mint: &Pubkey,
        amount: u64,
        instruction: &Instruction,
        venue_accounts: &[AccountInfo<'info>],
    ) -> Result<()> {
        let payer_key = self.payer.key();
        let balance_before =
            destination_balance(destination_token_account, &payer_key, destination_mint)?;

        transfer_lamports(&self.payer, &self.swap_authority, &self.system_program, amount)?;

        let mut account_infos = Vec::with_capacity(venue_accounts.len() + 3);
        account_infos.extend_from_slice(venue_accounts);
        account_infos.push(self.swap_authority.clone());
        account_infos.push(self.payer.clone());
        account_infos.push(self.venue_program.clone());

        let bump = [self.swap_authority_bump];
        let seeds: &[&[u8]] = &[SWAP_AUTHORITY_SEED, &bump];
        invoke_signed(instruction, &account_infos, &[seeds])
            .map_err(|_| ErrorCode::VenueExecutionFailed)?;

        // Venue held the escrow's signature: it must come back a plain system account
        require!(
            escrow_is_intact(&self.swap_authority),
            ErrorCode::VenueExecutionFailed
        );

        // Destination must show the venue's effect; the size of the delta is the venue's business
        let balance_after =
            destination_balance(destination_token_account, &payer_key, destination_mint)?;
        require!(
            balance_after > balance_before,
            ErrorCode::VenueExecutionFailed
        );

        let leftover = self.settle()?;
        let consumed = amount
            .checked_sub(leftover)
            .ok_or(ErrorCode::VenueExecutionFailed)?;

        self.forwarded = self
            .forwarded
            .checked_add(consumed)
            .ok_or(ErrorCode::MathOverflow)?;
        self.refunded = self
            .refunded
            .checked_add(leftover)
            .ok_or(ErrorCode::MathOverflow)?;

        #[cfg(feature = "verbose")]
        msg!(
            "Leg {}: forwarded {} lamports, refunded {}, balance {} -> {}",
            destination_mint,
            consumed,
            leftover,
            balance_before,
            balance_after
        );

        Ok(())
    }

    /// Sends the protocol fee to the fee recipient (no-op for a zero fee)
    pub fn disburse_fee(&self, fee_recipient: &AccountInfo<'info>, fee_amount: u64) -> Result<()> {
        if fee_amount == 0 {
            return Ok(());
        }
        transfer_lamports(&self.payer, fee_recipient, &self.system_program, fee_amount)
    }

    /// Returns escrow lamports above the baseline to the payer
    fn settle(&self) -> Result<u64> {
        let balance = self.swap_authority.lamports();

        // Venue dipped into the rent reserve
        let leftover = balance
            .checked_sub(self.baseline)
            .ok_or(ErrorCode::VenueExecutionFailed)?;

        if leftover > 0 {
            let bump = [self.swap_authority_bump];
            let seeds: &[&[u8]] = &[SWAP_AUTHORITY_SEED, &bump];
            let signer_seeds = &[seeds];
            system_program::transfer(
                CpiContext::new_with_signer(
                    self.system_program.clone(),
                    Transfer {
                        from: self.swap_authority.clone(),
                        to: self.payer.clone(),
                    },
                    signer_seeds,
                ),
                leftover,
            )?;
        }

        Ok(leftover)
    }
}

/// Escrow is still system-owned and carries no data, so later legs can fund and drain it
pub fn escrow_is_intact(swap_authority: &AccountInfo) -> bool {
    swap_authority.owner == &system_program::ID && swap_authority.data_is_empty()
}

/// Plain system transfer where `from` signs the outer transaction
pub fn transfer_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(
            system_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
            },
        ),
        amount,
    )
}

/// Reads a destination token balance after checking the account belongs to `owner`
/// and holds `mint`
pub fn destination_balance(account_info: &AccountInfo, owner: &Pubkey, mint: &Pubkey) -> Result<u64> {
    // Must be owned by token program (SPL Token or Token-2022)
    let valid_program = account_info.owner == &token::ID || account_info.owner == &token_2022::ID;
    require!(valid_program, ErrorCode::InvalidDestinationAccount);

    let token_account = TokenAccount::try_deserialize(&mut &account_info.data.borrow()[..])
        .map_err(|_| ErrorCode::InvalidDestinationAccount)?;

    require!(token_account.owner == *owner, ErrorCode::InvalidDestinationAccount);
    require!(token_account.mint == *mint, ErrorCode::InvalidDestinationAccount);

    Ok(token_account.amount)
}

/// Venue call assembled by the engine for `swap`
///
/// Accounts: swap authority (signer, writable), payer as beneficiary, destination mint
/// (writable), destination token account (writable), then the venue's own accounts.
/// Data: `execute` discriminator followed by the little-endian lamport amount.
pub fn venue_execute_instruction(
    venue_program: &Pubkey,
    swap_authority: &Pubkey,
    payer: &Pubkey,
    destination_mint: &Pubkey,
    destination_token_account: &Pubkey,
    shared_accounts: &[AccountInfo],
    amount: u64,
) -> Instruction {
    let mut accounts = Vec::with_capacity(4 + shared_accounts.len());
    accounts.push(AccountMeta::new(*swap_authority, true));
    accounts.push(AccountMeta::new_readonly(*payer, false));
    accounts.push(AccountMeta::new(*destination_mint, false));
    accounts.push(AccountMeta::new(*destination_token_account, false));
    accounts.extend(
        shared_accounts
            .iter()
            .map(|info| venue_account_meta(info, swap_authority)),
    );

    let mut data = Vec::with_capacity(8 + 8);
    data.extend_from_slice(&VENUE_EXECUTE_DISCRIMINATOR);
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: *venue_program,
        accounts,
        data,
    }
}

/// Venue call driven by a caller-supplied payload; `data` is forwarded untouched
pub fn venue_payload_instruction(
    venue_program: &Pubkey,
    swap_authority: &Pubkey,
    venue_accounts: &[AccountInfo],
    data: Vec<u8>,
) -> Instruction {
    Instruction {
        program_id: *venue_program,
        accounts: venue_accounts
            .iter()
            .map(|info| venue_account_meta(info, swap_authority))
            .collect(),
        data,
    }
}

// Swap authority never signs the outer transaction, it signs through invoke_signed
fn venue_account_meta(info: &AccountInfo, swap_authority: &Pubkey) -> AccountMeta {
    AccountMeta {
        pubkey: *info.key,
        is_signer: info.is_signer || info.key == swap_authority,
        is_writable: info.is_writable,
    }
}
