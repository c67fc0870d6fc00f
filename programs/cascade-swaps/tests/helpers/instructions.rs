//! Instruction builders for Mollusk tests
//!
//! NOTE: This is written for mollusk-svm 0.5.1 with solana-sdk 2.2
//! All imports from solana_sdk::*, not modular crates

use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

/// Program ID - must match lib.rs
pub const PROGRAM_ID: Pubkey = solana_sdk::pubkey!("8WMwD4ZD4YPbNsRWEQyETo1fNaaxyKaGTNCMUhXYXRp5");

// Anchor discriminators (first 8 bytes of sha256("global:function_name"))
// These must match the IDL/program
pub const DISCRIMINATOR_INITIALIZE_PROTOCOL: [u8; 8] = [0xbc, 0xe9, 0xfc, 0x6a, 0x86, 0x92, 0xca, 0x5b];
pub const DISCRIMINATOR_SET_FEE: [u8; 8] = [0x12, 0x9a, 0x18, 0x12, 0xed, 0xd6, 0x13, 0x50];
pub const DISCRIMINATOR_SET_FEE_RECIPIENT: [u8; 8] = [0xe3, 0x12, 0xd7, 0x2a, 0xed, 0xf6, 0x97, 0x42];
pub const DISCRIMINATOR_GET_FEE: [u8; 8] = [0x73, 0xc3, 0xeb, 0xa1, 0x19, 0xdb, 0x3c, 0x1d];
pub const DISCRIMINATOR_GET_FEE_RECIPIENT: [u8; 8] = [0x82, 0xea, 0xfd, 0x84, 0x5a, 0xf2, 0x3f, 0x8f];
pub const DISCRIMINATOR_TRANSFER_PROTOCOL_AUTHORITY: [u8; 8] = [0x23, 0x4c, 0x24, 0x4d, 0x88, 0x70, 0x9e, 0xde];
pub const DISCRIMINATOR_ACCEPT_PROTOCOL_AUTHORITY: [u8; 8] = [0xed, 0x7a, 0x06, 0x27, 0x35, 0xca, 0x8d, 0x71];
pub const DISCRIMINATOR_SWAP: [u8; 8] = [0xf8, 0xc6, 0x9e, 0x91, 0xe1, 0x75, 0x87, 0xc8];
pub const DISCRIMINATOR_SWAP_WITH_VENUE_PAYLOAD: [u8; 8] = [0xaf, 0x71, 0xf2, 0x49, 0x92, 0xa3, 0x63, 0x07];

/// One destination of a `swap` call
#[derive(Clone, Copy, Debug)]
pub struct SwapLeg {
    pub mint: Pubkey,
    pub token_account: Pubkey,
}

/// One destination of a `swap_with_venue_payload` call
#[derive(Clone, Debug)]
pub struct PayloadLeg {
    pub destination_token_account: Pubkey,
    pub venue_accounts: Vec<AccountMeta>,
    pub data: Vec<u8>,
}

/// Accounts shared by `swap` and `swap_with_venue_payload`
#[derive(Clone, Copy, Debug)]
pub struct SwapAccounts {
    pub protocol_config: Pubkey,
    pub payer: Pubkey,
    pub fee_recipient: Pubkey,
    pub swap_authority: Pubkey,
    pub venue_program: Pubkey,
}

/// Derive protocol config PDA
pub fn derive_protocol_config() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"protocol_config"], &PROGRAM_ID)
}

/// Derive swap authority (escrow) PDA
pub fn derive_swap_authority() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"swap_authority"], &PROGRAM_ID)
}

/// Derive program data PDA for BPF upgradeable loader
pub fn derive_program_data() -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PROGRAM_ID.as_ref()],
        &solana_sdk::bpf_loader_upgradeable::id(),
    )
}

fn extend_pubkeys(data: &mut Vec<u8>, keys: &[Pubkey]) {
    data.extend_from_slice(&(keys.len() as u32).to_le_bytes());
    for key in keys {
        data.extend_from_slice(&key.to_bytes());
    }
}

fn extend_shares(data: &mut Vec<u8>, shares: &[u16]) {
    data.extend_from_slice(&(shares.len() as u32).to_le_bytes());
    for share in shares {
        data.extend_from_slice(&share.to_le_bytes());
    }
}

fn swap_account_metas(accounts: &SwapAccounts) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new_readonly(accounts.protocol_config, false),
        AccountMeta::new(accounts.payer, true),
        AccountMeta::new(accounts.fee_recipient, false),
        AccountMeta::new(accounts.swap_authority, false),
        AccountMeta::new_readonly(accounts.venue_program, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ]
}

/// Build initialize_protocol instruction
///
/// Accounts:
/// 0. protocol_config (writable) - PDA to initialize
/// 1. authority (writable, signer) - Must be upgrade authority
/// 2. program_data - BPF loader program data
/// 3. swap_authority (writable) - escrow PDA
/// 4. system_program
pub fn build_initialize_protocol(
    protocol_config: Pubkey,
    authority: Pubkey,
    program_data: Pubkey,
    swap_authority: Pubkey,
    fee_recipient: Pubkey,
    fee_bps: u16,
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 32 + 2);
    data.extend_from_slice(&DISCRIMINATOR_INITIALIZE_PROTOCOL);
    data.extend_from_slice(&fee_recipient.to_bytes());
    data.extend_from_slice(&fee_bps.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(protocol_config, false),
            AccountMeta::new(authority, true),
            AccountMeta::new_readonly(program_data, false),
            AccountMeta::new(swap_authority, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

/// Build set_fee instruction
///
/// Accounts:
/// 0. protocol_config (writable)
/// 1. authority (signer)
pub fn build_set_fee(protocol_config: Pubkey, authority: Pubkey, fee_bps: u16) -> Instruction {
    let mut data = Vec::with_capacity(8 + 2);
    data.extend_from_slice(&DISCRIMINATOR_SET_FEE);
    data.extend_from_slice(&fee_bps.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(protocol_config, false),
            AccountMeta::new_readonly(authority, true),
        ],
        data,
    }
}

/// Build set_fee_recipient instruction
///
/// Accounts:
/// 0. protocol_config (writable)
/// 1. authority (signer)
pub fn build_set_fee_recipient(
    protocol_config: Pubkey,
    authority: Pubkey,
    new_fee_recipient: Pubkey,
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 32);
    data.extend_from_slice(&DISCRIMINATOR_SET_FEE_RECIPIENT);
    data.extend_from_slice(&new_fee_recipient.to_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(protocol_config, false),
            AccountMeta::new_readonly(authority, true),
        ],
        data,
    }
}

/// Build get_fee instruction
///
/// Accounts:
/// 0. protocol_config
pub fn build_get_fee(protocol_config: Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![AccountMeta::new_readonly(protocol_config, false)],
        data: DISCRIMINATOR_GET_FEE.to_vec(),
    }
}

/// Build get_fee_recipient instruction
///
/// Accounts:
/// 0. protocol_config
pub fn build_get_fee_recipient(protocol_config: Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![AccountMeta::new_readonly(protocol_config, false)],
        data: DISCRIMINATOR_GET_FEE_RECIPIENT.to_vec(),
    }
}

/// Build transfer_protocol_authority instruction
///
/// Accounts:
/// 0. protocol_config (writable)
/// 1. authority (signer)
pub fn build_transfer_protocol_authority(
    protocol_config: Pubkey,
    authority: Pubkey,
    new_authority: Pubkey,
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 32);
    data.extend_from_slice(&DISCRIMINATOR_TRANSFER_PROTOCOL_AUTHORITY);
    data.extend_from_slice(&new_authority.to_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(protocol_config, false),
            AccountMeta::new_readonly(authority, true),
        ],
        data,
    }
}

/// Build accept_protocol_authority instruction
///
/// Accounts:
/// 0. protocol_config (writable)
/// 1. new_authority (signer)
pub fn build_accept_protocol_authority(
    protocol_config: Pubkey,
    new_authority: Pubkey,
) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(protocol_config, false),
            AccountMeta::new_readonly(new_authority, true),
        ],
        data: DISCRIMINATOR_ACCEPT_PROTOCOL_AUTHORITY.to_vec(),
    }
}

/// Build swap instruction
///
/// Accounts:
/// 0. protocol_config
/// 1. payer (writable, signer)
/// 2. fee_recipient (writable)
/// 3. swap_authority (writable)
/// 4. venue_program
/// 5. system_program
/// remaining_accounts: [mint (writable), token_account (writable)] per leg,
/// then venue accounts shared by every leg
pub fn build_swap(
    accounts: &SwapAccounts,
    amount: u64,
    destinations: &[Pubkey],
    shares: &[u16],
    legs: &[SwapLeg],
    shared_venue_accounts: &[AccountMeta],
) -> Instruction {
    let mut data = Vec::new();
    data.extend_from_slice(&DISCRIMINATOR_SWAP);
    data.extend_from_slice(&amount.to_le_bytes());
    extend_pubkeys(&mut data, destinations);
    extend_shares(&mut data, shares);

    let mut metas = swap_account_metas(accounts);
    for leg in legs {
        metas.push(AccountMeta::new(leg.mint, false));
        metas.push(AccountMeta::new(leg.token_account, false));
    }
    metas.extend_from_slice(shared_venue_accounts);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: metas,
        data,
    }
}

/// Build swap_with_venue_payload instruction
///
/// Accounts: same named accounts as `swap`
/// remaining_accounts: per leg, destination token account (writable) followed by the
/// leg's venue accounts
pub fn build_swap_with_venue_payload(
    accounts: &SwapAccounts,
    amount: u64,
    legs: &[PayloadLeg],
    shares: &[u16],
    destinations: &[Pubkey],
) -> Instruction {
    let mut data = Vec::new();
    data.extend_from_slice(&DISCRIMINATOR_SWAP_WITH_VENUE_PAYLOAD);
    data.extend_from_slice(&amount.to_le_bytes());

    // Vec<VenuePayload>: 4-byte length prefix + (account_count u8, data Vec<u8>) each
    data.extend_from_slice(&(legs.len() as u32).to_le_bytes());
    for leg in legs {
        data.push(leg.venue_accounts.len() as u8);
        data.extend_from_slice(&(leg.data.len() as u32).to_le_bytes());
        data.extend_from_slice(&leg.data);
    }

    extend_shares(&mut data, shares);
    extend_pubkeys(&mut data, destinations);

    let mut metas = swap_account_metas(accounts);
    for leg in legs {
        metas.push(AccountMeta::new(leg.destination_token_account, false));
        metas.extend_from_slice(&leg.venue_accounts);
    }

    Instruction {
        program_id: PROGRAM_ID,
        accounts: metas,
        data,
    }
}
