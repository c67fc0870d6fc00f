use anchor_lang::prelude::*;

#[event]
pub struct ProtocolConfigCreated {
    pub authority: Pubkey,
    pub fee_recipient: Pubkey,
    pub fee_bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct FeeUpdated {
    pub authority: Pubkey,
    pub old_fee_bps: u16,
    pub new_fee_bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct FeeRecipientUpdated {
    pub authority: Pubkey,
    pub old_fee_recipient: Pubkey,
    pub new_fee_recipient: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ProtocolAuthorityTransferProposed {
    pub authority: Pubkey,
    pub pending_authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ProtocolAuthorityTransferAccepted {
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct SwapExecuted {
    pub payer: Pubkey,
    pub venue_program: Pubkey,
    pub gross_amount: u64,
    pub fee_amount: u64,
    pub fee_recipient: Pubkey,
    /// Lamports handed to the venue across all legs
    pub forwarded: u64,
    /// Lamports the venue left behind, returned to the payer
    pub refunded: u64,
    pub destination_count: u8,
    /// True for `swap_with_venue_payload`
    pub with_payload: bool,
    pub timestamp: i64,
}
