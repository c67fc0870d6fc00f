use anchor_lang::prelude::*;

// Variant order is part of the program ABI (custom codes start at 6000)
#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Fee must be between 1 and 9999 bps")]
    InvalidFee,

    #[msg("Payment amount must be greater than zero")]
    InsufficientPayment,

    #[msg("Destinations and shares do not have the same length")]
    LengthMismatch,

    #[msg("Destination shares must sum to 10000 bps (100%)")]
    InvalidAllocation,

    #[msg("Swap venue execution failed")]
    VenueExecutionFailed,

    #[msg("Destination count must be at most 8, and at least 1 for swap")]
    InvalidDestinationCount,

    #[msg("Invalid fee recipient")]
    InvalidFeeRecipient,

    #[msg("Invalid swap venue program")]
    InvalidVenueProgram,

    #[msg("Destination token account is invalid")]
    InvalidDestinationAccount,

    #[msg("Not enough accounts provided in remaining_accounts")]
    InsufficientRemainingAccounts,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Math underflow")]
    MathUnderflow,

    #[msg("No pending authority transfer")]
    NoPendingTransfer,
}
