// Basis point math
pub const BPS_DENOMINATOR: u16 = 10_000;      // 100%
pub const REQUIRED_SHARE_TOTAL: u16 = 10_000; // Destination shares must total 100%

// Fee bounds (both 0 and 10000 are rejected)
pub const MIN_FEE_BPS: u16 = 1;
pub const MAX_FEE_BPS: u16 = 9_999;

// Fan-out limit per swap (each leg costs a funding CPI plus a venue CPI)
pub const MAX_DESTINATIONS: usize = 8;

// Remaining accounts per destination in `swap`: [destination_mint, destination_token_account]
pub const ACCOUNTS_PER_SWAP_LEG: usize = 2;

// PDA seeds
pub const PROTOCOL_CONFIG_SEED: &[u8] = b"protocol_config";
pub const SWAP_AUTHORITY_SEED: &[u8] = b"swap_authority";

// Venue `execute(amount: u64)` instruction discriminator (sha256("global:execute")[..8])
pub const VENUE_EXECUTE_DISCRIMINATOR: [u8; 8] = [0x82, 0xdd, 0xf2, 0x9a, 0x0d, 0xc1, 0xbd, 0x1d];

// ProtocolConfig schema
pub const PROTOCOL_CONFIG_VERSION: u8 = 1;
pub const PROTOCOL_CONFIG_RESERVED: usize = 63;

// ProtocolConfig: discriminator (8) + authority (32) + pending_authority (32) + fee_recipient (32)
// + fee_bps (2) + version (1) + bump (1) + swap_authority_bump (1) + reserved (63)
pub const PROTOCOL_CONFIG_SIZE: usize = 8 + 32 + 32 + 32 + 2 + 1 + 1 + 1 + PROTOCOL_CONFIG_RESERVED; // 172 bytes
