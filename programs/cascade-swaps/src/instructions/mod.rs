#![allow(ambiguous_glob_reexports)]

pub mod accept_protocol_authority;
pub mod get_fee;
pub mod get_fee_recipient;
pub mod initialize_protocol;
pub mod set_fee;
pub mod set_fee_recipient;
pub mod swap;
pub mod swap_with_venue_payload;
pub mod transfer_protocol_authority;

pub use accept_protocol_authority::*;
pub use get_fee::*;
pub use get_fee_recipient::*;
pub use initialize_protocol::*;
pub use set_fee::*;
pub use set_fee_recipient::*;
pub use swap::*;
pub use swap_with_venue_payload::*;
pub use transfer_protocol_authority::*;
