use anchor_lang::prelude::*;

use crate::{
    constants::{BPS_DENOMINATOR, MAX_DESTINATIONS, REQUIRED_SHARE_TOTAL},
    errors::ErrorCode,
};

/// Split of a single payment between the protocol fee and each destination
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Allocation {
    pub fee_amount: u64,
    pub net_amount: u64,
    /// Aligned with the requested destinations
    pub destination_amounts: Vec<u64>,
}

impl Allocation {
    pub fn distributed(&self) -> Result<u64> {
        sum_amounts(&self.destination_amounts)
    }
}

/// Computes fee and per-destination amounts for a payment
///
/// Checks run in order and the first failure wins: zero payment, length mismatch,
/// destination count, share total. All division floors; whatever dust the per-destination
/// floors leave behind is credited to the last destination, so a non-empty allocation
/// always accounts for every lamport of `gross_amount`. With no destinations only the fee
/// is taken and `net_amount` stays with the payer.
pub fn allocate(
    gross_amount: u64,
    destinations: &[Pubkey],
    shares_bps: &[u16],
    fee_bps: u16,
) -> Result<Allocation> {
    require!(gross_amount > 0, ErrorCode::InsufficientPayment);
    require!(
        destinations.len() == shares_bps.len(),
        ErrorCode::LengthMismatch
    );
    require!(
        destinations.len() <= MAX_DESTINATIONS,
        ErrorCode::InvalidDestinationCount
    );

    if !shares_bps.is_empty() {
        let total_bps = sum_shares_bps(shares_bps).ok_or(ErrorCode::MathOverflow)?;
        require!(
            total_bps == REQUIRED_SHARE_TOTAL as u32,
            ErrorCode::InvalidAllocation
        );
    }

    let fee_amount = bps_of(gross_amount, fee_bps).ok_or(ErrorCode::MathOverflow)?;
    let net_amount = gross_amount
        .checked_sub(fee_amount)
        .ok_or(ErrorCode::MathUnderflow)?;

    let mut destination_amounts = shares_bps
        .iter()
        .map(|share| bps_of(net_amount, *share).ok_or(ErrorCode::MathOverflow))
        .collect::<std::result::Result<Vec<u64>, ErrorCode>>()?;

    let residual = net_amount
        .checked_sub(sum_amounts(&destination_amounts)?)
        .ok_or(ErrorCode::MathUnderflow)?;

    if let Some(last) = destination_amounts.last_mut() {
        *last = last.checked_add(residual).ok_or(ErrorCode::MathOverflow)?;
    }

    Ok(Allocation {
        fee_amount,
        net_amount,
        destination_amounts,
    })
}

/// floor(amount * bps / 10000), None on overflow
pub fn bps_of(amount: u64, bps: u16) -> Option<u64> {
    (amount as u128)
        .checked_mul(bps as u128)?
        .checked_div(BPS_DENOMINATOR as u128)?
        .try_into()
        .ok()
}

/// Sum all destination shares, None on overflow
pub fn sum_shares_bps(shares_bps: &[u16]) -> Option<u32> {
    shares_bps
        .iter()
        .try_fold(0u32, |acc, share| acc.checked_add(*share as u32))
}

fn sum_amounts(amounts: &[u64]) -> Result<u64> {
    Ok(amounts
        .iter()
        .try_fold(0u64, |acc, amount| acc.checked_add(*amount))
        .ok_or(ErrorCode::MathOverflow)?)
}
