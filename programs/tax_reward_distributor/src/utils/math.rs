use anchor_lang::prelude::*;
use crate::constants::BPS_DENOMINATOR;
use crate::error::DistributorError;

/// `amount * bps / 10_000`, rounded down
pub fn bps_share(amount: u64, bps: u16) -> Result<u64> {
    weighted_share(amount, bps as u64, BPS_DENOMINATOR)
}

/// `amount * weight / total_weight`, rounded down, computed in u128
pub fn weighted_share(amount: u64, weight: u64, total_weight: u64) -> Result<u64> {
    require!(total_weight > 0, DistributorError::InvalidSplit);
    require!(weight <= total_weight, DistributorError::InvalidSplit);

    let share = (amount as u128)
        .checked_mul(weight as u128)
        .ok_or(DistributorError::ArithmeticOverflow)?
        / total_weight as u128;

    // weight <= total_weight, so share <= amount
    Ok(share as u64)
}

/// Moves `value` by `new - old` without an intermediate overflow
pub fn apply_delta(value: u64, old: u64, new: u64) -> Result<u64> {
    let moved = if new >= old {
        value.checked_add(new - old)
    } else {
        value.checked_sub(old - new)
    };
    moved.ok_or_else(|| DistributorError::ArithmeticOverflow.into())
}

/// `floor(a * b / divisor)` over a 192-bit intermediate
///
/// The product is held as three 64-bit limbs and divided limb by limb, so
/// it never overflows; only a quotient wider than u128 is an error.
pub fn mul_div_floor(a: u64, b: u128, divisor: u64) -> Result<u128> {
    require!(divisor > 0, DistributorError::ArithmeticOverflow);

    const LIMB: u32 = 64;
    const MASK: u128 = u64::MAX as u128;

    let low = a as u128 * (b & MASK);
    let high = a as u128 * (b >> LIMB);

    let limb0 = low & MASK;
    let middle = (low >> LIMB) + (high & MASK);
    let limb1 = middle & MASK;
    let limb2 = (high >> LIMB) + (middle >> LIMB);

    // Long division, most significant limb first; remainder < divisor < 2^64
    let divisor = divisor as u128;
    let q2 = limb2 / divisor;
    let rem = limb2 % divisor;
    let acc = (rem << LIMB) | limb1;
    let q1 = acc / divisor;
    let rem = acc % divisor;
    let acc = (rem << LIMB) | limb0;
    let q0 = acc / divisor;

    require!(q2 == 0, DistributorError::ArithmeticOverflow);
    Ok((q1 << LIMB) | q0)
}
