//! Decimal floating point compression of amounts and fees.
//!
//! Rollup transactions carry amounts and fees as `mantissa * 10^exponent` with a 5-bit exponent.
//! Amounts use a 35-bit mantissa (40 bits in total) and fees an 11-bit mantissa (16 bits in
//! total). The packed value stores the mantissa in the high bits and the exponent in the low
//! five bits: `packed = mantissa << 5 | exponent`.
//!
//! Operation encoders take already packed values; the functions here convert between full-width
//! values and their packed form.

use crate::{PackedAmount, PackedFee, PubdataError};

// CONSTANTS
// ================================================================================================

pub const EXPONENT_BIT_WIDTH: u32 = 5;
pub const AMOUNT_MANTISSA_BIT_WIDTH: u32 = 35;
pub const FEE_MANTISSA_BIT_WIDTH: u32 = 11;

const MAX_EXPONENT: u32 = (1 << EXPONENT_BIT_WIDTH) - 1;
const EXPONENT_MASK: u64 = MAX_EXPONENT as u64;
const BASE: u128 = 10;

// AMOUNTS
// ================================================================================================

/// Packs `amount` into a 40-bit float.
///
/// # Errors
/// Returns an error if `amount` cannot be represented without losing precision.
pub fn pack_amount(amount: u128) -> Result<PackedAmount, PubdataError> {
    match decompose(amount, AMOUNT_MANTISSA_BIT_WIDTH) {
        Some(float) if float.exact => PackedAmount::new(float.pack() as u64),
        _ => Err(PubdataError::AmountNotPackable(amount)),
    }
}

/// Returns true if `amount` can be packed without losing precision.
pub fn is_amount_packable(amount: u128) -> bool {
    pack_amount(amount).is_ok()
}

/// Returns the largest packable amount which is not greater than `amount`.
pub fn closest_packable_amount(amount: u128) -> u128 {
    closest_packable(amount, AMOUNT_MANTISSA_BIT_WIDTH)
}

impl PackedAmount {
    /// Returns the full-width amount, or `None` if it does not fit into a `u128`.
    ///
    /// Only raw values that were not produced by [pack_amount] can overflow.
    pub fn unpack(&self) -> Option<u128> {
        unpack(self.as_u64())
    }
}

// FEES
// ================================================================================================

/// Packs `fee` into a 16-bit float.
///
/// # Errors
/// Returns an error if `fee` cannot be represented without losing precision.
pub fn pack_fee(fee: u128) -> Result<PackedFee, PubdataError> {
    match decompose(fee, FEE_MANTISSA_BIT_WIDTH) {
        Some(float) if float.exact => Ok(PackedFee::new(float.pack() as u16)),
        _ => Err(PubdataError::FeeNotPackable(fee)),
    }
}

/// Returns true if `fee` can be packed without losing precision.
pub fn is_fee_packable(fee: u128) -> bool {
    pack_fee(fee).is_ok()
}

/// Returns the largest packable fee which is not greater than `fee`.
pub fn closest_packable_fee(fee: u128) -> u128 {
    closest_packable(fee, FEE_MANTISSA_BIT_WIDTH)
}

impl PackedFee {
    /// Returns the full-width fee. Every packed fee fits into a `u128`.
    pub fn unpack(&self) -> u128 {
        let mantissa = u128::from(self.as_u16() >> EXPONENT_BIT_WIDTH);
        let exponent = u32::from(self.as_u16()) & MAX_EXPONENT;
        mantissa * BASE.pow(exponent)
    }
}

// HELPERS
// ================================================================================================

struct DecimalFloat {
    mantissa: u128,
    exponent: u32,
    /// False if digits were dropped while shrinking the mantissa.
    exact: bool,
}

impl DecimalFloat {
    fn pack(&self) -> u128 {
        (self.mantissa << EXPONENT_BIT_WIDTH) | u128::from(self.exponent)
    }

    fn value(&self) -> u128 {
        self.mantissa * BASE.pow(self.exponent)
    }
}

/// Splits `value` into the smallest exponent for which the mantissa fits into `mantissa_bits`.
///
/// Returns `None` if the mantissa does not fit even with the largest exponent.
fn decompose(value: u128, mantissa_bits: u32) -> Option<DecimalFloat> {
    let max_mantissa = (1u128 << mantissa_bits) - 1;
    let mut float = DecimalFloat { mantissa: value, exponent: 0, exact: true };
    while float.mantissa > max_mantissa {
        if float.exponent == MAX_EXPONENT {
            return None;
        }
        float.exact &= float.mantissa % BASE == 0;
        float.mantissa /= BASE;
        float.exponent += 1;
    }
    Some(float)
}

fn closest_packable(value: u128, mantissa_bits: u32) -> u128 {
    match decompose(value, mantissa_bits) {
        Some(float) => float.value(),
        None => ((1u128 << mantissa_bits) - 1).saturating_mul(BASE.pow(MAX_EXPONENT)),
    }
}

fn unpack(raw: u64) -> Option<u128> {
    let mantissa = u128::from(raw >> EXPONENT_BIT_WIDTH);
    let exponent = (raw & EXPONENT_MASK) as u32;
    mantissa.checked_mul(BASE.pow(exponent))
}

// TESTS
// ================================================================================================
