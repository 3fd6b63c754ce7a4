use rust_decimal::Decimal;
use sp_core::U256;

/// Number of decimals of the chain's native asset.
pub const NATIVE_DECIMALS: u32 = 18;

/// Error converting a decimal amount into minimal on-chain units.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AmountError {
	#[error("amount is negative")]
	Negative,

	#[error("amount has {provided} fractional digits, more than the {max} the asset supports")]
	TooManyDecimals { provided: u32, max: u32 },

	#[error("scaled amount overflows a 256-bit value")]
	Overflow,
}

/// Converts `amount` into minimal units of an asset with `decimals` decimals.
///
/// The conversion is exact: up to `decimals` fractional digits are scaled without
/// loss, anything finer is rejected rather than rounded.
pub fn to_units(amount: Decimal, decimals: u32) -> Result<U256, AmountError> {
	if amount < Decimal::ZERO {
		return Err(AmountError::Negative);
	}
	if amount.scale() > decimals {
		return Err(AmountError::TooManyDecimals { provided: amount.scale(), max: decimals });
	}

	let mantissa = U256::from(amount.mantissa().unsigned_abs());
	let scaling = U256::from(10u64)
		.checked_pow((decimals - amount.scale()).into())
		.ok_or(AmountError::Overflow)?;
	mantissa.checked_mul(scaling).ok_or(AmountError::Overflow)
}

/// Converts `amount` into wei of the native asset.
pub fn to_wei(amount: Decimal) -> Result<U256, AmountError> {
	to_units(amount, NATIVE_DECIMALS)
}
