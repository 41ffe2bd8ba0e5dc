//! Sign-magnitude big integer, used only by the difficulty retargeter.
//!
//! The exponential-moving-average retarget formula multiplies a 256-bit
//! target by `(interval - 1) * spacing + 2 * actual_spacing`, a quantity
//! that can be negative when `actual_spacing` is a large negative number
//! (clock drift) and the V1 rule (no negativity clamp) is in effect. A
//! plain `U256` cannot represent that transient negative value; `BigNum`
//! pairs a sign flag with a `U256` magnitude, mirroring the original's
//! `CBigNum` (an OpenSSL `BIGNUM` wrapper that is always signed, unlike
//! `arith_uint256`).

use crate::bigint::{U256, U512};
use crate::compact::Compact;
use std::cmp::Ordering;

/// Sign-magnitude big integer, magnitude held in a 512-bit word so the
/// retargeter's multiply-then-divide step can't transiently overflow (see
/// `bigint.rs`). Values only ever originate from a 256-bit target or
/// compact encoding, so 512 bits is far more headroom than the arithmetic
/// in `mul_i64`/`div_i64` needs.
#[derive(Copy, Clone, Debug)]
pub struct BigNum {
	negative: bool,
	magnitude: U512,
}

impl BigNum {
	pub fn zero() -> Self {
		BigNum {
			negative: false,
			magnitude: U512::zero(),
		}
	}

	pub fn from_u256(value: U256) -> Self {
		BigNum {
			negative: false,
			magnitude: U512::from_u256(value),
		}
	}

	pub fn is_negative_or_zero(&self) -> bool {
		self.negative || self.magnitude.is_zero()
	}

	pub fn is_zero(&self) -> bool {
		self.magnitude.is_zero()
	}

	/// Decodes a compact ("nBits") value the way `CBigNum::SetCompact` does:
	/// unlike `arith_uint256`, the sign bit (0x00800000) actually produces a
	/// negative `BigNum` rather than being treated as an encoding error.
	pub fn from_compact(bits: Compact) -> Self {
		let raw: u32 = bits.into();
		let size = raw >> 24;
		let word = u64::from(raw & 0x007f_ffff);
		let negative = raw & 0x0080_0000 != 0;

		let magnitude = if size <= 3 {
			U512::from(word >> (8 * (3 - size)))
		} else {
			U512::from(word) << (8 * (size - 3))
		};

		BigNum {
			negative: negative && !magnitude.is_zero(),
			magnitude,
		}
	}

	/// Encodes the way `CBigNum::GetCompact` does: like `Compact::from_u256`
	/// but folding the sign back into the 0x00800000 bit instead of
	/// discarding it. The magnitude saturates to the 256-bit max first --
	/// by this point the retargeter has already clamped against `limit`, so
	/// an overshoot only ever reaches this path on its way to being
	/// discarded in favor of the clamp.
	pub fn to_compact(&self) -> Compact {
		let unsigned = Compact::from_u256(self.magnitude.saturating_to_u256());
		let raw: u32 = unsigned.into();
		if self.negative && raw & 0x007f_ffff != 0 {
			Compact::from(raw | 0x0080_0000)
		} else {
			Compact::from(raw)
		}
	}

	/// Multiplies the magnitude by `rhs`, flipping sign if `rhs` is negative.
	pub fn mul_i64(&self, rhs: i64) -> Self {
		if rhs == 0 || self.magnitude.is_zero() {
			return BigNum::zero();
		}
		let magnitude = self.magnitude * U512::from(rhs.unsigned_abs());
		BigNum {
			negative: self.negative ^ (rhs < 0),
			magnitude,
		}
	}

	/// Divides the magnitude by `rhs` (truncating), flipping sign if `rhs`
	/// is negative. `rhs` must be nonzero.
	pub fn div_i64(&self, rhs: i64) -> Self {
		assert!(rhs != 0, "division by zero in retarget arithmetic");
		let magnitude = self.magnitude / U512::from(rhs.unsigned_abs());
		BigNum {
			negative: self.negative ^ (rhs < 0) && !magnitude.is_zero(),
			magnitude,
		}
	}

	/// Compares against an unsigned limit (always treated as non-negative).
	pub fn gt_u256(&self, limit: U256) -> bool {
		!self.negative && self.magnitude > U512::from_u256(limit)
	}
}

impl PartialEq for BigNum {
	fn eq(&self, other: &Self) -> bool {
		if self.magnitude.is_zero() && other.magnitude.is_zero() {
			return true;
		}
		self.negative == other.negative && self.magnitude == other.magnitude
	}
}

impl PartialOrd for BigNum {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		if self.magnitude.is_zero() && other.magnitude.is_zero() {
			return Some(Ordering::Equal);
		}
		match (self.negative, other.negative) {
			(false, true) => Some(Ordering::Greater),
			(true, false) => Some(Ordering::Less),
			(false, false) => self.magnitude.partial_cmp(&other.magnitude),
			(true, true) => other.magnitude.partial_cmp(&self.magnitude),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::BigNum;
	use crate::bigint::U256;
	use crate::compact::Compact;

	#[test]
	fn test_compact_round_trip_positive() {
		let limit = (!U256::zero()) >> 20;
		let bn = BigNum::from_u256(limit);
		let compact = bn.to_compact();
		let decoded = BigNum::from_compact(compact);
		assert_eq!(decoded, bn);
		assert!(!decoded.negative);
	}

	#[test]
	fn test_negative_mul_flips_sign() {
		let bn = BigNum::from_u256(U256::from(100u64));
		let negated = bn.mul_i64(-1);
		assert!(negated.is_negative_or_zero());
		assert!(negated < BigNum::zero());
	}

	#[test]
	fn test_negative_compact_round_trip() {
		let bits = Compact::from(0x0184_0000u32); // size=1, word=0x840000 -> sign bit set, mantissa 0x04
		let bn = BigNum::from_compact(bits);
		assert!(bn.negative);
		let back = bn.to_compact();
		let bn2 = BigNum::from_compact(back);
		assert_eq!(bn, bn2);
	}

	#[test]
	fn test_zero_is_never_negative() {
		let bits = Compact::from(0x0080_0000u32); // sign bit set but zero mantissa: "negative zero"
		let bn = BigNum::from_compact(bits);
		assert!(!bn.negative);
		assert!(bn.is_zero());
	}
}
