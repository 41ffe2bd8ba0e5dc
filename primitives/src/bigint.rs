//! Fixed-width 256-bit unsigned integer, used for proof-of-work/proof-of-stake
//! targets and for whale-safe coin-age accumulation. A parallel 512-bit type
//! backs the retargeter's `BigNum`: the EMA retarget formula multiplies a
//! near-limit 256-bit target by a small integer factor before dividing back
//! down, and a plain 256-bit buffer can transiently overflow during that
//! multiply (see `bignum.rs`).

uint::construct_uint! {
	pub struct U256(4);
}

uint::construct_uint! {
	pub struct U512(8);
}

impl U256 {
	/// Number of significant bits, i.e. `256 - leading_zeros`. Zero has zero bits.
	pub fn bit_length(&self) -> u32 {
		for i in (0..4).rev() {
			if self.0[i] != 0 {
				return (i as u32 + 1) * 64 - self.0[i].leading_zeros();
			}
		}
		0
	}

	pub fn to_be_bytes(&self) -> [u8; 32] {
		let mut bytes = [0u8; 32];
		self.to_big_endian(&mut bytes);
		bytes
	}

	pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
		U256::from_big_endian(bytes)
	}
}

impl U512 {
	pub fn from_u256(value: U256) -> Self {
		let mut wide = [0u8; 64];
		wide[32..].copy_from_slice(&value.to_be_bytes());
		U512::from_big_endian(&wide)
	}

	/// Narrows back to 256 bits, saturating to `U256` max if the value
	/// doesn't fit. Callers only need this after the retargeter has already
	/// divided a transient overflow back down, or when clamping an
	/// out-of-range result against a limit that will replace it anyway.
	pub fn saturating_to_u256(&self) -> U256 {
		let mut bytes = [0u8; 64];
		self.to_big_endian(&mut bytes);
		if bytes[..32].iter().any(|&b| b != 0) {
			!U256::zero()
		} else {
			U256::from_be_bytes(&{
				let mut low = [0u8; 32];
				low.copy_from_slice(&bytes[32..]);
				low
			})
		}
	}
}

#[cfg(test)]
mod u512_tests {
	use super::{U256, U512};

	#[test]
	fn test_widen_narrow_round_trip() {
		let value = (!U256::zero()) >> 20;
		let wide = U512::from_u256(value);
		assert_eq!(wide.saturating_to_u256(), value);
	}

	#[test]
	fn test_narrow_saturates_when_too_wide() {
		let wide = U512::from_u256(!U256::zero()) * U512::from(2u64);
		assert_eq!(wide.saturating_to_u256(), !U256::zero());
	}

	#[test]
	fn test_multiply_past_256_bits_does_not_overflow() {
		// a near-limit 256-bit magnitude times a plausible retarget factor
		// exceeds 256 bits but comfortably fits in 512.
		let near_limit = (!U256::zero()) >> 4;
		let wide = U512::from_u256(near_limit) * U512::from(1_000_000u64);
		assert_eq!(wide.saturating_to_u256(), !U256::zero());
	}
}
