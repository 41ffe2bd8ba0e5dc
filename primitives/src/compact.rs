use crate::bigint::U256;
use std::fmt;

/// "nBits" representation of a 256-bit target: one exponent byte, three
/// mantissa bytes. `value = mantissa * 256^(exponent - 3)`.
///
/// This mirrors `arith_uint256::GetCompact`/`SetCompact` bit-for-bit,
/// including the 0x00800000 sign bit and negative-zero quirks of the
/// original encoding (the sign bit is always false for values produced by
/// `U256::to_compact`, since `U256` itself cannot be negative -- but a
/// `Compact` decoded from the wire can still carry it, and `negative()`
/// reports it rather than silently flipping it).
#[derive(Copy, Clone, PartialEq, Eq, Default, Hash)]
pub struct Compact(u32);

const UNIT: u32 = 0x0080_0000;

impl Compact {
	pub fn new(u: u32) -> Self {
		Compact(u)
	}

	pub fn max_value() -> Self {
		Compact::new(u32::max_value())
	}

	/// True if the encoded mantissa carries the sign bit.
	pub fn is_negative(&self) -> bool {
		self.0 & UNIT != 0
	}

	/// True if decoding would overflow a 256-bit unsigned integer.
	pub fn is_overflowed(&self) -> bool {
		let size = self.0 >> 24;
		let word = self.0 & 0x007f_ffff;
		word != 0 && ((size > 34) || (word > 0xff && size > 33) || (word > 0xffff && size > 32))
	}

	/// Decode to an unsigned 256-bit value, discarding the sign bit (the
	/// caller is expected to have already decided what a negative-encoded
	/// compact value should mean in context -- see `BigNum` for the
	/// sign-aware counterpart used by the difficulty retargeter).
	pub fn to_u256(&self) -> Result<U256, ()> {
		if self.is_overflowed() {
			return Err(());
		}
		let size = self.0 >> 24;
		let word = u64::from(self.0 & 0x007f_ffff);
		let result = if size <= 3 {
			U256::from(word >> (8 * (3 - size)))
		} else {
			U256::from(word) << (8 * (size - 3))
		};
		Ok(result)
	}

	pub fn from_u256(value: U256) -> Self {
		let mut size = (value.bit_length() + 7) / 8;
		let mut compact = if size <= 3 {
			(value.low_u64() << (8 * (3 - size))) as u32
		} else {
			let shifted = value >> (8 * (size - 3));
			shifted.low_u32()
		};

		// the 0x00800000 bit denotes the sign; shift down and bump the
		// exponent if the mantissa would otherwise look negative.
		if compact & UNIT != 0 {
			compact >>= 8;
			size += 1;
		}

		debug_assert!((compact & !0x007f_ffffu32) == 0);
		debug_assert!(size < 256);
		Compact(compact | (size << 24))
	}
}

impl From<u32> for Compact {
	fn from(u: u32) -> Self {
		Compact(u)
	}
}

impl From<Compact> for u32 {
	fn from(c: Compact) -> Self {
		c.0
	}
}

impl From<U256> for Compact {
	fn from(u: U256) -> Self {
		Compact::from_u256(u)
	}
}

impl fmt::Debug for Compact {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "Compact(0x{:08x})", self.0)
	}
}
