use std::mem;

/// Minimally-encoded script integer, the `CScriptNum` wire representation.
///
/// Encoding rules: little-endian magnitude, smallest byte count that represents
/// the value unambiguously, with the top bit of the last byte reserved for sign
/// (an extra `0x00`/`0x80` byte is appended when the natural encoding would
/// otherwise leave the sign ambiguous).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ScriptNum(i64);

impl ScriptNum {
	pub fn new(value: i64) -> Self {
		ScriptNum(value)
	}

	pub fn value(&self) -> i64 {
		self.0
	}

	pub fn to_bytes(&self) -> Vec<u8> {
		if self.0 == 0 {
			return Vec::new();
		}

		let mut result = Vec::new();
		let negative = self.0 < 0;
		let mut absvalue = if negative { (-self.0) as u64 } else { self.0 as u64 };

		while absvalue != 0 {
			result.push((absvalue & 0xff) as u8);
			absvalue >>= 8;
		}

		if result.last().map(|byte| byte & 0x80 != 0).unwrap_or(false) {
			result.push(if negative { 0x80 } else { 0x00 });
		} else if negative {
			let last = result.last_mut().expect("result is non-empty: self.0 != 0");
			*last |= 0x80;
		}

		result
	}

	pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
		if bytes.is_empty() {
			return Some(ScriptNum(0));
		}
		if bytes.len() > mem::size_of::<i64>() {
			return None;
		}

		let mut result = 0i64;
		for (i, byte) in bytes.iter().enumerate() {
			result |= (*byte as i64) << (8 * i);
		}

		let last = bytes[bytes.len() - 1];
		if last & 0x80 != 0 {
			result &= !(0x80i64 << (8 * (bytes.len() - 1)));
			result = -result;
		}

		Some(ScriptNum(result))
	}
}

impl From<i64> for ScriptNum {
	fn from(value: i64) -> Self {
		ScriptNum::new(value)
	}
}
