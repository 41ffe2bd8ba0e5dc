use crate::{Deserializable, Error, Reader, Serializable, Stream};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io;

/// Bitcoin's variable-length integer ("varint") encoding.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CompactInteger(u64);

impl From<usize> for CompactInteger {
	fn from(u: usize) -> Self {
		CompactInteger(u as u64)
	}
}

impl From<u32> for CompactInteger {
	fn from(u: u32) -> Self {
		CompactInteger(u as u64)
	}
}

impl From<u64> for CompactInteger {
	fn from(u: u64) -> Self {
		CompactInteger(u)
	}
}

impl From<CompactInteger> for usize {
	fn from(i: CompactInteger) -> Self {
		i.0 as usize
	}
}

impl From<CompactInteger> for u64 {
	fn from(i: CompactInteger) -> Self {
		i.0
	}
}

impl Serializable for CompactInteger {
	fn serialize(&self, stream: &mut Stream) {
		match self.0 {
			0..=0xfc => {
				stream.write_u8(self.0 as u8).unwrap();
			}
			0xfd..=0xffff => {
				stream.write_u8(0xfd).unwrap();
				stream.write_u16::<LittleEndian>(self.0 as u16).unwrap();
			}
			0x10000..=0xffff_ffff => {
				stream.write_u8(0xfe).unwrap();
				stream.write_u32::<LittleEndian>(self.0 as u32).unwrap();
			}
			_ => {
				stream.write_u8(0xff).unwrap();
				stream.write_u64::<LittleEndian>(self.0).unwrap();
			}
		}
	}

	#[inline]
	fn serialized_size(&self) -> usize {
		match self.0 {
			0..=0xfc => 1,
			0xfd..=0xffff => 3,
			0x10000..=0xffff_ffff => 5,
			_ => 9,
		}
	}
}

impl Deserializable for CompactInteger {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error>
	where
		T: io::Read,
	{
		let value = match reader.read_u8()? {
			0xfd => reader.read_u16::<LittleEndian>()? as u64,
			0xfe => reader.read_u32::<LittleEndian>()? as u64,
			0xff => reader.read_u64::<LittleEndian>()?,
			value => value as u64,
		};

		Ok(CompactInteger(value))
	}
}

#[cfg(test)]
mod tests {
	use super::CompactInteger;
	use crate::{deserialize, serialize};
	use primitives::bytes::Bytes;

	#[test]
	fn test_compact_integer_serialize() {
		assert_eq!(serialize(&CompactInteger::from(0xfau8)), Bytes::from("0a"));
		assert_eq!(serialize(&CompactInteger::from(0xfcu8)), Bytes::from("fc"));
		assert_eq!(serialize(&CompactInteger::from(0xfdu16)), Bytes::from("fdfd00"));
		assert_eq!(serialize(&CompactInteger::from(0xffffu16)), Bytes::from("fdffff"));
		assert_eq!(serialize(&CompactInteger::from(0x10000u32)), Bytes::from("fe00000100"));
	}

	#[test]
	fn test_compact_integer_deserialize() {
		let raw: Bytes = "fdfd00".into();
		let result: CompactInteger = deserialize(raw.as_ref()).unwrap();
		assert_eq!(result, CompactInteger::from(0xfdu16));
	}
}
