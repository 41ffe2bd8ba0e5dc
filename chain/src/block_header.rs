use bitcrypto::{dhash256, SHA256D};
use primitives::compact::Compact;
use ser::{serialize, Deserializable, Error as ReaderError, Reader, Serializable, Stream};
use std::{fmt, io};

#[derive(PartialEq, Clone, Default)]
pub struct BlockHeader {
	pub version: u32,
	pub previous_header_hash: SHA256D,
	pub merkle_root_hash: SHA256D,
	pub time: u32,
	pub bits: Compact,
	pub nonce: u32,
}

impl BlockHeader {
	pub fn hash(&self) -> SHA256D {
		block_header_hash(self)
	}
}

impl fmt::Debug for BlockHeader {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("BlockHeader")
			.field("version", &self.version)
			.field("previous_header_hash", &self.previous_header_hash)
			.field("merkle_root_hash", &self.merkle_root_hash)
			.field("time", &self.time)
			.field("bits", &self.bits)
			.field("nonce", &self.nonce)
			.finish()
	}
}

impl Serializable for BlockHeader {
	fn serialize(&self, stream: &mut Stream) {
		stream
			.append(&self.version)
			.append(&self.previous_header_hash)
			.append(&self.merkle_root_hash)
			.append(&self.time)
			.append(&self.bits)
			.append(&self.nonce);
	}

	fn serialized_size(&self) -> usize {
		4 + 32 + 32 + 4 + 4 + 4
	}
}

impl Deserializable for BlockHeader {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, ReaderError>
	where
		T: io::Read,
	{
		Ok(BlockHeader {
			version: reader.read()?,
			previous_header_hash: reader.read()?,
			merkle_root_hash: reader.read()?,
			time: reader.read()?,
			bits: reader.read()?,
			nonce: reader.read()?,
		})
	}
}

pub fn block_header_hash(header: &BlockHeader) -> SHA256D {
	dhash256(&serialize(header))
}

#[cfg(test)]
mod tests {
	use super::BlockHeader;
	use ser::{deserialize, serialize};

	#[test]
	fn test_block_header_round_trip() {
		let header = BlockHeader {
			version: 1,
			previous_header_hash: Default::default(),
			merkle_root_hash: Default::default(),
			time: 1472669240,
			bits: 0x1d00ffffu32.into(),
			nonce: 233180,
		};

		let serialized = serialize(&header);
		let deserialized: BlockHeader = deserialize(serialized.as_ref()).unwrap();
		assert_eq!(header, deserialized);
	}
}
