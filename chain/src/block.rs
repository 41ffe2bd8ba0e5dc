use crate::block_header::BlockHeader;
use crate::merkle_root::merkle_root;
use crate::transaction::Transaction;
use bitcrypto::SHA256D;
use primitives::bytes::Bytes;
use ser::{Deserializable, Error as ReaderError, Reader, Serializable, Stream};
use std::io;

/// A block. `block_sig` is carried outside the header, matching the
/// original's `CBlock::vchBlockSig` -- empty for PoW blocks and genesis,
/// non-empty for PoS blocks.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Block {
	pub block_header: BlockHeader,
	pub transactions: Vec<Transaction>,
	pub block_sig: Bytes,
}

impl Block {
	pub fn new(block_header: BlockHeader, transactions: Vec<Transaction>) -> Self {
		Block {
			block_header,
			transactions,
			block_sig: Bytes::new(),
		}
	}

	pub fn hash(&self) -> SHA256D {
		self.block_header.hash()
	}

	pub fn merkle_root(&self) -> SHA256D {
		merkle_root(&self.transactions.iter().map(Transaction::hash).collect::<Vec<_>>())
	}

	/// A PoS block's second transaction is the coinstake; `None` for PoW blocks.
	pub fn is_proof_of_stake(&self) -> bool {
		self.transactions.len() > 1 && self.transactions[1].is_coinstake()
	}
}

impl Serializable for Block {
	fn serialize(&self, stream: &mut Stream) {
		stream.append(&self.block_header).append_list(&self.transactions).append(&self.block_sig);
	}

	fn serialized_size(&self) -> usize {
		let transactions_size: usize = self.transactions.iter().map(Serializable::serialized_size).sum();
		self.block_header.serialized_size() + transactions_size + self.block_sig.serialized_size()
	}
}

impl Deserializable for Block {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, ReaderError>
	where
		T: io::Read,
	{
		Ok(Block {
			block_header: reader.read()?,
			transactions: reader.read_list()?,
			block_sig: reader.read()?,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::Block;
	use crate::block_header::BlockHeader;
	use ser::{deserialize, serialize};

	#[test]
	fn test_block_round_trip_empty() {
		let block = Block::new(BlockHeader::default(), vec![]);
		let serialized = serialize(&block);
		let deserialized: Block = deserialize(serialized.as_ref()).unwrap();
		assert_eq!(block, deserialized);
	}
}
