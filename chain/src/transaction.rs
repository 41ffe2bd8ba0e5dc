use bitcrypto::{dhash256, SHA256D};
use primitives::bytes::Bytes;
use ser::{serialize, Deserializable, Error as ReaderError, Reader, Serializable, Stream};
use std::io;

/// Reference to a previous transaction's output.
#[derive(Debug, PartialEq, Eq, Clone, Default, Hash)]
pub struct OutPoint {
	pub hash: SHA256D,
	pub index: u32,
}

impl Serializable for OutPoint {
	fn serialize(&self, stream: &mut Stream) {
		stream.append(&self.hash).append(&self.index);
	}

	fn serialized_size(&self) -> usize {
		32 + 4
	}
}

impl Deserializable for OutPoint {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, ReaderError>
	where
		T: io::Read,
	{
		Ok(OutPoint {
			hash: reader.read()?,
			index: reader.read()?,
		})
	}
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct TransactionInput {
	pub previous_output: OutPoint,
	pub script_sig: Bytes,
	pub sequence: u32,
}

impl TransactionInput {
	/// The coinbase/coinstake "null" input: an all-zero outpoint at index `u32::MAX`.
	pub fn is_coinbase(&self) -> bool {
		self.previous_output.hash == SHA256D::default() && self.previous_output.index == u32::max_value()
	}
}

impl Serializable for TransactionInput {
	fn serialize(&self, stream: &mut Stream) {
		stream.append(&self.previous_output).append(&self.script_sig).append(&self.sequence);
	}

	fn serialized_size(&self) -> usize {
		self.previous_output.serialized_size() + self.script_sig.serialized_size() + 4
	}
}

impl Deserializable for TransactionInput {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, ReaderError>
	where
		T: io::Read,
	{
		Ok(TransactionInput {
			previous_output: reader.read()?,
			script_sig: reader.read()?,
			sequence: reader.read()?,
		})
	}
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct TransactionOutput {
	pub value: u64,
	pub script_pubkey: Bytes,
}

impl Serializable for TransactionOutput {
	fn serialize(&self, stream: &mut Stream) {
		stream.append(&self.value).append(&self.script_pubkey);
	}

	fn serialized_size(&self) -> usize {
		8 + self.script_pubkey.serialized_size()
	}
}

impl Deserializable for TransactionOutput {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, ReaderError>
	where
		T: io::Read,
	{
		Ok(TransactionOutput {
			value: reader.read()?,
			script_pubkey: reader.read()?,
		})
	}
}

/// A transaction. Carries an extra `time` field right after `version` --
/// the PPCoin/NovaCoin wire-format difference from plain Bitcoin transactions
/// that `GetCoinAge` and the coinstake timestamp rule depend on.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Transaction {
	pub version: u32,
	pub time: u32,
	pub inputs: Vec<TransactionInput>,
	pub outputs: Vec<TransactionOutput>,
	pub lock_time: u32,
}

impl Transaction {
	pub fn hash(&self) -> SHA256D {
		dhash256(&serialize(self))
	}

	pub fn is_coinbase(&self) -> bool {
		self.inputs.len() == 1 && self.inputs[0].is_coinbase()
	}

	/// A coinstake transaction has at least two inputs/outputs and an empty
	/// first output (the marker the original's `IsCoinStake` checks).
	pub fn is_coinstake(&self) -> bool {
		!self.inputs.is_empty() && self.outputs.len() >= 2 && self.outputs[0].script_pubkey.is_empty() && self.outputs[0].value == 0
	}
}

impl Serializable for Transaction {
	fn serialize(&self, stream: &mut Stream) {
		stream
			.append(&self.version)
			.append(&self.time)
			.append_list(&self.inputs)
			.append_list(&self.outputs)
			.append(&self.lock_time);
	}

	fn serialized_size(&self) -> usize {
		let inputs_size: usize = self.inputs.iter().map(Serializable::serialized_size).sum();
		let outputs_size: usize = self.outputs.iter().map(Serializable::serialized_size).sum();
		4 + 4 + inputs_size + outputs_size + 4
	}
}

impl Deserializable for Transaction {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, ReaderError>
	where
		T: io::Read,
	{
		Ok(Transaction {
			version: reader.read()?,
			time: reader.read()?,
			inputs: reader.read_list()?,
			outputs: reader.read_list()?,
			lock_time: reader.read()?,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::{OutPoint, Transaction, TransactionInput, TransactionOutput};
	use ser::{deserialize, serialize};

	#[test]
	fn test_transaction_round_trip() {
		let tx = Transaction {
			version: 1,
			time: 1399690945,
			inputs: vec![TransactionInput {
				previous_output: OutPoint::default(),
				script_sig: vec![0x00, 0x01, 0x2a].into(),
				sequence: u32::max_value(),
			}],
			outputs: vec![TransactionOutput {
				value: 250_000_000_000,
				script_pubkey: vec![].into(),
			}],
			lock_time: 0,
		};

		let serialized = serialize(&tx);
		let deserialized: Transaction = deserialize(serialized.as_ref()).unwrap();
		assert_eq!(tx, deserialized);
	}

	#[test]
	fn test_is_coinbase() {
		let coinbase = Transaction {
			version: 1,
			time: 0,
			inputs: vec![TransactionInput {
				previous_output: OutPoint {
					hash: Default::default(),
					index: u32::max_value(),
				},
				script_sig: vec![].into(),
				sequence: 0,
			}],
			outputs: vec![],
			lock_time: 0,
		};

		assert!(coinbase.is_coinbase());
	}
}
