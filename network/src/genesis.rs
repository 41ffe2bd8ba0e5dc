use crate::NetworkId;
use chain::{Block, BlockHeader, OutPoint, Transaction, TransactionInput, TransactionOutput};
use primitives::compact::Compact;
use script::{Builder, Opcode, ScriptNum};

/// The hybrid-net genesis timestamp payload, lifted verbatim from the
/// original's `CreateGenesisBlock` (the "Vericoin" branch).
const HYBRID_TIMESTAMP: &str = "9 May 2014 US politicians can accept bitcoin donations";
/// The PoW-net genesis timestamp payload ("Verium" branch).
const POW_TIMESTAMP: &str = "VeriCoin block 1340292";

/// `CScriptNum` pushed right after the leading `OP_0` in both genesis coinbases.
const HYBRID_SCRIPTNUM: i64 = 42;
const POW_SCRIPTNUM: i64 = 999;

/// Builds the single-transaction genesis block for `network`, deterministically
/// from its inputs. Mirrors the original's two-argument `CreateGenesisBlock`
/// overload, which just looks up the timestamp string and scriptnum for the
/// network and delegates to the five-argument one.
pub fn create_genesis_block(network: NetworkId, time: u32, nonce: u32, bits: Compact, version: u32, genesis_reward: u64) -> Block {
	let (timestamp, scriptnum) = match network {
		NetworkId::HybridNet => (HYBRID_TIMESTAMP, HYBRID_SCRIPTNUM),
		NetworkId::PowNet | NetworkId::Test | NetworkId::Regtest => (POW_TIMESTAMP, POW_SCRIPTNUM),
	};

	let script_sig = Builder::new()
		.push_opcode(Opcode::OP0)
		.push_num(ScriptNum::new(scriptnum))
		.push_data(timestamp.as_bytes())
		.into_script();

	let coinbase = Transaction {
		version: 1,
		time,
		inputs: vec![TransactionInput {
			previous_output: OutPoint::default(),
			script_sig: script_sig.to_bytes(),
			sequence: u32::max_value(),
		}],
		outputs: vec![TransactionOutput {
			value: genesis_reward,
			script_pubkey: Default::default(),
		}],
		lock_time: 0,
	};

	let merkle_root_hash = chain::merkle_root(&[coinbase.hash()]);

	let block_header = BlockHeader {
		version,
		previous_header_hash: Default::default(),
		merkle_root_hash,
		time,
		bits,
		nonce,
	};

	Block::new(block_header, vec![coinbase])
}

#[cfg(test)]
mod tests {
	use super::create_genesis_block;
	use crate::NetworkId;
	use bitcrypto::{FromStr, SHA256D};
	use primitives::compact::Compact;
	use primitives::U256;

	const COIN: u64 = 100_000_000;

	#[test]
	fn test_pow_net_genesis_hash() {
		let limit = (!U256::zero()) >> 11;
		let bits = Compact::from_u256(limit);
		let block = create_genesis_block(NetworkId::PowNet, 1472669240, 233180, bits, 1, 2500 * COIN);

		let expected_hash = SHA256D::from_str("8232c0cf3bd7e05546e3d7aaaaf89fed8bc97c4df1a8c95e9249e13a2734932b").unwrap();
		let expected_merkle = SHA256D::from_str("925e430072a1f39b530fc79db162e29433ab0ea266a99c8cab4f03001dc9faa9").unwrap();

		assert_eq!(block.hash(), expected_hash);
		assert_eq!(block.merkle_root(), expected_merkle);
		assert_eq!(block.block_header.merkle_root_hash, expected_merkle);
	}

	#[test]
	fn test_hybrid_net_genesis_hash() {
		let limit = (!U256::zero()) >> 20;
		let bits = Compact::from_u256(limit);
		let block = create_genesis_block(NetworkId::HybridNet, 1399690945, 612416, bits, 1, 2500 * COIN);

		let expected_hash = SHA256D::from_str("000004da58a02be894a6c916d349fe23cc29e21972cafb86b5d3f07c4b8e6bb8").unwrap();
		let expected_merkle = SHA256D::from_str("60424046d38de827de0ed1a20a351aa7f3557e3e1d3df6bfb34a94bc6161ec68").unwrap();

		assert_eq!(block.hash(), expected_hash);
		assert_eq!(block.merkle_root(), expected_merkle);
	}

	#[test]
	fn test_genesis_coinbase_time_matches_block_time() {
		let limit = (!U256::zero()) >> 20;
		let bits = Compact::from_u256(limit);
		let block = create_genesis_block(NetworkId::HybridNet, 1399690945, 612416, bits, 1, 2500 * COIN);
		assert_eq!(block.transactions[0].time, block.block_header.time);
	}

	#[test]
	fn test_genesis_block_sig_is_empty() {
		let limit = (!U256::zero()) >> 20;
		let bits = Compact::from_u256(limit);
		let block = create_genesis_block(NetworkId::HybridNet, 1399690945, 612416, bits, 1, 2500 * COIN);
		assert!(block.block_sig.is_empty());
	}
}
