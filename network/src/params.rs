use crate::consensus::ConsensusParams;
use crate::genesis::create_genesis_block;
use crate::{Error, NetworkId};
use bitcrypto::{FromStr, SHA256D};
use chain::Block;
use primitives::compact::Compact;
use primitives::U256;
use std::collections::BTreeMap;

const COIN: u64 = 100_000_000;

/// A 16-byte IPv6 address plus a 2-byte big-endian port, matching Bitcoin
/// Core's compiled-in `SeedSpec6`. Kept as a type so a future release can
/// populate it; this core does not ship fixed-seed IP data (see DESIGN.md).
pub type SeedSpec6 = [u8; 18];

/// Base58/bech32 address-version byte sequences for one network.
#[derive(Debug, Clone)]
pub struct AddressPrefixes {
	pub pubkey: Vec<u8>,
	pub script: Vec<u8>,
	pub secret: Vec<u8>,
	pub ext_pub: Vec<u8>,
	pub ext_secret: Vec<u8>,
}

/// Last-known-tx-count triple used to estimate chain sync progress, matching
/// the original's `ChainTxData`.
#[derive(Debug, Clone, Copy)]
pub struct ChainTxData {
	/// UNIX timestamp of the last known block counted below.
	pub time: u32,
	/// Cumulative number of transactions between genesis and `time`.
	pub tx_count: u64,
	/// Estimated transactions per second after `time`.
	pub tx_rate: f64,
}

/// Rough on-disk size estimates (in GiB) a UI can show before a sync starts.
#[derive(Debug, Clone, Copy)]
pub struct AssumedSize {
	pub blockchain_size: u32,
	pub chain_state_size: u32,
}

/// Immutable per-network record of every consensus-relevant and
/// compatibility-relevant constant. Constructed once via `select` and
/// shared-read for the life of the process.
#[derive(Debug, Clone)]
pub struct ChainParams {
	pub network: NetworkId,
	pub message_start: [u8; 4],
	pub default_port: u16,
	pub address_prefixes: AddressPrefixes,
	pub bech32_hrp: &'static str,
	pub consensus: ConsensusParams,
	pub genesis: Block,
	pub checkpoints: BTreeMap<u32, SHA256D>,
	pub chain_tx_data: ChainTxData,
	pub dns_seeds: Vec<&'static str>,
	pub fixed_seeds: Vec<SeedSpec6>,
	pub assumed_size: AssumedSize,
	pub mining_requires_peers: bool,
	pub default_consistency_checks: bool,
	pub require_standard: bool,
	pub is_test: bool,
	pub is_mockable: bool,
}

impl ChainParams {
	/// Builds the full parameter record for `network`, asserting the
	/// constructed genesis block against its pinned hash.
	///
	/// `Test`/`Regtest` are rejected with `UnknownNetwork` -- this core does
	/// not carry their constants (see the Non-goal against supporting
	/// arbitrary new networks).
	pub fn build(network: NetworkId) -> Result<Self, Error> {
		match network {
			NetworkId::PowNet => Ok(pow_net()),
			NetworkId::HybridNet => Ok(hybrid_net()),
			NetworkId::Test | NetworkId::Regtest => Err(Error::UnknownNetwork(network)),
		}?
		.assert_genesis()
	}

	fn assert_genesis(self) -> Result<Self, Error> {
		let actual = self.genesis.hash();
		if actual != self.consensus.hash_genesis_block {
			return Err(Error::GenesisMismatch {
				expected: format!("{:?}", self.consensus.hash_genesis_block),
				actual: format!("{:?}", actual),
			});
		}
		Ok(self)
	}
}

/// Shared between both networks in the original's `CMainParams` constructor:
/// `pchMessageStart`, base58 prefixes, and the bech32 HRP are each set once,
/// outside the `IsVericoin()`/`IsVerium()` branches.
fn shared_address_prefixes() -> AddressPrefixes {
	AddressPrefixes {
		pubkey: vec![70],
		script: vec![132],
		secret: vec![198],
		ext_pub: vec![0xE3, 0xCC, 0xBB, 0x92],
		ext_secret: vec![0xE3, 0xCC, 0xAE, 0x01],
	}
}

const MESSAGE_START: [u8; 4] = [0x70, 0x35, 0x22, 0x05];

fn pow_net() -> ChainParams {
	let pow_limit = (!U256::zero()) >> 11;
	let genesis = create_genesis_block(NetworkId::PowNet, 1472669240, 233180, Compact::from_u256(pow_limit), 1, 2500 * COIN);

	let mut checkpoints = BTreeMap::new();
	checkpoints.insert(1, SHA256D::from_str("3f2566fc0abcc9b2e26c737d905ff3e639a49d44cd5d11d260df3cfb62663012").unwrap());
	checkpoints.insert(1500, SHA256D::from_str("0458cc7c7093cea6e78eed03a8f57d0eed200aaf5171eea82e63b8e643891cce").unwrap());
	checkpoints.insert(100000, SHA256D::from_str("0510c6cb8c5a2a5437fb893853f10e298654361a05cf611b1c54c1750dfbdad6").unwrap());

	ChainParams {
		network: NetworkId::PowNet,
		message_start: MESSAGE_START,
		default_port: 36988,
		address_prefixes: shared_address_prefixes(),
		bech32_hrp: "vry",
		consensus: ConsensusParams {
			hash_genesis_block: SHA256D::from_str("8232c0cf3bd7e05546e3d7aaaaf89fed8bc97c4df1a8c95e9249e13a2734932b").unwrap(),
			bip34_height: 0,
			bip65_height: 550000,
			bip66_height: 550000,
			csv_height: 550000,
			// PoST/PoS are Vericoin-only features; Verium never enables them.
			next_target_v2: 0,
			post_height: 0,
			pos_height: 0,
			vip1_height: 520000,
			target_timespan: 0,
			pow_target_timespan: 2 * 24 * 60 * 60,
			pow_target_spacing: 5 * 60,
			stake_target_spacing: 0,
			stake_min_age: 0,
			modifier_interval: 0,
			pow_limit,
			pos_limit: (!U256::zero()) >> 20,
			pow_no_retargeting: false,
			coinbase_maturity: 100,
			initial_coin_supply: 0,
			min_chain_work: U256::zero(),
			default_assume_valid: SHA256D::default(),
		},
		genesis,
		checkpoints,
		chain_tx_data: ChainTxData {
			time: 1499513240,
			tx_count: 36540,
			tx_rate: 0.0013,
		},
		dns_seeds: vec!["seed.vrm.vericonomy.com"],
		fixed_seeds: Vec::new(),
		assumed_size: AssumedSize {
			blockchain_size: 1,
			chain_state_size: 4,
		},
		mining_requires_peers: true,
		default_consistency_checks: false,
		require_standard: true,
		is_test: false,
		is_mockable: false,
	}
}

fn hybrid_net() -> ChainParams {
	let pow_limit = (!U256::zero()) >> 20;
	let genesis = create_genesis_block(NetworkId::HybridNet, 1399690945, 612416, Compact::from_u256(pow_limit), 1, 2500 * COIN);

	ChainParams {
		network: NetworkId::HybridNet,
		message_start: MESSAGE_START,
		default_port: 58684,
		address_prefixes: shared_address_prefixes(),
		bech32_hrp: "vry",
		consensus: ConsensusParams {
			hash_genesis_block: SHA256D::from_str("000004da58a02be894a6c916d349fe23cc29e21972cafb86b5d3f07c4b8e6bb8").unwrap(),
			bip34_height: 227931,
			bip65_height: 4000000,
			bip66_height: 4000000,
			csv_height: 4000000,
			next_target_v2: 38424,
			post_height: 608100,
			pos_height: 20160,
			// VIP1 is a Verium-only fee change; Vericoin never enables it.
			vip1_height: 0,
			target_timespan: 960,
			pow_target_timespan: 14 * 24 * 60 * 60,
			pow_target_spacing: 60,
			stake_target_spacing: 60,
			stake_min_age: 8 * 60 * 60,
			modifier_interval: 10 * 60,
			pow_limit,
			pos_limit,
			pow_no_retargeting: false,
			coinbase_maturity: 500,
			initial_coin_supply: 26_751_452,
			min_chain_work: U256::zero(),
			default_assume_valid: SHA256D::default(),
		},
		genesis,
		checkpoints: BTreeMap::new(),
		chain_tx_data: ChainTxData {
			time: 1591618067,
			tx_count: 1797921,
			tx_rate: 0.00730216,
		},
		dns_seeds: vec!["seed.vrc.vericonomy.com"],
		fixed_seeds: Vec::new(),
		assumed_size: AssumedSize {
			blockchain_size: 3,
			chain_state_size: 10,
		},
		mining_requires_peers: true,
		default_consistency_checks: false,
		require_standard: true,
		is_test: false,
		is_mockable: false,
	}
}

#[cfg(test)]
mod tests {
	use super::{hybrid_net, pow_net};

	#[test]
	fn test_pow_net_genesis_matches_pinned_hash() {
		let params = pow_net();
		assert_eq!(params.genesis.hash(), params.consensus.hash_genesis_block);
	}

	#[test]
	fn test_hybrid_net_genesis_matches_pinned_hash() {
		let params = hybrid_net();
		assert_eq!(params.genesis.hash(), params.consensus.hash_genesis_block);
	}

	#[test]
	fn test_address_prefixes_shared_between_networks() {
		let pow = pow_net();
		let hybrid = hybrid_net();
		assert_eq!(pow.address_prefixes.pubkey, hybrid.address_prefixes.pubkey);
		assert_eq!(pow.message_start, hybrid.message_start);
		assert_eq!(pow.bech32_hrp, hybrid.bech32_hrp);
	}

	#[test]
	fn test_pow_net_checkpoints() {
		let params = pow_net();
		assert_eq!(params.checkpoints.len(), 3);
		assert!(params.checkpoints.contains_key(&100000));
	}
}
