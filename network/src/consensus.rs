use bitcrypto::SHA256D;
use primitives::U256;

/// The consensus-critical subset of a network's parameters -- the part a
/// mis-typed constant permanently forks the network over.
#[derive(Debug, Clone)]
pub struct ConsensusParams {
	pub hash_genesis_block: SHA256D,

	/// Height at which BIP34 (height-in-coinbase) becomes active.
	pub bip34_height: u32,
	/// Height at which BIP65 (CHECKLOCKTIMEVERIFY) becomes active.
	pub bip65_height: u32,
	/// Height at which BIP66 (strict DER signatures) becomes active.
	pub bip66_height: u32,
	/// Height at which CSV (BIP68/112/113) becomes active.
	pub csv_height: u32,

	/// Height at which the retargeter switches from the V1 to the V2 clamping rule.
	pub next_target_v2: u32,
	/// Height at which the PoST reward/weighting regime activates.
	pub post_height: u32,
	/// Height at which proof-of-stake blocks are first accepted.
	pub pos_height: u32,

	/// Height at which the VIP1 minimum-fee change activates.
	pub vip1_height: u32,

	/// Legacy retarget window used by the exponential-moving-average rule (seconds).
	pub target_timespan: u32,
	/// Classic PoW retarget window, carried for completeness (seconds).
	pub pow_target_timespan: u32,
	/// Classic PoW target spacing, carried for completeness (seconds).
	pub pow_target_spacing: u32,
	/// Target spacing between stake blocks (seconds); also the retargeter's unit interval.
	pub stake_target_spacing: u32,
	/// Minimum coin age, in seconds, before a UTXO may be used as a stake input.
	pub stake_min_age: u32,
	/// Interval, in seconds, between stake modifier recalculations.
	pub modifier_interval: u32,

	/// Proof-of-work target ceiling (easiest difficulty).
	pub pow_limit: U256,
	/// Proof-of-stake target ceiling (easiest difficulty).
	pub pos_limit: U256,
	/// Regtest-only escape hatch; unused by this core (see DESIGN.md).
	pub pow_no_retargeting: bool,

	/// Number of blocks after creation before a coinbase output becomes spendable.
	pub coinbase_maturity: u32,
	/// Total coin supply at genesis, in whole coins.
	pub initial_coin_supply: u64,

	pub min_chain_work: U256,
	pub default_assume_valid: SHA256D,
}
