//! Network stake-weight estimates and the PoST inflation/interest curve.

use crate::block_index::BlockIndexView;
use crate::stake::kernel::get_pos_kernel_ps;
use network::ConsensusParams;
use parking_lot::Mutex;
use std::f64::consts::PI;

const STAKE_WEIGHT_WINDOW: u32 = 60;
/// Empirically-chosen floor added to the averaged kernel throughput, to keep
/// the inflation-rate logarithm away from its singularity near zero.
const STAKE_WEIGHT_FLOOR: f64 = 21.0;

/// `(cached_height, cached_weight)` for `GetAverageStakeWeight`. Shared
/// mutable state by design -- the original caches this in two file-scope
/// statics, one per field; a `Mutex` gives the same "one writer at a time"
/// behavior without the ambient-static footgun.
#[derive(Debug, Default)]
pub struct StakeWeightCache(Mutex<Option<(u32, f64)>>);

impl StakeWeightCache {
	pub fn new() -> Self {
		StakeWeightCache(Mutex::new(None))
	}

	/// Average stake-kernels-tried-per-second over the last 60 ancestors of
	/// `prev`, cached by height so repeated calls at the same tip are free.
	pub fn get_average_stake_weight<T: BlockIndexView>(&self, prev: T, params: &ConsensusParams) -> f64 {
		let mut cache = self.0.lock();
		if let Some((height, weight)) = *cache {
			if height == prev.height() {
				return weight;
			}
		}

		let mut sum = 0f64;
		let mut count = 0u32;
		let mut cursor = Some(prev);
		while count < STAKE_WEIGHT_WINDOW {
			let index = match cursor {
				Some(index) => index,
				None => break,
			};
			sum += get_pos_kernel_ps(index, params);
			count += 1;
			cursor = index.prev();
		}

		let weight = (sum / f64::from(count)) + STAKE_WEIGHT_FLOOR;
		*cache = Some((prev.height(), weight));
		trace!(target: "consensus", "average stake weight at height {} = {}", prev.height(), weight);
		weight
	}
}

/// `17 × ln(avg_weight / 20) / 100`. `avg_weight` must be strictly positive
/// (guaranteed by the `+21` floor in `get_average_stake_weight`).
pub fn get_current_inflation_rate(avg_weight: f64) -> f64 {
	(17.0 * (avg_weight / 20.0).ln()) / 100.0
}

/// `(inflation(W) / 100) × initial_coin_supply / W × 100`, where
/// `W = get_average_stake_weight(prev)`.
pub fn get_current_interest_rate<T: BlockIndexView>(cache: &StakeWeightCache, prev: T, params: &ConsensusParams) -> f64 {
	let avg_weight = cache.get_average_stake_weight(prev, params);
	let inflation_rate = get_current_inflation_rate(avg_weight) / 100.0;
	(inflation_rate * params.initial_coin_supply as f64 / avg_weight) * 100.0
}

/// Caps a stake input's time-weight contribution so no single staker can
/// dominate the PoST reward curve: `cos²(π × weight_fraction) × time_weight`,
/// clamped to `stake_min_age + 1` once the fraction crosses 45%.
pub fn get_stake_time_factored_weight<T: BlockIndexView>(
	cache: &StakeWeightCache,
	time_weight: i64,
	coin_day_weight: i64,
	prev: T,
	params: &ConsensusParams,
) -> i64 {
	let avg_weight = cache.get_average_stake_weight(prev, params);
	let weight_fraction = (coin_day_weight as f64 + 1.0) / avg_weight;
	if weight_fraction * 100.0 > 45.0 {
		i64::from(params.stake_min_age) + 1
	} else {
		let stake_time_factor = (PI * weight_fraction).cos().powf(2.0);
		(stake_time_factor * time_weight as f64) as i64
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::block_index::test_chain::{TestChain, TestNode};
	use primitives::compact::Compact;
	use primitives::U256;
	use bitcrypto::SHA256D;

	fn params() -> ConsensusParams {
		ConsensusParams {
			hash_genesis_block: SHA256D::default(),
			bip34_height: 0,
			bip65_height: 0,
			bip66_height: 0,
			csv_height: 0,
			next_target_v2: 0,
			post_height: 608100,
			pos_height: 0,
			vip1_height: 0,
			target_timespan: 960,
			pow_target_timespan: 0,
			pow_target_spacing: 0,
			stake_target_spacing: 60,
			stake_min_age: 8 * 60 * 60,
			modifier_interval: 600,
			pow_limit: (!U256::zero()) >> 20,
			pos_limit: (!U256::zero()) >> 20,
			pow_no_retargeting: false,
			coinbase_maturity: 500,
			initial_coin_supply: 26_751_452,
			min_chain_work: U256::zero(),
			default_assume_valid: SHA256D::default(),
		}
	}

	#[test]
	fn test_average_stake_weight_floor_when_no_pos_blocks() {
		let params = params();
		let cache = StakeWeightCache::new();
		let mut chain = TestChain::new();
		chain.push(TestNode {
			height: 0,
			time: 1000,
			bits: Compact::from_u256(params.pos_limit),
			is_pos: false,
		});
		let weight = cache.get_average_stake_weight(chain.tip(), &params);
		assert_eq!(weight, STAKE_WEIGHT_FLOOR);
	}

	#[test]
	fn test_average_stake_weight_is_cached_by_height() {
		let params = params();
		let cache = StakeWeightCache::new();
		let mut chain = TestChain::new();
		chain.push(TestNode {
			height: 5,
			time: 1000,
			bits: Compact::from_u256(params.pos_limit),
			is_pos: false,
		});
		let first = cache.get_average_stake_weight(chain.tip(), &params);
		// same height again: must hit the cache and return identically.
		let second = cache.get_average_stake_weight(chain.tip(), &params);
		assert_eq!(first, second);
	}

	#[test]
	fn test_inflation_rate_at_floor_weight() {
		// avg_weight = 20 -> ln(1) = 0 -> rate = 0
		assert_eq!(get_current_inflation_rate(20.0), 0.0);
	}

	#[test]
	fn test_inflation_rate_increases_with_weight() {
		let low = get_current_inflation_rate(25.0);
		let high = get_current_inflation_rate(100.0);
		assert!(high > low);
	}

	#[test]
	fn test_factored_weight_clamps_above_45_percent() {
		let params = params();
		let cache = StakeWeightCache::new();
		let mut chain = TestChain::new();
		chain.push(TestNode {
			height: 0,
			time: 1000,
			bits: Compact::from_u256(params.pos_limit),
			is_pos: false,
		});
		// avg weight floors to 21; coin_day_weight = 20 -> (20+1)/21 = 1.0 > 0.45
		let result = get_stake_time_factored_weight(&cache, 1000, 20, chain.tip(), &params);
		assert_eq!(result, i64::from(params.stake_min_age) + 1);
	}

	#[test]
	fn test_factored_weight_below_threshold_uses_cosine() {
		let params = params();
		let cache = StakeWeightCache::new();
		let mut chain = TestChain::new();
		chain.push(TestNode {
			height: 0,
			time: 1000,
			bits: Compact::from_u256(params.pos_limit),
			is_pos: false,
		});
		// avg weight floors to 21; coin_day_weight small -> below the 45% cutoff
		let result = get_stake_time_factored_weight(&cache, 1000, 0, chain.tip(), &params);
		assert!(result < i64::from(params.stake_min_age) + 1);
	}
}
