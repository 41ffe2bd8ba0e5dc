//! Coinstake subsidy: the PoST interest-rate regime and its pre-PoST
//! coin-age-based predecessor.

use crate::block_index::BlockIndexView;
use crate::config::Config;
use crate::stake::kernel::get_pos_kernel_ps;
use crate::stake::weight::{get_current_interest_rate, StakeWeightCache};
use network::ConsensusParams;

/// One hundredth of a `COIN` (100,000,000 units), matching the original's `amount.h`.
const CENT: i64 = 1_000_000;

/// `stake_min_age × rate × 33 / (365 × 33 + 8)` -- the annualized-rate
/// factor shared by both regimes, preserved exactly (including integer
/// truncation order).
fn annualize(base: i64, rate: i64) -> i64 {
	base * rate * 33 / (365 * 33 + 8)
}

/// Miner's coinstake reward for spending `coin_age` coin-days, plus `fees`.
pub fn get_proof_of_stake_reward<T: BlockIndexView>(
	cache: &StakeWeightCache,
	coin_age: i64,
	fees: i64,
	index: T,
	params: &ConsensusParams,
	config: &impl Config,
) -> i64 {
	let subsidy = if index.height() + 1 > params.post_height {
		let interest_rate = (get_current_interest_rate(cache, index, params) * CENT as f64) as i64;
		annualize(i64::from(params.stake_min_age), interest_rate)
	} else {
		let network_weight = get_pos_kernel_ps(index, params);
		if network_weight < 21.0 {
			0
		} else {
			let interest_rate = (17.0 * (network_weight / 20.0).ln() * 10000.0) as i64;
			annualize(coin_age, interest_rate)
		}
	};

	if config.bool_flag("printcreation") {
		debug!(target: "consensus", "create={} coinAge={}", subsidy, coin_age);
	}

	subsidy + fees
}
