//! Per-block difficulty retargeting: an exponential moving average toward
//! `stake_target_spacing`, with an asymmetric clamp that tightens at the
//! `next_target_v2` height bump. Consensus-critical -- see module docs in
//! DESIGN.md for why the V1/V2 clamp split must not be "simplified".

use crate::block_index::BlockIndexView;
use network::ConsensusParams;
use primitives::bignum::BigNum;
use primitives::compact::Compact;

/// Walks backward from `start` (inclusive) to the nearest ancestor whose
/// `is_pos()` equals `want_pos`, mirroring the original's `GetLastBlockIndex`.
/// Stops at the first match, or at the oldest reachable ancestor if none
/// matches -- callers detect "ran out of chain" via `.prev().is_none()`.
fn last_same_type<T: BlockIndexView>(start: T, want_pos: bool) -> T {
	let mut cursor = start;
	while cursor.is_pos() != want_pos {
		match cursor.prev() {
			Some(prev) => cursor = prev,
			None => break,
		}
	}
	cursor
}

/// Returns the compact target the next block (on top of `prev_index`) must
/// meet. `prev_index` is `None` only for the very first block of a chain.
pub fn next_target<T: BlockIndexView>(prev_index: Option<T>, params: &ConsensusParams) -> Compact {
	let prev = match prev_index {
		None => return Compact::from_u256(params.pow_limit),
		Some(prev) => prev,
	};
	let limit = if prev.is_pow() { params.pow_limit } else { params.pos_limit };

	let p = last_same_type(prev, prev.is_pos());
	let p_prev = match p.prev() {
		None => return Compact::from_u256(limit),
		Some(p_prev) => p_prev,
	};

	let pp = last_same_type(p_prev, prev.is_pos());
	if pp.prev().is_none() {
		return Compact::from_u256(limit);
	}

	let mut actual_spacing = i64::from(p.time()) - i64::from(pp.time());
	if prev.height() >= params.next_target_v2 && actual_spacing < 0 {
		actual_spacing = i64::from(params.stake_target_spacing);
	}

	let interval = i64::from(params.target_timespan) / i64::from(params.stake_target_spacing);
	let spacing = i64::from(params.stake_target_spacing);

	let mut new_target = BigNum::from_compact(p.bits());
	new_target = new_target.mul_i64((interval - 1) * spacing + 2 * actual_spacing);
	new_target = new_target.div_i64((interval + 1) * spacing);

	if prev.height() < params.next_target_v2 {
		if new_target.gt_u256(limit) {
			new_target = BigNum::from_u256(limit);
		}
	} else if new_target.is_negative_or_zero() || new_target.gt_u256(limit) {
		new_target = BigNum::from_u256(limit);
	}

	new_target.to_compact()
}
