//! Network stake-kernel throughput estimate (`GetPoSKernelPS`), the input
//! to the average stake weight used throughout the PoST reward formulas.

use crate::block_index::BlockIndexView;
use network::ConsensusParams;

const POS_INTERVAL: u32 = 72;

/// Bitcoin's `GetDifficulty`: the block's nBits expressed as a ratio
/// against the *fixed* difficulty-1 target (mantissa `0x0000ffff` at
/// exponent 29, i.e. `0x1d00ffff`) -- a constant independent of the
/// network's own `pos_limit`. The corpus's own `Store::difficulty`
/// (`db/src/block_chain_db.rs`, `bits.to_f64()`) normalizes against this
/// same fixed base rather than a per-network limit.
fn difficulty<T: BlockIndexView>(index: T) -> f64 {
	let raw: u32 = index.bits().into();
	let mut shift = (raw >> 24) as i32;
	let mut diff = f64::from(0x0000_ffffu32) / f64::from(raw & 0x00ff_ffff);
	while shift < 29 {
		diff *= 256.0;
		shift += 1;
	}
	while shift > 29 {
		diff /= 256.0;
		shift -= 1;
	}
	diff
}

/// Estimates network stake-kernels-tried-per-second by walking back from
/// `prev` over up to 72 proof-of-stake blocks.
///
/// The original's loop condition checks a chain-tip cursor that is never
/// advanced inside the loop body (the body walks a second, separate cursor
/// instead) -- an apparent copy-paste slip in the source. Since that outer
/// cursor is otherwise unused, its only effect is "keep going until the
/// walking cursor runs out of ancestors", which is exactly what a single
/// cursor bounded by `prev()` returning `None` already does. This
/// reproduces that observable behavior with one cursor rather than
/// reproducing the dead second one.
pub fn get_pos_kernel_ps<T: BlockIndexView>(prev: T, _params: &ConsensusParams) -> f64 {
	let mut kernels_tried_avg = 0f64;
	let mut stakes_time: i64 = 0;
	let mut stakes_handled = 0u32;

	let mut cursor = Some(prev);
	let mut prev_stake: Option<T> = None;

	while let Some(index) = cursor {
		if stakes_handled >= POS_INTERVAL {
			break;
		}
		if index.is_pos() {
			kernels_tried_avg += difficulty(index) * 4294967296.0;
			stakes_time += match prev_stake {
				Some(stake) => i64::from(stake.time()) - i64::from(index.time()),
				None => 0,
			};
			prev_stake = Some(index);
			stakes_handled += 1;
		}
		cursor = index.prev();
	}

	if stakes_time != 0 {
		kernels_tried_avg / stakes_time as f64
	} else {
		0.0
	}
}
