//! `CheckCoinStakeTimestamp`: the coinstake transaction's time must equal
//! the block's own time, unlike PoW blocks where miners have a tolerance
//! window against the network-adjusted time.

/// True iff `tx_time` (the coinstake transaction's own `nTime`) equals
/// `block_time` (the block header's `nTime`).
pub fn check_coin_stake_timestamp(block_time: u32, tx_time: u32) -> bool {
	block_time == tx_time
}
