#[macro_use]
extern crate log;

extern crate bitcrypto;
extern crate chain;
extern crate keys;
extern crate network;
extern crate primitives;
extern crate script;
extern crate serialization as ser;

pub mod block_index;
pub mod config;
pub mod difficulty;
mod error;
pub mod stake;

pub use block_index::BlockIndexView;
pub use config::{Config, NullConfig};
pub use difficulty::next_target;
pub use error::Error;

pub use stake::coin_age::{get_coin_age, BlockFileStore, Coin, CoinView, DiskTxPos, TxIndex};
pub use stake::kernel::get_pos_kernel_ps;
pub use stake::reward::get_proof_of_stake_reward;
pub use stake::signing::{check_block_signature, sign_block, KeyStore};
pub use stake::timestamp::check_coin_stake_timestamp;
pub use stake::weight::{get_current_inflation_rate, get_current_interest_rate, get_stake_time_factored_weight, StakeWeightCache};
