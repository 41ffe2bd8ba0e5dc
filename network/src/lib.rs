#[macro_use]
extern crate log;

extern crate bitcrypto;
extern crate chain;
extern crate primitives;
extern crate script;

mod consensus;
mod error;
mod genesis;
mod network_id;
mod params;
mod registry;

pub use primitives::{compact, hash};

pub use consensus::ConsensusParams;
pub use error::Error;
pub use genesis::create_genesis_block;
pub use network_id::NetworkId;
pub use params::{AddressPrefixes, AssumedSize, ChainParams, ChainTxData, SeedSpec6};
pub use registry::{current, select};
