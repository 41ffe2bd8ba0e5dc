extern crate bitcrypto;
extern crate heapsize;
extern crate primitives;
extern crate rustc_hex as hex;
extern crate serialization as ser;

mod block;
mod block_header;
mod indexed_header;
mod indexed_transaction;
mod merkle_root;
mod read_and_hash;
mod transaction;

pub use primitives::{bigint, bytes, compact, hash};

pub use block::Block;
pub use block_header::{block_header_hash, BlockHeader};
pub use merkle_root::{merkle_node_hash, merkle_root};
pub use transaction::{OutPoint, Transaction, TransactionInput, TransactionOutput};

pub use indexed_header::IndexedBlockHeader;
pub use indexed_transaction::IndexedTransaction;
pub use read_and_hash::{HashedData, ReadAndHash};
