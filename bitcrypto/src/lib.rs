#[macro_use]
extern crate bitcoin_hashes;
#[macro_use]
extern crate heapsize;

pub use bitcoin_hashes::core::str::FromStr;
use bitcoin_hashes::hash160;
pub use bitcoin_hashes::hex::Error as HexError;
pub use bitcoin_hashes::hex::FromHex;
pub use bitcoin_hashes::Hash;
pub use bitcoin_hashes::HashEngine;
use bitcoin_hashes::{ripemd160, sha256, sha256d};

hash_newtype!(
	RIPEMD160,
	ripemd160::Hash,
	20,
	doc = "RIPEMD160 newtype wrapper of bitcoin_hashes::ripemd160::Hash"
);

#[inline]
pub fn ripemd160(input: &[u8]) -> RIPEMD160 {
	RIPEMD160(ripemd160::Hash::hash(input))
}

hash_newtype!(
	SHA256,
	sha256::Hash,
	32,
	doc = "SHA256 newtype wrapper of bitcoin_hashes::sha256::Hash"
);

#[inline]
pub fn sha256(input: &[u8]) -> SHA256 {
	SHA256(sha256::Hash::hash(input))
}

hash_newtype!(
	HASH160,
	hash160::Hash,
	20,
	doc = "HASH160 newtype wrapper of bitcoin_hashes::hash160::Hash"
);

#[inline]
pub fn dhash160(input: &[u8]) -> HASH160 {
	HASH160(hash160::Hash::hash(input))
}

hash_newtype!(
	SHA256D,
	sha256d::Hash,
	32,
	doc = "SHA256D newtype wrapper of bitcoin_hashes::sha256d::Hash"
);

#[inline]
pub fn dhash256(input: &[u8]) -> SHA256D {
	SHA256D(sha256d::Hash::hash(input))
}

/// A lot of genesis/checkpoint hashes are written as already-reversed hex strings.
/// SHA256D's `FromStr`/`FromHex` reverses the byte order and we don't want to do
/// that twice when the string is already in internal (non-reversed) order.
pub trait FromInnerHex {
	fn from_inner_hex(hex: &str) -> Result<SHA256D, HexError>;
}

impl FromInnerHex for SHA256D {
	fn from_inner_hex(hex: &str) -> Result<SHA256D, HexError> {
		Ok(SHA256D::from_inner(FromHex::from_hex(hex)?))
	}
}

known_heap_size!(0, SHA256D);
