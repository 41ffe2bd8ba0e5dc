extern crate byteorder;
extern crate heapsize;
extern crate rustc_hex as hex;
extern crate uint;

pub mod bigint;
pub mod bignum;
pub mod bytes;
pub mod checksum;
pub mod compact;
pub mod hash;
pub mod time;

pub use bigint::U256;
pub use bignum::BigNum;
pub use compact::Compact;
