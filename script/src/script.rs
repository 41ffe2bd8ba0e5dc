use primitives::bytes::Bytes;
use std::{fmt, ops};

/// A chunk of script bytes. No interpreter is provided; callers either build
/// one with `Builder` or classify one with `Solver`.
#[derive(Default, PartialEq, Clone)]
pub struct Script {
	data: Bytes,
}

impl Script {
	pub fn new(data: Bytes) -> Self {
		Script { data }
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn to_bytes(&self) -> Bytes {
		self.data.clone()
	}
}

impl From<Vec<u8>> for Script {
	fn from(v: Vec<u8>) -> Self {
		Script::new(v.into())
	}
}

impl From<Bytes> for Script {
	fn from(b: Bytes) -> Self {
		Script::new(b)
	}
}

impl ops::Deref for Script {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		&self.data
	}
}

impl fmt::Debug for Script {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{:?}", self.data)
	}
}
