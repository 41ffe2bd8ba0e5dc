use primitives::bytes::Bytes;
use std::ops;

/// DER-encoded ECDSA signature.
#[derive(PartialEq, Clone, Default)]
pub struct Signature(Bytes);

impl From<Bytes> for Signature {
	fn from(b: Bytes) -> Self {
		Signature(b)
	}
}

impl From<Vec<u8>> for Signature {
	fn from(v: Vec<u8>) -> Self {
		Signature(v.into())
	}
}

impl ops::Deref for Signature {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl std::fmt::Debug for Signature {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}
