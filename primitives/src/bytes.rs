use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;
use hex::{FromHex, FromHexError, ToHex};

/// Wrapper around `Vec<u8>` that gives it the cheap `Debug`/hex `Display`
/// and script-like ergonomics the rest of the crates expect.
#[derive(Default, PartialEq, Eq, Clone, Hash, PartialOrd, Ord)]
pub struct Bytes(Vec<u8>);

impl Bytes {
	pub fn new() -> Self {
		Bytes(Vec::new())
	}

	pub fn take(self) -> Vec<u8> {
		self.0
	}

	/// A zero-filled buffer of the given length, for the deserializer to
	/// read a known-length payload directly into.
	pub fn new_with_len(len: usize) -> Self {
		Bytes(vec![0u8; len])
	}
}

impl fmt::Debug for Bytes {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.0.to_hex::<String>())
	}
}

impl fmt::Display for Bytes {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.0.to_hex::<String>())
	}
}

impl FromStr for Bytes {
	type Err = FromHexError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Bytes(s.from_hex()?))
	}
}

impl From<Vec<u8>> for Bytes {
	fn from(v: Vec<u8>) -> Self {
		Bytes(v)
	}
}

impl From<Bytes> for Vec<u8> {
	fn from(b: Bytes) -> Self {
		b.0
	}
}

impl<'a> From<&'a [u8]> for Bytes {
	fn from(v: &'a [u8]) -> Self {
		Bytes(v.to_vec())
	}
}

impl<'a> From<&'a str> for Bytes {
	fn from(s: &'a str) -> Self {
		s.parse().unwrap()
	}
}

impl Deref for Bytes {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Bytes {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl AsRef<[u8]> for Bytes {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl IntoIterator for Bytes {
	type Item = u8;
	type IntoIter = ::std::vec::IntoIter<u8>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl ::std::iter::FromIterator<u8> for Bytes {
	fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
		Bytes(iter.into_iter().collect())
	}
}
