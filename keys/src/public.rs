use crate::signature::Signature;
use crate::Error;
use bitcrypto::{dhash160, HASH160, SHA256D};
use primitives::hash::{H264, H520};
use secp256k1::{Error as SecpError, Message as SecpMessage, PublicKey as SecpPublicKey, Signature as SecpSignature};
use std::{fmt, ops};

/// 32 bytes long signable message -- the block hash for `SignBlock`/`CheckBlockSignature`.
pub type Message = SHA256D;
/// 20 bytes long hash derived from `ripemd160(sha256(public))`.
pub type AddressHash = HASH160;

/// Secp256k1 public key, in either compressed or uncompressed serialization.
#[derive(Clone)]
pub enum Public {
	/// Uncompressed (65-byte) form.
	Normal(H520),
	/// Compressed (33-byte) form.
	Compressed(H264),
}

impl Public {
	pub fn from_slice(data: &[u8]) -> Result<Self, Error> {
		match data.len() {
			33 => {
				let mut public = H264::default();
				public.copy_from_slice(data);
				Ok(Public::Compressed(public))
			}
			65 => {
				let mut public = H520::default();
				public.copy_from_slice(data);
				Ok(Public::Normal(public))
			}
			_ => Err(Error::InvalidPublic),
		}
	}

	pub fn address_hash(&self) -> AddressHash {
		dhash160(self)
	}

	/// Verifies `signature` (DER-encoded) over `message` using this public key.
	pub fn verify(&self, message: &Message, signature: &Signature) -> Result<bool, Error> {
		let public = SecpPublicKey::from_slice(self)?;
		let mut signature = SecpSignature::from_der_lax(signature)?;
		signature.normalize_s();
		let message = SecpMessage::from_slice(&message[..]).map_err(Error::from)?;
		let secp = secp256k1::Secp256k1::verification_only();
		match secp.verify(&message, &signature, &public) {
			Ok(_) => Ok(true),
			Err(SecpError::IncorrectSignature) => Ok(false),
			Err(e) => Err(e.into()),
		}
	}
}

impl ops::Deref for Public {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		match *self {
			Public::Normal(ref hash) => &**hash,
			Public::Compressed(ref hash) => &**hash,
		}
	}
}

impl PartialEq for Public {
	fn eq(&self, other: &Self) -> bool {
		let s_slice: &[u8] = self;
		let o_slice: &[u8] = other;
		s_slice == o_slice
	}
}

impl fmt::Debug for Public {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match *self {
			Public::Normal(ref hash) => write!(f, "normal: {:?}", hash),
			Public::Compressed(ref hash) => write!(f, "compressed: {:?}", hash),
		}
	}
}
