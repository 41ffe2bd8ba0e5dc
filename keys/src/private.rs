use crate::public::{Message, Public};
use crate::signature::Signature;
use crate::Error;
use secp256k1::{Message as SecpMessage, PublicKey as SecpPublicKey, Secp256k1, SecretKey};

/// Secp256k1 private key, used by the `KeyStore` collaborator to sign
/// coinstake/coinbase blocks (`SignBlock`).
#[derive(Clone)]
pub struct Private {
	secret: SecretKey,
	compressed: bool,
}

impl Private {
	pub fn from_secret_slice(data: &[u8], compressed: bool) -> Result<Self, Error> {
		let secret = SecretKey::from_slice(data)?;
		Ok(Private { secret, compressed })
	}

	pub fn public_key(&self) -> Public {
		let secp = Secp256k1::signing_only();
		let public = SecpPublicKey::from_secret_key(&secp, &self.secret);
		let serialized = if self.compressed {
			public.serialize().to_vec()
		} else {
			public.serialize_uncompressed().to_vec()
		};
		Public::from_slice(&serialized).expect("secp256k1 serialization is always a valid length")
	}

	/// Signs `message` (typically a block hash) and returns a DER-encoded signature.
	pub fn sign(&self, message: &Message) -> Result<Signature, Error> {
		let secp = Secp256k1::signing_only();
		let secp_message = SecpMessage::from_slice(&message[..]).map_err(Error::from)?;
		let signature = secp.sign(&secp_message, &self.secret);
		Ok(signature.serialize_der().to_vec().into())
	}
}
