use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
	InvalidPublic,
	InvalidSecret,
	InvalidSignature,
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let s = match *self {
			Error::InvalidPublic => "Invalid Public",
			Error::InvalidSecret => "Invalid Secret",
			Error::InvalidSignature => "Invalid Signature",
		};
		write!(f, "{}", s)
	}
}

impl std::error::Error for Error {}

impl From<secp256k1::Error> for Error {
	fn from(e: secp256k1::Error) -> Self {
		match e {
			secp256k1::Error::InvalidPublicKey => Error::InvalidPublic,
			secp256k1::Error::InvalidSecretKey => Error::InvalidSecret,
			_ => Error::InvalidSignature,
		}
	}
}
