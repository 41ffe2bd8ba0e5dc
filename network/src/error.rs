use display_derive::Display;

#[derive(Debug, PartialEq, Display)]
pub enum Error {
	/// `select` called after the registry was already initialized.
	#[display(fmt = "chain parameters already initialized")]
	AlreadyInitialized,
	/// `current` called before `select`.
	#[display(fmt = "chain parameters not initialized")]
	NotInitialized,
	/// `select` called with a network this core does not carry constants for.
	#[display(fmt = "unknown network {:?}", _0)]
	UnknownNetwork(crate::NetworkId),
	/// The constructed genesis block's hash did not match the pinned constant.
	#[display(fmt = "genesis block hash mismatch: expected {}, got {}", expected, actual)]
	GenesisMismatch { expected: String, actual: String },
}

impl std::error::Error for Error {}
