use display_derive::Display;

/// Runtime validation failures. Fatal lifecycle errors (genesis mismatch,
/// registry misuse) live in `network::Error`; everything here rejects a
/// single block or transaction and is never retried by the core.
#[derive(Debug, PartialEq, Display)]
pub enum Error {
	/// Coin-age was requested but the host has no transaction index.
	#[display(fmt = "transaction index unavailable")]
	TxIndexUnavailable,
	/// A stake input's transaction time precedes the coin it spends.
	#[display(fmt = "timestamp violation: tx predates the coin it spends")]
	TimestampViolation,
	/// Deserializing the previous transaction's block failed.
	#[display(fmt = "I/O error reading previous transaction: {}", _0)]
	IOError(String),
	/// The rehashed previous transaction does not match the outpoint.
	#[display(fmt = "previous transaction id mismatch")]
	TxMismatch,
	/// A block's signature did not verify against its staking output.
	#[display(fmt = "block signature verification failed")]
	SignatureFailure,
}

impl std::error::Error for Error {}
