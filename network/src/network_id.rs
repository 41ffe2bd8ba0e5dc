/// Which network a node is validating against.
///
/// `Test`/`Regtest` exist as variants so callers can match exhaustively, but
/// `ChainParams::select` rejects them with `UnknownNetwork` -- this core does
/// not carry their consensus constants.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum NetworkId {
	/// Pure proof-of-work network ("Verium"/PoW-net).
	PowNet,
	/// Hybrid PoW/PoS network with the later PoST upgrade ("Vericoin"/hybrid-net).
	HybridNet,
	Test,
	Regtest,
}
