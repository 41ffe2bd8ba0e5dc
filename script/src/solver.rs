use crate::opcode::Opcode;
use crate::script::Script;
use keys::Public;
use primitives::bytes::Bytes;

/// Classification of a recognized output script. Only the pattern needed by
/// block-signature verification is modeled; anything else is `NonStandard`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ScriptType {
	/// `<pubkey> OP_CHECKSIG`.
	PubKey,
	NonStandard,
}

/// Narrow script classifier. Recognizes only the bare-pubkey output pattern
/// that `SignBlock`/`CheckBlockSignature` depend on; general script
/// interpretation (P2SH, multisig, P2PKH, ...) is not attempted.
pub struct Solver;

impl Solver {
	/// Returns the script's type and any extracted data pushes (the pubkey,
	/// for `PubKey`).
	pub fn solve(script: &Script) -> (ScriptType, Vec<Bytes>) {
		match Self::parse_bare_pubkey(script) {
			Some(pubkey) => (ScriptType::PubKey, vec![pubkey]),
			None => (ScriptType::NonStandard, Vec::new()),
		}
	}

	/// Recognizes `<push 33 or 65 bytes> OP_CHECKSIG` and nothing else.
	fn parse_bare_pubkey(script: &Script) -> Option<Bytes> {
		let bytes: &[u8] = script;
		if bytes.len() < 2 {
			return None;
		}

		let push_len = bytes[0];
		let opcode = Opcode::from_u8(push_len)?;
		let data_len = match opcode {
			Opcode::PushBytes(n) => n as usize,
			_ => return None,
		};
		if data_len != 33 && data_len != 65 {
			return None;
		}
		if bytes.len() != 1 + data_len + 1 {
			return None;
		}
		let pubkey = &bytes[1..1 + data_len];
		let checksig = bytes[1 + data_len];
		if checksig != Opcode::OpCheckSig.to_u8() {
			return None;
		}

		Some(pubkey.to_vec().into())
	}

	/// Convenience wrapper over `solve` for block-signature verification:
	/// resolves a bare-pubkey output directly to a `keys::Public`.
	pub fn solve_pubkey(script: &Script) -> Option<Public> {
		match Self::solve(script) {
			(ScriptType::PubKey, data) => Public::from_slice(&data[0]).ok(),
			(ScriptType::NonStandard, _) => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{ScriptType, Solver};
	use crate::builder::Builder;
	use crate::opcode::Opcode;

	#[test]
	fn test_recognizes_bare_pubkey() {
		let pubkey = [2u8; 33];
		let script = Builder::new().push_data(&pubkey).push_opcode(Opcode::OpCheckSig).into_script();

		let (script_type, data) = Solver::solve(&script);
		assert_eq!(script_type, ScriptType::PubKey);
		assert_eq!(&data[0][..], &pubkey[..]);
	}

	#[test]
	fn test_rejects_other_patterns() {
		let script = Builder::new()
			.push_opcode(Opcode::OpDup)
			.push_opcode(Opcode::OpHash160)
			.into_script();

		let (script_type, data) = Solver::solve(&script);
		assert_eq!(script_type, ScriptType::NonStandard);
		assert!(data.is_empty());
	}
}
