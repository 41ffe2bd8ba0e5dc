//! Block signing and signature verification (`SignBlock`/`CheckBlockSignature`).
//!
//! The "staking output" a block's signature is checked against is the
//! coinstake's second output for PoS blocks, or the coinbase's first
//! output for PoW blocks.

use bitcrypto::SHA256D;
use chain::Block;
use keys::{Private, Public, Signature};
use script::{Builder, Script, Solver};

/// Resolves a key id (the pubkey's `HASH160`) to a signing key, mirroring
/// the original wallet's `GetLegacyScriptPubKeyMan()->GetKey`.
pub trait KeyStore {
	fn get_key(&self, key_id: &bitcrypto::HASH160) -> Option<Private>;
}

fn staking_output_script(block: &Block) -> Option<Script> {
	if block.is_proof_of_stake() {
		block.transactions.get(1)?.outputs.get(1).map(|out| Builder::from_bytes(out.script_pubkey.clone()))
	} else {
		block.transactions.get(0)?.outputs.get(0).map(|out| Builder::from_bytes(out.script_pubkey.clone()))
	}
}

/// Signs `block`'s hash with the key matching its staking output's pubkey,
/// writing the DER signature into `block.block_sig`. Returns `false` (no
/// mutation) if the staking output isn't a bare-pubkey script, or if the
/// host has no matching key.
pub fn sign_block(block: &mut Block, key_store: &impl KeyStore) -> bool {
	let script = match staking_output_script(block) {
		Some(script) => script,
		None => return false,
	};

	let pubkey = match Solver::solve_pubkey(&script) {
		Some(pubkey) => pubkey,
		None => return false,
	};

	let key = match key_store.get_key(&pubkey.address_hash()) {
		Some(key) => key,
		None => return false,
	};
	if key.public_key() != pubkey {
		return false;
	}

	match key.sign(&block.hash()) {
		Ok(signature) => {
			block.block_sig = signature.to_vec().into();
			true
		}
		Err(_) => false,
	}
}

/// Verifies `block.block_sig` against its staking output's pubkey. The
/// genesis block is special-cased: it must carry an empty signature.
pub fn check_block_signature(block: &Block, genesis_hash: SHA256D) -> bool {
	if block.hash() == genesis_hash {
		return block.block_sig.is_empty();
	}

	let script = match staking_output_script(block) {
		Some(script) => script,
		None => return false,
	};

	let pubkey = match Solver::solve_pubkey(&script) {
		Some(pubkey) => pubkey,
		None => return false,
	};

	if block.block_sig.is_empty() {
		return false;
	}

	let signature = Signature::from(block.block_sig.to_vec());
	let verified = pubkey.verify(&block.hash(), &signature).unwrap_or(false);
	if !verified {
		warn!(target: "consensus", "{}", crate::Error::SignatureFailure);
	}
	verified
}

#[cfg(test)]
mod tests {
	use super::*;
	use bitcrypto::dhash160;
	use chain::{BlockHeader, Transaction, TransactionOutput};
	use script::Opcode;

	struct SingleKeyStore(Private);
	impl KeyStore for SingleKeyStore {
		fn get_key(&self, key_id: &bitcrypto::HASH160) -> Option<Private> {
			if self.0.public_key().address_hash() == *key_id {
				Some(self.0.clone())
			} else {
				None
			}
		}
	}

	fn pow_block_with_pubkey_output(pubkey: &Public) -> Block {
		let script = Builder::new().push_data(pubkey).push_opcode(Opcode::OpCheckSig).into_script();
		let coinbase = Transaction {
			version: 1,
			time: 1000,
			inputs: vec![],
			outputs: vec![TransactionOutput {
				value: 0,
				script_pubkey: script.into(),
			}],
			lock_time: 0,
		};
		Block::new(BlockHeader::default(), vec![coinbase])
	}

	#[test]
	fn test_sign_then_verify_round_trip() {
		let private = Private::from_secret_slice(&[7u8; 32], true).unwrap();
		let public = private.public_key();
		let mut block = pow_block_with_pubkey_output(&public);

		let key_store = SingleKeyStore(private);
		assert!(sign_block(&mut block, &key_store));
		assert!(!block.block_sig.is_empty());

		assert!(check_block_signature(&block, SHA256D::default()));
	}

	#[test]
	fn test_genesis_requires_empty_signature() {
		let private = Private::from_secret_slice(&[9u8; 32], true).unwrap();
		let public = private.public_key();
		let block = pow_block_with_pubkey_output(&public);
		let genesis_hash = block.hash();

		assert!(check_block_signature(&block, genesis_hash));
	}

	#[test]
	fn test_missing_key_fails_to_sign() {
		let private = Private::from_secret_slice(&[1u8; 32], true).unwrap();
		let public = private.public_key();
		let mut block = pow_block_with_pubkey_output(&public);

		let other_key = Private::from_secret_slice(&[2u8; 32], true).unwrap();
		let key_store = SingleKeyStore(other_key);
		assert!(!sign_block(&mut block, &key_store));
		assert!(block.block_sig.is_empty());
	}

	#[test]
	fn test_tampered_signature_fails_verification() {
		let private = Private::from_secret_slice(&[7u8; 32], true).unwrap();
		let public = private.public_key();
		let mut block = pow_block_with_pubkey_output(&public);

		let key_store = SingleKeyStore(private);
		assert!(sign_block(&mut block, &key_store));
		block.block_sig = vec![0u8; 8].into();

		assert!(!check_block_signature(&block, SHA256D::default()));
	}

	#[test]
	fn test_address_hash_matches_dhash160_of_pubkey() {
		let private = Private::from_secret_slice(&[3u8; 32], true).unwrap();
		let public = private.public_key();
		assert_eq!(public.address_hash(), dhash160(&public[..]));
	}
}
