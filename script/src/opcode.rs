/// Recognized script opcodes. Only the subset needed to build genesis
/// coinbase inputs and to recognize a bare-pubkey output is modeled;
/// general script interpretation is out of scope for this crate.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Opcode {
	/// Push an empty byte array (`OP_0` / `OP_FALSE`).
	OP0 = 0x00,
	/// Direct push of `n` bytes, `1 <= n <= 75`; the opcode value itself is `n`.
	PushBytes(u8),
	OpPushData1 = 0x4c,
	OpPushData2 = 0x4d,
	OpPushData4 = 0x4e,
	OpDup = 0x76,
	OpHash160 = 0xa9,
	OpEqualVerify = 0x88,
	OpCheckSig = 0xac,
}

impl Opcode {
	pub fn from_u8(byte: u8) -> Option<Opcode> {
		match byte {
			0x00 => Some(Opcode::OP0),
			1..=75 => Some(Opcode::PushBytes(byte)),
			0x4c => Some(Opcode::OpPushData1),
			0x4d => Some(Opcode::OpPushData2),
			0x4e => Some(Opcode::OpPushData4),
			0x76 => Some(Opcode::OpDup),
			0xa9 => Some(Opcode::OpHash160),
			0x88 => Some(Opcode::OpEqualVerify),
			0xac => Some(Opcode::OpCheckSig),
			_ => None,
		}
	}

	pub fn to_u8(self) -> u8 {
		match self {
			Opcode::OP0 => 0x00,
			Opcode::PushBytes(n) => n,
			Opcode::OpPushData1 => 0x4c,
			Opcode::OpPushData2 => 0x4d,
			Opcode::OpPushData4 => 0x4e,
			Opcode::OpDup => 0x76,
			Opcode::OpHash160 => 0xa9,
			Opcode::OpEqualVerify => 0x88,
			Opcode::OpCheckSig => 0xac,
		}
	}
}
