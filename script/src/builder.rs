use crate::num::ScriptNum;
use crate::opcode::Opcode;
use crate::script::Script;

/// Builds a `Script` byte-by-byte, pushing opcodes and length-prefixed data
/// the way the original's `CScript::operator<<` overloads do.
#[derive(Default)]
pub struct Builder {
	data: Vec<u8>,
}

impl Builder {
	pub fn new() -> Self {
		Builder { data: Vec::new() }
	}

	pub fn push_opcode(mut self, opcode: Opcode) -> Self {
		self.data.push(opcode.to_u8());
		self
	}

	pub fn push_num(self, num: ScriptNum) -> Self {
		self.push_data(&num.to_bytes())
	}

	/// Pushes raw bytes, choosing the direct push opcode or a PUSHDATA1/2/4
	/// prefix depending on length, matching standard Script push conventions.
	pub fn push_data(mut self, data: &[u8]) -> Self {
		let len = data.len();
		if len == 0 {
			self.data.push(Opcode::OP0.to_u8());
		} else if len <= 75 {
			self.data.push(len as u8);
		} else if len <= 0xff {
			self.data.push(Opcode::OpPushData1.to_u8());
			self.data.push(len as u8);
		} else if len <= 0xffff {
			self.data.push(Opcode::OpPushData2.to_u8());
			self.data.extend_from_slice(&(len as u16).to_le_bytes());
		} else {
			self.data.push(Opcode::OpPushData4.to_u8());
			self.data.extend_from_slice(&(len as u32).to_le_bytes());
		}
		self.data.extend_from_slice(data);
		self
	}

	pub fn into_script(self) -> Script {
		Script::new(self.data.into())
	}
}
