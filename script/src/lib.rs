mod builder;
mod num;
mod opcode;
mod script;
mod solver;

pub use self::builder::Builder;
pub use self::num::ScriptNum;
pub use self::opcode::Opcode;
pub use self::script::Script;
pub use self::solver::{ScriptType, Solver};
