/// Read-only view of host CLI/config flags, mirroring the original's
/// `gArgs.GetBoolArg`. The core never reads the process environment or
/// argv directly; the host wires its own flag source through this trait.
pub trait Config {
	fn bool_flag(&self, name: &str) -> bool;
}

/// A `Config` that reports every flag unset, for hosts (and tests) that
/// don't need `-printcreation`/`-printcoinage` diagnostics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullConfig;

impl Config for NullConfig {
	fn bool_flag(&self, _name: &str) -> bool {
		false
	}
}
