mod error;
mod private;
mod public;
mod signature;

pub use primitives::bytes;
pub use primitives::hash;

pub use self::error::Error;
pub use self::private::Private;
pub use self::public::{AddressHash, Message, Public};
pub use self::signature::Signature;
