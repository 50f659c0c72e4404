//! Domain model (intents, ids, errors).

pub mod errors;
pub mod ids;
pub mod intent;

pub use self::errors::{BuildError, DispatchError, HandlerError};
pub use self::ids::DispatchId;
pub use self::intent::{Intent, ParseIntentError, UnknownValue, UserIntent};
