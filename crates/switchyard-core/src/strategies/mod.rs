//! Built-in strategies.
//!
//! Each module registers its own type with `submit_strategy!`; adding a new
//! strategy means adding a module here and nothing else.

pub mod available;
pub mod average;
pub mod delay;

pub use self::available::AvailableStrategy;
pub use self::average::AverageStrategy;
pub use self::delay::DelayStrategy;

use crate::domain::{HandlerError, UserIntent};
use crate::ports::DisplaySink;

/// Shows `"<intent> in <strategy>"` on the display sink.
pub(crate) async fn announce(
    display: &dyn DisplaySink,
    user_intent: &UserIntent,
    strategy: &str,
) -> Result<(), HandlerError> {
    display
        .display(&format!("{} in {}", user_intent.intent, strategy))
        .await
}
