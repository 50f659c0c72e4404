//! IntentStrategy port - one handler per intent key.

use async_trait::async_trait;

use crate::domain::{HandlerError, UserIntent};

/// IntentStrategy performs the effect for exactly one key.
///
/// # Contract
/// - `key()` never changes over the lifetime of an instance
/// - `key()` matches the canonical text of the `Intent` it serves
/// - no strategy calls into another strategy
///
/// # Example
/// ```ignore
/// struct PingStrategy;
///
/// #[async_trait]
/// impl IntentStrategy for PingStrategy {
///     fn key(&self) -> &str {
///         "Ping"
///     }
///
///     async fn process(&self, intent: &UserIntent) -> Result<(), HandlerError> {
///         println!("{} handled", intent.intent);
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait IntentStrategy: Send + Sync {
    fn key(&self) -> &str;

    async fn process(&self, user_intent: &UserIntent) -> Result<(), HandlerError>;
}
