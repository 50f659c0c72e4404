//! DisplaySink port - the outbound effect of the built-in strategies.

use async_trait::async_trait;

use crate::domain::HandlerError;

/// DisplaySink shows a message somewhere and completes when it is done.
///
/// Timing and destination belong to the implementation; callers only rely on
/// the returned future completing.
#[async_trait]
pub trait DisplaySink: Send + Sync {
    async fn display(&self, message: &str) -> Result<(), HandlerError>;
}
