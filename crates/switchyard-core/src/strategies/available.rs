//! Available - reports what can be used right now.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{HandlerError, UserIntent};
use crate::ports::{DisplaySink, IntentStrategy};
use crate::registry::{DiscoverableStrategy, StrategyContext};

/// Handles `Intent::Available`.
pub struct AvailableStrategy {
    display: Arc<dyn DisplaySink>,
}

impl AvailableStrategy {
    pub const KEY: &'static str = "Available";

    pub fn new(display: Arc<dyn DisplaySink>) -> Self {
        Self { display }
    }
}

#[async_trait]
impl IntentStrategy for AvailableStrategy {
    fn key(&self) -> &str {
        Self::KEY
    }

    async fn process(&self, user_intent: &UserIntent) -> Result<(), HandlerError> {
        super::announce(self.display.as_ref(), user_intent, "AvailableStrategy").await
    }
}

impl DiscoverableStrategy for AvailableStrategy {
    fn from_context(context: &StrategyContext) -> Self {
        Self::new(context.display())
    }
}

crate::submit_strategy!(AvailableStrategy);
