//! Delay - reports that something is running late.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{HandlerError, UserIntent};
use crate::ports::{DisplaySink, IntentStrategy};
use crate::registry::{DiscoverableStrategy, StrategyContext};

pub struct DelayStrategy {
    display: Arc<dyn DisplaySink>,
}

impl DelayStrategy {
    pub const KEY: &'static str = "Delay";

    pub fn new(display: Arc<dyn DisplaySink>) -> Self {
        Self { display }
    }
}

#[async_trait]
impl IntentStrategy for DelayStrategy {
    fn key(&self) -> &str {
        Self::KEY
    }

    async fn process(&self, user_intent: &UserIntent) -> Result<(), HandlerError> {
        super::announce(self.display.as_ref(), user_intent, "DelayStrategy").await
    }
}

impl DiscoverableStrategy for DelayStrategy {
    fn from_context(context: &StrategyContext) -> Self {
        Self::new(context.display())
    }
}

crate::submit_strategy!(DelayStrategy);
