//! Average - reports a mean figure.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{HandlerError, UserIntent};
use crate::ports::{DisplaySink, IntentStrategy};
use crate::registry::{DiscoverableStrategy, StrategyContext};

pub struct AverageStrategy {
    display: Arc<dyn DisplaySink>,
}

impl AverageStrategy {
    pub const KEY: &'static str = "Average";

    pub fn new(display: Arc<dyn DisplaySink>) -> Self {
        Self { display }
    }
}

#[async_trait]
impl IntentStrategy for AverageStrategy {
    fn key(&self) -> &str {
        Self::KEY
    }

    async fn process(&self, user_intent: &UserIntent) -> Result<(), HandlerError> {
        super::announce(self.display.as_ref(), user_intent, "AverageStrategy").await
    }
}

impl DiscoverableStrategy for AverageStrategy {
    fn from_context(context: &StrategyContext) -> Self {
        Self::new(context.display())
    }
}

crate::submit_strategy!(AverageStrategy);
