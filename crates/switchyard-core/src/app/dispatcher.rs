//! Dispatcher - resolve a strategy, then run it.

use chrono::{DateTime, Utc};
use futures::future::join_all;
use std::sync::Arc;
use tracing::Instrument;

use crate::domain::{DispatchError, DispatchId, Intent, UserIntent};
use crate::factory::StrategyFactory;

/// DispatchReport records the result of one intent in a batch.
#[derive(Debug, Clone)]
pub struct DispatchReport {
    pub id: DispatchId,
    pub intent: Intent,
    pub started_at: DateTime<Utc>,
    pub result: Result<(), DispatchError>,
}

impl DispatchReport {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Dispatcher is cheap to clone; every clone shares the same factory.
#[derive(Clone)]
pub struct Dispatcher {
    factory: Arc<StrategyFactory>,
}

impl Dispatcher {
    pub fn new(factory: Arc<StrategyFactory>) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &StrategyFactory {
        &self.factory
    }

    /// Dispatch one intent.
    ///
    /// Lookup misses come back as `UnhandledIntent`; handler errors are
    /// returned unchanged.
    pub async fn dispatch(&self, user_intent: &UserIntent) -> Result<(), DispatchError> {
        let strategy = self.factory.get_strategy(user_intent)?;
        strategy.process(user_intent).await?;
        Ok(())
    }

    /// Run each intent to completion before starting the next.
    ///
    /// A failed intent does not stop the batch.
    pub async fn dispatch_all(&self, intents: &[UserIntent]) -> Vec<DispatchReport> {
        let mut reports = Vec::with_capacity(intents.len());
        for user_intent in intents {
            reports.push(self.dispatch_reported(*user_intent).await);
        }
        reports
    }

    /// Run every intent at once. Reports keep submission order.
    pub async fn dispatch_concurrent(&self, intents: &[UserIntent]) -> Vec<DispatchReport> {
        join_all(intents.iter().map(|i| self.dispatch_reported(*i))).await
    }

    async fn dispatch_reported(&self, user_intent: UserIntent) -> DispatchReport {
        let id = DispatchId::generate();
        let started_at = Utc::now();
        let span = tracing::info_span!("dispatch", %id, intent = %user_intent.intent);

        let result = self.dispatch(&user_intent).instrument(span.clone()).await;
        span.in_scope(|| match &result {
            Ok(()) => tracing::info!("intent handled"),
            Err(err) if err.is_unhandled() => tracing::warn!(%err, "no strategy"),
            Err(err) => tracing::error!(%err, "strategy failed"),
        });

        DispatchReport {
            id,
            intent: user_intent.intent,
            started_at,
            result,
        }
    }
}
