//! A strategy declared outside the library is picked up by discovery without
//! touching any list inside switchyard-core.

use async_trait::async_trait;
use std::sync::Arc;

use switchyard_core::impls::RecordingDisplay;
use switchyard_core::observability::DispatchSummary;
use switchyard_core::registry::StrategyCatalog;
use switchyard_core::{
    AppBuilder, DiscoverableStrategy, DisplaySink, HandlerError, Intent, IntentStrategy,
    Lifetime, StrategyContext, UserIntent,
};

pub struct OtherStrategy {
    display: Arc<dyn DisplaySink>,
}

#[async_trait]
impl IntentStrategy for OtherStrategy {
    fn key(&self) -> &str {
        "Other"
    }

    async fn process(&self, user_intent: &UserIntent) -> Result<(), HandlerError> {
        self.display
            .display(&format!("{} in OtherStrategy", user_intent.intent))
            .await
    }
}

impl DiscoverableStrategy for OtherStrategy {
    fn from_context(context: &StrategyContext) -> Self {
        Self {
            display: context.display(),
        }
    }
}

switchyard_core::submit_strategy!(OtherStrategy);

#[test]
fn catalog_includes_external_strategy() {
    let catalog = StrategyCatalog::discover(Lifetime::Singleton);
    assert_eq!(catalog.len(), 4);
    assert!(
        catalog
            .type_names()
            .iter()
            .any(|name| name.ends_with("::OtherStrategy"))
    );
}

#[tokio::test]
async fn external_strategy_handles_other() {
    let display = Arc::new(RecordingDisplay::new());
    let app = AppBuilder::new()
        .with_display(display.clone())
        .discover()
        .expect_keys(&["Delay", "Available", "Average", "Other"])
        .build()
        .unwrap();

    let intents: Vec<UserIntent> = Intent::KNOWN.into_iter().map(UserIntent::new).collect();
    let reports = app.dispatcher().dispatch_all(&intents).await;

    assert_eq!(
        DispatchSummary::from_reports(&reports),
        DispatchSummary {
            succeeded: 4,
            unhandled: 0,
            failed: 0,
        }
    );
    assert_eq!(display.messages().last().unwrap(), "Other in OtherStrategy");
}

#[tokio::test]
async fn unrecognized_values_stay_unhandled() {
    let app = AppBuilder::new()
        .with_display(Arc::new(RecordingDisplay::new()))
        .discover()
        .build()
        .unwrap();

    let err = app
        .dispatcher()
        .dispatch(&UserIntent::new(Intent::from_value(12)))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "The Intent 12 is not handled");
}
