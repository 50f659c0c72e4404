//! switchyard-core
//!
//! Intent dispatch through self-registering strategies.
//!
//! # Modules
//! - **domain**: `Intent`, `UserIntent`, ids, errors
//! - **ports**: `IntentStrategy`, `DisplaySink`
//! - **registry**: discovery (`submit_strategy!`), catalog, lifetimes
//! - **factory**: key → strategy lookup
//! - **app**: `AppBuilder`, `Dispatcher`
//! - **strategies**: built-in strategies
//! - **impls**: display sinks
//! - **config**, **observability**

pub mod app;
pub mod config;
pub mod domain;
pub mod factory;
pub mod impls;
pub mod observability;
pub mod ports;
pub mod registry;
pub mod strategies;

pub use app::{App, AppBuilder, DispatchReport, Dispatcher};
pub use domain::{BuildError, DispatchError, HandlerError, Intent, UserIntent};
pub use factory::StrategyFactory;
pub use ports::{DisplaySink, IntentStrategy};
pub use registry::{DiscoverableStrategy, Lifetime, StrategyContext};
