//! App - composition root and dispatch.
//!
//! - **AppBuilder**: discovery, lifetimes, wiring, fail-fast checks
//! - **Dispatcher**: resolve + run, one intent or a batch

pub mod builder;
pub mod dispatcher;

pub use self::builder::{App, AppBuilder, AppScope};
pub use self::dispatcher::{DispatchReport, Dispatcher};
