//! Errors - dispatch, composition and handler failures.
//!
//! # Classification
//! - `DispatchError::UnhandledIntent`: recoverable, per intent
//! - `BuildError`: fatal, composition must stop
//! - `HandlerError`: owned by the handler, passed through untouched

use thiserror::Error;

use super::intent::Intent;

/// HandlerError is whatever a strategy (or the sink it delegates to) reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    #[error("display failed: {0}")]
    Display(String),

    #[error("strategy '{key}' failed: {reason}")]
    Failed { key: String, reason: String },
}

/// DispatchError is returned when resolving or running a strategy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("The Intent {0} is not handled")]
    UnhandledIntent(Intent),

    #[error(transparent)]
    Handler(#[from] HandlerError),
}

impl DispatchError {
    pub fn is_unhandled(&self) -> bool {
        matches!(self, DispatchError::UnhandledIntent(_))
    }
}

/// BuildError stops composition before any dispatch happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("duplicate strategy key '{0}'")]
    DuplicateKey(String),

    #[error("Missing strategy keys: {0:?}. These keys were expected but not registered.")]
    MissingKeys(Vec<String>),
}
