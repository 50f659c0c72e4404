//! Dispatch identifiers.
//!
//! ULID based, so ids sort by creation time and can be generated without
//! coordination when intents fan out concurrently.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// DispatchId tags one dispatch attempt in logs and reports.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DispatchId(Ulid);

impl DispatchId {
    pub fn generate() -> Self {
        Self(Ulid::new())
    }

    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl fmt::Display for DispatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dispatch-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_has_prefix() {
        let ulid = Ulid::new();
        let id = DispatchId::from_ulid(ulid);
        assert_eq!(id.to_string(), format!("dispatch-{ulid}"));
        assert_eq!(id.as_ulid(), ulid);
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(DispatchId::generate(), DispatchId::generate());
    }
}
