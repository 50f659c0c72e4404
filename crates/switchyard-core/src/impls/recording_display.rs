//! RecordingDisplay - in-memory `DisplaySink`.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::HandlerError;
use crate::ports::DisplaySink;

/// RecordingDisplay keeps every message it was asked to show, in order.
#[derive(Default)]
pub struct RecordingDisplay {
    messages: Mutex<Vec<String>>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // a poisoned lock still holds valid messages
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl DisplaySink for RecordingDisplay {
    async fn display(&self, message: &str) -> Result<(), HandlerError> {
        self.lock().push(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_in_order() {
        let display = RecordingDisplay::new();
        assert!(display.is_empty());

        display.display("first").await.unwrap();
        display.display("second").await.unwrap();

        assert_eq!(display.len(), 2);
        assert_eq!(display.messages(), vec!["first", "second"]);
    }
}
