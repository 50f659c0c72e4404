//! ConsoleDisplay - the default `DisplaySink`.

use async_trait::async_trait;
use std::time::Duration;

use crate::config::DisplayConfig;
use crate::domain::HandlerError;
use crate::ports::DisplaySink;

/// ConsoleDisplay sleeps for `delay`, then prints `Display <message>`.
pub struct ConsoleDisplay {
    delay: Duration,
}

impl ConsoleDisplay {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &DisplayConfig) -> Self {
        Self::new(Duration::from_millis(config.delay_ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for ConsoleDisplay {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl DisplaySink for ConsoleDisplay {
    async fn display(&self, message: &str) -> Result<(), HandlerError> {
        tokio::time::sleep(self.delay).await;
        println!("Display {message}");
        tracing::debug!(%message, "displayed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[test]
    fn delay_comes_from_config() {
        let display = ConsoleDisplay::from_config(&DisplayConfig { delay_ms: 5 });
        assert_eq!(display.delay(), Duration::from_millis(5));
        assert_eq!(ConsoleDisplay::default().delay(), Duration::from_millis(100));
    }

    #[tokio::test]
    async fn waits_before_completing() {
        let display = ConsoleDisplay::new(Duration::from_millis(20));
        let start = Instant::now();
        display.display("hello").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
