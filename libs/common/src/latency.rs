//! Simulated round-trip latency for the in-memory backends

use std::time::Duration;
use tracing::debug;

/// Fixed delay awaited before an in-memory operation completes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulatedLatency(Duration);

impl SimulatedLatency {
    /// No delay at all
    pub const NONE: Self = Self(Duration::ZERO);

    /// Create a latency from milliseconds
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// The configured delay
    pub fn duration(&self) -> Duration {
        self.0
    }

    /// Wait for the configured delay; returns immediately when it is zero
    pub async fn wait(&self) {
        if self.0.is_zero() {
            return;
        }

        debug!("Simulating {:?} of latency", self.0);
        tokio::time::sleep(self.0).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_zero_latency_returns_immediately() {
        let started = Instant::now();
        SimulatedLatency::NONE.wait().await;
        assert!(started.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_latency_waits_at_least_the_configured_delay() {
        let latency = SimulatedLatency::from_millis(20);
        let started = Instant::now();
        latency.wait().await;
        assert!(started.elapsed() >= Duration::from_millis(20));
        assert_eq!(latency.duration(), Duration::from_millis(20));
    }

    #[test]
    fn test_block_on_zero_latency() {
        tokio_test::block_on(SimulatedLatency::from_millis(0).wait());
    }
}
