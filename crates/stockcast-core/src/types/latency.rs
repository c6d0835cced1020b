//! Artificial delays standing in for network latency.

use std::time::Duration;

/// Delays applied before each mock service call completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulatedLatency {
    /// Historical series fetch
    pub historical: Duration,
    /// Current price fetch
    pub current_price: Duration,
    /// Forecast generation
    pub forecast: Duration,
    /// Accuracy estimate
    pub accuracy: Duration,
}

impl SimulatedLatency {
    /// No delays at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// The delays a hosted prediction service typically shows.
    pub fn realistic() -> Self {
        Self {
            historical: Duration::from_millis(1000),
            current_price: Duration::from_millis(500),
            forecast: Duration::from_millis(1500),
            accuracy: Duration::from_millis(800),
        }
    }

    /// Same delay for every call.
    pub fn uniform(delay: Duration) -> Self {
        Self {
            historical: delay,
            current_price: delay,
            forecast: delay,
            accuracy: delay,
        }
    }

    /// Sleep for `delay`, returning immediately when it is zero.
    pub async fn pause(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_presets() {
        assert_eq!(SimulatedLatency::none().forecast, Duration::ZERO);
        assert_eq!(SimulatedLatency::realistic().historical, Duration::from_millis(1000));
        assert_eq!(
            SimulatedLatency::uniform(Duration::from_millis(5)).accuracy,
            Duration::from_millis(5)
        );
    }

    #[tokio::test]
    async fn test_pause_waits() {
        let start = Instant::now();
        SimulatedLatency::pause(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
