//! Configuration for the sample data adapters.

use std::time::Duration;

/// Artificial latency configuration for the sample repositories.
///
/// The sample adapters stand in for the remote API and sleep for these
/// durations before resolving, approximating real round-trip times. Use
/// the builder to customize, or [`SampleConfig::instant`] to zero all
/// delays in tests.
///
/// # Example
///
/// ```ignore
/// use bappy::config::SampleConfig;
///
/// let config = SampleConfig::default()
///     .with_page_fetch_delay(std::time::Duration::from_millis(500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleConfig {
    /// Delay for per-user profile list fetches.
    pub profile_fetch_delay: Duration,
    /// Delay for paged browse/search fetches.
    pub page_fetch_delay: Duration,
    /// Delay for light mutations (like, join, cancel, delete).
    pub mutation_delay: Duration,
    /// Delay for heavy mutations (create, report).
    pub slow_mutation_delay: Duration,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            profile_fetch_delay: Duration::from_millis(400),
            page_fetch_delay: Duration::from_millis(2000),
            mutation_delay: Duration::from_millis(400),
            slow_mutation_delay: Duration::from_millis(2000),
        }
    }
}

impl SampleConfig {
    /// Create a config with the default delays.
    pub fn new() -> Self {
        Self::default()
    }

    /// A config with every delay zeroed, for tests.
    pub fn instant() -> Self {
        Self {
            profile_fetch_delay: Duration::ZERO,
            page_fetch_delay: Duration::ZERO,
            mutation_delay: Duration::ZERO,
            slow_mutation_delay: Duration::ZERO,
        }
    }

    /// Set the profile list fetch delay.
    pub fn with_profile_fetch_delay(mut self, delay: Duration) -> Self {
        self.profile_fetch_delay = delay;
        self
    }

    /// Set the paged fetch delay.
    pub fn with_page_fetch_delay(mut self, delay: Duration) -> Self {
        self.page_fetch_delay = delay;
        self
    }

    /// Set the light mutation delay.
    pub fn with_mutation_delay(mut self, delay: Duration) -> Self {
        self.mutation_delay = delay;
        self
    }

    /// Set the heavy mutation delay.
    pub fn with_slow_mutation_delay(mut self, delay: Duration) -> Self {
        self.slow_mutation_delay = delay;
        self
    }
}
