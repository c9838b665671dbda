//! Wait-time aggregation.

use std::fmt;

/// Summary statistics over all recorded passenger wait times.
///
/// All fields are zero when nothing was delivered, so a zero-elevator or
/// zero-arrival run still reports cleanly.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct WaitStats {
    /// Passengers whose delivery was recorded.
    pub delivered: usize,
    /// Mean wait in ticks.
    pub average: f64,
    /// Longest recorded wait in ticks.
    pub longest: u64,
    /// Shortest recorded wait in ticks.
    pub shortest: u64,
}

impl WaitStats {
    /// Aggregate from recorded wait values.
    pub fn from_waits(waits: impl IntoIterator<Item = u64>) -> Self {
        let mut delivered = 0usize;
        let mut total = 0u64;
        let mut longest = 0u64;
        let mut shortest = u64::MAX;

        for wait in waits {
            delivered += 1;
            total += wait;
            longest = longest.max(wait);
            shortest = shortest.min(wait);
        }

        if delivered == 0 {
            return Self::default();
        }
        Self {
            delivered,
            average: total as f64 / delivered as f64,
            longest,
            shortest,
        }
    }
}

impl fmt::Display for WaitStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "delivered {} | avg wait {:.2} ticks | longest {} | shortest {}",
            self.delivered, self.average, self.longest, self.shortest
        )
    }
}
