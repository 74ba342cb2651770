//! Queue progress derived from the tracked batch total.

use std::fmt::{self, Display};

/// Progress of the tracked batch, in percent.
///
/// `None` when nothing is tracked yet; the dashboard hides the bar instead of
/// showing a non-finite value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QueueProgress(Option<f64>);

impl QueueProgress {
    /// `(total - queue_length) / total * 100`, rounded to one decimal.
    pub fn compute(total_emails: u64, queue_length: u64) -> Self {
        if total_emails == 0 {
            return Self(None);
        }
        let total = total_emails as f64;
        let done = total - queue_length as f64;
        Self(Some(round_to_tenth(done / total * 100.0)))
    }

    pub fn percent(&self) -> Option<f64> {
        self.0
    }

    /// Gauge ratio in `[0, 1]`. Stale totals can push the raw value out of range.
    pub fn ratio(&self) -> f64 {
        self.0.map_or(0.0, |p| (p / 100.0).clamp(0.0, 1.0))
    }
}

impl Display for QueueProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(p) => write!(f, "{:.1}%", p),
            None => f.write_str("--"),
        }
    }
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_tracked_four_queued_is_sixty_percent() {
        let progress = QueueProgress::compute(10, 4);
        assert_eq!(progress.percent(), Some(60.0));
        assert_eq!(progress.to_string(), "60.0%");
        assert!((progress.ratio() - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn rounds_to_one_decimal() {
        // 2/3 done
        assert_eq!(QueueProgress::compute(3, 1).percent(), Some(66.7));
        assert_eq!(QueueProgress::compute(3, 1).to_string(), "66.7%");
        assert_eq!(QueueProgress::compute(7, 0).to_string(), "100.0%");
    }

    #[test]
    fn zero_total_hides_progress() {
        let progress = QueueProgress::compute(0, 0);
        assert_eq!(progress.percent(), None);
        assert_eq!(progress.to_string(), "--");
        assert_eq!(progress.ratio(), 0.0);

        assert_eq!(QueueProgress::compute(0, 12).percent(), None);
    }

    #[test]
    fn stale_total_reports_raw_value_but_clamps_gauge() {
        let progress = QueueProgress::compute(4, 10);
        assert_eq!(progress.percent(), Some(-150.0));
        assert_eq!(progress.to_string(), "-150.0%");
        assert_eq!(progress.ratio(), 0.0);
    }
}
