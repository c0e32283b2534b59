//! Traffic-light grading of percentage rates shown as table chips.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateLevel {
    Good,
    Warning,
    Poor,
}

impl RateLevel {
    /// Grade a rate where higher is better: at least `good` is
    /// [`Good`](Self::Good), at least `warning` is [`Warning`](Self::Warning).
    pub fn higher_is_better(rate: f64, good: f64, warning: f64) -> Self {
        if rate >= good {
            Self::Good
        } else if rate >= warning {
            Self::Warning
        } else {
            Self::Poor
        }
    }

    /// Grade a rate where lower is better: at most `good` is
    /// [`Good`](Self::Good), at most `warning` is [`Warning`](Self::Warning).
    pub fn lower_is_better(rate: f64, good: f64, warning: f64) -> Self {
        if rate <= good {
            Self::Good
        } else if rate <= warning {
            Self::Warning
        } else {
            Self::Poor
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_is_better_bounds_are_inclusive() {
        assert_eq!(RateLevel::higher_is_better(80.0, 80.0, 60.0), RateLevel::Good);
        assert_eq!(RateLevel::higher_is_better(79.0, 80.0, 60.0), RateLevel::Warning);
        assert_eq!(RateLevel::higher_is_better(60.0, 80.0, 60.0), RateLevel::Warning);
        assert_eq!(RateLevel::higher_is_better(58.0, 80.0, 60.0), RateLevel::Poor);
    }

    #[test]
    fn test_lower_is_better_bounds_are_inclusive() {
        assert_eq!(RateLevel::lower_is_better(2.5, 2.5, 5.0), RateLevel::Good);
        assert_eq!(RateLevel::lower_is_better(3.2, 2.5, 5.0), RateLevel::Warning);
        assert_eq!(RateLevel::lower_is_better(5.0, 2.5, 5.0), RateLevel::Warning);
        assert_eq!(RateLevel::lower_is_better(5.1, 2.5, 5.0), RateLevel::Poor);
    }
}
