//! Human-readable time decomposition
//!
//! Converts an exact seconds total into the hours/minutes/seconds parts
//! reported by the stats summary. Only the seconds part carries a
//! fraction.

use crate::timing::ExactSeconds;

/// Hours/minutes/seconds display parts of a duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HmsParts {
    pub hours: u64,
    pub minutes: u64,
    /// Seconds below one minute, including the fractional remainder.
    pub seconds: f64,
}

/// Decompose a duration into hours, minutes and (fractional) seconds.
pub fn decompose(total: ExactSeconds) -> HmsParts {
    let whole = total.whole_seconds();
    HmsParts {
        hours: whole / 3600,
        minutes: (whole % 3600) / 60,
        seconds: (whole % 60) as f64 + total.subsec(),
    }
}

/// Format display parts as `H hours M minutes S seconds`.
pub fn format_hms(parts: &HmsParts) -> String {
    format!(
        "{} hours {} minutes {} seconds",
        parts.hours, parts.minutes, parts.seconds
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_under_a_minute() {
        let parts = decompose(ExactSeconds::from_frames(683_550, 44_100));
        assert_eq!(parts.hours, 0);
        assert_eq!(parts.minutes, 0);
        assert_eq!(parts.seconds, 15.5);
    }

    #[test]
    fn test_decompose_over_an_hour() {
        // 3661.5 s = 1 h 1 m 1.5 s
        let parts = decompose(ExactSeconds::from_frames(366_150, 100));
        assert_eq!(parts.hours, 1);
        assert_eq!(parts.minutes, 1);
        assert_eq!(parts.seconds, 1.5);
    }

    #[test]
    fn test_decompose_exact_hour() {
        let parts = decompose(ExactSeconds::from_frames(3600, 1));
        assert_eq!(parts.hours, 1);
        assert_eq!(parts.minutes, 0);
        assert_eq!(parts.seconds, 0.0);
    }

    #[test]
    fn test_decompose_zero() {
        let parts = decompose(ExactSeconds::ZERO);
        assert_eq!(parts.hours, 0);
        assert_eq!(parts.minutes, 0);
        assert_eq!(parts.seconds, 0.0);
    }

    #[test]
    fn test_format() {
        let parts = HmsParts {
            hours: 0,
            minutes: 0,
            seconds: 15.5,
        };
        assert_eq!(format_hms(&parts), "0 hours 0 minutes 15.5 seconds");
    }
}
