// SPDX-License-Identifier: MPL-2.0
//! Playback time formatting for the progress readouts.

/// Formats seconds as `m:ss`, seconds zero-padded to two digits.
///
/// Minutes are unpadded and uncapped, so an hour reads `60:00`. Negative
/// and non-finite inputs (an element with no metadata reports NaN) format
/// as the cleared readout `0:00`.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_handles_zero() {
        assert_eq!(format_time(0.0), "0:00");
    }

    #[test]
    fn format_time_pads_seconds() {
        assert_eq!(format_time(65.0), "1:05");
    }

    #[test]
    fn format_time_handles_seconds_only() {
        assert_eq!(format_time(9.0), "0:09");
        assert_eq!(format_time(45.5), "0:45");
    }

    #[test]
    fn format_time_stays_under_ten_minutes() {
        assert_eq!(format_time(599.0), "9:59");
    }

    #[test]
    fn format_time_does_not_roll_into_hours() {
        assert_eq!(format_time(3600.0), "60:00");
    }

    #[test]
    fn format_time_handles_negative() {
        assert_eq!(format_time(-10.0), "0:00");
    }

    #[test]
    fn format_time_handles_nan_and_infinity() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }
}
