//! Gateway timestamp formatting.
//!
//! The router expects `yyyy-MM-dd HH:mm:ss` in the sender's local time zone.
//! Callers obtain the `NaiveDateTime` from their clock; this module only
//! renders it.

use chrono::NaiveDateTime;

/// Chrono format string for the gateway timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render `t` as `yyyy-MM-dd HH:mm:ss`.
#[must_use]
pub fn format_timestamp(t: NaiveDateTime) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

/// Render `t` with custom date and time separators, e.g. `/` and `.` for
/// `2023/09/05 09.04.17`. The protocol timestamp uses `-` and `:`.
#[must_use]
pub fn format_timestamp_with(t: NaiveDateTime, date_sep: &str, time_sep: &str) -> String {
    format!(
        "{}{date_sep}{}{date_sep}{} {}{time_sep}{}{time_sep}{}",
        t.format("%Y"),
        t.format("%m"),
        t.format("%d"),
        t.format("%H"),
        t.format("%M"),
        t.format("%S"),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use {super::*, chrono::NaiveDate};

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 9, 5)
            .unwrap()
            .and_hms_opt(9, 4, 17)
            .unwrap()
    }

    #[test]
    fn protocol_rendering_zero_pads() {
        assert_eq!(format_timestamp(sample()), "2023-09-05 09:04:17");
    }

    #[test]
    fn custom_separators() {
        assert_eq!(
            format_timestamp_with(sample(), "/", "."),
            "2023/09/05 09.04.17"
        );
    }

    #[test]
    fn custom_separators_match_protocol_form() {
        assert_eq!(
            format_timestamp_with(sample(), "-", ":"),
            format_timestamp(sample())
        );
    }
}
