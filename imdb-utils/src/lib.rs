//! Shared utility functions for the IMDB dashboard crates.

/// Date utility functions
pub mod dates {
    use chrono::{NaiveDate, NaiveDateTime};

    /// Calendar month names, January first.
    pub const MONTH_NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    /// Date-only layouts seen in release_date columns, tried in order.
    const DATE_FORMATS: [&str; 7] = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%m/%d/%Y",
        "%d.%m.%Y",
        "%B %d, %Y",
        "%d %B %Y",
        "%b %d, %Y",
    ];

    /// Layouts that carry a time component. Only the date part is kept.
    const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%SZ"];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a release date written in any of the layouts the dataset mixes.
    ///
    /// Returns `None` for blank or unrecognized values; callers drop such rows
    /// from date-dependent computations.
    pub fn parse_release_date(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        for fmt in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
                return Some(date);
            }
        }
        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(dt.date());
            }
        }
        None
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_iso_date() {
            let date = parse_release_date("2009-12-15").unwrap();
            assert_eq!(date, NaiveDate::from_ymd_opt(2009, 12, 15).unwrap());
        }

        #[test]
        fn test_parse_mixed_layouts() {
            let expected = NaiveDate::from_ymd_opt(2015, 12, 15).unwrap();
            assert_eq!(parse_release_date("12/15/2015"), Some(expected));
            assert_eq!(parse_release_date("2015/12/15"), Some(expected));
            assert_eq!(parse_release_date("December 15, 2015"), Some(expected));
            assert_eq!(parse_release_date("2015-12-15T00:00:00"), Some(expected));
            assert_eq!(parse_release_date("  2015-12-15 "), Some(expected));
        }

        #[test]
        fn test_parse_rejects_garbage() {
            assert_eq!(parse_release_date(""), None);
            assert_eq!(parse_release_date("unknown"), None);
            assert_eq!(parse_release_date("2015-13-40"), None);
        }

        #[test]
        fn test_format_date() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 5).unwrap();
            assert_eq!(format_date(&date), "2023-06-05");
        }
    }
}

/// Number formatting for labels and summaries
pub mod format {
    /// Format a value with an SI suffix and no decimals, matching the `.0s`
    /// axis format used on the revenue charts ("2G", "350M", "12k").
    pub fn si(value: f64) -> String {
        const PREFIXES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "G"), (1e6, "M"), (1e3, "k")];
        let magnitude = value.abs();
        for (scale, suffix) in PREFIXES {
            // Compare after rounding so 999_500 reads "1M", not "1000k".
            if magnitude >= scale * 0.9995 {
                return format!("{:.0}{}", value / scale, suffix);
            }
        }
        format!("{:.0}", value)
    }

    /// Format a whole-dollar amount with thousands separators ("$1,234,567").
    pub fn usd(value: f64) -> String {
        let rounded = value.round().abs() as u64;
        let digits = rounded.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if value < 0.0 {
            format!("-${}", grouped)
        } else {
            format!("${}", grouped)
        }
    }

}
