//! Date and relative-duration parsing for manufacture/best-before
//! declarations.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::models::record::TypedValue;

lazy_static! {
    // "12 months from manufacture", "2 years from mfg", "18 months".
    static ref RELATIVE_DURATION: Regex = Regex::new(
        r"(?i)^\s*(\d{1,3})\s*(months?|years?)(?:\s+from\s+(?:manufacture|manufacturing|mfg\.?|mfd\.?|packaging|pkg\.?))?\s*$"
    ).unwrap();

    // MM/YYYY (also - and . separators). Four-digit year required:
    // two-digit year tokens are ambiguous and rejected as malformed.
    static ref MONTH_YEAR: Regex = Regex::new(
        r"^\s*(\d{1,2})[/\-.](\d{4})\s*$"
    ).unwrap();

    // DD/MM/YYYY and separator variants.
    static ref DAY_MONTH_YEAR: Regex = Regex::new(
        r"^\s*(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{4})\s*$"
    ).unwrap();

    // "01 January 2026", "1 Jan 2026".
    static ref DAY_MONTHNAME_YEAR: Regex = Regex::new(
        r"(?i)^\s*(\d{1,2})\s+([a-z]+),?\s+(\d{4})\s*$"
    ).unwrap();

    // "January 2026", "Jan 2026".
    static ref MONTHNAME_YEAR: Regex = Regex::new(
        r"(?i)^\s*([a-z]+),?\s+(\d{4})\s*$"
    ).unwrap();
}

fn month_name_to_number(name: &str) -> Option<u32> {
    let month = match name.to_lowercase().as_str() {
        "jan" | "january" => 1,
        "feb" | "february" => 2,
        "mar" | "march" => 3,
        "apr" | "april" => 4,
        "may" => 5,
        "jun" | "june" => 6,
        "jul" | "july" => 7,
        "aug" | "august" => 8,
        "sep" | "sept" | "september" => 9,
        "oct" | "october" => 10,
        "nov" | "november" => 11,
        "dec" | "december" => 12,
        _ => return None,
    };
    Some(month)
}

/// Parse a date declaration into a calendar point or relative duration.
///
/// Accepted layouts: `MM/YYYY`, `DD/MM/YYYY`, `DD Month YYYY`,
/// `Month YYYY`, and `<N> months/years [from manufacture]`. Two-digit
/// years are never guessed; anything unrecognized returns `None` and the
/// caller records it as `Malformed`.
pub fn parse_date_or_duration(raw: &str) -> Option<TypedValue> {
    if let Some(caps) = RELATIVE_DURATION.captures(raw) {
        let n: u32 = caps[1].parse().ok()?;
        if n == 0 {
            return None;
        }
        let months = if caps[2].to_lowercase().starts_with("year") {
            n.checked_mul(12)?
        } else {
            n
        };
        return Some(TypedValue::Duration { months });
    }

    if let Some(caps) = DAY_MONTH_YEAR.captures(raw) {
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;
        // chrono validates day-of-month plausibility
        NaiveDate::from_ymd_opt(year, month, day)?;
        return Some(TypedValue::Calendar {
            year,
            month,
            day: Some(day),
        });
    }

    if let Some(caps) = MONTH_YEAR.captures(raw) {
        let month: u32 = caps[1].parse().ok()?;
        let year: i32 = caps[2].parse().ok()?;
        if !(1..=12).contains(&month) {
            return None;
        }
        return Some(TypedValue::Calendar {
            year,
            month,
            day: None,
        });
    }

    if let Some(caps) = DAY_MONTHNAME_YEAR.captures(raw) {
        let day: u32 = caps[1].parse().ok()?;
        let month = month_name_to_number(&caps[2])?;
        let year: i32 = caps[3].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)?;
        return Some(TypedValue::Calendar {
            year,
            month,
            day: Some(day),
        });
    }

    if let Some(caps) = MONTHNAME_YEAR.captures(raw) {
        let month = month_name_to_number(&caps[1])?;
        let year: i32 = caps[2].parse().ok()?;
        return Some(TypedValue::Calendar {
            year,
            month,
            day: None,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_month_year() {
        assert_eq!(
            parse_date_or_duration("01/2026"),
            Some(TypedValue::Calendar {
                year: 2026,
                month: 1,
                day: None,
            })
        );
        assert_eq!(parse_date_or_duration("13/2026"), None);
    }

    #[test]
    fn test_parse_day_month_year() {
        assert_eq!(
            parse_date_or_duration("15/01/2026"),
            Some(TypedValue::Calendar {
                year: 2026,
                month: 1,
                day: Some(15),
            })
        );
        // 31 November does not exist
        assert_eq!(parse_date_or_duration("31/11/2026"), None);
    }

    #[test]
    fn test_parse_month_name_layouts() {
        assert_eq!(
            parse_date_or_duration("15 January 2026"),
            Some(TypedValue::Calendar {
                year: 2026,
                month: 1,
                day: Some(15),
            })
        );
        assert_eq!(
            parse_date_or_duration("Jan 2026"),
            Some(TypedValue::Calendar {
                year: 2026,
                month: 1,
                day: None,
            })
        );
    }

    #[test]
    fn test_parse_relative_duration() {
        assert_eq!(
            parse_date_or_duration("12 months from manufacture"),
            Some(TypedValue::Duration { months: 12 })
        );
        assert_eq!(
            parse_date_or_duration("2 years from mfg"),
            Some(TypedValue::Duration { months: 24 })
        );
        assert_eq!(
            parse_date_or_duration("18 months"),
            Some(TypedValue::Duration { months: 18 })
        );
        assert_eq!(parse_date_or_duration("0 months"), None);
    }

    #[test]
    fn test_two_digit_year_rejected_not_guessed() {
        assert_eq!(parse_date_or_duration("01/26"), None);
        assert_eq!(parse_date_or_duration("15/01/26"), None);
        assert_eq!(parse_date_or_duration("Jan 26"), None);
    }

    #[test]
    fn test_garbage_rejected() {
        assert_eq!(parse_date_or_duration("soon"), None);
        assert_eq!(parse_date_or_duration("see packaging"), None);
    }
}
