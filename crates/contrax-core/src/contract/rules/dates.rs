//! Date normalization to ISO `YYYY-MM-DD`.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use super::patterns::{ISO_DATE, NUMERIC_DATE, SPACED_DATE};
use crate::models::fields::NOT_FOUND;

/// Month names in English, German and Spanish, full and abbreviated.
const MONTHS: &[(&str, u32)] = &[
    ("january", 1), ("jan", 1), ("januar", 1), ("enero", 1),
    ("february", 2), ("feb", 2), ("februar", 2), ("febrero", 2),
    ("march", 3), ("mar", 3), ("märz", 3), ("maerz", 3), ("marzo", 3),
    ("april", 4), ("apr", 4), ("abril", 4),
    ("may", 5), ("mai", 5), ("mayo", 5),
    ("june", 6), ("jun", 6), ("juni", 6), ("junio", 6),
    ("july", 7), ("jul", 7), ("juli", 7), ("julio", 7),
    ("august", 8), ("aug", 8), ("agosto", 8),
    ("september", 9), ("sept", 9), ("sep", 9), ("septiembre", 9),
    ("october", 10), ("oct", 10), ("oktober", 10), ("octubre", 10),
    ("november", 11), ("nov", 11), ("noviembre", 11),
    ("december", 12), ("dec", 12), ("dezember", 12), ("diciembre", 12),
];

lazy_static! {
    // Longest names first so "september" wins over "sep"
    static ref MONTH_NAME: Regex = {
        let mut names: Vec<&str> = MONTHS.iter().map(|(name, _)| *name).collect();
        names.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        Regex::new(&format!(r"\b(?:{})\b\.?", names.join("|"))).unwrap()
    };
}

/// Compact formats tried last on the untouched input.
const FALLBACK_FORMATS: &[&str] = &["%Y%m%d", "%d %B %Y", "%B %d %Y"];

/// Normalize a free-form date to `YYYY-MM-DD`.
///
/// Returns `N/A` for empty input and the trimmed input unchanged when no
/// form is recognized. Slash dates read month-first unless the first group
/// cannot be a month; dotted and dashed dates read day-first. An impossible
/// day or month is never swapped.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == NOT_FOUND {
        return NOT_FOUND.to_string();
    }

    let mut clean = trimmed.replace(',', "").to_lowercase();
    let mut named_month = false;
    let mut month_first = false;

    if let Some(found) = MONTH_NAME.find(&clean) {
        let name = found.as_str().trim_end_matches('.');
        if let Some((_, month)) = MONTHS.iter().find(|(candidate, _)| *candidate == name) {
            month_first = !clean[..found.start()].chars().any(|c| c.is_ascii_digit());
            clean = format!("{}{:02}{}", &clean[..found.start()], month, &clean[found.end()..]);
            named_month = true;
        }
    }

    if let Some(caps) = ISO_DATE.captures(&clean) {
        if let Some(date) = ymd(&caps[1], &caps[2], &caps[3]) {
            return date;
        }
    }

    if let Some(caps) = NUMERIC_DATE.captures(&clean) {
        let (first, separator, second, year) = (&caps[1], &caps[2], &caps[3], &caps[4]);
        let day_first = separator != "/" || first.parse::<u32>().map_or(false, |n| n > 12);
        let (day, month) = if day_first { (first, second) } else { (second, first) };
        if let Some(date) = ymd(year, month, day) {
            return date;
        }
    }

    if named_month {
        if let Some(caps) = SPACED_DATE.captures(&clean) {
            let (day, month) = if month_first {
                (&caps[2], &caps[1])
            } else {
                (&caps[1], &caps[2])
            };
            if let Some(date) = ymd(&caps[3], month, day) {
                return date;
            }
        }
    }

    for format in FALLBACK_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.format("%Y-%m-%d").to_string();
        }
    }

    trimmed.to_string()
}

fn ymd(year: &str, month: &str, day: &str) -> Option<String> {
    let year: i32 = match year.len() {
        2 => 2000 + year.parse::<i32>().ok()?,
        _ => year.parse().ok()?,
    };
    let date = NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)?;
    Some(date.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_passthrough() {
        assert_eq!(format_date("2024-03-15"), "2024-03-15");
        assert_eq!(format_date("2024/3/5"), "2024-03-05");
    }

    #[test]
    fn test_day_first_numeric() {
        assert_eq!(format_date("15.03.2024"), "2024-03-15");
        assert_eq!(format_date("05-03-2024"), "2024-03-05");
        assert_eq!(format_date("15-03-24"), "2024-03-15");
    }

    #[test]
    fn test_impossible_day_first_is_kept_raw() {
        assert_eq!(format_date("05.13.2024"), "05.13.2024");
        assert_eq!(format_date("05-13-2024"), "05-13-2024");
    }

    #[test]
    fn test_slash_dates() {
        assert_eq!(format_date("03/15/2024"), "2024-03-15");
        assert_eq!(format_date("15/03/2024"), "2024-03-15");
        assert_eq!(format_date("03/05/2024"), "2024-03-05");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(format_date("March 15, 2024"), "2024-03-15");
        assert_eq!(format_date("15. März 2024"), "2024-03-15");
        assert_eq!(format_date("15 de marzo de 2024"), "2024-03-15");
        assert_eq!(format_date("15-Mar-24"), "2024-03-15");
        assert_eq!(format_date("1 Sept 2023"), "2023-09-01");
    }

    #[test]
    fn test_unrecognized_and_missing() {
        assert_eq!(format_date(""), "N/A");
        assert_eq!(format_date("N/A"), "N/A");
        assert_eq!(format_date("upon signature"), "upon signature");
        assert_eq!(format_date("20240315"), "2024-03-15");
    }
}
