//! Lenient date parsing and the Spanish display strings used by the timeline.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use tracing::debug;

/// Day of the end month from which a partial month counts as a whole one.
pub const MID_MONTH_ROUNDING_DAY: u32 = 15;

/// Sort key standing in for the end date of an ongoing record. Later than any
/// real date so ongoing work always sorts first.
pub const ONGOING_SORT_SENTINEL: NaiveDate = NaiveDate::MAX;

const SHORT_MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

const LONG_MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

const NAIVE_DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

/// Stand-in for a date string that cannot be parsed: the Unix epoch.
/// Records carrying it sort after every real record.
pub fn unparseable_date_sentinel() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Parses an upstream date, falling back to the epoch sentinel instead of
/// failing. Accepts plain dates, RFC 3339 timestamps and naive timestamps.
pub fn parse_lenient(raw: &str) -> NaiveDate {
    let trimmed = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date;
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return timestamp.date_naive();
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, format) {
            return timestamp.date();
        }
    }

    debug!("Unparseable date '{raw}', using epoch sentinel");
    unparseable_date_sentinel()
}

/// Human-readable span between two dates, e.g. `"2 años y 3 meses"`.
///
/// Approximation used for display only: whole calendar months between the
/// two dates, plus one extra month when the end falls on or after the 15th.
/// Spans where `end` precedes `start` render as zero.
pub fn duration(start: NaiveDate, end: NaiveDate) -> String {
    let mut years = end.year() - start.year();
    let mut months = end.month() as i32 - start.month() as i32;

    if months < 0 {
        years -= 1;
        months += 12;
    }

    if end.day() >= MID_MONTH_ROUNDING_DAY {
        months += 1;
        if months == 12 {
            years += 1;
            months = 0;
        }
    }

    if years < 0 {
        years = 0;
        months = 0;
    }

    let mut parts = Vec::with_capacity(2);
    if years > 0 {
        parts.push(format!("{years} año{}", if years > 1 { "s" } else { "" }));
    }
    if months > 0 {
        parts.push(format!("{months} mes{}", if months > 1 { "es" } else { "" }));
    }

    if parts.is_empty() {
        "Menos de un mes".to_string()
    } else {
        parts.join(" y ")
    }
}

/// `duration` over raw upstream strings; a missing end means `today`.
pub fn duration_between(start: &str, end: Option<&str>, today: NaiveDate) -> String {
    let end = end
        .filter(|e| !e.trim().is_empty())
        .map(parse_lenient)
        .unwrap_or(today);
    duration(parse_lenient(start), end)
}

/// Timeline label for a start or end date: `"Ene. 2023"`, or `"Actualmente"`
/// when there is no date.
pub fn format_month_year(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return "Actualmente".to_string();
    };
    let date = parse_lenient(raw);
    let month = SHORT_MONTHS[date.month0() as usize];
    format!("{}. {}", capitalize(month), date.year())
}

/// Long Spanish date: `"5 de marzo de 2024"`.
pub fn format_long_date(raw: Option<&str>) -> Option<String> {
    let raw = raw.filter(|r| !r.trim().is_empty())?;
    let date = parse_lenient(raw);
    Some(format!(
        "{} de {} de {}",
        date.day(),
        LONG_MONTHS[date.month0() as usize],
        date.year()
    ))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().to_string() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_zero_length_span_before_mid_month() {
        assert_eq!(duration(date("2022-03-10"), date("2022-03-10")), "Menos de un mes");
    }

    #[test]
    fn test_mid_month_rounds_up() {
        assert_eq!(duration(date("2020-01-01"), date("2023-01-20")), "3 años y 1 mes");
    }

    #[test]
    fn test_day_14_does_not_round() {
        assert_eq!(duration(date("2020-01-01"), date("2023-01-14")), "3 años");
    }

    #[test]
    fn test_rounding_carries_into_years() {
        assert_eq!(duration(date("2020-02-01"), date("2021-01-15")), "1 año");
    }

    #[test]
    fn test_borrow_when_end_month_precedes_start_month() {
        assert_eq!(duration(date("2019-10-01"), date("2021-03-01")), "1 año y 5 meses");
    }

    #[test]
    fn test_singular_and_plural_units() {
        assert_eq!(duration(date("2021-01-01"), date("2022-02-01")), "1 año y 1 mes");
        assert_eq!(duration(date("2021-01-01"), date("2021-04-01")), "3 meses");
    }

    #[test]
    fn test_same_day_past_mid_month_counts_one_month() {
        assert_eq!(duration(date("2022-03-20"), date("2022-03-20")), "1 mes");
    }

    #[test]
    fn test_reversed_span_clamps_to_zero() {
        assert_eq!(duration(date("2023-05-01"), date("2023-03-01")), "Menos de un mes");
        assert_eq!(duration(date("2024-01-01"), date("2020-01-01")), "Menos de un mes");
    }

    #[test]
    fn test_parse_lenient_accepts_timestamps() {
        assert_eq!(parse_lenient("2021-06-01T10:30:00Z"), date("2021-06-01"));
        assert_eq!(parse_lenient("2021-06-01T10:30:00"), date("2021-06-01"));
        assert_eq!(parse_lenient(" 2021-06-01 "), date("2021-06-01"));
    }

    #[test]
    fn test_parse_lenient_falls_back_to_epoch() {
        assert_eq!(parse_lenient("not a date"), date("1970-01-01"));
        assert_eq!(parse_lenient(""), date("1970-01-01"));
        assert_eq!(parse_lenient("2021-13-45"), date("1970-01-01"));
    }

    #[test]
    fn test_duration_between_uses_today_for_ongoing() {
        let today = date("2024-06-20");
        assert_eq!(duration_between("2022-06-01", None, today), "2 años y 1 mes");
        assert_eq!(duration_between("2022-06-01", Some(""), today), "2 años y 1 mes");
    }

    #[test]
    fn test_format_month_year() {
        assert_eq!(format_month_year(Some("2023-01-09")), "Ene. 2023");
        assert_eq!(format_month_year(Some("2021-09-30")), "Sept. 2021");
        assert_eq!(format_month_year(None), "Actualmente");
        assert_eq!(format_month_year(Some(" ")), "Actualmente");
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(
            format_long_date(Some("2024-03-05")).as_deref(),
            Some("5 de marzo de 2024")
        );
        assert_eq!(format_long_date(None), None);
    }
}
