// Utility helpers for cell cleaning, date parsing and number formatting.
//
// This module centralizes all the "dirty" CSV handling so the rest of the
// code can assume clean, typed values.
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use num_format::{Locale, ToFormattedString};

/// Tokens the survey exports use for a missing value, besides an empty cell.
const NULL_TOKENS: &[&str] = &[
    "NA", "N/A", "n/a", "NaN", "nan", "NULL", "null", "None", "#N/A", "<NA>",
];

/// Timestamps outside this year range cannot be represented by the export
/// tool, so they are treated as unparseable.
const MIN_YEAR: i32 = 1677;
const MAX_YEAR: i32 = 2262;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Map a raw CSV cell to `None` when it is empty or one of the missing-value
/// markers. Other values are passed through untouched.
pub fn clean_cell(s: Option<String>) -> Option<String> {
    let s = s?;
    if s.is_empty() || NULL_TOKENS.contains(&s.as_str()) {
        return None;
    }
    Some(s)
}

/// Normalize a destination country: missing becomes the empty string, then
/// trim and lowercase. Applying it to its own output is a no-op.
pub fn normalize_destination(s: Option<&str>) -> String {
    s.unwrap_or("").trim().to_lowercase()
}

pub fn parse_date_safe(s: Option<&str>) -> Option<NaiveDate> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    // `YYYY-MM` and bare `YYYY` resolve to the first day of the period.
    if s.len() == 7 {
        if let Ok(d) = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d") {
            return Some(d);
        }
    }
    if s.len() == 4 && s.chars().all(|c| c.is_ascii_digit()) {
        return s.parse::<i32>().ok().and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1));
    }
    None
}

/// Calendar year of a date cell, or `None` if it does not parse.
pub fn parse_year(s: Option<&str>) -> Option<i32> {
    let year = parse_date_safe(s)?.year();
    (MIN_YEAR..=MAX_YEAR).contains(&year).then_some(year)
}

pub fn format_number(n: f64, decimals: usize) -> String {
    // Fixed decimals with locale-aware thousands separators (`1,234.50`).
    let neg = n.is_sign_negative() && n != 0.0;
    let s = format!("{:.*}", decimals, n.abs());
    let mut parts = s.split('.');
    let int_val: i64 = parts.next().unwrap_or("0").parse().unwrap_or(0);
    let mut res = int_val.to_formatted_string(&Locale::en);
    if let Some(frac) = parts.next() {
        res.push('.');
        res.push_str(frac);
    }
    if neg {
        format!("-{}", res)
    } else {
        res
    }
}

/// Render a fraction in `[0, 1]` as a percentage such as `66.67%`.
pub fn format_percent(share: f64) -> String {
    format!("{}%", format_number(share * 100.0, 2))
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    // Thin wrapper around `num-format` for counts (e.g., `9,855`).
    n.to_formatted_string(&Locale::en)
}
