//! Document metadata extraction.
//!
//! Title and issuance date are recovered straight from the fragment
//! stream, before segmentation. The title comes from the first fragments
//! in reading order; the date from anywhere in the text, trying the
//! formats the corpus actually uses in a fixed priority order.

use chrono::NaiveDate;
use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::config::{TITLE_MAX_CHARS, TITLE_SCAN_LIMIT};
use crate::types::{DocumentMetadata, Fragment};

/// Header/footer boilerplate that must never become the title.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BOILERPLATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(Page|Seite|©|Copyright)").expect("valid regex"));

/// Numeric day/month/year with `/` or `-` separators (`12/03/23`).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NUMERIC_DMY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{2,4})\b").expect("valid regex")
});

/// Numeric year/month/day with `/` or `-` separators (`2023-03-12`).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NUMERIC_YMD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{4})[/-](\d{1,2})[/-](\d{1,2})\b").expect("valid regex")
});

/// English month name form (`March 12, 2023`).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MONTH_NAME_EN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(January|February|March|April|May|June|July|August|September|October|November|December)\s+(\d{1,2}),?\s+(\d{4})\b",
    )
    .expect("valid regex")
});

/// German month name form (`März 12, 2023`).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MONTH_NAME_DE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(Januar|Februar|März|April|Mai|Juni|Juli|August|September|Oktober|November|Dezember)\s+(\d{1,2}),?\s+(\d{4})\b",
    )
    .expect("valid regex")
});

/// German day-first form (`12. März 2023`), the usual one in decrees.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static GERMAN_DAY_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,2})\.\s*(Januar|Februar|März|April|Mai|Juni|Juli|August|September|Oktober|November|Dezember)\s*(\d{4})\b",
    )
    .expect("valid regex")
});

const MONTHS_EN: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const MONTHS_DE: [&str; 12] = [
    "januar",
    "februar",
    "märz",
    "april",
    "mai",
    "juni",
    "juli",
    "august",
    "september",
    "oktober",
    "november",
    "dezember",
];

/// Extract title and date from the fragment stream.
#[must_use]
pub fn extract_metadata(fragments: &[Fragment]) -> DocumentMetadata {
    DocumentMetadata {
        title: extract_title(fragments),
        date: extract_date(fragments),
    }
}

/// First substantive fragment in reading order becomes the title.
///
/// Only the first [`TITLE_SCAN_LIMIT`] fragments are considered; the
/// title sits at the top of page one or not at all.
fn extract_title(fragments: &[Fragment]) -> String {
    let mut ordered: Vec<&Fragment> = fragments.iter().collect();
    ordered.sort_by(|a, b| {
        a.page
            .cmp(&b.page)
            .then(a.bbox.y0.total_cmp(&b.bbox.y0))
            .then(a.bbox.x0.total_cmp(&b.bbox.x0))
    });

    for fragment in ordered.iter().take(TITLE_SCAN_LIMIT) {
        let text = fragment.text.trim();
        if text.is_empty() || BOILERPLATE.is_match(text) {
            continue;
        }
        return text.chars().take(TITLE_MAX_CHARS).collect();
    }

    String::new()
}

/// Try the date formats in priority order over the joined text.
///
/// Per pattern only the first occurrence is considered; a match whose
/// calendar construction fails (day 31 in February) is discarded and the
/// next pattern gets its turn.
fn extract_date(fragments: &[Fragment]) -> String {
    let all_text = fragments
        .iter()
        .map(|f| f.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let date = NUMERIC_DMY
        .captures(&all_text)
        .and_then(|caps| build_numeric_dmy(&caps))
        .or_else(|| {
            NUMERIC_YMD
                .captures(&all_text)
                .and_then(|caps| build_numeric_ymd(&caps))
        })
        .or_else(|| {
            MONTH_NAME_EN
                .captures(&all_text)
                .and_then(|caps| build_month_name(&caps, &MONTHS_EN))
        })
        .or_else(|| {
            MONTH_NAME_DE
                .captures(&all_text)
                .and_then(|caps| build_month_name(&caps, &MONTHS_DE))
        })
        .or_else(|| {
            GERMAN_DAY_MONTH
                .captures(&all_text)
                .and_then(|caps| build_german_day_month(&caps))
        });

    match date {
        Some(found) => found.format("%d.%m.%Y").to_string(),
        None => String::new(),
    }
}

fn build_numeric_dmy(caps: &Captures<'_>) -> Option<NaiveDate> {
    let day: u32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let year = expand_two_digit_year(caps.get(3)?.as_str())?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn build_numeric_ymd(caps: &Captures<'_>) -> Option<NaiveDate> {
    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let day: u32 = caps.get(3)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn build_month_name(caps: &Captures<'_>, table: &[&str; 12]) -> Option<NaiveDate> {
    let month = month_number(caps.get(1)?.as_str(), table)?;
    let day: u32 = caps.get(2)?.as_str().parse().ok()?;
    let year: i32 = caps.get(3)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn build_german_day_month(caps: &Captures<'_>) -> Option<NaiveDate> {
    let day: u32 = caps.get(1)?.as_str().parse().ok()?;
    let month = month_number(caps.get(2)?.as_str(), &MONTHS_DE)?;
    let year: i32 = caps.get(3)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_number(name: &str, table: &[&str; 12]) -> Option<u32> {
    let lower = name.to_lowercase();
    table
        .iter()
        .position(|month| *month == lower)
        .map(|index| index as u32 + 1)
}

/// Two-digit years pivot at 50: "23" is 2023, "87" is 1987.
fn expand_two_digit_year(raw: &str) -> Option<i32> {
    let value: i32 = raw.parse().ok()?;
    if raw.len() == 2 {
        Some(if value < 50 { 2000 + value } else { 1900 + value })
    } else {
        Some(value)
    }
}
