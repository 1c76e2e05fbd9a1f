use crate::error::{GraphError, Result};
use crate::pattern::matrix::build_matrix;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use tracing::{debug, warn};

/// Every week column of the contribution graph starts on this day.
pub const ANCHOR_WEEKDAY: Weekday = Weekday::Sun;
/// Nominal weeks in a year used when centring a pattern.
pub const WEEKS_PER_YEAR: i64 = 52;

pub fn is_anchor_weekday(date: NaiveDate) -> bool {
    date.weekday() == ANCHOR_WEEKDAY
}

fn days_since_anchor(date: NaiveDate) -> i64 {
    // num_days_from_sunday matches ANCHOR_WEEKDAY
    i64::from(date.weekday().num_days_from_sunday())
}

/// Round `date` down to the anchor weekday. Never moves forward.
pub fn normalize_to_anchor_weekday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(days_since_anchor(date))
}

/// Smallest anchor-weekday date on or after `date`.
pub fn next_anchor_weekday(date: NaiveDate) -> NaiveDate {
    let ahead = (7 - days_since_anchor(date)) % 7;
    date + Duration::days(ahead)
}

/// First anchor weekday on or after January 1st.
pub fn first_anchor_weekday_of_year(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, 1).map(next_anchor_weekday)
}

/// Anchor used when the centred anchor cannot be computed: mid June, rounded down.
pub fn fallback_anchor(year: i32) -> NaiveDate {
    let mid_year = NaiveDate::from_ymd_opt(year, 6, 15).unwrap_or_else(|| Local::now().date_naive());
    normalize_to_anchor_weekday(mid_year)
}

/// Anchor that centres `word` inside a 52-week year.
///
/// Uses the current year when `year` is `None`. Falls back to
/// [`fallback_anchor`] when the word cannot be rendered.
pub fn compute_optimal_anchor(word: &str, year: Option<i32>) -> NaiveDate {
    let year = year.unwrap_or_else(|| Local::now().year());
    match centred_anchor(word, year) {
        Ok(anchor) => {
            debug!(word, year, %anchor, "computed centred anchor");
            anchor
        }
        Err(e) => {
            let anchor = fallback_anchor(year);
            warn!(word, year, error = %e, %anchor, "could not centre pattern, using mid-year anchor");
            anchor
        }
    }
}

fn centred_anchor(word: &str, year: i32) -> Result<NaiveDate> {
    let weeks = build_matrix(word)?.width() as i64;
    let offset_weeks = (WEEKS_PER_YEAR - weeks).div_euclid(2);

    let first = first_anchor_weekday_of_year(year)
        .ok_or_else(|| GraphError::InvalidInput(format!("year {} is out of range", year)))?;
    let anchor = first
        .checked_add_signed(Duration::weeks(offset_weeks))
        .ok_or_else(|| GraphError::InvalidInput(format!("year {} is out of range", year)))?;

    Ok(normalize_to_anchor_weekday(anchor))
}

/// First and last calendar day covered by `weeks` columns starting at `anchor`.
pub fn date_range(anchor: NaiveDate, weeks: usize) -> (NaiveDate, NaiveDate) {
    let days = (weeks as i64 * 7 - 1).max(0);
    (anchor, anchor + Duration::days(days))
}
