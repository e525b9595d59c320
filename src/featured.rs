//! Daily featured recipe rotation.

use chrono::{Datelike, Local, NaiveDate};

use crate::error::MatcherError;
use crate::model::Recipe;

/// Days since January 1st of the date's year (January 1st is 0)
pub fn day_of_year(date: NaiveDate) -> usize {
    date.ordinal0() as usize
}

/// Index of the featured recipe for `date`, or `None` for an empty catalog
pub fn featured_index(date: NaiveDate, catalog_len: usize) -> Option<usize> {
    if catalog_len == 0 {
        return None;
    }
    Some(day_of_year(date) % catalog_len)
}

/// The recipe featured on `date`
pub fn featured_recipe(catalog: &[Recipe], date: NaiveDate) -> Option<&Recipe> {
    featured_index(date, catalog.len()).map(|index| &catalog[index])
}

/// Today's date on the local clock
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate, MatcherError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| MatcherError::InvalidDate(format!("{}: {}", value, e)))
}
