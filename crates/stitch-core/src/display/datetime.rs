//! Calendar date display utilities.
//!
//! This module provides a wrapper type for formatting civil dates in a
//! consistent, human-readable format with the weekday spelled out.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around `Date` that provides weekday-prefixed formatting via the
/// `Display` trait.
///
/// This struct encapsulates a `Date` reference and implements `Display` to
/// format it with its abbreviated weekday. Deliveries are planned by weekday,
/// so every date the user sees carries one.
///
/// # Format
///
/// The display format follows the pattern: `Www YYYY-MM-DD`
/// - Abbreviated weekday name (e.g. Mon, Fri)
/// - Year, month, and day are zero-padded ISO components
pub struct CalendarDate<'a>(pub &'a Date);

impl<'a> fmt::Display for CalendarDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%a %Y-%m-%d"))
    }
}
