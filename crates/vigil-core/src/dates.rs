//! Calendar-day arithmetic for device episodes and infection windows.
//!
//! All counting is inclusive calendar-day counting: the day of insertion
//! is day 1, and device-day eligibility begins on calendar day 3.

use jiff::civil::Date;
use jiff::ToSpan;

use crate::models::InfectionWindow;

/// Inclusive day count between two dates. Returns 0 when `start > end`.
pub fn inclusive_days(start: Date, end: Date) -> i64 {
    if start > end {
        return 0;
    }
    i64::from((end - start).get_days()) + 1
}

/// Infer the effective in-place status on the assessment date.
///
/// A caller that declares the device removed but records the removal on
/// the assessment date itself has described a device that was still in
/// place on the DOE. This inference must run before anything else reads
/// the in-place flag.
pub fn infer_in_place(in_place: bool, removal_date: Option<Date>, assessment_date: Date) -> bool {
    in_place || removal_date == Some(assessment_date)
}

/// The last calendar day the device contributes device days.
///
/// The assessment date when in place (after inference), else the removal
/// date. A missing removal date falls back to the assessment date; that
/// combination is an incomplete input and is rejected by validation.
pub fn effective_end(in_place: bool, removal_date: Option<Date>, assessment_date: Date) -> Date {
    if in_place {
        assessment_date
    } else {
        removal_date.unwrap_or(assessment_date)
    }
}

/// Device-day eligibility begins on calendar day 3.
pub fn device_day_eligible(days: i64) -> bool {
    days > 2
}

/// Device-associated: in place on the DOE, or removed exactly the day
/// before. Earlier removal, or no recorded removal date, is not
/// device-associated.
pub fn device_associated(in_place: bool, removal_date: Option<Date>, assessment_date: Date) -> bool {
    if in_place {
        return true;
    }
    removal_date == Some(assessment_date.saturating_sub(1.day()))
}

/// The 7-day infection window around an anchor date, or `None` when no
/// anchor is available. An absent anchor is reported as an undetermined
/// window, never computed against a defaulted date.
pub fn infection_window(anchor: Option<Date>) -> Option<InfectionWindow> {
    anchor.map(InfectionWindow::around)
}
