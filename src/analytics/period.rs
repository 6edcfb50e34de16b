use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Reporting window for financial summaries, anchored to "today". The window
/// is open-ended upward: everything from its start through now counts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SummaryPeriod {
    Daily,
    #[default]
    Monthly,
    #[serde(rename = "6months")]
    SixMonths,
    Yearly,
}

impl SummaryPeriod {
    /// Inclusive lower bound of the window containing `today`.
    pub fn start(&self, today: NaiveDate) -> NaiveDate {
        match self {
            SummaryPeriod::Daily => today,
            SummaryPeriod::Monthly => today.with_day(1).unwrap_or(today),
            SummaryPeriod::SixMonths => shift_month(today, -6),
            SummaryPeriod::Yearly => shift_year(today, -1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryPeriod::Daily => "daily",
            SummaryPeriod::Monthly => "monthly",
            SummaryPeriod::SixMonths => "6months",
            SummaryPeriod::Yearly => "yearly",
        }
    }
}

/// Moves a date by whole months, clamping the day to the target month's
/// length (e.g. Mar 31 minus one month is Feb 29 in a leap year).
fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    let mut day = date.day();
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date)
}

fn shift_year(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    let day = date.day().min(days_in_month(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day).unwrap_or(date)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    (first_next - Duration::days(1)).day()
}
