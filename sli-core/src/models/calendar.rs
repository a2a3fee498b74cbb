use time::{Date, Month, OffsetDateTime};

/// A calendar month within a specific year.
///
/// This is both the grouping key for all month-based reports and the point
/// identifier in per-product monthly series. Ordering is chronological:
/// first by year, then by month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearMonth {
    /// The calendar year
    pub year: i32,

    /// The calendar month, 1 through 12
    pub month: u8,
}

impl From<Date> for YearMonth {
    fn from(value: Date) -> Self {
        Self {
            year: value.year(),
            month: u8::from(value.month()),
        }
    }
}

impl From<OffsetDateTime> for YearMonth {
    fn from(value: OffsetDateTime) -> Self {
        value.date().into()
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Shift a datetime by a whole number of calendar months, keeping the
/// time of day and UTC offset.
///
/// The day of month is preserved where possible and otherwise clamped to the
/// length of the target month, so January 31 shifted by one month lands on
/// February 28 (or 29 in a leap year).
pub fn shift_months(datetime: OffsetDateTime, months: i32) -> OffsetDateTime {
    let total = datetime.year() * 12 + i32::from(u8::from(datetime.month())) - 1 + months;
    let year = total.div_euclid(12);
    // rem_euclid keeps the index in 0..12, so the conversion cannot fail
    let month = Month::try_from((total.rem_euclid(12) + 1) as u8).unwrap();
    let day = datetime.day().min(time::util::days_in_year_month(year, month));
    // day is clamped to the month length above
    let date = Date::from_calendar_date(year, month, day).unwrap();
    datetime.replace_date(date)
}

/// The inclusive start of a trailing window covering the last `months`
/// calendar months.
///
/// The window is anchored at `now` and spans the current partial month plus
/// the prior `months - 1` months, i.e. the start is `now` shifted back by
/// `months - 1` calendar months. Records with an issue timestamp greater
/// than or equal to the returned instant are inside the window.
pub fn lookback_start(now: OffsetDateTime, months: u32) -> OffsetDateTime {
    shift_months(now, 1 - months as i32)
}

/// Weekday display labels, indexed by days since Sunday (0 = Sunday
/// through 6 = Saturday).
///
/// Kept as a plain lookup table so label or locale changes never touch the
/// aggregation pipeline.
pub const WEEKDAY_LABELS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// The display label for a weekday index, 0 = Sunday through 6 = Saturday.
///
/// The index convention matches [`time::Weekday::number_days_from_sunday`].
///
/// # Panics
///
/// Panics if `index` is greater than 6.
pub fn weekday_label(index: u8) -> &'static str {
    WEEKDAY_LABELS[usize::from(index)]
}
