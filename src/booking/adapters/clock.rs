//! Deterministic clock pinned to a calendar date.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use mockable::Clock;

/// Clock that always reports noon on a fixed date.
///
/// Both [`Clock::local`] and [`Clock::utc`] resolve to the same calendar
/// date, so date-based rules behave identically whichever view they read.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use concourse::booking::adapters::FixedClock;
/// use mockable::Clock;
///
/// let date = NaiveDate::from_ymd_opt(2025, 12, 1).expect("valid date");
/// let clock = FixedClock::new(date);
/// assert_eq!(clock.local().date_naive(), date);
/// assert_eq!(clock.utc().date_naive(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

const NOON: NaiveTime = match NaiveTime::from_hms_opt(12, 0, 0) {
    Some(noon) => noon,
    None => NaiveTime::MIN,
};

impl FixedClock {
    /// Creates a clock pinned to noon on `date`.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Returns the pinned date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    const fn instant(&self) -> NaiveDateTime {
        NaiveDateTime::new(self.date, NOON)
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        Local
            .from_local_datetime(&self.instant())
            .earliest()
            .unwrap_or_else(|| self.utc().with_timezone(&Local))
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.instant())
    }
}
