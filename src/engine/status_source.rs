//! Attendance status sources.
//!
//! A [`StatusSource`] answers "what happened for this employee on this
//! working day". The matrix builder only asks about working days; rest days
//! never reach a source.

use std::collections::HashMap;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::StatusProbabilities;
use crate::error::ReportResult;
use crate::models::{AttendanceStatus, CalendarDay};

/// Classifies one (employee, working day) cell.
///
/// Implementations must return one of [`AttendanceStatus::OBSERVED`]; a
/// `RestDay` answer is rejected by the matrix builder.
pub trait StatusSource {
    /// Returns the status for the given employee on the given working day.
    fn classify(&mut self, employee_id: u32, day: &CalendarDay) -> AttendanceStatus;
}

/// Draws statuses from configurable probability bands.
///
/// Bands are checked in the order work stoppage, absent, half day; a roll
/// that falls past all three is `Present`.
///
/// # Example
///
/// ```
/// use attendance_engine::config::StatusProbabilities;
/// use attendance_engine::engine::{RandomStatusSource, StatusSource};
/// use attendance_engine::models::{AttendanceStatus, CalendarDay};
/// use chrono::NaiveDate;
///
/// let bands = StatusProbabilities { half_day: 0.0, absent: 0.0, work_stoppage: 0.0 };
/// let mut source = RandomStatusSource::seeded(bands, 7).unwrap();
/// let day = CalendarDay {
///     ordinal: 1,
///     weekday_short_name: "Mon".to_string(),
///     is_rest_day: false,
///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
/// };
/// assert_eq!(source.classify(1, &day), AttendanceStatus::Present);
/// ```
#[derive(Debug, Clone)]
pub struct RandomStatusSource<R: Rng = StdRng> {
    rng: R,
    bands: StatusProbabilities,
}

impl RandomStatusSource<StdRng> {
    /// Creates a source seeded from operating system entropy.
    pub fn from_entropy(bands: StatusProbabilities) -> ReportResult<Self> {
        Self::with_rng(bands, StdRng::from_entropy())
    }

    /// Creates a reproducible source from a fixed seed.
    pub fn seeded(bands: StatusProbabilities, seed: u64) -> ReportResult<Self> {
        Self::with_rng(bands, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomStatusSource<R> {
    /// Creates a source around an existing random number generator.
    pub fn with_rng(bands: StatusProbabilities, rng: R) -> ReportResult<Self> {
        bands.validate()?;
        Ok(Self { rng, bands })
    }

    fn draw(&mut self) -> AttendanceStatus {
        let roll: f64 = self.rng.r#gen();

        let mut threshold = self.bands.work_stoppage;
        if roll < threshold {
            return AttendanceStatus::WorkStoppage;
        }
        threshold += self.bands.absent;
        if roll < threshold {
            return AttendanceStatus::Absent;
        }
        threshold += self.bands.half_day;
        if roll < threshold {
            return AttendanceStatus::HalfDay;
        }
        AttendanceStatus::Present
    }
}

impl<R: Rng> StatusSource for RandomStatusSource<R> {
    fn classify(&mut self, _employee_id: u32, _day: &CalendarDay) -> AttendanceStatus {
        self.draw()
    }
}

/// Looks statuses up from captured attendance events.
///
/// Days with no captured event get the configured fallback status.
#[derive(Debug, Clone)]
pub struct RecordedStatusSource {
    records: HashMap<(u32, NaiveDate), AttendanceStatus>,
    missing: AttendanceStatus,
}

impl RecordedStatusSource {
    /// Creates an empty source that answers `missing` for every day.
    pub fn new(missing: AttendanceStatus) -> Self {
        Self {
            records: HashMap::new(),
            missing,
        }
    }

    /// Records the status of one employee on one date, replacing any earlier entry.
    pub fn record(&mut self, employee_id: u32, date: NaiveDate, status: AttendanceStatus) {
        self.records.insert((employee_id, date), status);
    }

    /// Returns the number of captured events.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no events have been captured.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Extend<(u32, NaiveDate, AttendanceStatus)> for RecordedStatusSource {
    fn extend<I: IntoIterator<Item = (u32, NaiveDate, AttendanceStatus)>>(&mut self, iter: I) {
        for (employee_id, date, status) in iter {
            self.record(employee_id, date, status);
        }
    }
}

impl StatusSource for RecordedStatusSource {
    fn classify(&mut self, employee_id: u32, day: &CalendarDay) -> AttendanceStatus {
        self.records
            .get(&(employee_id, day.date))
            .copied()
            .unwrap_or(self.missing)
    }
}
