//! Filter and sort preferences.

use serde::{Deserialize, Serialize};

use crate::models::{GridMetrics, Weekday, DAYS_PER_WEEK, HOURS_PER_DAY};

/// Metric used to order filtered timetables (ascending).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Fewest total hours on campus first (daily spans summed).
    #[default]
    TotalHours,
    /// Fewest teaching days first.
    OccupiedDays,
}

impl SortKey {
    /// The metric value this key sorts by.
    #[inline]
    pub fn value(self, metrics: &GridMetrics) -> usize {
        match self {
            SortKey::TotalHours => metrics.total_hours,
            SortKey::OccupiedDays => metrics.occupied_days,
        }
    }
}

/// User preferences applied to the combination set.
///
/// The default accepts every timetable and sorts by total hours.
///
/// # Example
/// ```
/// use u_timetable::models::Weekday;
/// use u_timetable::ranking::{FilterSortConfig, SortKey};
///
/// let config = FilterSortConfig::default()
///     .excluding(Weekday::Friday)
///     .with_max_occupied_days(3)
///     .with_sort_key(SortKey::OccupiedDays);
/// assert!(!config.includes(Weekday::Friday));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSortConfig {
    /// Per weekday: `false` rejects any timetable with a class that day.
    pub include_day: [bool; DAYS_PER_WEEK],
    /// Upper bound on the longest daily span (hours).
    pub max_longest_day: usize,
    /// Upper bound on the number of teaching days.
    pub max_occupied_days: usize,
    /// Ranking metric.
    pub sort_key: SortKey,
}

impl Default for FilterSortConfig {
    fn default() -> Self {
        Self {
            include_day: [true; DAYS_PER_WEEK],
            max_longest_day: HOURS_PER_DAY,
            max_occupied_days: DAYS_PER_WEEK,
            sort_key: SortKey::default(),
        }
    }
}

impl FilterSortConfig {
    /// Sets whether classes on `day` are acceptable.
    pub fn with_day(mut self, day: Weekday, include: bool) -> Self {
        self.include_day[day.index()] = include;
        self
    }

    /// Rejects timetables with classes on `day`.
    pub fn excluding(self, day: Weekday) -> Self {
        self.with_day(day, false)
    }

    /// Sets the longest-day bound.
    pub fn with_max_longest_day(mut self, hours: usize) -> Self {
        self.max_longest_day = hours;
        self
    }

    /// Sets the teaching-day bound.
    pub fn with_max_occupied_days(mut self, days: usize) -> Self {
        self.max_occupied_days = days;
        self
    }

    /// Sets the ranking metric.
    pub fn with_sort_key(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    /// Whether classes on `day` are acceptable.
    #[inline]
    pub fn includes(&self, day: Weekday) -> bool {
        self.include_day[day.index()]
    }
}
