//! Filter and rank the combination set.
//!
//! # Filter
//! A timetable survives iff
//! - it has no class on an excluded day,
//! - its longest day is at most `max_longest_day`,
//! - it uses at most `max_occupied_days` days.
//!
//! # Sort
//! Ascending by the configured [`SortKey`](super::SortKey). The sort is
//! stable: equal keys keep their input order.

use log::debug;
use serde::{Deserialize, Serialize};

use super::FilterSortConfig;
use crate::models::{GridMetrics, TimeGrid, Weekday};

/// A timetable in its final ranked position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedTimetable {
    /// 1-based position in the ranking.
    pub rank: usize,
    /// Index of this timetable in the combination set that was ranked.
    pub source: usize,
    /// The timetable, labelled "Timetable {rank}".
    pub grid: TimeGrid,
    /// Metrics of `grid`.
    pub metrics: GridMetrics,
}

impl RankedTimetable {
    /// List entry text: label, total hours and day count.
    pub fn display_label(&self) -> String {
        format!(
            "{}    Hours: {}    Days: {}",
            self.grid.label(),
            self.metrics.total_hours,
            self.metrics.occupied_days
        )
    }
}

/// Whether `grid` passes the day mask and both upper bounds.
pub fn passes_filters(grid: &TimeGrid, config: &FilterSortConfig) -> bool {
    passes(grid, &grid.metrics(), config)
}

fn passes(grid: &TimeGrid, metrics: &GridMetrics, config: &FilterSortConfig) -> bool {
    let excluded_day_used = Weekday::ALL
        .into_iter()
        .any(|d| !config.includes(d) && grid.is_day_occupied(d));

    !excluded_day_used
        && metrics.longest_day <= config.max_longest_day
        && metrics.occupied_days <= config.max_occupied_days
}

/// Timetables that pass the filters, in input order.
pub fn filter_combinations(combinations: &[TimeGrid], config: &FilterSortConfig) -> Vec<TimeGrid> {
    combinations
        .iter()
        .filter(|g| passes_filters(g, config))
        .cloned()
        .collect()
}

/// Filters, sorts and relabels the combination set.
///
/// Inputs are not modified. Returns an empty vector when nothing passes.
///
/// # Example
/// ```
/// use u_timetable::models::{Tag, TimeGrid, Weekday};
/// use u_timetable::ranking::{rank_results, FilterSortConfig};
///
/// let mut long = TimeGrid::new();
/// long.fill(Weekday::Monday, 0..6, Tag::new(1)).unwrap();
/// let mut short = TimeGrid::new();
/// short.fill(Weekday::Tuesday, 0..2, Tag::new(1)).unwrap();
///
/// let ranked = rank_results(&[long, short], &FilterSortConfig::default());
/// assert_eq!(ranked[0].metrics.total_hours, 2);
/// assert_eq!(ranked[0].grid.label(), "Timetable 1");
/// ```
pub fn rank_results(combinations: &[TimeGrid], config: &FilterSortConfig) -> Vec<RankedTimetable> {
    let mut survivors: Vec<(usize, GridMetrics, &TimeGrid)> = combinations
        .iter()
        .enumerate()
        .map(|(i, g)| (i, g.metrics(), g))
        .filter(|(_, m, g)| passes(g, m, config))
        .collect();

    // stable: equal keys keep input order
    survivors.sort_by_key(|(_, m, _)| config.sort_key.value(m));

    debug!(
        "ranked {} of {} combinations by {:?}",
        survivors.len(),
        combinations.len(),
        config.sort_key
    );

    survivors
        .into_iter()
        .enumerate()
        .map(|(i, (source, metrics, grid))| {
            let rank = i + 1;
            RankedTimetable {
                rank,
                source,
                grid: grid.clone().with_label(format!("Timetable {rank}")),
                metrics,
            }
        })
        .collect()
}
