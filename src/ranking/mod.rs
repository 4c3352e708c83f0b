//! Filtering and ranking of generated timetables.
//!
//! Applies user preferences (days off, longest-day and day-count bounds)
//! to the combination set and orders the survivors by a single metric.
//!
//! Only single-key ranking is supported. There is no multi-objective
//! (Pareto) ordering.

mod config;
mod ranker;

pub use config::{FilterSortConfig, SortKey};
pub use ranker::{filter_combinations, passes_filters, rank_results, RankedTimetable};
