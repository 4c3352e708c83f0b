//! Weekly timetable builder.
//!
//! Given several courses, each offering alternative weekly meeting
//! patterns, finds every way to take one pattern per course without any
//! two classes overlapping, then filters and ranks those timetables by
//! user preference (days off, longest day, total hours, day count).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TimeGrid`, `Tag`, `Weekday`,
//!   `WeekOption`, `Course`, `UserCollection`
//! - **`combination`**: Conflict-free combination generation
//!   (`generate_combinations`, `CombinationEngine`)
//! - **`ranking`**: Filtering and single-key ranking
//!   (`rank_results`, `FilterSortConfig`, `SortKey`)
//! - **`validation`**: Input checks a front end runs before generation
//! - **`generator`**: Random demo courses
//!
//! # Pipeline
//!
//! ```
//! use u_timetable::models::{Course, Tag, TimeGrid, WeekOption, Weekday};
//! use u_timetable::{generate_combinations, rank_results, FilterSortConfig};
//!
//! let mut a = TimeGrid::new();
//! a.set(Weekday::Monday.index(), 0, Tag::new(1)).unwrap();
//! let mut b = TimeGrid::new();
//! b.set(Weekday::Monday.index(), 1, Tag::new(1)).unwrap();
//!
//! let courses = vec![
//!     Course::new("A").with_option(WeekOption::with_grid("Week 1", a)),
//!     Course::new("B").with_option(WeekOption::with_grid("Week 1", b)),
//! ];
//! let combinations = generate_combinations(&courses);
//! let ranked = rank_results(&combinations, &FilterSortConfig::default());
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].metrics.total_hours, 2);
//! ```
//!
//! The core performs no I/O. All model types implement serde traits so a
//! front end can persist them in whatever format it likes.

pub mod combination;
pub mod error;
pub mod generator;
pub mod models;
pub mod ranking;
pub mod validation;

pub use combination::generate_combinations;
pub use error::GridError;
pub use ranking::{rank_results, FilterSortConfig, SortKey};
