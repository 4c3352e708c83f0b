//! Timetable domain models.
//!
//! Provides the data types the combination and ranking stages work on.
//!
//! # Domain Mappings
//!
//! | u-timetable | University | Training Center |
//! |-------------|-----------|-----------------|
//! | Course | Course / Unit | Class |
//! | WeekOption | Lecture Stream | Session Slot Set |
//! | TimeGrid | Weekly Timetable | Weekly Roster |
//! | Tag | Course Color | Group Marker |

mod collection;
mod course;
mod grid;

pub use collection::UserCollection;
pub use course::{Course, WeekOption};
pub use grid::{GridMetrics, Tag, TimeGrid, Weekday, DAYS_PER_WEEK, HOURS_PER_DAY};
