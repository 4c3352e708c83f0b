//! Conflict-free combination generation.
//!
//! Turns an ordered list of courses into every weekly timetable that takes
//! exactly one option per course with no two options sharing a slot.
//!
//! # Provenance
//! Cells contributed by the course at position `i` carry
//! [`Tag::for_course(i)`](crate::models::Tag::for_course), so presentation
//! code can color a timetable by course.

mod engine;

pub use engine::{generate_combinations, CombinationEngine};
