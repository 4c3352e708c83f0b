//! Course and week-option models.
//!
//! A course offers several mutually exclusive weekly meeting patterns
//! ([`WeekOption`]s). A timetable takes exactly one option per course.

use serde::{Deserialize, Serialize};

use super::{Tag, TimeGrid};

/// One alternative weekly schedule for a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekOption {
    /// Option name (e.g. "Week 2").
    pub name: String,
    /// Meeting slots of this option.
    pub grid: TimeGrid,
}

impl WeekOption {
    /// Creates an empty option.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            grid: TimeGrid::new().with_label(name.clone()),
            name,
        }
    }

    /// Creates an option from an existing grid.
    pub fn with_grid(name: impl Into<String>, grid: TimeGrid) -> Self {
        let name = name.into();
        Self {
            grid: grid.with_label(name.clone()),
            name,
        }
    }

    /// Renames the option (grid label follows).
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.grid.set_label(self.name.clone());
    }

    /// Whether the option has no meeting slot at all.
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }
}

/// A course: a name plus its alternative week options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course name.
    pub name: String,
    /// Alternative weekly schedules, in display order.
    pub options: Vec<WeekOption>,
}

impl Course {
    /// Creates a course with no options.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    /// Adds an option.
    pub fn with_option(mut self, option: WeekOption) -> Self {
        self.options.push(option);
        self
    }

    /// Appends an option.
    pub fn add_option(&mut self, option: WeekOption) {
        self.options.push(option);
    }

    /// Replaces the option at `index`, returning the previous one.
    pub fn replace_option(&mut self, index: usize, option: WeekOption) -> Option<WeekOption> {
        let slot = self.options.get_mut(index)?;
        Some(std::mem::replace(slot, option))
    }

    /// Removes the option at `index`.
    pub fn remove_option(&mut self, index: usize) -> Option<WeekOption> {
        (index < self.options.len()).then(|| self.options.remove(index))
    }

    /// Number of options.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// All options drawn on one grid for viewing.
    ///
    /// Option `k` is tagged `k + 1`. Where options overlap, the later one
    /// is shown.
    pub fn overlay(&self) -> TimeGrid {
        let mut grid = TimeGrid::new().with_label(self.name.clone());
        for (k, option) in self.options.iter().enumerate() {
            let tag = Tag::new(k as u32 + 1);
            for (day, hour, _) in option.grid.occupied_cells() {
                // Coordinates come from a grid of the same shape.
                let _ = grid.set(day.index(), hour, tag);
            }
        }
        grid
    }
}
