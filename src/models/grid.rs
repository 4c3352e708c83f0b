//! Weekly occupancy grid.
//!
//! A [`TimeGrid`] is a fixed 5x13 table: one row per weekday (Monday to
//! Friday) and one column per hour slot of the daily teaching window.
//! Each cell holds a [`Tag`]: zero means free, any other value names the
//! source that occupies the slot.
//!
//! # Derived metrics
//!
//! All ranking inputs are span-based, not cell counts:
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | span(day) | last occupied hour - first occupied hour + 1, or 0 |
//! | longest day | max span over the five days |
//! | total hours | sum of spans over the five days |
//! | occupied days | days with at least one occupied cell |

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Number of weekday rows (Monday to Friday).
pub const DAYS_PER_WEEK: usize = 5;

/// Number of hour columns in the daily window.
pub const HOURS_PER_DAY: usize = 13;

/// Provenance tag of a grid cell.
///
/// Opaque to the core beyond zero/nonzero. Presentation code maps tags
/// to colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(u32);

impl Tag {
    /// The free-slot tag.
    pub const EMPTY: Tag = Tag(0);

    /// Creates a tag from a raw value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Tag identifying the course at `index` in a collection (`index + 1`).
    pub fn for_course(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    /// Raw tag value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Whether this tag marks an occupied slot.
    #[inline]
    pub const fn is_occupied(self) -> bool {
        self.0 != 0
    }
}

/// A teaching day (grid row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All weekdays in row order.
    pub const ALL: [Weekday; DAYS_PER_WEEK] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Row index of this day (Monday = 0).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Day for a row index, or `None` if out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Summary metrics of a grid, as used by filtering and ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridMetrics {
    /// Longest single-day span (hours, gaps included).
    pub longest_day: usize,
    /// Sum of daily spans (hours, gaps included).
    pub total_hours: usize,
    /// Days with at least one occupied slot.
    pub occupied_days: usize,
}

/// A weekly occupancy grid with a display label.
///
/// Cloning produces an independent copy (cells are stored inline), so two
/// grids never share storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeGrid {
    label: String,
    cells: [[Tag; HOURS_PER_DAY]; DAYS_PER_WEEK],
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeGrid {
    /// Creates an empty grid labelled "Week".
    pub fn new() -> Self {
        Self {
            label: "Week".to_string(),
            cells: [[Tag::EMPTY; HOURS_PER_DAY]; DAYS_PER_WEEK],
        }
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replaces the display label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Reads one cell.
    ///
    /// # Errors
    /// [`GridError::OutOfRange`] if `day >= 5` or `hour >= 13`.
    pub fn get(&self, day: usize, hour: usize) -> Result<Tag, GridError> {
        self.cells
            .get(day)
            .and_then(|row| row.get(hour))
            .copied()
            .ok_or(GridError::OutOfRange { day, hour })
    }

    /// Writes one cell.
    ///
    /// # Errors
    /// [`GridError::OutOfRange`] if `day >= 5` or `hour >= 13`.
    pub fn set(&mut self, day: usize, hour: usize, tag: Tag) -> Result<(), GridError> {
        let cell = self
            .cells
            .get_mut(day)
            .and_then(|row| row.get_mut(hour))
            .ok_or(GridError::OutOfRange { day, hour })?;
        *cell = tag;
        Ok(())
    }

    /// Writes `tag` into every hour of `hours` on `day`.
    ///
    /// Nothing is written if the range reaches past the last hour.
    pub fn fill(&mut self, day: Weekday, hours: Range<usize>, tag: Tag) -> Result<(), GridError> {
        if hours.end > HOURS_PER_DAY {
            return Err(GridError::OutOfRange {
                day: day.index(),
                hour: hours.end - 1,
            });
        }
        if hours.is_empty() {
            return Ok(());
        }
        for cell in &mut self.cells[day.index()][hours] {
            *cell = tag;
        }
        Ok(())
    }

    /// The hour cells of one day.
    pub fn day(&self, day: Weekday) -> &[Tag; HOURS_PER_DAY] {
        &self.cells[day.index()]
    }

    /// Iterates `(day, hour, tag)` over occupied cells in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Weekday, usize, Tag)> + '_ {
        Weekday::ALL.into_iter().flat_map(move |day| {
            self.cells[day.index()]
                .iter()
                .enumerate()
                .filter(|(_, tag)| tag.is_occupied())
                .map(move |(hour, &tag)| (day, hour, tag))
        })
    }

    /// Whether no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.occupied_cells().next().is_none()
    }

    /// Whether `day` has at least one occupied cell.
    pub fn is_day_occupied(&self, day: Weekday) -> bool {
        self.cells[day.index()].iter().any(|t| t.is_occupied())
    }

    /// Whether both grids occupy at least one common cell.
    pub fn conflicts_with(&self, other: &TimeGrid) -> bool {
        self.cells
            .iter()
            .flatten()
            .zip(other.cells.iter().flatten())
            .any(|(a, b)| a.is_occupied() && b.is_occupied())
    }

    /// Union of two non-conflicting grids.
    ///
    /// Each cell takes the tag of whichever source occupies it. The caller
    /// checks [`conflicts_with`](Self::conflicts_with) first; on a shared
    /// cell `self` wins. The result keeps `self`'s label.
    pub fn merged_with(&self, other: &TimeGrid) -> TimeGrid {
        let mut merged = self.clone();
        for (cell, &theirs) in merged
            .cells
            .iter_mut()
            .flatten()
            .zip(other.cells.iter().flatten())
        {
            if !cell.is_occupied() {
                *cell = theirs;
            }
        }
        merged
    }

    /// Copy of this grid with every occupied cell set to `tag`.
    pub fn retagged(&self, tag: Tag) -> TimeGrid {
        let mut out = self.clone();
        for cell in out.cells.iter_mut().flatten() {
            if cell.is_occupied() {
                *cell = tag;
            }
        }
        out
    }

    /// Span of `day` from first to last occupied hour, gaps included.
    ///
    /// Returns 0 for a free day.
    pub fn span(&self, day: Weekday) -> usize {
        let row = &self.cells[day.index()];
        let first = row.iter().position(|t| t.is_occupied());
        let last = row.iter().rposition(|t| t.is_occupied());
        match (first, last) {
            (Some(first), Some(last)) => last - first + 1,
            _ => 0,
        }
    }

    /// Maximum [`span`](Self::span) over the week.
    pub fn longest_day(&self) -> usize {
        Weekday::ALL
            .into_iter()
            .map(|d| self.span(d))
            .max()
            .unwrap_or(0)
    }

    /// Sum of daily spans over the week.
    pub fn total_hours(&self) -> usize {
        Weekday::ALL.into_iter().map(|d| self.span(d)).sum()
    }

    /// Number of days with at least one occupied cell.
    pub fn occupied_day_count(&self) -> usize {
        Weekday::ALL
            .into_iter()
            .filter(|&d| self.is_day_occupied(d))
            .count()
    }

    /// All three ranking metrics at once.
    pub fn metrics(&self) -> GridMetrics {
        GridMetrics {
            longest_day: self.longest_day(),
            total_hours: self.total_hours(),
            occupied_days: self.occupied_day_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied(tag: u32) -> Tag {
        Tag::new(tag)
    }

    #[test]
    fn test_new_grid_is_empty() {
        let g = TimeGrid::new();
        assert!(g.is_empty());
        assert_eq!(g.label(), "Week");
        assert_eq!(g.metrics(), GridMetrics::default());
    }

    #[test]
    fn test_get_set_bounds() {
        let mut g = TimeGrid::new();
        g.set(4, 12, occupied(3)).unwrap();
        assert_eq!(g.get(4, 12), Ok(Tag::new(3)));

        assert_eq!(g.get(5, 0), Err(GridError::OutOfRange { day: 5, hour: 0 }));
        assert_eq!(g.get(0, 13), Err(GridError::OutOfRange { day: 0, hour: 13 }));
        assert!(g.set(7, 2, occupied(1)).is_err());
    }

    #[test]
    fn test_fill_rejects_overflow() {
        let mut g = TimeGrid::new();
        assert!(g.fill(Weekday::Monday, 11..14, occupied(1)).is_err());
        assert!(g.is_empty());
        g.fill(Weekday::Monday, 10..13, occupied(1)).unwrap();
        assert_eq!(g.span(Weekday::Monday), 3);
    }

    #[test]
    fn test_span_includes_gaps() {
        let mut g = TimeGrid::new();
        g.set(Weekday::Tuesday.index(), 2, occupied(1)).unwrap();
        g.set(Weekday::Tuesday.index(), 6, occupied(2)).unwrap();
        assert_eq!(g.span(Weekday::Tuesday), 5);
        assert_eq!(g.span(Weekday::Monday), 0);
    }

    #[test]
    fn test_metrics_mixed_week() {
        // Mon 9 only, Wed 0..=3
        let mut g = TimeGrid::new();
        g.set(0, 9, occupied(1)).unwrap();
        g.fill(Weekday::Wednesday, 0..4, occupied(2)).unwrap();

        assert_eq!(g.longest_day(), 4);
        assert_eq!(g.total_hours(), 5);
        assert_eq!(g.occupied_day_count(), 2);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a = TimeGrid::new().with_label("A");
        a.set(1, 1, occupied(1)).unwrap();
        let mut b = a.clone();
        b.set(1, 2, occupied(1)).unwrap();

        assert_eq!(a.get(1, 2), Ok(Tag::EMPTY));
        assert_eq!(b.label(), "A");
        assert_eq!(a.metrics().total_hours, 1);
        assert_eq!(b.metrics().total_hours, 2);
    }

    #[test]
    fn test_conflict_and_merge() {
        let mut a = TimeGrid::new();
        a.set(0, 0, occupied(1)).unwrap();
        let mut b = TimeGrid::new();
        b.set(0, 1, occupied(2)).unwrap();

        assert!(!a.conflicts_with(&b));
        let m = a.merged_with(&b);
        assert_eq!(m.get(0, 0), Ok(Tag::new(1)));
        assert_eq!(m.get(0, 1), Ok(Tag::new(2)));

        b.set(0, 0, occupied(2)).unwrap();
        assert!(a.conflicts_with(&b));
    }

    #[test]
    fn test_occupied_cells_order() {
        let mut g = TimeGrid::new();
        g.set(2, 5, occupied(1)).unwrap();
        g.set(0, 7, occupied(4)).unwrap();
        let cells: Vec<_> = g.occupied_cells().collect();
        assert_eq!(
            cells,
            vec![(Weekday::Monday, 7, Tag::new(4)), (Weekday::Wednesday, 5, Tag::new(1))]
        );
    }

    #[test]
    fn test_weekday_index_roundtrip() {
        for (i, d) in Weekday::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
            assert_eq!(Weekday::from_index(i), Some(*d));
        }
        assert_eq!(Weekday::from_index(5), None);
    }

    #[test]
    fn test_grid_serde() {
        let mut g = TimeGrid::new().with_label("Week 1");
        g.set(3, 4, occupied(2)).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: TimeGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
