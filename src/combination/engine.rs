//! Incremental cross-product with pairwise overlap pruning.
//!
//! # Algorithm
//! 1. Seed the accumulator with one empty grid.
//! 2. For each course, pair every option with every grid of the previous
//!    stage. Pairs sharing an occupied cell are dropped. Survivors are
//!    merged into a new grid and appended to the next stage.
//! 3. After the last course the accumulator holds every conflict-free
//!    timetable.
//!
//! Options are the outer loop, previous-stage grids the inner loop. This
//! order only determines the initial "Week k" labels.
//!
//! # Complexity
//! O(prod |options|) grids in the worst case. There is no bound or early
//! cut: every conflict-free partial combination is materialized.

use log::{debug, trace, warn};

use crate::models::{Course, Tag, TimeGrid};

/// Staged accumulator of conflict-free combinations.
///
/// Each [`absorb`](Self::absorb) call consumes the previous stage and
/// builds a new one; grids already in a stage are never modified.
///
/// # Example
/// ```
/// use u_timetable::combination::CombinationEngine;
/// use u_timetable::models::{Course, Tag, TimeGrid, WeekOption, Weekday};
///
/// let mut mon = TimeGrid::new();
/// mon.fill(Weekday::Monday, 0..2, Tag::new(1)).unwrap();
/// let mut tue = TimeGrid::new();
/// tue.fill(Weekday::Tuesday, 0..2, Tag::new(1)).unwrap();
///
/// let mut engine = CombinationEngine::new();
/// engine.absorb(0, &Course::new("A").with_option(WeekOption::with_grid("Week 1", mon)));
/// engine.absorb(1, &Course::new("B").with_option(WeekOption::with_grid("Week 1", tue)));
/// assert_eq!(engine.combinations().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CombinationEngine {
    valid: Vec<TimeGrid>,
    steps: usize,
}

impl Default for CombinationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CombinationEngine {
    /// Creates an engine seeded with a single empty grid.
    pub fn new() -> Self {
        Self {
            valid: vec![TimeGrid::new()],
            steps: 0,
        }
    }

    /// Folds one course into the accumulator.
    ///
    /// `course_index` is the course's position in the collection; its
    /// cells are tagged [`Tag::for_course`]`(course_index)` in the result.
    /// A course with no options empties the accumulator, and every later
    /// step then stays empty.
    pub fn absorb(&mut self, course_index: usize, course: &Course) {
        let prev = std::mem::take(&mut self.valid);
        self.steps += 1;

        if course.options.is_empty() {
            warn!(
                "course '{}' has no week options; no timetable can include it",
                course.name
            );
            return;
        }

        let tag = Tag::for_course(course_index);
        let mut next = Vec::new();

        for (k, option) in course.options.iter().enumerate() {
            let contribution = option.grid.retagged(tag);
            for (j, grid) in prev.iter().enumerate() {
                if contribution.conflicts_with(grid) {
                    trace!(
                        "course '{}' option {} conflicts with combination {}",
                        course.name,
                        k,
                        j
                    );
                    continue;
                }
                let mut merged = contribution.merged_with(grid);
                merged.set_label(format!("Week {}", next.len() + 1));
                next.push(merged);
            }
        }

        debug!(
            "step {}: course '{}' ({} options) x {} combinations -> {} conflict-free",
            self.steps,
            course.name,
            course.options.len(),
            prev.len(),
            next.len()
        );
        self.valid = next;
    }

    /// Current stage of the accumulator.
    ///
    /// Before any course is absorbed this is the single empty seed grid.
    pub fn combinations(&self) -> &[TimeGrid] {
        &self.valid
    }

    /// Consumes the engine, returning the current stage.
    pub fn into_combinations(self) -> Vec<TimeGrid> {
        self.valid
    }

    /// Number of courses absorbed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

/// Builds every conflict-free timetable taking one option per course.
///
/// Inputs are not modified; every returned grid is newly allocated.
/// Returns an empty vector when `courses` is empty, when some course has
/// no options, or when every combination conflicts.
pub fn generate_combinations(courses: &[Course]) -> Vec<TimeGrid> {
    if courses.is_empty() {
        debug!("no courses given; nothing to combine");
        return Vec::new();
    }

    let mut engine = CombinationEngine::new();
    for (i, course) in courses.iter().enumerate() {
        engine.absorb(i, course);
        if engine.combinations().is_empty() {
            // Later steps cannot recover from an empty stage.
            debug!("no combinations left after course '{}'", course.name);
            break;
        }
    }
    engine.into_combinations()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{WeekOption, Weekday, DAYS_PER_WEEK, HOURS_PER_DAY};

    fn option(name: &str, slots: &[(Weekday, std::ops::Range<usize>)]) -> WeekOption {
        let mut grid = TimeGrid::new();
        for (day, hours) in slots {
            grid.fill(*day, hours.clone(), Tag::new(1)).unwrap();
        }
        WeekOption::with_grid(name, grid)
    }

    fn course(name: &str, options: Vec<WeekOption>) -> Course {
        let mut c = Course::new(name);
        for o in options {
            c.add_option(o);
        }
        c
    }

    fn assert_tags_from_courses(result: &TimeGrid, courses: &[Course]) {
        // every occupied cell carries the tag of an input course
        for day in 0..DAYS_PER_WEEK {
            for hour in 0..HOURS_PER_DAY {
                let tag = result.get(day, hour).unwrap();
                if tag.is_occupied() {
                    let idx = tag.value() as usize - 1;
                    assert!(idx < courses.len());
                }
            }
        }
    }

    #[test]
    fn test_two_adjacent_courses() {
        let courses = vec![
            course("A", vec![option("Week 1", &[(Weekday::Monday, 0..1)])]),
            course("B", vec![option("Week 1", &[(Weekday::Monday, 1..2)])]),
        ];
        let result = generate_combinations(&courses);

        assert_eq!(result.len(), 1);
        let g = &result[0];
        assert_eq!(g.get(0, 0), Ok(Tag::new(1)));
        assert_eq!(g.get(0, 1), Ok(Tag::new(2)));
        assert_eq!(g.total_hours(), 2);
        assert_eq!(g.occupied_day_count(), 1);
    }

    #[test]
    fn test_overlap_yields_nothing() {
        let courses = vec![
            course("A", vec![option("Week 1", &[(Weekday::Monday, 0..3)])]),
            course("B", vec![option("Week 1", &[(Weekday::Monday, 1..2)])]),
        ];
        assert!(generate_combinations(&courses).is_empty());
    }

    #[test]
    fn test_full_product_without_conflicts() {
        let courses = vec![
            course(
                "A",
                vec![
                    option("Week 1", &[(Weekday::Monday, 0..1)]),
                    option("Week 2", &[(Weekday::Tuesday, 0..1)]),
                ],
            ),
            course(
                "B",
                vec![
                    option("Week 1", &[(Weekday::Wednesday, 0..1)]),
                    option("Week 2", &[(Weekday::Thursday, 0..1)]),
                    option("Week 3", &[(Weekday::Friday, 0..1)]),
                ],
            ),
        ];
        let result = generate_combinations(&courses);
        assert_eq!(result.len(), 6);
        for g in &result {
            assert_tags_from_courses(g, &courses);
            assert_eq!(g.occupied_day_count(), 2);
        }
    }

    #[test]
    fn test_partial_pruning() {
        // B's first option clashes with A's first option only
        let courses = vec![
            course(
                "A",
                vec![
                    option("Week 1", &[(Weekday::Monday, 0..2)]),
                    option("Week 2", &[(Weekday::Tuesday, 0..2)]),
                ],
            ),
            course(
                "B",
                vec![
                    option("Week 1", &[(Weekday::Monday, 1..3)]),
                    option("Week 2", &[(Weekday::Friday, 5..6)]),
                ],
            ),
        ];
        let result = generate_combinations(&courses);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_enumeration_order_and_labels() {
        let courses = vec![
            course(
                "A",
                vec![
                    option("Week 1", &[(Weekday::Monday, 0..1)]),
                    option("Week 2", &[(Weekday::Tuesday, 0..1)]),
                ],
            ),
            course(
                "B",
                vec![
                    option("Week 1", &[(Weekday::Wednesday, 0..1)]),
                    option("Week 2", &[(Weekday::Thursday, 0..1)]),
                ],
            ),
        ];
        let result = generate_combinations(&courses);
        let labels: Vec<_> = result.iter().map(|g| g.label()).collect();
        assert_eq!(labels, vec!["Week 1", "Week 2", "Week 3", "Week 4"]);

        // option of B is the outer loop: B1+A1, B1+A2, B2+A1, B2+A2
        assert!(result[0].is_day_occupied(Weekday::Wednesday));
        assert!(result[0].is_day_occupied(Weekday::Monday));
        assert!(result[1].is_day_occupied(Weekday::Tuesday));
        assert!(result[2].is_day_occupied(Weekday::Thursday));
        assert!(result[2].is_day_occupied(Weekday::Monday));
    }

    #[test]
    fn test_course_without_options_propagates_empty() {
        let courses = vec![
            course("A", vec![option("Week 1", &[(Weekday::Monday, 0..1)])]),
            Course::new("Empty"),
            course("C", vec![option("Week 1", &[(Weekday::Friday, 0..1)])]),
        ];
        assert!(generate_combinations(&courses).is_empty());

        let mut engine = CombinationEngine::new();
        for (i, c) in courses.iter().enumerate() {
            engine.absorb(i, c);
        }
        assert_eq!(engine.steps(), 3);
        assert!(engine.combinations().is_empty());
    }

    #[test]
    fn test_empty_option_is_noop() {
        let courses = vec![
            course("A", vec![option("Week 1", &[(Weekday::Monday, 0..3)])]),
            course("B", vec![WeekOption::new("Week 1")]),
        ];
        let result = generate_combinations(&courses);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].total_hours(), 3);
        assert_eq!(result[0].get(0, 0), Ok(Tag::new(1)));
    }

    #[test]
    fn test_single_course_yields_its_options() {
        let courses = vec![course(
            "A",
            vec![
                option("Week 1", &[(Weekday::Monday, 0..2)]),
                option("Week 2", &[(Weekday::Monday, 1..4)]),
            ],
        )];
        let result = generate_combinations(&courses);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].total_hours(), 2);
        assert_eq!(result[1].total_hours(), 3);
    }

    #[test]
    fn test_inputs_untouched() {
        let courses = vec![
            course("A", vec![option("Week 1", &[(Weekday::Monday, 0..1)])]),
            course("B", vec![option("Week 1", &[(Weekday::Monday, 1..2)])]),
        ];
        let before = courses.clone();
        let _ = generate_combinations(&courses);
        assert_eq!(courses, before);
    }

    #[test]
    fn test_no_courses() {
        assert!(generate_combinations(&[]).is_empty());
        let engine = CombinationEngine::new();
        assert_eq!(engine.steps(), 0);
        assert_eq!(engine.combinations().len(), 1);
        assert!(engine.combinations()[0].is_empty());
    }
}
