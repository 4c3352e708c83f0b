//! Random demo data.
//!
//! Fabricates plausible courses for trying the tool out. Generated data
//! goes through the same pipeline as user-entered courses.
//!
//! Each generated course has a fixed number of options. Within a course,
//! every option meets on the same number of days (the base count, plus
//! one with probability 1/2), each meeting being one contiguous block.
//! Two consecutive day picks are never the same day.

use rand::Rng;

use crate::models::{Course, Tag, TimeGrid, WeekOption, Weekday, DAYS_PER_WEEK, HOURS_PER_DAY};

/// Demo course generator settings.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use u_timetable::generator::DemoGenerator;
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let course = DemoGenerator::default().course(1, &mut rng);
/// assert_eq!(course.name, "Course 1");
/// assert_eq!(course.options.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoGenerator {
    /// Options per generated course.
    pub options_per_course: usize,
    /// Minimum meeting days per option.
    pub base_days: usize,
    /// Length of each meeting block (hours).
    pub block_hours: usize,
}

impl Default for DemoGenerator {
    fn default() -> Self {
        Self {
            options_per_course: 3,
            base_days: 1,
            block_hours: 3,
        }
    }
}

impl DemoGenerator {
    /// Generates "Course {number}".
    pub fn course<R: Rng>(&self, number: usize, rng: &mut R) -> Course {
        let days = (self.base_days + usize::from(rng.random_bool(0.5))).min(DAYS_PER_WEEK);
        let block = self.block_hours.clamp(1, HOURS_PER_DAY);
        let mut last_day: Option<usize> = None;

        let mut course = Course::new(format!("Course {number}"));
        for n in 1..=self.options_per_course {
            let mut grid = TimeGrid::new();
            for _ in 0..days {
                let day = loop {
                    let d = rng.random_range(0..DAYS_PER_WEEK);
                    if Some(d) != last_day {
                        break d;
                    }
                };
                last_day = Some(day);

                let start = rng.random_range(0..=HOURS_PER_DAY - block);
                if let Some(weekday) = Weekday::from_index(day) {
                    // start + block <= HOURS_PER_DAY
                    let _ = grid.fill(weekday, start..start + block, Tag::new(1));
                }
            }
            course.add_option(WeekOption::with_grid(format!("Week {n}"), grid));
        }
        course
    }
}
