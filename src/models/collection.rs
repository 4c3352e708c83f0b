//! The user's course collection.
//!
//! An ordered list of courses with the editing operations a front end
//! needs (new / duplicate / remove). The collection is passed explicitly
//! to the combination and ranking functions; nothing holds a global
//! "current collection".

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Course, TimeGrid, WeekOption};
use crate::combination::generate_combinations;
use crate::generator::DemoGenerator;
use crate::ranking::{rank_results, FilterSortConfig, RankedTimetable};
use crate::validation::{validate_collection, ValidationResult};

const COPY_PREFIX: &str = "+Copy of ";

/// All courses entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCollection {
    courses: Vec<Course>,
}

impl UserCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Courses in order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Mutable access to the courses.
    pub fn courses_mut(&mut self) -> &mut Vec<Course> {
        &mut self.courses
    }

    /// Appends a course.
    pub fn add_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Removes the course at `index`.
    pub fn remove_course(&mut self, index: usize) -> Option<Course> {
        (index < self.courses.len()).then(|| self.courses.remove(index))
    }

    /// Appends "Course N" with a single empty option "Week 1".
    pub fn new_course(&mut self) -> &mut Course {
        let course = Course::new(format!("Course {}", self.courses.len() + 1))
            .with_option(WeekOption::new("Week 1"));
        self.push(course)
    }

    /// Appends an empty option to the course at `index`.
    ///
    /// Named "Week N" after the option count; skips ahead by one if that
    /// name is already taken.
    pub fn new_week(&mut self, index: usize) -> Option<&mut WeekOption> {
        let course = self.courses.get_mut(index)?;
        let count = course.option_count();
        let mut name = format!("Week {}", count + 1);
        if course.options.iter().any(|o| o.name == name) {
            name = format!("Week {}", count + 2);
        }
        course.add_option(WeekOption::new(name));
        course.options.last_mut()
    }

    /// Appends a deep copy of the course at `index`, named "+Copy of ...".
    pub fn duplicate_course(&mut self, index: usize) -> Option<&mut Course> {
        let mut copy = self.courses.get(index)?.clone();
        copy.name = format!("{COPY_PREFIX}{}", copy.name);
        Some(self.push(copy))
    }

    /// Appends a copy of one option to its own course, named "+Copy of ...".
    pub fn duplicate_week(&mut self, index: usize, option: usize) -> Option<&mut WeekOption> {
        let course = self.courses.get_mut(index)?;
        let mut copy = course.options.get(option)?.clone();
        copy.rename(format!("{COPY_PREFIX}{}", copy.name));
        course.add_option(copy);
        course.options.last_mut()
    }

    /// Appends a randomly generated demo course.
    pub fn generate_course<R: Rng>(&mut self, rng: &mut R) -> &mut Course {
        let course = DemoGenerator::default().course(self.courses.len() + 1, rng);
        self.push(course)
    }

    /// Runs the pre-generation input checks.
    pub fn validate(&self) -> ValidationResult {
        validate_collection(&self.courses)
    }

    /// Every conflict-free timetable for this collection.
    pub fn combinations(&self) -> Vec<TimeGrid> {
        generate_combinations(&self.courses)
    }

    /// Generates, filters and ranks timetables in one call.
    pub fn results(&self, config: &FilterSortConfig) -> Vec<RankedTimetable> {
        rank_results(&self.combinations(), config)
    }

    fn push(&mut self, course: Course) -> &mut Course {
        self.courses.push(course);
        let last = self.courses.len() - 1;
        &mut self.courses[last]
    }
}
