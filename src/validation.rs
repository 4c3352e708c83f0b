//! Input checks for a course collection.
//!
//! Front ends run these before generating timetables so they can show a
//! clear message. Detects:
//! - Fewer than two courses
//! - Courses with no week options
//! - Week options with no class time
//!
//! The combination engine does not call this; it accepts any input and
//! returns an empty result where no timetable exists.

use crate::models::Course;

/// Minimum number of courses for a meaningful timetable.
pub const MIN_COURSES: usize = 2;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Fewer than [`MIN_COURSES`] courses.
    InsufficientCourses,
    /// A course offers no week option.
    EmptyOptionSet,
    /// A week option has no class time.
    EmptyWeekOption,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a collection before timetable generation.
///
/// Checks:
/// 1. At least [`MIN_COURSES`] courses
/// 2. Every course has at least one option
/// 3. Every option occupies at least one slot
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_collection(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();

    if courses.len() < MIN_COURSES {
        errors.push(ValidationError::new(
            ValidationErrorKind::InsufficientCourses,
            format!(
                "At least {MIN_COURSES} courses are needed to build a timetable, found {}",
                courses.len()
            ),
        ));
    }

    for course in courses {
        if course.options.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyOptionSet,
                format!("Course '{}' has no week options", course.name),
            ));
        }

        for option in &course.options {
            if option.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EmptyWeekOption,
                    format!(
                        "Week option '{}' of course '{}' contains no class times",
                        option.name, course.name
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
