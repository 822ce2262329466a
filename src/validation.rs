//! Input validation for scheduling runs.
//!
//! Checks structural integrity of the catalog, student body, faculty, and
//! room list before placement starts. Detects:
//! - Duplicate IDs
//! - Student demands referencing courses missing from the catalog
//! - Malformed identifiers
//! - Grades outside the 7..12 range
//!
//! A run that fails validation never starts; a demand that merely cannot
//! be placed is not a validation error (it surfaces in the missing-
//! requirements report instead).
//!
//! # Reference
//! Post et al. (2014), "XHSTT: an XML archive for high school timetabling
//! problems in different countries", Annals of Operations Research 218

use std::collections::HashSet;

use crate::models::{Catalog, Room, Student, Teacher};

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
    /// Two entities share the same ID.
    DuplicateId,
    /// A student references a course the catalog does not offer.
    UnknownCourse,
    /// An identifier is empty or contains characters outside the
    /// normalized alphabet.
    MalformedId,
    /// A grade is outside 7..12.
    GradeOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Normalizes an identifier: whitespace runs collapse to single dashes and
/// every character outside `[A-Za-z0-9-]` is stripped.
pub fn normalize_id(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_dash = false;
    for ch in raw.trim().chars() {
        if ch.is_whitespace() {
            pending_dash = !out.is_empty();
        } else if ch.is_ascii_alphanumeric() || ch == '-' {
            if pending_dash {
                out.push('-');
                pending_dash = false;
            }
            out.push(ch);
        }
    }
    out
}

fn well_formed(id: &str) -> bool {
    !id.is_empty() && normalize_id(id) == id
}

/// Validates the inputs to a scheduling run.
///
/// Checks:
/// 1. No duplicate teacher, student, course, or room IDs
/// 2. All IDs are non-empty and already in normalized form
/// 3. Every required and elective course a student names exists
/// 4. Grades are within 7..12
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    catalog: &Catalog,
    students: &[Student],
    faculty: &[Teacher],
    rooms: &[Room],
) -> ValidationResult {
    let mut errors = Vec::new();

    // Course ids (catalog is keyed by id, so duplicates cannot survive
    // construction; still check id shape).
    for course in catalog.iter() {
        if !well_formed(&course.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedId,
                format!("Malformed course ID: {:?}", course.id),
            ));
        }
    }

    let mut teacher_ids = HashSet::new();
    for t in faculty {
        if !well_formed(&t.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedId,
                format!("Malformed teacher ID: {:?}", t.id),
            ));
        }
        if !teacher_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", t.id),
            ));
        }
    }

    let mut room_numbers = HashSet::new();
    for r in rooms {
        if !room_numbers.insert(r.number.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room number: {}", r.number),
            ));
        }
    }

    let mut student_ids = HashSet::new();
    for s in students {
        if !well_formed(&s.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedId,
                format!("Malformed student ID: {:?}", s.id),
            ));
        }
        if !student_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate student ID: {}", s.id),
            ));
        }

        match s.grade.parse::<u8>() {
            Ok(7..=12) => {}
            _ => errors.push(ValidationError::new(
                ValidationErrorKind::GradeOutOfRange,
                format!("Student '{}' has grade {:?}, expected 7..12", s.id, s.grade),
            )),
        }

        for course_id in s.required.iter().chain(s.electives.iter()) {
            if !catalog.contains(course_id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownCourse,
                    format!(
                        "Student '{}' references unknown course '{}'",
                        s.id, course_id
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
