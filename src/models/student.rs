//! Student model.
//!
//! A student carries ordered course demands (required, then elective) and
//! two department-level IEP designation sets. `inclusion` departments place
//! the student in gen-ed sections alongside an LBS1 co-teacher;
//! `separate_class` departments place them in sections taught primarily by
//! LBS1 staff. A `SpecialEd` separate-class designation additionally calls
//! for a seminar placement.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Department;

/// A student to be scheduled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier.
    pub id: String,
    /// Grade level ("7".."12").
    pub grade: String,
    /// Required course ids, in registration order.
    pub required: Vec<String>,
    /// Elective course ids, in preference order.
    pub electives: Vec<String>,
    /// Departments in which this student receives inclusion services.
    pub inclusion: BTreeSet<Department>,
    /// Departments in which this student receives separate-class services.
    pub separate_class: BTreeSet<Department>,
}

impl Student {
    /// Creates a student with no demands.
    pub fn new(id: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            grade: grade.into(),
            required: Vec::new(),
            electives: Vec::new(),
            inclusion: BTreeSet::new(),
            separate_class: BTreeSet::new(),
        }
    }

    /// Appends a required course.
    pub fn with_required(mut self, course_id: impl Into<String>) -> Self {
        self.required.push(course_id.into());
        self
    }

    /// Appends an elective course.
    pub fn with_elective(mut self, course_id: impl Into<String>) -> Self {
        self.electives.push(course_id.into());
        self
    }

    /// Adds an inclusion-service department.
    pub fn with_inclusion(mut self, dept: Department) -> Self {
        self.inclusion.insert(dept);
        self
    }

    /// Adds a separate-class-service department.
    pub fn with_separate_class(mut self, dept: Department) -> Self {
        self.separate_class.insert(dept);
        self
    }

    /// Scheduling weight: separate-class services dominate inclusion.
    ///
    /// Used as the tie-breaker between registration tickets of equal
    /// priority — heavier-service students place first.
    pub fn priority(&self) -> usize {
        self.inclusion.len() + 5 * self.separate_class.len()
    }

    /// Whether this student needs a SPED-seminar placement.
    pub fn needs_seminar(&self) -> bool {
        self.separate_class.contains(&Department::SpecialEd)
    }

    /// Whether the given department is an inclusion department for this
    /// student.
    pub fn has_inclusion_in(&self, dept: Department) -> bool {
        self.inclusion.contains(&dept)
    }

    /// Whether the given department is a separate-class department for
    /// this student.
    pub fn has_separate_class_in(&self, dept: Department) -> bool {
        self.separate_class.contains(&dept)
    }
}
