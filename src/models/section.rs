//! Section model.
//!
//! A section is a scheduled instance of a course: one period, one room,
//! an optional primary teacher (seeded lunch sections run unstaffed), an
//! optional LBS1 co-teacher, and a student roster. The effective size cap
//! is fixed at construction as the smaller of the course cap and the room
//! cap.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Course, Period, Room};

/// Learning environment of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    /// General education.
    GenEd,
    /// General education with an LBS1 co-teacher supporting IEP students.
    Inclusion,
    /// Taught primarily by LBS1 staff.
    SeparateClass,
}

/// A scheduled instance of a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Unique section identifier (assigned by the schedule).
    pub id: String,
    /// The course this section offers.
    pub course_id: String,
    /// Meeting period.
    pub period: Period,
    /// Assigned room.
    pub room: Room,
    /// Primary teacher, if staffed.
    pub teacher: Option<String>,
    /// LBS1 co-teacher (inclusion sections only).
    pub co_teacher: Option<String>,
    /// Learning environment.
    pub environment: Environment,
    /// Effective cap: min(course max, room max).
    pub max_size: usize,
    /// Enrolled student ids.
    pub roster: BTreeSet<String>,
}

impl Section {
    /// Creates an empty section for a course at a period in a room.
    ///
    /// The cap is derived here and never recomputed.
    pub fn new(id: impl Into<String>, course: &Course, period: Period, room: Room) -> Self {
        let max_size = course.max_size.min(room.max_capacity());
        Self {
            id: id.into(),
            course_id: course.id.clone(),
            period,
            room,
            teacher: None,
            co_teacher: None,
            environment: Environment::GenEd,
            max_size,
            roster: BTreeSet::new(),
        }
    }

    /// Sets the primary teacher.
    pub fn with_teacher(mut self, teacher_id: impl Into<String>) -> Self {
        self.teacher = Some(teacher_id.into());
        self
    }

    /// Sets the environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Whether the roster has room for one more student.
    pub fn has_space(&self) -> bool {
        self.roster.len() < self.max_size
    }

    /// Whether the given student is enrolled.
    pub fn has_student(&self, student_id: &str) -> bool {
        self.roster.contains(student_id)
    }

    /// Whether the given teacher serves this section as primary or
    /// co-teacher.
    pub fn has_teacher(&self, teacher_id: &str) -> bool {
        self.teacher.as_deref() == Some(teacher_id)
            || self.co_teacher.as_deref() == Some(teacher_id)
    }

    /// Current enrollment.
    pub fn enrollment(&self) -> usize {
        self.roster.len()
    }
}
