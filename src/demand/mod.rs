//! Demand prioritization.
//!
//! Each student's course demands become registration tickets, scored
//! globally and placed in descending priority order. Scoring combines two
//! signals: scarcity (courses projected to need fewer sections schedule
//! first, while the room supply is still open) and IEP weight (inclusion
//! and separate-class demands outrank gen-ed demands for the same course).
//!
//! # Score
//!
//! With `estimate(c) = 1 + tickets(c) / room_cap(c)` and
//! `base(c) = max_estimate - estimate(c)`:
//!
//! | Flags          | Priority            |
//! |----------------|---------------------|
//! | gen-ed         | `base`              |
//! | inclusion      | `(base + 2) * 2`    |
//! | separate-class | `(base + 2) * 3`    |
//! | elective       | any of the above −1 |
//!
//! Separate-class always beats gen-ed for the same course:
//! `(b + 2) * 3 > b` for every `b ≥ 0`. Ties break by student weight
//! (separate-class services count five-fold), then by student id, so the
//! placement order is insensitive to how the caller ordered the student
//! body. A single student's equal-score tickets keep their registration
//! order.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::collections::BTreeMap;

use crate::models::{Catalog, Student, SPED_SEMINAR_COURSE_ID};

/// A single (student, course) demand with its IEP flags and score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// Demanding student.
    pub student_id: String,
    /// Demanded course.
    pub course_id: String,
    /// Whether the demand came from the elective list.
    pub elective: bool,
    /// Whether the student takes this course's department as inclusion.
    pub inclusion: bool,
    /// Whether the student takes this course's department as
    /// separate-class.
    pub separate_class: bool,
    /// Computed placement priority (higher places first).
    pub priority: i64,
}

/// Projected section count for a course: one section plus one more per
/// full room of demand.
pub fn section_count_estimate(ticket_count: usize, room_cap: usize) -> usize {
    1 + ticket_count / room_cap.max(1)
}

/// Builds the unscored ticket list in student input order.
///
/// Required courses come first per student, then electives when
/// `include_electives` is set. Students with a SpecialEd separate-class
/// designation get an implicit seminar ticket after their listed demands.
/// Demands for courses missing from the catalog are skipped (validation
/// rejects them before a real run).
pub fn build_tickets(
    students: &[Student],
    catalog: &Catalog,
    include_electives: bool,
) -> Vec<Ticket> {
    let mut tickets = Vec::new();

    for student in students {
        let demands = student
            .required
            .iter()
            .map(|c| (c, false))
            .chain(
                student
                    .electives
                    .iter()
                    .filter(|_| include_electives)
                    .map(|c| (c, true)),
            );

        for (course_id, elective) in demands {
            let Some(course) = catalog.get(course_id) else {
                continue;
            };
            let dept = course.department();
            tickets.push(Ticket {
                student_id: student.id.clone(),
                course_id: course_id.clone(),
                elective,
                inclusion: dept.is_some_and(|d| student.has_inclusion_in(d)),
                separate_class: dept.is_some_and(|d| student.has_separate_class_in(d)),
                priority: 0,
            });
        }

        if student.needs_seminar() {
            tickets.push(Ticket {
                student_id: student.id.clone(),
                course_id: SPED_SEMINAR_COURSE_ID.to_string(),
                elective: false,
                inclusion: false,
                separate_class: true,
                priority: 0,
            });
        }
    }

    tickets
}

/// Scores every ticket and returns the list in placement order.
///
/// Ties on score and student weight fall back to student id, so shuffling
/// the student body does not change the output. The sort is stable, which
/// pins a single student's equal-score tickets to registration order.
pub fn prioritize(mut tickets: Vec<Ticket>, students: &[Student], catalog: &Catalog) -> Vec<Ticket> {
    // Demand per course.
    let mut per_course: BTreeMap<String, usize> = BTreeMap::new();
    for t in &tickets {
        *per_course.entry(t.course_id.clone()).or_insert(0) += 1;
    }

    // Section-count estimates and the scarcity ceiling.
    let estimates: BTreeMap<String, usize> = per_course
        .iter()
        .map(|(course_id, &count)| {
            let cap = catalog
                .get(course_id)
                .map(|c| c.room_type().max_capacity())
                .unwrap_or(1);
            (course_id.clone(), section_count_estimate(count, cap))
        })
        .collect();
    let max_estimate = estimates.values().copied().max().unwrap_or(1);

    for t in &mut tickets {
        let base = (max_estimate - estimates[t.course_id.as_str()]) as i64;
        let mut score = if t.separate_class {
            (base + 2) * 3
        } else if t.inclusion {
            (base + 2) * 2
        } else {
            base
        };
        if t.elective {
            score -= 1;
        }
        t.priority = score;
    }

    let student_weight: BTreeMap<&str, usize> = students
        .iter()
        .map(|s| (s.id.as_str(), s.priority()))
        .collect();

    tickets.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| {
                let wa = student_weight.get(a.student_id.as_str()).unwrap_or(&0);
                let wb = student_weight.get(b.student_id.as_str()).unwrap_or(&0);
                wb.cmp(wa)
            })
            .then_with(|| a.student_id.cmp(&b.student_id))
    });

    tickets
}
