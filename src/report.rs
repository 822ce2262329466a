//! Schedule reporting.
//!
//! Derives the residuals of a run straight from the finished schedule:
//! per-student missing requirements, the lunch anomaly set, aggregate
//! bucket counts, and a plain-text report for hosts to write out. Nothing
//! here is on the placement path — every number is recomputed from the
//! schedule and the student body.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

use crate::models::{MasterSchedule, Student, Teacher, SPED_SEMINAR_COURSE_ID};

/// Per-student unmet requirements.
///
/// A course counts as missing when the student demanded it (required list,
/// plus the implicit seminar for SpecialEd separate-class students) and
/// sits in no section of it. Students with nothing missing are omitted.
pub fn missing_requirements(
    schedule: &MasterSchedule,
    students: &[Student],
) -> BTreeMap<String, BTreeSet<String>> {
    let mut missing = BTreeMap::new();
    for student in students {
        let enrolled: BTreeSet<&str> = schedule
            .student_sections(&student.id)
            .iter()
            .map(|s| s.course_id.as_str())
            .collect();

        let mut unmet: BTreeSet<String> = student
            .required
            .iter()
            .filter(|c| !enrolled.contains(c.as_str()))
            .cloned()
            .collect();
        if student.needs_seminar() && !enrolled.contains(SPED_SEMINAR_COURSE_ID) {
            unmet.insert(SPED_SEMINAR_COURSE_ID.to_string());
        }

        if !unmet.is_empty() {
            missing.insert(student.id.clone(), unmet);
        }
    }
    missing
}

/// Students whose lunch count is not exactly one, with the count.
pub fn lunch_anomalies(
    schedule: &MasterSchedule,
    students: &[Student],
) -> BTreeMap<String, usize> {
    students
        .iter()
        .filter_map(|s| {
            let count = schedule.student_lunch_count(&s.id);
            (count != 1).then(|| (s.id.clone(), count))
        })
        .collect()
}

/// Distribution of students by missing-requirement count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingBuckets {
    /// Students fully scheduled.
    pub none: usize,
    /// Students missing one course.
    pub one: usize,
    /// Students missing two courses.
    pub two: usize,
    /// Students missing three courses.
    pub three: usize,
    /// Students missing more than three courses.
    pub more: usize,
}

impl MissingBuckets {
    /// Computes the distribution for a schedule and its student body.
    pub fn calculate(schedule: &MasterSchedule, students: &[Student]) -> Self {
        let missing = missing_requirements(schedule, students);
        let mut buckets = Self::default();
        for student in students {
            match missing.get(&student.id).map_or(0, |set| set.len()) {
                0 => buckets.none += 1,
                1 => buckets.one += 1,
                2 => buckets.two += 1,
                3 => buckets.three += 1,
                _ => buckets.more += 1,
            }
        }
        buckets
    }
}

/// Renders the full plain-text report: faculty roster, sections,
/// per-student schedules, missing requirements, lunch anomalies, and the
/// bucket summary.
pub fn render_report(
    schedule: &MasterSchedule,
    students: &[Student],
    faculty: &[Teacher],
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "== Faculty ==");
    for t in faculty {
        let certs: Vec<String> = t.certs.iter().map(|c| c.to_string()).collect();
        let _ = writeln!(out, "{}  [{}]", t.id, certs.join(", "));
    }

    let _ = writeln!(out, "\n== Sections ==");
    for s in schedule.sections() {
        let teacher = s.teacher.as_deref().unwrap_or("-");
        let co = s
            .co_teacher
            .as_deref()
            .map(|c| format!(" + {c}"))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{}  {:<4} {}  {}{}  {}/{}",
            s.id,
            s.period.label(),
            s.course_id,
            teacher,
            co,
            s.enrollment(),
            s.max_size
        );
    }

    let _ = writeln!(out, "\n== Student schedules ==");
    for student in students {
        let sections: Vec<String> = schedule
            .student_sections(&student.id)
            .iter()
            .map(|s| format!("{} ({})", s.course_id, s.period))
            .collect();
        let _ = writeln!(out, "{}: {}", student.id, sections.join(", "));
    }

    let missing = missing_requirements(schedule, students);
    let _ = writeln!(out, "\n== Missing requirements ==");
    for (student_id, courses) in &missing {
        let list: Vec<&str> = courses.iter().map(|c| c.as_str()).collect();
        let _ = writeln!(out, "{}: {}", student_id, list.join(", "));
    }

    let anomalies = lunch_anomalies(schedule, students);
    let _ = writeln!(out, "\n== Lunch anomalies ==");
    for (student_id, count) in &anomalies {
        let _ = writeln!(out, "{student_id}: {count} lunch sections");
    }

    let buckets = MissingBuckets::calculate(schedule, students);
    let _ = writeln!(out, "\n== Summary ==");
    let _ = writeln!(out, "fully scheduled: {}", buckets.none);
    let _ = writeln!(out, "missing 1: {}", buckets.one);
    let _ = writeln!(out, "missing 2: {}", buckets.two);
    let _ = writeln!(out, "missing 3: {}", buckets.three);
    let _ = writeln!(out, "missing >3: {}", buckets.more);

    out
}
