//! Constraint predicates.
//!
//! Pure eligibility checks over the schedule state. The placement engine
//! never mutates anything a predicate here has not approved first.

use crate::models::{Course, MasterSchedule, Period, Teacher};

/// Contract cap on distinct courses a gen-ed teacher may prep.
pub const MAX_GENED_PREPS: usize = 2;

/// Whether a teacher can primary-teach a new gen-ed section of `course`
/// at `period`.
///
/// Requires, in order: open load slot, exact endorsement match, the period
/// free, and the prep union within the contract cap.
pub fn teacher_can_take_gened(
    schedule: &MasterSchedule,
    teacher: &Teacher,
    course: &Course,
    period: Period,
) -> bool {
    if schedule.teacher_sections(&teacher.id).len() >= teacher.max_sections {
        return false;
    }
    let certified = match &course.endorsement {
        Some(e) => teacher.holds(e),
        None => false,
    };
    if !certified {
        return false;
    }
    if !schedule.teacher_free_periods(&teacher.id).contains(&period) {
        return false;
    }
    let mut preps = schedule.teacher_preps(&teacher.id);
    preps.insert(course.id.clone());
    preps.len() <= MAX_GENED_PREPS
}

/// Whether a teacher can take special-education duty (inclusion
/// co-teaching or a separate-class section) at `period`.
///
/// LBS1 plus an open load slot plus the period free. No prep condition:
/// special-education duty is exempt from the gen-ed prep cap.
pub fn teacher_can_take_sped(
    schedule: &MasterSchedule,
    teacher: &Teacher,
    period: Period,
) -> bool {
    teacher.is_lbs1()
        && schedule.teacher_sections(&teacher.id).len() < teacher.max_sections
        && schedule.teacher_free_periods(&teacher.id).contains(&period)
}
