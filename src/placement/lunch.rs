//! Lunch overlay.
//!
//! Every student belongs in exactly one lunch section. After a student is
//! registered anywhere, the engine checks their lunch status and fills it
//! from the free half blocks; a student whose half blocks are all taken
//! (or whose remaining lunch sections are full) is surfaced in the
//! anomaly report rather than failing the run.

use tracing::warn;

use crate::models::MasterSchedule;

/// Ensures a student holds a lunch seat, registering one if missing.
///
/// Candidate sections are the lunch sections with space whose half block
/// the student has free, taken in stable (id) order. Returns `false` when
/// no seat can be found; the caller records the anomaly.
pub fn ensure_lunch(schedule: &mut MasterSchedule, student_id: &str) -> bool {
    if schedule.student_lunch_count(student_id) >= 1 {
        return true;
    }

    let free = schedule.student_free_periods(student_id);
    let target = schedule
        .lunch_sections()
        .iter()
        .find(|s| s.has_space() && free.contains(&s.period))
        .map(|s| s.id.clone());

    match target {
        Some(section_id) => {
            schedule.register_student(&section_id, student_id);
            true
        }
        None => {
            warn!(student_id, "no lunch seat available");
            false
        }
    }
}
