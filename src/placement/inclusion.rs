//! Inclusion overlay: co-teacher assignment.
//!
//! An inclusion section is a gen-ed section with an LBS1 co-teacher
//! supporting the IEP students on its roster. The engine promotes a
//! section to inclusion after registering an inclusion-service student and
//! demotes it again (rolling the registration back) when no co-teacher
//! can be found.

use tracing::warn;

use super::constraints::teacher_can_take_sped;
use crate::models::{Environment, MasterSchedule, Period, Teacher};

/// Picks a co-teacher for a section meeting at `period`: the busiest LBS1
/// teacher who can still take the slot, skipping `exclude` (the section's
/// primary). Ties on load go to faculty order.
pub fn find_co_teacher<'a>(
    schedule: &MasterSchedule,
    faculty: &'a [Teacher],
    period: Period,
    exclude: Option<&str>,
) -> Option<&'a Teacher> {
    let mut best: Option<(&Teacher, usize)> = None;
    for t in faculty {
        if exclude == Some(t.id.as_str()) {
            continue;
        }
        if !teacher_can_take_sped(schedule, t, period) {
            continue;
        }
        let load = schedule.teacher_sections(&t.id).len();
        if best.map_or(true, |(_, b)| load > b) {
            best = Some((t, load));
        }
    }
    best.map(|(t, _)| t)
}

/// Promotes a section to the inclusion environment, attaching a
/// co-teacher if it lacks one.
///
/// Returns `true` on success. On failure the section is left exactly as
/// it was; the caller is responsible for rolling back the student
/// registration that motivated the promotion.
pub fn promote_to_inclusion(
    schedule: &mut MasterSchedule,
    section_id: &str,
    faculty: &[Teacher],
) -> bool {
    let Some(section) = schedule.section(section_id) else {
        return false;
    };
    if section.environment == Environment::Inclusion && section.co_teacher.is_some() {
        return true;
    }

    let period = section.period;
    let primary = section.teacher.clone();
    match find_co_teacher(schedule, faculty, period, primary.as_deref()) {
        Some(co) => {
            let co_id = co.id.clone();
            let section = schedule.section_mut(section_id).expect("section exists");
            section.environment = Environment::Inclusion;
            section.co_teacher = Some(co_id);
            true
        }
        None => {
            warn!(
                section_id,
                period = %period,
                "no LBS1 co-teacher available, inclusion promotion failed"
            );
            false
        }
    }
}
