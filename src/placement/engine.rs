//! Greedy placement engine.
//!
//! # Algorithm
//!
//! 1. Score every (student, course) demand and sort globally (scarce
//!    courses and IEP services first).
//! 2. For each demand, join the least-loaded open section at a period the
//!    student has free; otherwise create a section, picking the period by
//!    department preference and the teacher by fill-the-busiest-first.
//! 3. Inclusion demands promote their section and attach an LBS1
//!    co-teacher, rolling the registration back if none is available.
//! 4. Every registration is followed by lunch enforcement.
//!
//! A demand that cannot be placed is recorded and skipped, never an
//! error. Given the same inputs and seed the engine produces an
//! identical schedule: demand order, section ids, teacher choice, and the
//! per-step PRNG are all deterministic.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems",
//!   Ch. 4: Priority Dispatching
//! - Kingston (2013), "Educational Timetabling", in "Automated Scheduling
//!   and Planning", Springer SCI 505

use std::collections::BTreeSet;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::constraints::{teacher_can_take_gened, teacher_can_take_sped};
use super::inclusion::promote_to_inclusion;
use super::lunch::ensure_lunch;
use crate::demand::{build_tickets, prioritize};
use crate::models::{
    room_of_type, Catalog, Course, Department, Environment, MasterSchedule, Period, Room, Section,
    Student, Teacher,
};

/// A demand the engine could not place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmetDemand {
    /// Demanding student.
    pub student_id: String,
    /// Course that could not be placed.
    pub course_id: String,
    /// Why placement failed.
    pub reason: String,
}

/// Result of a placement run.
#[derive(Debug, Clone)]
pub struct PlacementOutcome {
    /// The finished schedule.
    pub schedule: MasterSchedule,
    /// Demands dropped during the run, in drop order.
    pub unmet: Vec<UnmetDemand>,
    /// Students left without a lunch seat, in id order.
    pub without_lunch: Vec<String>,
}

/// Priority-driven greedy section placer.
///
/// Owns the immutable inputs (catalog, faculty, rooms) and the run
/// configuration. `run` seeds a fresh schedule and places every demand.
///
/// # Example
///
/// ```
/// use master_schedule::models::{Catalog, Course, Endorsement, Student, Teacher};
/// use master_schedule::placement::PlacementEngine;
///
/// let catalog = Catalog::new([Course::new("algebra-1", Endorsement::Math)]);
/// let faculty = vec![Teacher::new("t-1").with_cert(Endorsement::Math)];
/// let students = vec![Student::new("s-1", "9").with_required("algebra-1")];
///
/// let engine = PlacementEngine::new(catalog, faculty, vec![]).with_seed(7);
/// let outcome = engine.run(&students);
/// assert!(outcome.unmet.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    catalog: Catalog,
    faculty: Vec<Teacher>,
    rooms: Vec<Room>,
    seed: u64,
    include_electives: bool,
}

impl PlacementEngine {
    /// Creates an engine over the given inputs with seed 0 and
    /// required-only scheduling.
    pub fn new(catalog: Catalog, faculty: Vec<Teacher>, rooms: Vec<Room>) -> Self {
        Self {
            catalog,
            faculty,
            rooms,
            seed: 0,
            include_electives: false,
        }
    }

    /// Sets the run seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enables elective scheduling after the required pass.
    pub fn with_electives(mut self, include: bool) -> Self {
        self.include_electives = include;
        self
    }

    /// Places every demand and returns the finished schedule with its
    /// residuals.
    pub fn run(&self, students: &[Student]) -> PlacementOutcome {
        let mut schedule = MasterSchedule::seeded(&self.catalog, &self.rooms);
        let tickets = prioritize(
            build_tickets(students, &self.catalog, self.include_electives),
            students,
            &self.catalog,
        );

        info!(
            students = students.len(),
            tickets = tickets.len(),
            faculty = self.faculty.len(),
            seed = self.seed,
            "placement run starting"
        );

        let mut unmet = Vec::new();

        for (step, ticket) in tickets.iter().enumerate() {
            let already_placed = schedule
                .student_sections(&ticket.student_id)
                .iter()
                .any(|s| s.course_id == ticket.course_id);
            if already_placed {
                continue;
            }
            let Some(course) = self.catalog.get(&ticket.course_id) else {
                continue;
            };

            let mut rng = self.step_rng(step as u64);
            let placed = if ticket.separate_class {
                self.place_separate_class(&mut schedule, &ticket.student_id, course, &mut rng)
            } else if ticket.inclusion {
                self.place_inclusion(&mut schedule, &ticket.student_id, course, &mut rng)
            } else {
                self.place_gened(&mut schedule, &ticket.student_id, course, &mut rng)
            };

            match placed {
                Ok(section_id) => {
                    debug!(
                        student_id = %ticket.student_id,
                        course_id = %ticket.course_id,
                        section_id = %section_id,
                        "demand placed"
                    );
                    ensure_lunch(&mut schedule, &ticket.student_id);
                }
                Err(reason) => {
                    debug!(
                        student_id = %ticket.student_id,
                        course_id = %ticket.course_id,
                        %reason,
                        "demand dropped"
                    );
                    unmet.push(UnmetDemand {
                        student_id: ticket.student_id.clone(),
                        course_id: ticket.course_id.clone(),
                        reason,
                    });
                }
            }
        }

        // Students whose demands never fired (or never existed) still eat.
        // Swept in id order so the outcome is input-order insensitive.
        let mut without_lunch = BTreeSet::new();
        let mut ids: Vec<&str> = students.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        for id in ids {
            if !ensure_lunch(&mut schedule, id) {
                without_lunch.insert(id.to_string());
            }
        }

        info!(
            sections = schedule.len(),
            unmet = unmet.len(),
            without_lunch = without_lunch.len(),
            "placement run finished"
        );

        PlacementOutcome {
            schedule,
            unmet,
            without_lunch: without_lunch.into_iter().collect(),
        }
    }

    /// One PRNG per logical step, derived from (run seed, step index).
    fn step_rng(&self, step: u64) -> SmallRng {
        SmallRng::seed_from_u64(self.seed.wrapping_add(step.wrapping_mul(0x9E37_79B9_7F4A_7C15)))
    }

    /// Places a gen-ed demand: attach to an open section if a period
    /// lines up, otherwise create one.
    fn place_gened(
        &self,
        schedule: &mut MasterSchedule,
        student_id: &str,
        course: &Course,
        rng: &mut SmallRng,
    ) -> Result<String, String> {
        let free = schedule.student_free_periods(student_id);

        // Separate-class rosters are reserved for students with that
        // service; gen-ed demands join gen-ed and inclusion sections only.
        if let Some(section_id) = attach_target(schedule, &course.id, &free, |s| {
            s.environment != Environment::SeparateClass
        }) {
            schedule.register_student(&section_id, student_id);
            return Ok(section_id);
        }

        let period = self
            .choose_period(course.department(), &free, rng)
            .ok_or_else(|| format!("no free period for '{}'", course.id))?;
        let teacher_id = self
            .pick_gened_teacher(schedule, course, period)
            .ok_or_else(|| {
                format!(
                    "no certified teacher free at {} for '{}'",
                    period, course.id
                )
            })?;

        let room = room_of_type(&self.rooms, course.room_type());
        let section_id = schedule.add_section(course, period, room);
        schedule
            .section_mut(&section_id)
            .expect("section just added")
            .teacher = Some(teacher_id);
        schedule.register_student(&section_id, student_id);
        Ok(section_id)
    }

    /// Places an inclusion demand: existing inclusion sections first, then
    /// the gen-ed path followed by promotion. A failed promotion rolls the
    /// registration back and reports the demand unmet.
    fn place_inclusion(
        &self,
        schedule: &mut MasterSchedule,
        student_id: &str,
        course: &Course,
        rng: &mut SmallRng,
    ) -> Result<String, String> {
        let free = schedule.student_free_periods(student_id);

        if let Some(section_id) = attach_target(schedule, &course.id, &free, |s| {
            s.environment == Environment::Inclusion
        }) {
            schedule.register_student(&section_id, student_id);
            return Ok(section_id);
        }

        let section_id = self.place_gened(schedule, student_id, course, rng)?;
        if promote_to_inclusion(schedule, &section_id, &self.faculty) {
            Ok(section_id)
        } else {
            schedule.deregister_student(&section_id, student_id);
            Err(format!("no LBS1 co-teacher for '{}'", course.id))
        }
    }

    /// Places a separate-class demand into LBS1-taught sections only.
    ///
    /// Seeded seminar sections start unstaffed; the first placement into
    /// one attaches a primary, and sections that cannot be staffed are
    /// skipped.
    fn place_separate_class(
        &self,
        schedule: &mut MasterSchedule,
        student_id: &str,
        course: &Course,
        rng: &mut SmallRng,
    ) -> Result<String, String> {
        let free = schedule.student_free_periods(student_id);

        let mut candidates: Vec<(Period, usize, String, bool)> = schedule
            .open_sections_of_course(&course.id)
            .into_iter()
            .filter(|s| s.environment == Environment::SeparateClass && free.contains(&s.period))
            .map(|s| (s.period, s.enrollment(), s.id.clone(), s.teacher.is_some()))
            .collect();
        candidates.sort();

        for (period, _, section_id, staffed) in candidates {
            if !staffed {
                match self.pick_sped_teacher(schedule, period) {
                    Some(teacher_id) => {
                        schedule
                            .section_mut(&section_id)
                            .expect("candidate section exists")
                            .teacher = Some(teacher_id);
                    }
                    None => continue,
                }
            }
            schedule.register_student(&section_id, student_id);
            return Ok(section_id);
        }

        let period = self
            .choose_period(course.department(), &free, rng)
            .ok_or_else(|| format!("no free period for '{}'", course.id))?;
        let teacher_id = self
            .pick_sped_teacher(schedule, period)
            .ok_or_else(|| format!("no LBS1 teacher free at {} for '{}'", period, course.id))?;

        let room = room_of_type(&self.rooms, course.room_type());
        let section_id = schedule.add_section(course, period, room);
        let section = schedule
            .section_mut(&section_id)
            .expect("section just added");
        section.teacher = Some(teacher_id);
        section.environment = Environment::SeparateClass;
        schedule.register_student(&section_id, student_id);
        Ok(section_id)
    }

    /// Period for a new section, by department preference over the
    /// student's free full blocks.
    ///
    /// Science and Art take the earliest, Math and World-Language the
    /// latest, everything else a seeded-uniform pick. Half blocks are the
    /// lunch/seminar band and are used only when no full block is free.
    fn choose_period(
        &self,
        dept: Option<Department>,
        free: &[Period],
        rng: &mut SmallRng,
    ) -> Option<Period> {
        let full: Vec<Period> = free.iter().copied().filter(|p| p.is_full_block()).collect();
        let pool: Vec<Period> = if full.is_empty() { free.to_vec() } else { full };
        if pool.is_empty() {
            return None;
        }
        match dept {
            Some(Department::Science) | Some(Department::Art) => pool.first().copied(),
            Some(Department::Math) | Some(Department::WorldLanguage) => pool.last().copied(),
            _ => Some(pool[rng.random_range(0..pool.len())]),
        }
    }

    /// Busiest certified teacher who can take the section. Ties on load
    /// go to faculty order; concentrating load keeps prep counts tight.
    fn pick_gened_teacher(
        &self,
        schedule: &MasterSchedule,
        course: &Course,
        period: Period,
    ) -> Option<String> {
        let mut best: Option<(&Teacher, usize)> = None;
        for t in &self.faculty {
            if !teacher_can_take_gened(schedule, t, course, period) {
                continue;
            }
            let load = schedule.teacher_sections(&t.id).len();
            if best.map_or(true, |(_, b)| load > b) {
                best = Some((t, load));
            }
        }
        best.map(|(t, _)| t.id.clone())
    }

    /// Busiest LBS1 teacher free at the period.
    fn pick_sped_teacher(&self, schedule: &MasterSchedule, period: Period) -> Option<String> {
        let mut best: Option<(&Teacher, usize)> = None;
        for t in &self.faculty {
            if !teacher_can_take_sped(schedule, t, period) {
                continue;
            }
            let load = schedule.teacher_sections(&t.id).len();
            if best.map_or(true, |(_, b)| load > b) {
                best = Some((t, load));
            }
        }
        best.map(|(t, _)| t.id.clone())
    }
}

/// Best section to join for a course: among open sections passing
/// `env_ok` at a period in `free`, the smallest period by fixed order,
/// then the least-loaded roster, then section id.
fn attach_target<F>(
    schedule: &MasterSchedule,
    course_id: &str,
    free: &[Period],
    env_ok: F,
) -> Option<String>
where
    F: Fn(&Section) -> bool,
{
    let candidates: Vec<&Section> = schedule
        .open_sections_of_course(course_id)
        .into_iter()
        .filter(|s| env_ok(s) && free.contains(&s.period))
        .collect();

    let period = candidates.iter().map(|s| s.period).min()?;
    candidates
        .into_iter()
        .filter(|s| s.period == period)
        .min_by_key(|s| (s.enrollment(), s.id.clone()))
        .map(|s| s.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Endorsement, RoomType, LUNCH_COURSE_ID, SPED_SEMINAR_COURSE_ID};
    use std::collections::BTreeMap;

    /// Checks the universal schedule invariants: roster caps, student and
    /// teacher period consistency, load caps, the gen-ed prep cap, and
    /// co-teacher credentials on inclusion sections.
    fn assert_invariants(schedule: &MasterSchedule, faculty: &[Teacher]) {
        for s in schedule.sections() {
            assert!(
                s.enrollment() <= s.max_size,
                "section {} over cap: {}/{}",
                s.id,
                s.enrollment(),
                s.max_size
            );
        }

        let student_ids: BTreeSet<String> = schedule
            .sections()
            .flat_map(|s| s.roster.iter().cloned())
            .collect();
        for student_id in &student_ids {
            let sections = schedule.student_sections(student_id);
            for (i, a) in sections.iter().enumerate() {
                for b in &sections[i + 1..] {
                    assert!(
                        !a.period.overlaps(b.period),
                        "student {student_id} double-booked: {} and {}",
                        a.id,
                        b.id
                    );
                }
            }
        }

        for t in faculty {
            let sections = schedule.teacher_sections(&t.id);
            assert!(
                sections.len() <= t.max_sections,
                "teacher {} over load cap",
                t.id
            );
            for (i, a) in sections.iter().enumerate() {
                for b in &sections[i + 1..] {
                    assert!(
                        !a.period.overlaps(b.period),
                        "teacher {} double-booked: {} and {}",
                        t.id,
                        a.id,
                        b.id
                    );
                }
            }
            if !t.is_lbs1() {
                assert!(
                    schedule.teacher_preps(&t.id).len() <= 2,
                    "teacher {} over prep cap",
                    t.id
                );
            }
        }

        let by_id: BTreeMap<&str, &Teacher> = faculty.iter().map(|t| (t.id.as_str(), t)).collect();
        for s in schedule.sections() {
            if s.environment == Environment::Inclusion {
                let co = s
                    .co_teacher
                    .as_deref()
                    .unwrap_or_else(|| panic!("inclusion section {} lacks co-teacher", s.id));
                assert!(by_id[co].is_lbs1(), "co-teacher {co} is not LBS1");
            }
        }
    }

    fn schedule_fingerprint(schedule: &MasterSchedule) -> String {
        format!("{schedule:?}")
    }

    #[test]
    fn test_empty_run_keeps_only_seeded_sections() {
        let engine = PlacementEngine::new(Catalog::new([]), vec![], vec![]);
        let outcome = engine.run(&[]);
        // Four lunch + four seminar.
        assert_eq!(outcome.schedule.len(), 8);
        assert!(outcome.unmet.is_empty());
        assert!(outcome.without_lunch.is_empty());
    }

    #[test]
    fn test_minimal_two_course_student() {
        let catalog = Catalog::new([
            Course::new("algebra-1", Endorsement::Math),
            Course::new("english-9", Endorsement::English),
        ]);
        let faculty = vec![Teacher::new("t-1")
            .with_cert(Endorsement::Math)
            .with_cert(Endorsement::English)];
        let students = vec![Student::new("s-1", "9")
            .with_required("algebra-1")
            .with_required("english-9")];

        let engine = PlacementEngine::new(catalog, faculty.clone(), vec![]).with_seed(42);
        let outcome = engine.run(&students);

        assert!(outcome.unmet.is_empty());
        assert_invariants(&outcome.schedule, &faculty);

        // Math takes the latest free full block.
        let math = &outcome.schedule.sections_of_course("algebra-1");
        assert_eq!(math.len(), 1);
        assert_eq!(math[0].period, Period::Eighth);
        assert!(math[0].has_student("s-1"));

        // English lands on a free full block that conflicts with nothing.
        let english = &outcome.schedule.sections_of_course("english-9");
        assert_eq!(english.len(), 1);
        assert!(english[0].period.is_full_block());
        assert!(!english[0].period.overlaps(math[0].period));
        assert!(english[0].has_student("s-1"));

        assert_eq!(outcome.schedule.student_lunch_count("s-1"), 1);
    }

    #[test]
    fn test_shared_section_packs_students() {
        let catalog = Catalog::new([Course::new("english-9", Endorsement::English)]);
        let faculty = vec![Teacher::new("t-1").with_cert(Endorsement::English)];
        let students: Vec<Student> = (0..25)
            .map(|i| Student::new(format!("s-{i:02}"), "9").with_required("english-9"))
            .collect();

        let engine = PlacementEngine::new(catalog, faculty.clone(), vec![]).with_seed(1);
        let outcome = engine.run(&students);

        assert!(outcome.unmet.is_empty());
        assert_invariants(&outcome.schedule, &faculty);

        let sections = outcome.schedule.sections_of_course("english-9");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].enrollment(), 25);
        assert_eq!(outcome.schedule.teacher_sections("t-1").len(), 1);
        assert_eq!(outcome.schedule.teacher_preps("t-1").len(), 1);
    }

    #[test]
    fn test_split_section_over_capacity() {
        let catalog = Catalog::new([Course::new("english-9", Endorsement::English)]);
        let faculty = vec![
            Teacher::new("t-1").with_cert(Endorsement::English),
            Teacher::new("t-2").with_cert(Endorsement::English),
        ];
        let students: Vec<Student> = (0..31)
            .map(|i| Student::new(format!("s-{i:02}"), "9").with_required("english-9"))
            .collect();

        let engine = PlacementEngine::new(catalog, faculty.clone(), vec![]).with_seed(5);
        let outcome = engine.run(&students);

        assert!(outcome.unmet.is_empty());
        assert_invariants(&outcome.schedule, &faculty);

        // Pack-first: one section fills to 30 before the second opens.
        let mut sizes: Vec<usize> = outcome
            .schedule
            .sections_of_course("english-9")
            .iter()
            .map(|s| s.enrollment())
            .collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![1, 30]);
    }

    #[test]
    fn test_prep_cap_limits_third_course() {
        let catalog = Catalog::new([
            Course::new("algebra-1", Endorsement::Math),
            Course::new("biology", Endorsement::science("biology")),
            Course::new("ceramics", Endorsement::art("visual")),
        ]);
        let faculty = vec![Teacher::new("t-1")
            .with_cert(Endorsement::Math)
            .with_cert(Endorsement::science("biology"))
            .with_cert(Endorsement::art("visual"))];
        let students = vec![Student::new("s-1", "9")
            .with_required("algebra-1")
            .with_required("biology")
            .with_required("ceramics")];

        let engine = PlacementEngine::new(catalog, faculty.clone(), vec![]).with_seed(3);
        let outcome = engine.run(&students);

        assert_invariants(&outcome.schedule, &faculty);
        assert!(outcome.schedule.teacher_preps("t-1").len() <= 2);
        // The sole teacher cannot prep all three: exactly one demand drops.
        assert_eq!(outcome.unmet.len(), 1);
        assert_eq!(outcome.unmet[0].student_id, "s-1");
    }

    #[test]
    fn test_inclusion_promotion() {
        let catalog = Catalog::new([Course::new("english-9", Endorsement::English)]);
        let faculty = vec![
            Teacher::new("t-1").with_cert(Endorsement::English),
            Teacher::new("sped-1").with_cert(Endorsement::Lbs1),
        ];
        let students = vec![Student::new("s-1", "9")
            .with_required("english-9")
            .with_inclusion(Department::English)];

        let engine = PlacementEngine::new(catalog, faculty.clone(), vec![]).with_seed(9);
        let outcome = engine.run(&students);

        assert!(outcome.unmet.is_empty());
        assert_invariants(&outcome.schedule, &faculty);

        let sections = outcome.schedule.sections_of_course("english-9");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].environment, Environment::Inclusion);
        assert_eq!(sections[0].co_teacher.as_deref(), Some("sped-1"));
        assert!(sections[0].has_student("s-1"));
    }

    #[test]
    fn test_inclusion_fallback_rolls_back() {
        let catalog = Catalog::new([Course::new("english-9", Endorsement::English)]);
        let faculty = vec![Teacher::new("t-1").with_cert(Endorsement::English)];
        let students = vec![Student::new("s-1", "9")
            .with_required("english-9")
            .with_inclusion(Department::English)];

        let engine = PlacementEngine::new(catalog, faculty.clone(), vec![]).with_seed(9);
        let outcome = engine.run(&students);

        assert_invariants(&outcome.schedule, &faculty);
        assert_eq!(outcome.unmet.len(), 1);
        assert_eq!(outcome.unmet[0].course_id, "english-9");

        // The section stays gen-ed and the student is off its roster.
        for s in outcome.schedule.sections_of_course("english-9") {
            assert_eq!(s.environment, Environment::GenEd);
            assert!(!s.has_student("s-1"));
        }
    }

    #[test]
    fn test_separate_class_uses_lbs1_primary() {
        let catalog = Catalog::new([Course::new("english-essentials", Endorsement::English)]);
        let faculty = vec![
            Teacher::new("t-1").with_cert(Endorsement::English),
            Teacher::new("sped-1").with_cert(Endorsement::Lbs1),
        ];
        let students = vec![Student::new("s-1", "9")
            .with_required("english-essentials")
            .with_separate_class(Department::English)];

        let engine = PlacementEngine::new(catalog, faculty.clone(), vec![]).with_seed(2);
        let outcome = engine.run(&students);

        assert!(outcome.unmet.is_empty());
        assert_invariants(&outcome.schedule, &faculty);

        let sections = outcome.schedule.sections_of_course("english-essentials");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].environment, Environment::SeparateClass);
        assert_eq!(sections[0].teacher.as_deref(), Some("sped-1"));
    }

    #[test]
    fn test_seminar_student_joins_seeded_band() {
        let catalog = Catalog::new([]);
        let faculty = vec![Teacher::new("sped-1").with_cert(Endorsement::Lbs1)];
        let students =
            vec![Student::new("s-1", "9").with_separate_class(Department::SpecialEd)];

        let engine = PlacementEngine::new(catalog, faculty.clone(), vec![]).with_seed(0);
        let outcome = engine.run(&students);

        assert!(outcome.unmet.is_empty());
        assert_invariants(&outcome.schedule, &faculty);

        let seminar = outcome
            .schedule
            .student_sections("s-1")
            .into_iter()
            .find(|s| s.course_id == SPED_SEMINAR_COURSE_ID)
            .expect("seminar placement");
        assert!(seminar.period.is_half_block());
        assert_eq!(seminar.teacher.as_deref(), Some("sped-1"));
        // No extra seminar sections were created.
        assert_eq!(
            outcome
                .schedule
                .sections_of_course(SPED_SEMINAR_COURSE_ID)
                .len(),
            4
        );
    }

    #[test]
    fn test_missing_teacher_leaves_course_unmet_only() {
        let catalog = Catalog::new([
            Course::new("algebra-1", Endorsement::Math),
            Course::new("latin-1", Endorsement::world_language("latin")),
        ]);
        // Nobody teaches Latin.
        let faculty = vec![Teacher::new("t-1").with_cert(Endorsement::Math)];
        let students = vec![Student::new("s-1", "9")
            .with_required("algebra-1")
            .with_required("latin-1")];

        let engine = PlacementEngine::new(catalog, faculty.clone(), vec![]).with_seed(11);
        let outcome = engine.run(&students);

        assert_invariants(&outcome.schedule, &faculty);
        assert_eq!(outcome.unmet.len(), 1);
        assert_eq!(outcome.unmet[0].course_id, "latin-1");
        assert_eq!(outcome.schedule.sections_of_course("algebra-1").len(), 1);
        assert_eq!(outcome.schedule.student_lunch_count("s-1"), 1);
    }

    #[test]
    fn test_fully_free_student_gets_everything() {
        let catalog = Catalog::new([
            Course::new("algebra-1", Endorsement::Math),
            Course::new("english-9", Endorsement::English),
            Course::new("biology", Endorsement::science("biology")),
            Course::new("world-history", Endorsement::social_science("history")),
        ]);
        let faculty = vec![
            Teacher::new("t-1")
                .with_cert(Endorsement::Math)
                .with_cert(Endorsement::English),
            Teacher::new("t-2")
                .with_cert(Endorsement::science("biology"))
                .with_cert(Endorsement::social_science("history")),
        ];
        let students = vec![Student::new("s-1", "9")
            .with_required("algebra-1")
            .with_required("english-9")
            .with_required("biology")
            .with_required("world-history")];

        let engine = PlacementEngine::new(catalog, faculty.clone(), vec![]).with_seed(13);
        let outcome = engine.run(&students);

        assert!(outcome.unmet.is_empty());
        assert_invariants(&outcome.schedule, &faculty);
        // Four courses plus lunch.
        assert_eq!(outcome.schedule.student_sections("s-1").len(), 5);
    }

    #[test]
    fn test_determinism_same_seed() {
        let catalog = Catalog::new([
            Course::new("algebra-1", Endorsement::Math),
            Course::new("english-9", Endorsement::English),
            Course::new("biology", Endorsement::science("biology")),
        ]);
        let faculty = vec![
            Teacher::new("t-1")
                .with_cert(Endorsement::Math)
                .with_cert(Endorsement::English),
            Teacher::new("t-2")
                .with_cert(Endorsement::science("biology"))
                .with_cert(Endorsement::English),
        ];
        let students: Vec<Student> = (0..20)
            .map(|i| {
                Student::new(format!("s-{i:02}"), "9")
                    .with_required("algebra-1")
                    .with_required("english-9")
                    .with_required("biology")
            })
            .collect();

        let engine = PlacementEngine::new(catalog, faculty, vec![]).with_seed(77);
        let first = engine.run(&students);
        let second = engine.run(&students);
        assert_eq!(
            schedule_fingerprint(&first.schedule),
            schedule_fingerprint(&second.schedule)
        );
        assert_eq!(first.unmet, second.unmet);
    }

    #[test]
    fn test_student_order_shuffle_is_neutral() {
        let catalog = Catalog::new([
            Course::new("algebra-1", Endorsement::Math),
            Course::new("english-9", Endorsement::English),
        ]);
        let faculty = vec![Teacher::new("t-1")
            .with_cert(Endorsement::Math)
            .with_cert(Endorsement::English)];
        let forward: Vec<Student> = (0..10)
            .map(|i| {
                Student::new(format!("s-{i:02}"), "9")
                    .with_required("algebra-1")
                    .with_required("english-9")
            })
            .collect();
        let mut reversed = forward.clone();
        reversed.reverse();

        let engine = PlacementEngine::new(catalog, faculty, vec![]).with_seed(21);
        let a = engine.run(&forward);
        let b = engine.run(&reversed);
        assert_eq!(
            schedule_fingerprint(&a.schedule),
            schedule_fingerprint(&b.schedule)
        );
    }

    #[test]
    fn test_randomized_inputs_hold_invariants() {
        // Property-style sweep: randomized demand over a fixed catalog and
        // faculty must never break a schedule invariant.
        let catalog = Catalog::new([
            Course::new("algebra-1", Endorsement::Math),
            Course::new("geometry", Endorsement::Math),
            Course::new("english-9", Endorsement::English),
            Course::new("biology", Endorsement::science("biology")),
            Course::new("spanish-1", Endorsement::world_language("spanish")),
            Course::new("ceramics", Endorsement::art("visual")),
            Course::new("pe-9", Endorsement::PhysEd),
        ]);
        let course_ids = [
            "algebra-1",
            "geometry",
            "english-9",
            "biology",
            "spanish-1",
            "ceramics",
            "pe-9",
        ];
        let depts = [
            Department::Math,
            Department::English,
            Department::Science,
            Department::WorldLanguage,
        ];
        let faculty = vec![
            Teacher::new("t-math")
                .with_cert(Endorsement::Math)
                .with_cert(Endorsement::world_language("spanish")),
            Teacher::new("t-eng")
                .with_cert(Endorsement::English)
                .with_cert(Endorsement::science("biology")),
            Teacher::new("t-arts")
                .with_cert(Endorsement::art("visual"))
                .with_cert(Endorsement::PhysEd),
            Teacher::new("t-sped-1").with_cert(Endorsement::Lbs1),
            Teacher::new("t-sped-2").with_cert(Endorsement::Lbs1),
        ];

        for trial in 0..8u64 {
            let mut rng = SmallRng::seed_from_u64(trial);
            let students: Vec<Student> = (0..30)
                .map(|i| {
                    let mut s = Student::new(format!("s-{trial}-{i:02}"), "9");
                    let demand_count = rng.random_range(1..=4);
                    for _ in 0..demand_count {
                        let course = course_ids[rng.random_range(0..course_ids.len())];
                        if !s.required.iter().any(|c| c == course) {
                            s = s.with_required(course);
                        }
                    }
                    if rng.random_range(0..5) == 0 {
                        s = s.with_inclusion(depts[rng.random_range(0..depts.len())]);
                    }
                    if rng.random_range(0..8) == 0 {
                        s = s.with_separate_class(Department::SpecialEd);
                    }
                    s
                })
                .collect();

            let engine = PlacementEngine::new(catalog.clone(), faculty.clone(), vec![])
                .with_seed(trial * 31 + 7);
            let outcome = engine.run(&students);
            assert_invariants(&outcome.schedule, &faculty);

            // Everyone who could eat got exactly one lunch.
            for s in &students {
                let count = outcome.schedule.student_lunch_count(&s.id);
                if outcome.without_lunch.contains(&s.id) {
                    assert_eq!(count, 0);
                } else {
                    assert_eq!(count, 1);
                }
            }
        }
    }

    #[test]
    fn test_lunch_sections_survive_empty_demand() {
        // A student with no demands still draws a lunch seat.
        let engine = PlacementEngine::new(Catalog::new([]), vec![], vec![]);
        let students = vec![Student::new("s-1", "9")];
        let outcome = engine.run(&students);
        assert_eq!(outcome.schedule.student_lunch_count("s-1"), 1);
        assert_eq!(
            outcome.schedule.sections_of_course(LUNCH_COURSE_ID).len(),
            4
        );
    }

    #[test]
    fn test_science_prefers_early_blocks() {
        let catalog = Catalog::new([Course::new("biology", Endorsement::science("biology"))]);
        let faculty = vec![Teacher::new("t-1").with_cert(Endorsement::science("biology"))];
        let students = vec![Student::new("s-1", "9").with_required("biology")];

        let engine = PlacementEngine::new(catalog, faculty, vec![]).with_seed(17);
        let outcome = engine.run(&students);
        let sections = outcome.schedule.sections_of_course("biology");
        assert_eq!(sections[0].period, Period::First);
    }

    #[test]
    fn test_new_sections_use_course_rooms() {
        let catalog = Catalog::new([Course::new("biology", Endorsement::science("biology"))]);
        let faculty = vec![Teacher::new("t-1").with_cert(Endorsement::science("biology"))];
        let rooms = vec![
            Room::new("101", RoomType::Standard),
            Room::new("210", RoomType::Lab),
        ];
        let students = vec![Student::new("s-1", "9").with_required("biology")];

        let engine = PlacementEngine::new(catalog, faculty, rooms).with_seed(17);
        let outcome = engine.run(&students);
        let sections = outcome.schedule.sections_of_course("biology");
        assert_eq!(sections[0].room.number, "210");
        assert_eq!(sections[0].room.room_type, RoomType::Lab);
        // Lab room caps below the course default.
        assert_eq!(sections[0].max_size, 24);
    }
}
