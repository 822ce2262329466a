//! Schedule state.
//!
//! The evolving container every placement decision is made against:
//! sections keyed by section id, plus the auxiliary views (sections by
//! course, by teacher, by roster membership, free-period sets) the
//! constraint predicates depend on. Views are recomputed per query with
//! linear scans; at a few hundred sections the scan cost is noise and the
//! absence of incremental indexes removes a whole class of staleness bugs.
//!
//! Iteration order is deterministic (ordered map, sequential section ids),
//! which is what makes whole runs reproducible byte-for-byte.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::course::{LUNCH_COURSE_ID, SPED_SEMINAR_COURSE_ID};
use super::period::non_overlapping_with;
use super::room::room_of_type;
use super::{Catalog, Course, Environment, Period, Room, RoomType, Section};

/// The master schedule: all sections, with deterministic ids and iteration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MasterSchedule {
    sections: BTreeMap<String, Section>,
    next_seq: u32,
}

impl MasterSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a schedule seeded with one lunch section and one
    /// SPED-seminar section per half block (A–D).
    ///
    /// Lunch sections run unstaffed in the cafeteria. Seminar sections are
    /// separate-class and pick up an LBS1 primary when the first student
    /// lands in them.
    pub fn seeded(catalog: &Catalog, rooms: &[Room]) -> Self {
        let mut schedule = Self::new();

        let lunch = catalog
            .get(LUNCH_COURSE_ID)
            .cloned()
            .unwrap_or_else(Course::lunch);
        let seminar = catalog
            .get(SPED_SEMINAR_COURSE_ID)
            .cloned()
            .unwrap_or_else(Course::sped_seminar);

        for period in Period::HALF_BLOCKS {
            let cafeteria = room_of_type(rooms, RoomType::Cafeteria);
            schedule.add_section(&lunch, period, cafeteria);
        }
        for period in Period::HALF_BLOCKS {
            let sped_room = room_of_type(rooms, RoomType::SpedRoom);
            let id = schedule.add_section(&seminar, period, sped_room);
            schedule
                .section_mut(&id)
                .expect("section just added")
                .environment = Environment::SeparateClass;
        }

        schedule
    }

    /// Creates a section for a course at a period in a room and returns
    /// its fresh id.
    pub fn add_section(&mut self, course: &Course, period: Period, room: Room) -> String {
        self.next_seq += 1;
        let id = format!("sec-{:04}", self.next_seq);
        let section = Section::new(id.clone(), course, period, room);
        self.sections.insert(id.clone(), section);
        id
    }

    /// Removes a section entirely. Returns the removed section.
    pub fn remove_section(&mut self, section_id: &str) -> Option<Section> {
        self.sections.remove(section_id)
    }

    /// Looks up a section.
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.get(section_id)
    }

    /// Mutable section lookup.
    pub fn section_mut(&mut self, section_id: &str) -> Option<&mut Section> {
        self.sections.get_mut(section_id)
    }

    /// Iterates all sections in id order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the schedule holds no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Adds a student to a section's roster. Returns `false` if the
    /// section does not exist or the student was already enrolled.
    pub fn register_student(&mut self, section_id: &str, student_id: &str) -> bool {
        match self.sections.get_mut(section_id) {
            Some(s) => s.roster.insert(student_id.to_string()),
            None => false,
        }
    }

    /// Removes a student from a section's roster. Returns `true` if the
    /// student was enrolled.
    pub fn deregister_student(&mut self, section_id: &str, student_id: &str) -> bool {
        match self.sections.get_mut(section_id) {
            Some(s) => s.roster.remove(student_id),
            None => false,
        }
    }

    // ---- auxiliary views ----

    /// Sections offering a course, in id order.
    pub fn sections_of_course(&self, course_id: &str) -> Vec<&Section> {
        self.sections
            .values()
            .filter(|s| s.course_id == course_id)
            .collect()
    }

    /// Sections offering a course that still have space, in id order.
    pub fn open_sections_of_course(&self, course_id: &str) -> Vec<&Section> {
        self.sections
            .values()
            .filter(|s| s.course_id == course_id && s.has_space())
            .collect()
    }

    /// Sections a teacher serves, as primary or co-teacher.
    pub fn teacher_sections(&self, teacher_id: &str) -> Vec<&Section> {
        self.sections
            .values()
            .filter(|s| s.has_teacher(teacher_id))
            .collect()
    }

    /// Sections a student is enrolled in.
    pub fn student_sections(&self, student_id: &str) -> Vec<&Section> {
        self.sections
            .values()
            .filter(|s| s.has_student(student_id))
            .collect()
    }

    /// Distinct courses a teacher primary-teaches.
    ///
    /// Co-teaching does not add a prep; the contract's prep cap applies to
    /// primary gen-ed assignments only.
    pub fn teacher_preps(&self, teacher_id: &str) -> BTreeSet<String> {
        self.sections
            .values()
            .filter(|s| s.teacher.as_deref() == Some(teacher_id))
            .map(|s| s.course_id.clone())
            .collect()
    }

    /// Periods a teacher can still take a section at.
    pub fn teacher_free_periods(&self, teacher_id: &str) -> Vec<Period> {
        let occupied: Vec<Period> = self
            .teacher_sections(teacher_id)
            .iter()
            .map(|s| s.period)
            .collect();
        non_overlapping_with(&occupied)
    }

    /// Periods a student can still take a section at.
    pub fn student_free_periods(&self, student_id: &str) -> Vec<Period> {
        let occupied: Vec<Period> = self
            .student_sections(student_id)
            .iter()
            .map(|s| s.period)
            .collect();
        non_overlapping_with(&occupied)
    }

    /// The seeded lunch sections, in id order.
    pub fn lunch_sections(&self) -> Vec<&Section> {
        self.sections_of_course(LUNCH_COURSE_ID)
    }

    /// How many lunch sections a student sits in. Exactly one is correct.
    pub fn student_lunch_count(&self, student_id: &str) -> usize {
        self.lunch_sections()
            .iter()
            .filter(|s| s.has_student(student_id))
            .count()
    }
}
