//! Scheduling domain models.
//!
//! Core value types for building a high-school master schedule: the bell
//! schedule (`Period`), the certification vocabulary (`Endorsement`,
//! `Department`), the four immutable input entities (`Teacher`, `Student`,
//! `Course`, `Room`), the `Section` unit of placement, and the evolving
//! `MasterSchedule` state the engine works against.
//!
//! Teachers, students, courses, and rooms are created once by the caller
//! and never change during a run; sections are created by the placement
//! engine and mutated only by adding students and teachers.

mod course;
mod endorsement;
mod period;
mod room;
mod schedule;
mod section;
mod student;
mod teacher;

pub use course::{
    Catalog, Course, DEFAULT_MAX_SECTION_SIZE, DEFAULT_MIN_SECTION_SIZE, LUNCH_COURSE_ID,
    SPED_SEMINAR_COURSE_ID,
};
pub use endorsement::{Department, Endorsement};
pub use period::{non_overlapping_with, DaySegment, Period};
pub use room::{room_of_type, Room, RoomType};
pub use schedule::MasterSchedule;
pub use section::{Environment, Section};
pub use student::Student;
pub use teacher::{Teacher, DEFAULT_MAX_SECTIONS};
