//! Course model and catalog.
//!
//! A course names the endorsement its teacher must hold and its section
//! size band. Two sentinel courses exist in every catalog: `lunch` (no
//! endorsement, cafeteria-sized) and `sped-seminar` (LBS1, small).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Department, Endorsement, RoomType};

/// Course id of the lunch sentinel.
pub const LUNCH_COURSE_ID: &str = "lunch";
/// Course id of the SPED-seminar sentinel.
pub const SPED_SEMINAR_COURSE_ID: &str = "sped-seminar";

/// Default minimum section size.
pub const DEFAULT_MIN_SECTION_SIZE: usize = 20;
/// Default maximum section size.
pub const DEFAULT_MAX_SECTION_SIZE: usize = 30;

/// A course offering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Endorsement the primary teacher must hold. `None` only for lunch.
    pub endorsement: Option<Endorsement>,
    /// Minimum viable section size.
    pub min_size: usize,
    /// Maximum section size.
    pub max_size: usize,
}

impl Course {
    /// Creates a course with default size band.
    pub fn new(id: impl Into<String>, endorsement: Endorsement) -> Self {
        Self {
            id: id.into(),
            endorsement: Some(endorsement),
            min_size: DEFAULT_MIN_SECTION_SIZE,
            max_size: DEFAULT_MAX_SECTION_SIZE,
        }
    }

    /// Sets the minimum section size.
    pub fn with_min_size(mut self, min: usize) -> Self {
        self.min_size = min;
        self
    }

    /// Sets the maximum section size.
    pub fn with_max_size(mut self, max: usize) -> Self {
        self.max_size = max;
        self
    }

    /// The lunch sentinel: no endorsement, one cafeteria-scale block.
    pub fn lunch() -> Self {
        Self {
            id: LUNCH_COURSE_ID.to_string(),
            endorsement: None,
            min_size: 0,
            max_size: 360,
        }
    }

    /// The SPED-seminar sentinel: LBS1-taught, small.
    pub fn sped_seminar() -> Self {
        Self {
            id: SPED_SEMINAR_COURSE_ID.to_string(),
            endorsement: Some(Endorsement::Lbs1),
            min_size: 0,
            max_size: 15,
        }
    }

    /// The department this course belongs to (`None` for lunch).
    pub fn department(&self) -> Option<Department> {
        self.endorsement.as_ref().map(|e| e.department())
    }

    /// The room type this course requires, derived from its department.
    pub fn room_type(&self) -> RoomType {
        match self.department() {
            None => RoomType::Cafeteria,
            Some(Department::Science) => RoomType::Lab,
            Some(Department::Art) => RoomType::ArtRoom,
            Some(Department::PhysEd) => RoomType::Gym,
            Some(Department::SpecialEd) => RoomType::SpedRoom,
            Some(_) => RoomType::Standard,
        }
    }
}

/// The course catalog: courses keyed by id, with the sentinels always
/// present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    courses: BTreeMap<String, Course>,
}

impl Catalog {
    /// Builds a catalog from the caller's offerings, inserting the lunch
    /// and SPED-seminar sentinels if absent.
    pub fn new(courses: impl IntoIterator<Item = Course>) -> Self {
        let mut map: BTreeMap<String, Course> = courses
            .into_iter()
            .map(|c| (c.id.clone(), c))
            .collect();
        map.entry(LUNCH_COURSE_ID.to_string())
            .or_insert_with(Course::lunch);
        map.entry(SPED_SEMINAR_COURSE_ID.to_string())
            .or_insert_with(Course::sped_seminar);
        Self { courses: map }
    }

    /// Looks up a course by id.
    pub fn get(&self, course_id: &str) -> Option<&Course> {
        self.courses.get(course_id)
    }

    /// Whether the catalog offers the course.
    pub fn contains(&self, course_id: &str) -> bool {
        self.courses.contains_key(course_id)
    }

    /// Iterates courses in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// Number of courses, sentinels included.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog holds only the sentinels.
    pub fn is_empty(&self) -> bool {
        self.courses.len() <= 2
    }
}
