//! Placement engine and overlays.
//!
//! The greedy core of the system: constraint predicates over the schedule
//! state, the priority-ordered placement loop, and the inclusion and lunch
//! overlays that run on top of it.
//!
//! # Usage
//!
//! ```
//! use master_schedule::models::{Catalog, Course, Endorsement, Student, Teacher};
//! use master_schedule::placement::PlacementEngine;
//!
//! let catalog = Catalog::new([Course::new("english-9", Endorsement::English)]);
//! let faculty = vec![Teacher::new("t-1").with_cert(Endorsement::English)];
//! let students = vec![Student::new("s-1", "9").with_required("english-9")];
//!
//! let outcome = PlacementEngine::new(catalog, faculty, vec![])
//!     .with_seed(42)
//!     .run(&students);
//! assert_eq!(outcome.schedule.student_lunch_count("s-1"), 1);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - de Werra (1985), "An Introduction to Timetabling",
//!   European Journal of Operational Research 19

mod constraints;
mod engine;
mod inclusion;
mod lunch;

pub use constraints::{teacher_can_take_gened, teacher_can_take_sped, MAX_GENED_PREPS};
pub use engine::{PlacementEngine, PlacementOutcome, UnmetDemand};
pub use inclusion::{find_co_teacher, promote_to_inclusion};
pub use lunch::ensure_lunch;
