//! High-school master schedule builder.
//!
//! Given a course catalog, a student body with per-student demands
//! (including special-education service levels), and a certified faculty,
//! the engine assigns every student to time-slotted sections of their
//! required courses, creating sections and staffing them on demand, and
//! places each student in exactly one lunch block. The output is a
//! consistent schedule plus a residual list of unmet demands.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Period`, `Endorsement`, `Teacher`,
//!   `Student`, `Course`, `Room`, `Section`, `MasterSchedule`
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling
//!   course references, malformed identifiers)
//! - **`demand`**: Registration tickets and the scarcity/IEP priority order
//! - **`placement`**: Constraint predicates, the greedy placement engine,
//!   and the inclusion/lunch overlays
//! - **`report`**: Missing-requirement and lunch-anomaly reporting
//! - **`store`**: Optional SQLite sink for finished runs
//! - **`logging`**: Tracing subscriber setup
//!
//! # Approach
//!
//! The engine is deterministic greedy, not a solver: demands are placed
//! one at a time in a global priority order, each step either joining an
//! existing section or creating one under the certification, load, prep,
//! and period-overlap constraints. Runs are reproducible byte-for-byte
//! from the same inputs and seed.

pub mod demand;
pub mod logging;
pub mod models;
pub mod placement;
pub mod report;
pub mod store;
pub mod validation;

pub use models::{
    Catalog, Course, Department, Endorsement, Environment, MasterSchedule, Period, Room, RoomType,
    Section, Student, Teacher,
};
pub use placement::{PlacementEngine, PlacementOutcome, UnmetDemand};
pub use report::{lunch_anomalies, missing_requirements, render_report, MissingBuckets};
pub use validation::{validate_input, ValidationError, ValidationErrorKind};
