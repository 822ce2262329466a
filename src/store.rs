//! Relational persistence.
//!
//! A downstream sink for finished runs: the immutable inputs and the
//! resulting schedule land in a normalized SQLite database. Composite
//! primary keys keep certifications, enrollments, and teaching
//! assignments free of duplicates; foreign keys tie enrollments and
//! assignments to their sections. The store carries no scheduling logic.

use rusqlite::{params, Connection};
use thiserror::Error;

use crate::models::{Catalog, Environment, MasterSchedule, Room, Student, Teacher};

/// Persistence errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("schedule references unknown entity: {0}")]
    DanglingReference(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS student (
    id          TEXT PRIMARY KEY,
    grade       TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS teacher (
    id           TEXT PRIMARY KEY,
    name         TEXT NOT NULL,
    max_sections INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS certs (
    teacher_id  TEXT NOT NULL REFERENCES teacher(id),
    cert        TEXT NOT NULL,
    PRIMARY KEY (teacher_id, cert)
);

CREATE TABLE IF NOT EXISTS course (
    id          TEXT PRIMARY KEY,
    endorsement TEXT,
    min_size    INTEGER NOT NULL,
    max_size    INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS room (
    number      TEXT PRIMARY KEY,
    room_type   TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS section (
    id          TEXT PRIMARY KEY,
    course_id   TEXT NOT NULL REFERENCES course(id),
    period      TEXT NOT NULL,
    room_number TEXT NOT NULL,
    environment TEXT NOT NULL,
    max_size    INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS enrollment (
    student_id  TEXT NOT NULL,
    section_id  TEXT NOT NULL REFERENCES section(id),
    PRIMARY KEY (student_id, section_id)
);

CREATE TABLE IF NOT EXISTS assignment (
    teacher_id  TEXT NOT NULL,
    section_id  TEXT NOT NULL REFERENCES section(id),
    role        TEXT NOT NULL,
    PRIMARY KEY (teacher_id, section_id)
);

CREATE TABLE IF NOT EXISTS course_preference (
    student_id  TEXT NOT NULL,
    course_id   TEXT NOT NULL,
    rank        INTEGER NOT NULL,
    elective    INTEGER NOT NULL,
    PRIMARY KEY (student_id, course_id)
);

CREATE TABLE IF NOT EXISTS room_preference (
    course_id   TEXT NOT NULL,
    room_type   TEXT NOT NULL,
    PRIMARY KEY (course_id)
);
"#;

fn environment_label(environment: Environment) -> &'static str {
    match environment {
        Environment::GenEd => "gen-ed",
        Environment::Inclusion => "inclusion",
        Environment::SeparateClass => "separate-class",
    }
}

/// SQLite-backed sink for scheduling runs.
pub struct ScheduleStore {
    conn: Connection,
}

impl ScheduleStore {
    /// Opens (or creates) a store at the given path.
    pub fn open(path: &str) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Opens an in-memory store.
    pub fn in_memory() -> StoreResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Persists a complete run — inputs and schedule — in one
    /// transaction.
    pub fn persist(
        &mut self,
        catalog: &Catalog,
        students: &[Student],
        faculty: &[Teacher],
        rooms: &[Room],
        schedule: &MasterSchedule,
    ) -> StoreResult<()> {
        let tx = self.conn.transaction()?;

        for student in students {
            tx.execute(
                "INSERT OR REPLACE INTO student (id, grade) VALUES (?1, ?2)",
                params![student.id, student.grade],
            )?;
            for (rank, course_id) in student.required.iter().enumerate() {
                tx.execute(
                    "INSERT OR REPLACE INTO course_preference
                     (student_id, course_id, rank, elective) VALUES (?1, ?2, ?3, 0)",
                    params![student.id, course_id, rank as i64],
                )?;
            }
            for (rank, course_id) in student.electives.iter().enumerate() {
                tx.execute(
                    "INSERT OR REPLACE INTO course_preference
                     (student_id, course_id, rank, elective) VALUES (?1, ?2, ?3, 1)",
                    params![student.id, course_id, rank as i64],
                )?;
            }
        }

        for teacher in faculty {
            tx.execute(
                "INSERT OR REPLACE INTO teacher (id, name, max_sections) VALUES (?1, ?2, ?3)",
                params![teacher.id, teacher.name, teacher.max_sections as i64],
            )?;
            for cert in &teacher.certs {
                tx.execute(
                    "INSERT OR REPLACE INTO certs (teacher_id, cert) VALUES (?1, ?2)",
                    params![teacher.id, cert.to_string()],
                )?;
            }
        }

        for course in catalog.iter() {
            tx.execute(
                "INSERT OR REPLACE INTO course (id, endorsement, min_size, max_size)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    course.id,
                    course.endorsement.as_ref().map(|e| e.to_string()),
                    course.min_size as i64,
                    course.max_size as i64
                ],
            )?;
            tx.execute(
                "INSERT OR REPLACE INTO room_preference (course_id, room_type) VALUES (?1, ?2)",
                params![course.id, format!("{:?}", course.room_type())],
            )?;
        }

        for room in rooms {
            tx.execute(
                "INSERT OR REPLACE INTO room (number, room_type) VALUES (?1, ?2)",
                params![room.number, format!("{:?}", room.room_type)],
            )?;
        }

        for section in schedule.sections() {
            if !catalog.contains(&section.course_id) {
                return Err(StoreError::DanglingReference(format!(
                    "section {} references course '{}'",
                    section.id, section.course_id
                )));
            }
            tx.execute(
                "INSERT OR REPLACE INTO section
                 (id, course_id, period, room_number, environment, max_size)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    section.id,
                    section.course_id,
                    section.period.label(),
                    section.room.number,
                    environment_label(section.environment),
                    section.max_size as i64
                ],
            )?;
            if let Some(teacher_id) = &section.teacher {
                tx.execute(
                    "INSERT OR REPLACE INTO assignment (teacher_id, section_id, role)
                     VALUES (?1, ?2, 'primary')",
                    params![teacher_id, section.id],
                )?;
            }
            if let Some(teacher_id) = &section.co_teacher {
                tx.execute(
                    "INSERT OR REPLACE INTO assignment (teacher_id, section_id, role)
                     VALUES (?1, ?2, 'co-teacher')",
                    params![teacher_id, section.id],
                )?;
            }
            for student_id in &section.roster {
                tx.execute(
                    "INSERT OR REPLACE INTO enrollment (student_id, section_id)
                     VALUES (?1, ?2)",
                    params![student_id, section.id],
                )?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    /// Number of persisted sections.
    pub fn section_count(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM section", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Number of enrollments for a student.
    pub fn enrollment_count(&self, student_id: &str) -> StoreResult<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM enrollment WHERE student_id = ?1",
            params![student_id],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Section ids a teacher serves, in id order, with roles.
    pub fn assignments_for_teacher(
        &self,
        teacher_id: &str,
    ) -> StoreResult<Vec<(String, String)>> {
        let mut stmt = self.conn.prepare(
            "SELECT section_id, role FROM assignment
             WHERE teacher_id = ?1 ORDER BY section_id",
        )?;
        let rows = stmt
            .query_map(params![teacher_id], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}
