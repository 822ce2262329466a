//! Teacher (faculty) model.
//!
//! A teacher carries a certification set and a section-load cap. Teachers
//! are created once by the caller and are immutable for the duration of a
//! run; all load accounting lives in the schedule.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Endorsement;

/// Default maximum number of sections a teacher may carry.
pub const DEFAULT_MAX_SECTIONS: usize = 5;

/// A faculty member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Maximum number of sections (primary or co-taught) this teacher
    /// may be assigned.
    pub max_sections: usize,
    /// Certification credentials held.
    pub certs: BTreeSet<Endorsement>,
}

impl Teacher {
    /// Creates a teacher with the default section cap and no certs.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            max_sections: DEFAULT_MAX_SECTIONS,
            certs: BTreeSet::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the section cap.
    pub fn with_max_sections(mut self, max: usize) -> Self {
        self.max_sections = max;
        self
    }

    /// Adds a certification.
    pub fn with_cert(mut self, cert: Endorsement) -> Self {
        self.certs.insert(cert);
        self
    }

    /// Whether this teacher holds the given endorsement.
    pub fn holds(&self, cert: &Endorsement) -> bool {
        self.certs.contains(cert)
    }

    /// Whether this teacher holds the special-education credential,
    /// qualifying them for inclusion co-teaching and separate-class duty.
    pub fn is_lbs1(&self) -> bool {
        self.certs.contains(&Endorsement::Lbs1)
    }
}
