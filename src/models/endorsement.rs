//! Certification vocabulary and departments.
//!
//! A teacher holds a set of endorsements; a gen-ed section requires its
//! primary teacher to hold the course's endorsement exactly. Departments are
//! the coarse grouping of endorsements — IEP services (inclusion,
//! separate-class) are expressed per department, and the placement engine's
//! period preference is keyed by department as well.

use serde::{Deserialize, Serialize};

/// A teaching certification credential.
///
/// The subfield-carrying variants cover endorsement families: a
/// `Science("biology")` teacher is certified for biology courses only,
/// not for chemistry. Matching is exact equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Endorsement {
    English,
    Math,
    /// Social science subfield (e.g. "history", "economics").
    SocialScience(String),
    /// World language subfield (e.g. "spanish", "mandarin").
    WorldLanguage(String),
    /// Science subfield (e.g. "biology", "chemistry", "physics").
    Science(String),
    /// Career and technical education.
    Cte,
    Rotc,
    /// Art subfield (e.g. "visual", "music").
    Art(String),
    PhysEd,
    /// Special-education credential (LBS1). Qualifies the holder to
    /// co-teach inclusion sections and teach separate-class sections.
    Lbs1,
}

/// Coarse department grouping of endorsements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Department {
    English,
    Math,
    SocialScience,
    WorldLanguage,
    Science,
    Art,
    Cte,
    Rotc,
    PhysEd,
    SpecialEd,
}

impl Endorsement {
    /// Shorthand for a science endorsement.
    pub fn science(field: impl Into<String>) -> Self {
        Endorsement::Science(field.into())
    }

    /// Shorthand for a social-science endorsement.
    pub fn social_science(field: impl Into<String>) -> Self {
        Endorsement::SocialScience(field.into())
    }

    /// Shorthand for a world-language endorsement.
    pub fn world_language(field: impl Into<String>) -> Self {
        Endorsement::WorldLanguage(field.into())
    }

    /// Shorthand for an art endorsement.
    pub fn art(field: impl Into<String>) -> Self {
        Endorsement::Art(field.into())
    }

    /// The department this endorsement belongs to.
    pub fn department(&self) -> Department {
        match self {
            Endorsement::English => Department::English,
            Endorsement::Math => Department::Math,
            Endorsement::SocialScience(_) => Department::SocialScience,
            Endorsement::WorldLanguage(_) => Department::WorldLanguage,
            Endorsement::Science(_) => Department::Science,
            Endorsement::Cte => Department::Cte,
            Endorsement::Rotc => Department::Rotc,
            Endorsement::Art(_) => Department::Art,
            Endorsement::PhysEd => Department::PhysEd,
            Endorsement::Lbs1 => Department::SpecialEd,
        }
    }
}

impl std::fmt::Display for Endorsement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endorsement::English => write!(f, "English"),
            Endorsement::Math => write!(f, "Math"),
            Endorsement::SocialScience(s) => write!(f, "Social-Science-{s}"),
            Endorsement::WorldLanguage(s) => write!(f, "World-Language-{s}"),
            Endorsement::Science(s) => write!(f, "Science-{s}"),
            Endorsement::Cte => write!(f, "CTE"),
            Endorsement::Rotc => write!(f, "ROTC"),
            Endorsement::Art(s) => write!(f, "Art-{s}"),
            Endorsement::PhysEd => write!(f, "Phys-Ed"),
            Endorsement::Lbs1 => write!(f, "LBS1"),
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Department::English => "English",
            Department::Math => "Math",
            Department::SocialScience => "Social-Science",
            Department::WorldLanguage => "World-Language",
            Department::Science => "Science",
            Department::Art => "Art",
            Department::Cte => "CTE",
            Department::Rotc => "ROTC",
            Department::PhysEd => "Phys-Ed",
            Department::SpecialEd => "Special-Ed",
        };
        f.write_str(name)
    }
}
