//! Period calculus.
//!
//! The school day is divided into eight full blocks (1st–8th) that meet
//! every day, and four half blocks (A–D) that meet a fraction of days and
//! interleave with specific full blocks. Two sections conflict exactly when
//! their periods overlap, so every placement decision reduces to queries
//! over the overlap relation defined here.
//!
//! # Overlap Table
//!
//! | Half block | Overlapping full blocks |
//! |------------|------------------------|
//! | A, B       | 2nd, 6th               |
//! | C, D       | 3rd, 7th               |
//!
//! The relation is reflexive and symmetric; full blocks never overlap each
//! other, and neither do distinct half blocks.
//!
//! # Reference
//! de Werra (1985), "An Introduction to Timetabling",
//! European Journal of Operational Research 19

use serde::{Deserialize, Serialize};

/// A time slot in the bell schedule.
///
/// Declaration order is the fixed period order used whenever the engine
/// picks the "smallest" or "largest" of a set of periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Period {
    /// 1st full block.
    First,
    /// 2nd full block.
    Second,
    /// 3rd full block.
    Third,
    /// 4th full block.
    Fourth,
    /// 5th full block.
    Fifth,
    /// 6th full block.
    Sixth,
    /// 7th full block.
    Seventh,
    /// 8th full block.
    Eighth,
    /// A half block (interleaves with 2nd/6th).
    A,
    /// B half block (interleaves with 2nd/6th).
    B,
    /// C half block (interleaves with 3rd/7th).
    C,
    /// D half block (interleaves with 3rd/7th).
    D,
}

/// Coarse position of a period within the school day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DaySegment {
    /// Full blocks 1st–4th.
    Morning,
    /// The half-block band (lunch and seminar territory).
    Midday,
    /// Full blocks 5th–8th.
    Afternoon,
}

impl Period {
    /// Every period in fixed order.
    pub const ALL: [Period; 12] = [
        Period::First,
        Period::Second,
        Period::Third,
        Period::Fourth,
        Period::Fifth,
        Period::Sixth,
        Period::Seventh,
        Period::Eighth,
        Period::A,
        Period::B,
        Period::C,
        Period::D,
    ];

    /// The four half blocks in fixed order.
    pub const HALF_BLOCKS: [Period; 4] = [Period::A, Period::B, Period::C, Period::D];

    /// The eight full blocks in fixed order.
    pub const FULL_BLOCKS: [Period; 8] = [
        Period::First,
        Period::Second,
        Period::Third,
        Period::Fourth,
        Period::Fifth,
        Period::Sixth,
        Period::Seventh,
        Period::Eighth,
    ];

    /// Whether this is one of the A–D half blocks.
    pub fn is_half_block(self) -> bool {
        matches!(self, Period::A | Period::B | Period::C | Period::D)
    }

    /// Whether this is one of the 1st–8th full blocks.
    pub fn is_full_block(self) -> bool {
        !self.is_half_block()
    }

    /// The full blocks a half block interleaves with (empty for full blocks).
    fn interleaved_full_blocks(self) -> &'static [Period] {
        match self {
            Period::A | Period::B => &[Period::Second, Period::Sixth],
            Period::C | Period::D => &[Period::Third, Period::Seventh],
            _ => &[],
        }
    }

    /// Whether two periods occupy conflicting time.
    ///
    /// Reflexive and symmetric. Equality plus the half-block overlap table.
    pub fn overlaps(self, other: Period) -> bool {
        if self == other {
            return true;
        }
        self.interleaved_full_blocks().contains(&other)
            || other.interleaved_full_blocks().contains(&self)
    }

    /// Where this period falls within the day.
    pub fn segment(self) -> DaySegment {
        match self {
            Period::First | Period::Second | Period::Third | Period::Fourth => DaySegment::Morning,
            Period::Fifth | Period::Sixth | Period::Seventh | Period::Eighth => {
                DaySegment::Afternoon
            }
            _ => DaySegment::Midday,
        }
    }

    /// Short display label ("1st".."8th", "A".."D").
    pub fn label(self) -> &'static str {
        match self {
            Period::First => "1st",
            Period::Second => "2nd",
            Period::Third => "3rd",
            Period::Fourth => "4th",
            Period::Fifth => "5th",
            Period::Sixth => "6th",
            Period::Seventh => "7th",
            Period::Eighth => "8th",
            Period::A => "A",
            Period::B => "B",
            Period::C => "C",
            Period::D => "D",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns every period that overlaps none of `occupied`, in fixed order.
///
/// This is the "free periods" primitive: a teacher's or student's free slots
/// are the periods non-overlapping with those of their current sections.
pub fn non_overlapping_with(occupied: &[Period]) -> Vec<Period> {
    Period::ALL
        .iter()
        .copied()
        .filter(|p| !occupied.iter().any(|q| p.overlaps(*q)))
        .collect()
}
