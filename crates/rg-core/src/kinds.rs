//! Categorical domain enums and their wire-format string values.
//!
//! The `as_str` forms are the values the downstream platform stores in its
//! database columns; output backends write them verbatim.

use std::fmt;

// ── PriorityClass ─────────────────────────────────────────────────────────────

/// Service-priority tier of a stop.
///
/// Assigned exactly once before the day loop and immutable thereafter.
/// Hotspots fill fastest and carry the widest duration window.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PriorityClass {
    Light,
    Medium,
    Hotspot,
}

impl PriorityClass {
    pub fn as_str(self) -> &'static str {
        match self {
            PriorityClass::Light => "light",
            PriorityClass::Medium => "medium",
            PriorityClass::Hotspot => "hotspot",
        }
    }
}

impl fmt::Display for PriorityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── HazardKind ────────────────────────────────────────────────────────────────

/// Category of a hazard report.  Each stop favors exactly one kind for its
/// whole lifetime (recurring site-specific issues).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HazardKind {
    Biohazard,
    Needle,
    Glass,
}

impl HazardKind {
    pub const ALL: [HazardKind; 3] = [HazardKind::Biohazard, HazardKind::Needle, HazardKind::Glass];

    pub fn as_str(self) -> &'static str {
        match self {
            HazardKind::Biohazard => "BIOHAZARD",
            HazardKind::Needle => "NEEDLE",
            HazardKind::Glass => "GLASS",
        }
    }
}

impl fmt::Display for HazardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── InfraKind ─────────────────────────────────────────────────────────────────

/// Category of an infrastructure issue.  Fixed per stop, like [`HazardKind`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfraKind {
    BrokenGlass,
    Graffiti,
    Structural,
}

impl InfraKind {
    pub const ALL: [InfraKind; 3] =
        [InfraKind::BrokenGlass, InfraKind::Graffiti, InfraKind::Structural];

    pub fn as_str(self) -> &'static str {
        match self {
            InfraKind::BrokenGlass => "BROKEN_GLASS",
            InfraKind::Graffiti => "GRAFFITI",
            InfraKind::Structural => "STRUCTURAL",
        }
    }
}

impl fmt::Display for InfraKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── OriginKind ────────────────────────────────────────────────────────────────

/// Why a stop visit occurred.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OriginKind {
    /// On the planned route sheet (85% of visits).
    Planned,
    /// Dispatched in response to a report (10%).
    Emergency,
    /// Crew-initiated unlisted visit (5%).
    AdHoc,
}

impl OriginKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OriginKind::Planned => "planned",
            OriginKind::Emergency => "emergency",
            OriginKind::AdHoc => "ul_ad_hoc",
        }
    }
}

impl fmt::Display for OriginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ServiceLevel ──────────────────────────────────────────────────────────────

/// Depth of service performed at a visit.
///
/// Level 3 (`Deep`) is the deepest tier; it resets the stop's
/// days-since-deep-clean clock.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ServiceLevel {
    /// Level 1 — routine litter pass.
    Routine,
    /// Level 2 — heavy load (logged volume at or near capacity).
    Heavy,
    /// Level 3 — full deep clean.
    Deep,
}

impl ServiceLevel {
    /// Numeric level as stored by the platform (1, 2, or 3).
    pub fn as_u8(self) -> u8 {
        match self {
            ServiceLevel::Routine => 1,
            ServiceLevel::Heavy => 2,
            ServiceLevel::Deep => 3,
        }
    }
}

impl fmt::Display for ServiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.as_u8())
    }
}
