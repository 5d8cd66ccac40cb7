//! Fixed documentation taxonomy: pillars, section rules and excluded files.
//!
//! Documents are organized Well-Architected style:
//!
//! ```text
//! <root>/<N>-<PILLAR>/<PILLAR><NN>-<area>/<PILLAR><NN>-BP<NN>-<name>.md
//! ```
//!
//! e.g. `SEC03-BP05-some-practice.md` is Security, question 3, best practice 5.

use serde::Serialize;
use std::fmt;

/// Sections that must be present for a document to be valid.
pub const REQUIRED_SECTIONS: [&str; 3] = ["References", "Date", "Checklist"];

/// Sections whose absence is reported but does not invalidate a document.
pub const RECOMMENDED_SECTIONS: [&str; 1] = ["Tổng quan"];

/// Top-level resources index; never analyzed as a best-practice document.
pub const RESOURCES_INDEX: &str = "RESOURCES.md";

/// Pillar key used for documents outside any pillar directory.
pub const OTHER_PILLAR: &str = "OTHER";

/// One of the six fixed pillars, declared in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Pillar {
    Ops,
    Rel,
    Perf,
    Sec,
    Cost,
    Sus,
}

impl Pillar {
    /// Canonical display order.
    pub const ALL: [Pillar; 6] = [
        Pillar::Ops,
        Pillar::Rel,
        Pillar::Perf,
        Pillar::Sec,
        Pillar::Cost,
        Pillar::Sus,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Pillar::Ops => "OPS",
            Pillar::Rel => "REL",
            Pillar::Perf => "PERF",
            Pillar::Sec => "SEC",
            Pillar::Cost => "COST",
            Pillar::Sus => "SUS",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Pillar::Ops => "Operational Excellence",
            Pillar::Rel => "Reliability",
            Pillar::Perf => "Performance Efficiency",
            Pillar::Sec => "Security",
            Pillar::Cost => "Cost Optimization",
            Pillar::Sus => "Sustainability",
        }
    }

    /// Exact, case-sensitive lookup by code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Display name for an arbitrary pillar code, falling back to the code itself.
pub fn pillar_display_name(code: &str) -> &str {
    Pillar::from_code(code)
        .map(|p| p.display_name())
        .unwrap_or(code)
}
