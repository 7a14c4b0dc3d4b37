use serde::{Deserialize, Serialize};

/// Named anchors of the landing page, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hero,
    Problem,
    Solution,
    Benefits,
    Earnings,
    Impact,
    Roadmap,
    Contact,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[
            Section::Hero,
            Section::Problem,
            Section::Solution,
            Section::Benefits,
            Section::Earnings,
            Section::Impact,
            Section::Roadmap,
            Section::Contact,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Problem => "problem",
            Self::Solution => "solution",
            Self::Benefits => "benefits",
            Self::Earnings => "earnings",
            Self::Impact => "impact",
            Self::Roadmap => "roadmap",
            Self::Contact => "contact",
        }
    }

    /// Accepts the bare id (`contact`) or the anchor form (`#contact`).
    pub fn parse(s: &str) -> Option<Self> {
        let id = s.trim();
        let id = id.strip_prefix('#').unwrap_or(id);
        Self::all()
            .iter()
            .copied()
            .find(|section| section.as_str().eq_ignore_ascii_case(id))
    }

    /// The fragment used in links, e.g. `#contact`.
    pub fn anchor(&self) -> String {
        format!("#{}", self.as_str())
    }
}
