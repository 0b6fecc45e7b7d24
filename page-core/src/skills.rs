//! Skill-level labels and the meter fill percentage each maps to.

/// Fill percentage for labels that match none of the known levels.
pub const UNKNOWN_LEVEL_PERCENT: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Advanced,
    Intermediate,
    Basic,
    Learning,
}

impl SkillLevel {
    /// Case-insensitive lookup; `None` for unrecognized labels.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "advanced" => Some(Self::Advanced),
            "intermediate" => Some(Self::Intermediate),
            "basic" => Some(Self::Basic),
            "learning" => Some(Self::Learning),
            _ => None,
        }
    }

    pub fn percent(self) -> f32 {
        match self {
            Self::Advanced => 90.0,
            Self::Intermediate => 70.0,
            Self::Basic | Self::Learning => 50.0,
        }
    }
}

/// Meter fill for an arbitrary label, with the fallback for labels no
/// level matches.
pub fn percent_for_label(label: &str) -> f32 {
    SkillLevel::from_label(label)
        .map(SkillLevel::percent)
        .unwrap_or(UNKNOWN_LEVEL_PERCENT)
}
