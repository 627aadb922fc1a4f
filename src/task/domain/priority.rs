//! Task priority levels.

use super::ParsePriorityError;
use serde::{Deserialize, Serialize};

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// No priority has been assigned.
    #[default]
    NoPriority,
    /// Drop everything.
    Urgent,
    /// High priority.
    High,
    /// Medium priority.
    Medium,
    /// Low priority.
    Low,
}

impl Priority {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoPriority => "no_priority",
            Self::Urgent => "urgent",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Human-readable selector label for this priority.
    ///
    /// The unset value reads as the selector's own caption ("Priority"), so
    /// a button showing the current choice needs no special casing.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::NoPriority => "Priority",
            Self::Urgent => "Urgent",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Resolves a raw wire value to a display label, total over all input.
    ///
    /// Unrecognized values resolve to the same label as the unset priority,
    /// so this never fails and never renders an empty caption.
    #[must_use]
    pub fn display_for(raw: &str) -> &'static str {
        Self::try_from(raw).unwrap_or_default().display_name()
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "no_priority" => Ok(Self::NoPriority),
            "urgent" => Ok(Self::Urgent),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}
