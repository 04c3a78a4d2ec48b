//! Categorical tags carried by points of interest.
//!
//! Reference data stores these as free-form strings ("Early Morning",
//! "Very High"). Parsing is lenient and never fails: unrecognised text maps
//! to [`PreferredTime::Anytime`] or [`CrowdLevel::Unknown`].
//!
//! # Examples
//! ```
//! use wayfarer_core::{CrowdLevel, PreferredTime};
//!
//! assert_eq!(PreferredTime::from_tag("Early Morning"), PreferredTime::Morning);
//! assert_eq!(CrowdLevel::from_tag("very high"), CrowdLevel::VeryHigh);
//! assert_eq!(PreferredTime::Evening.to_string(), "evening");
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The time of day a point of interest is best visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase", from = "String"))]
pub enum PreferredTime {
    /// Morning visits, 09:00 to noon.
    Morning,
    /// Afternoon visits, noon to 16:00.
    Afternoon,
    /// Evening visits, 16:00 to 19:00.
    Evening,
    /// No preference.
    #[default]
    Anytime,
}

impl PreferredTime {
    /// Parse a free-form preference tag.
    ///
    /// Matching is case-insensitive and substring based, checked in the
    /// order morning, evening, afternoon; so "early morning" is a morning
    /// preference. Empty or unknown tags mean [`Self::Anytime`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let lowered = tag.to_lowercase();
        if lowered.contains("morning") {
            Self::Morning
        } else if lowered.contains("evening") {
            Self::Evening
        } else if lowered.contains("afternoon") {
            Self::Afternoon
        } else {
            Self::Anytime
        }
    }

    /// Return the preference as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Anytime => "anytime",
        }
    }
}

impl From<String> for PreferredTime {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl std::fmt::Display for PreferredTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected crowd level at a point of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", from = "String"))]
pub enum CrowdLevel {
    /// Few visitors.
    Low,
    /// Moderate footfall.
    Medium,
    /// Busy.
    High,
    /// Packed, usually a headline attraction.
    VeryHigh,
    /// No crowd information.
    #[default]
    Unknown,
}

impl CrowdLevel {
    /// Parse a free-form crowd tag. Empty and `unknown` tags mean
    /// [`Self::Unknown`]; any other unrecognised text is treated as
    /// [`Self::Low`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let normalised = tag.trim().to_lowercase();
        match normalised.as_str() {
            "" | "unknown" => Self::Unknown,
            "very high" | "very_high" => Self::VeryHigh,
            "high" => Self::High,
            "medium" => Self::Medium,
            _ => Self::Low,
        }
    }

    /// Whether the level counts as busy for advisories.
    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::High | Self::VeryHigh)
    }
}

impl From<String> for CrowdLevel {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}
