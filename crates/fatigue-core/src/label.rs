//! The closed set of fatigue-strength classes.
//!
//! The classifier was fitted on exactly three classes. Conversion from a
//! raw class index is fallible so that a corrupt or mismatched artifact
//! surfaces as an error instead of silently landing in the strongest band.

use crate::error::CoreError;

/// Number of classes the artifacts were fitted on.
pub const CLASS_COUNT: usize = 3;

/// Predicted fatigue-strength band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassLabel {
    /// Fatigue strength below 400 MPa.
    Weak,
    /// Fatigue strength between 400 and 600 MPa.
    Moderate,
    /// Fatigue strength above 600 MPa.
    Strong,
}

impl ClassLabel {
    /// Convert a raw class index from the classifier.
    pub fn from_index(index: usize) -> Result<Self, CoreError> {
        match index {
            0 => Ok(Self::Weak),
            1 => Ok(Self::Moderate),
            2 => Ok(Self::Strong),
            other => Err(CoreError::UnexpectedLabel(other)),
        }
    }

    /// The class index this label was fitted as.
    pub fn index(self) -> usize {
        match self {
            Self::Weak => 0,
            Self::Moderate => 1,
            Self::Strong => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
        }
    }

    /// Strength band in MPa.
    pub fn band(self) -> &'static str {
        match self {
            Self::Weak => "< 400 MPa",
            Self::Moderate => "400-600 MPa",
            Self::Strong => "> 600 MPa",
        }
    }

    /// Fixed result message shown to the user.
    pub fn message(self) -> &'static str {
        match self {
            Self::Weak => "The material is weak, with fatigue strength < 400 MPa",
            Self::Moderate => "The material is moderate in strength, with fatigue strength 400-600 MPa",
            Self::Strong => "The material is strong, with fatigue strength > 600 MPa",
        }
    }

    /// Severity icon shown next to the message.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Weak => "❌",
            Self::Moderate => "⚠",
            Self::Strong => "✅",
        }
    }
}
