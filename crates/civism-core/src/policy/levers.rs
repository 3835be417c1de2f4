use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{CivismError, CivismResult};

/// The four table-driven policy levers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Lever {
    SafetyLevel,
    Urgency,
    Labor,
    Traffic,
}

impl Lever {
    /// All levers in composition order.
    pub const ALL: [Lever; 4] = [
        Lever::SafetyLevel,
        Lever::Urgency,
        Lever::Labor,
        Lever::Traffic,
    ];

    /// Field name of the lever in a policy record.
    pub fn as_str(self) -> &'static str {
        match self {
            Lever::SafetyLevel => "safety_level",
            Lever::Urgency => "urgency",
            Lever::Labor => "labor",
            Lever::Traffic => "traffic",
        }
    }

    /// Name of the lever's neutral value.
    pub fn neutral(self) -> &'static str {
        match self {
            Lever::SafetyLevel => SafetyLevel::NEUTRAL.as_str(),
            Lever::Urgency => Urgency::NEUTRAL.as_str(),
            Lever::Labor => Labor::NEUTRAL.as_str(),
            Lever::Traffic => Traffic::NEUTRAL.as_str(),
        }
    }

    /// Whether `value` is a recognised value name for this lever.
    pub fn accepts(self, value: &str) -> bool {
        match self {
            Lever::SafetyLevel => SafetyLevel::parse(value).is_ok(),
            Lever::Urgency => Urgency::parse(value).is_ok(),
            Lever::Labor => Labor::parse(value).is_ok(),
            Lever::Traffic => Traffic::parse(value).is_ok(),
        }
    }
}

impl fmt::Display for Lever {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared behaviour of a categorical lever value.
///
/// `parse` is strict and meant for the validation boundary. `from_str_lossy`
/// maps anything unrecognised to the neutral value and never fails.
pub trait LeverValue: Copy + PartialEq + Sized + 'static {
    /// The lever this value belongs to.
    const LEVER: Lever;
    /// The no-op value whose modifier is all zeros.
    const NEUTRAL: Self;
    /// Every value, neutral first.
    const ALL: &'static [Self];

    /// Lowercase wire name.
    fn as_str(self) -> &'static str;

    /// Strict parse of a wire name.
    fn parse(value: &str) -> CivismResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == value)
            .ok_or_else(|| CivismError::UnknownLeverValue {
                lever: Self::LEVER,
                value: value.to_string(),
            })
    }

    /// Parse a wire name, falling back to the neutral value.
    fn from_str_lossy(value: &str) -> Self {
        Self::parse(value).unwrap_or(Self::NEUTRAL)
    }

    /// Whether this is the lever's neutral value.
    fn is_neutral(self) -> bool {
        self == Self::NEUTRAL
    }
}

/// Safety-control level on site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SafetyLevel {
    Low,
    #[default]
    Standard,
    High,
}

impl LeverValue for SafetyLevel {
    const LEVER: Lever = Lever::SafetyLevel;
    const NEUTRAL: Self = SafetyLevel::Standard;
    const ALL: &'static [Self] = &[SafetyLevel::Standard, SafetyLevel::Low, SafetyLevel::High];

    fn as_str(self) -> &'static str {
        match self {
            SafetyLevel::Low => "low",
            SafetyLevel::Standard => "standard",
            SafetyLevel::High => "high",
        }
    }
}

/// Schedule urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Urgency {
    #[default]
    Standard,
    High,
}

impl LeverValue for Urgency {
    const LEVER: Lever = Lever::Urgency;
    const NEUTRAL: Self = Urgency::Standard;
    const ALL: &'static [Self] = &[Urgency::Standard, Urgency::High];

    fn as_str(self) -> &'static str {
        match self {
            Urgency::Standard => "standard",
            Urgency::High => "high",
        }
    }
}

/// Labor availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Labor {
    #[default]
    Standard,
    Increased,
}

impl LeverValue for Labor {
    const LEVER: Lever = Lever::Labor;
    const NEUTRAL: Self = Labor::Standard;
    const ALL: &'static [Self] = &[Labor::Standard, Labor::Increased];

    fn as_str(self) -> &'static str {
        match self {
            Labor::Standard => "standard",
            Labor::Increased => "increased",
        }
    }
}

/// Traffic-management plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Traffic {
    #[default]
    Basic,
    Advanced,
}

impl LeverValue for Traffic {
    const LEVER: Lever = Lever::Traffic;
    const NEUTRAL: Self = Traffic::Basic;
    const ALL: &'static [Self] = &[Traffic::Basic, Traffic::Advanced];

    fn as_str(self) -> &'static str {
        match self {
            Traffic::Basic => "basic",
            Traffic::Advanced => "advanced",
        }
    }
}

macro_rules! impl_lever_text {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = CivismError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as LeverValue>::parse(s)
                }
            }
        )+
    };
}

impl_lever_text!(SafetyLevel, Urgency, Labor, Traffic);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_values_are_listed_first() {
        assert_eq!(SafetyLevel::ALL[0], SafetyLevel::NEUTRAL);
        assert_eq!(Urgency::ALL[0], Urgency::NEUTRAL);
        assert_eq!(Labor::ALL[0], Labor::NEUTRAL);
        assert_eq!(Traffic::ALL[0], Traffic::NEUTRAL);
    }

    #[test]
    fn lever_neutral_matches_value_type() {
        assert_eq!(Lever::SafetyLevel.neutral(), "standard");
        assert_eq!(Lever::Traffic.neutral(), "basic");
    }

    #[test]
    fn default_is_neutral() {
        assert!(SafetyLevel::default().is_neutral());
        assert!(Traffic::default().is_neutral());
    }
}
