use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::levers::{Labor, Lever, LeverValue, SafetyLevel, Traffic, Urgency};
use crate::errors::CivismResult;

/// A validated policy selection: one value per lever plus the night-shift flag.
///
/// `Default` is the fixed baseline reference selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PolicySelection {
    pub night_shifts: bool,
    pub safety_level: SafetyLevel,
    pub urgency: Urgency,
    pub labor: Labor,
    pub traffic: Traffic,
}

impl PolicySelection {
    /// The reference selection every policy is compared against:
    /// day-only shifts, standard safety, urgency and labor, basic traffic plan.
    pub fn baseline() -> Self {
        Self {
            night_shifts: false,
            safety_level: SafetyLevel::NEUTRAL,
            urgency: Urgency::NEUTRAL,
            labor: Labor::NEUTRAL,
            traffic: Traffic::NEUTRAL,
        }
    }

    pub fn is_baseline(&self) -> bool {
        *self == Self::baseline()
    }

    /// Human label for the shift pattern, as used in summaries.
    pub fn shift_label(&self) -> &'static str {
        shift_label(self.night_shifts)
    }
}

/// "24x7 shifts" when night shifts run, otherwise "day-only".
pub fn shift_label(night_shifts: bool) -> &'static str {
    if night_shifts {
        "24x7 shifts"
    } else {
        "day-only"
    }
}

/// Policy record as supplied by the request layer, before lever validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawPolicySelection {
    pub night_shifts: bool,
    pub safety_level: String,
    pub urgency: String,
    pub labor: String,
    pub traffic: String,
}

impl RawPolicySelection {
    /// Strict conversion. The first unrecognised lever value is an error.
    pub fn validate(&self) -> CivismResult<PolicySelection> {
        Ok(PolicySelection {
            night_shifts: self.night_shifts,
            safety_level: SafetyLevel::parse(&self.safety_level)?,
            urgency: Urgency::parse(&self.urgency)?,
            labor: Labor::parse(&self.labor)?,
            traffic: Traffic::parse(&self.traffic)?,
        })
    }

    /// Lossy conversion. Unrecognised values become the lever's neutral value.
    pub fn into_selection_lossy(&self) -> PolicySelection {
        PolicySelection {
            night_shifts: self.night_shifts,
            safety_level: SafetyLevel::from_str_lossy(&self.safety_level),
            urgency: Urgency::from_str_lossy(&self.urgency),
            labor: Labor::from_str_lossy(&self.labor),
            traffic: Traffic::from_str_lossy(&self.traffic),
        }
    }

    pub fn shift_label(&self) -> &'static str {
        shift_label(self.night_shifts)
    }

    /// Levers whose raw value is not recognised, with the offending value.
    pub fn unrecognized(&self) -> Vec<(Lever, &str)> {
        let mut out = Vec::new();
        if SafetyLevel::parse(&self.safety_level).is_err() {
            out.push((Lever::SafetyLevel, self.safety_level.as_str()));
        }
        if Urgency::parse(&self.urgency).is_err() {
            out.push((Lever::Urgency, self.urgency.as_str()));
        }
        if Labor::parse(&self.labor).is_err() {
            out.push((Lever::Labor, self.labor.as_str()));
        }
        if Traffic::parse(&self.traffic).is_err() {
            out.push((Lever::Traffic, self.traffic.as_str()));
        }
        out
    }
}

impl From<PolicySelection> for RawPolicySelection {
    fn from(selection: PolicySelection) -> Self {
        Self {
            night_shifts: selection.night_shifts,
            safety_level: selection.safety_level.as_str().to_string(),
            urgency: selection.urgency.as_str().to_string(),
            labor: selection.labor.as_str().to_string(),
            traffic: selection.traffic.as_str().to_string(),
        }
    }
}
