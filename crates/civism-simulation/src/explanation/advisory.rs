use std::fmt;

/// Advisory warnings the analyzer can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advisory {
    /// Risk rose past the ethical threshold.
    EthicalRiskThreshold,
    /// Community disruption rose enough to need mitigation.
    CommunityDisruption,
    /// Night shifts combined with low safety controls.
    NightWorkLowSafety,
    /// Increased labor combined with low safety controls.
    SurgedLaborLowSafety,
    /// Basic traffic plan while disruption climbs.
    TrafficPlanUpgrade,
}

impl Advisory {
    pub fn message(self) -> &'static str {
        match self {
            Advisory::EthicalRiskThreshold => "Safety risk exceeds ethical threshold",
            Advisory::CommunityDisruption => "Consider mitigation for community disruption",
            Advisory::NightWorkLowSafety => "Night work with low safety controls is discouraged",
            Advisory::SurgedLaborLowSafety => "Surged labor plus low safety will magnify injury risk",
            Advisory::TrafficPlanUpgrade => "Upgrade traffic plan to advanced to offset disruption",
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
