use std::collections::BTreeMap;

use civism_core::config::LeverTable;
use civism_core::errors::ModifierError;
use civism_core::models::MetricDelta;
use civism_core::policy::Lever;

/// One lever's modifier table with its neutral entry pulled out.
#[derive(Debug, Clone)]
pub struct LeverModifiers {
    lever: Lever,
    neutral: MetricDelta,
    entries: BTreeMap<String, MetricDelta>,
}

impl LeverModifiers {
    pub(crate) fn build(lever: Lever, table: &LeverTable) -> Result<Self, ModifierError> {
        for (key, delta) in table {
            if !lever.accepts(key) {
                return Err(ModifierError::InvalidKey {
                    lever,
                    key: key.clone(),
                });
            }
            if !delta.is_finite() {
                return Err(ModifierError::NonFiniteDelta {
                    lever,
                    key: key.clone(),
                });
            }
        }
        let neutral = table
            .get(lever.neutral())
            .copied()
            .ok_or(ModifierError::MissingNeutral {
                lever,
                neutral: lever.neutral(),
            })?;
        Ok(Self {
            lever,
            neutral,
            entries: table.clone(),
        })
    }

    /// Built-in tables are complete; a missing neutral entry reads as zero.
    pub(crate) fn builtin(lever: Lever, table: &LeverTable) -> Self {
        Self {
            lever,
            neutral: table
                .get(lever.neutral())
                .copied()
                .unwrap_or(MetricDelta::ZERO),
            entries: table.clone(),
        }
    }

    pub fn lever(&self) -> Lever {
        self.lever
    }

    pub fn neutral(&self) -> MetricDelta {
        self.neutral
    }

    /// Delta for `value`, or the neutral delta when the table has no entry.
    pub fn get(&self, value: &str) -> MetricDelta {
        self.entries.get(value).copied().unwrap_or(self.neutral)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.entries.contains_key(value)
    }
}
