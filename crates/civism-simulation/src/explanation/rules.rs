//! Explanation rules as ordered `(predicate, effect)` tables.
//!
//! - `VERDICT_RULES`: first match wins, `FALLBACK_VERDICT` when none match.
//! - `TRADE_OFF_RULES`: every matching rule contributes a clause, in order.
//! - `WARNING_RULES`: every matching rule contributes an advisory, in order.

use civism_core::config::ThresholdConfig;
use civism_core::models::{MetricDeltas, Verdict};
use civism_core::policy::{Labor, PolicySelection, SafetyLevel, Traffic};

use super::advisory::Advisory;
use super::templates;

/// Inputs every rule sees.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub deltas: MetricDeltas,
    pub selection: &'a PolicySelection,
    pub thresholds: &'a ThresholdConfig,
}

pub type Predicate = fn(&RuleContext<'_>) -> bool;

/// Verdict rule: `verdict` applies when `applies` holds.
pub struct VerdictRule {
    pub verdict: Verdict,
    pub applies: Predicate,
}

/// Trade-off rule: `clause` renders the fragment when `applies` holds.
pub struct TradeOffRule {
    pub name: &'static str,
    pub applies: Predicate,
    pub clause: fn(&MetricDeltas) -> String,
}

/// Warning rule: `advisory` fires when `applies` holds.
pub struct WarningRule {
    pub advisory: Advisory,
    pub applies: Predicate,
}

pub const FALLBACK_VERDICT: Verdict = Verdict::AcceptableWithConditions;

pub const VERDICT_RULES: &[VerdictRule] = &[
    VerdictRule {
        verdict: Verdict::Recommended,
        applies: is_recommended,
    },
    VerdictRule {
        verdict: Verdict::HighRisk,
        applies: is_high_risk,
    },
];

pub const TRADE_OFF_RULES: &[TradeOffRule] = &[
    TradeOffRule {
        name: "faster",
        applies: |ctx| ctx.deltas.duration < 0.0,
        clause: |d| templates::faster(d.duration),
    },
    TradeOffRule {
        name: "slower",
        applies: |ctx| ctx.deltas.duration > 0.0,
        clause: |d| templates::slower(d.duration),
    },
    TradeOffRule {
        name: "risk_up",
        applies: |ctx| ctx.deltas.risk_score > ctx.thresholds.trade_off_risk_delta,
        clause: |d| templates::risk_up(d.risk_score),
    },
    TradeOffRule {
        name: "risk_down",
        applies: |ctx| ctx.deltas.risk_score < -ctx.thresholds.trade_off_risk_delta,
        clause: |d| templates::risk_down(d.risk_score),
    },
    TradeOffRule {
        name: "disruption_up",
        applies: |ctx| ctx.deltas.disruption_index > ctx.thresholds.trade_off_disruption_delta,
        clause: |d| templates::disruption_up(d.disruption_index),
    },
    TradeOffRule {
        name: "disruption_down",
        applies: |ctx| ctx.deltas.disruption_index < -ctx.thresholds.trade_off_disruption_delta,
        clause: |d| templates::disruption_down(d.disruption_index),
    },
];

pub const WARNING_RULES: &[WarningRule] = &[
    WarningRule {
        advisory: Advisory::EthicalRiskThreshold,
        applies: |ctx| ctx.deltas.risk_score > ctx.thresholds.warn_risk_delta,
    },
    WarningRule {
        advisory: Advisory::CommunityDisruption,
        applies: |ctx| ctx.deltas.disruption_index > ctx.thresholds.warn_disruption_delta,
    },
    WarningRule {
        advisory: Advisory::NightWorkLowSafety,
        applies: |ctx| ctx.selection.night_shifts && ctx.selection.safety_level == SafetyLevel::Low,
    },
    WarningRule {
        advisory: Advisory::SurgedLaborLowSafety,
        applies: |ctx| {
            ctx.selection.labor == Labor::Increased && ctx.selection.safety_level == SafetyLevel::Low
        },
    },
    WarningRule {
        advisory: Advisory::TrafficPlanUpgrade,
        applies: |ctx| {
            ctx.selection.traffic == Traffic::Basic
                && ctx.deltas.disruption_index > ctx.thresholds.warn_traffic_disruption_delta
        },
    },
];

fn is_recommended(ctx: &RuleContext<'_>) -> bool {
    ctx.deltas.risk_score <= ctx.thresholds.recommended_max_risk_delta
        && ctx.deltas.duration <= ctx.thresholds.recommended_max_duration_delta
}

fn is_high_risk(ctx: &RuleContext<'_>) -> bool {
    ctx.deltas.risk_score > ctx.thresholds.high_risk_delta
        || ctx.deltas.disruption_index > ctx.thresholds.high_risk_disruption_delta
}

/// First matching verdict rule, or the fallback.
pub fn verdict(ctx: &RuleContext<'_>) -> Verdict {
    VERDICT_RULES
        .iter()
        .find(|rule| (rule.applies)(ctx))
        .map(|rule| rule.verdict)
        .unwrap_or(FALLBACK_VERDICT)
}

/// Clauses of every matching trade-off rule, in table order.
pub fn trade_off_clauses(ctx: &RuleContext<'_>) -> Vec<String> {
    TRADE_OFF_RULES
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .map(|rule| (rule.clause)(&ctx.deltas))
        .collect()
}

/// Advisories of every matching warning rule, in table order.
pub fn advisories(ctx: &RuleContext<'_>) -> Vec<Advisory> {
    WARNING_RULES
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .map(|rule| rule.advisory)
        .collect()
}
