// Single source of truth for all default values.

// --- Baseline scenario ---
pub const DEFAULT_BASELINE_DURATION: f64 = 180.0; // days
pub const DEFAULT_BASELINE_RISK: f64 = 45.0; // out of 100
pub const DEFAULT_BASELINE_DISRUPTION: f64 = 55.0; // out of 100

// --- Clamp bounds ---
pub const DEFAULT_MIN_DURATION: f64 = 30.0;
pub const DEFAULT_MAX_DURATION: f64 = 365.0;
pub const DEFAULT_MIN_SCORE: f64 = 0.0;
pub const DEFAULT_MAX_SCORE: f64 = 100.0;

// --- Night shifts (binary, not table-driven) ---
pub const DEFAULT_NIGHT_SHIFT_DURATION: f64 = -28.0;
pub const DEFAULT_NIGHT_SHIFT_RISK: f64 = 7.0;
pub const DEFAULT_NIGHT_SHIFT_DISRUPTION: f64 = 14.0;

// --- Lever modifiers: (duration, risk_score, disruption_index) ---
pub const SAFETY_LOW: (f64, f64, f64) = (-12.0, 18.0, -6.0);
pub const SAFETY_HIGH: (f64, f64, f64) = (18.0, -15.0, 10.0);
pub const URGENCY_HIGH: (f64, f64, f64) = (-25.0, 9.0, 6.0);
pub const LABOR_INCREASED: (f64, f64, f64) = (-18.0, 6.0, 5.0);
pub const TRAFFIC_ADVANCED: (f64, f64, f64) = (6.0, -4.0, -12.0);

// --- Timeline ---
pub const DEFAULT_TARGET_SAMPLES: u32 = 20;
pub const DEFAULT_JITTER: f64 = 2.0; // progress points, symmetric
pub const DEFAULT_MIDDLE_SLOPE: f64 = 135.0;

// --- Verdict thresholds ---
pub const DEFAULT_RECOMMENDED_MAX_RISK_DELTA: f64 = 5.0;
pub const DEFAULT_RECOMMENDED_MAX_DURATION_DELTA: f64 = 0.0;
pub const DEFAULT_HIGH_RISK_DELTA: f64 = 20.0;
pub const DEFAULT_HIGH_RISK_DISRUPTION_DELTA: f64 = 25.0;

// --- Trade-off thresholds ---
pub const DEFAULT_TRADE_OFF_RISK_DELTA: f64 = 5.0;
pub const DEFAULT_TRADE_OFF_DISRUPTION_DELTA: f64 = 8.0;

// --- Warning thresholds ---
pub const DEFAULT_WARN_RISK_DELTA: f64 = 15.0;
pub const DEFAULT_WARN_DISRUPTION_DELTA: f64 = 20.0;
pub const DEFAULT_WARN_TRAFFIC_DISRUPTION_DELTA: f64 = 15.0;
