/// Simulator version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decimal places kept on every scenario metric.
pub const METRIC_DECIMALS: i32 = 1;

/// Progress value forced onto the last timeline point.
pub const COMPLETE_PROGRESS: f64 = 100.0;

/// Lower and upper bound of a timeline progress value.
pub const PROGRESS_MIN: f64 = 0.0;
pub const PROGRESS_MAX: f64 = 100.0;

/// Round to one decimal place, the precision of every metric and progress value.
pub fn round1(value: f64) -> f64 {
    let factor = 10f64.powi(METRIC_DECIMALS);
    (value * factor).round() / factor
}
