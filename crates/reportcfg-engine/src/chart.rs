//! Axis tick heuristic for duration charts.
//!
//! Durations arrive in milliseconds, which leaves a charting library with
//! unreadable default steps. The step is picked from a fixed ladder of
//! human units so that roughly ten ticks cover the largest value.

use serde::Serialize;

const SECOND: u64 = 1000;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 12 * MONTH;

/// (step size, unit suffix, unit base), ascending.
const STEP_LADDER: [(u64, &str, u64); 14] = [
    (1, "ms", 1),
    (10, "ms", 1),
    (100, "ms", 1),
    (SECOND, "s", SECOND),
    (10 * SECOND, "s", SECOND),
    (MINUTE, "min", MINUTE),
    (10 * MINUTE, "min", MINUTE),
    (HOUR, "h", HOUR),
    (6 * HOUR, "h", HOUR),
    (DAY, "d", DAY),
    (WEEK, "wk", WEEK),
    (MONTH, "m", MONTH),
    (6 * MONTH, "m", MONTH),
    (YEAR, "y", YEAR),
];

/// Tick step and unit for a duration axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationTicks {
    pub step_size: u64,
    pub unit: &'static str,
    pub base: u64,
}

impl DurationTicks {
    /// Render a tick value (milliseconds) in the chosen unit, e.g. `"2h"`.
    pub fn format_tick(&self, value: f64) -> String {
        format!("{}{}", value / self.base as f64, self.unit)
    }

    /// Tick positions from zero up to and including the first one past `max`.
    pub fn ticks_up_to(&self, max: f64) -> Vec<f64> {
        let step = self.step_size as f64;
        let count = (max / step).ceil().max(0.0) as usize;
        (0..=count).map(|i| i as f64 * step).collect()
    }
}

/// Pick the first ladder step strictly larger than a tenth of the maximum.
///
/// Returns `None` for empty input or values beyond the ladder; callers
/// then keep the chart's default ticks.
pub fn duration_ticks(values: &[f64]) -> Option<DurationTicks> {
    let max = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .reduce(f64::max)?;
    let minimum_step = max / 10.0;

    STEP_LADDER
        .iter()
        .find(|(value, _, _)| *value as f64 > minimum_step)
        .map(|&(step_size, unit, base)| DurationTicks {
            step_size,
            unit,
            base,
        })
}
