use chrono::{Months, NaiveDate};

use crate::domain::{AnomalyPoint, AnomalySeries, Granularity};

/// Trailing rolling mean over a calendar window of `years`.
///
/// Each output point averages the present anomalies dated inside
/// `(date - years, date]`, up to and including the current row. The output
/// keeps the input order and length; a point is `None` only if its whole
/// window is empty.
pub fn rolling_mean(points: &[AnomalyPoint], years: u32) -> Vec<AnomalyPoint> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by_key(|&i| points[i].date);

    let mut out = points.to_vec();
    let mut start = 0;
    let mut sum = 0.0;
    let mut count = 0usize;

    for (pos, &i) in order.iter().enumerate() {
        let date = points[i].date;
        if let Some(v) = points[i].anomaly {
            sum += v;
            count += 1;
        }

        let window_start = date
            .checked_sub_months(Months::new(12 * years))
            .unwrap_or(NaiveDate::MIN);
        while start <= pos && points[order[start]].date <= window_start {
            if let Some(v) = points[order[start]].anomaly {
                sum -= v;
                count -= 1;
            }
            start += 1;
        }

        out[i].anomaly = (count > 0).then(|| sum / count as f64);
    }
    out
}

/// Derive a rolling series of the given granularity from the raw series.
///
/// Returns the raw points unchanged for `Granularity::Raw`.
pub fn derive_series(raw: &AnomalySeries, granularity: Granularity) -> AnomalySeries {
    let points = match granularity.window_years() {
        Some(years) => rolling_mean(&raw.points, years),
        None => raw.points.clone(),
    };
    AnomalySeries::new(granularity, points)
}
