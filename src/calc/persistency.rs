//! Life-insurance persistency multiplier
//!
//! Scales only the first-year life commission by the 2nd-25th installment
//! persistency rate. Absent input is treated as fully qualifying (1.0) —
//! a deliberate policy choice pending product confirmation, not a fallback.

fn clamp(n: f64, min: f64, max: f64) -> f64 {
    n.max(min).min(max)
}

/// Multiplier for the first-year life commission from an optional
/// persistency percentage (0-100)
///
/// `None` or NaN → 1.0. Otherwise the input is clamped to [0, 100] and
/// mapped through a four-band step function, inclusive on each lower bound.
pub fn persistency_multiplier(pct: Option<f64>) -> f64 {
    let pct = match pct {
        Some(p) if !p.is_nan() => p,
        _ => return 1.0,
    };

    let p = clamp(pct, 0.0, 100.0);
    if p >= 85.0 {
        1.0
    } else if p >= 75.0 {
        0.9
    } else if p >= 70.0 {
        0.85
    } else {
        0.8
    }
}
