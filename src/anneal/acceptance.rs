//! Acceptance criterion.

/// Probability of adopting a candidate with fitness `fy` over the current
/// fitness `fx` at the given iteration.
///
/// Candidates at least as fit are always accepted. Otherwise the probability
/// is `(iteration + 1)^(cooling * (fy - fx))`: the exponent is negative, so the
/// probability falls toward zero as the iteration count grows. The iteration
/// count plays the role of an inverse temperature.
///
/// # Examples
///
/// ```
/// use tsp_anneal::anneal::accept_probability;
///
/// assert_eq!(accept_probability(10, 1.0, -5.0, -6.0), 1.0);
/// assert!((accept_probability(1, 1.0, -6.0, -5.0) - 0.5).abs() < 1e-12);
/// ```
pub fn accept_probability(iteration: usize, cooling: f64, fy: f64, fx: f64) -> f64 {
    if fy >= fx {
        return 1.0;
    }
    ((iteration + 1) as f64).powf(cooling * (fy - fx))
}
