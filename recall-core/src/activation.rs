//! Base-Level Activation: ACT-R Declarative Memory Equations
//!
//! Each stored chunk carries the list of times it was presented. Its
//! base-level activation is:
//!   B = ln( Σ_j (t - t_j)^(-d) )
//!
//! Where:
//!   t   = current simulated time (seconds)
//!   t_j = time of the j-th presentation
//!   d   = decay parameter (0.5 in most published models)
//!
//! Retrieval latency follows from the winning activation A:
//!   T = F · e^(-f·A)
//!
//! Reference: Anderson, J. R. & Lebiere, C. (1998). "The Atomic Components of Thought."

/// Smallest age a presentation can have; keeps `(t - t_j)^(-d)` finite when a
/// chunk is queried at the instant it was stored.
pub const MIN_AGE: f64 = 0.05;

/// Core base-level learning equation.
///
/// Returns `f64::NEG_INFINITY` for a chunk with no presentations.
#[must_use]
pub fn base_level(references: &[f64], now: f64, decay: f64) -> f64 {
    let sum: f64 = references
        .iter()
        .map(|&t| (now - t).max(MIN_AGE).powf(-decay))
        .sum();
    if sum <= 0.0 {
        return f64::NEG_INFINITY;
    }
    sum.ln()
}

/// Retrieval latency for a chunk retrieved at activation `activation`.
///
/// Never negative. A failed retrieval is charged `latency(threshold, ..)`.
#[must_use]
pub fn latency(activation: f64, latency_factor: f64, latency_exponent: f64) -> f64 {
    (latency_factor * (-latency_exponent * activation).exp()).max(0.0)
}
