// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — Adaptive Quadrature
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Adaptive Gauss–Legendre quadrature on an explicit worklist.
//!
//! Each interval carries the estimate of the fixed 8-point rule over the
//! whole interval. It is bisected, the rule is applied to both halves, and
//! the halves are accepted when their sum agrees with the parent estimate:
//!   |(L + R) - W| <= max(rel_tol * |L + R|, abs_tol)
//! Otherwise both halves go back on the stack one level deeper. At
//! `max_depth` the halves are accepted as-is and the result is flagged as
//! not converged; the best estimate is still returned.

/// 8-point Gauss–Legendre abscissae on [-1, 1] (positive half).
const GL8_NODES: [f64; 4] = [
    0.183_434_642_495_649_8,
    0.525_532_409_916_329_0,
    0.796_666_477_413_626_7,
    0.960_289_856_497_536_3,
];

/// Matching weights.
const GL8_WEIGHTS: [f64; 4] = [
    0.362_683_783_378_362_0,
    0.313_706_645_877_887_3,
    0.222_381_034_453_374_5,
    0.101_228_536_290_376_3,
];

#[derive(Debug, Clone, Copy)]
pub struct QuadratureConfig {
    pub rel_tol: f64,
    pub abs_tol: f64,
    pub max_depth: u32,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            rel_tol: 1e-6,
            abs_tol: 0.0,
            max_depth: 12,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureResult {
    pub value: f64,
    /// False when at least one interval hit `max_depth` unresolved.
    pub converged: bool,
    /// Number of accepted sub-intervals.
    pub intervals: usize,
    /// Deepest level reached.
    pub depth: u32,
}

/// Fixed 8-point Gauss–Legendre rule on [a, b]; exact for degree <= 15.
pub fn gauss_legendre<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> f64 {
    let half = 0.5 * (b - a);
    let mid = 0.5 * (a + b);
    let mut sum = 0.0;
    for (x, w) in GL8_NODES.iter().zip(GL8_WEIGHTS.iter()) {
        let dx = half * x;
        sum += w * (f(mid - dx) + f(mid + dx));
    }
    sum * half
}

struct Interval {
    a: f64,
    b: f64,
    whole: f64,
    depth: u32,
}

/// Integrate `f` over [a, b] adaptively.
///
/// An empty or reversed interval integrates to zero. Accepted pieces are
/// summed in a fixed traversal order, so identical inputs give bit-identical
/// results.
pub fn adaptive_gauss<F: Fn(f64) -> f64>(
    f: F,
    a: f64,
    b: f64,
    config: QuadratureConfig,
) -> QuadratureResult {
    if !(b > a) {
        return QuadratureResult {
            value: 0.0,
            converged: true,
            intervals: 0,
            depth: 0,
        };
    }

    let mut stack = vec![Interval {
        a,
        b,
        whole: gauss_legendre(&f, a, b),
        depth: 0,
    }];
    let mut total = 0.0;
    let mut converged = true;
    let mut intervals = 0usize;
    let mut max_depth_seen = 0u32;

    while let Some(iv) = stack.pop() {
        let mid = 0.5 * (iv.a + iv.b);
        let left = gauss_legendre(&f, iv.a, mid);
        let right = gauss_legendre(&f, mid, iv.b);
        let halves = left + right;
        let depth = iv.depth + 1;
        max_depth_seen = max_depth_seen.max(depth);

        let tol = (config.rel_tol * halves.abs()).max(config.abs_tol);
        let agree = (halves - iv.whole).abs() <= tol;
        if agree || !halves.is_finite() {
            total += halves;
            intervals += 1;
            if !halves.is_finite() {
                converged = false;
            }
        } else if depth >= config.max_depth {
            total += halves;
            intervals += 1;
            converged = false;
        } else {
            // Right half is pushed first so the left half is refined first.
            stack.push(Interval {
                a: mid,
                b: iv.b,
                whole: right,
                depth,
            });
            stack.push(Interval {
                a: iv.a,
                b: mid,
                whole: left,
                depth,
            });
        }
    }

    QuadratureResult {
        value: total,
        converged,
        intervals,
        depth: max_depth_seen,
    }
}
