// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — Root Finding
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bracketed scalar root finding.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult {
    pub root: f64,
    /// False when `max_iter` ran out before the bracket shrank below `tol`.
    pub converged: bool,
    pub iterations: usize,
}

/// Bisection on [lo, hi].
///
/// Returns `None` when the interval does not bracket a sign change or an
/// endpoint evaluates to a non-finite value.
pub fn bisect<F: Fn(f64) -> f64>(
    f: F,
    lo: f64,
    hi: f64,
    tol: f64,
    max_iter: usize,
) -> Option<RootResult> {
    let (mut lo, mut hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let mut f_lo = f(lo);
    let f_hi = f(hi);
    if !f_lo.is_finite() || !f_hi.is_finite() {
        return None;
    }
    if f_lo == 0.0 {
        return Some(RootResult {
            root: lo,
            converged: true,
            iterations: 0,
        });
    }
    if f_hi == 0.0 {
        return Some(RootResult {
            root: hi,
            converged: true,
            iterations: 0,
        });
    }
    if f_lo.signum() == f_hi.signum() {
        return None;
    }

    for iter in 1..=max_iter {
        let mid = 0.5 * (lo + hi);
        let f_mid = f(mid);
        if f_mid == 0.0 || 0.5 * (hi - lo) < tol {
            return Some(RootResult {
                root: mid,
                converged: true,
                iterations: iter,
            });
        }
        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }

    Some(RootResult {
        root: 0.5 * (lo + hi),
        converged: false,
        iterations: max_iter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bisect_sqrt2() {
        let r = bisect(|x| x * x - 2.0, 0.0, 2.0, 1e-12, 200).unwrap();
        assert!(r.converged);
        assert!((r.root - 2f64.sqrt()).abs() < 1e-11, "root = {}", r.root);
    }

    #[test]
    fn test_bisect_reversed_bounds() {
        let r = bisect(|x| x - 0.25, 1.0, 0.0, 1e-12, 200).unwrap();
        assert!((r.root - 0.25).abs() < 1e-11);
    }

    #[test]
    fn test_bisect_not_bracketed() {
        assert!(bisect(|x| x * x + 1.0, -1.0, 1.0, 1e-10, 100).is_none());
    }

    #[test]
    fn test_bisect_endpoint_root() {
        let r = bisect(|x| x, 0.0, 3.0, 1e-10, 100).unwrap();
        assert_eq!(r.root, 0.0);
        assert_eq!(r.iterations, 0);
    }

    #[test]
    fn test_bisect_iteration_cap() {
        let r = bisect(|x| x - 0.123_456_789, 0.0, 1.0, 1e-15, 5).unwrap();
        assert!(!r.converged);
        assert_eq!(r.iterations, 5);
        assert!((r.root - 0.123_456_789).abs() < 1.0 / 32.0);
    }
}
