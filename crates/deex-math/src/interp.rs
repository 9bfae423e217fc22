// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — Interpolation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Piecewise-linear interpolation and tabulated inverse-CDF sampling.

use ndarray::Array1;

/// Linear interpolation in a table with ascending `xs`.
///
/// Clamps to the end values outside the table.
pub fn interp1d(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    let n = xs.len().min(ys.len());
    if n == 0 {
        return 0.0;
    }
    if n == 1 || x <= xs[0] {
        return ys[0];
    }
    if x >= xs[n - 1] {
        return ys[n - 1];
    }
    let i = xs[..n].partition_point(|&v| v <= x).clamp(1, n - 1);
    let (x0, x1) = (xs[i - 1], xs[i]);
    let t = if x1 > x0 { (x - x0) / (x1 - x0) } else { 0.0 };
    ys[i - 1] + t * (ys[i] - ys[i - 1])
}

/// Normalized cumulative distribution of a tabulated density.
///
/// The density is integrated with the trapezoid rule; `sample` inverts the
/// piecewise-linear CDF, so one uniform draw yields one variate.
#[derive(Debug, Clone)]
pub struct CumulativeTable {
    x: Array1<f64>,
    cdf: Array1<f64>,
    total: f64,
}

impl CumulativeTable {
    /// Build from grid points and density values.
    ///
    /// Negative or non-finite densities count as zero. Returns `None` when
    /// the grid has fewer than two points, the lengths differ, or the
    /// density integrates to zero.
    pub fn from_density(x: Array1<f64>, density: &Array1<f64>) -> Option<Self> {
        let n = x.len();
        if n < 2 || density.len() != n {
            return None;
        }
        let clean = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        let mut cdf = Array1::zeros(n);
        let mut running = 0.0;
        for i in 1..n {
            let dx = x[i] - x[i - 1];
            running += 0.5 * (clean(density[i - 1]) + clean(density[i])) * dx;
            cdf[i] = running;
        }
        if !(running > 0.0) || !running.is_finite() {
            return None;
        }
        cdf.mapv_inplace(|c| c / running);
        Some(CumulativeTable {
            x,
            cdf,
            total: running,
        })
    }

    /// Build from the mass of each cell [x_{i-1}, x_i] of a piecewise-constant
    /// density; `weights` has one entry per cell.
    ///
    /// Same rejection rules as `from_density`.
    pub fn from_cell_weights(x: Array1<f64>, weights: &Array1<f64>) -> Option<Self> {
        let n = x.len();
        if n < 2 || weights.len() + 1 != n {
            return None;
        }
        let mut cdf = Array1::zeros(n);
        let mut running = 0.0;
        for (i, &w) in weights.iter().enumerate() {
            if w.is_finite() && w > 0.0 {
                running += w;
            }
            cdf[i + 1] = running;
        }
        if !(running > 0.0) || !running.is_finite() {
            return None;
        }
        cdf.mapv_inplace(|c| c / running);
        Some(CumulativeTable {
            x,
            cdf,
            total: running,
        })
    }

    /// Unnormalized area under the tabulated density.
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn lower(&self) -> f64 {
        self.x[0]
    }

    pub fn upper(&self) -> f64 {
        self.x[self.x.len() - 1]
    }

    /// Inverse CDF at `u` in [0, 1).
    pub fn sample(&self, u: f64) -> f64 {
        self.sample_with_density(u).0
    }

    /// Inverse CDF at `u` together with the unnormalized piecewise-constant
    /// density of the cell the variate falls in.
    ///
    /// Inverting a piecewise-linear CDF is exact for that step density, so
    /// the pair can serve as a rejection envelope.
    pub fn sample_with_density(&self, u: f64) -> (f64, f64) {
        let u = u.clamp(0.0, 1.0);
        let n = self.cdf.len();
        let i = match self.cdf.iter().position(|&c| c >= u) {
            Some(0) => return (self.x[0], self.cell_density(1)),
            Some(i) => i,
            None => return (self.x[n - 1], self.cell_density(n - 1)),
        };
        let (c0, c1) = (self.cdf[i - 1], self.cdf[i]);
        let (x0, x1) = (self.x[i - 1], self.x[i]);
        if c1 <= c0 {
            return (x0, 0.0);
        }
        (
            x0 + (u - c0) / (c1 - c0) * (x1 - x0),
            self.cell_density(i),
        )
    }

    /// Density of cell [x_{i-1}, x_i], i >= 1.
    fn cell_density(&self, i: usize) -> f64 {
        let dx = self.x[i] - self.x[i - 1];
        if dx <= 0.0 {
            return 0.0;
        }
        (self.cdf[i] - self.cdf[i - 1]) * self.total / dx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interp1d_nodes_and_midpoints() {
        let xs = [0.0, 1.0, 3.0];
        let ys = [0.0, 10.0, 30.0];
        assert!((interp1d(&xs, &ys, 1.0) - 10.0).abs() < 1e-12);
        assert!((interp1d(&xs, &ys, 0.5) - 5.0).abs() < 1e-12);
        assert!((interp1d(&xs, &ys, 2.0) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_interp1d_clamps() {
        let xs = [10.0, 20.0];
        let ys = [1.0, 2.0];
        assert_eq!(interp1d(&xs, &ys, 0.0), 1.0);
        assert_eq!(interp1d(&xs, &ys, 100.0), 2.0);
    }

    #[test]
    fn test_uniform_density_inverts_linearly() {
        let x = Array1::linspace(2.0, 6.0, 9);
        let pdf = Array1::from_elem(9, 3.0);
        let table = CumulativeTable::from_density(x, &pdf).unwrap();
        assert!((table.total() - 12.0).abs() < 1e-12);
        assert!((table.sample(0.0) - 2.0).abs() < 1e-12);
        assert!((table.sample(0.5) - 4.0).abs() < 1e-12);
        assert!((table.sample(0.25) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_density_rejected() {
        let x = Array1::linspace(0.0, 1.0, 5);
        let pdf = Array1::zeros(5);
        assert!(CumulativeTable::from_density(x, &pdf).is_none());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let x = Array1::linspace(0.0, 1.0, 5);
        let pdf = Array1::from_elem(4, 1.0);
        assert!(CumulativeTable::from_density(x, &pdf).is_none());
    }

    #[test]
    fn test_samples_follow_mass() {
        // All mass in the last bin: every sample lands there.
        let x = Array1::linspace(0.0, 4.0, 5);
        let pdf = Array1::from(vec![0.0, 0.0, 0.0, 0.0, 1.0]);
        let table = CumulativeTable::from_density(x, &pdf).unwrap();
        for k in 0..10 {
            let u = k as f64 / 10.0 + 0.01;
            let s = table.sample(u);
            assert!(s >= 3.0 && s <= 4.0, "u={u} -> {s}");
        }
    }

    #[test]
    fn test_cell_weights_step_density() {
        let x = Array1::linspace(0.0, 3.0, 4);
        let w = Array1::from(vec![1.0, 0.0, 3.0]);
        let table = CumulativeTable::from_cell_weights(x, &w).unwrap();
        assert!((table.total() - 4.0).abs() < 1e-12);
        let (x_lo, d_lo) = table.sample_with_density(0.1);
        assert!(x_lo < 1.0);
        assert!((d_lo - 1.0).abs() < 1e-12);
        let (x_hi, d_hi) = table.sample_with_density(0.6);
        assert!(x_hi > 2.0 && x_hi < 3.0);
        assert!((d_hi - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_cell_weights_length_checked() {
        let x = Array1::linspace(0.0, 1.0, 3);
        assert!(CumulativeTable::from_cell_weights(x.clone(), &Array1::from_elem(3, 1.0)).is_none());
        assert!(CumulativeTable::from_cell_weights(x, &Array1::zeros(2)).is_none());
    }
}
