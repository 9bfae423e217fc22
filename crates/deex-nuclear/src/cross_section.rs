// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — Inverse Cross Sections
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Dostrovsky parameterisation of the inverse reaction cross section.
//!
//! Neutrons:  σ(ε) = π R² α (1 + β/ε),
//!            α = 0.76 + 2.2 A_d^{-1/3},  β = (2.12 A_d^{-2/3} - 0.05) / α.
//! Charged:   σ(ε) = π R² (1 + c)(1 - kV/ε)  for ε > kV, else 0.
//!
//! k and c depend on the daughter charge and are interpolated in Z_d.
//! Deuterons, tritons and ³He are derived from the proton and alpha rows;
//! heavier fragments use k = 1, c = 0.
//!
//! Cross sections are in fm².

use deex_math::interp::interp1d;
use std::f64::consts::PI;

const Z_GRID: [f64; 5] = [10.0, 20.0, 30.0, 50.0, 70.0];
const K_PROTON: [f64; 5] = [0.42, 0.58, 0.68, 0.77, 0.80];
const C_PROTON: [f64; 5] = [0.50, 0.28, 0.10, 0.0, 0.0];
const K_ALPHA: [f64; 5] = [0.68, 0.82, 0.91, 0.97, 0.98];

/// Shape of σ(ε) for one ejectile/daughter pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InverseCrossSection {
    Neutral { geometric: f64, alpha: f64, beta: f64 },
    Charged { geometric: f64, c: f64, k: f64 },
}

/// Barrier-penetration factors (k, c) for a charged ejectile.
pub fn penetration_factors(a_ejectile: u32, z_ejectile: u32, z_daughter: u32) -> (f64, f64) {
    let zd = z_daughter as f64;
    let kp = interp1d(&Z_GRID, &K_PROTON, zd);
    let cp = interp1d(&Z_GRID, &C_PROTON, zd);
    let ka = interp1d(&Z_GRID, &K_ALPHA, zd);
    match (a_ejectile, z_ejectile) {
        (1, 1) => (kp, cp),
        (2, 1) => (kp + 0.06, cp / 2.0),
        (3, 1) => (kp + 0.12, cp / 3.0),
        (3, 2) => (ka - 0.06, 0.0),
        (4, 2) => (ka, 0.0),
        _ => (1.0, 0.0),
    }
}

impl InverseCrossSection {
    /// Parameters for emitting (A_e, Z_e) and leaving (A_d, Z_d).
    ///
    /// Nucleons and light ions see R = r0 A_d^{1/3}; complex fragments see
    /// the touching-sphere radius r0 (A_d^{1/3} + A_e^{1/3}).
    pub fn for_pair(a_ejectile: u32, z_ejectile: u32, a_daughter: u32, z_daughter: u32, r0_fm: f64) -> Self {
        let ad13 = (a_daughter as f64).cbrt();
        let radius = if a_ejectile > 4 {
            r0_fm * (ad13 + (a_ejectile as f64).cbrt())
        } else {
            r0_fm * ad13
        };
        let geometric = PI * radius * radius;

        if z_ejectile == 0 {
            let alpha = 0.76 + 2.2 / ad13;
            let beta = (2.12 / (ad13 * ad13) - 0.05) / alpha;
            InverseCrossSection::Neutral {
                geometric,
                alpha,
                beta,
            }
        } else {
            let (k, c) = penetration_factors(a_ejectile, z_ejectile, z_daughter);
            InverseCrossSection::Charged { geometric, c, k }
        }
    }

    /// Lowest kinetic energy with a non-zero cross section [MeV].
    pub fn threshold(&self, barrier_mev: f64) -> f64 {
        match *self {
            InverseCrossSection::Neutral { .. } => 0.0,
            InverseCrossSection::Charged { k, .. } => k * barrier_mev,
        }
    }

    /// σ(ε) [fm²]; never negative.
    pub fn evaluate(&self, energy_mev: f64, barrier_mev: f64) -> f64 {
        if energy_mev <= 0.0 {
            return 0.0;
        }
        match *self {
            InverseCrossSection::Neutral {
                geometric,
                alpha,
                beta,
            } => (geometric * alpha * (1.0 + beta / energy_mev)).max(0.0),
            InverseCrossSection::Charged { geometric, c, k } => {
                let kv = k * barrier_mev;
                if energy_mev <= kv {
                    0.0
                } else {
                    geometric * (1.0 + c) * (1.0 - kv / energy_mev)
                }
            }
        }
    }

    /// σ(ε) ε [fm² MeV]. Finite at ε = 0 for neutrons, where the 1/ε term
    /// of σ cancels.
    pub fn flux_weighted(&self, energy_mev: f64, barrier_mev: f64) -> f64 {
        if energy_mev < 0.0 {
            return 0.0;
        }
        match *self {
            InverseCrossSection::Neutral {
                geometric,
                alpha,
                beta,
            } => (geometric * alpha * (energy_mev + beta)).max(0.0),
            InverseCrossSection::Charged { .. } => {
                self.evaluate(energy_mev, barrier_mev) * energy_mev
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proton_factors_on_grid() {
        let (k, c) = penetration_factors(1, 1, 20);
        assert!((k - 0.58).abs() < 1e-12);
        assert!((c - 0.28).abs() < 1e-12);
    }

    #[test]
    fn test_factors_clamp_outside_grid() {
        assert_eq!(penetration_factors(4, 2, 5), penetration_factors(4, 2, 10));
        assert_eq!(penetration_factors(4, 2, 92), penetration_factors(4, 2, 70));
    }

    #[test]
    fn test_light_ion_derivations() {
        let (kp, cp) = penetration_factors(1, 1, 30);
        let (ka, _) = penetration_factors(4, 2, 30);
        let (kd, cd) = penetration_factors(2, 1, 30);
        let (kt, ct) = penetration_factors(3, 1, 30);
        let (kh, ch) = penetration_factors(3, 2, 30);
        assert!((kd - (kp + 0.06)).abs() < 1e-12 && (cd - cp / 2.0).abs() < 1e-12);
        assert!((kt - (kp + 0.12)).abs() < 1e-12 && (ct - cp / 3.0).abs() < 1e-12);
        assert!((kh - (ka - 0.06)).abs() < 1e-12 && ch == 0.0);
        assert_eq!(penetration_factors(12, 6, 30), (1.0, 0.0));
    }

    #[test]
    fn test_neutron_cross_section_positive() {
        let sigma = InverseCrossSection::for_pair(1, 0, 207, 82, 1.5);
        assert_eq!(sigma.threshold(0.0), 0.0);
        for &e in &[0.01, 0.1, 1.0, 10.0, 100.0] {
            assert!(sigma.evaluate(e, 0.0) > 0.0);
        }
        assert_eq!(sigma.evaluate(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_neutron_flux_weight_finite_at_zero() {
        let sigma = InverseCrossSection::for_pair(1, 0, 55, 26, 1.5);
        let InverseCrossSection::Neutral { geometric, alpha, beta } = sigma else {
            panic!("neutron pair must be neutral");
        };
        let at_zero = sigma.flux_weighted(0.0, 0.0);
        assert!((at_zero - geometric * alpha * beta).abs() < 1e-12 * at_zero.abs().max(1.0));
        let e = 2.5;
        assert!((sigma.flux_weighted(e, 0.0) - sigma.evaluate(e, 0.0) * e).abs() < 1e-9);
    }

    #[test]
    fn test_charged_cross_section_closed_below_threshold() {
        let sigma = InverseCrossSection::for_pair(4, 2, 204, 80, 1.5);
        let v = 20.0;
        let thr = sigma.threshold(v);
        assert!(thr > 0.0 && thr < v);
        assert_eq!(sigma.evaluate(thr * 0.99, v), 0.0);
        assert!(sigma.evaluate(thr * 1.01, v) > 0.0);
    }

    #[test]
    fn test_charged_approaches_geometric_limit() {
        let sigma = InverseCrossSection::for_pair(12, 6, 28, 14, 1.5);
        let r = 1.5 * (28f64.cbrt() + 12f64.cbrt());
        let geo = PI * r * r;
        let far = sigma.evaluate(1e6, 5.0);
        assert!((far - geo).abs() / geo < 1e-4);
    }
}
