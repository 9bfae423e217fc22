// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — Nuclide Properties
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Ground-state nuclide properties.
//!
//! `NuclideProperties` is the seam to an external mass table. The bundled
//! `LiquidDropNuclides` uses measured binding energies for every nuclide
//! that can be emitted as a GEM fragment (A <= 28) and the Weizsäcker
//! semi-empirical mass formula elsewhere.

use deex_types::constants::{NEUTRON_MASS_MEV, PROTON_MASS_MEV};

/// Volume term [MeV].
const SEMF_VOLUME: f64 = 15.75;
/// Surface term [MeV].
const SEMF_SURFACE: f64 = 17.8;
/// Coulomb term [MeV].
const SEMF_COULOMB: f64 = 0.711;
/// Symmetry term [MeV].
const SEMF_ASYMMETRY: f64 = 23.7;
/// Pairing term [MeV].
const SEMF_PAIRING: f64 = 11.18;

/// Measured total binding energies [MeV], sorted by (A, Z).
const MEASURED_BINDING: &[(u32, u32, f64)] = &[
    (1, 0, 0.0),
    (1, 1, 0.0),
    (2, 1, 2.224_566),
    (3, 1, 8.481_798),
    (3, 2, 7.718_043),
    (4, 2, 28.295_673),
    (6, 2, 29.268_7),
    (6, 3, 31.994_0),
    (7, 3, 39.244_6),
    (7, 4, 37.600_4),
    (8, 2, 31.397_7),
    (8, 3, 41.277_3),
    (8, 4, 56.499_5),
    (8, 5, 37.737_8),
    (9, 3, 45.340_4),
    (9, 4, 58.165_0),
    (10, 4, 64.977_1),
    (10, 5, 64.750_7),
    (10, 6, 60.320_3),
    (11, 4, 65.481_2),
    (11, 5, 76.205_1),
    (11, 6, 73.439_9),
    (12, 4, 68.649_7),
    (12, 5, 79.574_8),
    (12, 6, 92.161_7),
    (12, 7, 74.041_8),
    (13, 5, 84.453_2),
    (13, 6, 97.108_0),
    (13, 7, 94.105_3),
    (14, 6, 105.284_5),
    (14, 7, 104.658_7),
    (14, 8, 98.732_3),
    (15, 6, 106.502_6),
    (15, 7, 115.491_9),
    (15, 8, 111.955_5),
    (16, 6, 110.753_0),
    (16, 7, 117.981_9),
    (16, 8, 127.619_3),
    (17, 7, 123.867_7),
    (17, 8, 131.762_4),
    (17, 9, 128.219_6),
    (18, 8, 139.807_7),
    (18, 9, 137.369_3),
    (18, 10, 132.143_0),
    (19, 8, 143.763_6),
    (19, 9, 147.801_3),
    (19, 10, 143.780_9),
    (20, 8, 151.371_4),
    (20, 9, 154.403_0),
    (20, 10, 160.644_8),
    (21, 9, 162.504_4),
    (21, 10, 167.406_0),
    (21, 11, 163.076_5),
    (22, 10, 177.770_3),
    (22, 11, 174.145_3),
    (22, 12, 168.580_8),
    (23, 10, 182.970_9),
    (23, 11, 186.564_3),
    (23, 12, 181.725_8),
    (24, 10, 191.835_8),
    (24, 11, 193.523_1),
    (24, 12, 198.257_0),
    (25, 11, 202.535_4),
    (25, 12, 205.587_6),
    (26, 12, 216.680_6),
    (27, 12, 223.124_5),
    (28, 12, 231.627_8),
];

/// Ground-state properties of any (A, Z).
///
/// Implementations must be pure: the engine shares one provider across
/// threads and calls it from every decay step.
pub trait NuclideProperties: Send + Sync {
    /// Total binding energy [MeV]; may be negative for unbound systems.
    fn binding_energy(&self, a: u32, z: u32) -> f64;

    /// Ground-state nuclear mass [MeV].
    fn ground_state_mass(&self, a: u32, z: u32) -> f64 {
        let n = a.saturating_sub(z);
        z as f64 * PROTON_MASS_MEV + n as f64 * NEUTRON_MASS_MEV - self.binding_energy(a, z)
    }

    /// Ground-state spin [ħ]. Defaults to the even/odd systematics.
    fn ground_state_spin(&self, a: u32, z: u32) -> f64 {
        let n = a.saturating_sub(z);
        match (z % 2, n % 2) {
            (0, 0) => 0.0,
            (1, 1) => 1.0,
            _ => 0.5,
        }
    }
}

/// Measured light-nuclide binding energies plus the liquid-drop formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiquidDropNuclides;

impl LiquidDropNuclides {
    pub fn new() -> Self {
        LiquidDropNuclides
    }

    /// Tabulated value, if this nuclide is in the measured set.
    pub fn measured_binding(a: u32, z: u32) -> Option<f64> {
        MEASURED_BINDING
            .binary_search_by(|&(ta, tz, _)| (ta, tz).cmp(&(a, z)))
            .ok()
            .map(|i| MEASURED_BINDING[i].2)
    }

    /// Weizsäcker formula binding energy [MeV].
    pub fn semf_binding(a: u32, z: u32) -> f64 {
        if a <= 1 {
            return 0.0;
        }
        let af = a as f64;
        let zf = z as f64;
        let n = a.saturating_sub(z);
        let a13 = af.cbrt();
        let asym = af - 2.0 * zf;
        let pairing = match (z % 2, n % 2) {
            (0, 0) => SEMF_PAIRING / af.sqrt(),
            (1, 1) => -SEMF_PAIRING / af.sqrt(),
            _ => 0.0,
        };
        SEMF_VOLUME * af - SEMF_SURFACE * a13 * a13 - SEMF_COULOMB * zf * (zf - 1.0) / a13
            - SEMF_ASYMMETRY * asym * asym / af
            + pairing
    }
}

impl NuclideProperties for LiquidDropNuclides {
    fn binding_energy(&self, a: u32, z: u32) -> f64 {
        Self::measured_binding(a, z).unwrap_or_else(|| Self::semf_binding(a, z))
    }
}
