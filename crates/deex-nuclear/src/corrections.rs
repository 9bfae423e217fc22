// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — Correction Tables
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Pairing and shell corrections indexed by (N, Z).
//!
//! Both tables are separable, C(N, Z) = C_Z(Z) + C_N(N), and only defined
//! on the rectangle spanned by their Z and N ranges. A lookup outside the
//! rectangle reports `found = false`; callers apply zero correction.
//! The tables are compiled in, so `CorrectionTables` is free to build and
//! safe to share between threads.

use std::ops::RangeInclusive;

/// Pairing energy P(Z) [MeV], Z = 10..=98.
const PAIRING_Z: [f64; 89] = [
    2.75, 0.00, 2.31, 0.00, 2.27, 0.00, 2.24, 0.00, 1.94, 0.00, // 10
    1.81, 0.00, 1.90, 0.00, 1.77, 0.00, 1.57, 0.00, 1.61, 0.00, // 20
    1.64, 0.00, 1.45, 0.00, 1.39, 0.00, 1.48, 0.00, 1.41, 0.00, // 30
    1.26, 0.00, 1.32, 0.00, 1.35, 0.00, 1.21, 0.00, 1.17, 0.00, // 40
    1.26, 0.00, 1.20, 0.00, 1.09, 0.00, 1.14, 0.00, 1.18, 0.00, // 50
    1.06, 0.00, 1.03, 0.00, 1.12, 0.00, 1.06, 0.00, 0.97, 0.00, // 60
    1.02, 0.00, 1.06, 0.00, 0.95, 0.00, 0.94, 0.00, 1.01, 0.00, // 70
    0.96, 0.00, 0.88, 0.00, 0.94, 0.00, 0.96, 0.00, 0.87, 0.00, // 80
    0.86, 0.00, 0.93, 0.00, 0.89, 0.00, 0.81, 0.00, 0.87, // 90
];

/// Pairing energy P(N) [MeV], N = 10..=150.
const PAIRING_N: [f64; 141] = [
    2.75, 0.00, 2.31, 0.00, 2.27, 0.00, 2.24, 0.00, 1.94, 0.00, // 10
    1.81, 0.00, 1.90, 0.00, 1.77, 0.00, 1.57, 0.00, 1.61, 0.00, // 20
    1.64, 0.00, 1.45, 0.00, 1.39, 0.00, 1.48, 0.00, 1.41, 0.00, // 30
    1.26, 0.00, 1.32, 0.00, 1.35, 0.00, 1.21, 0.00, 1.17, 0.00, // 40
    1.26, 0.00, 1.20, 0.00, 1.09, 0.00, 1.14, 0.00, 1.18, 0.00, // 50
    1.06, 0.00, 1.03, 0.00, 1.12, 0.00, 1.06, 0.00, 0.97, 0.00, // 60
    1.02, 0.00, 1.06, 0.00, 0.95, 0.00, 0.94, 0.00, 1.01, 0.00, // 70
    0.96, 0.00, 0.88, 0.00, 0.94, 0.00, 0.96, 0.00, 0.87, 0.00, // 80
    0.86, 0.00, 0.93, 0.00, 0.89, 0.00, 0.81, 0.00, 0.87, 0.00, // 90
    0.89, 0.00, 0.81, 0.00, 0.80, 0.00, 0.87, 0.00, 0.83, 0.00, // 100
    0.76, 0.00, 0.81, 0.00, 0.84, 0.00, 0.76, 0.00, 0.75, 0.00, // 110
    0.82, 0.00, 0.78, 0.00, 0.72, 0.00, 0.77, 0.00, 0.79, 0.00, // 120
    0.71, 0.00, 0.71, 0.00, 0.77, 0.00, 0.73, 0.00, 0.68, 0.00, // 130
    0.73, 0.00, 0.75, 0.00, 0.68, 0.00, 0.68, 0.00, 0.74, 0.00, // 140
    0.70, // 150
];

/// Shell correction S(Z) [MeV], Z = 8..=110.
const SHELL_Z: [f64; 103] = [
    -1.90, 0.17, 1.56, 2.41, 2.84, 2.92, 2.72, 2.27, 1.61, 0.78, // 8
    -0.21, -1.33, -2.58, -1.99, -1.63, -1.45, -1.45, -1.61, -1.91, -2.34, // 18
    -2.88, -1.61, -0.52, 0.40, 1.16, 1.76, 2.23, 2.57, 2.79, 2.89, // 28
    2.89, 2.79, 2.60, 2.32, 1.95, 1.51, 0.99, 0.40, -0.26, -0.98, // 38
    -1.76, -2.60, -3.50, -2.41, -1.43, -0.54, 0.25, 0.95, 1.57, 2.10, // 48
    2.55, 2.93, 3.24, 3.47, 3.64, 3.74, 3.78, 3.76, 3.68, 3.54, // 58
    3.35, 3.11, 2.81, 2.47, 2.08, 1.65, 1.17, 0.64, 0.08, -0.53, // 68
    -1.17, -1.86, -2.58, -3.34, -4.13, -3.19, -2.32, -1.50, -0.74, -0.04, // 78
    0.61, 1.20, 1.74, 2.23, 2.67, 3.07, 3.41, 3.72, 3.97, 4.19, // 88
    4.36, 4.49, 4.57, 4.62, 4.64, 4.61, 4.55, 4.45, 4.31, 4.14, // 98
    3.94, 3.70, 3.43, // 108
];

/// Shell correction S(N) [MeV], N = 8..=160.
const SHELL_N: [f64; 153] = [
    -1.90, 0.17, 1.56, 2.41, 2.84, 2.92, 2.72, 2.27, 1.61, 0.78, // 8
    -0.21, -1.33, -2.58, -1.99, -1.63, -1.45, -1.45, -1.61, -1.91, -2.34, // 18
    -2.88, -1.61, -0.52, 0.40, 1.16, 1.76, 2.23, 2.57, 2.79, 2.89, // 28
    2.89, 2.79, 2.60, 2.32, 1.95, 1.51, 0.99, 0.40, -0.26, -0.98, // 38
    -1.76, -2.60, -3.50, -2.41, -1.43, -0.54, 0.25, 0.95, 1.57, 2.10, // 48
    2.55, 2.93, 3.24, 3.47, 3.64, 3.74, 3.78, 3.76, 3.68, 3.54, // 58
    3.35, 3.11, 2.81, 2.47, 2.08, 1.65, 1.17, 0.64, 0.08, -0.53, // 68
    -1.17, -1.86, -2.58, -3.34, -4.13, -3.19, -2.32, -1.50, -0.74, -0.04, // 78
    0.61, 1.20, 1.74, 2.23, 2.67, 3.07, 3.41, 3.72, 3.97, 4.19, // 88
    4.36, 4.49, 4.57, 4.62, 4.64, 4.61, 4.55, 4.45, 4.31, 4.14, // 98
    3.94, 3.70, 3.43, 3.13, 2.80, 2.44, 2.05, 1.63, 1.18, 0.70, // 108
    0.20, -0.33, -0.89, -1.47, -2.08, -2.72, -3.37, -4.06, -4.76, -3.94, // 118
    -3.17, -2.42, -1.72, -1.05, -0.42, 0.17, 0.73, 1.26, 1.75, 2.21, // 128
    2.63, 3.03, 3.39, 3.73, 4.03, 4.30, 4.54, 4.76, 4.94, 5.10, // 138
    5.23, 5.33, 5.41, 5.46, 5.48, 5.48, 5.45, 5.40, 5.32, 5.22, // 148
    5.10, 4.95, 4.79, // 158
];

/// Result of a table lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correction {
    /// Correction in MeV; zero when not found.
    pub value: f64,
    pub found: bool,
}

impl Correction {
    pub const NOT_FOUND: Correction = Correction {
        value: 0.0,
        found: false,
    };

    /// Value to apply: the tabulated number, or zero outside the table.
    pub fn or_zero(self) -> f64 {
        if self.found {
            self.value
        } else {
            0.0
        }
    }
}

/// Separable (N, Z) correction table.
#[derive(Debug, Clone, Copy)]
pub struct CorrectionTable {
    z_min: u32,
    z_values: &'static [f64],
    n_min: u32,
    n_values: &'static [f64],
}

impl CorrectionTable {
    pub const fn new(
        z_min: u32,
        z_values: &'static [f64],
        n_min: u32,
        n_values: &'static [f64],
    ) -> Self {
        CorrectionTable {
            z_min,
            z_values,
            n_min,
            n_values,
        }
    }

    pub fn z_range(&self) -> RangeInclusive<u32> {
        self.z_min..=self.z_min + self.z_values.len() as u32 - 1
    }

    pub fn n_range(&self) -> RangeInclusive<u32> {
        self.n_min..=self.n_min + self.n_values.len() as u32 - 1
    }

    /// Correction for neutron number `n` and charge `z`.
    pub fn get(&self, n: u32, z: u32) -> Correction {
        if !self.z_range().contains(&z) || !self.n_range().contains(&n) {
            return Correction::NOT_FOUND;
        }
        let zi = (z - self.z_min) as usize;
        let ni = (n - self.n_min) as usize;
        Correction {
            value: self.z_values[zi] + self.n_values[ni],
            found: true,
        }
    }
}

/// The immutable correction data consumed by the level-density model.
#[derive(Debug, Clone)]
pub struct CorrectionTables {
    pub pairing: CorrectionTable,
    pub shell: CorrectionTable,
}

impl CorrectionTables {
    /// The compiled-in pairing and shell tables.
    pub fn standard() -> Self {
        CorrectionTables {
            pairing: CorrectionTable::new(10, &PAIRING_Z, 10, &PAIRING_N),
            shell: CorrectionTable::new(8, &SHELL_Z, 8, &SHELL_N),
        }
    }

    pub fn pairing(&self, n: u32, z: u32) -> Correction {
        self.pairing.get(n, z)
    }

    pub fn shell(&self, n: u32, z: u32) -> Correction {
        self.shell.get(n, z)
    }
}

impl Default for CorrectionTables {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_ranges() {
        let t = CorrectionTables::standard();
        assert_eq!(t.pairing.z_range(), 10..=98);
        assert_eq!(t.pairing.n_range(), 10..=150);
        assert_eq!(t.shell.z_range(), 8..=110);
        assert_eq!(t.shell.n_range(), 8..=160);
    }

    #[test]
    fn test_out_of_bounds_not_found() {
        let t = CorrectionTables::standard();
        for (n, z) in [(2, 2), (9, 40), (40, 9), (151, 60), (60, 99), (0, 0)] {
            let c = t.pairing(n, z);
            assert!(!c.found, "pairing({n},{z}) should be outside");
            assert_eq!(c.or_zero(), 0.0);
        }
        assert!(!t.shell(200, 82).found);
        assert!(!t.shell(126, 120).found);
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let t = CorrectionTables::standard();
        let first = t.shell(126, 82);
        for _ in 0..10 {
            assert_eq!(t.shell(126, 82), first);
        }
        assert_eq!(t.pairing(20, 20), t.pairing(20, 20));
    }

    #[test]
    fn test_pairing_even_odd_pattern() {
        let t = CorrectionTables::standard();
        let even_even = t.pairing(20, 20).value;
        let odd_odd = t.pairing(21, 21).value;
        let odd_a = t.pairing(21, 20).value;
        assert!((even_even - 3.62).abs() < 1e-12, "P(20,20) = {even_even}");
        assert_eq!(odd_odd, 0.0);
        assert!(odd_a > odd_odd && odd_a < even_even);
    }

    #[test]
    fn test_doubly_magic_shell_dip() {
        let t = CorrectionTables::standard();
        let pb208 = t.shell(126, 82).value;
        let midshell = t.shell(100, 66).value;
        assert!(pb208 < -8.0, "S(Pb208) = {pb208}");
        assert!(midshell > 0.0, "S(midshell) = {midshell}");
    }

    #[test]
    fn test_tables_are_finite() {
        let t = CorrectionTables::standard();
        for z in t.shell.z_range() {
            for n in t.shell.n_range() {
                assert!(t.shell(n, z).value.is_finite());
            }
        }
    }
}
