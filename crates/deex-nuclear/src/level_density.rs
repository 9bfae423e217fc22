// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — Level Density
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Gilbert–Cameron composite level density.
//!
//! Below the matching energy E_x = U_x + δ the constant-temperature form
//!   ρ(U) = √π/12 · exp((U - E_0)/T) / T
//! is used, above it the back-shifted Fermi gas
//!   ρ(U) = √π/12 · exp(2√(a(U-δ))) / (a^{1/4} (U-δ)^{5/4}).
//! T and E_0 make the two branches meet at E_x. The level-density
//! parameter follows Ignatyuk:
//!   a(U) = ã · (1 + δW · (1 - exp(-γU)) / U),  ã = αA + βA^{2/3}.
//!
//! Everything is returned as a logarithm; widths only need ratios and the
//! densities themselves overflow for heavy, hot nuclei.

use crate::corrections::CorrectionTables;
use deex_types::config::LevelDensityConfig;
use deex_types::constants::LEVEL_DENSITY_PREFACTOR;

/// Shell damping is never allowed to push a(U) below this fraction of ã.
const MIN_PARAMETER_FRACTION: f64 = 0.25;

/// Smallest excitation handed to the Fermi-gas branch [MeV].
const MIN_FERMI_GAS_ENERGY: f64 = 1e-6;

/// Level-density model bound to one configuration and one set of tables.
#[derive(Debug, Clone, Copy)]
pub struct LevelDensity<'a> {
    config: &'a LevelDensityConfig,
    tables: &'a CorrectionTables,
}

impl<'a> LevelDensity<'a> {
    pub fn new(config: &'a LevelDensityConfig, tables: &'a CorrectionTables) -> Self {
        LevelDensity { config, tables }
    }

    /// Asymptotic parameter ã [1/MeV].
    pub fn asymptotic_parameter(&self, a: u32) -> f64 {
        let af = a as f64;
        self.config.alpha * af + self.config.beta * af.powf(2.0 / 3.0)
    }

    /// Shell correction δW [MeV], zero when disabled or outside the table.
    pub fn shell_correction(&self, a: u32, z: u32) -> f64 {
        if !self.config.shell_effects {
            return 0.0;
        }
        self.tables.shell(a.saturating_sub(z), z).or_zero()
    }

    /// Pairing shift δ [MeV], zero when disabled or outside the table.
    pub fn pairing_shift(&self, a: u32, z: u32) -> f64 {
        if !self.config.pairing_effects {
            return 0.0;
        }
        self.tables.pairing(a.saturating_sub(z), z).or_zero()
    }

    /// Energy-dependent level-density parameter a(U) [1/MeV].
    pub fn parameter(&self, a: u32, z: u32, u: f64) -> f64 {
        let a_tilde = self.asymptotic_parameter(a);
        let dw = self.shell_correction(a, z);
        if dw == 0.0 {
            return a_tilde;
        }
        let gamma = self.config.gamma;
        let damping = if u > 1e-6 {
            (1.0 - (-gamma * u).exp()) / u
        } else {
            gamma
        };
        (a_tilde * (1.0 + dw * damping)).max(MIN_PARAMETER_FRACTION * a_tilde)
    }

    /// Nuclear temperature of a Fermi gas, T = sqrt(U/a) [MeV].
    pub fn temperature(&self, a: u32, z: u32, u: f64) -> f64 {
        if u <= 0.0 {
            return 0.0;
        }
        (u / self.parameter(a, z, u)).sqrt()
    }

    /// ln ρ(U) for nucleus (A, Z) at excitation `u` [MeV].
    pub fn ln_density(&self, a: u32, z: u32, u: f64) -> f64 {
        let delta = self.pairing_shift(a, z);
        let ux = 2.5 + 150.0 / a as f64;
        let ex = ux + delta;
        let ax = self.parameter(a, z, ux);
        let inv_t = (ax / ux).sqrt() - 1.5 / ux;

        if u < ex && inv_t > 0.0 {
            let t = 1.0 / inv_t;
            let e0 = ex - t * (t.ln() - 0.25 * ax.ln() - 1.25 * ux.ln() + 2.0 * (ax * ux).sqrt());
            return LEVEL_DENSITY_PREFACTOR.ln() + (u - e0) / t - t.ln();
        }

        let uf = (u - delta).max(MIN_FERMI_GAS_ENERGY);
        let af = self.parameter(a, z, uf);
        LEVEL_DENSITY_PREFACTOR.ln() + 2.0 * (af * uf).sqrt() - 0.25 * af.ln() - 1.25 * uf.ln()
    }

    pub fn density(&self, a: u32, z: u32, u: f64) -> f64 {
        self.ln_density(a, z, u).exp()
    }
}
