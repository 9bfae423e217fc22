// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — Coulomb Barrier
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Coulomb barrier between an ejectile and the daughter nucleus.
//!
//! V = e² Z_e Z_d / (r0 (A_d^{1/3} + A_e^{1/3}))
//!
//! With thermal reduction enabled the barrier is divided by
//! 1 + sqrt(E*/(2A)), where E* and A belong to the emitting parent.

use deex_types::config::BarrierConfig;
use deex_types::constants::ELEMENTARY_CHARGE_SQ_MEV_FM;

#[derive(Debug, Clone, Copy)]
pub struct CoulombBarrier {
    r0_fm: f64,
    thermal_reduction: bool,
}

impl CoulombBarrier {
    pub fn new(r0_fm: f64, thermal_reduction: bool) -> Self {
        CoulombBarrier {
            r0_fm,
            thermal_reduction,
        }
    }

    pub fn from_config(config: &BarrierConfig) -> Self {
        CoulombBarrier::new(config.r0_fm, config.thermal_reduction)
    }

    /// Touching-sphere distance [fm].
    pub fn radius(&self, a_daughter: u32, a_ejectile: u32) -> f64 {
        self.r0_fm * ((a_daughter as f64).cbrt() + (a_ejectile as f64).cbrt())
    }

    /// Barrier height [MeV] for emitting (A_e, Z_e) from a parent at
    /// excitation `excitation_mev`, leaving (A_d, Z_d). Zero for neutral
    /// ejectiles or neutral daughters.
    pub fn height(
        &self,
        a_daughter: u32,
        z_daughter: u32,
        a_ejectile: u32,
        z_ejectile: u32,
        excitation_mev: f64,
    ) -> f64 {
        if z_ejectile == 0 || z_daughter == 0 || a_daughter == 0 {
            return 0.0;
        }
        let r = self.radius(a_daughter, a_ejectile);
        let v = ELEMENTARY_CHARGE_SQ_MEV_FM * (z_ejectile * z_daughter) as f64 / r;
        if self.thermal_reduction && excitation_mev > 0.0 {
            let a_parent = (a_daughter + a_ejectile) as f64;
            v / (1.0 + (excitation_mev / (2.0 * a_parent)).sqrt())
        } else {
            v
        }
    }
}
