// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — Nuclear Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Immutable physics inputs shared by every channel.

use deex_math::quadrature::QuadratureConfig;
use deex_nuclear::barrier::CoulombBarrier;
use deex_nuclear::corrections::CorrectionTables;
use deex_nuclear::level_density::LevelDensity;
use deex_nuclear::nuclide::{LiquidDropNuclides, NuclideProperties};
use deex_types::config::DeexcitationConfig;

/// Configuration, correction tables and the nuclide provider.
///
/// Built once and only read afterwards, so one instance serves any number
/// of concurrent decay chains.
pub struct NuclearModel {
    config: DeexcitationConfig,
    tables: CorrectionTables,
    nuclides: Box<dyn NuclideProperties>,
}

impl NuclearModel {
    pub fn new(config: DeexcitationConfig, nuclides: Box<dyn NuclideProperties>) -> Self {
        NuclearModel {
            config,
            tables: CorrectionTables::standard(),
            nuclides,
        }
    }

    pub fn with_liquid_drop(config: DeexcitationConfig) -> Self {
        NuclearModel::new(config, Box::new(LiquidDropNuclides::new()))
    }

    pub fn config(&self) -> &DeexcitationConfig {
        &self.config
    }

    pub fn tables(&self) -> &CorrectionTables {
        &self.tables
    }

    pub fn nuclides(&self) -> &dyn NuclideProperties {
        self.nuclides.as_ref()
    }

    pub fn level_density(&self) -> LevelDensity<'_> {
        LevelDensity::new(&self.config.level_density, &self.tables)
    }

    pub fn barrier(&self) -> CoulombBarrier {
        CoulombBarrier::from_config(&self.config.barrier)
    }

    /// Quadrature settings with the given absolute tolerance.
    pub fn quadrature(&self, abs_tol: f64) -> QuadratureConfig {
        QuadratureConfig {
            rel_tol: self.config.quadrature.rel_tol,
            abs_tol,
            max_depth: self.config.quadrature.max_depth,
        }
    }

    pub fn ground_state_mass(&self, a: u32, z: u32) -> f64 {
        self.nuclides.ground_state_mass(a, z)
    }
}

impl std::fmt::Debug for NuclearModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NuclearModel")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
