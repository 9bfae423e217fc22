// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{DeexError, DeexResult};
use serde::{Deserialize, Serialize};

/// Top-level engine configuration.
/// Every field has a default, so `{}` is a valid config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeexcitationConfig {
    #[serde(default)]
    pub channel_set: ChannelSet,
    /// Heaviest complex fragment registered by the GEM channel set.
    #[serde(default = "default_gem_max_mass")]
    pub gem_max_mass: u32,
    #[serde(default)]
    pub level_density: LevelDensityConfig,
    #[serde(default)]
    pub barrier: BarrierConfig,
    #[serde(default)]
    pub quadrature: QuadratureSettings,
    #[serde(default)]
    pub multifragmentation: MultifragmentationConfig,
    /// Grid size used to tabulate the ejectile spectrum for sampling.
    #[serde(default = "default_spectrum_points")]
    pub spectrum_points: usize,
    /// Excitation below this value is treated as exactly zero [MeV].
    #[serde(default = "default_excitation_floor")]
    pub excitation_floor_mev: f64,
    /// Total width below this value means no open channel [MeV].
    #[serde(default = "default_width_floor")]
    pub width_floor_mev: f64,
}

/// Which closed set of evaporation channels is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelSet {
    /// n, p, d, t, ³He, α.
    Evaporation,
    /// Light particles plus complex fragments up to `gem_max_mass`.
    #[default]
    Gem,
}

/// Level-density parameter systematics a(U) = ã(1 + δW(1 - e^{-γU})/U),
/// ã = alpha·A + beta·A^{2/3}.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDensityConfig {
    #[serde(default = "default_ld_alpha")]
    pub alpha: f64,
    #[serde(default = "default_ld_beta")]
    pub beta: f64,
    /// Shell damping rate γ [1/MeV].
    #[serde(default = "default_ld_gamma")]
    pub gamma: f64,
    /// Apply the tabulated shell correction δW.
    #[serde(default = "default_true")]
    pub shell_effects: bool,
    /// Apply the tabulated pairing shift δ.
    #[serde(default = "default_true")]
    pub pairing_effects: bool,
}

/// Coulomb barrier geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarrierConfig {
    /// Radius parameter r0 [fm] in R = r0 (A_d^{1/3} + A_e^{1/3}).
    #[serde(default = "default_r0")]
    pub r0_fm: f64,
    /// Lower the barrier by 1 + sqrt(E*/2A) for hot nuclei.
    #[serde(default = "default_true")]
    pub thermal_reduction: bool,
}

/// Adaptive quadrature tolerances for channel widths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuadratureSettings {
    #[serde(default = "default_rel_tol")]
    pub rel_tol: f64,
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
}

/// Simultaneous break-up channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultifragmentationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Break-up opens above this excitation per nucleon [MeV].
    #[serde(default = "default_mf_threshold")]
    pub threshold_mev_per_nucleon: f64,
    /// Smallest nucleus allowed to multifragment.
    #[serde(default = "default_mf_min_mass")]
    pub min_mass: u32,
    /// Asymptotic width of the break-up channel [MeV].
    #[serde(default = "default_mf_width_scale")]
    pub width_scale_mev: f64,
    /// Excitation per nucleon over which the width switches on [MeV].
    #[serde(default = "default_mf_onset")]
    pub onset_mev_per_nucleon: f64,
    /// Power-law exponent of the fragment mass distribution.
    #[serde(default = "default_mf_tau")]
    pub mass_exponent: f64,
    #[serde(default = "default_mf_attempts")]
    pub max_partition_attempts: usize,
}

fn default_true() -> bool {
    true
}
fn default_gem_max_mass() -> u32 {
    28
}
fn default_spectrum_points() -> usize {
    64
}
fn default_excitation_floor() -> f64 {
    1.0e-3
}
fn default_width_floor() -> f64 {
    1.0e-30
}
fn default_ld_alpha() -> f64 {
    0.114
}
fn default_ld_beta() -> f64 {
    0.098
}
fn default_ld_gamma() -> f64 {
    0.054
}
fn default_r0() -> f64 {
    1.5
}
fn default_rel_tol() -> f64 {
    1.0e-4
}
fn default_max_depth() -> u32 {
    12
}
fn default_mf_threshold() -> f64 {
    3.0
}
fn default_mf_min_mass() -> u32 {
    20
}
fn default_mf_width_scale() -> f64 {
    1.0e3
}
fn default_mf_onset() -> f64 {
    0.5
}
fn default_mf_tau() -> f64 {
    2.3
}
fn default_mf_attempts() -> usize {
    64
}

impl Default for LevelDensityConfig {
    fn default() -> Self {
        LevelDensityConfig {
            alpha: default_ld_alpha(),
            beta: default_ld_beta(),
            gamma: default_ld_gamma(),
            shell_effects: true,
            pairing_effects: true,
        }
    }
}

impl Default for BarrierConfig {
    fn default() -> Self {
        BarrierConfig {
            r0_fm: default_r0(),
            thermal_reduction: true,
        }
    }
}

impl Default for QuadratureSettings {
    fn default() -> Self {
        QuadratureSettings {
            rel_tol: default_rel_tol(),
            max_depth: default_max_depth(),
        }
    }
}

impl Default for MultifragmentationConfig {
    fn default() -> Self {
        MultifragmentationConfig {
            enabled: true,
            threshold_mev_per_nucleon: default_mf_threshold(),
            min_mass: default_mf_min_mass(),
            width_scale_mev: default_mf_width_scale(),
            onset_mev_per_nucleon: default_mf_onset(),
            mass_exponent: default_mf_tau(),
            max_partition_attempts: default_mf_attempts(),
        }
    }
}

impl Default for DeexcitationConfig {
    fn default() -> Self {
        DeexcitationConfig {
            channel_set: ChannelSet::default(),
            gem_max_mass: default_gem_max_mass(),
            level_density: LevelDensityConfig::default(),
            barrier: BarrierConfig::default(),
            quadrature: QuadratureSettings::default(),
            multifragmentation: MultifragmentationConfig::default(),
            spectrum_points: default_spectrum_points(),
            excitation_floor_mev: default_excitation_floor(),
            width_floor_mev: default_width_floor(),
        }
    }
}

impl DeexcitationConfig {
    /// Load from JSON file and validate.
    pub fn from_file(path: &str) -> DeexResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> DeexResult<Self> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject parameter combinations the engine cannot work with.
    pub fn validate(&self) -> DeexResult<()> {
        let positive = |value: f64, name: &str| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(DeexError::ConfigError(format!(
                    "{name} must be finite and > 0, got {value}"
                )))
            }
        };
        let ld = &self.level_density;
        positive(ld.alpha, "level_density.alpha")?;
        if !ld.beta.is_finite() || ld.beta < 0.0 {
            return Err(DeexError::ConfigError(format!(
                "level_density.beta must be finite and >= 0, got {}",
                ld.beta
            )));
        }
        positive(ld.gamma, "level_density.gamma")?;
        positive(self.barrier.r0_fm, "barrier.r0_fm")?;
        positive(self.quadrature.rel_tol, "quadrature.rel_tol")?;
        if self.quadrature.max_depth == 0 || self.quadrature.max_depth > 40 {
            return Err(DeexError::ConfigError(format!(
                "quadrature.max_depth must be in 1..=40, got {}",
                self.quadrature.max_depth
            )));
        }
        if self.spectrum_points < 2 {
            return Err(DeexError::ConfigError(format!(
                "spectrum_points must be >= 2, got {}",
                self.spectrum_points
            )));
        }
        if self.gem_max_mass < 4 {
            return Err(DeexError::ConfigError(format!(
                "gem_max_mass must be >= 4, got {}",
                self.gem_max_mass
            )));
        }
        positive(self.excitation_floor_mev, "excitation_floor_mev")?;
        positive(self.width_floor_mev, "width_floor_mev")?;

        let mf = &self.multifragmentation;
        positive(
            mf.threshold_mev_per_nucleon,
            "multifragmentation.threshold_mev_per_nucleon",
        )?;
        positive(mf.width_scale_mev, "multifragmentation.width_scale_mev")?;
        positive(
            mf.onset_mev_per_nucleon,
            "multifragmentation.onset_mev_per_nucleon",
        )?;
        if !mf.mass_exponent.is_finite() || mf.mass_exponent <= 1.0 {
            return Err(DeexError::ConfigError(format!(
                "multifragmentation.mass_exponent must be > 1, got {}",
                mf.mass_exponent
            )));
        }
        if mf.min_mass < 2 {
            return Err(DeexError::ConfigError(format!(
                "multifragmentation.min_mass must be >= 2, got {}",
                mf.min_mass
            )));
        }
        if mf.max_partition_attempts == 0 {
            return Err(DeexError::ConfigError(
                "multifragmentation.max_partition_attempts must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}
