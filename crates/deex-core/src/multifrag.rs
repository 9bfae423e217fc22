// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — Multifragmentation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Simultaneous break-up of a hot nucleus, competing as one more channel.
//!
//! Width: Γ = Γ_scale (1 - exp(-(E*/A - ε_th)/Δ)) above ε_th, zero below.
//!
//! Emission:
//! 1. sample fragment masses from a^{-τ} until they exhaust A (at least two);
//! 2. share Z in proportion to mass;
//! 3. accept when E_avail = M* - Σ M_i > 0, else resample, and after
//!    `max_partition_attempts` fall back to a symmetric binary split;
//! 4. solve Σ ã_i T² + 1.5 T (n - 1) = E_avail for the break-up temperature;
//! 5. fragments with A > 4 get U_i = ã_i T², the rest of E_avail is kinetic;
//! 6. isotropic momenta with thermal magnitudes, shifted to Σp = 0, are
//!    scaled until Σ E_i = M* exactly, then boosted to the lab.

use crate::channel::{DecayChannel, Products};
use crate::kinematics::{isotropic_direction, norm, scale};
use crate::model::NuclearModel;
use crate::probability::Width;
use crate::random::{draw, RandomSource};
use deex_math::roots::bisect;
use deex_types::config::MultifragmentationConfig;
use deex_types::error::{DeexError, DeexResult};
use deex_types::state::{FourMomentum, Fragment};
use tracing::warn;

/// Fragments at or below this mass number are emitted cold.
const MAX_COLD_FRAGMENT_MASS: u32 = 4;

const BISECT_MAX_ITER: usize = 200;

/// Multifragmentation as a competing decay channel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MultifragmentationChannel;

/// Accepted break-up configuration before kinematics.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// (A_i, Z_i), sorted by descending A then Z.
    pub fragments: Vec<(u32, u32)>,
    /// M* - Σ M_i [MeV].
    pub available_energy_mev: f64,
    /// True when the symmetric fallback was used.
    pub fallback: bool,
}

impl MultifragmentationChannel {
    pub const NAME: &'static str = "multifragmentation";

    pub fn new() -> Self {
        MultifragmentationChannel
    }

    /// Break-up width for a nucleus of mass `a` at `excitation_mev`.
    pub fn width_for(config: &MultifragmentationConfig, a: u32, excitation_mev: f64) -> f64 {
        if !config.enabled || a < config.min_mass.max(2) {
            return 0.0;
        }
        let excess = excitation_mev / a as f64 - config.threshold_mev_per_nucleon;
        if excess <= 0.0 {
            return 0.0;
        }
        config.width_scale_mev * (1.0 - (-excess / config.onset_mev_per_nucleon).exp())
    }

    /// Draw fragment mass numbers summing to `a`, at least two of them.
    pub fn sample_masses(a: u32, tau: f64, rng: &mut dyn RandomSource) -> DeexResult<Vec<u32>> {
        let mut masses = Vec::new();
        let mut remaining = a;
        while remaining > 0 {
            let cap = if masses.is_empty() {
                a.saturating_sub(1).max(1)
            } else {
                remaining
            };
            let size = power_law_size(cap, tau, draw(rng)?).min(remaining);
            masses.push(size);
            remaining -= size;
        }
        masses.sort_unstable_by(|x, y| y.cmp(x));
        Ok(masses)
    }

    /// Distribute `z` over `masses` proportionally, keeping 0 <= Z_i <= A_i.
    pub fn assign_charges(masses: &[u32], z: u32) -> Vec<u32> {
        let a: u32 = masses.iter().sum();
        if a == 0 {
            return vec![0; masses.len()];
        }
        let mut charges: Vec<u32> = masses
            .iter()
            .map(|&m| ((z as f64 * m as f64 / a as f64).round() as u32).min(m))
            .collect();
        let mut sum: u32 = charges.iter().sum();
        while sum > z {
            let Some(i) = (0..charges.len())
                .filter(|&i| charges[i] > 0)
                .max_by_key(|&i| (charges[i], std::cmp::Reverse(i)))
            else {
                break;
            };
            charges[i] -= 1;
            sum -= 1;
        }
        while sum < z {
            let Some(i) = (0..charges.len())
                .filter(|&i| charges[i] < masses[i])
                .max_by_key(|&i| (masses[i] - charges[i], std::cmp::Reverse(i)))
            else {
                break;
            };
            charges[i] += 1;
            sum += 1;
        }
        charges
    }

    /// Symmetric binary split used when sampling keeps failing.
    pub fn symmetric_split(a: u32, z: u32) -> Vec<(u32, u32)> {
        let a1 = a - a / 2;
        let z1 = z - z / 2;
        vec![(a1, z1), (a / 2, z / 2)]
    }

    fn available_energy(model: &NuclearModel, fragment: &Fragment, parts: &[(u32, u32)]) -> f64 {
        let masses: f64 = parts
            .iter()
            .map(|&(a, z)| model.ground_state_mass(a, z))
            .sum();
        fragment.excited_mass_mev() - masses
    }

    /// Sample a partition with positive available energy.
    pub fn sample_partition(
        &self,
        model: &NuclearModel,
        fragment: &Fragment,
        rng: &mut dyn RandomSource,
    ) -> DeexResult<Partition> {
        let cfg = &model.config().multifragmentation;
        for _ in 0..cfg.max_partition_attempts {
            let masses = Self::sample_masses(fragment.a(), cfg.mass_exponent, rng)?;
            let charges = Self::assign_charges(&masses, fragment.z());
            let mut fragments: Vec<(u32, u32)> = masses.into_iter().zip(charges).collect();
            fragments.sort_unstable_by(|x, y| y.cmp(x));
            let available = Self::available_energy(model, fragment, &fragments);
            if available > 0.0 {
                return Ok(Partition {
                    fragments,
                    available_energy_mev: available,
                    fallback: false,
                });
            }
        }

        warn!(
            a = fragment.a(),
            z = fragment.z(),
            excitation_mev = fragment.excitation_mev(),
            attempts = cfg.max_partition_attempts,
            "no energetically allowed partition sampled, using symmetric split"
        );
        let fragments = Self::symmetric_split(fragment.a(), fragment.z());
        let available = Self::available_energy(model, fragment, &fragments);
        if available <= 0.0 {
            return Err(DeexError::PhysicsViolation(format!(
                "break-up of A={}, Z={} at E*={:.3} MeV has no available energy",
                fragment.a(),
                fragment.z(),
                fragment.excitation_mev()
            )));
        }
        Ok(Partition {
            fragments,
            available_energy_mev: available,
            fallback: true,
        })
    }

    /// Break-up temperature [MeV] solving Σ ã_i T² + 1.5 T (n - 1) = E_avail.
    pub fn breakup_temperature(model: &NuclearModel, partition: &Partition) -> f64 {
        let ld = model.level_density();
        let a_sum: f64 = partition
            .fragments
            .iter()
            .filter(|&&(a, _)| a > MAX_COLD_FRAGMENT_MASS)
            .map(|&(a, _)| ld.asymptotic_parameter(a))
            .sum();
        let translational = 1.5 * (partition.fragments.len().saturating_sub(1)) as f64;
        let e = partition.available_energy_mev;
        if e <= 0.0 || (a_sum <= 0.0 && translational <= 0.0) {
            return 0.0;
        }
        let hi = if a_sum > 0.0 { (e / a_sum).sqrt() } else { 0.0 }
            + if translational > 0.0 { e / translational } else { 0.0 }
            + 1.0;
        bisect(
            |t| a_sum * t * t + translational * t - e,
            0.0,
            hi,
            1e-12,
            BISECT_MAX_ITER,
        )
        .map_or(0.0, |r| r.root)
    }
}

impl DecayChannel for MultifragmentationChannel {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn width(&self, model: &NuclearModel, fragment: &Fragment) -> Width {
        Width {
            gamma: Self::width_for(
                &model.config().multifragmentation,
                fragment.a(),
                fragment.excitation_mev(),
            ),
            converged: true,
        }
    }

    fn emit(
        &self,
        model: &NuclearModel,
        fragment: &Fragment,
        rng: &mut dyn RandomSource,
    ) -> DeexResult<Products> {
        let partition = self.sample_partition(model, fragment, rng)?;
        let ld = model.level_density();
        let t = Self::breakup_temperature(model, &partition);

        let mut excitations: Vec<f64> = partition
            .fragments
            .iter()
            .map(|&(a, _)| {
                if a > MAX_COLD_FRAGMENT_MASS {
                    ld.asymptotic_parameter(a) * t * t
                } else {
                    0.0
                }
            })
            .collect();
        let internal: f64 = excitations.iter().sum();
        if internal > partition.available_energy_mev && internal > 0.0 {
            let k = partition.available_energy_mev / internal;
            excitations.iter_mut().for_each(|u| *u *= k);
        }

        let ground: Vec<f64> = partition
            .fragments
            .iter()
            .map(|&(a, z)| model.ground_state_mass(a, z))
            .collect();
        let rest_masses: Vec<f64> = ground
            .iter()
            .zip(&excitations)
            .map(|(m, u)| m + u)
            .collect();

        let momenta = share_momenta(fragment.excited_mass_mev(), &rest_masses, rng)?;
        let beta = fragment.momentum().velocity();

        let mut built = Vec::with_capacity(partition.fragments.len());
        for (i, &(a, z)) in partition.fragments.iter().enumerate() {
            let p = FourMomentum::from_momentum(momenta[i], rest_masses[i]).boost(beta);
            built.push(Fragment::new(a, z, excitations[i], ground[i], p)?);
        }
        let mut parts = built.into_iter();
        let daughter = parts.next().ok_or_else(|| {
            DeexError::PhysicsViolation("break-up produced no fragments".to_string())
        })?;
        Ok(Products {
            emitted: Vec::new(),
            hot_fragments: parts.collect(),
            daughter,
        })
    }
}

/// Integer fragment size from a^{-τ} on [1, cap] by inverting the
/// continuous CDF on [1, cap + 1).
fn power_law_size(cap: u32, tau: f64, u: f64) -> u32 {
    if cap <= 1 {
        return 1;
    }
    let e = 1.0 - tau;
    let top = (cap as f64 + 1.0).powf(e);
    let x = (1.0 - u * (1.0 - top)).powf(1.0 / e);
    (x.floor() as u32).clamp(1, cap)
}

/// Rest-frame three-momenta with Σp = 0 and Σ E_i = `total_energy`.
fn share_momenta(
    total_energy: f64,
    masses: &[f64],
    rng: &mut dyn RandomSource,
) -> DeexResult<Vec<[f64; 3]>> {
    let n = masses.len();
    let mut dirs = Vec::with_capacity(n);
    for &m in masses {
        let direction = isotropic_direction(rng)?;
        // Thermal-like magnitude: exponential kinetic energy, p ~ √(m E).
        let magnitude = (m.max(0.0) * -(1.0 - draw(rng)?).ln()).sqrt();
        dirs.push(scale(direction, magnitude));
    }
    let mut mean = [0.0; 3];
    for d in &dirs {
        for k in 0..3 {
            mean[k] += d[k] / n as f64;
        }
    }
    for d in dirs.iter_mut() {
        for k in 0..3 {
            d[k] -= mean[k];
        }
    }

    let kinetic = total_energy - masses.iter().sum::<f64>();
    let largest = dirs.iter().map(|d| norm(*d)).fold(0.0, f64::max);
    if kinetic <= 0.0 || largest <= 0.0 {
        return Ok(vec![[0.0; 3]; n]);
    }

    let energy = |lambda: f64| {
        dirs.iter()
            .zip(masses)
            .map(|(d, m)| {
                let p = lambda * norm(*d);
                (p * p + m * m).sqrt()
            })
            .sum::<f64>()
            - total_energy
    };
    let hi = (total_energy + 1.0) / largest;
    let lambda = bisect(energy, 0.0, hi, hi * 1e-15, BISECT_MAX_ITER)
        .map_or(0.0, |r| r.root);
    Ok(dirs.into_iter().map(|d| scale(d, lambda)).collect())
}
