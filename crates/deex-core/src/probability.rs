// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — Channel Probability
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Weisskopf–Ewing emission width and kinetic-energy spectrum.
//!
//! Γ = (2s+1) μ / (π² (ħc)²) ∫ σ_inv(ε) ε ρ_d(U - S - ε) / ρ_p(U) dε
//!
//! over ε ∈ [kV, U - S] (from 0 for neutral ejectiles). The density ratio
//! is formed in log space.

use crate::model::NuclearModel;
use crate::random::{draw, RandomSource};
use deex_math::interp::CumulativeTable;
use deex_math::quadrature::{adaptive_gauss, gauss_legendre};
use deex_nuclear::cross_section::InverseCrossSection;
use deex_types::constants::HBARC_MEV_FM;
use deex_types::error::DeexResult;
use deex_types::state::Fragment;
use ndarray::Array1;
use std::f64::consts::PI;
use tracing::warn;

/// Fraction of rel_tol applied to the first whole-interval estimate to
/// form the absolute quadrature tolerance.
const ABS_TOL_FRACTION: f64 = 1e-3;

/// Envelope height over the largest sampled spectrum value in a cell.
const ENVELOPE_MARGIN: f64 = 1.25;

/// Rejected proposals before the last one is kept.
const MAX_REJECTIONS: usize = 256;

/// Partial decay width of one channel [MeV].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Width {
    pub gamma: f64,
    /// False when the quadrature hit its depth bound.
    pub converged: bool,
}

impl Width {
    pub const CLOSED: Width = Width {
        gamma: 0.0,
        converged: true,
    };

    pub fn is_open(&self) -> bool {
        self.gamma > 0.0
    }
}

/// Emitted particle species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ejectile {
    pub name: &'static str,
    pub a: u32,
    pub z: u32,
    /// Ground-state spin [ħ].
    pub spin: f64,
}

impl Ejectile {
    pub const fn new(name: &'static str, a: u32, z: u32, spin: f64) -> Self {
        Ejectile { name, a, z, spin }
    }

    pub fn n(&self) -> u32 {
        self.a - self.z
    }
}

/// Energetically open region for one ejectile from one parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionWindow {
    pub daughter_a: u32,
    pub daughter_z: u32,
    pub daughter_mass_mev: f64,
    pub ejectile_mass_mev: f64,
    /// S = M_d + m_e - M_p [MeV].
    pub separation_mev: f64,
    pub barrier_mev: f64,
    pub eps_min: f64,
    pub eps_max: f64,
    pub cross_section: InverseCrossSection,
}

/// Width and spectrum model for a single ejectile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelProbability {
    ejectile: Ejectile,
}

impl ChannelProbability {
    pub fn new(ejectile: Ejectile) -> Self {
        ChannelProbability { ejectile }
    }

    pub fn ejectile(&self) -> &Ejectile {
        &self.ejectile
    }

    /// Open emission window, or `None` when the channel is closed.
    pub fn window(&self, model: &NuclearModel, fragment: &Fragment) -> Option<EmissionWindow> {
        let e = &self.ejectile;
        if e.a >= fragment.a() || e.z > fragment.z() || e.n() > fragment.n() {
            return None;
        }
        let u = fragment.excitation_mev();
        let daughter_a = fragment.a() - e.a;
        let daughter_z = fragment.z() - e.z;
        let daughter_mass_mev = model.ground_state_mass(daughter_a, daughter_z);
        let ejectile_mass_mev = model.ground_state_mass(e.a, e.z);
        let separation_mev =
            daughter_mass_mev + ejectile_mass_mev - fragment.ground_state_mass_mev();
        if separation_mev >= u {
            return None;
        }

        let barrier_mev = model
            .barrier()
            .height(daughter_a, daughter_z, e.a, e.z, u);
        let cross_section = InverseCrossSection::for_pair(
            e.a,
            e.z,
            daughter_a,
            daughter_z,
            model.config().barrier.r0_fm,
        );
        let eps_min = cross_section.threshold(barrier_mev);
        let eps_max = u - separation_mev;
        if eps_max <= eps_min {
            return None;
        }
        Some(EmissionWindow {
            daughter_a,
            daughter_z,
            daughter_mass_mev,
            ejectile_mass_mev,
            separation_mev,
            barrier_mev,
            eps_min,
            eps_max,
            cross_section,
        })
    }

    /// Unnormalized spectrum σ(ε) ε ρ_d(U - S - ε) / ρ_p(U).
    pub fn spectrum_density(
        &self,
        model: &NuclearModel,
        fragment: &Fragment,
        window: &EmissionWindow,
        eps: f64,
    ) -> f64 {
        let ld = model.level_density();
        let u = fragment.excitation_mev();
        let ln_parent = ld.ln_density(fragment.a(), fragment.z(), u);
        self.density_with_parent(model, window, u, ln_parent, eps)
    }

    fn density_with_parent(
        &self,
        model: &NuclearModel,
        window: &EmissionWindow,
        u: f64,
        ln_parent: f64,
        eps: f64,
    ) -> f64 {
        if eps < window.eps_min || eps > window.eps_max {
            return 0.0;
        }
        let flux = window.cross_section.flux_weighted(eps, window.barrier_mev);
        if flux <= 0.0 {
            return 0.0;
        }
        let u_d = (u - window.separation_mev - eps).max(0.0);
        let ln_daughter = model
            .level_density()
            .ln_density(window.daughter_a, window.daughter_z, u_d);
        flux * (ln_daughter - ln_parent).exp()
    }

    /// (2s+1) μ / (π² (ħc)²) [1 / (MeV fm²)].
    fn prefactor(&self, window: &EmissionWindow) -> f64 {
        let m_e = window.ejectile_mass_mev;
        let m_d = window.daughter_mass_mev;
        let reduced = m_e * m_d / (m_e + m_d);
        (2.0 * self.ejectile.spin + 1.0) * reduced / (PI * PI * HBARC_MEV_FM * HBARC_MEV_FM)
    }

    /// Emission width Γ [MeV].
    pub fn width(&self, model: &NuclearModel, fragment: &Fragment) -> Width {
        let Some(window) = self.window(model, fragment) else {
            return Width::CLOSED;
        };
        let u = fragment.excitation_mev();
        let ln_parent = model
            .level_density()
            .ln_density(fragment.a(), fragment.z(), u);
        let integrand = |eps: f64| self.density_with_parent(model, &window, u, ln_parent, eps);

        let first = gauss_legendre(&integrand, window.eps_min, window.eps_max);
        let abs_tol = ABS_TOL_FRACTION * model.config().quadrature.rel_tol * first.abs();
        let result = adaptive_gauss(
            integrand,
            window.eps_min,
            window.eps_max,
            model.quadrature(abs_tol),
        );

        let gamma = (self.prefactor(&window) * result.value).max(0.0);
        Width {
            gamma: if gamma.is_finite() { gamma } else { 0.0 },
            converged: result.converged,
        }
    }

    /// Rejection sampler for the spectrum of an open window.
    ///
    /// The envelope is a step function over `spectrum_points` nodes whose
    /// height in each cell is `ENVELOPE_MARGIN` times the largest of the
    /// spectrum values at the two nodes and the midpoint. `None` when the
    /// spectrum carries no weight on the grid.
    pub fn spectrum_sampler<'m>(
        &self,
        model: &'m NuclearModel,
        fragment: &Fragment,
        window: &EmissionWindow,
    ) -> Option<SpectrumSampler<'m>> {
        let u = fragment.excitation_mev();
        let ln_parent = model
            .level_density()
            .ln_density(fragment.a(), fragment.z(), u);
        let density = |eps: f64| self.density_with_parent(model, window, u, ln_parent, eps);

        let points = model.config().spectrum_points.max(2);
        let grid = Array1::linspace(window.eps_min, window.eps_max, points);
        let nodes = grid.mapv(density);
        let weights = Array1::from_shape_fn(points - 1, |i| {
            let (x0, x1) = (grid[i], grid[i + 1]);
            let mid = density(0.5 * (x0 + x1));
            ENVELOPE_MARGIN * nodes[i].max(nodes[i + 1]).max(mid) * (x1 - x0)
        });
        let envelope = CumulativeTable::from_cell_weights(grid, &weights)?;
        Some(SpectrumSampler {
            probability: *self,
            model,
            window: *window,
            excitation_mev: u,
            ln_parent,
            envelope,
        })
    }

    /// Sample the ejectile kinetic energy ε.
    ///
    /// Falls back to a uniform ε in the window (one draw) when the spectrum
    /// carries no weight.
    pub fn sample_kinetic_energy(
        &self,
        model: &NuclearModel,
        fragment: &Fragment,
        window: &EmissionWindow,
        rng: &mut dyn RandomSource,
    ) -> DeexResult<f64> {
        let eps = match self.spectrum_sampler(model, fragment, window) {
            Some(sampler) => sampler.sample(rng)?,
            None => window.eps_min + draw(rng)? * (window.eps_max - window.eps_min),
        };
        Ok(eps.clamp(window.eps_min, window.eps_max))
    }
}

/// Kinetic-energy spectrum of one window, sampled by rejection.
///
/// Each attempt takes two draws: one inverts the step envelope, the other
/// accepts the proposal with probability f(ε) / envelope(ε). Accepted values
/// follow the same integrand as the width.
#[derive(Debug, Clone)]
pub struct SpectrumSampler<'m> {
    probability: ChannelProbability,
    model: &'m NuclearModel,
    window: EmissionWindow,
    excitation_mev: f64,
    ln_parent: f64,
    envelope: CumulativeTable,
}

impl SpectrumSampler<'_> {
    /// Unnormalized spectrum at `eps`.
    pub fn density(&self, eps: f64) -> f64 {
        self.probability.density_with_parent(
            self.model,
            &self.window,
            self.excitation_mev,
            self.ln_parent,
            eps,
        )
    }

    pub fn sample(&self, rng: &mut dyn RandomSource) -> DeexResult<f64> {
        let mut eps = self.window.eps_min;
        for _ in 0..MAX_REJECTIONS {
            let (proposal, height) = self.envelope.sample_with_density(draw(rng)?);
            eps = proposal;
            if draw(rng)? * height <= self.density(proposal) {
                return Ok(proposal);
            }
        }
        warn!(
            ejectile = self.probability.ejectile.name,
            eps_min = self.window.eps_min,
            eps_max = self.window.eps_max,
            "spectrum rejection limit reached"
        );
        Ok(eps)
    }
}
