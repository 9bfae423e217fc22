// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — Engine
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Public facade: one immutable engine, any number of decay events.
//!
//! An event decays the initial fragment to termination, then every
//! break-up partner in the order they were produced. Residues of partner
//! chains are reported as emitted particles.

use crate::channel::{ChannelId, DecayChannel};
use crate::decay::{DecayDiagnostics, DecayLoop, DecayStep, TerminationReason};
use crate::kinematics::unit;
use crate::model::NuclearModel;
use crate::probability::Width;
use crate::random::{RandomSource, RngSource};
use crate::registry::{ChannelRegistry, WidthTable};
use deex_nuclear::nuclide::{LiquidDropNuclides, NuclideProperties};
use deex_types::config::DeexcitationConfig;
use deex_types::error::DeexResult;
use deex_types::state::{EmissionOrigin, EmittedParticle, Fragment};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::collections::VecDeque;
use tracing::debug;

/// Golden-ratio increment used to spread per-event seeds.
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Result of decaying one fragment to completion.
#[derive(Debug, Clone, PartialEq)]
pub struct DecayOutcome {
    /// Residue of the primary chain.
    pub fragment: Fragment,
    /// Everything else, in emission order.
    pub emitted: Vec<EmittedParticle>,
    pub termination: TerminationReason,
    pub diagnostics: DecayDiagnostics,
}

impl DecayOutcome {
    pub fn total_mass_number(&self) -> u32 {
        self.fragment.a() + self.emitted.iter().map(|p| p.a).sum::<u32>()
    }

    pub fn total_charge(&self) -> u32 {
        self.fragment.z() + self.emitted.iter().map(|p| p.z).sum::<u32>()
    }
}

#[derive(Debug)]
pub struct DeexcitationEngine {
    model: NuclearModel,
    registry: ChannelRegistry,
}

impl DeexcitationEngine {
    /// Engine with the bundled liquid-drop nuclide provider.
    pub fn new(config: DeexcitationConfig) -> DeexResult<Self> {
        Self::with_nuclides(config, Box::new(LiquidDropNuclides::new()))
    }

    pub fn with_nuclides(
        config: DeexcitationConfig,
        nuclides: Box<dyn NuclideProperties>,
    ) -> DeexResult<Self> {
        config.validate()?;
        let registry = ChannelRegistry::from_config(&config);
        Ok(DeexcitationEngine {
            model: NuclearModel::new(config, nuclides),
            registry,
        })
    }

    pub fn from_file(path: &str) -> DeexResult<Self> {
        Self::new(DeexcitationConfig::from_file(path)?)
    }

    pub fn config(&self) -> &DeexcitationConfig {
        self.model.config()
    }

    pub fn model(&self) -> &NuclearModel {
        &self.model
    }

    pub fn registry(&self) -> &ChannelRegistry {
        &self.registry
    }

    /// Fragment at rest with its ground-state mass from the nuclide provider.
    pub fn fragment(&self, a: u32, z: u32, excitation_mev: f64) -> DeexResult<Fragment> {
        let mass = if a >= 1 && z <= a {
            self.model.ground_state_mass(a, z)
        } else {
            f64::NAN
        };
        Fragment::at_rest(a, z, excitation_mev, mass)
    }

    pub fn channel_id(&self, name: &str) -> DeexResult<ChannelId> {
        self.registry.find(name)
    }

    pub fn channel_width(&self, id: ChannelId, fragment: &Fragment) -> DeexResult<Width> {
        fragment.validate()?;
        Ok(self.registry.get(id)?.width(&self.model, fragment))
    }

    /// Γ of every registered channel, in registration order.
    pub fn widths(&self, fragment: &Fragment) -> DeexResult<WidthTable> {
        fragment.validate()?;
        Ok(self.registry.widths(&self.model, fragment))
    }

    pub fn decay_loop(&self, fragment: Fragment) -> DecayLoop<'_> {
        DecayLoop::new(&self.model, &self.registry, fragment)
    }

    /// A single decay step from `fragment`.
    pub fn step<R: RandomSource + ?Sized>(
        &self,
        fragment: &Fragment,
        rng: &mut R,
    ) -> DeexResult<DecayStep> {
        let mut source = rng;
        self.decay_loop(fragment.clone()).next_step(&mut source)
    }

    /// Decay `fragment` and all break-up partners to termination.
    pub fn decay<R: RandomSource + ?Sized>(
        &self,
        fragment: Fragment,
        rng: &mut R,
    ) -> DeexResult<DecayOutcome> {
        debug!(
            a = fragment.a(),
            z = fragment.z(),
            excitation_mev = fragment.excitation_mev(),
            "decay event"
        );
        let mut source = rng;
        let rng: &mut dyn RandomSource = &mut source;
        let mut emitted = Vec::new();
        let mut diagnostics = DecayDiagnostics::default();
        let mut partners = VecDeque::new();

        let (residue, termination) =
            self.run_chain(fragment, rng, &mut emitted, &mut partners, &mut diagnostics)?;

        while let Some((partner, frame_beta)) = partners.pop_front() {
            let (partner_residue, _) =
                self.run_chain(partner, rng, &mut emitted, &mut partners, &mut diagnostics)?;
            emitted.push(residue_particle(&partner_residue, frame_beta));
        }

        Ok(DecayOutcome {
            fragment: residue,
            emitted,
            termination,
            diagnostics,
        })
    }

    /// Decay many fragments in parallel; event `i` uses a `StdRng` seeded
    /// from `seed` and `i`, so results do not depend on the thread count.
    pub fn decay_batch(&self, fragments: &[Fragment], seed: u64) -> Vec<DeexResult<DecayOutcome>> {
        fragments
            .par_iter()
            .enumerate()
            .map(|(i, fragment)| {
                let mut rng = RngSource::new(StdRng::seed_from_u64(event_seed(seed, i)));
                self.decay(fragment.clone(), &mut rng)
            })
            .collect()
    }

    fn run_chain(
        &self,
        fragment: Fragment,
        rng: &mut dyn RandomSource,
        emitted: &mut Vec<EmittedParticle>,
        partners: &mut VecDeque<(Fragment, [f64; 3])>,
        diagnostics: &mut DecayDiagnostics,
    ) -> DeexResult<(Fragment, TerminationReason)> {
        let mut chain = self.decay_loop(fragment);
        let end = loop {
            let frame_beta = chain.current().momentum().velocity();
            match chain.next_step(rng)? {
                DecayStep::Emission(emission) => {
                    emitted.extend(emission.emitted);
                    partners.extend(emission.hot_fragments.into_iter().map(|f| (f, frame_beta)));
                }
                DecayStep::Terminal { fragment, reason } => break (fragment, reason),
            }
        };
        diagnostics.merge(chain.diagnostics());
        Ok(end)
    }
}

fn event_seed(seed: u64, index: usize) -> u64 {
    seed.wrapping_add((index as u64).wrapping_add(1).wrapping_mul(SEED_STRIDE))
}

/// Final state of a break-up partner, with kinetic energy and direction
/// measured in the frame of the nucleus that broke up.
fn residue_particle(residue: &Fragment, frame_beta: [f64; 3]) -> EmittedParticle {
    let lab = residue.momentum();
    let local = lab.boost([-frame_beta[0], -frame_beta[1], -frame_beta[2]]);
    EmittedParticle {
        a: residue.a(),
        z: residue.z(),
        kinetic_energy_mev: local.kinetic_energy(),
        direction: unit(local.momentum()),
        momentum: lab,
        excitation_mev: residue.excitation_mev(),
        origin: EmissionOrigin::BreakUpResidue,
    }
}
