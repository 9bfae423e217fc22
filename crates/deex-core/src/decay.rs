// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — Decay Loop
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Decay state machine for a single chain.
//!
//! Decaying --(channel selected)--> Decaying
//! Decaying --(A = 1 | E* < floor | Γ_total <= floor)--> Terminal
//!
//! Terminal is absorbing. Every emission strictly lowers A, so a chain
//! ends after at most A - 1 steps.

use crate::channel::{ChannelId, DecayChannel, Products};
use crate::model::NuclearModel;
use crate::registry::{ChannelRegistry, Selector};
use crate::random::RandomSource;
use deex_types::error::{DeexError, DeexResult};
use deex_types::state::{EmittedParticle, Fragment};
use tracing::{debug, warn};

/// Why a chain stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A single nucleon cannot decay further.
    SingleNucleon,
    /// E* dropped below the excitation floor and was set to zero.
    BelowExcitationFloor,
    /// Every channel is closed (Γ_total at or below the width floor).
    NoOpenChannel,
}

/// One applied decay.
#[derive(Debug, Clone, PartialEq)]
pub struct Emission {
    pub channel: ChannelId,
    pub emitted: Vec<EmittedParticle>,
    pub hot_fragments: Vec<Fragment>,
    pub daughter: Fragment,
}

/// Outcome of one `DecayLoop::next_step`.
#[derive(Debug, Clone, PartialEq)]
pub enum DecayStep {
    Emission(Emission),
    Terminal {
        fragment: Fragment,
        reason: TerminationReason,
    },
}

/// Counters collected while decaying.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecayDiagnostics {
    /// Applied emissions across all chains of the event.
    pub steps: usize,
    pub width_evaluations: usize,
    /// Widths whose quadrature hit the depth bound.
    pub unconverged_widths: usize,
    pub break_ups: usize,
    /// Chains started, including break-up partners.
    pub chains: usize,
}

impl DecayDiagnostics {
    pub fn merge(&mut self, other: &DecayDiagnostics) {
        self.steps += other.steps;
        self.width_evaluations += other.width_evaluations;
        self.unconverged_widths += other.unconverged_widths;
        self.break_ups += other.break_ups;
        self.chains += other.chains;
    }
}

#[derive(Debug, Clone, PartialEq)]
enum LoopState {
    Decaying(Fragment),
    Terminal(Fragment, TerminationReason),
}

/// Iterative decay of one fragment.
#[derive(Debug)]
pub struct DecayLoop<'e> {
    model: &'e NuclearModel,
    registry: &'e ChannelRegistry,
    selector: Selector,
    state: LoopState,
    diagnostics: DecayDiagnostics,
}

impl<'e> DecayLoop<'e> {
    pub fn new(model: &'e NuclearModel, registry: &'e ChannelRegistry, fragment: Fragment) -> Self {
        DecayLoop {
            model,
            registry,
            selector: Selector::new(model.config().width_floor_mev),
            state: LoopState::Decaying(fragment),
            diagnostics: DecayDiagnostics {
                chains: 1,
                ..DecayDiagnostics::default()
            },
        }
    }

    pub fn current(&self) -> &Fragment {
        match &self.state {
            LoopState::Decaying(f) | LoopState::Terminal(f, _) => f,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.state, LoopState::Terminal(..))
    }

    pub fn diagnostics(&self) -> &DecayDiagnostics {
        &self.diagnostics
    }

    fn terminate(&mut self, fragment: Fragment, reason: TerminationReason) -> DecayStep {
        debug!(
            a = fragment.a(),
            z = fragment.z(),
            excitation_mev = fragment.excitation_mev(),
            ?reason,
            "chain terminated"
        );
        self.state = LoopState::Terminal(fragment.clone(), reason);
        DecayStep::Terminal { fragment, reason }
    }

    /// Advance by one emission, or report the terminal state.
    pub fn next_step(&mut self, rng: &mut dyn RandomSource) -> DeexResult<DecayStep> {
        let fragment = match &self.state {
            LoopState::Terminal(f, reason) => {
                return Ok(DecayStep::Terminal {
                    fragment: f.clone(),
                    reason: *reason,
                })
            }
            LoopState::Decaying(f) => f.clone(),
        };
        fragment.validate()?;

        if fragment.a() == 1 {
            return Ok(self.terminate(fragment, TerminationReason::SingleNucleon));
        }
        if fragment.excitation_mev() < self.model.config().excitation_floor_mev {
            return Ok(self.terminate(
                fragment.quenched(),
                TerminationReason::BelowExcitationFloor,
            ));
        }

        let table = self.registry.widths(self.model, &fragment);
        self.diagnostics.width_evaluations += table.widths().len();
        let unconverged = table.unconverged();
        if unconverged > 0 {
            self.diagnostics.unconverged_widths += unconverged;
            warn!(
                a = fragment.a(),
                z = fragment.z(),
                excitation_mev = fragment.excitation_mev(),
                unconverged,
                "width quadrature hit the depth bound"
            );
        }

        let Some(id) = self.selector.select(&table, rng)? else {
            return Ok(self.terminate(fragment, TerminationReason::NoOpenChannel));
        };
        let channel = self.registry.get(id)?;
        let products = channel.emit(self.model, &fragment, rng)?;
        check_conservation(&fragment, &products)?;

        if !products.hot_fragments.is_empty() {
            self.diagnostics.break_ups += 1;
        }
        self.diagnostics.steps += 1;
        debug!(
            channel = channel.name(),
            parent_a = fragment.a(),
            parent_z = fragment.z(),
            parent_excitation_mev = fragment.excitation_mev(),
            daughter_a = products.daughter.a(),
            daughter_z = products.daughter.z(),
            daughter_excitation_mev = products.daughter.excitation_mev(),
            partners = products.hot_fragments.len(),
            "emission"
        );

        self.state = LoopState::Decaying(products.daughter.clone());
        Ok(DecayStep::Emission(Emission {
            channel: id,
            emitted: products.emitted,
            hot_fragments: products.hot_fragments,
            daughter: products.daughter,
        }))
    }
}

/// Baryon number and charge must balance, and A must strictly drop.
fn check_conservation(parent: &Fragment, products: &Products) -> DeexResult<()> {
    let a: u32 = products.daughter.a()
        + products.emitted.iter().map(|p| p.a).sum::<u32>()
        + products.hot_fragments.iter().map(|f| f.a()).sum::<u32>();
    let z: u32 = products.daughter.z()
        + products.emitted.iter().map(|p| p.z).sum::<u32>()
        + products.hot_fragments.iter().map(|f| f.z()).sum::<u32>();
    if a != parent.a() || z != parent.z() || products.daughter.a() >= parent.a() {
        return Err(DeexError::PhysicsViolation(format!(
            "emission from A={}, Z={} produced A={}, Z={} (daughter A={})",
            parent.a(),
            parent.z(),
            a,
            z,
            products.daughter.a()
        )));
    }
    Ok(())
}
