// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — Decay Channels
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Decay channels and the ejectile catalog.
//!
//! A channel is a fixed named decay mode. It computes its width for a given
//! fragment and, once selected, performs the emission. Channels hold no
//! per-fragment state.

use crate::kinematics::{isotropic_direction, split_at_rest};
use crate::model::NuclearModel;
use crate::multifrag::MultifragmentationChannel;
use crate::probability::{ChannelProbability, Ejectile, Width};
use crate::random::RandomSource;
use deex_types::error::{DeexError, DeexResult};
use deex_types::state::{EmissionOrigin, EmittedParticle, Fragment};

/// Light particles evaporated in every channel set.
pub const LIGHT_EJECTILES: [Ejectile; 6] = [
    Ejectile::new("n", 1, 0, 0.5),
    Ejectile::new("p", 1, 1, 0.5),
    Ejectile::new("d", 2, 1, 1.0),
    Ejectile::new("t", 3, 1, 0.5),
    Ejectile::new("He3", 3, 2, 0.5),
    Ejectile::new("alpha", 4, 2, 0.0),
];

/// Complex fragments added by the GEM channel set, in order of (Z, A).
pub const COMPLEX_EJECTILES: [Ejectile; 60] = [
    Ejectile::new("He6", 6, 2, 0.0),
    Ejectile::new("He8", 8, 2, 0.0),
    Ejectile::new("Li6", 6, 3, 1.0),
    Ejectile::new("Li7", 7, 3, 1.5),
    Ejectile::new("Li8", 8, 3, 2.0),
    Ejectile::new("Li9", 9, 3, 1.5),
    Ejectile::new("Be7", 7, 4, 1.5),
    Ejectile::new("Be9", 9, 4, 1.5),
    Ejectile::new("Be10", 10, 4, 0.0),
    Ejectile::new("Be11", 11, 4, 0.5),
    Ejectile::new("Be12", 12, 4, 0.0),
    Ejectile::new("B8", 8, 5, 2.0),
    Ejectile::new("B10", 10, 5, 3.0),
    Ejectile::new("B11", 11, 5, 1.5),
    Ejectile::new("B12", 12, 5, 1.0),
    Ejectile::new("B13", 13, 5, 1.5),
    Ejectile::new("C10", 10, 6, 0.0),
    Ejectile::new("C11", 11, 6, 1.5),
    Ejectile::new("C12", 12, 6, 0.0),
    Ejectile::new("C13", 13, 6, 0.5),
    Ejectile::new("C14", 14, 6, 0.0),
    Ejectile::new("C15", 15, 6, 0.5),
    Ejectile::new("C16", 16, 6, 0.0),
    Ejectile::new("N12", 12, 7, 1.0),
    Ejectile::new("N13", 13, 7, 0.5),
    Ejectile::new("N14", 14, 7, 1.0),
    Ejectile::new("N15", 15, 7, 0.5),
    Ejectile::new("N16", 16, 7, 2.0),
    Ejectile::new("N17", 17, 7, 0.5),
    Ejectile::new("O14", 14, 8, 0.0),
    Ejectile::new("O15", 15, 8, 0.5),
    Ejectile::new("O16", 16, 8, 0.0),
    Ejectile::new("O17", 17, 8, 2.5),
    Ejectile::new("O18", 18, 8, 0.0),
    Ejectile::new("O19", 19, 8, 2.5),
    Ejectile::new("O20", 20, 8, 0.0),
    Ejectile::new("F17", 17, 9, 2.5),
    Ejectile::new("F18", 18, 9, 1.0),
    Ejectile::new("F19", 19, 9, 0.5),
    Ejectile::new("F20", 20, 9, 2.0),
    Ejectile::new("F21", 21, 9, 2.5),
    Ejectile::new("Ne18", 18, 10, 0.0),
    Ejectile::new("Ne19", 19, 10, 0.5),
    Ejectile::new("Ne20", 20, 10, 0.0),
    Ejectile::new("Ne21", 21, 10, 1.5),
    Ejectile::new("Ne22", 22, 10, 0.0),
    Ejectile::new("Ne23", 23, 10, 2.5),
    Ejectile::new("Ne24", 24, 10, 0.0),
    Ejectile::new("Na21", 21, 11, 1.5),
    Ejectile::new("Na22", 22, 11, 3.0),
    Ejectile::new("Na23", 23, 11, 1.5),
    Ejectile::new("Na24", 24, 11, 4.0),
    Ejectile::new("Na25", 25, 11, 2.5),
    Ejectile::new("Mg22", 22, 12, 0.0),
    Ejectile::new("Mg23", 23, 12, 1.5),
    Ejectile::new("Mg24", 24, 12, 0.0),
    Ejectile::new("Mg25", 25, 12, 2.5),
    Ejectile::new("Mg26", 26, 12, 0.0),
    Ejectile::new("Mg27", 27, 12, 0.5),
    Ejectile::new("Mg28", 28, 12, 0.0),
];

/// Position of a channel in its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChannelId(pub usize);

/// What a channel produces when applied to a fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct Products {
    /// Particles leaving the chain immediately.
    pub emitted: Vec<EmittedParticle>,
    /// Excited break-up partners that still have to decay.
    pub hot_fragments: Vec<Fragment>,
    /// Nucleus that continues the current chain.
    pub daughter: Fragment,
}

/// Common interface of every decay mode.
pub trait DecayChannel {
    fn name(&self) -> &str;

    /// Partial width for this fragment; closed channels report zero.
    fn width(&self, model: &NuclearModel, fragment: &Fragment) -> Width;

    /// Apply the decay. Only called after the channel won the selection.
    fn emit(
        &self,
        model: &NuclearModel,
        fragment: &Fragment,
        rng: &mut dyn RandomSource,
    ) -> DeexResult<Products>;
}

/// Binary emission of one light particle or complex fragment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaporationChannel {
    probability: ChannelProbability,
}

impl EvaporationChannel {
    pub fn new(ejectile: Ejectile) -> Self {
        EvaporationChannel {
            probability: ChannelProbability::new(ejectile),
        }
    }

    pub fn ejectile(&self) -> &Ejectile {
        self.probability.ejectile()
    }

    pub fn probability(&self) -> &ChannelProbability {
        &self.probability
    }
}

impl DecayChannel for EvaporationChannel {
    fn name(&self) -> &str {
        self.ejectile().name
    }

    fn width(&self, model: &NuclearModel, fragment: &Fragment) -> Width {
        self.probability.width(model, fragment)
    }

    fn emit(
        &self,
        model: &NuclearModel,
        fragment: &Fragment,
        rng: &mut dyn RandomSource,
    ) -> DeexResult<Products> {
        let ejectile = *self.ejectile();
        let window = self.probability.window(model, fragment).ok_or_else(|| {
            DeexError::PhysicsViolation(format!(
                "channel {} is closed for A={}, Z={}, E*={:.3} MeV",
                ejectile.name,
                fragment.a(),
                fragment.z(),
                fragment.excitation_mev()
            ))
        })?;
        let eps = self
            .probability
            .sample_kinetic_energy(model, fragment, &window, rng)?;
        let daughter_excitation =
            (fragment.excitation_mev() - window.separation_mev - eps).max(0.0);

        let direction = isotropic_direction(rng)?;
        let (p_ejectile, p_daughter) = split_at_rest(
            fragment.excited_mass_mev(),
            window.ejectile_mass_mev,
            window.daughter_mass_mev + daughter_excitation,
            direction,
        );
        let beta = fragment.momentum().velocity();

        let daughter = Fragment::new(
            window.daughter_a,
            window.daughter_z,
            daughter_excitation,
            window.daughter_mass_mev,
            p_daughter.boost(beta),
        )?;
        let particle = EmittedParticle {
            a: ejectile.a,
            z: ejectile.z,
            kinetic_energy_mev: p_ejectile.kinetic_energy(),
            direction,
            momentum: p_ejectile.boost(beta),
            excitation_mev: 0.0,
            origin: EmissionOrigin::Evaporation,
        };
        Ok(Products {
            emitted: vec![particle],
            hot_fragments: Vec::new(),
            daughter,
        })
    }
}

/// Closed set of channel kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Channel {
    Evaporation(EvaporationChannel),
    Multifragmentation(MultifragmentationChannel),
}

impl DecayChannel for Channel {
    fn name(&self) -> &str {
        match self {
            Channel::Evaporation(c) => c.name(),
            Channel::Multifragmentation(c) => c.name(),
        }
    }

    fn width(&self, model: &NuclearModel, fragment: &Fragment) -> Width {
        match self {
            Channel::Evaporation(c) => c.width(model, fragment),
            Channel::Multifragmentation(c) => c.width(model, fragment),
        }
    }

    fn emit(
        &self,
        model: &NuclearModel,
        fragment: &Fragment,
        rng: &mut dyn RandomSource,
    ) -> DeexResult<Products> {
        match self {
            Channel::Evaporation(c) => c.emit(model, fragment, rng),
            Channel::Multifragmentation(c) => c.emit(model, fragment, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceSource;
    use deex_types::config::DeexcitationConfig;

    fn setup() -> (NuclearModel, Fragment) {
        let model = NuclearModel::with_liquid_drop(DeexcitationConfig::default());
        let mass = model.ground_state_mass(56, 26);
        let f = Fragment::at_rest(56, 26, 60.0, mass).unwrap();
        (model, f)
    }

    #[test]
    fn test_catalog_size_and_order() {
        assert_eq!(LIGHT_EJECTILES.len() + COMPLEX_EJECTILES.len(), 66);
        for w in COMPLEX_EJECTILES.windows(2) {
            assert!((w[0].z, w[0].a) < (w[1].z, w[1].a), "{} / {}", w[0].name, w[1].name);
        }
        assert_eq!(COMPLEX_EJECTILES.last().map(|e| e.name), Some("Mg28"));
    }

    #[test]
    fn test_catalog_names_unique() {
        let mut names: Vec<&str> = LIGHT_EJECTILES
            .iter()
            .chain(COMPLEX_EJECTILES.iter())
            .map(|e| e.name)
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 66);
    }

    #[test]
    fn test_neutron_emission_conserves_everything() {
        let (model, f) = setup();
        let channel = EvaporationChannel::new(LIGHT_EJECTILES[0]);
        let mut src = SequenceSource::new(vec![0.4, 0.0, 0.3, 0.7]);
        let out = channel.emit(&model, &f, &mut src).unwrap();

        let d = &out.daughter;
        let n = &out.emitted[0];
        assert_eq!(d.a() + n.a, 56);
        assert_eq!(d.z() + n.z, 26);
        assert!(d.excitation_mev() >= 0.0);
        assert!(out.hot_fragments.is_empty());

        let total = d.momentum() + n.momentum;
        assert!((total.e - f.excited_mass_mev()).abs() < 1e-6);
        assert!(total.momentum_magnitude() < 1e-6);
        assert_eq!(src.consumed(), 4);
    }

    #[test]
    fn test_energy_split_matches_separation() {
        let (model, f) = setup();
        let channel = EvaporationChannel::new(LIGHT_EJECTILES[5]);
        let window = channel.probability().window(&model, &f).unwrap();
        let mut src = SequenceSource::new(vec![0.5, 0.0, 0.5, 0.5]);
        let out = channel.emit(&model, &f, &mut src).unwrap();
        let kinetic = out.emitted[0].kinetic_energy_mev + out.daughter.momentum().kinetic_energy();
        let released = f.excitation_mev() - window.separation_mev - out.daughter.excitation_mev();
        assert!((kinetic - released).abs() < 1e-6, "{kinetic} vs {released}");
    }

    #[test]
    fn test_closed_channel_emit_is_error() {
        let model = NuclearModel::with_liquid_drop(DeexcitationConfig::default());
        let cold = Fragment::at_rest(56, 26, 0.0, model.ground_state_mass(56, 26)).unwrap();
        let channel = EvaporationChannel::new(LIGHT_EJECTILES[0]);
        let mut src = SequenceSource::new(vec![0.5; 4]);
        assert!(matches!(
            channel.emit(&model, &cold, &mut src),
            Err(DeexError::PhysicsViolation(_))
        ));
    }

    #[test]
    fn test_moving_parent_boosts_products() {
        let (model, rest) = setup();
        let moving = Fragment::new(
            56,
            26,
            60.0,
            rest.ground_state_mass_mev(),
            deex_types::state::FourMomentum::from_momentum([0.0, 0.0, 2000.0], rest.excited_mass_mev()),
        )
        .unwrap();
        let channel = EvaporationChannel::new(LIGHT_EJECTILES[0]);
        let mut src = SequenceSource::new(vec![0.4, 0.0, 0.3, 0.7]);
        let out = channel.emit(&model, &moving, &mut src).unwrap();
        let total = out.daughter.momentum() + out.emitted[0].momentum;
        assert!((total.pz - 2000.0).abs() < 1e-6);
        assert!((total.e - moving.momentum().e).abs() < 1e-6);
    }
}
