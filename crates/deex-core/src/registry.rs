// ─────────────────────────────────────────────────────────────────────
// SCPN De-excitation — Channel Registry & Selector
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed registry of decay channels and the width-weighted selector.

use crate::channel::{
    Channel, ChannelId, DecayChannel, EvaporationChannel, COMPLEX_EJECTILES, LIGHT_EJECTILES,
};
use crate::model::NuclearModel;
use crate::multifrag::MultifragmentationChannel;
use crate::probability::Width;
use crate::random::{draw, RandomSource};
use deex_types::config::{ChannelSet, DeexcitationConfig};
use deex_types::error::{DeexError, DeexResult};
use deex_types::state::Fragment;
use tracing::trace;

/// Channels in fixed registration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelRegistry {
    channels: Vec<Channel>,
}

impl ChannelRegistry {
    /// Light particles, then (for GEM) complex fragments up to
    /// `gem_max_mass`, then multifragmentation.
    pub fn from_config(config: &DeexcitationConfig) -> Self {
        let mut channels: Vec<Channel> = LIGHT_EJECTILES
            .iter()
            .map(|&e| Channel::Evaporation(EvaporationChannel::new(e)))
            .collect();
        if config.channel_set == ChannelSet::Gem {
            channels.extend(
                COMPLEX_EJECTILES
                    .iter()
                    .filter(|e| e.a <= config.gem_max_mass)
                    .map(|&e| Channel::Evaporation(EvaporationChannel::new(e))),
            );
        }
        channels.push(Channel::Multifragmentation(MultifragmentationChannel::new()));
        ChannelRegistry { channels }
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn get(&self, id: ChannelId) -> DeexResult<&Channel> {
        self.channels
            .get(id.0)
            .ok_or_else(|| DeexError::UnknownChannel(format!("index {}", id.0)))
    }

    /// Look a channel up by name ("n", "alpha", "C12", "multifragmentation").
    pub fn find(&self, name: &str) -> DeexResult<ChannelId> {
        self.channels
            .iter()
            .position(|c| c.name() == name)
            .map(ChannelId)
            .ok_or_else(|| DeexError::UnknownChannel(name.to_string()))
    }

    /// Evaluate every channel on `fragment`.
    pub fn widths(&self, model: &NuclearModel, fragment: &Fragment) -> WidthTable {
        let widths: Vec<Width> = self
            .channels
            .iter()
            .map(|c| {
                let w = c.width(model, fragment);
                trace!(channel = c.name(), gamma = w.gamma, converged = w.converged, "width");
                w
            })
            .collect();
        WidthTable::new(widths)
    }
}

/// Widths of all channels for one fragment, in registry order.
#[derive(Debug, Clone, PartialEq)]
pub struct WidthTable {
    widths: Vec<Width>,
    total: f64,
}

impl WidthTable {
    pub fn new(widths: Vec<Width>) -> Self {
        let total = widths.iter().map(|w| w.gamma.max(0.0)).sum();
        WidthTable { widths, total }
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn widths(&self) -> &[Width] {
        &self.widths
    }

    pub fn gammas(&self) -> Vec<f64> {
        self.widths.iter().map(|w| w.gamma).collect()
    }

    /// Number of widths whose quadrature did not converge.
    pub fn unconverged(&self) -> usize {
        self.widths.iter().filter(|w| !w.converged).count()
    }

    /// Branching ratio Γ_i / Γ_total, zero for an all-closed table.
    pub fn branching_ratio(&self, id: ChannelId) -> f64 {
        match self.widths.get(id.0) {
            Some(w) if self.total > 0.0 => w.gamma.max(0.0) / self.total,
            _ => 0.0,
        }
    }
}

/// First i with Γ_i > 0 and Σ_{j<=i} Γ_j >= u Γ_total.
///
/// Falls back to the last open channel when rounding leaves the cumulative
/// sum short of the target. `None` when every width is zero.
pub fn select_index(gammas: &[f64], u: f64) -> Option<usize> {
    let total: f64 = gammas.iter().map(|g| g.max(0.0)).sum();
    if !(total > 0.0) {
        return None;
    }
    let target = u * total;
    let mut cumulative = 0.0;
    let mut last_open = None;
    for (i, &g) in gammas.iter().enumerate() {
        if g <= 0.0 {
            continue;
        }
        cumulative += g;
        last_open = Some(i);
        if cumulative >= target {
            return Some(i);
        }
    }
    last_open
}

/// Chooses the next channel or declares the fragment terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selector {
    width_floor_mev: f64,
}

impl Selector {
    pub fn new(width_floor_mev: f64) -> Self {
        Selector { width_floor_mev }
    }

    /// `Ok(None)` when Γ_total is at or below the floor; no draw is consumed
    /// in that case.
    pub fn select(
        &self,
        table: &WidthTable,
        rng: &mut dyn RandomSource,
    ) -> DeexResult<Option<ChannelId>> {
        if table.total() <= self.width_floor_mev {
            return Ok(None);
        }
        let u = draw(rng)?;
        Ok(select_index(&table.gammas(), u).map(ChannelId))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceSource;

    fn open(gamma: f64) -> Width {
        Width {
            gamma,
            converged: true,
        }
    }

    #[test]
    fn test_registry_sizes() {
        let mut cfg = DeexcitationConfig::default();
        assert_eq!(ChannelRegistry::from_config(&cfg).len(), 67);
        cfg.gem_max_mass = 12;
        let twelve = COMPLEX_EJECTILES.iter().filter(|e| e.a <= 12).count();
        assert_eq!(ChannelRegistry::from_config(&cfg).len(), 6 + twelve + 1);
        cfg.channel_set = ChannelSet::Evaporation;
        assert_eq!(ChannelRegistry::from_config(&cfg).len(), 7);
    }

    #[test]
    fn test_registration_order() {
        let reg = ChannelRegistry::from_config(&DeexcitationConfig::default());
        assert_eq!(reg.find("n").unwrap(), ChannelId(0));
        assert_eq!(reg.find("alpha").unwrap(), ChannelId(5));
        assert_eq!(reg.find("multifragmentation").unwrap(), ChannelId(reg.len() - 1));
        assert_eq!(reg.get(reg.find("C12").unwrap()).unwrap().name(), "C12");
    }

    #[test]
    fn test_unknown_channel() {
        let reg = ChannelRegistry::from_config(&DeexcitationConfig::default());
        assert!(matches!(reg.find("U238"), Err(DeexError::UnknownChannel(_))));
        assert!(matches!(reg.get(ChannelId(1000)), Err(DeexError::UnknownChannel(_))));
    }

    #[test]
    fn test_select_single_open_channel() {
        let gammas = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        assert_eq!(select_index(&gammas, 0.5), Some(0));
        assert_eq!(select_index(&gammas, 0.0), Some(0));
        assert_eq!(select_index(&gammas, 0.999_999), Some(0));
    }

    #[test]
    fn test_select_skips_closed_channels() {
        let gammas = [0.0, 2.0, 0.0, 2.0];
        assert_eq!(select_index(&gammas, 0.0), Some(1));
        assert_eq!(select_index(&gammas, 0.5), Some(1));
        assert_eq!(select_index(&gammas, 0.51), Some(3));
    }

    #[test]
    fn test_select_all_closed() {
        assert_eq!(select_index(&[0.0, 0.0], 0.3), None);
        assert_eq!(select_index(&[], 0.3), None);
    }

    #[test]
    fn test_select_rounding_fallback() {
        // u slightly above 1 cannot be reached; the last open channel wins.
        assert_eq!(select_index(&[1.0, 1.0, 0.0], 1.000_000_1), Some(1));
    }

    #[test]
    fn test_selector_terminal_consumes_nothing() {
        let table = WidthTable::new(vec![open(0.0), open(1e-40)]);
        let mut src = SequenceSource::new(vec![0.5]);
        let sel = Selector::new(1e-30);
        assert_eq!(sel.select(&table, &mut src).unwrap(), None);
        assert_eq!(src.consumed(), 0);
    }

    #[test]
    fn test_selector_deterministic() {
        let table = WidthTable::new(vec![open(0.3), open(0.0), open(0.7)]);
        let sel = Selector::new(1e-30);
        for u in [0.1, 0.29, 0.31, 0.9] {
            let mut a = SequenceSource::new(vec![u]);
            let mut b = SequenceSource::new(vec![u]);
            assert_eq!(sel.select(&table, &mut a).unwrap(), sel.select(&table, &mut b).unwrap());
        }
        let mut src = SequenceSource::new(vec![0.9]);
        assert_eq!(sel.select(&table, &mut src).unwrap(), Some(ChannelId(2)));
    }

    #[test]
    fn test_width_table_bookkeeping() {
        let table = WidthTable::new(vec![
            open(1.0),
            Width {
                gamma: 3.0,
                converged: false,
            },
        ]);
        assert_eq!(table.total(), 4.0);
        assert_eq!(table.unconverged(), 1);
        assert!((table.branching_ratio(ChannelId(1)) - 0.75).abs() < 1e-12);
        assert_eq!(table.branching_ratio(ChannelId(9)), 0.0);
    }
}
